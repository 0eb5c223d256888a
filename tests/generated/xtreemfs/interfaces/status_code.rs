// Generated by xdr-idlc from `xtreemfs::interfaces::StatusCode`. Do not edit.
#![allow(unused_imports, unused_variables, clippy::all)]

use xdr_idl::{Deserializer, Serializer, Xdr, opaque_size, string_size};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(i32)]
pub enum StatusCode {
    #[default]
    Ok = 0,
    NotFound = 2,
    Denied = -1,
}

impl From<StatusCode> for i32 {
    fn from(value: StatusCode) -> i32 {
        value as i32
    }
}

impl TryFrom<i32> for StatusCode {
    type Error = xdr_idl::Error;

    fn try_from(value: i32) -> xdr_idl::Result<Self> {
        match value {
            0 => Ok(StatusCode::Ok),
            2 => Ok(StatusCode::NotFound),
            -1 => Ok(StatusCode::Denied),
            _ => Err(xdr_idl::Error::InvalidEnumValue { type_name: "xtreemfs::interfaces::StatusCode".to_owned(), value }),
        }
    }
}

impl Xdr for StatusCode {
    fn serialize<W: std::io::Write>(&self, ser: &mut Serializer<W>) -> xdr_idl::Result<()> {
        ser.write_enum(i32::from(*self))?;
        Ok(())
    }

    fn deserialize(de: &mut Deserializer<'_>) -> xdr_idl::Result<Self> {
        Self::try_from(de.read_enum()?)
    }

    fn size(&self) -> usize {
        4
    }
}
