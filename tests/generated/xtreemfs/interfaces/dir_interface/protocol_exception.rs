// Generated by xdr-idlc from `xtreemfs::interfaces::DIRInterface::ProtocolException`. Do not edit.
#![allow(unused_imports, unused_variables, clippy::all)]

use xdr_idl::{Deserializer, Serializer, Xdr, opaque_size, string_size};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProtocolException {
    pub accept_stat: u32,
    pub error_code: u32,
    pub stack_trace: String,
}

impl ProtocolException {
    pub fn new(accept_stat: u32, error_code: u32, stack_trace: String) -> Self {
        Self { accept_stat, error_code, stack_trace }
    }
}

impl Xdr for ProtocolException {
    fn serialize<W: std::io::Write>(&self, ser: &mut Serializer<W>) -> xdr_idl::Result<()> {
        ser.write_u32(self.accept_stat)?;
        ser.write_u32(self.error_code)?;
        ser.write_string(&self.stack_trace)?;
        Ok(())
    }

    fn deserialize(de: &mut Deserializer<'_>) -> xdr_idl::Result<Self> {
        Ok(Self {
            accept_stat: de.read_u32()?,
            error_code: de.read_u32()?,
            stack_trace: de.read_string()?,
        })
    }

    fn size(&self) -> usize {
        8 + string_size(&self.stack_trace)
    }
}

impl std::fmt::Display for ProtocolException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {:?}", <Self as xdr_idl::RemoteException>::TYPE_NAME, self)
    }
}

impl std::error::Error for ProtocolException {}

impl xdr_idl::RemoteException for ProtocolException {
    const TYPE_NAME: &'static str = "xtreemfs::interfaces::DIRInterface::ProtocolException";
}
