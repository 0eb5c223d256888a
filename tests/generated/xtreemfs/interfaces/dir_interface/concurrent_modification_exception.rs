// Generated by xdr-idlc from `xtreemfs::interfaces::DIRInterface::ConcurrentModificationException`. Do not edit.
#![allow(unused_imports, unused_variables, clippy::all)]

use xdr_idl::{Deserializer, Serializer, Xdr, opaque_size, string_size};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConcurrentModificationException {
    pub stack_trace: String,
}

impl ConcurrentModificationException {
    pub fn new(stack_trace: String) -> Self {
        Self { stack_trace }
    }
}

impl Xdr for ConcurrentModificationException {
    fn serialize<W: std::io::Write>(&self, ser: &mut Serializer<W>) -> xdr_idl::Result<()> {
        ser.write_string(&self.stack_trace)?;
        Ok(())
    }

    fn deserialize(de: &mut Deserializer<'_>) -> xdr_idl::Result<Self> {
        Ok(Self {
            stack_trace: de.read_string()?,
        })
    }

    fn size(&self) -> usize {
        string_size(&self.stack_trace)
    }
}

impl std::fmt::Display for ConcurrentModificationException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {:?}", <Self as xdr_idl::RemoteException>::TYPE_NAME, self)
    }
}

impl std::error::Error for ConcurrentModificationException {}

impl xdr_idl::RemoteException for ConcurrentModificationException {
    const TYPE_NAME: &'static str = "xtreemfs::interfaces::DIRInterface::ConcurrentModificationException";
}
