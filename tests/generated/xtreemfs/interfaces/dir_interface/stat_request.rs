// Generated by xdr-idlc from `xtreemfs::interfaces::DIRInterface::statRequest`. Do not edit.
#![allow(unused_imports, unused_variables, clippy::all)]

use xdr_idl::{Deserializer, Serializer, Xdr, opaque_size, string_size};

/// Inbound parameters of `xtreemfs::interfaces::DIRInterface::stat`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StatRequest {
    pub inode: u64,
    pub stbuf: crate::generated::xtreemfs::interfaces::Stat,
}

impl StatRequest {
    pub fn new(inode: u64, stbuf: crate::generated::xtreemfs::interfaces::Stat) -> Self {
        Self { inode, stbuf }
    }

    /// An empty response for this request.
    pub fn create_default_response(&self) -> crate::generated::xtreemfs::interfaces::dir_interface::StatResponse {
        crate::generated::xtreemfs::interfaces::dir_interface::StatResponse::default()
    }
}

impl Xdr for StatRequest {
    fn serialize<W: std::io::Write>(&self, ser: &mut Serializer<W>) -> xdr_idl::Result<()> {
        ser.write_u64(self.inode)?;
        Xdr::serialize(&self.stbuf, ser)?;
        Ok(())
    }

    fn deserialize(de: &mut Deserializer<'_>) -> xdr_idl::Result<Self> {
        Ok(Self {
            inode: de.read_u64()?,
            stbuf: <crate::generated::xtreemfs::interfaces::Stat as Xdr>::deserialize(de)?,
        })
    }

    fn size(&self) -> usize {
        8 + Xdr::size(&self.stbuf)
    }
}

impl xdr_idl::Request for StatRequest {
    const OPERATION_NUMBER: u32 = 3;
}
