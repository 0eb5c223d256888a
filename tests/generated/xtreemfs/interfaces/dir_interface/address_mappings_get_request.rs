// Generated by xdr-idlc from `xtreemfs::interfaces::DIRInterface::address_mappings_getRequest`. Do not edit.
#![allow(unused_imports, unused_variables, clippy::all)]

use xdr_idl::{Deserializer, Serializer, Xdr, opaque_size, string_size};

/// Inbound parameters of `xtreemfs::interfaces::DIRInterface::address_mappings_get`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AddressMappingsGetRequest {
    pub uuid: String,
}

impl AddressMappingsGetRequest {
    pub fn new(uuid: String) -> Self {
        Self { uuid }
    }

    /// An empty response for this request.
    pub fn create_default_response(&self) -> crate::generated::xtreemfs::interfaces::dir_interface::AddressMappingsGetResponse {
        crate::generated::xtreemfs::interfaces::dir_interface::AddressMappingsGetResponse::default()
    }
}

impl Xdr for AddressMappingsGetRequest {
    fn serialize<W: std::io::Write>(&self, ser: &mut Serializer<W>) -> xdr_idl::Result<()> {
        ser.write_string(&self.uuid)?;
        Ok(())
    }

    fn deserialize(de: &mut Deserializer<'_>) -> xdr_idl::Result<Self> {
        Ok(Self {
            uuid: de.read_string()?,
        })
    }

    fn size(&self) -> usize {
        string_size(&self.uuid)
    }
}

impl xdr_idl::Request for AddressMappingsGetRequest {
    const OPERATION_NUMBER: u32 = 1;
}
