// Generated by xdr-idlc from `xtreemfs::interfaces::DIRInterface`. Do not edit.
#![allow(unused_imports, unused_variables, clippy::all)]

use xdr_idl::{Deserializer, Serializer, Xdr, opaque_size, string_size};

pub use constants::*;

pub mod address_mappings_get_request;
pub use address_mappings_get_request::AddressMappingsGetRequest;
pub use address_mappings_get_response::AddressMappingsGetResponse;
pub use address_mappings_set_request::AddressMappingsSetRequest;
pub use address_mappings_set_response::AddressMappingsSetResponse;
pub mod stat_request;
pub use stat_request::StatRequest;
pub use stat_response::StatResponse;
pub use shutdown_request::ShutdownRequest;
pub mod concurrent_modification_exception;
pub use concurrent_modification_exception::ConcurrentModificationException;
pub mod protocol_exception;
pub use protocol_exception::ProtocolException;

pub const INTERFACE_VERSION: u32 = 10001;
pub const PROGRAM_NUMBER: u32 = 0x20002711;

pub fn version() -> u32 {
    INTERFACE_VERSION
}

pub fn program_number() -> u32 {
    PROGRAM_NUMBER
}

#[derive(Debug, Clone, PartialEq)]
pub enum DirInterfaceRequest {
    AddressMappingsGet(crate::generated::xtreemfs::interfaces::dir_interface::AddressMappingsGetRequest),
    AddressMappingsSet(crate::generated::xtreemfs::interfaces::dir_interface::AddressMappingsSetRequest),
    Stat(crate::generated::xtreemfs::interfaces::dir_interface::StatRequest),
    Shutdown(crate::generated::xtreemfs::interfaces::dir_interface::ShutdownRequest),
}

impl DirInterfaceRequest {
    /// An empty request for `operation_number`.
    pub fn create(operation_number: u32) -> xdr_idl::Result<Self> {
        match operation_number {
            1 => Ok(DirInterfaceRequest::AddressMappingsGet(crate::generated::xtreemfs::interfaces::dir_interface::AddressMappingsGetRequest::default())),
            2 => Ok(DirInterfaceRequest::AddressMappingsSet(crate::generated::xtreemfs::interfaces::dir_interface::AddressMappingsSetRequest::default())),
            3 => Ok(DirInterfaceRequest::Stat(crate::generated::xtreemfs::interfaces::dir_interface::StatRequest::default())),
            50 => Ok(DirInterfaceRequest::Shutdown(crate::generated::xtreemfs::interfaces::dir_interface::ShutdownRequest::default())),
            _ => Err(xdr_idl::Error::UnknownOperation { interface: "xtreemfs::interfaces::DIRInterface".to_owned(), operation_number }),
        }
    }

    pub fn decode(operation_number: u32, de: &mut Deserializer<'_>) -> xdr_idl::Result<Self> {
        match operation_number {
            1 => Ok(DirInterfaceRequest::AddressMappingsGet(<crate::generated::xtreemfs::interfaces::dir_interface::AddressMappingsGetRequest as Xdr>::deserialize(de)?)),
            2 => Ok(DirInterfaceRequest::AddressMappingsSet(<crate::generated::xtreemfs::interfaces::dir_interface::AddressMappingsSetRequest as Xdr>::deserialize(de)?)),
            3 => Ok(DirInterfaceRequest::Stat(<crate::generated::xtreemfs::interfaces::dir_interface::StatRequest as Xdr>::deserialize(de)?)),
            50 => Ok(DirInterfaceRequest::Shutdown(<crate::generated::xtreemfs::interfaces::dir_interface::ShutdownRequest as Xdr>::deserialize(de)?)),
            _ => Err(xdr_idl::Error::UnknownOperation { interface: "xtreemfs::interfaces::DIRInterface".to_owned(), operation_number }),
        }
    }

    pub fn operation_number(&self) -> u32 {
        match self {
            DirInterfaceRequest::AddressMappingsGet(_) => <crate::generated::xtreemfs::interfaces::dir_interface::AddressMappingsGetRequest as xdr_idl::Request>::OPERATION_NUMBER,
            DirInterfaceRequest::AddressMappingsSet(_) => <crate::generated::xtreemfs::interfaces::dir_interface::AddressMappingsSetRequest as xdr_idl::Request>::OPERATION_NUMBER,
            DirInterfaceRequest::Stat(_) => <crate::generated::xtreemfs::interfaces::dir_interface::StatRequest as xdr_idl::Request>::OPERATION_NUMBER,
            DirInterfaceRequest::Shutdown(_) => <crate::generated::xtreemfs::interfaces::dir_interface::ShutdownRequest as xdr_idl::Request>::OPERATION_NUMBER,
        }
    }

    /// The empty response paired with this request, `None` for oneway operations.
    pub fn create_default_response(&self) -> Option<DirInterfaceResponse> {
        match self {
            DirInterfaceRequest::AddressMappingsGet(request) => Some(DirInterfaceResponse::AddressMappingsGet(request.create_default_response())),
            DirInterfaceRequest::AddressMappingsSet(request) => Some(DirInterfaceResponse::AddressMappingsSet(request.create_default_response())),
            DirInterfaceRequest::Stat(request) => Some(DirInterfaceResponse::Stat(request.create_default_response())),
            DirInterfaceRequest::Shutdown(_) => None,
        }
    }

    pub fn serialize<W: std::io::Write>(&self, ser: &mut Serializer<W>) -> xdr_idl::Result<()> {
        match self {
            DirInterfaceRequest::AddressMappingsGet(value) => Xdr::serialize(value, ser),
            DirInterfaceRequest::AddressMappingsSet(value) => Xdr::serialize(value, ser),
            DirInterfaceRequest::Stat(value) => Xdr::serialize(value, ser),
            DirInterfaceRequest::Shutdown(value) => Xdr::serialize(value, ser),
        }
    }

    pub fn size(&self) -> usize {
        match self {
            DirInterfaceRequest::AddressMappingsGet(value) => Xdr::size(value),
            DirInterfaceRequest::AddressMappingsSet(value) => Xdr::size(value),
            DirInterfaceRequest::Stat(value) => Xdr::size(value),
            DirInterfaceRequest::Shutdown(value) => Xdr::size(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DirInterfaceResponse {
    AddressMappingsGet(crate::generated::xtreemfs::interfaces::dir_interface::AddressMappingsGetResponse),
    AddressMappingsSet(crate::generated::xtreemfs::interfaces::dir_interface::AddressMappingsSetResponse),
    Stat(crate::generated::xtreemfs::interfaces::dir_interface::StatResponse),
}

impl DirInterfaceResponse {
    pub fn create(operation_number: u32) -> xdr_idl::Result<Self> {
        match operation_number {
            1 => Ok(DirInterfaceResponse::AddressMappingsGet(crate::generated::xtreemfs::interfaces::dir_interface::AddressMappingsGetResponse::default())),
            2 => Ok(DirInterfaceResponse::AddressMappingsSet(crate::generated::xtreemfs::interfaces::dir_interface::AddressMappingsSetResponse::default())),
            3 => Ok(DirInterfaceResponse::Stat(crate::generated::xtreemfs::interfaces::dir_interface::StatResponse::default())),
            _ => Err(xdr_idl::Error::UnknownResponse { interface: "xtreemfs::interfaces::DIRInterface".to_owned(), operation_number }),
        }
    }

    pub fn decode(operation_number: u32, de: &mut Deserializer<'_>) -> xdr_idl::Result<Self> {
        match operation_number {
            1 => Ok(DirInterfaceResponse::AddressMappingsGet(<crate::generated::xtreemfs::interfaces::dir_interface::AddressMappingsGetResponse as Xdr>::deserialize(de)?)),
            2 => Ok(DirInterfaceResponse::AddressMappingsSet(<crate::generated::xtreemfs::interfaces::dir_interface::AddressMappingsSetResponse as Xdr>::deserialize(de)?)),
            3 => Ok(DirInterfaceResponse::Stat(<crate::generated::xtreemfs::interfaces::dir_interface::StatResponse as Xdr>::deserialize(de)?)),
            _ => Err(xdr_idl::Error::UnknownResponse { interface: "xtreemfs::interfaces::DIRInterface".to_owned(), operation_number }),
        }
    }

    pub fn operation_number(&self) -> u32 {
        match self {
            DirInterfaceResponse::AddressMappingsGet(_) => <crate::generated::xtreemfs::interfaces::dir_interface::AddressMappingsGetResponse as xdr_idl::Response>::OPERATION_NUMBER,
            DirInterfaceResponse::AddressMappingsSet(_) => <crate::generated::xtreemfs::interfaces::dir_interface::AddressMappingsSetResponse as xdr_idl::Response>::OPERATION_NUMBER,
            DirInterfaceResponse::Stat(_) => <crate::generated::xtreemfs::interfaces::dir_interface::StatResponse as xdr_idl::Response>::OPERATION_NUMBER,
        }
    }

    pub fn serialize<W: std::io::Write>(&self, ser: &mut Serializer<W>) -> xdr_idl::Result<()> {
        match self {
            DirInterfaceResponse::AddressMappingsGet(value) => Xdr::serialize(value, ser),
            DirInterfaceResponse::AddressMappingsSet(value) => Xdr::serialize(value, ser),
            DirInterfaceResponse::Stat(value) => Xdr::serialize(value, ser),
        }
    }

    pub fn size(&self) -> usize {
        match self {
            DirInterfaceResponse::AddressMappingsGet(value) => Xdr::size(value),
            DirInterfaceResponse::AddressMappingsSet(value) => Xdr::size(value),
            DirInterfaceResponse::Stat(value) => Xdr::size(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DirInterfaceException {
    ConcurrentModificationException(crate::generated::xtreemfs::interfaces::dir_interface::ConcurrentModificationException),
    ProtocolException(crate::generated::xtreemfs::interfaces::dir_interface::ProtocolException),
}

impl DirInterfaceException {
    pub fn create(type_name: &str) -> xdr_idl::Result<Self> {
        match type_name {
            "xtreemfs::interfaces::DIRInterface::ConcurrentModificationException" => Ok(DirInterfaceException::ConcurrentModificationException(crate::generated::xtreemfs::interfaces::dir_interface::ConcurrentModificationException::default())),
            "xtreemfs::interfaces::DIRInterface::ProtocolException" => Ok(DirInterfaceException::ProtocolException(crate::generated::xtreemfs::interfaces::dir_interface::ProtocolException::default())),
            _ => Err(xdr_idl::Error::UnknownException { interface: "xtreemfs::interfaces::DIRInterface".to_owned(), type_name: type_name.to_owned() }),
        }
    }

    pub fn decode(type_name: &str, de: &mut Deserializer<'_>) -> xdr_idl::Result<Self> {
        match type_name {
            "xtreemfs::interfaces::DIRInterface::ConcurrentModificationException" => Ok(DirInterfaceException::ConcurrentModificationException(<crate::generated::xtreemfs::interfaces::dir_interface::ConcurrentModificationException as Xdr>::deserialize(de)?)),
            "xtreemfs::interfaces::DIRInterface::ProtocolException" => Ok(DirInterfaceException::ProtocolException(<crate::generated::xtreemfs::interfaces::dir_interface::ProtocolException as Xdr>::deserialize(de)?)),
            _ => Err(xdr_idl::Error::UnknownException { interface: "xtreemfs::interfaces::DIRInterface".to_owned(), type_name: type_name.to_owned() }),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            DirInterfaceException::ConcurrentModificationException(_) => <crate::generated::xtreemfs::interfaces::dir_interface::ConcurrentModificationException as xdr_idl::RemoteException>::TYPE_NAME,
            DirInterfaceException::ProtocolException(_) => <crate::generated::xtreemfs::interfaces::dir_interface::ProtocolException as xdr_idl::RemoteException>::TYPE_NAME,
        }
    }

    pub fn serialize<W: std::io::Write>(&self, ser: &mut Serializer<W>) -> xdr_idl::Result<()> {
        match self {
            DirInterfaceException::ConcurrentModificationException(value) => Xdr::serialize(value, ser),
            DirInterfaceException::ProtocolException(value) => Xdr::serialize(value, ser),
        }
    }

    pub fn size(&self) -> usize {
        match self {
            DirInterfaceException::ConcurrentModificationException(value) => Xdr::size(value),
            DirInterfaceException::ProtocolException(value) => Xdr::size(value),
        }
    }
}

impl std::fmt::Display for DirInterfaceException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DirInterfaceException::ConcurrentModificationException(exception) => std::fmt::Display::fmt(exception, f),
            DirInterfaceException::ProtocolException(exception) => std::fmt::Display::fmt(exception, f),
        }
    }
}

impl std::error::Error for DirInterfaceException {}
