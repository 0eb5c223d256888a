use super::{Value, ValueCodec};
use crate::codegen::naming;
use crate::config::GenConfig;
use crate::de::Deserializer;
use crate::error::{Error, Result};
use crate::model::{Interface, Operation, StructType, Type, TypeGraph};
use std::collections::BTreeMap;

/// Runtime counterpart of an interface's generated dispatch enums.
///
/// Requests and responses are keyed by operation number, exceptions by
/// fully-qualified type name. Oneway operations have no response entry.
pub struct DispatchTable<'g> {
    interface: &'g Interface,
    codec: ValueCodec<'g>,
    requests: BTreeMap<u32, &'g Operation>,
    responses: BTreeMap<u32, &'g StructType>,
    exceptions: BTreeMap<String, &'g StructType>,
}

impl<'g> DispatchTable<'g> {
    pub fn new(graph: &'g TypeGraph, config: &'g GenConfig, interface: &'g Interface) -> Self {
        let mut requests = BTreeMap::new();
        let mut responses = BTreeMap::new();
        for op in &interface.operations {
            requests.insert(op.uid, op);
            if let Some(response) = op.response_type() {
                responses.insert(op.uid, response);
            }
        }

        let mut exceptions = BTreeMap::new();
        for id in &interface.exceptions {
            if let Type::Struct(s) = graph.get(*id) {
                exceptions.insert(naming::wire_name(config, &s.name), s);
            }
        }

        tracing::debug!(
            interface = %interface.name,
            requests = requests.len(),
            responses = responses.len(),
            exceptions = exceptions.len(),
            "dispatch table built"
        );
        DispatchTable {
            interface,
            codec: ValueCodec::new(graph, config),
            requests,
            responses,
            exceptions,
        }
    }

    pub fn interface(&self) -> &'g Interface {
        self.interface
    }

    pub fn codec(&self) -> &ValueCodec<'g> {
        &self.codec
    }

    /// Operation numbers with a request entry, ascending.
    pub fn request_numbers(&self) -> impl Iterator<Item = u32> + '_ {
        self.requests.keys().copied()
    }

    /// Operation numbers with a response entry, ascending.
    pub fn response_numbers(&self) -> impl Iterator<Item = u32> + '_ {
        self.responses.keys().copied()
    }

    pub fn exception_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.exceptions.keys().map(String::as_str)
    }

    fn operation(&self, operation_number: u32) -> Result<&'g Operation> {
        self.requests
            .get(&operation_number)
            .copied()
            .ok_or_else(|| Error::UnknownOperation {
                interface: self.interface.name.to_string(),
                operation_number,
            })
    }

    fn response(&self, operation_number: u32) -> Result<&'g StructType> {
        self.responses
            .get(&operation_number)
            .copied()
            .ok_or_else(|| Error::UnknownResponse {
                interface: self.interface.name.to_string(),
                operation_number,
            })
    }

    fn exception(&self, type_name: &str) -> Result<&'g StructType> {
        self.exceptions
            .get(type_name)
            .copied()
            .ok_or_else(|| Error::UnknownException {
                interface: self.interface.name.to_string(),
                type_name: type_name.to_owned(),
            })
    }

    /// An empty request for `operation_number`.
    pub fn request_factory(&self, operation_number: u32) -> Result<Value> {
        Value::default_struct(self.codec.graph(), self.operation(operation_number)?.request_type())
    }

    /// An empty response for `operation_number`.
    pub fn response_factory(&self, operation_number: u32) -> Result<Value> {
        Value::default_struct(self.codec.graph(), self.response(operation_number)?)
    }

    /// An empty exception registered under `type_name`.
    pub fn exception_factory(&self, type_name: &str) -> Result<Value> {
        Value::default_struct(self.codec.graph(), self.exception(type_name)?)
    }

    /// The empty response a request of `operation_number` is answered with,
    /// `None` for oneway operations.
    pub fn default_response(&self, operation_number: u32) -> Result<Option<Value>> {
        match self.operation(operation_number)?.response_type() {
            Some(response) => Ok(Some(Value::default_struct(self.codec.graph(), response)?)),
            None => Ok(None),
        }
    }

    pub fn decode_request(
        &self,
        operation_number: u32,
        de: &mut Deserializer<'_>,
    ) -> Result<Value> {
        let op = self.operation(operation_number)?;
        self.codec.deserialize_struct(op.request_type(), de)
    }

    pub fn decode_response(
        &self,
        operation_number: u32,
        de: &mut Deserializer<'_>,
    ) -> Result<Value> {
        let response = self.response(operation_number)?;
        self.codec.deserialize_struct(response, de)
    }

    pub fn decode_exception(&self, type_name: &str, de: &mut Deserializer<'_>) -> Result<Value> {
        let exception = self.exception(type_name)?;
        self.codec.deserialize_struct(exception, de)
    }

    pub fn encode_request(&self, operation_number: u32, request: &Value) -> Result<Vec<u8>> {
        let op = self.operation(operation_number)?;
        self.encode(op.request_type(), request)
    }

    pub fn encode_response(&self, operation_number: u32, response: &Value) -> Result<Vec<u8>> {
        let ty = self.response(operation_number)?;
        self.encode(ty, response)
    }

    fn encode(&self, ty: &StructType, value: &Value) -> Result<Vec<u8>> {
        let size = self.codec.size_struct(ty, value)?;
        let mut ser = crate::Serializer::new(Vec::with_capacity(size));
        self.codec.serialize_struct(ty, value, &mut ser)?;
        Ok(ser.into_writer())
    }
}
