use thiserror::Error as ThisError;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the wire runtime and by generated codecs.
///
/// Decode failures carry enough context (type name, tag, offending
/// count or value) for the RPC layer to log or reject the connection.
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum Error {
    /// Attempted to read past the end of the input buffer
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// A string contained bytes that are not valid UTF-8
    #[error("string contains invalid bytes")]
    InvalidString,

    /// An enum ordinal that names no enumerator
    #[error("{type_name}: invalid enum value {value}")]
    InvalidEnumValue { type_name: String, value: i32 },

    /// A sequence or map declared (or was asked to hold) more elements than allowed
    #[error("{type_name}: element count {got} exceeds maximum {max}")]
    CountExceeded {
        type_name: String,
        max: u32,
        got: u64,
    },

    /// A length does not fit the 4-byte length prefix
    #[error("length {got} exceeds maximum {max}")]
    LengthOverflow { max: u32, got: u64 },

    /// A decoded map repeated a key
    #[error("{type_name}: duplicate map key")]
    DuplicateMapKey { type_name: String },

    /// No request type is registered for the operation number
    #[error("{interface}: unknown request number {operation_number}")]
    UnknownOperation {
        interface: String,
        operation_number: u32,
    },

    /// No response type is registered for the operation number
    #[error("{interface}: unknown response number {operation_number}")]
    UnknownResponse {
        interface: String,
        operation_number: u32,
    },

    /// No exception type is registered under the name
    #[error("{interface}: unknown exception type {type_name}")]
    UnknownException { interface: String, type_name: String },

    /// A dynamic value does not have the shape its type requires
    #[error("value does not match type {0}")]
    TypeMismatch(String),

    /// An I/O error occurred during reading or writing
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

/// Fatal errors detected while building or emitting a type graph.
///
/// These abort generation; nothing is emitted once one is raised.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum GenError {
    #[error("{kind} {name} requires a positive 32-bit UID (current uid = {uid})")]
    NonPositiveUid {
        kind: &'static str,
        name: String,
        uid: i64,
    },

    #[error("{kind} {name} reuses UID {uid} already assigned to {other}")]
    DuplicateUid {
        kind: &'static str,
        name: String,
        uid: u32,
        other: String,
    },

    #[error("{operation}: parameter {param} is neither inbound nor outbound")]
    MalformedParameter { operation: String, param: String },

    #[error("oneway operation {operation} cannot have outbound parameters or a return value")]
    OnewayWithResults { operation: String },

    #[error("{scope}: unknown type {name}")]
    UnknownType { scope: String, name: String },

    #[error("{scope}: duplicate declaration of {name}")]
    DuplicateName { scope: String, name: String },

    #[error("{name}: typedef cycle")]
    AliasCycle { name: String },

    #[error("{name}: map types are not supported as wire types by this target")]
    UnsupportedMap { name: String },

    #[error("{name}: map key type {key} has no total order")]
    UnorderedMapKey { name: String, key: String },

    #[error("{name}: enum declares no enumerators")]
    EmptyEnum { name: String },

    #[error("{name}: enumerator {enumerator} has invalid or duplicate value {value}")]
    DuplicateEnumValue {
        name: String,
        enumerator: String,
        value: i64,
    },

    #[error("constant {name}: {reason}")]
    InvalidConstant { name: String, reason: String },
}
