//! Primitive type names and their C-style aliases.

use super::types::{Numeric, Type};

/// Resolve a primitive type name, or `None` if `name` is not a primitive.
pub fn lookup(name: &str) -> Option<Type> {
    let ty = match name {
        "bool" | "boolean" => Type::Bool,
        "string" | "char*" => Type::String { wide: false },
        "wstring" => Type::String { wide: true },
        "buffer" | "opaque" | "bytes" => Type::Buffer,
        "float" => Type::Numeric(Numeric::F32),
        "double" => Type::Numeric(Numeric::F64),
        "char" => Type::Numeric(Numeric::I8),
        "octet" | "byte" => Type::Numeric(Numeric::U8),
        "short" => Type::Numeric(Numeric::I16),
        "int" | "long" => Type::Numeric(Numeric::I32),
        "hyper" => Type::Numeric(Numeric::I64),
        "mode_t" | "uid_t" | "gid_t" => Type::Numeric(Numeric::U32),
        "size_t" | "off_t" | "ino_t" | "dev_t" => Type::Numeric(Numeric::U64),
        "ssize_t" | "time_t" => Type::Numeric(Numeric::I64),
        other => return integer_alias(other).map(Type::Numeric),
    };
    Some(ty)
}

/// `int32`, `uint64_t`, and friends.
fn integer_alias(name: &str) -> Option<Numeric> {
    let name = name.strip_suffix("_t").unwrap_or(name);
    let numeric = match name {
        "int8" => Numeric::I8,
        "uint8" => Numeric::U8,
        "int16" => Numeric::I16,
        "uint16" => Numeric::U16,
        "int32" => Numeric::I32,
        "uint32" => Numeric::U32,
        "int64" => Numeric::I64,
        "uint64" => Numeric::U64,
        _ => return None,
    };
    Some(numeric)
}
