use crate::error::{Error, Result};
use crate::model::{StructType, Type, TypeGraph, TypeId};

/// A value of any type in a [`TypeGraph`], untyped until paired with a
/// [`TypeId`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    /// Any signed integer type.
    Int(i64),
    /// Any unsigned integer type.
    UInt(u64),
    /// `float` or `double`.
    Float(f64),
    String(String),
    Buffer(Vec<u8>),
    /// Enum ordinal.
    Enum(i32),
    /// Struct, exception, request or response, members in declaration order.
    Struct {
        type_name: String,
        fields: Vec<(String, Value)>,
    },
    Sequence(Vec<Value>),
    /// Pairs in encoding order.
    Map(Vec<(Value, Value)>),
}

impl Value {
    /// The empty value of a type: zero, false, empty, or the first enumerator.
    pub fn default_for(graph: &TypeGraph, id: TypeId) -> Result<Value> {
        let value = match graph.get(id) {
            Type::Bool => Value::Bool(false),
            Type::Numeric(n) if n.is_float() => Value::Float(0.0),
            Type::Numeric(n) if n.is_signed() => Value::Int(0),
            Type::Numeric(_) => Value::UInt(0),
            Type::String { .. } => Value::String(String::new()),
            Type::Buffer => Value::Buffer(Vec::new()),
            Type::Enum(e) => Value::Enum(e.enumerators.first().map_or(0, |e| e.value)),
            Type::Struct(s) => Value::default_struct(graph, s)?,
            Type::Sequence(_) => Value::Sequence(Vec::new()),
            Type::Map(_) => Value::Map(Vec::new()),
            Type::Forward(name) => return Err(Error::TypeMismatch(name.to_string())),
        };
        Ok(value)
    }

    pub fn default_struct(graph: &TypeGraph, s: &StructType) -> Result<Value> {
        let fields = s
            .members
            .iter()
            .map(|m| Ok((m.name.clone(), Value::default_for(graph, m.ty)?)))
            .collect::<Result<_>>()?;
        Ok(Value::Struct {
            type_name: s.name.to_string(),
            fields,
        })
    }

    /// A struct member by name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Struct { fields, .. } => {
                fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
            }
            _ => None,
        }
    }

    pub fn type_name(&self) -> Option<&str> {
        match self {
            Value::Struct { type_name, .. } => Some(type_name),
            _ => None,
        }
    }
}
