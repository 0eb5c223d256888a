//! The type trait registry.
//!
//! [`Registry::traits`] maps a type in the graph to its codec strategy, a
//! [`TypeTraits`] value that knows how to emit the serialize, deserialize and
//! size code for that kind of type. Resolution is a closed `match` over
//! [`Type`]: primitives get their own strategies, every compound type
//! (including forward-declared ones) gets the compound strategy, and maps are
//! checked against the configured [`MapPolicy`].
//!
//! Emitted code assumes `ser`/`de` are in scope and that the unit imports
//! `Xdr`, `string_size` and `opaque_size` from the runtime crate.

use crate::codegen::naming;
use crate::config::{GenConfig, MapPolicy};
use crate::error::GenError;
use crate::model::{ConstantValue, Numeric, QualifiedName, Type, TypeGraph, TypeId};

pub struct Registry<'g> {
    graph: &'g TypeGraph,
    config: &'g GenConfig,
}

impl<'g> Registry<'g> {
    pub fn new(graph: &'g TypeGraph, config: &'g GenConfig) -> Self {
        Registry { graph, config }
    }

    pub fn graph(&self) -> &'g TypeGraph {
        self.graph
    }

    pub fn config(&self) -> &'g GenConfig {
        self.config
    }

    /// Resolve the codec strategy for `id`.
    pub fn traits(&self, id: TypeId) -> Result<TypeTraits, GenError> {
        let traits = match self.graph.get(id) {
            Type::Bool => TypeTraits::Bool,
            Type::Numeric(n) => TypeTraits::Numeric(*n),
            Type::String { .. } => TypeTraits::String,
            Type::Buffer => TypeTraits::Buffer,
            Type::Enum(e) => TypeTraits::Enum {
                path: self.path(&e.name),
            },
            Type::Map(m) if self.config.map_policy == MapPolicy::Reject => {
                return Err(GenError::UnsupportedMap {
                    name: m.name.to_string(),
                });
            }
            Type::Struct(s) => self.compound(&s.name),
            Type::Sequence(s) => self.compound(&s.name),
            Type::Map(m) => self.compound(&m.name),
            Type::Forward(name) => self.compound(name),
        };
        Ok(traits)
    }

    /// Strategy for a named compound type, including synthesized request and
    /// response structs that live outside the arena.
    pub fn compound(&self, name: &QualifiedName) -> TypeTraits {
        TypeTraits::Compound {
            path: self.path(name),
        }
    }

    pub fn path(&self, name: &QualifiedName) -> String {
        naming::type_path(self.config, name)
    }
}

/// A codec strategy. `ident` arguments are Rust place expressions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeTraits {
    /// 4-byte 0/1.
    Bool,
    Numeric(Numeric),
    String,
    Buffer,
    Enum { path: String },
    /// Struct, exception, request, response, sequence, map or forward type.
    Compound { path: String },
}

impl TypeTraits {
    /// Statement writing `ident`.
    pub fn serialize(&self, ident: &str) -> String {
        match self {
            TypeTraits::Bool => format!("ser.write_bool({ident})?;"),
            TypeTraits::Numeric(n) => format!("ser.write_{}({ident})?;", n.rust_name()),
            TypeTraits::String => format!("ser.write_string(&{ident})?;"),
            TypeTraits::Buffer => format!("ser.write_opaque(&{ident})?;"),
            TypeTraits::Enum { .. } => format!("ser.write_enum(i32::from({ident}))?;"),
            TypeTraits::Compound { .. } => format!("Xdr::serialize(&{ident}, ser)?;"),
        }
    }

    /// Expression reading a fresh value.
    pub fn read_expr(&self) -> String {
        match self {
            TypeTraits::Bool => "de.read_bool()?".to_owned(),
            TypeTraits::Numeric(n) => format!("de.read_{}()?", n.rust_name()),
            TypeTraits::String => "de.read_string()?".to_owned(),
            TypeTraits::Buffer => "de.read_opaque()?".to_owned(),
            TypeTraits::Enum { path } => format!("{path}::try_from(de.read_enum()?)?"),
            TypeTraits::Compound { path } => format!("<{path} as Xdr>::deserialize(de)?"),
        }
    }

    /// Statement binding a freshly read value to `ident`.
    pub fn deserialize(&self, ident: &str) -> String {
        format!("let {ident} = {};", self.read_expr())
    }

    /// Expression computing the exact wire size of `ident`.
    pub fn size(&self, ident: &str) -> String {
        match self.fixed_size() {
            Some(size) => size.to_string(),
            None => match self {
                TypeTraits::String => format!("string_size(&{ident})"),
                TypeTraits::Buffer => format!("opaque_size(&{ident})"),
                _ => format!("Xdr::size(&{ident})"),
            },
        }
    }

    /// Wire size shared by every value of the type, if there is one.
    pub fn fixed_size(&self) -> Option<usize> {
        match self {
            TypeTraits::Bool | TypeTraits::Enum { .. } => Some(4),
            TypeTraits::Numeric(n) => Some(n.width()),
            TypeTraits::String | TypeTraits::Buffer | TypeTraits::Compound { .. } => None,
        }
    }

    /// The Rust type of a struct member holding this type.
    pub fn declaration_type(&self) -> String {
        match self {
            TypeTraits::Bool => "bool".to_owned(),
            TypeTraits::Numeric(n) => n.rust_name().to_owned(),
            TypeTraits::String => "String".to_owned(),
            TypeTraits::Buffer => "Vec<u8>".to_owned(),
            TypeTraits::Enum { path } | TypeTraits::Compound { path } => path.clone(),
        }
    }

    /// The Rust type in generic argument position (sequence elements, map
    /// keys and values). Identical to the declaration type: Rust needs no
    /// boxing to put primitives in a container.
    pub fn boxed_type(&self) -> String {
        self.declaration_type()
    }

    /// Rust type of a `pub const` of this type, `None` where constants are not allowed.
    pub fn constant_type(&self) -> Option<String> {
        match self {
            TypeTraits::Bool | TypeTraits::Numeric(_) => Some(self.declaration_type()),
            TypeTraits::String => Some("&str".to_owned()),
            _ => None,
        }
    }

    /// Rust literal for a constant value already checked against the type.
    pub fn constant_literal(&self, value: &ConstantValue) -> Option<String> {
        let literal = match (self, value) {
            (TypeTraits::Bool, ConstantValue::Bool(b)) => b.to_string(),
            (TypeTraits::Numeric(n), ConstantValue::Integer(v)) if n.is_float() => {
                format!("{:?}", *v as f64)
            }
            (TypeTraits::Numeric(n), ConstantValue::UInt(v)) if n.is_float() => {
                format!("{:?}", *v as f64)
            }
            (TypeTraits::Numeric(_), ConstantValue::Integer(v)) => v.to_string(),
            (TypeTraits::Numeric(_), ConstantValue::UInt(v)) => v.to_string(),
            (TypeTraits::Numeric(n), ConstantValue::Float(v)) if n.is_float() => format!("{v:?}"),
            (TypeTraits::String, ConstantValue::String(s)) => format!("{s:?}"),
            _ => return None,
        };
        Some(literal)
    }
}
