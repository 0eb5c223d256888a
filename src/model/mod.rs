//! The type model: the parsed IDL document, and the validated graph built from it.

mod builder;
pub mod graph;
pub mod idl;
pub mod primitive;
pub mod types;

pub use builder::build;
pub use graph::{Constant, Interface, Module, Operation, Param, RETURN_VALUE, TypeGraph};
pub use idl::{ConstantValue, Document};
pub use types::{
    EnumType, Enumerator, MapType, Member, Numeric, QualifiedName, SequenceType, StructKind,
    StructType, Type, TypeId,
};
