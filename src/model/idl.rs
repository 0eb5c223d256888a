//! The parsed IDL document, as handed over by the external parser.
//!
//! Type references are plain strings (`"uint32"`, `"AddressMapping"`,
//! `"xtreemfs::interfaces::AddressMapping"`); they are resolved against the
//! module tree by [`build`](super::build).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Document {
    #[serde(default)]
    pub modules: Vec<ModuleDecl>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModuleDecl {
    pub name: String,
    #[serde(default)]
    pub modules: Vec<ModuleDecl>,
    #[serde(default)]
    pub types: Vec<TypeDecl>,
    #[serde(default)]
    pub interfaces: Vec<InterfaceDecl>,
    #[serde(default)]
    pub constants: Vec<ConstantDecl>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InterfaceDecl {
    pub name: String,
    pub uid: i64,
    #[serde(default)]
    pub operations: Vec<OperationDecl>,
    #[serde(default)]
    pub exceptions: Vec<ExceptionDecl>,
    #[serde(default)]
    pub constants: Vec<ConstantDecl>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OperationDecl {
    pub name: String,
    pub uid: i64,
    #[serde(default)]
    pub params: Vec<ParamDecl>,
    #[serde(default)]
    pub returns: Option<String>,
    #[serde(default)]
    pub oneway: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParamDecl {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(rename = "in", default)]
    pub inbound: bool,
    #[serde(rename = "out", default)]
    pub outbound: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExceptionDecl {
    pub name: String,
    #[serde(default)]
    pub members: Vec<MemberDecl>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDecl {
    pub name: String,
    #[serde(flatten)]
    pub kind: TypeDeclKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeDeclKind {
    Struct {
        #[serde(default)]
        members: Vec<MemberDecl>,
    },
    Exception {
        #[serde(default)]
        members: Vec<MemberDecl>,
    },
    Sequence {
        element: String,
    },
    Map {
        key: String,
        value: String,
    },
    Enum {
        enumerators: Vec<EnumeratorDecl>,
    },
    /// A typedef.
    Alias {
        target: String,
    },
    /// A compound type declared here but defined in another unit.
    Forward,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MemberDecl {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnumeratorDecl {
    pub name: String,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConstantDecl {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub value: ConstantValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConstantValue {
    Bool(bool),
    Integer(i64),
    /// Integers above `i64::MAX`, only valid for `uint64`.
    UInt(u64),
    Float(f64),
    String(String),
}
