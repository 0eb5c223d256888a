//! The built type graph: an arena of types plus the module tree.
//!
//! The graph is read-only once [`build`](super::build) returns. The only
//! deferred work is the synthesis of each operation's request and response
//! structs, which happens on first use and is cached in the operation.

use super::idl::ConstantValue;
use super::types::{Member, QualifiedName, StructKind, StructType, Type, TypeId};
use std::sync::OnceLock;

/// Name of the synthetic response member carrying an operation's return value.
pub const RETURN_VALUE: &str = "return_value";

#[derive(Debug, Default)]
pub struct TypeGraph {
    types: Vec<Type>,
    modules: Vec<Module>,
}

impl TypeGraph {
    pub(crate) fn new(types: Vec<Type>, modules: Vec<Module>) -> Self {
        TypeGraph { types, modules }
    }

    pub fn get(&self, id: TypeId) -> &Type {
        &self.types[id.index()]
    }

    /// Top-level modules, in parser order.
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    /// Every interface in the document, depth-first in parser order.
    pub fn interfaces(&self) -> Vec<&Interface> {
        fn walk<'g>(module: &'g Module, out: &mut Vec<&'g Interface>) {
            out.extend(module.interfaces.iter());
            for child in &module.modules {
                walk(child, out);
            }
        }
        let mut out = Vec::new();
        for module in &self.modules {
            walk(module, &mut out);
        }
        out
    }

    /// Look up a user type by its `::`-joined qualified name.
    pub fn find_type(&self, qualified: &str) -> Option<TypeId> {
        self.types
            .iter()
            .position(|ty| ty.qualified_name().is_some_and(|n| n.to_string() == qualified))
            .map(|i| TypeId(i as u32))
    }

    pub fn find_interface(&self, qualified: &str) -> Option<&Interface> {
        self.interfaces()
            .into_iter()
            .find(|i| i.name.to_string() == qualified)
    }
}

#[derive(Debug, Default)]
pub struct Module {
    pub name: QualifiedName,
    pub modules: Vec<Module>,
    /// User types declared directly in this module (aliases excluded).
    pub types: Vec<TypeId>,
    pub interfaces: Vec<Interface>,
    pub constants: Vec<Constant>,
}

#[derive(Debug)]
pub struct Interface {
    pub name: QualifiedName,
    /// Interface version; always positive.
    pub uid: u32,
    pub operations: Vec<Operation>,
    pub exceptions: Vec<TypeId>,
    pub constants: Vec<Constant>,
}

impl Interface {
    pub fn operation(&self, uid: u32) -> Option<&Operation> {
        self.operations.iter().find(|op| op.uid == uid)
    }
}

#[derive(Debug)]
pub struct Param {
    pub name: String,
    pub ty: TypeId,
    pub inbound: bool,
    pub outbound: bool,
}

#[derive(Debug)]
pub struct Operation {
    pub name: QualifiedName,
    /// Procedure number; always positive.
    pub uid: u32,
    pub params: Vec<Param>,
    pub returns: Option<TypeId>,
    pub oneway: bool,
    request: OnceLock<StructType>,
    response: OnceLock<Option<StructType>>,
}

impl Operation {
    pub fn new(
        name: QualifiedName,
        uid: u32,
        params: Vec<Param>,
        returns: Option<TypeId>,
        oneway: bool,
    ) -> Self {
        Operation {
            name,
            uid,
            params,
            returns,
            oneway,
            request: OnceLock::new(),
            response: OnceLock::new(),
        }
    }

    /// The request struct: every inbound parameter, in declaration order.
    pub fn request_type(&self) -> &StructType {
        self.request.get_or_init(|| {
            tracing::trace!(operation = %self.name, "synthesizing request type");
            StructType {
                name: self.derived_name("Request"),
                kind: StructKind::Request {
                    operation_number: self.uid,
                },
                members: self
                    .params
                    .iter()
                    .filter(|p| p.inbound)
                    .map(|p| Member {
                        name: p.name.clone(),
                        ty: p.ty,
                    })
                    .collect(),
            }
        })
    }

    /// The response struct: every outbound parameter, then the return value.
    /// `None` for oneway operations.
    pub fn response_type(&self) -> Option<&StructType> {
        self.response
            .get_or_init(|| {
                if self.oneway {
                    return None;
                }
                tracing::trace!(operation = %self.name, "synthesizing response type");
                let mut members: Vec<Member> = self
                    .params
                    .iter()
                    .filter(|p| p.outbound)
                    .map(|p| Member {
                        name: p.name.clone(),
                        ty: p.ty,
                    })
                    .collect();
                if let Some(ty) = self.returns {
                    members.push(Member {
                        name: RETURN_VALUE.to_owned(),
                        ty,
                    });
                }
                Some(StructType {
                    name: self.derived_name("Response"),
                    kind: StructKind::Response {
                        operation_number: self.uid,
                    },
                    members,
                })
            })
            .as_ref()
    }

    fn derived_name(&self, suffix: &str) -> QualifiedName {
        let mut segments = self.name.scope().to_vec();
        segments.push(format!("{}{}", self.name.name(), suffix));
        QualifiedName::new(segments)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Constant {
    pub name: QualifiedName,
    pub ty: TypeId,
    pub value: ConstantValue,
}
