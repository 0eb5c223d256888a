//! Builds and validates a [`TypeGraph`] from a parsed [`Document`].
//!
//! Three passes, all in parser order:
//!
//! 1. **declare**: give every user type a qualified name and an arena slot,
//!    rejecting duplicates. Forward declarations and their definitions share
//!    a slot.
//! 2. **define**: resolve every type reference and fill the slots.
//! 3. **assemble**: build the module tree, interfaces and constants while
//!    checking UIDs, parameter directions, oneway shape and constant literals.
//!
//! Any failure is fatal and reported with the offending qualified name.

use super::graph::{Constant, Interface, Module, Operation, Param, RETURN_VALUE, TypeGraph};
use super::idl::{
    ConstantDecl, ConstantValue, Document, InterfaceDecl, MemberDecl, ModuleDecl, OperationDecl,
    TypeDecl, TypeDeclKind,
};
use super::primitive;
use super::types::{
    EnumType, Enumerator, MapType, Member, Numeric, QualifiedName, SequenceType, StructKind,
    StructType, Type, TypeId,
};
use crate::error::GenError;
use indexmap::{IndexMap, IndexSet};
use std::collections::{HashMap, HashSet};

/// Build the type graph for `doc`, or fail with the first validation error.
pub fn build(doc: &Document) -> Result<TypeGraph, GenError> {
    let mut builder = Builder::default();
    for module in &doc.modules {
        builder.declare_module(&QualifiedName::root(&module.name), module)?;
    }
    tracing::debug!(types = builder.types.len(), "declared user types");

    builder.define_pending()?;
    builder.check_map_keys()?;

    let mut modules = Vec::with_capacity(doc.modules.len());
    for module in &doc.modules {
        modules.push(builder.assemble_module(QualifiedName::root(&module.name), module)?);
    }
    tracing::debug!(types = builder.types.len(), "type graph built");
    Ok(TypeGraph::new(builder.types, modules))
}

enum Declared {
    Type(TypeId),
    Alias { target: String, scope: QualifiedName },
    Interface,
}

/// A user type waiting for its references to be resolved.
struct Pending<'d> {
    id: TypeId,
    name: QualifiedName,
    kind: PendingKind<'d>,
}

enum PendingKind<'d> {
    Decl(&'d TypeDeclKind),
    Exception(&'d [MemberDecl]),
}

#[derive(Default)]
struct Builder<'d> {
    types: Vec<Type>,
    primitives: HashMap<String, TypeId>,
    names: IndexMap<String, Declared>,
    forward_only: HashSet<TypeId>,
    pending: Vec<Pending<'d>>,
    aliases: HashMap<String, TypeId>,
    resolving: Vec<String>,
    interface_uids: HashMap<u32, String>,
}

impl<'d> Builder<'d> {
    fn push(&mut self, ty: Type) -> TypeId {
        let id = TypeId(self.types.len() as u32);
        self.types.push(ty);
        id
    }

    // ── Pass 1: declare ────────────────────────────────────────────────────

    fn declare_module(
        &mut self,
        scope: &QualifiedName,
        module: &'d ModuleDecl,
    ) -> Result<(), GenError> {
        for decl in &module.types {
            self.declare_type(scope, decl)?;
        }
        for interface in &module.interfaces {
            let name = scope.child(&interface.name);
            self.declare_name(&name, Declared::Interface)?;
            for exception in &interface.exceptions {
                let ex_name = name.child(&exception.name);
                let id = self.push(Type::Forward(ex_name.clone()));
                self.declare_name(&ex_name, Declared::Type(id))?;
                self.pending.push(Pending {
                    id,
                    name: ex_name,
                    kind: PendingKind::Exception(&exception.members),
                });
            }
        }
        for child in &module.modules {
            self.declare_module(&scope.child(&child.name), child)?;
        }
        Ok(())
    }

    fn declare_type(&mut self, scope: &QualifiedName, decl: &'d TypeDecl) -> Result<(), GenError> {
        let name = scope.child(&decl.name);
        let key = name.to_string();
        let is_forward = matches!(decl.kind, TypeDeclKind::Forward);

        if let Some(Declared::Type(existing)) = self.names.get(&key) {
            let existing = *existing;
            if is_forward {
                return Ok(());
            }
            if self.forward_only.remove(&existing) {
                self.pending.push(Pending {
                    id: existing,
                    name,
                    kind: PendingKind::Decl(&decl.kind),
                });
                return Ok(());
            }
        }

        match &decl.kind {
            TypeDeclKind::Alias { target } => self.declare_name(
                &name,
                Declared::Alias {
                    target: target.clone(),
                    scope: scope.clone(),
                },
            ),
            kind => {
                let id = self.push(Type::Forward(name.clone()));
                self.declare_name(&name, Declared::Type(id))?;
                if is_forward {
                    self.forward_only.insert(id);
                } else {
                    self.pending.push(Pending {
                        id,
                        name,
                        kind: PendingKind::Decl(kind),
                    });
                }
                Ok(())
            }
        }
    }

    fn declare_name(&mut self, name: &QualifiedName, declared: Declared) -> Result<(), GenError> {
        let key = name.to_string();
        if self.names.contains_key(&key) {
            return Err(GenError::DuplicateName {
                scope: name.scope().join("::"),
                name: name.name().to_owned(),
            });
        }
        self.names.insert(key, declared);
        Ok(())
    }

    // ── Pass 2: define ─────────────────────────────────────────────────────

    fn define_pending(&mut self) -> Result<(), GenError> {
        let pending = std::mem::take(&mut self.pending);
        for Pending { id, name, kind } in pending {
            let scope = QualifiedName::new(name.scope().to_vec());
            let ty = match kind {
                PendingKind::Exception(members) => Type::Struct(StructType {
                    members: self.members(&name, members)?,
                    name,
                    kind: StructKind::Exception,
                }),
                PendingKind::Decl(TypeDeclKind::Struct { members }) => Type::Struct(StructType {
                    members: self.members(&name, members)?,
                    name,
                    kind: StructKind::Plain,
                }),
                PendingKind::Decl(TypeDeclKind::Exception { members }) => Type::Struct(StructType {
                    members: self.members(&name, members)?,
                    name,
                    kind: StructKind::Exception,
                }),
                PendingKind::Decl(TypeDeclKind::Sequence { element }) => {
                    Type::Sequence(SequenceType {
                        element: self.resolve(&scope, element)?,
                        name,
                    })
                }
                PendingKind::Decl(TypeDeclKind::Map { key, value }) => Type::Map(MapType {
                    key: self.resolve(&scope, key)?,
                    value: self.resolve(&scope, value)?,
                    name,
                }),
                PendingKind::Decl(TypeDeclKind::Enum { enumerators }) => {
                    Type::Enum(enum_type(name, enumerators)?)
                }
                PendingKind::Decl(TypeDeclKind::Alias { .. } | TypeDeclKind::Forward) => continue,
            };
            self.types[id.index()] = ty;
        }
        Ok(())
    }

    fn members(
        &mut self,
        owner: &QualifiedName,
        decls: &[MemberDecl],
    ) -> Result<Vec<Member>, GenError> {
        let scope = QualifiedName::new(owner.scope().to_vec());
        let mut seen = HashSet::new();
        let mut members = Vec::with_capacity(decls.len());
        for decl in decls {
            if !seen.insert(decl.name.as_str()) {
                return Err(GenError::DuplicateName {
                    scope: owner.to_string(),
                    name: decl.name.clone(),
                });
            }
            members.push(Member {
                name: decl.name.clone(),
                ty: self.resolve(&scope, &decl.ty)?,
            });
        }
        Ok(members)
    }

    /// Resolve a type reference seen in `scope`: primitives first, then user
    /// declarations from the innermost scope outwards.
    fn resolve(&mut self, scope: &QualifiedName, name: &str) -> Result<TypeId, GenError> {
        if let Some(ty) = primitive::lookup(name) {
            return Ok(self.intern_primitive(ty));
        }

        let (absolute, relative) = match name.strip_prefix("::") {
            Some(rest) => (true, rest),
            None => (false, name),
        };
        let segments = scope.segments();
        let depths: Vec<usize> = if absolute {
            vec![0]
        } else {
            (0..=segments.len()).rev().collect()
        };
        for depth in depths {
            let candidate = if depth == 0 {
                relative.to_owned()
            } else {
                format!("{}::{}", segments[..depth].join("::"), relative)
            };
            if let Some(id) = self.lookup_qualified(&candidate)? {
                return Ok(id);
            }
        }

        Err(GenError::UnknownType {
            scope: scope.to_string(),
            name: name.to_owned(),
        })
    }

    fn lookup_qualified(&mut self, qualified: &str) -> Result<Option<TypeId>, GenError> {
        let (target, alias_scope) = match self.names.get(qualified) {
            Some(Declared::Type(id)) => return Ok(Some(*id)),
            Some(Declared::Alias { target, scope }) => (target.clone(), scope.clone()),
            Some(Declared::Interface) | None => return Ok(None),
        };

        if let Some(id) = self.aliases.get(qualified) {
            return Ok(Some(*id));
        }
        if self.resolving.iter().any(|n| n == qualified) {
            return Err(GenError::AliasCycle {
                name: qualified.to_owned(),
            });
        }
        self.resolving.push(qualified.to_owned());
        let resolved = self.resolve(&alias_scope, &target);
        self.resolving.pop();
        let id = resolved?;
        self.aliases.insert(qualified.to_owned(), id);
        Ok(Some(id))
    }

    fn intern_primitive(&mut self, ty: Type) -> TypeId {
        let key = ty.describe();
        if let Some(id) = self.primitives.get(&key) {
            return *id;
        }
        let id = self.push(ty);
        self.primitives.insert(key, id);
        id
    }

    fn check_map_keys(&self) -> Result<(), GenError> {
        for ty in &self.types {
            if let Type::Map(map) = ty {
                let key = &self.types[map.key.index()];
                if !key.is_orderable() {
                    return Err(GenError::UnorderedMapKey {
                        name: map.name.to_string(),
                        key: key.describe(),
                    });
                }
            }
        }
        Ok(())
    }

    // ── Pass 3: assemble ───────────────────────────────────────────────────

    fn assemble_module(
        &mut self,
        name: QualifiedName,
        decl: &ModuleDecl,
    ) -> Result<Module, GenError> {
        let mut types = IndexSet::new();
        for ty in &decl.types {
            if let Some(Declared::Type(id)) = self.names.get(&name.child(&ty.name).to_string()) {
                types.insert(*id);
            }
        }

        let constants = self.constants(&name, &decl.constants)?;

        let mut interfaces = Vec::with_capacity(decl.interfaces.len());
        for interface in &decl.interfaces {
            interfaces.push(self.assemble_interface(name.child(&interface.name), interface)?);
        }

        let mut modules = Vec::with_capacity(decl.modules.len());
        for child in &decl.modules {
            modules.push(self.assemble_module(name.child(&child.name), child)?);
        }

        Ok(Module {
            name,
            modules,
            types: types.into_iter().collect(),
            interfaces,
            constants,
        })
    }

    fn assemble_interface(
        &mut self,
        name: QualifiedName,
        decl: &InterfaceDecl,
    ) -> Result<Interface, GenError> {
        let uid = positive_uid("interface", &name, decl.uid)?;
        if let Some(other) = self.interface_uids.get(&uid) {
            return Err(GenError::DuplicateUid {
                kind: "interface",
                name: name.to_string(),
                uid,
                other: other.clone(),
            });
        }
        self.interface_uids.insert(uid, name.to_string());

        let mut operation_uids: HashMap<u32, String> = HashMap::new();
        let mut operation_names = HashSet::new();
        let mut operations = Vec::with_capacity(decl.operations.len());
        for op in &decl.operations {
            if !operation_names.insert(op.name.as_str()) {
                return Err(GenError::DuplicateName {
                    scope: name.to_string(),
                    name: op.name.clone(),
                });
            }
            let operation = self.operation(&name, op)?;
            if let Some(other) = operation_uids.get(&operation.uid) {
                return Err(GenError::DuplicateUid {
                    kind: "operation",
                    name: operation.name.to_string(),
                    uid: operation.uid,
                    other: other.clone(),
                });
            }
            operation_uids.insert(operation.uid, operation.name.to_string());
            operations.push(operation);
        }

        let mut exceptions = Vec::with_capacity(decl.exceptions.len());
        for exception in &decl.exceptions {
            let key = name.child(&exception.name).to_string();
            if let Some(Declared::Type(id)) = self.names.get(&key) {
                exceptions.push(*id);
            }
        }

        let constants = self.constants(&name, &decl.constants)?;
        tracing::debug!(
            interface = %name,
            uid,
            operations = operations.len(),
            "interface validated"
        );

        Ok(Interface {
            name,
            uid,
            operations,
            exceptions,
            constants,
        })
    }

    fn operation(
        &mut self,
        interface: &QualifiedName,
        decl: &OperationDecl,
    ) -> Result<Operation, GenError> {
        let name = interface.child(&decl.name);
        let uid = positive_uid("operation", &name, decl.uid)?;

        let mut seen = HashSet::new();
        let mut params = Vec::with_capacity(decl.params.len());
        for param in &decl.params {
            if !param.inbound && !param.outbound {
                return Err(GenError::MalformedParameter {
                    operation: name.to_string(),
                    param: param.name.clone(),
                });
            }
            if !seen.insert(param.name.as_str())
                || (decl.returns.is_some() && param.outbound && param.name == RETURN_VALUE)
            {
                return Err(GenError::DuplicateName {
                    scope: name.to_string(),
                    name: param.name.clone(),
                });
            }
            params.push(Param {
                name: param.name.clone(),
                ty: self.resolve(interface, &param.ty)?,
                inbound: param.inbound,
                outbound: param.outbound,
            });
        }

        if decl.oneway && (decl.returns.is_some() || params.iter().any(|p| p.outbound)) {
            return Err(GenError::OnewayWithResults {
                operation: name.to_string(),
            });
        }

        let returns = match &decl.returns {
            Some(ty) => Some(self.resolve(interface, ty)?),
            None => None,
        };

        Ok(Operation::new(name, uid, params, returns, decl.oneway))
    }

    fn constants(
        &mut self,
        scope: &QualifiedName,
        decls: &[ConstantDecl],
    ) -> Result<Vec<Constant>, GenError> {
        let mut seen = HashSet::new();
        let mut constants = Vec::with_capacity(decls.len());
        for decl in decls {
            let name = scope.child(&decl.name);
            if !seen.insert(decl.name.as_str()) {
                return Err(GenError::DuplicateName {
                    scope: scope.to_string(),
                    name: decl.name.clone(),
                });
            }
            let ty = self.resolve(scope, &decl.ty)?;
            check_constant(&name, &self.types[ty.index()], &decl.value)?;
            constants.push(Constant {
                name,
                ty,
                value: decl.value.clone(),
            });
        }
        Ok(constants)
    }
}

fn positive_uid(kind: &'static str, name: &QualifiedName, uid: i64) -> Result<u32, GenError> {
    match u32::try_from(uid) {
        Ok(uid) if uid > 0 => Ok(uid),
        _ => Err(GenError::NonPositiveUid {
            kind,
            name: name.to_string(),
            uid,
        }),
    }
}

fn enum_type(
    name: QualifiedName,
    decls: &[super::idl::EnumeratorDecl],
) -> Result<EnumType, GenError> {
    if decls.is_empty() {
        return Err(GenError::EmptyEnum {
            name: name.to_string(),
        });
    }
    let mut names = HashSet::new();
    let mut values = HashSet::new();
    let mut enumerators = Vec::with_capacity(decls.len());
    for decl in decls {
        if !names.insert(decl.name.as_str()) {
            return Err(GenError::DuplicateName {
                scope: name.to_string(),
                name: decl.name.clone(),
            });
        }
        let value = i32::try_from(decl.value)
            .ok()
            .filter(|v| values.insert(*v))
            .ok_or_else(|| GenError::DuplicateEnumValue {
                name: name.to_string(),
                enumerator: decl.name.clone(),
                value: decl.value,
            })?;
        enumerators.push(Enumerator {
            name: decl.name.clone(),
            value,
        });
    }
    Ok(EnumType { name, enumerators })
}

fn check_constant(name: &QualifiedName, ty: &Type, value: &ConstantValue) -> Result<(), GenError> {
    let invalid = |reason: String| GenError::InvalidConstant {
        name: name.to_string(),
        reason,
    };
    let integer = match value {
        ConstantValue::Integer(v) => Some(i128::from(*v)),
        ConstantValue::UInt(v) => Some(i128::from(*v)),
        _ => None,
    };
    match (ty, value) {
        (Type::Bool, ConstantValue::Bool(_)) | (Type::String { .. }, ConstantValue::String(_)) => {
            Ok(())
        }
        (Type::Numeric(n), _) if integer.is_some() => {
            let v = integer.unwrap_or_default();
            match n.int_range() {
                Some((min, max)) if (min..=max).contains(&v) => Ok(()),
                Some(_) => Err(invalid(format!("{v} is out of range for {}", n.rust_name()))),
                None => Ok(()),
            }
        }
        (Type::Numeric(n), ConstantValue::Float(v)) if n.is_float() => {
            if !v.is_finite() {
                Err(invalid(format!("{v} is not a finite literal")))
            } else if *n == Numeric::F32 && (*v as f32).is_infinite() {
                Err(invalid(format!("{v} is out of range for f32")))
            } else {
                Ok(())
            }
        }
        (ty, _) => Err(invalid(format!(
            "literal does not match type {}",
            ty.describe()
        ))),
    }
}
