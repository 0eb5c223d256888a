//! Rust code generation.
//!
//! [`Compiler::compile`] builds and validates the type graph, then renders
//! one [`GeneratedUnit`] per compound type, enum, constant set, interface and
//! module. Units are only returned once every one of them rendered; a
//! failure anywhere leaves nothing to write. That includes two IDL names
//! that map to the same Rust item or file once case-converted.
//!
//! The generated tree mirrors the IDL module tree:
//!
//! ```text
//! mod.rs                      pub mod <module>; ...
//! <module>/mod.rs             child modules, types and interfaces
//! <module>/<type>.rs          struct, exception, sequence, map or enum
//! <module>/constants.rs
//! <module>/<iface>/mod.rs     version, program number, dispatch enums
//! <module>/<iface>/<op>_request.rs
//! <module>/<iface>/<op>_response.rs
//! <module>/<iface>/<exception>.rs
//! ```

mod interface;
pub mod naming;
mod types;
mod writer;

pub use writer::SourceWriter;

use crate::config::GenConfig;
use crate::error::GenError;
use crate::model::{self, Document, Interface, Module, QualifiedName, Type, TypeGraph};
use crate::traits::Registry;
use naming::Namespace;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    Struct,
    Exception,
    Request,
    Response,
    Sequence,
    Map,
    Enum,
    Constants,
    Interface,
    Module,
}

/// One generated source file.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedUnit {
    /// Path relative to the output directory.
    pub path: PathBuf,
    pub kind: UnitKind,
    /// IDL name of what the unit was generated from (empty for the root).
    pub qualified_name: String,
    pub source: String,
}

pub struct Compiler {
    config: GenConfig,
}

impl Compiler {
    pub fn new(config: GenConfig) -> Self {
        Compiler { config }
    }

    pub fn config(&self) -> &GenConfig {
        &self.config
    }

    /// Build the graph for `doc` and render every unit.
    pub fn compile(&self, doc: &Document) -> Result<Vec<GeneratedUnit>, GenError> {
        let graph = model::build(doc)?;
        self.emit(&graph)
    }

    /// Render every unit of an already built graph.
    pub fn emit(&self, graph: &TypeGraph) -> Result<Vec<GeneratedUnit>, GenError> {
        let registry = Registry::new(graph, &self.config);
        let mut emitter = Emitter {
            registry,
            units: Vec::new(),
        };

        let root_name = QualifiedName::default();
        let mut root = SourceWriter::new();
        let mut stems = Namespace::with_reserved(&root_name, &["mod"]);
        header(&mut root, &self.config, &root_name, ImportSet::None);
        for module in graph.modules() {
            stems.claim(naming::file_stem(module.name.name()), module.name.name())?;
            emitter.module(module)?;
            root.writeln(&format!("pub mod {};", naming::snake(module.name.name())));
        }
        emitter.push(PathBuf::from("mod.rs"), UnitKind::Module, &root_name, root.finish());

        tracing::info!(
            units = emitter.units.len(),
            interfaces = graph.interfaces().len(),
            "generation complete"
        );
        Ok(emitter.units)
    }
}

/// Which runtime items a unit imports.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum ImportSet {
    None,
    Codec,
}

pub(crate) fn header(
    w: &mut SourceWriter,
    config: &GenConfig,
    name: &QualifiedName,
    imports: ImportSet,
) {
    if name.segments().is_empty() {
        w.writeln("// Generated by xdr-idlc. Do not edit.");
    } else {
        w.writeln(&format!("// Generated by xdr-idlc from `{name}`. Do not edit."));
    }
    w.writeln("#![allow(unused_imports, unused_variables, clippy::all)]");
    w.blank();
    if imports == ImportSet::Codec {
        w.writeln(&format!(
            "use {}::{{Deserializer, Serializer, Xdr, opaque_size, string_size}};",
            config.runtime_crate
        ));
        w.blank();
    }
}

struct Emitter<'g> {
    registry: Registry<'g>,
    units: Vec<GeneratedUnit>,
}

impl Emitter<'_> {
    fn push(&mut self, path: PathBuf, kind: UnitKind, name: &QualifiedName, source: String) {
        tracing::debug!(path = %path.display(), ?kind, name = %name, "emitted unit");
        self.units.push(GeneratedUnit {
            path,
            kind,
            qualified_name: name.to_string(),
            source,
        });
    }

    fn dir(name: &QualifiedName) -> PathBuf {
        name.segments().iter().map(|s| naming::file_stem(s)).collect()
    }

    fn module(&mut self, module: &Module) -> Result<(), GenError> {
        let dir = Self::dir(&module.name);
        let mut mod_rs = SourceWriter::new();
        header(&mut mod_rs, self.registry.config(), &module.name, ImportSet::None);

        // Child modules, type units and interfaces share the directory and
        // the `pub mod` namespace of `mod.rs`.
        let mut stems = Namespace::with_reserved(&module.name, reserved_stems(&module.constants));
        let mut idents = Namespace::new(&module.name);

        if !module.constants.is_empty() {
            let source = types::constants_unit(&self.registry, &module.name, &module.constants)?;
            self.push(dir.join("constants.rs"), UnitKind::Constants, &module.name, source);
            mod_rs.writeln("pub mod constants;");
            mod_rs.writeln("pub use constants::*;");
            mod_rs.blank();
        }

        for child in &module.modules {
            stems.claim(naming::file_stem(child.name.name()), child.name.name())?;
            self.module(child)?;
            mod_rs.writeln(&format!("pub mod {};", naming::snake(child.name.name())));
        }
        mod_rs.blank();

        for id in &module.types {
            let graph = self.registry.graph();
            let (name, kind, source) = match graph.get(*id) {
                Type::Struct(s) => {
                    let kind = match s.kind {
                        model::StructKind::Exception => UnitKind::Exception,
                        _ => UnitKind::Struct,
                    };
                    (&s.name, kind, types::struct_unit(&self.registry, s, None)?)
                }
                Type::Sequence(s) => {
                    (&s.name, UnitKind::Sequence, types::sequence_unit(&self.registry, s)?)
                }
                Type::Map(m) => {
                    // Fails under `MapPolicy::Reject`.
                    self.registry.traits(*id)?;
                    (&m.name, UnitKind::Map, types::map_unit(&self.registry, m)?)
                }
                Type::Enum(e) => (&e.name, UnitKind::Enum, types::enum_unit(&self.registry, e)?),
                Type::Forward(name) => {
                    tracing::debug!(name = %name, "forward declaration, defined in another unit");
                    continue;
                }
                Type::Bool | Type::Numeric(_) | Type::String { .. } | Type::Buffer => continue,
            };
            let stem = naming::file_stem(name.name());
            stems.claim(stem.clone(), name.name())?;
            idents.claim(naming::upper_camel(name.name()), name.name())?;
            mod_rs.writeln(&format!("pub mod {};", naming::snake(name.name())));
            mod_rs.writeln(&format!(
                "pub use {}::{};",
                naming::snake(name.name()),
                naming::upper_camel(name.name())
            ));
            self.push(dir.join(format!("{stem}.rs")), kind, name, source);
        }
        mod_rs.blank();

        for interface in &module.interfaces {
            stems.claim(naming::file_stem(interface.name.name()), interface.name.name())?;
            self.interface(interface)?;
            mod_rs.writeln(&format!("pub mod {};", naming::snake(interface.name.name())));
        }

        self.push(dir.join("mod.rs"), UnitKind::Module, &module.name, mod_rs.finish());
        Ok(())
    }

    fn interface(&mut self, interface: &Interface) -> Result<(), GenError> {
        let dir = Self::dir(&interface.name);
        let iface = naming::upper_camel(interface.name.name());
        let mut children = Children {
            stems: Namespace::with_reserved(&interface.name, reserved_stems(&interface.constants)),
            idents: Namespace::with_reserved(
                &interface.name,
                &[
                    &format!("{iface}Request"),
                    &format!("{iface}Response"),
                    &format!("{iface}Exception"),
                ],
            ),
            entries: Vec::new(),
        };
        let mut variants = Namespace::new(&interface.name);

        for op in &interface.operations {
            variants.claim(naming::upper_camel(op.name.name()), op.name.name())?;
            let request = op.request_type();
            let response = op.response_type();
            let source = types::struct_unit(&self.registry, request, response)?;
            children.add(&request.name)?;
            self.struct_child(&dir, &request.name, UnitKind::Request, source);

            if let Some(response) = response {
                let source = types::struct_unit(&self.registry, response, None)?;
                children.add(&response.name)?;
                self.struct_child(&dir, &response.name, UnitKind::Response, source);
            }
        }

        for id in &interface.exceptions {
            if let Type::Struct(s) = self.registry.graph().get(*id) {
                let source = types::struct_unit(&self.registry, s, None)?;
                children.add(&s.name)?;
                self.struct_child(&dir, &s.name, UnitKind::Exception, source);
            }
        }

        if !interface.constants.is_empty() {
            let constants = &interface.constants;
            let source = types::constants_unit(&self.registry, &interface.name, constants)?;
            self.push(dir.join("constants.rs"), UnitKind::Constants, &interface.name, source);
        }

        let source = interface::interface_unit(
            &self.registry,
            interface,
            &children.entries,
            !interface.constants.is_empty(),
        )?;
        self.push(dir.join("mod.rs"), UnitKind::Interface, &interface.name, source);
        Ok(())
    }

    fn struct_child(
        &mut self,
        dir: &std::path::Path,
        name: &QualifiedName,
        kind: UnitKind,
        source: String,
    ) {
        let stem = naming::file_stem(name.name());
        self.push(dir.join(format!("{stem}.rs")), kind, name, source);
    }
}

/// File stems a scope's own units already use.
fn reserved_stems(constants: &[model::Constant]) -> &'static [&'static str] {
    if constants.is_empty() {
        &["mod"]
    } else {
        &["mod", "constants"]
    }
}

/// Request, response and exception units of one interface, as module stems
/// and type idents for its `mod.rs`.
struct Children {
    stems: Namespace,
    idents: Namespace,
    entries: Vec<(String, String)>,
}

impl Children {
    fn add(&mut self, name: &QualifiedName) -> Result<(), GenError> {
        let idl_name = name.name();
        let ident = naming::upper_camel(idl_name);
        self.stems.claim(naming::file_stem(idl_name), idl_name)?;
        self.idents.claim(ident.clone(), idl_name)?;
        self.entries.push((naming::snake(idl_name), ident));
        Ok(())
    }
}
