//! Interface units: the version accessors and the three dispatch enums.
//!
//! Requests and responses are keyed by operation number, exceptions by their
//! fully-qualified type name. Oneway operations have no response variant.

use super::naming::{self, upper_camel};
use super::writer::SourceWriter;
use super::{ImportSet, header};
use crate::error::GenError;
use crate::model::{Interface, Type};
use crate::traits::Registry;

struct Variant {
    ident: String,
    path: String,
    /// Operation number or wire type name, already rendered as a pattern.
    key: String,
}

/// Render the `mod.rs` unit of an interface. `children` are the file stems
/// and type idents of the request, response and exception units.
pub fn interface_unit(
    registry: &Registry<'_>,
    interface: &Interface,
    children: &[(String, String)],
    has_constants: bool,
) -> Result<String, GenError> {
    let config = registry.config();
    let rt = config.runtime_crate.as_str();
    let graph = registry.graph();
    let iface = upper_camel(interface.name.name());
    let iface_name = interface.name.to_string();

    let mut requests = Vec::with_capacity(interface.operations.len());
    let mut responses = Vec::new();
    let mut oneway = Vec::new();
    for op in &interface.operations {
        let ident = upper_camel(op.name.name());
        requests.push(Variant {
            ident: ident.clone(),
            path: registry.path(&op.request_type().name),
            key: op.uid.to_string(),
        });
        match op.response_type() {
            Some(response) => responses.push(Variant {
                ident,
                path: registry.path(&response.name),
                key: op.uid.to_string(),
            }),
            None => oneway.push(ident),
        }
    }

    let mut exceptions = Vec::with_capacity(interface.exceptions.len());
    for id in &interface.exceptions {
        if let Type::Struct(s) = graph.get(*id) {
            exceptions.push(Variant {
                ident: upper_camel(s.name.name()),
                path: registry.path(&s.name),
                key: format!("{:?}", naming::wire_name(config, &s.name)),
            });
        }
    }

    let mut w = SourceWriter::new();
    header(&mut w, config, &interface.name, ImportSet::Codec);

    if has_constants {
        w.writeln("pub mod constants;");
        w.writeln("pub use constants::*;");
        w.blank();
    }
    for (stem, ident) in children {
        w.writeln(&format!("pub mod {stem};"));
        w.writeln(&format!("pub use {stem}::{ident};"));
    }
    w.blank();

    w.writeln(&format!("pub const INTERFACE_VERSION: u32 = {};", interface.uid));
    w.writeln(&format!(
        "pub const PROGRAM_NUMBER: u32 = {:#x};",
        config.program_number(interface.uid)
    ));
    w.blank();
    w.block("pub fn version() -> u32", |w| w.writeln("INTERFACE_VERSION"));
    w.blank();
    w.block("pub fn program_number() -> u32", |w| w.writeln("PROGRAM_NUMBER"));
    w.blank();

    // ── Requests ───────────────────────────────────────────────────────────
    let request_enum = format!("{iface}Request");
    let response_enum = format!("{iface}Response");
    let request_factory = Factory {
        rt,
        enum_ident: &request_enum,
        key: "operation_number",
        key_type: "u32",
        variants: &requests,
        unknown: format!(
            "Err({rt}::Error::UnknownOperation {{ \
             interface: {iface_name:?}.to_owned(), operation_number }})"
        ),
    };
    enum_decl(&mut w, &request_enum, &requests);
    w.block(&format!("impl {request_enum}"), |w| {
        w.writeln("/// An empty request for `operation_number`.");
        request_factory.emit(w, false);
        w.blank();
        request_factory.emit(w, true);
        w.blank();
        accessor(w, &request_enum, "operation_number", "u32", &requests, |v| {
            format!("<{} as {rt}::Request>::OPERATION_NUMBER", v.path)
        });
        w.blank();
        w.writeln(
            "/// The empty response paired with this request, `None` for oneway operations.",
        );
        w.block(
            &format!("pub fn create_default_response(&self) -> Option<{response_enum}>"),
            |w| {
                if requests.is_empty() {
                    w.writeln("match *self {}");
                    return;
                }
                w.block("match self", |w| {
                    for v in &requests {
                        if oneway.contains(&v.ident) {
                            w.writeln(&format!("{request_enum}::{}(_) => None,", v.ident));
                        } else {
                            w.writeln(&format!(
                                "{request_enum}::{0}(request) => \
                                 Some({response_enum}::{0}(request.create_default_response())),",
                                v.ident
                            ));
                        }
                    }
                });
            },
        );
        w.blank();
        codec_methods(w, rt, &request_enum, &requests);
    });
    w.blank();

    // ── Responses ──────────────────────────────────────────────────────────
    let response_factory = Factory {
        rt,
        enum_ident: &response_enum,
        key: "operation_number",
        key_type: "u32",
        variants: &responses,
        unknown: format!(
            "Err({rt}::Error::UnknownResponse {{ \
             interface: {iface_name:?}.to_owned(), operation_number }})"
        ),
    };
    enum_decl(&mut w, &response_enum, &responses);
    w.block(&format!("impl {response_enum}"), |w| {
        response_factory.emit(w, false);
        w.blank();
        response_factory.emit(w, true);
        w.blank();
        accessor(w, &response_enum, "operation_number", "u32", &responses, |v| {
            format!("<{} as {rt}::Response>::OPERATION_NUMBER", v.path)
        });
        w.blank();
        codec_methods(w, rt, &response_enum, &responses);
    });
    w.blank();

    // ── Exceptions ─────────────────────────────────────────────────────────
    let exception_enum = format!("{iface}Exception");
    let exception_factory = Factory {
        rt,
        enum_ident: &exception_enum,
        key: "type_name",
        key_type: "&str",
        variants: &exceptions,
        unknown: format!(
            "Err({rt}::Error::UnknownException {{ \
             interface: {iface_name:?}.to_owned(), type_name: type_name.to_owned() }})"
        ),
    };
    enum_decl(&mut w, &exception_enum, &exceptions);
    w.block(&format!("impl {exception_enum}"), |w| {
        exception_factory.emit(w, false);
        w.blank();
        exception_factory.emit(w, true);
        w.blank();
        accessor(w, &exception_enum, "type_name", "&'static str", &exceptions, |v| {
            format!("<{} as {rt}::RemoteException>::TYPE_NAME", v.path)
        });
        w.blank();
        codec_methods(w, rt, &exception_enum, &exceptions);
    });
    w.blank();
    w.block(&format!("impl std::fmt::Display for {exception_enum}"), |w| {
        w.block("fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result", |w| {
            dispatch(w, &exception_enum, &exceptions, "exception", |_| {
                "std::fmt::Display::fmt(exception, f)".to_owned()
            });
        });
    });
    w.blank();
    w.writeln(&format!("impl std::error::Error for {exception_enum} {{}}"));

    tracing::debug!(
        interface = %interface.name,
        requests = requests.len(),
        responses = responses.len(),
        exceptions = exceptions.len(),
        "emitted dispatch tables"
    );
    Ok(w.finish())
}

fn enum_decl(w: &mut SourceWriter, ident: &str, variants: &[Variant]) {
    w.writeln("#[derive(Debug, Clone, PartialEq)]");
    w.block(&format!("pub enum {ident}"), |w| {
        for v in variants {
            w.writeln(&format!("{}({}),", v.ident, v.path));
        }
    });
    w.blank();
}

/// The `create` and `decode` constructors of one dispatch enum.
struct Factory<'a> {
    rt: &'a str,
    enum_ident: &'a str,
    key: &'a str,
    key_type: &'a str,
    variants: &'a [Variant],
    /// Expression for a key no variant matches.
    unknown: String,
}

impl Factory<'_> {
    /// `create` (empty value) or `decode` (read from `de`) keyed by `key`.
    fn emit(&self, w: &mut SourceWriter, decode: bool) {
        let Factory { rt, enum_ident, key, key_type, .. } = *self;
        let signature = if decode {
            format!(
                "pub fn decode({key}: {key_type}, de: &mut Deserializer<'_>) \
                 -> {rt}::Result<Self>"
            )
        } else {
            format!("pub fn create({key}: {key_type}) -> {rt}::Result<Self>")
        };
        w.block(&signature, |w| {
            w.block(&format!("match {key}"), |w| {
                for v in self.variants {
                    let value = if decode {
                        format!("<{} as Xdr>::deserialize(de)?", v.path)
                    } else {
                        format!("{}::default()", v.path)
                    };
                    w.writeln(&format!("{} => Ok({enum_ident}::{}({value})),", v.key, v.ident));
                }
                w.writeln(&format!("_ => {},", self.unknown));
            });
        });
    }
}

fn accessor(
    w: &mut SourceWriter,
    enum_ident: &str,
    name: &str,
    ty: &str,
    variants: &[Variant],
    value: impl Fn(&Variant) -> String,
) {
    w.block(&format!("pub fn {name}(&self) -> {ty}"), |w| {
        dispatch(w, enum_ident, variants, "_", value)
    });
}

/// `match self { Enum::Variant(binding) => arm(variant), .. }`
fn dispatch(
    w: &mut SourceWriter,
    enum_ident: &str,
    variants: &[Variant],
    binding: &str,
    arm: impl Fn(&Variant) -> String,
) {
    if variants.is_empty() {
        w.writeln("match *self {}");
        return;
    }
    w.block("match self", |w| {
        for v in variants {
            w.writeln(&format!("{enum_ident}::{}({binding}) => {},", v.ident, arm(v)));
        }
    });
}

fn codec_methods(w: &mut SourceWriter, rt: &str, enum_ident: &str, variants: &[Variant]) {
    w.block(
        &format!(
            "pub fn serialize<W: std::io::Write>(&self, ser: &mut Serializer<W>) \
             -> {rt}::Result<()>"
        ),
        |w| {
            dispatch(w, enum_ident, variants, "value", |_| {
                "Xdr::serialize(value, ser)".to_owned()
            })
        },
    );
    w.blank();
    w.block("pub fn size(&self) -> usize", |w| {
        dispatch(w, enum_ident, variants, "value", |_| "Xdr::size(value)".to_owned())
    });
}
