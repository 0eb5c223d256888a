//! Codec units for user and synthesized types.
//!
//! Each function renders the complete source of one unit: the Rust
//! declaration, its constructors, and an `impl Xdr` whose `serialize`,
//! `deserialize` and `size` all walk members in declaration order.

use super::naming::{self, Namespace, shouty, snake, upper_camel};
use super::writer::SourceWriter;
use super::{ImportSet, header};
use crate::error::GenError;
use crate::model::{
    Constant, EnumType, MapType, QualifiedName, SequenceType, StructKind, StructType,
};
use crate::traits::{Registry, TypeTraits};

struct Field {
    ident: String,
    traits: TypeTraits,
}

fn fields(registry: &Registry<'_>, s: &StructType) -> Result<Vec<Field>, GenError> {
    let mut names = Namespace::new(&s.name);
    s.members
        .iter()
        .map(|m| {
            let ident = snake(&m.name);
            names.claim(ident.clone(), &m.name)?;
            Ok(Field {
                ident,
                traits: registry.traits(m.ty)?,
            })
        })
        .collect()
}

/// `a + b + c`, folding fixed-size terms into one literal.
fn sum_sizes(terms: impl IntoIterator<Item = (Option<usize>, String)>) -> String {
    let mut fixed = 0;
    let mut variable = Vec::new();
    for (size, expr) in terms {
        match size {
            Some(n) => fixed += n,
            None => variable.push(expr),
        }
    }
    if fixed > 0 || variable.is_empty() {
        variable.insert(0, fixed.to_string());
    }
    variable.join(" + ")
}

fn serialize_fn(
    w: &mut SourceWriter,
    rt: &str,
    unused: bool,
    body: impl FnOnce(&mut SourceWriter),
) {
    let ser = if unused { "_ser" } else { "ser" };
    w.block(
        &format!(
            "fn serialize<W: std::io::Write>(&self, {ser}: &mut Serializer<W>) -> {rt}::Result<()>"
        ),
        |w| {
            body(w);
            w.writeln("Ok(())");
        },
    );
}

fn deserialize_fn(
    w: &mut SourceWriter,
    rt: &str,
    unused: bool,
    body: impl FnOnce(&mut SourceWriter),
) {
    let de = if unused { "_de" } else { "de" };
    w.block(
        &format!("fn deserialize({de}: &mut Deserializer<'_>) -> {rt}::Result<Self>"),
        body,
    );
}

// ── Structs, exceptions, requests, responses ───────────────────────────────

/// Render a struct unit. `response` is the paired response of a request
/// struct, `None` for everything else and for oneway requests.
pub fn struct_unit(
    registry: &Registry<'_>,
    s: &StructType,
    response: Option<&StructType>,
) -> Result<String, GenError> {
    let config = registry.config();
    let rt = config.runtime_crate.as_str();
    let ident = upper_camel(s.name.name());
    let fields = fields(registry, s)?;

    let mut w = SourceWriter::new();
    header(&mut w, config, &s.name, ImportSet::Codec);

    match s.kind {
        StructKind::Request { .. } => {
            let op = operation_name(&s.name, "Request");
            w.writeln(&format!("/// Inbound parameters of `{op}`."));
        }
        StructKind::Response { .. } => {
            let op = operation_name(&s.name, "Response");
            w.writeln(&format!("/// Outbound parameters of `{op}`."));
        }
        StructKind::Plain | StructKind::Exception => {}
    }
    w.writeln("#[derive(Debug, Clone, PartialEq, Default)]");
    w.block(&format!("pub struct {ident}"), |w| {
        for f in &fields {
            w.writeln(&format!("pub {}: {},", f.ident, f.traits.declaration_type()));
        }
    });
    w.blank();

    let args: Vec<String> = fields
        .iter()
        .map(|f| format!("{}: {}", f.ident, f.traits.declaration_type()))
        .collect();
    let idents: Vec<&str> = fields.iter().map(|f| f.ident.as_str()).collect();
    let literal = format!("Self {{ {} }}", idents.join(", "));
    let literal = if idents.is_empty() { "Self {}".to_owned() } else { literal };

    w.block(&format!("impl {ident}"), |w| {
        w.block(&format!("pub fn new({}) -> Self", args.join(", ")), |w| {
            w.writeln(&literal);
        });
        if let Some(response) = response {
            w.blank();
            let response_path = registry.path(&response.name);
            w.writeln("/// An empty response for this request.");
            w.block(
                &format!("pub fn create_default_response(&self) -> {response_path}"),
                |w| w.writeln(&format!("{response_path}::default()")),
            );
        }
    });
    w.blank();

    w.block(&format!("impl Xdr for {ident}"), |w| {
        serialize_fn(w, rt, fields.is_empty(), |w| {
            for f in &fields {
                w.writeln(&f.traits.serialize(&format!("self.{}", f.ident)));
            }
        });
        w.blank();
        // Field initializers run in declaration order, which is wire order.
        deserialize_fn(w, rt, fields.is_empty(), |w| {
            if fields.is_empty() {
                w.writeln("Ok(Self {})");
                return;
            }
            w.writeln("Ok(Self {");
            w.indent();
            for f in &fields {
                w.writeln(&format!("{}: {},", f.ident, f.traits.read_expr()));
            }
            w.dedent();
            w.writeln("})");
        });
        w.blank();
        w.block("fn size(&self) -> usize", |w| {
            w.writeln(&sum_sizes(fields.iter().map(|f| {
                (
                    f.traits.fixed_size(),
                    f.traits.size(&format!("self.{}", f.ident)),
                )
            })));
        });
    });

    match s.kind {
        StructKind::Plain => {}
        StructKind::Exception => {
            w.blank();
            w.block(&format!("impl std::fmt::Display for {ident}"), |w| {
                w.block(
                    "fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result",
                    |w| {
                        w.writeln(&format!(
                            "write!(f, \"{{}}: {{:?}}\", \
                             <Self as {rt}::RemoteException>::TYPE_NAME, self)"
                        ))
                    },
                );
            });
            w.blank();
            w.writeln(&format!("impl std::error::Error for {ident} {{}}"));
            w.blank();
            w.block(&format!("impl {rt}::RemoteException for {ident}"), |w| {
                w.writeln(&format!(
                    "const TYPE_NAME: &'static str = {:?};",
                    naming::wire_name(config, &s.name)
                ));
            });
        }
        StructKind::Request { operation_number } => {
            w.blank();
            w.block(&format!("impl {rt}::Request for {ident}"), |w| {
                w.writeln(&format!("const OPERATION_NUMBER: u32 = {operation_number};"));
            });
        }
        StructKind::Response { operation_number } => {
            w.blank();
            w.block(&format!("impl {rt}::Response for {ident}"), |w| {
                w.writeln(&format!("const OPERATION_NUMBER: u32 = {operation_number};"));
            });
        }
    }

    Ok(w.finish())
}

fn operation_name(name: &QualifiedName, suffix: &str) -> String {
    let op = name.name().strip_suffix(suffix).unwrap_or(name.name());
    let mut segments = name.scope().to_vec();
    segments.push(op.to_owned());
    segments.join("::")
}

// ── Sequences ──────────────────────────────────────────────────────────────

fn count_exceeded(rt: &str, type_name: &QualifiedName, got: &str) -> String {
    format!(
        "{rt}::Error::CountExceeded {{ type_name: {:?}.to_owned(), \
         max: Self::MAX_ELEMS, got: {got} as u64 }}",
        type_name.to_string()
    )
}

pub fn sequence_unit(registry: &Registry<'_>, s: &SequenceType) -> Result<String, GenError> {
    let config = registry.config();
    let rt = config.runtime_crate.as_str();
    let ident = upper_camel(s.name.name());
    let element = registry.traits(s.element)?;
    let elem_ty = element.boxed_type();
    let type_name = s.name.to_string();

    let mut w = SourceWriter::new();
    header(&mut w, config, &s.name, ImportSet::Codec);

    w.writeln(&format!(
        "/// A sequence of `{elem_ty}` holding at most [`{ident}::MAX_ELEMS`] elements."
    ));
    w.writeln("#[derive(Debug, Clone, PartialEq, Default)]");
    w.writeln(&format!("pub struct {ident}(Vec<{elem_ty}>);"));
    w.blank();

    w.block(&format!("impl {ident}"), |w| {
        w.writeln(&format!("pub const MAX_ELEMS: u32 = {};", config.max_array_elems));
        w.blank();
        w.block("pub fn new() -> Self", |w| w.writeln("Self::default()"));
        w.blank();
        w.writeln("/// Append `value`, failing if the sequence is full.");
        w.block(&format!("pub fn push(&mut self, value: {elem_ty}) -> {rt}::Result<()>"), |w| {
            w.block("if self.0.len() >= Self::MAX_ELEMS as usize", |w| {
                w.writeln(&format!(
                    "return Err({});",
                    count_exceeded(rt, &s.name, "(self.0.len() + 1)")
                ));
            });
            w.writeln("self.0.push(value);");
            w.writeln("Ok(())");
        });
        w.blank();
        w.block(&format!("pub fn into_inner(self) -> Vec<{elem_ty}>"), |w| w.writeln("self.0"));
    });
    w.blank();

    w.block(&format!("impl TryFrom<Vec<{elem_ty}>> for {ident}"), |w| {
        w.writeln(&format!("type Error = {rt}::Error;"));
        w.blank();
        w.block(&format!("fn try_from(values: Vec<{elem_ty}>) -> {rt}::Result<Self>"), |w| {
            w.block("if values.len() > Self::MAX_ELEMS as usize", |w| {
                w.writeln(&format!("return Err({});", count_exceeded(rt, &s.name, "values.len()")));
            });
            w.writeln("Ok(Self(values))");
        });
    });
    w.blank();

    w.block(&format!("impl std::ops::Deref for {ident}"), |w| {
        w.writeln(&format!("type Target = [{elem_ty}];"));
        w.blank();
        w.block(&format!("fn deref(&self) -> &[{elem_ty}]"), |w| w.writeln("&self.0"));
    });
    w.blank();

    w.block(&format!("impl Xdr for {ident}"), |w| {
        serialize_fn(w, rt, false, |w| {
            w.writeln("ser.write_count(self.0.len())?;");
            w.block("for value in &self.0", |w| w.writeln(&element.serialize("*value")));
        });
        w.blank();
        deserialize_fn(w, rt, false, |w| {
            w.writeln(&format!("let count = de.read_count({type_name:?}, Self::MAX_ELEMS)?;"));
            w.writeln("let mut values = Vec::with_capacity(count.min(de.remaining().len()));");
            w.block("for _ in 0..count", |w| {
                w.writeln(&element.deserialize("value"));
                w.writeln("values.push(value);");
            });
            w.writeln("Ok(Self(values))");
        });
        w.blank();
        w.block("fn size(&self) -> usize", |w| match element.fixed_size() {
            Some(n) => w.writeln(&format!("4 + self.0.len() * {n}")),
            None => w.writeln(&format!(
                "4 + self.0.iter().map(|value| {}).sum::<usize>()",
                element.size("*value")
            )),
        });
    });

    Ok(w.finish())
}

// ── Maps ───────────────────────────────────────────────────────────────────

pub fn map_unit(registry: &Registry<'_>, m: &MapType) -> Result<String, GenError> {
    let config = registry.config();
    let rt = config.runtime_crate.as_str();
    let ident = upper_camel(m.name.name());
    let key = registry.traits(m.key)?;
    let value = registry.traits(m.value)?;
    let key_ty = key.boxed_type();
    let value_ty = value.boxed_type();
    let inner = format!("std::collections::BTreeMap<{key_ty}, {value_ty}>");
    let type_name = m.name.to_string();

    let mut w = SourceWriter::new();
    header(&mut w, config, &m.name, ImportSet::Codec);

    w.writeln(&format!(
        "/// A map from `{key_ty}` to `{value_ty}` holding at most [`{ident}::MAX_ELEMS`] pairs."
    ));
    w.writeln("///");
    w.writeln("/// Pairs are encoded in ascending key order.");
    w.writeln("#[derive(Debug, Clone, PartialEq, Default)]");
    w.writeln(&format!("pub struct {ident}({inner});"));
    w.blank();

    w.block(&format!("impl {ident}"), |w| {
        w.writeln(&format!("pub const MAX_ELEMS: u32 = {};", config.max_array_elems));
        w.blank();
        w.block("pub fn new() -> Self", |w| w.writeln("Self::default()"));
        w.blank();
        w.writeln("/// Insert a pair, failing if the map is full and `key` is new.");
        w.block(
            &format!(
                "pub fn insert(&mut self, key: {key_ty}, value: {value_ty}) \
                 -> {rt}::Result<Option<{value_ty}>>"
            ),
            |w| {
                w.block(
                    "if !self.0.contains_key(&key) && self.0.len() >= Self::MAX_ELEMS as usize",
                    |w| {
                        w.writeln(&format!(
                            "return Err({});",
                            count_exceeded(rt, &m.name, "(self.0.len() + 1)")
                        ));
                    },
                );
                w.writeln("Ok(self.0.insert(key, value))");
            },
        );
        w.blank();
        w.block(&format!("pub fn into_inner(self) -> {inner}"), |w| w.writeln("self.0"));
    });
    w.blank();

    w.block(&format!("impl TryFrom<{inner}> for {ident}"), |w| {
        w.writeln(&format!("type Error = {rt}::Error;"));
        w.blank();
        w.block(&format!("fn try_from(entries: {inner}) -> {rt}::Result<Self>"), |w| {
            w.block("if entries.len() > Self::MAX_ELEMS as usize", |w| {
                let err = count_exceeded(rt, &m.name, "entries.len()");
                w.writeln(&format!("return Err({err});"));
            });
            w.writeln("Ok(Self(entries))");
        });
    });
    w.blank();

    w.block(&format!("impl std::ops::Deref for {ident}"), |w| {
        w.writeln(&format!("type Target = {inner};"));
        w.blank();
        w.block(&format!("fn deref(&self) -> &{inner}"), |w| w.writeln("&self.0"));
    });
    w.blank();

    w.block(&format!("impl Xdr for {ident}"), |w| {
        serialize_fn(w, rt, false, |w| {
            w.writeln("ser.write_count(self.0.len())?;");
            w.block("for (key, value) in &self.0", |w| {
                w.writeln(&key.serialize("*key"));
                w.writeln(&value.serialize("*value"));
            });
        });
        w.blank();
        deserialize_fn(w, rt, false, |w| {
            w.writeln(&format!("let count = de.read_count({type_name:?}, Self::MAX_ELEMS)?;"));
            w.writeln("let mut entries = std::collections::BTreeMap::new();");
            w.block("for _ in 0..count", |w| {
                w.writeln(&key.deserialize("key"));
                w.writeln(&value.deserialize("value"));
                w.block("if entries.insert(key, value).is_some()", |w| {
                    w.writeln(&format!(
                        "return Err({rt}::Error::DuplicateMapKey {{ \
                         type_name: {type_name:?}.to_owned() }});"
                    ));
                });
            });
            w.writeln("Ok(Self(entries))");
        });
        w.blank();
        w.block("fn size(&self) -> usize", |w| {
            match (key.fixed_size(), value.fixed_size()) {
                (Some(k), Some(v)) => w.writeln(&format!("4 + self.0.len() * {}", k + v)),
                (k, v) => w.writeln(&format!(
                    "4 + self.0.iter().map(|(key, value)| {}).sum::<usize>()",
                    sum_sizes([(k, key.size("*key")), (v, value.size("*value"))])
                )),
            }
        });
    });

    Ok(w.finish())
}

// ── Enums ──────────────────────────────────────────────────────────────────

pub fn enum_unit(registry: &Registry<'_>, e: &EnumType) -> Result<String, GenError> {
    let config = registry.config();
    let rt = config.runtime_crate.as_str();
    let ident = upper_camel(e.name.name());
    let type_name = e.name.to_string();

    let mut names = Namespace::new(&e.name);
    for enumerator in &e.enumerators {
        names.claim(upper_camel(&enumerator.name), &enumerator.name)?;
    }

    let mut w = SourceWriter::new();
    header(&mut w, config, &e.name, ImportSet::Codec);

    w.writeln("#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]");
    w.writeln("#[repr(i32)]");
    w.block(&format!("pub enum {ident}"), |w| {
        for (i, enumerator) in e.enumerators.iter().enumerate() {
            if i == 0 {
                w.writeln("#[default]");
            }
            w.writeln(&format!("{} = {},", upper_camel(&enumerator.name), enumerator.value));
        }
    });
    w.blank();

    w.block(&format!("impl From<{ident}> for i32"), |w| {
        w.block(&format!("fn from(value: {ident}) -> i32"), |w| w.writeln("value as i32"));
    });
    w.blank();

    w.block(&format!("impl TryFrom<i32> for {ident}"), |w| {
        w.writeln(&format!("type Error = {rt}::Error;"));
        w.blank();
        w.block(&format!("fn try_from(value: i32) -> {rt}::Result<Self>"), |w| {
            w.block("match value", |w| {
                for enumerator in &e.enumerators {
                    w.writeln(&format!(
                        "{} => Ok({ident}::{}),",
                        enumerator.value,
                        upper_camel(&enumerator.name)
                    ));
                }
                w.writeln(&format!(
                    "_ => Err({rt}::Error::InvalidEnumValue {{ \
                     type_name: {type_name:?}.to_owned(), value }}),"
                ));
            });
        });
    });
    w.blank();

    w.block(&format!("impl Xdr for {ident}"), |w| {
        serialize_fn(w, rt, false, |w| w.writeln("ser.write_enum(i32::from(*self))?;"));
        w.blank();
        deserialize_fn(w, rt, false, |w| w.writeln("Self::try_from(de.read_enum()?)"));
        w.blank();
        w.block("fn size(&self) -> usize", |w| w.writeln("4"));
    });

    Ok(w.finish())
}

// ── Constants ──────────────────────────────────────────────────────────────

pub fn constants_unit(
    registry: &Registry<'_>,
    scope: &QualifiedName,
    constants: &[Constant],
) -> Result<String, GenError> {
    let mut w = SourceWriter::new();
    header(&mut w, registry.config(), scope, ImportSet::None);

    let mut names = Namespace::new(scope);
    for constant in constants {
        let ident = shouty(constant.name.name());
        names.claim(ident.clone(), constant.name.name())?;
        let traits = registry.traits(constant.ty)?;
        let invalid = |reason: &str| GenError::InvalidConstant {
            name: constant.name.to_string(),
            reason: reason.to_owned(),
        };
        let ty = traits
            .constant_type()
            .ok_or_else(|| invalid("type cannot be a constant"))?;
        let literal = traits
            .constant_literal(&constant.value)
            .ok_or_else(|| invalid("literal does not match type"))?;
        w.writeln(&format!("pub const {ident}: {ty} = {literal};"));
    }

    Ok(w.finish())
}
