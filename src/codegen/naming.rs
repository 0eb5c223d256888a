//! IDL identifiers to Rust identifiers and paths.

use crate::config::GenConfig;
use crate::error::GenError;
use crate::model::QualifiedName;
use heck::{ToShoutySnakeCase, ToSnakeCase, ToUpperCamelCase};
use std::collections::HashSet;

const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized",
    "use", "virtual", "where", "while", "yield",
];

/// Keywords that cannot be raw identifiers.
const NON_RAW: &[&str] = &["self", "Self", "super", "crate"];

/// Prelude names a generated type must not shadow inside its own unit.
const PRELUDE_TYPES: &[&str] = &["Box", "Option", "Result", "String", "Vec", "Self"];

fn escape(ident: String) -> String {
    if NON_RAW.contains(&ident.as_str()) {
        format!("{ident}_")
    } else if KEYWORDS.contains(&ident.as_str()) {
        format!("r#{ident}")
    } else if ident.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{ident}")
    } else {
        ident
    }
}

/// `snake_case` for modules, fields, parameters and file stems.
pub fn snake(name: &str) -> String {
    escape(name.to_snake_case())
}

/// `UpperCamelCase` for structs, enums and enum variants.
pub fn upper_camel(name: &str) -> String {
    let ident = name.to_upper_camel_case();
    if PRELUDE_TYPES.contains(&ident.as_str()) {
        format!("{ident}_")
    } else {
        escape(ident)
    }
}

/// `SHOUTY_SNAKE_CASE` for constants.
pub fn shouty(name: &str) -> String {
    escape(name.to_shouty_snake_case())
}

/// File stem (no `r#`) for a type or module unit.
pub fn file_stem(name: &str) -> String {
    snake(name).trim_start_matches("r#").to_owned()
}

/// Rust module path of a scope: the root path followed by every segment in
/// snake case.
pub fn module_path(config: &GenConfig, scope: &[String]) -> String {
    let mut path = config.root_path.clone();
    for segment in scope {
        path.push_str("::");
        path.push_str(&snake(segment));
    }
    path
}

/// Full Rust path of a user type.
pub fn type_path(config: &GenConfig, name: &QualifiedName) -> String {
    format!(
        "{}::{}",
        module_path(config, name.scope()),
        upper_camel(name.name())
    )
}

/// The IDL name an exception is tagged with on the wire.
pub fn wire_name(config: &GenConfig, name: &QualifiedName) -> String {
    name.join(&config.name_separator)
}

/// Rust names already taken in one generated scope.
///
/// Distinct IDL names can map to the same Rust name (`fileId` and `file_id`
/// both become `file_id`); claiming the second one fails.
pub struct Namespace {
    scope: String,
    taken: HashSet<String>,
}

impl Namespace {
    pub fn new(scope: &QualifiedName) -> Self {
        Namespace {
            scope: scope.to_string(),
            taken: HashSet::new(),
        }
    }

    /// A namespace whose `reserved` names are already taken.
    pub fn with_reserved(scope: &QualifiedName, reserved: &[&str]) -> Self {
        let mut namespace = Self::new(scope);
        namespace.taken.extend(reserved.iter().map(|r| (*r).to_owned()));
        namespace
    }

    /// Take `rust_name` for the IDL declaration `idl_name`.
    pub fn claim(&mut self, rust_name: String, idl_name: &str) -> Result<(), GenError> {
        if self.taken.insert(rust_name) {
            Ok(())
        } else {
            Err(GenError::DuplicateName {
                scope: self.scope.clone(),
                name: idl_name.to_owned(),
            })
        }
    }
}
