//! Generator configuration.
//!
//! A [`GenConfig`] is passed explicitly to every generator call so that
//! several targets can be generated side by side with different settings.

use serde::{Deserialize, Serialize};

/// Upper bound on sequence element counts and map pair counts.
pub const DEFAULT_MAX_ARRAY_ELEMS: u32 = 65_536;

/// ONC RPC program number base; an interface's program number is this plus its UID.
pub const DEFAULT_BASE_PROGRAM: u32 = 0x2000_0000;

/// What to do when a map type is used as a wire type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MapPolicy {
    /// Maps get a full codec (count prefix + interleaved pairs).
    #[default]
    Codec,
    /// Maps are a fatal generation error.
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenConfig {
    pub max_array_elems: u32,
    pub base_program: u32,
    /// Rust path the generated tree is mounted under, e.g. `crate::proto`.
    pub root_path: String,
    /// Name of the runtime crate generated code refers to.
    pub runtime_crate: String,
    pub map_policy: MapPolicy,
    /// Separator used in fully-qualified exception type names.
    pub name_separator: String,
}

impl Default for GenConfig {
    fn default() -> Self {
        GenConfig {
            max_array_elems: DEFAULT_MAX_ARRAY_ELEMS,
            base_program: DEFAULT_BASE_PROGRAM,
            root_path: "crate".to_owned(),
            runtime_crate: "xdr_idl".to_owned(),
            map_policy: MapPolicy::Codec,
            name_separator: "::".to_owned(),
        }
    }
}

impl GenConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(input: &str) -> serde_json::Result<Self> {
        serde_json::from_str(input)
    }

    pub fn program_number(&self, interface_uid: u32) -> u32 {
        self.base_program.wrapping_add(interface_uid)
    }
}
