//! # xdr-idl
//!
//! An IDL compiler for XDR (eXternal Data Representation, RFC 4506) based
//! ONC RPC protocols, together with the wire runtime the generated code
//! links against.
//!
//! ## Overview
//!
//! The compiler takes a parsed IDL document (modules, interfaces, operations,
//! structs, enums, exceptions, sequences, maps) and emits Rust source:
//!
//! - per type, an [`Xdr`] implementation with `serialize`, `deserialize` and
//!   an exact `size`;
//! - per operation, a request struct (inbound parameters) and, unless the
//!   operation is oneway, a response struct (outbound parameters followed by
//!   the return value);
//! - per interface, its version and program number, and three dispatch enums
//!   decoding requests and responses by operation number and exceptions by
//!   fully-qualified type name.
//!
//! Pipeline: [`model::build`] → [`traits::Registry`] → [`Compiler`] →
//! [`output::write_units`].
//!
//! ## Wire format
//!
//! | IDL type          | XDR encoding |
//! |-------------------|--------------|
//! | `bool`            | 4-byte unsigned int: 0 (false) or 1 (true); any nonzero decodes as true |
//! | `int8`, `uint8`   | 1 byte |
//! | `int16`, `uint16` | 2 bytes, big-endian |
//! | `int32`, `uint32`, `float` | 4 bytes, big-endian |
//! | `int64`, `uint64`, `double` | 8 bytes, big-endian |
//! | `string`, `buffer` | 4-byte length + bytes + 0-3 zero-padding bytes |
//! | enum              | 4-byte signed ordinal |
//! | sequence          | 4-byte count + encoded elements |
//! | map               | 4-byte count + alternating encoded keys and values |
//! | struct, exception, request, response | members in declaration order |
//!
//! ## Example
//!
//! ```rust
//! use xdr_idl::{Compiler, GenConfig, model::Document};
//!
//! let doc: Document = serde_json::from_str(r#"{
//!     "modules": [{
//!         "name": "fs",
//!         "types": [{ "name": "Stat", "kind": "struct", "members": [
//!             { "name": "size", "type": "uint64" },
//!             { "name": "name", "type": "string" }
//!         ]}]
//!     }]
//! }"#).unwrap();
//!
//! let units = Compiler::new(GenConfig::default()).compile(&doc).unwrap();
//! let stat = units.iter().find(|u| u.qualified_name == "fs::Stat").unwrap();
//! assert!(stat.source.contains("pub struct Stat"));
//! ```

pub mod codegen;
pub mod config;
pub mod de;
pub mod dynamic;
pub mod error;
pub mod model;
pub mod output;
pub mod ser;
pub mod traits;
pub mod xdr;

pub use codegen::{Compiler, GeneratedUnit, UnitKind};
pub use config::{GenConfig, MapPolicy};
pub use de::{Deserializer, from_bytes, from_bytes_partial, from_reader};
pub use error::{Error, GenError, Result};
pub use ser::{Serializer, to_bytes, to_writer};
pub use xdr::{RemoteException, Request, Response, Xdr, opaque_size, padded_len, string_size};
