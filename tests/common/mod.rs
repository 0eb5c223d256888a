#![allow(dead_code)]

use xdr_idl::model::{self, Document, TypeGraph};

/// A directory-service style document exercising every type variant.
pub const DIR_DOC: &str = r#"{
  "modules": [{
    "name": "xtreemfs",
    "modules": [{
      "name": "interfaces",
      "constants": [
        { "name": "ONCRPC_SCHEME", "type": "string", "value": "oncrpc" },
        { "name": "DEFAULT_PORT", "type": "uint16", "value": 32636 },
        { "name": "LOAD_FACTOR", "type": "double", "value": 0.75 }
      ],
      "types": [
        { "name": "StatusCode", "kind": "enum", "enumerators": [
          { "name": "OK", "value": 0 },
          { "name": "NOT_FOUND", "value": 2 },
          { "name": "DENIED", "value": -1 }
        ]},
        { "name": "AddressMapping", "kind": "struct", "members": [
          { "name": "uuid", "type": "string" },
          { "name": "version", "type": "uint64" },
          { "name": "protocol", "type": "string" },
          { "name": "port", "type": "uint16" },
          { "name": "ttl_s", "type": "int32" },
          { "name": "match_network", "type": "string" }
        ]},
        { "name": "AddressMappingSet", "kind": "sequence", "element": "AddressMapping" },
        { "name": "StringSet", "kind": "sequence", "element": "string" },
        { "name": "Stat", "kind": "struct", "members": [
          { "name": "mode", "type": "mode_t" },
          { "name": "size", "type": "uint64" },
          { "name": "mtime", "type": "int64" },
          { "name": "blocks", "type": "int8" },
          { "name": "flags", "type": "uint8" },
          { "name": "weight", "type": "int16" },
          { "name": "ratio", "type": "float" },
          { "name": "load", "type": "double" },
          { "name": "readonly", "type": "bool" },
          { "name": "status", "type": "StatusCode" },
          { "name": "attrs", "type": "XAttrMap" },
          { "name": "data", "type": "buffer" }
        ]},
        { "name": "XAttrMap", "kind": "map", "key": "string", "value": "buffer" },
        { "name": "Inode", "kind": "alias", "target": "uint64" },
        { "name": "Remote", "kind": "forward" }
      ],
      "interfaces": [{
        "name": "DIRInterface",
        "uid": 10001,
        "constants": [{ "name": "SERVICE_NAME", "type": "string", "value": "dir" }],
        "exceptions": [
          { "name": "ConcurrentModificationException", "members": [
            { "name": "stack_trace", "type": "string" }
          ]},
          { "name": "ProtocolException", "members": [
            { "name": "accept_stat", "type": "uint32" },
            { "name": "error_code", "type": "uint32" },
            { "name": "stack_trace", "type": "string" }
          ]}
        ],
        "operations": [
          { "name": "address_mappings_get", "uid": 1, "params": [
            { "name": "uuid", "type": "string", "in": true },
            { "name": "address_mappings", "type": "AddressMappingSet", "out": true }
          ]},
          { "name": "address_mappings_set", "uid": 2, "params": [
            { "name": "address_mappings", "type": "AddressMappingSet", "in": true }
          ], "returns": "uint64" },
          { "name": "stat", "uid": 3, "params": [
            { "name": "inode", "type": "Inode", "in": true },
            { "name": "stbuf", "type": "Stat", "in": true, "out": true }
          ]},
          { "name": "shutdown", "uid": 50, "oneway": true }
        ]
      }]
    }]
  }]
}"#;

pub const IFACE: &str = "xtreemfs::interfaces::DIRInterface";

pub fn document(json: &str) -> Document {
    serde_json::from_str(json).unwrap()
}

pub fn graph() -> TypeGraph {
    model::build(&document(DIR_DOC)).unwrap()
}

/// A one-module document with the given `types` and `interfaces` JSON arrays.
pub fn module_doc(types: &str, interfaces: &str) -> Document {
    document(&format!(
        r#"{{ "modules": [{{ "name": "fs", "types": {types}, "interfaces": {interfaces} }}] }}"#
    ))
}
