// Generated by xdr-idlc. Do not edit.
#![allow(unused_imports, unused_variables, clippy::all)]
