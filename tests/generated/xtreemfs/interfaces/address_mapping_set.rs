// Generated by xdr-idlc from `xtreemfs::interfaces::AddressMappingSet`. Do not edit.
#![allow(unused_imports, unused_variables, clippy::all)]

use xdr_idl::{Deserializer, Serializer, Xdr, opaque_size, string_size};

/// A sequence of `crate::generated::xtreemfs::interfaces::AddressMapping` holding at most [`AddressMappingSet::MAX_ELEMS`] elements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AddressMappingSet(Vec<crate::generated::xtreemfs::interfaces::AddressMapping>);

impl AddressMappingSet {
    pub const MAX_ELEMS: u32 = 65536;

    pub fn new() -> Self {
        Self::default()
    }

    /// Append `value`, failing if the sequence is full.
    pub fn push(&mut self, value: crate::generated::xtreemfs::interfaces::AddressMapping) -> xdr_idl::Result<()> {
        if self.0.len() >= Self::MAX_ELEMS as usize {
            return Err(xdr_idl::Error::CountExceeded { type_name: "xtreemfs::interfaces::AddressMappingSet".to_owned(), max: Self::MAX_ELEMS, got: (self.0.len() + 1) as u64 });
        }
        self.0.push(value);
        Ok(())
    }

    pub fn into_inner(self) -> Vec<crate::generated::xtreemfs::interfaces::AddressMapping> {
        self.0
    }
}

impl TryFrom<Vec<crate::generated::xtreemfs::interfaces::AddressMapping>> for AddressMappingSet {
    type Error = xdr_idl::Error;

    fn try_from(values: Vec<crate::generated::xtreemfs::interfaces::AddressMapping>) -> xdr_idl::Result<Self> {
        if values.len() > Self::MAX_ELEMS as usize {
            return Err(xdr_idl::Error::CountExceeded { type_name: "xtreemfs::interfaces::AddressMappingSet".to_owned(), max: Self::MAX_ELEMS, got: values.len() as u64 });
        }
        Ok(Self(values))
    }
}

impl std::ops::Deref for AddressMappingSet {
    type Target = [crate::generated::xtreemfs::interfaces::AddressMapping];

    fn deref(&self) -> &[crate::generated::xtreemfs::interfaces::AddressMapping] {
        &self.0
    }
}

impl Xdr for AddressMappingSet {
    fn serialize<W: std::io::Write>(&self, ser: &mut Serializer<W>) -> xdr_idl::Result<()> {
        ser.write_count(self.0.len())?;
        for value in &self.0 {
            Xdr::serialize(&*value, ser)?;
        }
        Ok(())
    }

    fn deserialize(de: &mut Deserializer<'_>) -> xdr_idl::Result<Self> {
        let count = de.read_count("xtreemfs::interfaces::AddressMappingSet", Self::MAX_ELEMS)?;
        let mut values = Vec::with_capacity(count.min(de.remaining().len()));
        for _ in 0..count {
            let value = <crate::generated::xtreemfs::interfaces::AddressMapping as Xdr>::deserialize(de)?;
            values.push(value);
        }
        Ok(Self(values))
    }

    fn size(&self) -> usize {
        4 + self.0.iter().map(|value| Xdr::size(&*value)).sum::<usize>()
    }
}
