// Generated by xdr-idlc from `xtreemfs::interfaces::Stat`. Do not edit.
#![allow(unused_imports, unused_variables, clippy::all)]

use xdr_idl::{Deserializer, Serializer, Xdr, opaque_size, string_size};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Stat {
    pub mode: u32,
    pub size: u64,
    pub mtime: i64,
    pub blocks: i8,
    pub flags: u8,
    pub weight: i16,
    pub ratio: f32,
    pub load: f64,
    pub readonly: bool,
    pub status: crate::generated::xtreemfs::interfaces::StatusCode,
    pub attrs: crate::generated::xtreemfs::interfaces::XAttrMap,
    pub data: Vec<u8>,
}

impl Stat {
    pub fn new(mode: u32, size: u64, mtime: i64, blocks: i8, flags: u8, weight: i16, ratio: f32, load: f64, readonly: bool, status: crate::generated::xtreemfs::interfaces::StatusCode, attrs: crate::generated::xtreemfs::interfaces::XAttrMap, data: Vec<u8>) -> Self {
        Self { mode, size, mtime, blocks, flags, weight, ratio, load, readonly, status, attrs, data }
    }
}

impl Xdr for Stat {
    fn serialize<W: std::io::Write>(&self, ser: &mut Serializer<W>) -> xdr_idl::Result<()> {
        ser.write_u32(self.mode)?;
        ser.write_u64(self.size)?;
        ser.write_i64(self.mtime)?;
        ser.write_i8(self.blocks)?;
        ser.write_u8(self.flags)?;
        ser.write_i16(self.weight)?;
        ser.write_f32(self.ratio)?;
        ser.write_f64(self.load)?;
        ser.write_bool(self.readonly)?;
        ser.write_enum(i32::from(self.status))?;
        Xdr::serialize(&self.attrs, ser)?;
        ser.write_opaque(&self.data)?;
        Ok(())
    }

    fn deserialize(de: &mut Deserializer<'_>) -> xdr_idl::Result<Self> {
        Ok(Self {
            mode: de.read_u32()?,
            size: de.read_u64()?,
            mtime: de.read_i64()?,
            blocks: de.read_i8()?,
            flags: de.read_u8()?,
            weight: de.read_i16()?,
            ratio: de.read_f32()?,
            load: de.read_f64()?,
            readonly: de.read_bool()?,
            status: crate::generated::xtreemfs::interfaces::StatusCode::try_from(de.read_enum()?)?,
            attrs: <crate::generated::xtreemfs::interfaces::XAttrMap as Xdr>::deserialize(de)?,
            data: de.read_opaque()?,
        })
    }

    fn size(&self) -> usize {
        44 + Xdr::size(&self.attrs) + opaque_size(&self.data)
    }
}
