use super::Value;
use crate::config::GenConfig;
use crate::de::Deserializer;
use crate::error::{Error, Result};
use crate::model::{Numeric, StructType, Type, TypeGraph, TypeId};
use crate::ser::Serializer;
use crate::xdr::{opaque_size, string_size};
use std::collections::HashSet;
use std::io::Write;

/// Type-directed codec over [`Value`] trees.
///
/// Follows the same encoding rules as the generated codecs: members in
/// declaration order, 4-byte counts capped at `max_array_elems`, map pairs in
/// the order they are held.
pub struct ValueCodec<'g> {
    graph: &'g TypeGraph,
    config: &'g GenConfig,
}

fn mismatch(ty: &Type) -> Error {
    Error::TypeMismatch(ty.describe())
}

impl<'g> ValueCodec<'g> {
    pub fn new(graph: &'g TypeGraph, config: &'g GenConfig) -> Self {
        ValueCodec { graph, config }
    }

    pub fn graph(&self) -> &'g TypeGraph {
        self.graph
    }

    pub fn to_bytes(&self, id: TypeId, value: &Value) -> Result<Vec<u8>> {
        let mut ser = Serializer::new(Vec::with_capacity(self.size(id, value)?));
        self.serialize(id, value, &mut ser)?;
        Ok(ser.into_writer())
    }

    /// Decode one value of type `id`. Trailing bytes are ignored.
    pub fn from_bytes(&self, id: TypeId, input: &[u8]) -> Result<Value> {
        self.deserialize(id, &mut Deserializer::new(input))
    }

    pub fn serialize<W: Write>(
        &self,
        id: TypeId,
        value: &Value,
        ser: &mut Serializer<W>,
    ) -> Result<()> {
        let ty = self.graph.get(id);
        match (ty, value) {
            (Type::Bool, Value::Bool(v)) => ser.write_bool(*v),
            (Type::Numeric(n), v) => write_numeric(*n, v, ser).ok_or_else(|| mismatch(ty))?,
            (Type::String { .. }, Value::String(v)) => ser.write_string(v),
            (Type::Buffer, Value::Buffer(v)) => ser.write_opaque(v),
            (Type::Enum(e), Value::Enum(v)) => {
                if !e.contains(*v) {
                    return Err(Error::InvalidEnumValue {
                        type_name: e.name.to_string(),
                        value: *v,
                    });
                }
                ser.write_enum(*v)
            }
            (Type::Struct(s), v) => self.serialize_struct(s, v, ser),
            (Type::Sequence(s), Value::Sequence(values)) => {
                self.check_count(&s.name.to_string(), values.len())?;
                ser.write_count(values.len())?;
                for v in values {
                    self.serialize(s.element, v, ser)?;
                }
                Ok(())
            }
            (Type::Map(m), Value::Map(pairs)) => {
                self.check_count(&m.name.to_string(), pairs.len())?;
                // Keys compare by encoding, so the decoder sees the same duplicates.
                let mut keys = HashSet::with_capacity(pairs.len());
                for (k, _) in pairs {
                    if !keys.insert(self.to_bytes(m.key, k)?) {
                        return Err(Error::DuplicateMapKey {
                            type_name: m.name.to_string(),
                        });
                    }
                }
                ser.write_count(pairs.len())?;
                for (k, v) in pairs {
                    self.serialize(m.key, k, ser)?;
                    self.serialize(m.value, v, ser)?;
                }
                Ok(())
            }
            _ => Err(mismatch(ty)),
        }
    }

    pub fn serialize_struct<W: Write>(
        &self,
        s: &StructType,
        value: &Value,
        ser: &mut Serializer<W>,
    ) -> Result<()> {
        let fields = self.struct_fields(s, value)?;
        for (member, (_, v)) in s.members.iter().zip(fields) {
            self.serialize(member.ty, v, ser)?;
        }
        Ok(())
    }

    pub fn deserialize(&self, id: TypeId, de: &mut Deserializer<'_>) -> Result<Value> {
        let value = match self.graph.get(id) {
            Type::Bool => Value::Bool(de.read_bool()?),
            Type::Numeric(n) => read_numeric(*n, de)?,
            Type::String { .. } => Value::String(de.read_string()?),
            Type::Buffer => Value::Buffer(de.read_opaque()?),
            Type::Enum(e) => {
                let v = de.read_enum()?;
                if !e.contains(v) {
                    return Err(Error::InvalidEnumValue {
                        type_name: e.name.to_string(),
                        value: v,
                    });
                }
                Value::Enum(v)
            }
            Type::Struct(s) => self.deserialize_struct(s, de)?,
            Type::Sequence(s) => {
                let count = de.read_count(&s.name.to_string(), self.config.max_array_elems)?;
                let mut values = Vec::with_capacity(count.min(de.remaining().len()));
                for _ in 0..count {
                    values.push(self.deserialize(s.element, de)?);
                }
                Value::Sequence(values)
            }
            Type::Map(m) => {
                let type_name = m.name.to_string();
                let count = de.read_count(&type_name, self.config.max_array_elems)?;
                let mut pairs = Vec::with_capacity(count.min(de.remaining().len()));
                let mut seen = HashSet::with_capacity(pairs.capacity());
                for _ in 0..count {
                    let key = self.deserialize(m.key, de)?;
                    // Keys compare by canonical encoding.
                    if !seen.insert(self.to_bytes(m.key, &key)?) {
                        return Err(Error::DuplicateMapKey { type_name });
                    }
                    let value = self.deserialize(m.value, de)?;
                    pairs.push((key, value));
                }
                Value::Map(pairs)
            }
            Type::Forward(name) => return Err(Error::TypeMismatch(name.to_string())),
        };
        Ok(value)
    }

    pub fn deserialize_struct(&self, s: &StructType, de: &mut Deserializer<'_>) -> Result<Value> {
        let mut fields = Vec::with_capacity(s.members.len());
        for member in &s.members {
            fields.push((member.name.clone(), self.deserialize(member.ty, de)?));
        }
        Ok(Value::Struct {
            type_name: s.name.to_string(),
            fields,
        })
    }

    /// Exact number of bytes [`serialize`](Self::serialize) writes.
    pub fn size(&self, id: TypeId, value: &Value) -> Result<usize> {
        let ty = self.graph.get(id);
        let size = match (ty, value) {
            (Type::Bool, Value::Bool(_)) | (Type::Enum(_), Value::Enum(_)) => 4,
            (Type::Numeric(n), Value::Int(_) | Value::UInt(_) | Value::Float(_)) => n.width(),
            (Type::String { .. }, Value::String(v)) => string_size(v),
            (Type::Buffer, Value::Buffer(v)) => opaque_size(v),
            (Type::Struct(s), v) => self.size_struct(s, v)?,
            (Type::Sequence(s), Value::Sequence(values)) => {
                let mut size = 4;
                for v in values {
                    size += self.size(s.element, v)?;
                }
                size
            }
            (Type::Map(m), Value::Map(pairs)) => {
                let mut size = 4;
                for (k, v) in pairs {
                    size += self.size(m.key, k)? + self.size(m.value, v)?;
                }
                size
            }
            _ => return Err(mismatch(ty)),
        };
        Ok(size)
    }

    pub fn size_struct(&self, s: &StructType, value: &Value) -> Result<usize> {
        let fields = self.struct_fields(s, value)?;
        let mut size = 0;
        for (member, (_, v)) in s.members.iter().zip(fields) {
            size += self.size(member.ty, v)?;
        }
        Ok(size)
    }

    /// The fields of `value`, checked against the members of `s`.
    fn struct_fields<'v>(&self, s: &StructType, value: &'v Value) -> Result<&'v [(String, Value)]> {
        match value {
            Value::Struct { fields, .. }
                if fields.len() == s.members.len()
                    && s.members.iter().zip(fields).all(|(m, (name, _))| &m.name == name) =>
            {
                Ok(fields.as_slice())
            }
            _ => Err(Error::TypeMismatch(s.name.to_string())),
        }
    }

    fn check_count(&self, type_name: &str, len: usize) -> Result<()> {
        if len > self.config.max_array_elems as usize {
            return Err(Error::CountExceeded {
                type_name: type_name.to_owned(),
                max: self.config.max_array_elems,
                got: len as u64,
            });
        }
        Ok(())
    }
}

/// `None` if the value is not representable in `n`.
fn write_numeric<W: Write>(
    n: Numeric,
    value: &Value,
    ser: &mut Serializer<W>,
) -> Option<Result<()>> {
    let result = match (n, value) {
        (Numeric::I8, Value::Int(v)) => ser.write_i8(i8::try_from(*v).ok()?),
        (Numeric::U8, Value::UInt(v)) => ser.write_u8(u8::try_from(*v).ok()?),
        (Numeric::I16, Value::Int(v)) => ser.write_i16(i16::try_from(*v).ok()?),
        (Numeric::U16, Value::UInt(v)) => ser.write_u16(u16::try_from(*v).ok()?),
        (Numeric::I32, Value::Int(v)) => ser.write_i32(i32::try_from(*v).ok()?),
        (Numeric::U32, Value::UInt(v)) => ser.write_u32(u32::try_from(*v).ok()?),
        (Numeric::I64, Value::Int(v)) => ser.write_i64(*v),
        (Numeric::U64, Value::UInt(v)) => ser.write_u64(*v),
        (Numeric::F32, Value::Float(v)) => ser.write_f32(*v as f32),
        (Numeric::F64, Value::Float(v)) => ser.write_f64(*v),
        _ => return None,
    };
    Some(result)
}

fn read_numeric(n: Numeric, de: &mut Deserializer<'_>) -> Result<Value> {
    let value = match n {
        Numeric::I8 => Value::Int(de.read_i8()?.into()),
        Numeric::U8 => Value::UInt(de.read_u8()?.into()),
        Numeric::I16 => Value::Int(de.read_i16()?.into()),
        Numeric::U16 => Value::UInt(de.read_u16()?.into()),
        Numeric::I32 => Value::Int(de.read_i32()?.into()),
        Numeric::U32 => Value::UInt(de.read_u32()?.into()),
        Numeric::I64 => Value::Int(de.read_i64()?),
        Numeric::U64 => Value::UInt(de.read_u64()?),
        Numeric::F32 => Value::Float(de.read_f32()?.into()),
        Numeric::F64 => Value::Float(de.read_f64()?),
    };
    Ok(value)
}
