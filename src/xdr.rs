//! Traits implemented by generated codecs.
//!
//! Every compound type emitted by the compiler implements [`Xdr`]. The three
//! methods are pure: they touch nothing but `self` and the buffer they are
//! handed, so independent buffers can be encoded and decoded concurrently.
//!
//! The central invariant is `value.size() == to_bytes(&value)?.len()`.

use crate::de::Deserializer;
use crate::error::Result;
use crate::ser::Serializer;
use std::io::Write;

pub trait Xdr: Sized {
    /// Write `self` in wire order.
    fn serialize<W: Write>(&self, ser: &mut Serializer<W>) -> Result<()>;

    /// Read a fresh value.
    fn deserialize(de: &mut Deserializer<'_>) -> Result<Self>;

    /// Exact number of bytes [`serialize`](Xdr::serialize) writes.
    fn size(&self) -> usize;
}

/// A request struct synthesized from an operation's inbound parameters.
pub trait Request: Xdr + Default {
    /// The operation's procedure number (its opcode).
    const OPERATION_NUMBER: u32;
}

/// A response struct synthesized from an operation's outbound parameters
/// and return value.
pub trait Response: Xdr + Default {
    const OPERATION_NUMBER: u32;
}

/// An exception struct. Exceptions are tagged on the wire by their
/// fully-qualified type name rather than a numeric code.
pub trait RemoteException: Xdr + Default + std::error::Error {
    const TYPE_NAME: &'static str;
}

/// `()` is void: zero bytes.
impl Xdr for () {
    fn serialize<W: Write>(&self, _ser: &mut Serializer<W>) -> Result<()> {
        Ok(())
    }

    fn deserialize(_de: &mut Deserializer<'_>) -> Result<Self> {
        Ok(())
    }

    fn size(&self) -> usize {
        0
    }
}

macro_rules! impl_xdr_primitive {
    ($($ty:ty => $write:ident, $read:ident, $size:expr;)*) => {
        $(
            impl Xdr for $ty {
                fn serialize<W: Write>(&self, ser: &mut Serializer<W>) -> Result<()> {
                    ser.$write(*self)
                }

                fn deserialize(de: &mut Deserializer<'_>) -> Result<Self> {
                    de.$read()
                }

                fn size(&self) -> usize {
                    $size
                }
            }
        )*
    };
}

impl_xdr_primitive! {
    bool => write_bool, read_bool, 4;
    i8 => write_i8, read_i8, 1;
    u8 => write_u8, read_u8, 1;
    i16 => write_i16, read_i16, 2;
    u16 => write_u16, read_u16, 2;
    i32 => write_i32, read_i32, 4;
    u32 => write_u32, read_u32, 4;
    i64 => write_i64, read_i64, 8;
    u64 => write_u64, read_u64, 8;
    f32 => write_f32, read_f32, 4;
    f64 => write_f64, read_f64, 8;
}

impl Xdr for String {
    fn serialize<W: Write>(&self, ser: &mut Serializer<W>) -> Result<()> {
        ser.write_string(self)
    }

    fn deserialize(de: &mut Deserializer<'_>) -> Result<Self> {
        de.read_string()
    }

    fn size(&self) -> usize {
        string_size(self)
    }
}

/// `Vec<u8>` is a variable-length opaque buffer.
impl Xdr for Vec<u8> {
    fn serialize<W: Write>(&self, ser: &mut Serializer<W>) -> Result<()> {
        ser.write_opaque(self)
    }

    fn deserialize(de: &mut Deserializer<'_>) -> Result<Self> {
        de.read_opaque()
    }

    fn size(&self) -> usize {
        opaque_size(self)
    }
}

/// `len` rounded up to the next multiple of 4.
pub const fn padded_len(len: usize) -> usize {
    (len + 3) & !3
}

/// Wire size of a length-prefixed buffer.
pub const fn opaque_size(value: &[u8]) -> usize {
    4 + padded_len(value.len())
}

/// Wire size of a length-prefixed string.
pub const fn string_size(value: &str) -> usize {
    opaque_size(value.as_bytes())
}
