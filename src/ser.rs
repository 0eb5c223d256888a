//! Typed XDR writers used by generated `serialize` bodies.
//!
//! A [`Serializer`] wraps any `std::io::Write`: a `Vec<u8>` for [`to_bytes`],
//! a socket or file for [`to_writer`].
//!
//! ## Encoding
//! - Big-endian throughout
//! - Bool: 4-byte integer, 0 or 1
//! - Integers and floats: their natural width (1, 2, 4 or 8 bytes), no padding
//! - Strings/Buffers: 4-byte length prefix + data + 0–3 zero-padding bytes
//! - Sequences/Maps: 4-byte count prefix + elements (maps interleave key, value)
//! - Structs: members encoded consecutively, no length prefix
//! - Enums: 4-byte signed ordinal

use crate::error::{Error, Result};
use crate::xdr::Xdr;
use std::io::Write;

// ── Public entry points ────────────────────────────────────────────────────

/// Serialize `value` into a freshly allocated `Vec<u8>`.
///
/// The buffer is allocated once using [`Xdr::size`].
pub fn to_bytes<T: Xdr>(value: &T) -> Result<Vec<u8>> {
    let mut ser = Serializer::new(Vec::with_capacity(value.size()));
    value.serialize(&mut ser)?;
    Ok(ser.into_writer())
}

/// Serialize `value`, writing directly into `writer`.
///
/// Unlike [`to_bytes`], this never allocates an intermediate buffer. Useful
/// when writing to a `TcpStream`, `File`, or any other `Write` sink.
pub fn to_writer<W: Write, T: Xdr>(mut writer: W, value: &T) -> Result<()> {
    let mut ser = Serializer::new(&mut writer);
    value.serialize(&mut ser)
}

// ── Serializer ─────────────────────────────────────────────────────────────

/// The wire serializer. Generic over any `W: Write`.
///
/// Generated codecs call the typed `write_*` methods directly:
///
/// ```rust
/// use xdr_idl::Serializer;
///
/// let mut buf = Vec::new();
/// let mut ser = Serializer::new(&mut buf);
/// ser.write_u32(42).unwrap();
/// ser.write_u16(7).unwrap();
/// assert_eq!(buf, [0, 0, 0, 42, 0, 7]);
/// ```
pub struct Serializer<W: Write> {
    writer: W,
}

impl<W: Write> Serializer<W> {
    /// Create a new serializer that writes into `writer`.
    pub fn new(writer: W) -> Self {
        Serializer { writer }
    }

    /// Consume the serializer and return the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        Ok(self.writer.write_all(bytes)?)
    }

    // ── Primitives ─────────────────────────────────────────────────────────

    /// Bool → 4-byte integer: 0 (false) or 1 (true)
    pub fn write_bool(&mut self, v: bool) -> Result<()> {
        self.write_u32(u32::from(v))
    }

    pub fn write_i8(&mut self, v: i8) -> Result<()> {
        self.write_all(&v.to_be_bytes())
    }

    pub fn write_u8(&mut self, v: u8) -> Result<()> {
        self.write_all(&[v])
    }

    pub fn write_i16(&mut self, v: i16) -> Result<()> {
        self.write_all(&v.to_be_bytes())
    }

    pub fn write_u16(&mut self, v: u16) -> Result<()> {
        self.write_all(&v.to_be_bytes())
    }

    /// Signed integer: 4 bytes, big-endian, two's complement
    pub fn write_i32(&mut self, v: i32) -> Result<()> {
        self.write_all(&v.to_be_bytes())
    }

    pub fn write_u32(&mut self, v: u32) -> Result<()> {
        self.write_all(&v.to_be_bytes())
    }

    /// Hyper integer: 8 bytes, big-endian, two's complement
    pub fn write_i64(&mut self, v: i64) -> Result<()> {
        self.write_all(&v.to_be_bytes())
    }

    pub fn write_u64(&mut self, v: u64) -> Result<()> {
        self.write_all(&v.to_be_bytes())
    }

    /// IEEE 754 single precision, 4 bytes
    pub fn write_f32(&mut self, v: f32) -> Result<()> {
        self.write_all(&v.to_be_bytes())
    }

    /// IEEE 754 double precision, 8 bytes
    pub fn write_f64(&mut self, v: f64) -> Result<()> {
        self.write_all(&v.to_be_bytes())
    }

    /// Enum ordinal, 4 bytes
    pub fn write_enum(&mut self, v: i32) -> Result<()> {
        self.write_i32(v)
    }

    // ── Variable-length data ───────────────────────────────────────────────

    /// String: 4-byte length + UTF-8 bytes + 0–3 zero-padding bytes
    pub fn write_string(&mut self, v: &str) -> Result<()> {
        self.write_opaque(v.as_bytes())
    }

    /// Buffer: 4-byte length + data + 0–3 zero-padding bytes
    pub fn write_opaque(&mut self, bytes: &[u8]) -> Result<()> {
        let len = u32::try_from(bytes.len()).map_err(|_| Error::LengthOverflow {
            max: u32::MAX,
            got: bytes.len() as u64,
        })?;
        self.write_u32(len)?;
        self.write_padded_bytes(bytes)
    }

    /// Sequence element count or map pair count, 4 bytes
    pub fn write_count(&mut self, count: usize) -> Result<()> {
        let count = u32::try_from(count).map_err(|_| Error::LengthOverflow {
            max: u32::MAX,
            got: count as u64,
        })?;
        self.write_u32(count)
    }

    /// Write `bytes` followed by enough zero bytes to reach a 4-byte boundary.
    pub(crate) fn write_padded_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.write_all(bytes)?;
        let remainder = bytes.len() % 4;
        if remainder != 0 {
            let pad = [0u8; 3];
            self.write_all(&pad[..4 - remainder])?;
        }
        Ok(())
    }
}
