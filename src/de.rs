//! Wire deserializer

use crate::error::{Error, Result};
use crate::xdr::Xdr;
use std::io::Read;

/// Deserialize a value from bytes. Trailing bytes are ignored.
pub fn from_bytes<T: Xdr>(input: &[u8]) -> Result<T> {
    let mut de = Deserializer::new(input);
    T::deserialize(&mut de)
}

/// Deserialize a value from bytes, also returning remaining unconsumed bytes.
pub fn from_bytes_partial<T: Xdr>(input: &[u8]) -> Result<(T, &[u8])> {
    let mut de = Deserializer::new(input);
    let value = T::deserialize(&mut de)?;
    Ok((value, de.remaining()))
}

/// Read `reader` to its end and deserialize a value from the bytes.
pub fn from_reader<R: Read, T: Xdr>(mut reader: R) -> Result<T> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    from_bytes(&buf)
}

/// The wire deserializer. Reads from a byte slice, maintaining a cursor position.
pub struct Deserializer<'de> {
    input: &'de [u8],
    pos: usize,
}

impl<'de> Deserializer<'de> {
    pub fn new(input: &'de [u8]) -> Self {
        Deserializer { input, pos: 0 }
    }

    /// Returns the unconsumed portion of the input buffer.
    pub fn remaining(&self) -> &'de [u8] {
        &self.input[self.pos..]
    }

    /// Consume exactly `n` bytes, returning a slice. Fails with UnexpectedEof.
    fn take(&mut self, n: usize) -> Result<&'de [u8]> {
        let end = self.pos.checked_add(n).ok_or(Error::UnexpectedEof)?;
        if end > self.input.len() {
            return Err(Error::UnexpectedEof);
        }
        let slice = &self.input[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    fn take_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    // ── Primitives ─────────────────────────────────────────────────────────

    /// Any nonzero value decodes as true.
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_u32()? != 0)
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(i8::from_be_bytes(self.take_array()?))
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(u8::from_be_bytes(self.take_array()?))
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        Ok(i16::from_be_bytes(self.take_array()?))
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(u16::from_be_bytes(self.take_array()?))
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(i32::from_be_bytes(self.take_array()?))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(u32::from_be_bytes(self.take_array()?))
    }

    pub fn read_i64(&mut self) -> Result<i64> {
        Ok(i64::from_be_bytes(self.take_array()?))
    }

    pub fn read_u64(&mut self) -> Result<u64> {
        Ok(u64::from_be_bytes(self.take_array()?))
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        Ok(f32::from_be_bytes(self.take_array()?))
    }

    pub fn read_f64(&mut self) -> Result<f64> {
        Ok(f64::from_be_bytes(self.take_array()?))
    }

    pub fn read_enum(&mut self) -> Result<i32> {
        self.read_i32()
    }

    // ── Variable-length data ───────────────────────────────────────────────

    /// Read `n` bytes of data plus their 0–3 padding bytes.
    /// Returns a slice into the original input (zero-copy).
    fn read_padded_bytes(&mut self, n: usize) -> Result<&'de [u8]> {
        let data = self.take(n)?;
        let remainder = n % 4;
        if remainder != 0 {
            self.take(4 - remainder)?;
        }
        Ok(data)
    }

    /// Read a length-prefixed opaque block without copying it.
    pub fn read_opaque_borrowed(&mut self) -> Result<&'de [u8]> {
        let n = self.read_u32()? as usize;
        self.read_padded_bytes(n)
    }

    pub fn read_opaque(&mut self) -> Result<Vec<u8>> {
        Ok(self.read_opaque_borrowed()?.to_vec())
    }

    pub fn read_string(&mut self) -> Result<String> {
        let bytes = self.read_opaque_borrowed()?;
        let s = std::str::from_utf8(bytes).map_err(|_| Error::InvalidString)?;
        Ok(s.to_owned())
    }

    /// Read a sequence element count or map pair count, rejecting counts
    /// above `max` before the caller allocates anything.
    pub fn read_count(&mut self, type_name: &str, max: u32) -> Result<usize> {
        let count = self.read_u32()?;
        if count > max {
            return Err(Error::CountExceeded {
                type_name: type_name.to_owned(),
                max,
                got: u64::from(count),
            });
        }
        Ok(count as usize)
    }
}
