//! Binary serialization/deserialization trait for transaction objects.
use crate::util::Result;
use std::io;
use std::io::{Read, Write};

/// An object that may be serialized and deserialized.
pub trait Serializable<T> {
    /// Reads the object from serialized form.
    ///
    /// # Errors
    /// `Error::TruncatedInput` if the reader ends early, or invalid data.
    fn read(reader: &mut dyn Read) -> Result<T>
    where
        Self: Sized;

    /// Writes the object to serialized form.
    ///
    /// # Errors
    /// IO errors.
    fn write(&self, writer: &mut dyn Write) -> io::Result<()>;

    /// Serializes the object into a new byte vector.
    fn to_bytes(&self) -> Vec<u8> {
        let mut v = Vec::new();
        // Writes into a Vec never fail.
        self.write(&mut v).expect("in-memory write");
        v
    }
}

/// Reads exactly `len` bytes without trusting `len` for the allocation size.
///
/// # Errors
/// `Error::TruncatedInput` if fewer than `len` bytes remain.
pub(crate) fn read_bytes(reader: &mut dyn Read, len: u64) -> Result<Vec<u8>> {
    let mut v = Vec::with_capacity(len.min(4096) as usize);
    (&mut *reader).take(len).read_to_end(&mut v)?;
    if (v.len() as u64) < len {
        return Err(crate::util::Error::TruncatedInput);
    }
    Ok(v)
}
