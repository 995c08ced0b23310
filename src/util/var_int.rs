//! Variable length integer (varint) ser/des for transaction encoding.

use crate::util::{Error, Result};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io;
use std::io::{Cursor, Read, Write};

/// Returns the number of bytes required for the varint.
#[must_use]
#[inline]
pub fn size(n: u64) -> usize {
    if n <= 252 {
        1
    } else if n <= 0xffff {
        3
    } else if n <= 0xffffffff {
        5
    } else {
        9
    }
}

/// Writes the var int to bytes.
#[inline]
pub fn write(n: u64, writer: &mut dyn Write) -> io::Result<()> {
    if n <= 252 {
        writer.write_u8(n as u8)
    } else if n <= 0xffff {
        writer.write_u8(0xfd)?;
        writer.write_u16::<LittleEndian>(n as u16)
    } else if n <= 0xffffffff {
        writer.write_u8(0xfe)?;
        writer.write_u32::<LittleEndian>(n as u32)
    } else {
        writer.write_u8(0xff)?;
        writer.write_u64::<LittleEndian>(n)
    }
}

/// Reads a var int from bytes.
///
/// Only the shortest encoding of a value is accepted, so every value read
/// writes back to the same bytes.
///
/// # Errors
/// `Error::TruncatedInput` if the reader ends inside the value,
/// `Error::MalformedEncoding` if a wider prefix encodes a value that fits a narrower form.
#[inline]
pub fn read(reader: &mut dyn Read) -> Result<u64> {
    let n0 = reader.read_u8()?;
    let (n, min) = match n0 {
        0xff => (reader.read_u64::<LittleEndian>()?, 0x1_0000_0000),
        0xfe => (u64::from(reader.read_u32::<LittleEndian>()?), 0x10000),
        0xfd => (u64::from(reader.read_u16::<LittleEndian>()?), 253),
        _ => return Ok(u64::from(n0)),
    };
    if n < min {
        return Err(Error::MalformedEncoding(format!(
            "Non-canonical var int {} with prefix {:#04x}",
            n, n0
        )));
    }
    Ok(n)
}

/// Encodes a var int into a new buffer.
#[must_use]
pub fn encode(n: u64) -> Vec<u8> {
    let mut v = Vec::with_capacity(size(n));
    match n {
        0..=252 => v.push(n as u8),
        253..=0xffff => {
            v.push(0xfd);
            v.extend_from_slice(&(n as u16).to_le_bytes());
        }
        0x10000..=0xffffffff => {
            v.push(0xfe);
            v.extend_from_slice(&(n as u32).to_le_bytes());
        }
        _ => {
            v.push(0xff);
            v.extend_from_slice(&n.to_le_bytes());
        }
    }
    v
}

/// Decodes a var int from the front of `bytes`, returning it with the number of bytes consumed.
///
/// # Errors
/// `Error::TruncatedInput` if `bytes` is empty or shorter than the prefix announces,
/// `Error::MalformedEncoding` for a non-canonical encoding.
pub fn decode(bytes: &[u8]) -> Result<(u64, usize)> {
    let mut cursor = Cursor::new(bytes);
    let n = read(&mut cursor)?;
    Ok((n, cursor.position() as usize))
}
