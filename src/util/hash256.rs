//! 256-bit hash for transactions and signature digests.
//!
//! Bytes are held in internal (wire) order. Hex strings use the reversed
//! display order that block explorers and nodes print.
use crate::util::{Error, Result, Serializable};
use bitcoin_hashes::{Hash, sha256d as bh_sha256d};
use std::fmt;
use std::io;
use std::io::{Read, Write};

/// 256-bit hash for transactions and digests.
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hash256(pub [u8; 32]);

impl Hash256 {
    /// Converts the hash into a display-order hex string.
    #[must_use]
    #[inline]
    pub fn encode(&self) -> String {
        let mut r = self.0;
        r.reverse();
        hex::encode(r)
    }

    /// Converts a string of 64 display-order hex characters into a hash.
    ///
    /// # Errors
    /// `Error::FromHexError` for invalid hex, `Error::BadArgument` for a wrong length.
    pub fn decode(s: &str) -> Result<Hash256> {
        let decoded_bytes = hex::decode(s)?;
        let display: [u8; 32] = decoded_bytes.as_slice().try_into().map_err(|_| {
            Error::BadArgument(format!("Length {} of decoded bytes", decoded_bytes.len()))
        })?;
        Ok(Hash256::from_display_bytes(display))
    }

    /// Builds a hash from bytes in display (big-endian) order.
    #[must_use]
    #[inline]
    pub fn from_display_bytes(mut bytes: [u8; 32]) -> Hash256 {
        bytes.reverse();
        Hash256(bytes)
    }

    /// Returns the hash bytes in display (big-endian) order.
    #[must_use]
    #[inline]
    pub fn to_display_bytes(&self) -> [u8; 32] {
        let mut r = self.0;
        r.reverse();
        r
    }
}

impl Serializable<Hash256> for Hash256 {
    fn read(reader: &mut dyn Read) -> Result<Hash256> {
        let mut bytes = [0; 32];
        reader.read_exact(&mut bytes)?;
        Ok(Hash256(bytes))
    }

    fn write(&self, writer: &mut dyn Write) -> io::Result<()> {
        writer.write_all(&self.0)
    }
}

/// Hashes a data array twice using SHA256.
#[must_use]
#[inline]
pub fn sha256d(data: &[u8]) -> Hash256 {
    Hash256(bh_sha256d::Hash::hash(data).to_byte_array())
}

impl fmt::Debug for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}
