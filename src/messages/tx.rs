//! Transaction and its canonical wire encoding.

use crate::messages::{TxIn, TxOut};
use crate::util::{Error, Hash256, Result, Serializable, sha256d, var_int};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::fmt;
use std::io;
use std::io::{Cursor, Read, Write};

/// Upper bound on entries preallocated from an untrusted count.
const MAX_PREALLOC: u64 = 1024;

/// Bitcoin transaction.
#[derive(Default, PartialEq, Eq, Hash, Clone)]
pub struct Tx {
    /// Transaction version.
    pub version: i32,
    /// Transaction inputs.
    pub inputs: Vec<TxIn>,
    /// Transaction outputs.
    pub outputs: Vec<TxOut>,
    /// The block number or timestamp at which this transaction is unlocked.
    pub lock_time: u32,
}

impl Tx {
    /// Calculates the hash of the transaction in internal byte order.
    #[must_use]
    pub fn hash(&self) -> Hash256 {
        sha256d(&self.to_bytes())
    }

    /// Returns the transaction id as display-order hex.
    #[must_use]
    pub fn txid(&self) -> String {
        self.hash().encode()
    }

    /// Returns the size of the serialized transaction in bytes.
    #[must_use]
    pub fn size(&self) -> usize {
        8 + var_int::size(self.inputs.len() as u64)
            + self.inputs.iter().map(|tx_in| tx_in.size()).sum::<usize>()
            + var_int::size(self.outputs.len() as u64)
            + self.outputs.iter().map(|tx_out| tx_out.size()).sum::<usize>()
    }

    /// Serializes the transaction.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut v = Vec::with_capacity(self.size());
        // Writes into a Vec never fail.
        self.write(&mut v).expect("in-memory write");
        v
    }

    /// Serializes the transaction as lowercase hex.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Parses a transaction that occupies all of `bytes`.
    ///
    /// # Errors
    /// `Error::MalformedEncoding` on truncated fields, oversized length prefixes, or trailing bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Tx> {
        let mut cursor = Cursor::new(bytes);
        let tx = Tx::read(&mut cursor).map_err(|e| match e {
            Error::MalformedEncoding(_) => e,
            e => Error::MalformedEncoding(e.to_string()),
        })?;
        let remaining = bytes.len() - cursor.position() as usize;
        if remaining != 0 {
            return Err(Error::MalformedEncoding(format!(
                "{} trailing bytes after transaction",
                remaining
            )));
        }
        Ok(tx)
    }

    /// Parses a hex-encoded transaction.
    ///
    /// # Errors
    /// `Error::FromHexError` for invalid hex, otherwise as [`Tx::from_bytes`].
    pub fn from_hex(s: &str) -> Result<Tx> {
        Tx::from_bytes(&hex::decode(s)?)
    }
}

impl Serializable<Tx> for Tx {
    fn read(reader: &mut dyn Read) -> Result<Tx> {
        let version = reader.read_i32::<LittleEndian>()?;
        let n_inputs = var_int::read(reader)?;
        let mut inputs = Vec::with_capacity(n_inputs.min(MAX_PREALLOC) as usize);
        for _ in 0..n_inputs {
            inputs.push(TxIn::read(reader)?);
        }
        let n_outputs = var_int::read(reader)?;
        let mut outputs = Vec::with_capacity(n_outputs.min(MAX_PREALLOC) as usize);
        for _ in 0..n_outputs {
            outputs.push(TxOut::read(reader)?);
        }
        let lock_time = reader.read_u32::<LittleEndian>()?;
        Ok(Tx {
            version,
            inputs,
            outputs,
            lock_time,
        })
    }

    fn write(&self, writer: &mut dyn Write) -> io::Result<()> {
        writer.write_i32::<LittleEndian>(self.version)?;
        var_int::write(self.inputs.len() as u64, writer)?;
        for tx_in in &self.inputs {
            tx_in.write(writer)?;
        }
        var_int::write(self.outputs.len() as u64, writer)?;
        for tx_out in &self.outputs {
            tx_out.write(writer)?;
        }
        writer.write_u32::<LittleEndian>(self.lock_time)
    }
}

impl fmt::Debug for Tx {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let inputs_str = format!("[<{} inputs>]", self.inputs.len());
        let outputs_str = format!("[<{} outputs>]", self.outputs.len());
        f.debug_struct("Tx")
            .field("version", &self.version)
            .field(
                "inputs",
                if self.inputs.len() <= 3 { &self.inputs } else { &inputs_str },
            )
            .field(
                "outputs",
                if self.outputs.len() <= 3 { &self.outputs } else { &outputs_str },
            )
            .field("lock_time", &self.lock_time)
            .finish()
    }
}
