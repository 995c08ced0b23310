//! Transaction input spending a previous output.
use crate::messages::out_point::OutPoint;
use crate::script::Script;
use crate::util::{Result, Serializable, read_bytes, var_int};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io;
use std::io::{Read, Write};

/// Sequence number for a final input, without relative lock time.
pub const SEQUENCE_FINAL: u32 = 0xffffffff;

/// Transaction input.
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone)]
pub struct TxIn {
    /// The previous output transaction reference.
    pub prev_output: OutPoint,
    /// Script proving authorization to spend the previous output. Empty until signed.
    pub unlock_script: Script,
    /// Sequence number, serialized as stored.
    pub sequence: u32,
}

impl TxIn {
    /// Returns the size of the transaction input in bytes.
    #[must_use]
    #[inline]
    pub fn size(&self) -> usize {
        OutPoint::SIZE
            + var_int::size(self.unlock_script.0.len() as u64)
            + self.unlock_script.0.len()
            + 4
    }

    /// Writes the input with `script` in place of its unlock script.
    ///
    /// Used to serialize the signature digest without copying the transaction.
    pub(crate) fn write_with_script(&self, script: &[u8], writer: &mut dyn Write) -> io::Result<()> {
        self.prev_output.write(writer)?;
        var_int::write(script.len() as u64, writer)?;
        writer.write_all(script)?;
        writer.write_u32::<LittleEndian>(self.sequence)
    }
}

impl Serializable<TxIn> for TxIn {
    fn read(reader: &mut dyn Read) -> Result<TxIn> {
        let prev_output = OutPoint::read(reader)?;
        let script_len = var_int::read(reader)?;
        let unlock_script = read_bytes(reader, script_len)?;
        let sequence = reader.read_u32::<LittleEndian>()?;
        Ok(TxIn {
            prev_output,
            unlock_script: Script(unlock_script),
            sequence,
        })
    }

    fn write(&self, writer: &mut dyn Write) -> io::Result<()> {
        self.write_with_script(&self.unlock_script.0, writer)
    }
}
