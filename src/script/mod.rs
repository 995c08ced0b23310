//! Script byte sequences and the push-data encoding used in them.
//!
//! Only what pay-to-pubkey-hash needs lives here: building scripts from
//! opcodes and data pushes, walking them op by op, and checking a signed
//! input against the lock script it spends.

pub mod checker;
pub mod op_codes;

use self::op_codes::{OP_0, OP_PUSHDATA1, OP_PUSHDATA2, OP_PUSHDATA4};
use crate::util::{Error, Result};
use std::fmt;

/// Transaction script.
#[derive(Default, Clone, PartialEq, Eq, Hash)]
pub struct Script(pub Vec<u8>);

impl Script {
    /// Creates a new empty script.
    #[must_use]
    #[inline]
    pub fn new() -> Script {
        Script(vec![])
    }

    /// Appends a single opcode or data byte.
    #[inline]
    pub fn append(&mut self, byte: u8) {
        self.0.push(byte);
    }

    /// Appends a slice of data without a length prefix.
    #[inline]
    pub fn append_slice(&mut self, slice: &[u8]) {
        self.0.extend_from_slice(slice);
    }

    /// Appends the opcodes and provided data that push it onto the stack.
    ///
    /// Uses the smallest push form for the data length.
    ///
    /// # Errors
    /// `Error::BadArgument` if the data is longer than a push can describe.
    pub fn append_data(&mut self, data: &[u8]) -> Result<()> {
        let prefix = push_data_prefix(data.len())?;
        self.0.extend_from_slice(&prefix);
        self.0.extend_from_slice(data);
        Ok(())
    }

    /// Returns the script length in bytes.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the script is empty.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for Script {
    fn from(bytes: Vec<u8>) -> Self {
        Script(bytes)
    }
}

impl fmt::Debug for Script {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Script({})", hex::encode(&self.0))
    }
}

/// Returns the minimal push opcode and length bytes for `data_len` bytes of data.
///
/// Empty data is pushed with `OP_0`, 1 to 75 bytes directly, then
/// `OP_PUSHDATA1`, `OP_PUSHDATA2` and `OP_PUSHDATA4`.
///
/// # Errors
/// `Error::BadArgument` if `data_len` does not fit in 32 bits.
pub fn push_data_prefix(data_len: usize) -> Result<Vec<u8>> {
    if data_len == 0 {
        Ok(vec![OP_0])
    } else if data_len <= 75 {
        Ok(vec![data_len as u8])
    } else if data_len <= 0xff {
        Ok(vec![OP_PUSHDATA1, data_len as u8])
    } else if data_len <= 0xffff {
        let mut buf = vec![OP_PUSHDATA2];
        buf.extend_from_slice(&(data_len as u16).to_le_bytes());
        Ok(buf)
    } else if data_len <= 0xffffffff {
        let mut buf = vec![OP_PUSHDATA4];
        buf.extend_from_slice(&(data_len as u32).to_le_bytes());
        Ok(buf)
    } else {
        Err(Error::BadArgument(format!("Data too long to push: {}", data_len)))
    }
}

/// Gets the next operation index in the script, or the script length if at the end.
#[must_use]
pub fn next_op(i: usize, script: &[u8]) -> usize {
    if i >= script.len() {
        return script.len();
    }
    let next = match script[i] {
        len @ 1..=75 => i + 1 + len as usize,
        OP_PUSHDATA1 => {
            if i + 2 > script.len() {
                script.len()
            } else {
                i + 2 + script[i + 1] as usize
            }
        }
        OP_PUSHDATA2 => {
            if i + 3 > script.len() {
                script.len()
            } else {
                i + 3 + u16::from_le_bytes([script[i + 1], script[i + 2]]) as usize
            }
        }
        OP_PUSHDATA4 => {
            if i + 5 > script.len() {
                script.len()
            } else {
                i + 5
                    + u32::from_le_bytes([script[i + 1], script[i + 2], script[i + 3], script[i + 4]])
                        as usize
            }
        }
        _ => i + 1,
    };
    next.min(script.len())
}

/// Reads the data pushed by the operation at `i`.
///
/// Returns the pushed bytes and the index of the following operation.
///
/// # Errors
/// `Error::BadData` if the op at `i` is not a push or runs past the end of the script.
pub fn read_push(i: usize, script: &[u8]) -> Result<(&[u8], usize)> {
    let op = *script
        .get(i)
        .ok_or_else(|| Error::BadData("Push past end of script".to_string()))?;
    let (start, len) = match op {
        OP_0 => (i + 1, 0),
        1..=75 => (i + 1, op as usize),
        OP_PUSHDATA1 => {
            let b = script.get(i + 1..i + 2);
            let b = b.ok_or_else(|| Error::BadData("Truncated push length".to_string()))?;
            (i + 2, b[0] as usize)
        }
        OP_PUSHDATA2 => {
            let b = script.get(i + 1..i + 3);
            let b = b.ok_or_else(|| Error::BadData("Truncated push length".to_string()))?;
            (i + 3, u16::from_le_bytes([b[0], b[1]]) as usize)
        }
        OP_PUSHDATA4 => {
            let b = script.get(i + 1..i + 5);
            let b = b.ok_or_else(|| Error::BadData("Truncated push length".to_string()))?;
            (i + 5, u32::from_le_bytes([b[0], b[1], b[2], b[3]]) as usize)
        }
        _ => return Err(Error::BadData(format!("Not a push op: {}", op))),
    };
    let data = script
        .get(start..start + len)
        .ok_or_else(|| Error::BadData("Push past end of script".to_string()))?;
    Ok((data, start + len))
}

#[cfg(test)]
mod tests {
    use super::op_codes::*;
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn append_data() {
        let mut s = Script::new();
        s.append_data(&[]).unwrap();
        assert_eq!(s.0, vec![OP_0]);

        let mut s = Script::new();
        s.append_data(&[7; 75]).unwrap();
        assert_eq!(s.0[0], 75);
        assert_eq!(s.len(), 76);

        let mut s = Script::new();
        s.append_data(&[7; 76]).unwrap();
        assert_eq!(&s.0[..2], &[OP_PUSHDATA1, 76]);
        assert_eq!(s.len(), 78);

        let mut s = Script::new();
        s.append_data(&[7; 256]).unwrap();
        assert_eq!(&s.0[..3], &[OP_PUSHDATA2, 0x00, 0x01]);
        assert_eq!(s.len(), 259);
    }

    #[test]
    fn push_data_prefix_boundaries() -> Result<()> {
        assert_eq!(push_data_prefix(0)?, vec![OP_0]);
        assert_eq!(push_data_prefix(1)?, vec![1]);
        assert_eq!(push_data_prefix(75)?, vec![75]);
        assert_eq!(push_data_prefix(76)?, vec![OP_PUSHDATA1, 76]);
        assert_eq!(push_data_prefix(255)?, vec![OP_PUSHDATA1, 0xff]);
        assert_eq!(push_data_prefix(256)?, vec![OP_PUSHDATA2, 0x00, 0x01]);
        assert_eq!(push_data_prefix(65535)?, vec![OP_PUSHDATA2, 0xff, 0xff]);
        assert_eq!(push_data_prefix(65536)?, vec![OP_PUSHDATA4, 0x00, 0x00, 0x01, 0x00]);
        Ok(())
    }

    #[test]
    fn read_push_matches_prefix() -> Result<()> {
        for len in [0usize, 1, 75, 76, 255, 256, 70000] {
            let data = vec![0xab; len];
            let mut s = Script::new();
            s.append_data(&data)?;
            assert_eq!(s.len(), push_data_prefix(len)?.len() + len);
            let (pushed, next) = read_push(0, &s.0)?;
            assert_eq!(pushed, &data[..]);
            assert_eq!(next, s.len());
            assert_eq!(next_op(0, &s.0), s.len());
        }
        Ok(())
    }

    #[test]
    fn next_op_walks_pushes() {
        let mut s = Script::new();
        s.append(OP_DUP);
        s.append_data(&[1; 20]).unwrap();
        s.append_data(&[2; 100]).unwrap();
        s.append(OP_CHECKSIG);
        let mut ops = vec![];
        let mut i = 0;
        while i < s.len() {
            ops.push(s.0[i]);
            i = next_op(i, &s.0);
        }
        assert_eq!(ops, vec![OP_DUP, 20, OP_PUSHDATA1, OP_CHECKSIG]);
    }

    #[test]
    fn next_op_clamps_to_end() {
        assert_eq!(next_op(0, &[75, 1, 2]), 3);
        assert_eq!(next_op(0, &[OP_PUSHDATA2, 0xff]), 2);
        assert_eq!(next_op(5, &[OP_DUP]), 1);
    }

    #[test]
    fn read_push_roundtrip() -> Result<()> {
        let mut s = Script::new();
        s.append_data(&[9; 72])?;
        s.append_data(&[3; 300])?;
        let (a, i) = read_push(0, &s.0)?;
        assert_eq!(a, &[9; 72][..]);
        let (b, j) = read_push(i, &s.0)?;
        assert_eq!(b, &[3; 300][..]);
        assert_eq!(j, s.len());
        Ok(())
    }

    #[test]
    fn read_push_errors() {
        assert!(read_push(0, &[]).is_err());
        assert!(read_push(0, &[OP_DUP]).is_err());
        assert!(read_push(0, &[5, 1, 2]).is_err());
        assert!(read_push(0, &[OP_PUSHDATA1]).is_err());
    }
}
