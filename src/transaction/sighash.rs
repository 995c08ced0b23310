//! Legacy signature digest for pay-to-pubkey-hash inputs.
//!
//! The digest covers the transaction with every unlock script emptied except
//! the one being signed, which is replaced by the lock script it spends,
//! followed by the sighash type as a u32.

use crate::messages::Tx;
use crate::util::{Error, Hash256, Result, Serializable, sha256d, var_int};
use byteorder::{LittleEndian, WriteBytesExt};

/// Signs all inputs and all outputs.
pub const SIGHASH_ALL: u8 = 0x01;

/// Computes the legacy sighash digest of input `n_input`.
///
/// `script_code` is the lock script of the output being spent. The
/// transaction is serialized straight from the borrow; it is neither cloned
/// nor modified.
///
/// # Errors
/// `Error::BadArgument` if `n_input` is out of range, `Error::Unsupported`
/// for any sighash type other than [`SIGHASH_ALL`].
///
/// # Examples
/// ```
/// use nour_p2pkh::messages::{Tx, TxIn};
/// use nour_p2pkh::transaction::sighash::{sighash, SIGHASH_ALL};
/// let tx = Tx {
///     inputs: vec![TxIn::default()],
///     ..Default::default()
/// };
/// let digest = sighash(&tx, 0, &[0x76, 0xa9], SIGHASH_ALL).unwrap();
/// assert_ne!(digest.0, [0; 32]);
/// ```
pub fn sighash(tx: &Tx, n_input: usize, script_code: &[u8], sighash_type: u8) -> Result<Hash256> {
    if n_input >= tx.inputs.len() {
        return Err(Error::BadArgument(format!(
            "Input index {} out of range for {} inputs",
            n_input,
            tx.inputs.len()
        )));
    }
    if sighash_type != SIGHASH_ALL {
        return Err(Error::Unsupported(format!(
            "Sighash type {:#04x}",
            sighash_type
        )));
    }
    let mut s = Vec::with_capacity(tx.size() + script_code.len() + 4);
    s.write_i32::<LittleEndian>(tx.version)?;
    var_int::write(tx.inputs.len() as u64, &mut s)?;
    for (i, tx_in) in tx.inputs.iter().enumerate() {
        let script: &[u8] = if i == n_input { script_code } else { &[] };
        tx_in.write_with_script(script, &mut s)?;
    }
    var_int::write(tx.outputs.len() as u64, &mut s)?;
    for tx_out in &tx.outputs {
        tx_out.write(&mut s)?;
    }
    s.write_u32::<LittleEndian>(tx.lock_time)?;
    s.write_u32::<LittleEndian>(sighash_type as u32)?;
    Ok(sha256d(&s))
}
