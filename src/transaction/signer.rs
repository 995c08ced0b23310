//! Produces the unlock script for one input of an unsigned transaction.

use crate::messages::Tx;
use crate::script::Script;
use crate::transaction::generate_signature;
use crate::transaction::p2pkh::create_unlock_script;
use crate::transaction::sighash::{SIGHASH_ALL, sighash};
use crate::util::Result;
use crate::wallet::PrivateKey;
use tracing::trace;

/// Signs input `input_index` of `unsigned_tx` which spends an output locked by `spent_lock_script`.
///
/// Returns `<push sig> <push compressed pubkey>`. The result depends only on
/// the shape of `unsigned_tx`, the spent lock script and the key; unlock
/// scripts already present on other inputs do not change it.
///
/// # Errors
/// `Error::BadArgument` if `input_index` is out of range.
pub fn sign(
    private_key: &PrivateKey,
    unsigned_tx: &Tx,
    input_index: usize,
    spent_lock_script: &Script,
) -> Result<Script> {
    let digest = sighash(unsigned_tx, input_index, &spent_lock_script.0, SIGHASH_ALL)?;
    trace!(input = input_index, digest = ?digest, "signing input");
    let sig = generate_signature(private_key, &digest, SIGHASH_ALL)?;
    create_unlock_script(&sig, &private_key.public_key())
}
