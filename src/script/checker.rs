//! Signature checks for signed pay-to-pubkey-hash inputs.
use crate::messages::Tx;
use crate::transaction::p2pkh::{extract_pubkeyhash, extract_sig_and_pubkey};
use crate::transaction::sighash::sighash;
use crate::util::{Error, Result, hash160};
use crate::wallet::SECP;
use secp256k1::{Message, PublicKey, ecdsa::Signature};

/// Checks signatures on one input of a transaction.
#[derive(Debug)]
pub struct TransactionChecker<'a> {
    /// The transaction being validated.
    pub tx: &'a Tx,

    /// Input index being checked.
    pub input: usize,
}

impl<'a> TransactionChecker<'a> {
    /// Creates a new transaction checker.
    #[must_use]
    pub fn new(tx: &'a Tx, input: usize) -> Self {
        Self { tx, input }
    }

    /// Verifies `sig` (DER plus sighash type byte) by `pubkey` over the digest with `script` substituted.
    ///
    /// Returns `Ok(false)` for a well-formed signature that does not verify.
    ///
    /// # Errors
    /// `Error::BadData` for an empty or non-DER signature or an invalid public key,
    /// otherwise as the digest computation.
    pub fn check_sig(&self, sig: &[u8], pubkey: &[u8], script: &[u8]) -> Result<bool> {
        let Some((&sighash_type, der_sig)) = sig.split_last() else {
            return Err(Error::BadData("Empty signature".to_string()));
        };
        let sig_hash = sighash(self.tx, self.input, script, sighash_type)?;
        let signature =
            Signature::from_der(der_sig).map_err(|_| Error::BadData("Invalid DER".to_string()))?;
        let public_key =
            PublicKey::from_slice(pubkey).map_err(|_| Error::BadData("Invalid pubkey".to_string()))?;
        let message = Message::from_digest(sig_hash.0);
        Ok(SECP.verify_ecdsa(&message, &signature, &public_key).is_ok())
    }
}

/// Verifies that input `input` of `tx` unlocks the P2PKH `lock_script` it spends.
///
/// The public key must hash to the lock script's pubkey hash and the
/// signature must verify over the digest computed with `lock_script`.
///
/// # Errors
/// `Error::BadData` if either script is not P2PKH, and the errors of
/// [`TransactionChecker::check_sig`].
pub fn verify_p2pkh(tx: &Tx, input: usize, lock_script: &[u8]) -> Result<bool> {
    let tx_in = tx.inputs.get(input).ok_or_else(|| {
        Error::BadArgument(format!("Input index {} out of range", input))
    })?;
    let expected = extract_pubkeyhash(lock_script)?;
    let (sig, pubkey) = extract_sig_and_pubkey(&tx_in.unlock_script.0)?;
    if hash160(pubkey) != expected {
        return Ok(false);
    }
    TransactionChecker::new(tx, input).check_sig(sig, pubkey, lock_script)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::{OutPoint, TxIn, TxOut};
    use crate::script::Script;
    use crate::transaction::p2pkh::create_lock_script;
    use crate::transaction::signer::sign;
    use crate::util::{Hash160, Hash256};
    use crate::wallet::PrivateKey;

    fn two_input_tx() -> Tx {
        Tx {
            version: 1,
            inputs: vec![
                TxIn {
                    prev_output: OutPoint {
                        hash: Hash256([1; 32]),
                        index: 0,
                    },
                    unlock_script: Script::new(),
                    sequence: 0xffffffff,
                },
                TxIn {
                    prev_output: OutPoint {
                        hash: Hash256([2; 32]),
                        index: 1,
                    },
                    unlock_script: Script::new(),
                    sequence: 0xffffffff,
                },
            ],
            outputs: vec![TxOut {
                satoshis: 10,
                lock_script: create_lock_script(&Hash160([7; 20])),
            }],
            lock_time: 0,
        }
    }

    #[test]
    fn standard_p2pkh() -> Result<()> {
        let key = PrivateKey::from_bytes(&[1; 32])?;
        let lock = create_lock_script(&hash160(&key.public_key()));
        let mut tx = two_input_tx();
        tx.inputs[0].unlock_script = sign(&key, &tx, 0, &lock)?;
        tx.inputs[1].unlock_script = sign(&key, &tx, 1, &lock)?;
        assert!(verify_p2pkh(&tx, 0, &lock.0)?);
        assert!(verify_p2pkh(&tx, 1, &lock.0)?);
        Ok(())
    }

    #[test]
    fn signature_bound_to_spent_script() -> Result<()> {
        let key = PrivateKey::from_bytes(&[1; 32])?;
        let pkh = hash160(&key.public_key());
        let lock_a = create_lock_script(&pkh);
        // Same key, different spent script bytes: OP_DUP OP_HASH160 <pkh> OP_EQUALVERIFY OP_CHECKSIG OP_1
        let mut lock_b = lock_a.clone();
        lock_b.append(crate::script::op_codes::OP_1);
        let mut tx = two_input_tx();
        tx.inputs[0].unlock_script = sign(&key, &tx, 0, &lock_a)?;
        let (sig, pubkey) = extract_sig_and_pubkey(&tx.inputs[0].unlock_script.0)?;
        let checker = TransactionChecker::new(&tx, 0);
        assert!(checker.check_sig(sig, pubkey, &lock_a.0)?);
        assert!(!checker.check_sig(sig, pubkey, &lock_b.0)?);
        Ok(())
    }

    #[test]
    fn signature_bound_to_input() -> Result<()> {
        let key = PrivateKey::from_bytes(&[1; 32])?;
        let lock = create_lock_script(&hash160(&key.public_key()));
        let mut tx = two_input_tx();
        let sig0 = sign(&key, &tx, 0, &lock)?;
        tx.inputs[0].unlock_script = sig0.clone();
        tx.inputs[1].unlock_script = sig0;
        assert!(verify_p2pkh(&tx, 0, &lock.0)?);
        assert!(!verify_p2pkh(&tx, 1, &lock.0)?);
        Ok(())
    }

    #[test]
    fn wrong_key() -> Result<()> {
        let key = PrivateKey::from_bytes(&[1; 32])?;
        let other = PrivateKey::from_bytes(&[2; 32])?;
        let lock = create_lock_script(&hash160(&key.public_key()));
        let mut tx = two_input_tx();
        tx.inputs[0].unlock_script = sign(&other, &tx, 0, &lock)?;
        assert!(!verify_p2pkh(&tx, 0, &lock.0)?);
        Ok(())
    }

    #[test]
    fn unsigned_input() {
        let lock = create_lock_script(&Hash160([7; 20]));
        let err = verify_p2pkh(&two_input_tx(), 0, &lock.0).unwrap_err();
        assert!(matches!(err, Error::BadData(_)));
    }

    #[test]
    fn bad_der() {
        let tx = two_input_tx();
        let checker = TransactionChecker::new(&tx, 0);
        assert!(checker.check_sig(&[], &[2; 33], &[]).is_err());
        assert!(checker.check_sig(&[0x30, 0x01, 0x01], &[2; 33], &[]).is_err());
    }
}
