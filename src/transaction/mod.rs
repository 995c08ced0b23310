//! Building and signing pay-to-pubkey-hash transactions.
//!
//! # Examples
//!
//! Sign the first input of a transaction by hand:
//! ```
//! use nour_p2pkh::messages::{Tx, TxIn};
//! use nour_p2pkh::transaction::{generate_signature, p2pkh, sighash::{sighash, SIGHASH_ALL}};
//! use nour_p2pkh::util::hash160;
//! use nour_p2pkh::wallet::PrivateKey;
//!
//! let key = PrivateKey::from_bytes(&[1; 32]).unwrap();
//! let public_key = key.public_key();
//! let mut tx = Tx {
//!     inputs: vec![TxIn::default()],
//!     ..Default::default()
//! };
//! let lock_script = p2pkh::create_lock_script(&hash160(&public_key));
//! let digest = sighash(&tx, 0, &lock_script.0, SIGHASH_ALL).unwrap();
//! let signature = generate_signature(&key, &digest, SIGHASH_ALL).unwrap();
//! tx.inputs[0].unlock_script = p2pkh::create_unlock_script(&signature, &public_key).unwrap();
//! ```

pub mod builder;
pub mod p2pkh;
pub mod sighash;
pub mod signer;

use crate::util::{Hash256, Result};
use crate::wallet::{PrivateKey, SECP};
use secp256k1::Message;

/// Generates a DER-encoded ECDSA signature over `sighash` with the sighash type appended.
///
/// Nonces follow RFC6979, so the same key and digest always give the same
/// bytes. S is normalized to the low half of the curve order.
///
/// # Errors
/// Infallible for keys built through [`PrivateKey`]; kept fallible for the
/// signer call chain.
pub fn generate_signature(
    private_key: &PrivateKey,
    sighash: &Hash256,
    sighash_type: u8,
) -> Result<Vec<u8>> {
    let message = Message::from_digest(sighash.0);
    let mut signature = SECP.sign_ecdsa(&message, private_key.secret_key());
    signature.normalize_s();
    let mut der = signature.serialize_der().to_vec();
    der.push(sighash_type);
    Ok(der)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::sighash::SIGHASH_ALL;
    use pretty_assertions::assert_eq;

    #[test]
    fn deterministic_signature() -> Result<()> {
        let key = PrivateKey::from_bytes(&[1; 32])?;
        let digest = Hash256([7; 32]);
        let a = generate_signature(&key, &digest, SIGHASH_ALL)?;
        let b = generate_signature(&key, &digest, SIGHASH_ALL)?;
        assert_eq!(a, b);
        assert_eq!(*a.last().unwrap(), SIGHASH_ALL);
        assert_eq!(a[0], 0x30);
        assert!(a.len() <= 73);
        Ok(())
    }

    #[test]
    fn signature_depends_on_key_and_digest() -> Result<()> {
        let key1 = PrivateKey::from_bytes(&[1; 32])?;
        let key2 = PrivateKey::from_bytes(&[2; 32])?;
        let digest = Hash256([7; 32]);
        let a = generate_signature(&key1, &digest, SIGHASH_ALL)?;
        assert_ne!(a, generate_signature(&key2, &digest, SIGHASH_ALL)?);
        assert_ne!(a, generate_signature(&key1, &Hash256([8; 32]), SIGHASH_ALL)?);
        Ok(())
    }

    #[test]
    fn low_s() -> Result<()> {
        let key = PrivateKey::from_bytes(&[3; 32])?;
        for b in 0..16u8 {
            let der = generate_signature(&key, &Hash256([b; 32]), SIGHASH_ALL)?;
            let sig = secp256k1::ecdsa::Signature::from_der(&der[..der.len() - 1])?;
            let mut normalized = sig;
            normalized.normalize_s();
            assert_eq!(sig, normalized);
        }
        Ok(())
    }
}
