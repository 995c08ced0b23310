//! secp256k1 private key wrapper that erases itself on drop.

use crate::address::derive_address;
use crate::network::Network;
use crate::util::{Error, Result};
use secp256k1::{All, PublicKey, Secp256k1, SecretKey};
use std::fmt;
use std::sync::LazyLock;
use zeroize::Zeroizing;

/// Process-wide curve context, built once and only read afterwards.
pub(crate) static SECP: LazyLock<Secp256k1<All>> = LazyLock::new(Secp256k1::new);

/// Private key controlling the spent outputs.
///
/// Not `Clone`: there is exactly one copy of the scalar, overwritten when the
/// key is dropped.
pub struct PrivateKey(SecretKey);

impl PrivateKey {
    /// Creates a key from 32 big-endian bytes.
    ///
    /// # Errors
    /// `Error::SigningKeyInvalid` if the bytes are not a scalar in `[1, n)`.
    pub fn from_bytes(bytes: &[u8]) -> Result<PrivateKey> {
        if bytes.len() != 32 {
            return Err(Error::SigningKeyInvalid);
        }
        let secret_key = SecretKey::from_slice(bytes).map_err(|_| Error::SigningKeyInvalid)?;
        Ok(PrivateKey(secret_key))
    }

    /// Creates a key from 64 hex characters.
    ///
    /// # Errors
    /// `Error::FromHexError` for invalid hex, otherwise as [`PrivateKey::from_bytes`].
    pub fn from_hex(s: &str) -> Result<PrivateKey> {
        let bytes = Zeroizing::new(hex::decode(s)?);
        PrivateKey::from_bytes(&bytes)
    }

    /// Returns the 33-byte compressed public key.
    #[must_use]
    pub fn public_key(&self) -> [u8; 33] {
        PublicKey::from_secret_key(&SECP, &self.0).serialize()
    }

    /// Returns the P2PKH address of the compressed public key on `network`.
    #[must_use]
    pub fn address(&self, network: Network) -> String {
        derive_address(&self.public_key(), network.p2pkh_version())
    }

    pub(crate) fn secret_key(&self) -> &SecretKey {
        &self.0
    }
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        self.0.non_secure_erase();
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("PrivateKey(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;
    use pretty_assertions::assert_eq;

    const ONE: &str = "0000000000000000000000000000000000000000000000000000000000000001";

    #[test]
    fn generator_pubkey() -> Result<()> {
        let key = PrivateKey::from_hex(ONE)?;
        assert_eq!(
            key.public_key(),
            hex!("0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798")
        );
        assert_eq!(key.address(Network::Mainnet), "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH");
        Ok(())
    }

    #[test]
    fn invalid_scalars() {
        assert!(matches!(PrivateKey::from_bytes(&[0; 32]), Err(Error::SigningKeyInvalid)));
        assert!(matches!(PrivateKey::from_bytes(&[0xff; 32]), Err(Error::SigningKeyInvalid)));
        assert!(matches!(PrivateKey::from_bytes(&[1; 31]), Err(Error::SigningKeyInvalid)));
        let order = hex!("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141");
        assert!(matches!(PrivateKey::from_bytes(&order), Err(Error::SigningKeyInvalid)));
    }

    #[test]
    fn bad_hex() {
        assert!(matches!(PrivateKey::from_hex("zz"), Err(Error::FromHexError(_))));
    }

    #[test]
    fn debug_hides_key() {
        let key = PrivateKey::from_hex(ONE).unwrap();
        assert_eq!(format!("{:?}", key), "PrivateKey(<redacted>)");
    }
}
