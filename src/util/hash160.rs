//! Hash160 computation (SHA256 then RIPEMD160) for public key hashes.

use bitcoin_hashes::{Hash, hash160 as bh_hash160};
use std::fmt;

/// 160-bit hash of a public key, as embedded in P2PKH scripts and addresses.
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hash160(pub [u8; 20]);

/// Computes Hash160 (RIPEMD160(SHA256(data))).
#[must_use]
#[inline]
pub fn hash160(data: &[u8]) -> Hash160 {
    Hash160(bh_hash160::Hash::hash(data).to_byte_array())
}

impl From<[u8; 20]> for Hash160 {
    fn from(bytes: [u8; 20]) -> Self {
        Hash160(bytes)
    }
}

impl fmt::Debug for Hash160 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;
    use pretty_assertions::assert_eq;

    #[test]
    fn tohash160() {
        let pubkey = hex!("126999eabe3f84a3a9f5c09e87faab27484818a0ec1d67b94c9a02e40268499d98538cf770198550adfb9d1d473e5e926bb00e4c58baec1fb42ffa6069781003e4");
        let expected = hex!("3c231b5e624a42e99a87160c6e4231718a6d77c0");
        assert_eq!(hash160(&pubkey).0, expected);
    }

    #[test]
    fn generator_pubkey() {
        // Compressed public key for private key 1.
        let pubkey = hex!("0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798");
        let expected = hex!("751e76e8199196d454941c45d1b3a323f1433bd6");
        assert_eq!(hash160(&pubkey).0, expected);
    }

    #[test]
    fn from_array() {
        let bytes = [7u8; 20];
        let h: Hash160 = bytes.into();
        assert_eq!(h.0, bytes);
        assert_eq!(format!("{:?}", h), "07".repeat(20));
    }
}
