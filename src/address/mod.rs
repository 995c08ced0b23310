//! Base58Check addresses for pay-to-pubkey-hash outputs.
//!
//! An address is `version || hash160 || checksum`, where the checksum is the
//! first four bytes of `sha256d(version || hash160)`, Base58-encoded with the
//! standard Bitcoin alphabet.

use crate::network::Network;
use crate::util::{Error, Hash160, Result, hash160, sha256d};
use base58::{FromBase58, ToBase58};

/// Encoded address length in bytes before Base58 (1 + 20 + 4).
const ADDRESS_LEN: usize = 25;

/// Encodes a base58check address from version byte and 20-byte payload.
///
/// # Examples
/// ```
/// use nour_p2pkh::address::encode_address;
/// use nour_p2pkh::util::Hash160;
/// let addr = encode_address(0x00, &Hash160([0u8; 20]));
/// assert_eq!(addr, "1111111111111111111114oLvT2");
/// ```
#[must_use]
pub fn encode_address(version: u8, payload: &Hash160) -> String {
    let mut v = [0u8; ADDRESS_LEN];
    v[0] = version;
    v[1..21].copy_from_slice(&payload.0);
    let checksum = sha256d(&v[..21]);
    v[21..25].copy_from_slice(&checksum.0[..4]);
    v.to_base58()
}

/// Derives the address of a serialized public key.
#[must_use]
#[inline]
pub fn derive_address(pubkey: &[u8], version: u8) -> String {
    encode_address(version, &hash160(pubkey))
}

/// Decodes a base58check address into version and payload.
///
/// # Errors
/// `Error::FromBase58Error` for characters outside the alphabet, `Error::BadData`
/// for a wrong length, and `Error::ChecksumMismatch` when the checksum differs.
pub fn decode_address(input: &str) -> Result<(u8, Hash160)> {
    let bytes = input.from_base58()?;
    if bytes.len() != ADDRESS_LEN {
        return Err(Error::BadData(format!(
            "Invalid address length: {}",
            bytes.len()
        )));
    }
    let checksum = sha256d(&bytes[..21]);
    if checksum.0[..4] != bytes[21..] {
        return Err(Error::ChecksumMismatch);
    }
    let mut payload = [0u8; 20];
    payload.copy_from_slice(&bytes[1..21]);
    Ok((bytes[0], Hash160(payload)))
}

/// Encodes a P2PKH address for `network` from a 20-byte pubkey hash.
#[must_use]
#[inline]
pub fn encode_p2pkh_address(network: Network, pubkey_hash: &Hash160) -> String {
    encode_address(network.p2pkh_version(), pubkey_hash)
}

/// Validates an address version against the network (P2PKH or P2SH only).
///
/// # Errors
/// Decoding errors as [`decode_address`], or `Error::BadData` if the version
/// belongs to another network.
pub fn validate_address(network: Network, address: &str) -> Result<()> {
    let (version, _) = decode_address(address)?;
    if version != network.p2pkh_version() && version != network.p2sh_version() {
        return Err(Error::BadData(
            "Invalid address version for network".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;
    use pretty_assertions::assert_eq;

    #[test]
    fn encode_decode_p2pkh() -> Result<()> {
        let pubkey_hash = Hash160(hex!("1a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b"));
        let address = encode_p2pkh_address(Network::Mainnet, &pubkey_hash);
        assert_eq!(address, "13PNN3hx4wxHBLFwLNNwmKxD6V5jFZQo6s");
        let (version, decoded) = decode_address(&address)?;
        assert_eq!(version, 0x00);
        assert_eq!(decoded, pubkey_hash);
        Ok(())
    }

    #[test]
    fn derive_from_pubkey() {
        let pubkey = hex!("0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798");
        assert_eq!(
            derive_address(&pubkey, Network::Mainnet.p2pkh_version()),
            "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH"
        );
    }

    #[test]
    fn leading_zeros_preserved() -> Result<()> {
        let addr = encode_address(0x00, &Hash160([0; 20]));
        assert_eq!(addr, "1111111111111111111114oLvT2");
        let (version, payload) = decode_address(&addr)?;
        assert_eq!(version, 0);
        assert_eq!(payload, Hash160([0; 20]));
        Ok(())
    }

    #[test]
    fn testnet_roundtrip() -> Result<()> {
        let h = Hash160([0x42; 20]);
        let addr = encode_p2pkh_address(Network::Testnet, &h);
        assert!(addr.starts_with('m') || addr.starts_with('n'));
        assert_eq!(decode_address(&addr)?, (0x6f, h));
        Ok(())
    }

    #[test]
    fn checksum_flip_rejected() {
        let pubkey_hash = Hash160(hex!("1a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b"));
        let mut raw = vec![0x00];
        raw.extend_from_slice(&pubkey_hash.0);
        let checksum = sha256d(&raw);
        raw.extend_from_slice(&checksum.0[..4]);
        raw[24] ^= 0x01;
        let err = decode_address(&raw.to_base58()).unwrap_err();
        assert!(matches!(err, Error::ChecksumMismatch));
    }

    #[test]
    fn bad_characters() {
        // '0', 'O', 'I' and 'l' are outside the alphabet
        let err = decode_address("13PNN3hx4wxHBLFwLNNwmKxD6V5jFZQo0s").unwrap_err();
        assert!(matches!(err, Error::FromBase58Error(_)));
    }

    #[test]
    fn wrong_length() {
        let err = decode_address(&[0u8; 24].to_base58()).unwrap_err();
        assert!(matches!(err, Error::BadData(_)));
    }

    #[test]
    fn validate() -> Result<()> {
        let valid_mainnet = "13PNN3hx4wxHBLFwLNNwmKxD6V5jFZQo6s";
        let valid_testnet = "mipcBbFg9gMiCh81Kj8tqqdgoZub1ZJRfn";
        validate_address(Network::Mainnet, valid_mainnet)?;
        validate_address(Network::Testnet, valid_testnet)?;
        validate_address(Network::STN, valid_testnet)?;
        assert_eq!(
            validate_address(Network::Mainnet, valid_testnet)
                .unwrap_err()
                .to_string(),
            "Bad data: Invalid address version for network"
        );
        Ok(())
    }
}
