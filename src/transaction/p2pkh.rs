//! Pay-to-pubkey-hash lock and unlock scripts.
//!
//! Lock: `OP_DUP OP_HASH160 <20-byte hash> OP_EQUALVERIFY OP_CHECKSIG`.
//! Unlock: `<sig + sighash type> <public key>`.

use crate::address::decode_address;
use crate::network::Network;
use crate::script::op_codes::{OP_CHECKSIG, OP_DUP, OP_EQUALVERIFY, OP_HASH160, OP_PUSH};
use crate::script::{Script, next_op, read_push};
use crate::util::{Error, Hash160, Result};

/// Length of a P2PKH lock script in bytes.
pub const LOCK_SCRIPT_LEN: usize = 25;

/// Creates a P2PKH lock script paying to `pubkey_hash`.
#[must_use]
pub fn create_lock_script(pubkey_hash: &Hash160) -> Script {
    let mut script = Script(Vec::with_capacity(LOCK_SCRIPT_LEN));
    script.append(OP_DUP);
    script.append(OP_HASH160);
    script.append(OP_PUSH + 20);
    script.append_slice(&pubkey_hash.0);
    script.append(OP_EQUALVERIFY);
    script.append(OP_CHECKSIG);
    script
}

/// Creates the lock script for a Base58Check address on `network`.
///
/// The address is decoded to its pubkey hash; its characters are never used
/// as script bytes.
///
/// # Errors
/// Decoding errors as [`decode_address`], or `Error::BadArgument` if the
/// version byte is not the network's P2PKH version.
pub fn lock_script_for_address(address: &str, network: Network) -> Result<Script> {
    let (version, pubkey_hash) = decode_address(address)?;
    if version != network.p2pkh_version() {
        return Err(Error::BadArgument(format!(
            "Address version {:#04x} is not P2PKH on {}",
            version, network
        )));
    }
    Ok(create_lock_script(&pubkey_hash))
}

/// Creates a P2PKH unlock script pushing `sig` then `public_key`.
///
/// # Errors
/// `Error::BadArgument` if either item is too long to push.
pub fn create_unlock_script(sig: &[u8], public_key: &[u8]) -> Result<Script> {
    let mut script = Script(Vec::with_capacity(sig.len() + public_key.len() + 2));
    script.append_data(sig)?;
    script.append_data(public_key)?;
    Ok(script)
}

/// Checks whether a script is a P2PKH lock script.
#[must_use]
pub fn check_lock_script(lock_script: &[u8]) -> bool {
    lock_script.len() == LOCK_SCRIPT_LEN
        && lock_script[0] == OP_DUP
        && lock_script[1] == OP_HASH160
        && lock_script[2] == OP_PUSH + 20
        && lock_script[23] == OP_EQUALVERIFY
        && lock_script[24] == OP_CHECKSIG
}

/// Checks whether a script is a P2PKH unlock script.
///
/// Expects a direct push of a 9 to 73 byte signature followed by a 33 or 65
/// byte public key, and nothing after.
#[must_use]
pub fn check_unlock_script(unlock_script: &[u8]) -> bool {
    let Some(&sig_len) = unlock_script.first() else {
        return false;
    };
    if !(OP_PUSH + 9..=OP_PUSH + 73).contains(&sig_len) {
        return false;
    }
    let i = next_op(0, unlock_script);
    if i >= unlock_script.len() {
        return false;
    }
    let pk_len = unlock_script[i];
    if pk_len != OP_PUSH + 33 && pk_len != OP_PUSH + 65 {
        return false;
    }
    i + 1 + pk_len as usize == unlock_script.len()
}

/// Extracts the signature (with sighash type byte) and public key from a P2PKH unlock script.
///
/// # Errors
/// `Error::BadData` if the script is not a P2PKH unlock script.
pub fn extract_sig_and_pubkey(unlock_script: &[u8]) -> Result<(&[u8], &[u8])> {
    if !check_unlock_script(unlock_script) {
        return Err(Error::BadData("Not P2PKH unlock".to_string()));
    }
    let (sig, i) = read_push(0, unlock_script)?;
    let (pubkey, _) = read_push(i, unlock_script)?;
    Ok((sig, pubkey))
}

/// Extracts the public key from a P2PKH unlock script.
///
/// # Errors
/// `Error::BadData` if the script is not a P2PKH unlock script.
pub fn extract_pubkey(unlock_script: &[u8]) -> Result<Vec<u8>> {
    let (_, pubkey) = extract_sig_and_pubkey(unlock_script)?;
    Ok(pubkey.to_vec())
}

/// Extracts the pubkey hash from a P2PKH lock script.
///
/// # Errors
/// `Error::BadData` if the script is not a P2PKH lock script.
pub fn extract_pubkeyhash(lock_script: &[u8]) -> Result<Hash160> {
    if !check_lock_script(lock_script) {
        return Err(Error::BadData("Not P2PKH lock".to_string()));
    }
    let mut hash160 = Hash160([0; 20]);
    hash160.0.copy_from_slice(&lock_script[3..23]);
    Ok(hash160)
}
