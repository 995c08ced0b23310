//! Signing key handling.
//!
//! Keys are supplied by the caller and only held in memory for the duration
//! of a build. Nothing here generates or stores keys.

mod private_key;

pub use self::private_key::PrivateKey;
pub(crate) use self::private_key::SECP;
