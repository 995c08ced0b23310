#![deny(missing_docs)]
#![deny(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

/*! # nour-p2pkh

Deterministic builder for single-signer pay-to-pubkey-hash transactions on
Bitcoin SV. Given spendable outputs, a target address, an amount, a fixed fee
and a private key, it computes change, signs every input with RFC6979 ECDSA
over the legacy signature digest, and returns the canonical wire encoding.

Sourcing outputs, fee estimation and broadcasting are left to the caller.

## Usage
```
use nour_p2pkh::messages::{OutPoint, Tx};
use nour_p2pkh::transaction::builder::{TxBuilder, Utxo};
use nour_p2pkh::transaction::p2pkh::create_lock_script;
use nour_p2pkh::util::{Hash256, hash160};
use nour_p2pkh::wallet::PrivateKey;

let key = PrivateKey::from_bytes(&[1; 32]).unwrap();
let utxo = Utxo::new(
    OutPoint { hash: Hash256([7; 32]), index: 0 },
    50000,
    create_lock_script(&hash160(&key.public_key())),
);
let bytes = TxBuilder::default()
    .build(&[utxo], "13PNN3hx4wxHBLFwLNNwmKxD6V5jFZQo6s", 30000, 1000, Some(&key))
    .unwrap();
let tx = Tx::from_bytes(&bytes).unwrap();
assert_eq!(tx.outputs[1].satoshis, 19000);
```

## Logging
Builds emit `tracing` events at debug level and each signed input at trace
level. No subscriber is installed. Key material is never logged.

## Security
- Private keys are erased when dropped and are never persisted.
- Not intended for consensus validation; use with a trusted BSV node.
*/

pub mod address;
pub mod messages;
pub mod network;
pub mod script;
pub mod transaction;
pub mod util;
pub mod wallet;

pub use crate::network::Network;
pub use crate::transaction::builder::{BuilderConfig, BuiltTx, TxBuilder, Utxo};
pub use crate::util::{Error, Result};
pub use crate::wallet::PrivateKey;
