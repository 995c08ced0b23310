//! Transaction structures and their wire encoding.
//!
//! All integers are little-endian. Hashes are stored and written in internal
//! byte order, which is the reverse of the hex shown by explorers.

mod out_point;
mod tx;
mod tx_in;
mod tx_out;

pub use self::out_point::OutPoint;
pub use self::tx::Tx;
pub use self::tx_in::{SEQUENCE_FINAL, TxIn};
pub use self::tx_out::TxOut;
