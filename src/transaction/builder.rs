//! Assembles and signs a pay-to-pubkey-hash transaction from spendable outputs.
//!
//! The builder spends every supplied output, pays `amount` to the target
//! address, returns any remainder above the fee to the signer's own address,
//! and signs each input against the lock script it spends. Every check runs
//! before the first output is built, so a failed build leaves nothing behind.

use crate::messages::{OutPoint, SEQUENCE_FINAL, Tx, TxIn, TxOut};
use crate::network::Network;
use crate::script::Script;
use crate::transaction::p2pkh::{create_lock_script, lock_script_for_address};
use crate::transaction::signer::sign;
use crate::util::{Error, Hash256, Result, hash160};
use crate::wallet::PrivateKey;
use tracing::debug;

/// An unspent output the builder may spend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utxo {
    /// Transaction hash and output index.
    pub outpoint: OutPoint,
    /// Value in satoshis.
    pub satoshis: u64,
    /// Lock script of the output, signed over when spending it.
    pub lock_script: Script,
}

impl Utxo {
    /// Creates a new spendable output.
    #[must_use]
    pub fn new(outpoint: OutPoint, satoshis: u64, lock_script: Script) -> Utxo {
        Utxo {
            outpoint,
            satoshis,
            lock_script,
        }
    }

    /// Creates a spendable output from a display-order txid and hex lock script.
    ///
    /// # Errors
    /// `Error::FromHexError` for invalid hex, `Error::BadArgument` if the txid is not 32 bytes.
    pub fn from_hex(txid: &str, vout: u32, satoshis: u64, lock_script: &str) -> Result<Utxo> {
        let outpoint = OutPoint {
            hash: Hash256::decode(txid)?,
            index: vout,
        };
        Ok(Utxo::new(outpoint, satoshis, Script(hex::decode(lock_script)?)))
    }
}

/// Settings applied to every transaction a [`TxBuilder`] produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuilderConfig {
    /// Network whose address version the target and change addresses use.
    pub network: Network,
    /// Transaction version.
    pub version: i32,
    /// Transaction lock time.
    pub lock_time: u32,
    /// Sequence number given to every input.
    pub sequence: u32,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        BuilderConfig {
            network: Network::Mainnet,
            version: 1,
            lock_time: 0,
            sequence: SEQUENCE_FINAL,
        }
    }
}

impl BuilderConfig {
    /// Sets the network.
    #[must_use]
    pub fn with_network(mut self, network: Network) -> Self {
        self.network = network;
        self
    }

    /// Sets the transaction version.
    #[must_use]
    pub fn with_version(mut self, version: i32) -> Self {
        self.version = version;
        self
    }

    /// Sets the lock time.
    #[must_use]
    pub fn with_lock_time(mut self, lock_time: u32) -> Self {
        self.lock_time = lock_time;
        self
    }

    /// Sets the input sequence number.
    #[must_use]
    pub fn with_sequence(mut self, sequence: u32) -> Self {
        self.sequence = sequence;
        self
    }
}

/// A signed transaction along with its encoding and accounting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltTx {
    /// The signed transaction.
    pub tx: Tx,
    /// Serialized transaction.
    pub bytes: Vec<u8>,
    /// Display-order transaction id.
    pub txid: String,
    /// Fee paid, in satoshis.
    pub fee: u64,
    /// Change returned to the signer, 0 if there is no change output.
    pub change: u64,
}

/// Builds signed single-key P2PKH transactions.
#[derive(Debug, Clone, Copy, Default)]
pub struct TxBuilder {
    config: BuilderConfig,
}

impl TxBuilder {
    /// Creates a builder with the given settings.
    #[must_use]
    pub fn new(config: BuilderConfig) -> TxBuilder {
        TxBuilder { config }
    }

    /// Returns the builder's settings.
    #[must_use]
    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Builds, signs and serializes a transaction paying `amount` to `target_address`.
    ///
    /// # Errors
    /// See [`TxBuilder::build_tx`].
    pub fn build(
        &self,
        utxos: &[Utxo],
        target_address: &str,
        amount: u64,
        fee: u64,
        private_key: Option<&PrivateKey>,
    ) -> Result<Vec<u8>> {
        self.build_tx(utxos, target_address, amount, fee, private_key)
            .map(|built| built.bytes)
    }

    /// Builds and signs a transaction paying `amount` to `target_address`.
    ///
    /// All of `utxos` are spent in order. A change output paying the
    /// remainder to the key's own address follows the payment when
    /// `total - amount - fee` is positive.
    ///
    /// # Errors
    /// In order of checking:
    /// * `Error::MissingPrivateKey` if `private_key` is `None`
    /// * `Error::EmptyInputSet` if `utxos` is empty
    /// * `Error::BadArgument` if the input total or `amount + fee` overflows
    /// * `Error::InsufficientFunds` if the inputs do not cover `amount + fee`
    /// * address errors from decoding `target_address`, including
    ///   `Error::BadArgument` when it belongs to another network
    pub fn build_tx(
        &self,
        utxos: &[Utxo],
        target_address: &str,
        amount: u64,
        fee: u64,
        private_key: Option<&PrivateKey>,
    ) -> Result<BuiltTx> {
        let private_key = private_key.ok_or(Error::MissingPrivateKey)?;
        if utxos.is_empty() {
            debug!("rejecting build with no inputs");
            return Err(Error::EmptyInputSet);
        }
        let available = utxos.iter().try_fold(0u64, |acc, utxo| {
            acc.checked_add(utxo.satoshis)
                .ok_or_else(|| Error::BadArgument("Input total overflows".to_string()))
        })?;
        let required = amount
            .checked_add(fee)
            .ok_or_else(|| Error::BadArgument("Amount plus fee overflows".to_string()))?;
        if available < required {
            debug!(required, available, "rejecting build with insufficient funds");
            return Err(Error::InsufficientFunds {
                required,
                available,
            });
        }
        let payment_script = lock_script_for_address(target_address, self.config.network)?;
        let change = available - required;

        let inputs = utxos
            .iter()
            .map(|utxo| TxIn {
                prev_output: utxo.outpoint.clone(),
                unlock_script: Script::new(),
                sequence: self.config.sequence,
            })
            .collect();
        let mut outputs = Vec::with_capacity(2);
        outputs.push(TxOut {
            satoshis: amount,
            lock_script: payment_script,
        });
        if change > 0 {
            outputs.push(TxOut {
                satoshis: change,
                lock_script: create_lock_script(&hash160(&private_key.public_key())),
            });
        }
        let unsigned = Tx {
            version: self.config.version,
            inputs,
            outputs,
            lock_time: self.config.lock_time,
        };

        let unlock_scripts = utxos
            .iter()
            .enumerate()
            .map(|(i, utxo)| sign(private_key, &unsigned, i, &utxo.lock_script))
            .collect::<Result<Vec<Script>>>()?;
        let mut tx = unsigned;
        for (tx_in, unlock_script) in tx.inputs.iter_mut().zip(unlock_scripts) {
            tx_in.unlock_script = unlock_script;
        }

        let bytes = tx.to_bytes();
        let txid = tx.hash().encode();
        debug!(
            inputs = tx.inputs.len(),
            outputs = tx.outputs.len(),
            fee,
            change,
            size = bytes.len(),
            txid = %txid,
            "built transaction"
        );
        Ok(BuiltTx {
            tx,
            bytes,
            txid,
            fee,
            change,
        })
    }
}
