//! Network selection and the address version bytes that go with it.

use crate::util::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Network a transaction is built for.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    /// Production network
    #[default]
    Mainnet,
    /// Public test network
    Testnet,
    /// Scaling test network
    STN,
}

impl Network {
    /// Version byte prefixed to P2PKH addresses on this network.
    #[must_use]
    #[inline]
    pub fn p2pkh_version(&self) -> u8 {
        match self {
            Network::Mainnet => 0x00,
            Network::Testnet | Network::STN => 0x6f,
        }
    }

    /// Version byte prefixed to P2SH addresses on this network.
    #[must_use]
    #[inline]
    pub fn p2sh_version(&self) -> u8 {
        match self {
            Network::Mainnet => 0x05,
            Network::Testnet | Network::STN => 0xc4,
        }
    }
}

impl FromStr for Network {
    type Err = Error;

    fn from_str(s: &str) -> Result<Network> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" | "main" => Ok(Network::Mainnet),
            "testnet" | "test" => Ok(Network::Testnet),
            "stn" => Ok(Network::STN),
            _ => Err(Error::BadArgument(format!("Unknown network: {}", s))),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Network::Mainnet => write!(f, "mainnet"),
            Network::Testnet => write!(f, "testnet"),
            Network::STN => write!(f, "stn"),
        }
    }
}
