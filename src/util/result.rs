//! Standard error and result types for the library.
use base58::FromBase58Error;
use hex::FromHexError;
use secp256k1::Error as Secp256k1Error;
use std::io;

/// Standard error type used in the library
#[derive(Debug)]
pub enum Error {
    /// An argument provided is invalid
    BadArgument(String),
    /// The data given is not valid
    BadData(String),
    /// The address checksum does not match its payload
    ChecksumMismatch,
    /// The input set to spend is empty
    EmptyInputSet,
    /// Base58 string could not be decoded
    FromBase58Error(FromBase58Error),
    /// Hex string could not be decoded
    FromHexError(FromHexError),
    /// The inputs do not cover the amount plus fee
    InsufficientFunds {
        /// Satoshis needed (amount + fee)
        required: u64,
        /// Satoshis held by the inputs
        available: u64,
    },
    /// Standard library IO error
    IOError(io::Error),
    /// A serialized transaction could not be decoded
    MalformedEncoding(String),
    /// No private key was supplied to sign with
    MissingPrivateKey,
    /// Error in the Secp256k1 library
    Secp256k1Error(Secp256k1Error),
    /// The private key is not a valid secp256k1 scalar
    SigningKeyInvalid,
    /// The buffer ended before a complete value was read
    TruncatedInput,
    /// The data or functionality is not supported by this library
    Unsupported(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::BadArgument(s) => write!(f, "Bad argument: {}", s),
            Error::BadData(s) => write!(f, "Bad data: {}", s),
            Error::ChecksumMismatch => write!(f, "Checksum mismatch"),
            Error::EmptyInputSet => write!(f, "Empty input set"),
            Error::FromBase58Error(e) => write!(f, "Base58 decoding error: {:?}", e),
            Error::FromHexError(e) => write!(f, "Hex decoding error: {}", e),
            Error::InsufficientFunds {
                required,
                available,
            } => write!(
                f,
                "Insufficient funds: required {}, available {}",
                required, available
            ),
            Error::IOError(e) => write!(f, "IO error: {}", e),
            Error::MalformedEncoding(s) => write!(f, "Malformed encoding: {}", s),
            Error::MissingPrivateKey => write!(f, "Private key is missing"),
            Error::Secp256k1Error(e) => write!(f, "Secp256k1 error: {}", e),
            Error::SigningKeyInvalid => write!(f, "Signing key invalid"),
            Error::TruncatedInput => write!(f, "Truncated input"),
            Error::Unsupported(s) => write!(f, "Unsupported: {}", s),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::FromHexError(e) => Some(e),
            Error::IOError(e) => Some(e),
            Error::Secp256k1Error(e) => Some(e),
            _ => None,
        }
    }
}

impl From<FromBase58Error> for Error {
    fn from(e: FromBase58Error) -> Self {
        Error::FromBase58Error(e)
    }
}

impl From<FromHexError> for Error {
    fn from(e: FromHexError) -> Self {
        Error::FromHexError(e)
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::UnexpectedEof => Error::TruncatedInput,
            _ => Error::IOError(e),
        }
    }
}

impl From<Secp256k1Error> for Error {
    fn from(e: Secp256k1Error) -> Self {
        Error::Secp256k1Error(e)
    }
}

/// Standard Result used in the library
pub type Result<T> = std::result::Result<T, Error>;
