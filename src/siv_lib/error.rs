use thiserror::Error;
use rand::rand_core;

/// SIV Result type.
pub type Result<T> = std::result::Result<T, Error>;

/// SIV Error type.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Attempted to encrypt with a key that is not 256, 384, or 512 bits. The key is split in half
    /// into a CMAC key and a CTR key, so each half must itself be a valid AES key.
    #[error("invalid key size: {len} bytes (expected a 32-byte, 48-byte, or 64-byte key)")]
    InvalidKeySize { len: usize },

    /// More associated data components were supplied than S2V can absorb.
    #[error("too much associated data: {count} components (limit is {max})")]
    TooMuchAssociatedData { count: usize, max: usize },

    /// Attempted to instantiate an AES key with an input size that is not 128, 192, or 256 bits.
    #[error("invalid AES key length: {len} bytes (expected 16, 24, or 32)")]
    InvalidKeyLength { len: usize },

    /// OS RNG failed during random key generation.
    #[error("OS RNG failed in random key generation")]
    Rng(#[from] rand_core::OsError),
}
