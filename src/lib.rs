//! AES-SIV (RFC 5297): deterministic authenticated encryption with associated data.
//!
//! ```
//! # fn main() -> aes_siv::Result<()> {
//! let key = [0x11u8; 64];
//! let ad: &[u8] = b"file-id:7";
//! let ciphertext = aes_siv::encrypt(None, &key, b"secret", &[ad])?;
//! assert_eq!(ciphertext.len(), aes_siv::TAG_SIZE + 6);
//! # Ok(())
//! # }
//! ```

mod siv_lib;

pub use siv_lib::{
    Aes, BLOCK_SIZE, BlockCipher, Cmac, Error, Key, MAX_ASSOCIATED_DATA, Result, Siv, SivKey,
    SivKeySize, TAG_SIZE, counter_block, ctr_core_parallel, ctr_core_serial, ctr_encrypt, dbl,
    encrypt, s2v,
};
