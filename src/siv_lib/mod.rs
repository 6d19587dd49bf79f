mod cipher;
mod core;
mod error;
mod key;
mod modes;
mod siv;

pub use cipher::{Aes, BlockCipher};
pub use error::{Error, Result};
pub use key::{Key, SivKey, SivKeySize};
pub use modes::{Cmac, counter_block, ctr_core_parallel, ctr_core_serial, ctr_encrypt, dbl, s2v};
pub use siv::{MAX_ASSOCIATED_DATA, Siv, TAG_SIZE, encrypt};

/// AES block size in bytes.
pub const BLOCK_SIZE: usize = 16;
