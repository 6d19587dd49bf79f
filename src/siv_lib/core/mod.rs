//! Core AES implementation for encryption of a 16 byte block. SIV only ever runs the cipher in
//! the forward direction (CMAC and CTR), so there is no inverse cipher. Exports encrypt_block.

pub mod constants;
mod util;
mod encryption;

pub use encryption::encrypt_block;
