//! The block cipher that SIV is built on. CMAC and CTR only ever need forward encryption of a
//! single 16-byte block, so that is the whole of the [BlockCipher] capability.

use crate::siv_lib::core::constants::{RCON, SBOX};
use crate::siv_lib::core::encrypt_block;
use crate::siv_lib::key::Key;

/// A 128-bit block cipher keyed with a 16, 24, or 32 byte [Key].
///
/// `Sync` is required because counter mode encrypts blocks from multiple threads
/// once the input is large enough.
pub trait BlockCipher: Sync + Sized {
    /// Prepares the cipher for the given key (e.g. by running the key schedule).
    fn new(key: &Key) -> Self;

    /// Encrypts one 16-byte block.
    fn encrypt_block(&self, block: &[u8; 16]) -> [u8; 16];
}

/// AES-128/192/256 forward cipher. Instantiated with an AES [Key], which is expanded into round
/// keys and stored in the instance.
pub struct Aes {
    round_keys: Vec<[u8; 16]>,
}

impl Aes {
    /// Getter for internal round keys. Returned as a slice of 16-byte arrays.
    pub fn get_round_keys(&self) -> &[[u8; 16]] {
        &self.round_keys
    }
}

impl BlockCipher for Aes {
    fn new(key: &Key) -> Self {
        Self {
            round_keys: expand_key(key),
        }
    }

    #[inline(always)]
    fn encrypt_block(&self, block: &[u8; 16]) -> [u8; 16] {
        encrypt_block(block, &self.round_keys)
    }
}

#[inline(always)]
fn xor_words(a: &[u8; 4], b: &[u8; 4]) -> [u8; 4] {
    [a[0] ^ b[0], a[1] ^ b[1], a[2] ^ b[2], a[3] ^ b[3]]
}

/// AES key schedule. Returns a vector of 11, 13, or 15 round keys, corresponding with AES-128, AES-192,
/// and AES-256, respectively. The extra round key is the initial round key, which is not counted in most
/// documentation as it is simply the original key.
pub(crate) fn expand_key(key: &Key) -> Vec<[u8; 16]> {
    let key = key.as_bytes();

    // Variable names match FIPS-197, NIST specification: https://doi.org/10.6028/NIST.FIPS.197-upd1
    // Nk   The number of 32-bit words comprising the key
    // Nr   The number of rounds. 10, 12, and 14 for AES-128, AES-192, and AES-256, respectively
    // w    The result of the key schedule, an array of words that form round keys
    // Nw   The total number of words generated by the key schedule (including initial key)
    let nk = key.len() / 4;
    let nr = nk + 6;
    let nw = (nr + 1) * 4;

    let mut w: Vec<[u8; 4]> = vec![[0u8; 4]; nw];

    // first nk words of w are filled with the initial key
    for (word, chunk) in w.iter_mut().zip(key.chunks_exact(4)) {
        word.copy_from_slice(chunk);
    }

    let mut temp = w[nk - 1];
    for i in nk..nw {
        if i % nk == 0 {
            // rot_word, sub_word, and rcon on temp
            temp = [
                SBOX[temp[1] as usize] ^ RCON[i / nk],
                SBOX[temp[2] as usize],
                SBOX[temp[3] as usize],
                SBOX[temp[0] as usize],
            ];
        } else if nk == 8 && i % nk == 4 {
            // additional substitution on temp for AES-256 only
            temp = temp.map(|b| SBOX[b as usize]);
        }

        // w[i] = temp ⊕ w[i − Nk]
        w[i] = xor_words(&temp, &w[i - nk]);
        temp = w[i];
    }

    // state is column-major, so each round key is just four consecutive words
    w.chunks_exact(4)
        .map(|words| {
            let mut round_key = [0u8; 16];
            for (dst, word) in round_key.chunks_exact_mut(4).zip(words) {
                dst.copy_from_slice(word);
            }
            round_key
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::siv_lib::error::Result;

    #[test]
    fn key_schedule_128() -> Result<()> {
        // run key schedule on 128 bit sample key from FIPS-197 Appendix A.1
        let key_128: [u8; 16] = [
            0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf,
            0x4f, 0x3c,
        ];

        let aes = Aes::new(&Key::try_from_slice(&key_128)?);
        let round_keys = aes.get_round_keys();
        assert_eq!(round_keys.len(), 11);
        assert_eq!(round_keys[0], key_128);

        // compare with last round key of sample schedule in A.1
        let expected: [u8; 16] = [
            0xd0, 0x14, 0xf9, 0xa8, 0xc9, 0xee, 0x25, 0x89, 0xe1, 0x3f, 0x0c, 0xc8, 0xb6, 0x63,
            0x0c, 0xa6,
        ];
        assert_eq!(round_keys[10], expected);

        Ok(())
    }

    #[test]
    fn key_schedule_192() -> Result<()> {
        // run key schedule on 192 bit sample key from FIPS-197 Appendix A.2
        let key_192: [u8; 24] = [
            0x8e, 0x73, 0xb0, 0xf7, 0xda, 0x0e, 0x64, 0x52, 0xc8, 0x10, 0xf3, 0x2b, 0x80, 0x90,
            0x79, 0xe5, 0x62, 0xf8, 0xea, 0xd2, 0x52, 0x2c, 0x6b, 0x7b,
        ];

        let round_keys = expand_key(&Key::try_from_slice(&key_192)?);
        assert_eq!(round_keys.len(), 13);

        // compare with last round key of sample schedule in A.2
        let expected: [u8; 16] = [
            0xe9, 0x8b, 0xa0, 0x6f, 0x44, 0x8c, 0x77, 0x3c, 0x8e, 0xcc, 0x72, 0x04, 0x01, 0x00,
            0x22, 0x02,
        ];
        assert_eq!(round_keys[12], expected);

        Ok(())
    }

    #[test]
    fn key_schedule_256() -> Result<()> {
        // run key schedule on 256 bit sample key from FIPS-197 Appendix A.3
        let key_256: [u8; 32] = [
            0x60, 0x3d, 0xeb, 0x10, 0x15, 0xca, 0x71, 0xbe, 0x2b, 0x73, 0xae, 0xf0, 0x85, 0x7d,
            0x77, 0x81, 0x1f, 0x35, 0x2c, 0x07, 0x3b, 0x61, 0x08, 0xd7, 0x2d, 0x98, 0x10, 0xa3,
            0x09, 0x14, 0xdf, 0xf4,
        ];

        let round_keys = expand_key(&Key::try_from_slice(&key_256)?);
        assert_eq!(round_keys.len(), 15);

        // compare with last round key of sample schedule in A.3
        let expected: [u8; 16] = [
            0xfe, 0x48, 0x90, 0xd1, 0xe6, 0x18, 0x8d, 0x0b, 0x04, 0x6d, 0xf3, 0x44, 0x70, 0x6c,
            0x63, 0x1e,
        ];
        assert_eq!(round_keys[14], expected);

        Ok(())
    }
}
