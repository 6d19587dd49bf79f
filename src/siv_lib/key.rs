//! Defines the [`SivKey`] struct, which holds a valid AES-SIV key of 256, 384, or 512 bits, and
//! the [`Key`] struct, which holds one of its halves: a valid AES key of 128, 192, or 256 bits.

use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::siv_lib::error::{Error, Result};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum KeyBytes {
    K128([u8; 16]),
    K192([u8; 24]),
    K256([u8; 32]),
}

/// Contains a valid AES key of 16, 24, or 32 bytes. Required to instantiate a
/// [BlockCipher](crate::BlockCipher).
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Key {
    bytes: KeyBytes,
}

impl Key {
    /// Attempts to build a key from a slice of bytes. Will return an InvalidKeyLength error
    /// if the input slice is anything other than 16, 24, or 32 bytes long.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes = match bytes.len() {
            16 => KeyBytes::K128(to_array(bytes)),
            24 => KeyBytes::K192(to_array(bytes)),
            32 => KeyBytes::K256(to_array(bytes)),
            _ => return Err(Error::InvalidKeyLength { len: bytes.len() }),
        };
        Ok(Self { bytes })
    }

    /// Returns a reference to the internal key as an array of bytes.
    pub fn as_bytes(&self) -> &[u8] {
        match &self.bytes {
            KeyBytes::K128(k) => k,
            KeyBytes::K192(k) => k,
            KeyBytes::K256(k) => k,
        }
    }
}

/// Supported SIV key sizes. Each is twice the size of the underlying AES key.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum SivKeySize {
    /// AES-SIV-CMAC-256 (two AES-128 keys).
    Bits256,
    /// AES-SIV-CMAC-384 (two AES-192 keys).
    Bits384,
    /// AES-SIV-CMAC-512 (two AES-256 keys).
    Bits512,
}

impl SivKeySize {
    /// Key length in bytes.
    pub fn byte_len(self) -> usize {
        match self {
            SivKeySize::Bits256 => 32,
            SivKeySize::Bits384 => 48,
            SivKeySize::Bits512 => 64,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum SivKeyBytes {
    K256([u8; 32]),
    K384([u8; 48]),
    K512([u8; 64]),
}

/// Contains a valid AES-SIV key. Can be instantiated with a random key, or built from a slice
/// of bytes that is 32, 48, or 64 bytes long.
///
/// The first half of the key (`K1`) keys S2V/CMAC, the second half (`K2`) keys counter mode.
///
/// ## Examples
/// ```
/// # fn main() -> aes_siv::Result<()> {
/// use aes_siv::{SivKey, SivKeySize};
///
/// let random = SivKey::random(SivKeySize::Bits512)?;
/// assert_eq!(random.as_bytes().len(), 64);
///
/// let key_bytes = [0x42u8; 48];
/// let key = SivKey::try_from_slice(&key_bytes)?;
/// let (mac_key, ctr_key) = key.split();
/// assert_eq!(mac_key.as_bytes(), &key_bytes[..24]);
/// assert_eq!(ctr_key.as_bytes(), &key_bytes[24..]);
///
/// // anything other than 32, 48, or 64 bytes is rejected
/// assert!(SivKey::try_from_slice(&key_bytes[..16]).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SivKey {
    bytes: SivKeyBytes,
}

impl SivKey {
    /// Generate a random key of the given size. Returns Error if OsRng fails.
    pub fn random(size: SivKeySize) -> Result<Self> {
        let bytes = match size {
            SivKeySize::Bits256 => SivKeyBytes::K256(random_array()?),
            SivKeySize::Bits384 => SivKeyBytes::K384(random_array()?),
            SivKeySize::Bits512 => SivKeyBytes::K512(random_array()?),
        };
        Ok(Self { bytes })
    }

    /// Attempts to build a key from a slice of bytes. Will return an InvalidKeySize error
    /// if the input slice is anything other than 32, 48, or 64 bytes long (including empty).
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes = match bytes.len() {
            32 => SivKeyBytes::K256(to_array(bytes)),
            48 => SivKeyBytes::K384(to_array(bytes)),
            64 => SivKeyBytes::K512(to_array(bytes)),
            _ => return Err(Error::InvalidKeySize { len: bytes.len() }),
        };
        Ok(Self { bytes })
    }

    /// Returns a reference to the internal key as an array of bytes.
    pub fn as_bytes(&self) -> &[u8] {
        match &self.bytes {
            SivKeyBytes::K256(k) => k,
            SivKeyBytes::K384(k) => k,
            SivKeyBytes::K512(k) => k,
        }
    }

    pub fn size(&self) -> SivKeySize {
        match self.bytes {
            SivKeyBytes::K256(_) => SivKeySize::Bits256,
            SivKeyBytes::K384(_) => SivKeySize::Bits384,
            SivKeyBytes::K512(_) => SivKeySize::Bits512,
        }
    }

    /// Splits the key in half, returning `(K1, K2)`: the S2V key and the CTR key.
    pub fn split(&self) -> (Key, Key) {
        let half = |k: KeyBytes| Key { bytes: k };
        match &self.bytes {
            SivKeyBytes::K256(k) => (
                half(KeyBytes::K128(to_array(&k[..16]))),
                half(KeyBytes::K128(to_array(&k[16..]))),
            ),
            SivKeyBytes::K384(k) => (
                half(KeyBytes::K192(to_array(&k[..24]))),
                half(KeyBytes::K192(to_array(&k[24..]))),
            ),
            SivKeyBytes::K512(k) => (
                half(KeyBytes::K256(to_array(&k[..32]))),
                half(KeyBytes::K256(to_array(&k[32..]))),
            ),
        }
    }
}

// callers match on length first, so copy_from_slice cannot panic
fn to_array<const N: usize>(bytes: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(bytes);
    out
}

fn random_array<const N: usize>() -> Result<[u8; N]> {
    let mut k = [0u8; N];
    OsRng.try_fill_bytes(&mut k)?;
    Ok(k)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aes_key_sizes() {
        for len in [16, 24, 32] {
            let bytes = vec![0xA5u8; len];
            let key = Key::try_from_slice(&bytes).expect("valid AES key length");
            assert_eq!(key.as_bytes(), bytes.as_slice());
        }

        for len in [0, 15, 17, 31, 33, 64] {
            let err = Key::try_from_slice(&vec![0u8; len]).unwrap_err();
            assert!(matches!(err, Error::InvalidKeyLength { len: l } if l == len));
        }
    }

    #[test]
    fn siv_key_rejects_bad_sizes() {
        for len in [0, 16, 24, 31, 33, 47, 49, 63, 65, 128] {
            let err = SivKey::try_from_slice(&vec![0u8; len]).unwrap_err();
            assert!(matches!(err, Error::InvalidKeySize { len: l } if l == len));
        }
    }

    #[test]
    fn siv_key_split_halves() -> Result<()> {
        let bytes: Vec<u8> = (0u8..64).collect();

        for (len, size) in [
            (32, SivKeySize::Bits256),
            (48, SivKeySize::Bits384),
            (64, SivKeySize::Bits512),
        ] {
            let key = SivKey::try_from_slice(&bytes[..len])?;
            assert_eq!(key.size(), size);
            assert_eq!(size.byte_len(), len);

            let (k1, k2) = key.split();
            assert_eq!(k1.as_bytes(), &bytes[..len / 2]);
            assert_eq!(k2.as_bytes(), &bytes[len / 2..len]);
        }
        Ok(())
    }

    #[test]
    fn random_keys_differ() -> Result<()> {
        let a = SivKey::random(SivKeySize::Bits256)?;
        let b = SivKey::random(SivKeySize::Bits256)?;
        assert_eq!(a.as_bytes().len(), 32);
        assert_ne!(a, b);
        assert_eq!(SivKey::random(SivKeySize::Bits384)?.size(), SivKeySize::Bits384);
        assert_eq!(SivKey::random(SivKeySize::Bits512)?.as_bytes().len(), 64);
        Ok(())
    }
}
