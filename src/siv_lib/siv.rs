use rand::RngCore;

use crate::siv_lib::cipher::{Aes, BlockCipher};
use crate::siv_lib::error::{Error, Result};
use crate::siv_lib::key::SivKey;
use crate::siv_lib::modes::{Cmac, ctr_encrypt, s2v};

/// Maximum number of associated data components. S2V takes at most 127 vectors, and the
/// plaintext always occupies one of them.
pub const MAX_ASSOCIATED_DATA: usize = 126;

/// Length of the synthetic IV prepended to every ciphertext.
pub const TAG_SIZE: usize = 16;

/// **AES-SIV** (RFC 5297) deterministic authenticated encryption.
///
/// Instantiated with a [SivKey]. The first half of the key is expanded into a CMAC engine used
/// by S2V to synthesise the IV, the second half into the block cipher used by counter mode.
/// Only immutable key material is stored, so one instance can be shared between threads.
///
/// Output is formatted as `V (16 bytes) || Ciphertext`, always `16 + plaintext.len()` bytes.
///
/// ## Examples
/// ```
/// # fn main() -> aes_siv::Result<()> {
/// use aes_siv::{Siv, SivKey, SivKeySize};
///
/// let key = SivKey::random(SivKeySize::Bits256)?;
/// let siv: Siv = Siv::new(&key);
///
/// let header: &[u8] = b"record 42";
/// let a = siv.encrypt(b"Hello, World!", &[header])?;
/// let b = siv.encrypt(b"Hello, World!", &[header])?;
///
/// // same key, plaintext, and associated data: same ciphertext
/// assert_eq!(a, b);
/// assert_eq!(a.len(), 16 + 13);
/// # Ok(())
/// # }
/// ```
pub struct Siv<C: BlockCipher = Aes> {
    mac: Cmac<C>,
    ctr: C,
}

impl<C: BlockCipher> Siv<C> {
    /// Splits the key and prepares both block ciphers.
    pub fn new(key: &SivKey) -> Self {
        let (k1, k2) = key.split();
        Self {
            mac: Cmac::new(C::new(&k1)),
            ctr: C::new(&k2),
        }
    }

    /// Encrypts `plaintext`, authenticating it together with each `associated` component in order.
    ///
    /// Returns a [TooMuchAssociatedData](crate::Error::TooMuchAssociatedData) error if more than
    /// [MAX_ASSOCIATED_DATA] components are given. Inputs are only read.
    pub fn encrypt(&self, plaintext: &[u8], associated: &[&[u8]]) -> Result<Vec<u8>> {
        if associated.len() > MAX_ASSOCIATED_DATA {
            return Err(Error::TooMuchAssociatedData {
                count: associated.len(),
                max: MAX_ASSOCIATED_DATA,
            });
        }

        let mut vectors: Vec<&[u8]> = Vec::with_capacity(associated.len() + 1);
        vectors.extend_from_slice(associated);
        vectors.push(plaintext);

        let v = s2v(&self.mac, &vectors);

        let mut out = Vec::with_capacity(TAG_SIZE + plaintext.len());
        out.extend_from_slice(&v);
        out.append(&mut ctr_encrypt(&self.ctr, &v, plaintext));
        Ok(out)
    }
}

/// One-shot **AES-SIV** encryption with the bundled AES implementation.
///
/// `key` must be 32, 48, or 64 bytes, otherwise an
/// [InvalidKeySize](crate::Error::InvalidKeySize) error is returned. The key size is checked
/// before the associated data count, and both before any cryptographic work.
///
/// `rng` exists so randomised variants can share this signature. SIV is deterministic and never
/// reads from it; `None` and `Some` give identical output.
///
/// ## Examples
/// ```
/// # fn main() -> aes_siv::Result<()> {
/// let key = [0x24u8; 32];
/// let ad: &[u8] = b"associated";
///
/// let ciphertext = aes_siv::encrypt(None, &key, b"plaintext", &[ad])?;
/// assert_eq!(ciphertext.len(), 16 + 9);
///
/// assert!(aes_siv::encrypt(None, &key[..16], b"plaintext", &[ad]).is_err());
/// # Ok(())
/// # }
/// ```
pub fn encrypt(
    _rng: Option<&mut dyn RngCore>,
    key: &[u8],
    plaintext: &[u8],
    associated: &[&[u8]],
) -> Result<Vec<u8>> {
    let key = SivKey::try_from_slice(key)?;
    if associated.len() > MAX_ASSOCIATED_DATA {
        return Err(Error::TooMuchAssociatedData {
            count: associated.len(),
            max: MAX_ASSOCIATED_DATA,
        });
    }

    Siv::<Aes>::new(&key).encrypt(plaintext, associated)
}
