use crate::siv_lib::cipher::BlockCipher;
use crate::siv_lib::modes::dbl::dbl;
use crate::siv_lib::modes::util::{pad_block, xor_blocks};

/*
https://nvlpubs.nist.gov/nistpubs/SpecialPublications/NIST.SP.800-38b.pdf

L  = block of 0s encrypted with key
K1 = dbl(L), K2 = dbl(K1)

split message into 16-byte blocks M_1..M_n (empty message is one empty block)
if M_n is a complete block: M_n = M_n ^ K1
else:                       M_n = pad(M_n) ^ K2

CBC-MAC with zero IV: x = E(x ^ M_i) for each block, tag = final x
*/
/// AES-CMAC engine. Holds the block cipher and both subkeys, so a single instance can MAC any
/// number of messages under the same key.
pub struct Cmac<C> {
    cipher: C,
    k1: [u8; 16],
    k2: [u8; 16],
}

impl<C: BlockCipher> Cmac<C> {
    /// Derives the CMAC subkeys for `cipher`.
    pub fn new(cipher: C) -> Self {
        let l = cipher.encrypt_block(&[0u8; 16]);
        let k1 = dbl(&l);
        let k2 = dbl(&k1);
        Self { cipher, k1, k2 }
    }

    /// Computes the 16-byte CMAC of `message`.
    pub fn mac(&self, message: &[u8]) -> [u8; 16] {
        // the final block is always handled separately, even when the message is empty
        let num_blocks = message.len().div_ceil(16).max(1);
        let (head, last) = message.split_at((num_blocks - 1) * 16);

        let mut x = [0u8; 16];
        for block in head.chunks_exact(16) {
            let mut m = [0u8; 16];
            m.copy_from_slice(block);
            x = self.cipher.encrypt_block(&xor_blocks(&x, &m));
        }

        // length is public, so selecting the subkey on it leaks nothing secret
        let last = match <&[u8; 16]>::try_from(last) {
            Ok(complete) => xor_blocks(complete, &self.k1),
            Err(_) => xor_blocks(&pad_block(last), &self.k2),
        };

        self.cipher.encrypt_block(&xor_blocks(&x, &last))
    }
}

#[cfg(test)]
mod test_cmac {
    use super::*;
    use crate::siv_lib::cipher::Aes;
    use crate::siv_lib::error::Result;
    use crate::siv_lib::key::Key;
    use crate::siv_lib::modes::test_util::{CMAC_KEY, CMAC_MESSAGE, hex_to_arr_16, hex_to_bytes};

    fn rfc4493_cmac() -> Result<Cmac<Aes>> {
        let key = Key::try_from_slice(&hex_to_bytes(CMAC_KEY))?;
        Ok(Cmac::new(Aes::new(&key)))
    }

    // all test vectors from https://www.rfc-editor.org/rfc/rfc4493#section-4

    #[test]
    fn subkeys() -> Result<()> {
        let cmac = rfc4493_cmac()?;
        assert_eq!(cmac.k1, hex_to_arr_16("fbeed618 35713366 7c85e08f 7236a8de"));
        assert_eq!(cmac.k2, hex_to_arr_16("f7ddac30 6ae266cc f90bc11e e46d513b"));
        Ok(())
    }

    #[test]
    fn empty_message() -> Result<()> {
        let tag = rfc4493_cmac()?.mac(&[]);
        assert_eq!(tag, hex_to_arr_16("bb1d6929 e9593728 7fa37d12 9b756746"));
        Ok(())
    }

    #[test]
    fn one_complete_block() -> Result<()> {
        let message = hex_to_bytes(CMAC_MESSAGE);
        let tag = rfc4493_cmac()?.mac(&message[..16]);
        assert_eq!(tag, hex_to_arr_16("070a16b4 6b4d4144 f79bdd9d d04a287c"));
        Ok(())
    }

    #[test]
    fn partial_final_block() -> Result<()> {
        let message = hex_to_bytes(CMAC_MESSAGE);
        let tag = rfc4493_cmac()?.mac(&message[..40]);
        assert_eq!(tag, hex_to_arr_16("dfa66747 de9ae630 30ca3261 1497c827"));
        Ok(())
    }

    #[test]
    fn four_complete_blocks() -> Result<()> {
        let message = hex_to_bytes(CMAC_MESSAGE);
        let tag = rfc4493_cmac()?.mac(&message);
        assert_eq!(tag, hex_to_arr_16("51f0bebf 7e3b9d92 fc497417 79363cfe"));
        Ok(())
    }

    #[test]
    fn s2v_inputs_from_rfc5297() -> Result<()> {
        // RFC 5297 A.1 intermediate values: CMAC(K1, <zero>) and CMAC(K1, AD)
        let key = Key::try_from_slice(&hex_to_bytes(
            "fffefdfc fbfaf9f8 f7f6f5f4 f3f2f1f0",
        ))?;
        let cmac = Cmac::new(Aes::new(&key));

        assert_eq!(
            cmac.mac(&[0u8; 16]),
            hex_to_arr_16("0e04dfaf c1efbf04 01405828 59bf073a")
        );

        let ad = hex_to_bytes("10111213 14151617 18191a1b 1c1d1e1f 20212223 24252627");
        assert_eq!(
            cmac.mac(&ad),
            hex_to_arr_16("f1f922b7 f5193ce6 4ff80cb4 7d93f23b")
        );
        Ok(())
    }
}
