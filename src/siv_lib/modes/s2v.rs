use crate::siv_lib::cipher::BlockCipher;
use crate::siv_lib::modes::cmac::Cmac;
use crate::siv_lib::modes::dbl::dbl;
use crate::siv_lib::modes::util::{pad_block, xor_blocks};

/// 0^127 || 1
const ONE: [u8; 16] = {
    let mut one = [0u8; 16];
    one[15] = 1;
    one
};

/*
https://www.rfc-editor.org/rfc/rfc5297#section-2.4

D = CMAC(K, <zero>)
for S_1..S_n-1:
    D = dbl(D) ^ CMAC(K, S_i)
if len(S_n) >= 16:
    T = S_n xorend D
else:
    T = dbl(D) ^ pad(S_n)
V = CMAC(K, T)
*/
/// String-to-vector PRF. Folds `vectors` (associated data components in order, then the
/// plaintext) into the 16-byte synthetic IV using the CMAC engine keyed with `K1`.
///
/// With no vectors at all the result is `CMAC(K1, <one>)`. [encrypt](crate::encrypt) always
/// passes the plaintext, so it never takes that path.
pub fn s2v<C: BlockCipher>(cmac: &Cmac<C>, vectors: &[&[u8]]) -> [u8; 16] {
    let Some((last, rest)) = vectors.split_last() else {
        return cmac.mac(&ONE);
    };

    let mut d = cmac.mac(&[0u8; 16]);
    for vector in rest {
        d = xor_blocks(&dbl(&d), &cmac.mac(vector));
    }

    if last.len() >= 16 {
        // xorend: only the final 16 bytes absorb D
        let mut t = last.to_vec();
        let tail = t.len() - 16;
        for (b, k) in t[tail..].iter_mut().zip(&d) {
            *b ^= k;
        }
        cmac.mac(&t)
    } else {
        let t = xor_blocks(&dbl(&d), &pad_block(last));
        cmac.mac(&t)
    }
}
