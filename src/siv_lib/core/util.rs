#[inline(always)]
pub(crate) fn add_round_key(state: &mut [u8; 16], round_key: &[u8; 16]) {
    for (s, k) in state.iter_mut().zip(round_key) {
        *s ^= k;
    }
}

/// Multiply by x in GF(2^8) with the AES polynomial (xtime in FIPS-197).
// adapted from https://crypto.stackexchange.com/a/71206
#[inline(always)]
pub(crate) fn xtime(a: u8) -> u8 {
    (a << 1) ^ (0x1B & (0u8).wrapping_sub((a >> 7) & 1))
}
