// R_128 from NIST SP 800-38B: x^128 = x^7 + x^2 + x + 1
const RB: u128 = 0x87;

/// Doubling in GF(2^128): multiply `block` by `x`, most significant byte first.
///
/// Shift left by one bit, and if the bit shifted out was set, reduce by XORing `0x87` into the
/// last byte. The reduction is applied through a mask rather than a branch on the carry bit.
#[inline(always)]
pub fn dbl(block: &[u8; 16]) -> [u8; 16] {
    let v = u128::from_be_bytes(*block);
    let carry = v >> 127;
    ((v << 1) ^ (RB & 0u128.wrapping_sub(carry))).to_be_bytes()
}
