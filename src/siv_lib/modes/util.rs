pub const PARALLEL_THRESHOLD: usize = 4 * 1024; // generate keystream in parallel if input size gt 4 KiB

#[inline(always)]
pub(crate) fn xor_blocks(a: &[u8; 16], b: &[u8; 16]) -> [u8; 16] {
    std::array::from_fn(|i| a[i] ^ b[i])
}

/// XOR a chunk of up to 16 bytes into the front of `y`.
#[inline(always)]
pub(crate) fn xor_chunks(y: &[u8; 16], chunk: &[u8]) -> [u8; 16] {
    let mut out: [u8; 16] = *y;
    for (o, c) in out.iter_mut().zip(chunk) {
        *o ^= c;
    }
    out
}

/// ISO/IEC 7816-4 padding of a partial block: append a single `0x80` byte, then zeros.
/// `partial` must be shorter than 16 bytes.
#[inline(always)]
pub(crate) fn pad_block(partial: &[u8]) -> [u8; 16] {
    let mut out = [0u8; 16];
    out[..partial.len()].copy_from_slice(partial);
    out[partial.len()] = 0x80;
    out
}
