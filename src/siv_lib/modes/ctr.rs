use rayon::prelude::*;

use crate::siv_lib::cipher::BlockCipher;
use crate::siv_lib::modes::util::{PARALLEL_THRESHOLD, xor_chunks};

/// Derives the initial counter block `Q` from the synthetic IV `V`.
///
/// Bits 63 and 31 (the top bits of bytes 8 and 12) are cleared so that an implementation
/// using 64-bit or 32-bit counter arithmetic never carries into the IV's upper half.
#[inline(always)]
pub fn counter_block(v: &[u8; 16]) -> [u8; 16] {
    let mut q = *v;
    q[8] &= 0x7f;
    q[12] &= 0x7f;
    q
}

#[inline(always)]
fn nth_block(q: u128, i: usize) -> [u8; 16] {
    q.wrapping_add(i as u128).to_be_bytes()
}

/// SIV counter mode. Encrypts (or, being symmetric, decrypts) `input` under `cipher`, starting
/// from the counter block derived from `v`. Large inputs generate their keystream in parallel.
pub fn ctr_encrypt<C: BlockCipher>(cipher: &C, v: &[u8; 16], input: &[u8]) -> Vec<u8> {
    let q = counter_block(v);
    if input.len() > PARALLEL_THRESHOLD {
        ctr_core_parallel(input, cipher, &q)
    } else {
        ctr_core_serial(input, cipher, &q)
    }
}

/// Core counter mode algorithm, one block per rayon task. `q` is used as-is.
pub fn ctr_core_parallel<C: BlockCipher>(input: &[u8], cipher: &C, q: &[u8; 16]) -> Vec<u8> {
    let q = u128::from_be_bytes(*q);
    let mut output = vec![0u8; input.len()];

    output
        .par_chunks_mut(16)
        .zip(input.par_chunks(16))
        .enumerate()
        .for_each(|(i, (out_chunk, in_chunk))| {
            let keystream = cipher.encrypt_block(&nth_block(q, i));
            for ((o, k), p) in out_chunk.iter_mut().zip(&keystream).zip(in_chunk) {
                *o = k ^ p;
            }
        });

    output
}

/// Core counter mode algorithm, serial. `q` is used as-is.
pub fn ctr_core_serial<C: BlockCipher>(input: &[u8], cipher: &C, q: &[u8; 16]) -> Vec<u8> {
    let q = u128::from_be_bytes(*q);
    let mut output = Vec::with_capacity(input.len());

    for (i, chunk) in input.chunks(16).enumerate() {
        let keystream = cipher.encrypt_block(&nth_block(q, i));
        let ct = xor_chunks(&keystream, chunk);
        output.extend_from_slice(&ct[..chunk.len()]);
    }

    output
}
