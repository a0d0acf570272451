//! Test fixtures for checksum-mismatch verification.
//!
//! Only [`corrupt`] lives here. It is deliberately kept off the core
//! buffer surface (behind the `test-util` feature): production code has no
//! reason to flip random bits, but tests and demos need a copy of a buffer
//! with a known, bounded number of altered bits.

use crate::buffer::ByteBuf;
use rand::Rng;
use std::collections::HashSet;

/// Random draws allowed per requested flip before sampling falls back to a
/// deterministic scan. Keeps termination guaranteed even for a degenerate
/// random source.
const ATTEMPTS_PER_BIT: usize = 64;

/// Copy `buf` and flip `bits` distinct bit positions in the copy.
///
/// Positions are drawn uniformly without replacement from the buffer's
/// `len * 8` content bits, rejecting and redrawing on collision. `bits`
/// clamps to `len * 8`, so an empty buffer yields a plain copy. The source
/// is never touched.
///
/// The random source is an explicit parameter: seed it for reproducible
/// corruption in tests.
pub fn corrupt<R: Rng + ?Sized>(buf: &ByteBuf, bits: usize, rng: &mut R) -> ByteBuf {
    let mut copy = buf.clone();
    let total_bits = copy.len() * 8;
    let bits = bits.min(total_bits);
    if bits == 0 {
        return copy;
    }

    let mut visited: HashSet<usize> = HashSet::with_capacity(bits);
    let budget = bits.saturating_mul(ATTEMPTS_PER_BIT);

    for _ in 0..budget {
        if visited.len() == bits {
            break;
        }
        let pos = rng.gen_range(0..total_bits);
        if visited.insert(pos) {
            flip_bit(&mut copy, pos);
        }
    }

    // The draw budget ran out before every flip landed; finish with the
    // first unvisited positions so the flip count stays exact.
    if visited.len() < bits {
        for pos in 0..total_bits {
            if visited.len() == bits {
                break;
            }
            if visited.insert(pos) {
                flip_bit(&mut copy, pos);
            }
        }
    }

    copy
}

fn flip_bit(buf: &mut ByteBuf, pos: usize) {
    buf.as_mut_bytes()[pos / 8] ^= 1 << (pos % 8);
}
