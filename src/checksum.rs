//! XOR-fold checksum: a cheap corruption detector.
//!
//! The checksum is the running exclusive-or of every content byte, folded
//! left to right from an accumulator of zero. It detects any change that
//! leaves an odd total parity in some bit position; in particular a single
//! flipped bit always changes it. It is not cryptographic and offers no
//! error correction.

use crate::buffer::ByteBuf;

/// XOR every byte of `bytes` together, left to right, starting from zero.
///
/// A pure function of the content: capacity, construction path, and
/// storage layout never influence the result. The fold of an empty slice
/// is zero.
#[inline]
pub fn xor_fold(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0, |acc, &b| acc ^ b)
}

impl ByteBuf {
    /// The XOR-fold checksum of the buffer's content.
    #[inline]
    pub fn checksum(&self) -> u8 {
        xor_fold(self.as_bytes())
    }
}
