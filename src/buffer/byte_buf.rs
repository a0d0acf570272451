//! `ByteBuf`: an owned, growable, contiguous byte sequence.
//!
//! Storage is a single contiguous allocation whose size (the capacity) is
//! always a power of two while the buffer is live. Growth preserves content
//! and reallocates, so borrowed views into the buffer do not survive an
//! append; the buffer value itself is the stable handle.

use super::capacity::{pow2_at_least, MIN_CAPACITY};
use std::fmt;

/// An owned, growable byte buffer with power-of-two capacity.
///
/// The first `len` bytes of storage are content; the tail in
/// `[len, capacity)` is kept zeroed and is never observable through the
/// read API.
///
/// # Lifecycle
///
/// A buffer is live from construction until [`release`](Self::release)
/// (or drop). Release is idempotent and leaves the buffer in an observable
/// empty state with zero capacity; appending afterwards re-grows it from
/// scratch.
///
/// # Concurrency
///
/// There is no internal synchronization, and growth reallocates storage.
/// Concurrent use requires external serialization by the caller.
#[derive(Clone)]
pub struct ByteBuf {
    /// Allocated storage. Its length is the buffer's capacity.
    storage: Box<[u8]>,
    /// Count of logically valid bytes at the front of `storage`.
    len: usize,
}

impl ByteBuf {
    /// Capacity of a freshly constructed empty buffer.
    pub const MIN_CAPACITY: usize = MIN_CAPACITY;

    /// Create an empty buffer with the minimum capacity.
    pub fn new() -> Self {
        Self {
            storage: vec![0; MIN_CAPACITY].into_boxed_slice(),
            len: 0,
        }
    }

    /// Create a buffer holding a copy of `bytes`.
    ///
    /// Capacity is the smallest power of two that fits the input, so a
    /// power-of-two-sized input is stored with zero slack.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut storage = vec![0; pow2_at_least(bytes.len())].into_boxed_slice();
        storage[..bytes.len()].copy_from_slice(bytes);
        Self {
            storage,
            len: bytes.len(),
        }
    }

    /// Get the number of content bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Check if the buffer holds no content.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get the allocated capacity in bytes.
    ///
    /// A power of two while the buffer is live, zero after
    /// [`release`](Self::release).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Get the content as a slice.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.storage[..self.len]
    }

    /// Get the content as a mutable slice.
    ///
    /// Mutation through the slice cannot change the length or capacity.
    #[inline]
    pub fn as_mut_bytes(&mut self) -> &mut [u8] {
        &mut self.storage[..self.len]
    }

    /// Get the byte at `idx`, or `None` if `idx` is at or past the length.
    ///
    /// Never mutates, never reallocates. An out-of-range index is a defined
    /// absent result, not an error.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<u8> {
        self.as_bytes().get(idx).copied()
    }

    /// Grow storage so that at least `required` bytes fit.
    ///
    /// The new capacity is the smallest power of two >= `required`.
    /// Content is preserved; the zeroed tail stays zeroed. A no-op when the
    /// current capacity already suffices, so repeated appends are amortized
    /// doubling.
    ///
    /// # Panics
    /// Panics if `required` overflows the largest representable power of
    /// two.
    pub fn reserve_at_least(&mut self, required: usize) {
        if required <= self.capacity() {
            return;
        }
        let mut grown = vec![0; pow2_at_least(required)].into_boxed_slice();
        grown[..self.len].copy_from_slice(&self.storage[..self.len]);
        self.storage = grown;
    }

    /// Append a single byte, growing if needed.
    pub fn push(&mut self, byte: u8) {
        self.reserve_at_least(self.len + 1);
        self.storage[self.len] = byte;
        self.len += 1;
    }

    /// Append a byte slice, growing if needed.
    ///
    /// After the call the buffer holds its previous content immediately
    /// followed by `src`.
    pub fn push_bytes(&mut self, src: &[u8]) {
        let newlen = self.len + src.len();
        self.reserve_at_least(newlen);
        self.storage[self.len..newlen].copy_from_slice(src);
        self.len = newlen;
    }

    /// Append another buffer's content. `src` is unaffected.
    pub fn extend_from_buf(&mut self, src: &Self) {
        self.push_bytes(src.as_bytes());
    }

    /// Drop the storage and reset to the released state.
    ///
    /// Length and capacity become zero. Idempotent: releasing an already
    /// released buffer is a no-op. Appending afterwards re-grows the buffer
    /// from scratch.
    pub fn release(&mut self) {
        self.storage = Box::default();
        self.len = 0;
    }
}

impl Default for ByteBuf {
    fn default() -> Self {
        Self::new()
    }
}

/// Content-only equality: capacity and construction path are ignored.
impl PartialEq for ByteBuf {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for ByteBuf {}

impl fmt::Display for ByteBuf {
    /// Render the content bytes as text, lossily where not UTF-8.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.as_bytes()))
    }
}

impl fmt::Debug for ByteBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteBuf")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_minimum_capacity() {
        let buf = ByteBuf::new();
        assert_eq!(buf.len(), 0);
        assert_eq!(buf.capacity(), ByteBuf::MIN_CAPACITY);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_new_storage_is_zeroed() {
        let buf = ByteBuf::new();
        assert!(buf.storage.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_from_bytes_round_trip() {
        let buf = ByteBuf::from_bytes(b"hello");
        assert_eq!(buf.as_bytes(), b"hello");
        assert_eq!(buf.len(), 5);
        assert_eq!(buf.capacity(), 8);
    }

    #[test]
    fn test_from_bytes_zero_slack() {
        // Power-of-two input stores with capacity == length.
        let buf = ByteBuf::from_bytes(b"12345678");
        assert_eq!(buf.len(), 8);
        assert_eq!(buf.capacity(), 8);
    }

    #[test]
    fn test_from_bytes_empty() {
        let buf = ByteBuf::from_bytes(b"");
        assert_eq!(buf.len(), 0);
        assert_eq!(buf.capacity(), 1);
    }

    #[test]
    fn test_push_grows_by_doubling() {
        let mut buf = ByteBuf::new();
        for i in 0..100u8 {
            buf.push(i);
            assert!(buf.capacity().is_power_of_two());
            assert!(buf.capacity() >= buf.len());
        }
        assert_eq!(buf.len(), 100);
        assert_eq!(buf.capacity(), 128);
        let expected: Vec<u8> = (0..100).collect();
        assert_eq!(buf.as_bytes(), expected.as_slice());
    }

    #[test]
    fn test_push_bytes_preserves_content() {
        let mut buf = ByteBuf::from_bytes(b"abc");
        buf.push_bytes(b"defgh");
        assert_eq!(buf.as_bytes(), b"abcdefgh");
        assert_eq!(buf.capacity(), 8);

        // One more byte crosses the boundary.
        buf.push(b'i');
        assert_eq!(buf.as_bytes(), b"abcdefghi");
        assert_eq!(buf.capacity(), 16);
    }

    #[test]
    fn test_push_bytes_empty_is_noop() {
        let mut buf = ByteBuf::from_bytes(b"abc");
        buf.push_bytes(b"");
        assert_eq!(buf.as_bytes(), b"abc");
        assert_eq!(buf.capacity(), 4);
    }

    #[test]
    fn test_growth_invariant_across_append_sequences() {
        let mut buf = ByteBuf::new();
        let chunks: [&[u8]; 5] = [b"a", b"bcdefg", b"", b"hijklmnopqrstuvwxyz", b"0123"];
        for chunk in chunks {
            buf.push_bytes(chunk);
            assert!(buf.capacity().is_power_of_two());
            assert!(buf.capacity() >= buf.len());
        }
        assert_eq!(buf.as_bytes(), b"abcdefghijklmnopqrstuvwxyz0123");
    }

    #[test]
    fn test_extend_from_buf() {
        let mut dst = ByteBuf::from_bytes(b"hello ");
        let src = ByteBuf::from_bytes(b"world");
        dst.extend_from_buf(&src);
        assert_eq!(dst.as_bytes(), b"hello world");
        // Source unaffected.
        assert_eq!(src.as_bytes(), b"world");
        assert_eq!(src.capacity(), 8);
    }

    #[test]
    fn test_get_in_and_out_of_range() {
        let buf = ByteBuf::from_bytes(b"xyz");
        assert_eq!(buf.get(0), Some(b'x'));
        assert_eq!(buf.get(2), Some(b'z'));
        assert_eq!(buf.get(3), None);
        // Indices below capacity but past the length are absent too.
        assert!(buf.capacity() > 3);
        assert_eq!(buf.get(buf.capacity() - 1), None);
    }

    #[test]
    fn test_clone_preserves_capacity_and_is_independent() {
        let src = ByteBuf::from_bytes(b"abc");
        let mut copy = src.clone();
        assert_eq!(copy.as_bytes(), src.as_bytes());
        assert_eq!(copy.capacity(), src.capacity());

        copy.push_bytes(b"defgh");
        assert_eq!(src.as_bytes(), b"abc");
        assert_eq!(src.capacity(), 4);
        assert_eq!(copy.as_bytes(), b"abcdefgh");
    }

    #[test]
    fn test_as_mut_bytes_cannot_reach_slack() {
        let mut buf = ByteBuf::from_bytes(b"ab");
        assert_eq!(buf.as_mut_bytes().len(), 2);
        buf.as_mut_bytes()[0] = b'z';
        assert_eq!(buf.as_bytes(), b"zb");
        assert_eq!(buf.capacity(), 2);
    }

    #[test]
    fn test_release_is_idempotent() {
        let mut buf = ByteBuf::from_bytes(b"hello");
        buf.release();
        assert_eq!(buf.len(), 0);
        assert_eq!(buf.capacity(), 0);

        buf.release();
        assert_eq!(buf.len(), 0);
        assert_eq!(buf.capacity(), 0);
    }

    #[test]
    fn test_append_after_release_regrows() {
        let mut buf = ByteBuf::from_bytes(b"hello");
        buf.release();
        buf.push_bytes(b"ab");
        assert_eq!(buf.as_bytes(), b"ab");
        assert_eq!(buf.capacity(), 2);
    }

    #[test]
    fn test_reserve_at_least_is_noop_when_fitting() {
        let mut buf = ByteBuf::from_bytes(b"abc");
        buf.reserve_at_least(4);
        assert_eq!(buf.capacity(), 4);
        buf.reserve_at_least(5);
        assert_eq!(buf.capacity(), 8);
        assert_eq!(buf.as_bytes(), b"abc");
    }

    #[test]
    fn test_eq_ignores_capacity() {
        let a = ByteBuf::from_bytes(b"abc");
        let mut b = ByteBuf::new();
        b.push_bytes(b"abc");
        b.reserve_at_least(64);
        assert_eq!(a, b);
        assert_ne!(a.capacity(), b.capacity());
    }

    #[test]
    fn test_display_renders_content() {
        let buf = ByteBuf::from_bytes(b"hello world");
        assert_eq!(format!("MESSAGE: {buf}"), "MESSAGE: hello world");
    }

    #[test]
    fn test_debug_summarizes() {
        let buf = ByteBuf::from_bytes(b"hello");
        let dbg = format!("{buf:?}");
        assert!(dbg.contains("len: 5"));
        assert!(dbg.contains("capacity: 8"));
    }
}
