//! # Growbuf
//!
//! A growable byte buffer with explicit power-of-two capacity management.
//!
//! Growbuf is a single-purpose data structure crate: an owned, contiguous
//! byte sequence that grows by doubling, with the capacity kept observable
//! and always a power of two.
//!
//! ## Core Concepts
//!
//! - **Power-of-two capacity**: every growth path lands on the smallest
//!   power of two that fits, enforced in one reserve primitive
//! - **Explicit lifecycle**: buffers are live until released; release is
//!   idempotent and observable (capacity drops to zero)
//! - **Cheap integrity check**: an XOR-fold checksum over the content bytes
//! - **Deterministic corruption fixture**: a feature-gated helper that flips
//!   a bounded number of random bits for checksum-mismatch testing
//!
//! ## Example
//!
//! ```rust
//! use growbuf::ByteBuf;
//!
//! let mut buf = ByteBuf::from_bytes(b"hello");
//! assert_eq!(buf.capacity(), 8);
//!
//! buf.push(b'!');
//! assert_eq!(buf.as_bytes(), b"hello!");
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod buffer;
pub mod checksum;
#[cfg(feature = "test-util")]
pub mod testutil;

// Re-exports for convenience
pub use buffer::ByteBuf;
pub use checksum::xor_fold;
