//! Buffer module: the growable byte buffer and its capacity policy.
//!
//! This module contains:
//! - [`ByteBuf`]: an owned, contiguous byte sequence with an amortized
//!   doubling growth strategy
//! - the capacity policy (private): the power-of-two rule shared by every
//!   append path

mod byte_buf;
mod capacity;

pub use byte_buf::ByteBuf;
