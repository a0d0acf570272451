//! Checksum demo: build a message, corrupt a copy, watch the checksum move.
//!
//! Run with: `cargo run --example checksum_demo --features test-util`

use growbuf::testutil::corrupt;
use growbuf::ByteBuf;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    let mut rng = StdRng::from_entropy();

    let mut msg = ByteBuf::from_bytes(b"Hello world");
    msg.push_bytes(b", this is a test of the thingy.");

    println!("BEFORE:");
    println!("  MESSAGE: {msg}");
    println!("  CHECKSUM: {}", msg.checksum());

    let corrupted = corrupt(&msg, 10, &mut rng);
    println!("AFTER:");
    println!("  MESSAGE: {corrupted}");
    println!("  CHECKSUM: {}", corrupted.checksum());
}
