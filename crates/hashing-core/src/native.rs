//! Native hash codes derived from `std::hash::Hash`.

use siphasher::sip::SipHasher13;
use std::hash::{Hash, Hasher};

/// Computes the native 32-bit hash code of `value`.
///
/// The value is fed through its `Hash` implementation into SipHash-1-3 keyed
/// with fixed zero keys, and the 64-bit digest is folded with [`fold_digest`].
/// Integers are written little-endian and `usize`/`isize` (including the
/// length prefixes of slices and collections) are widened to 64 bits, so the
/// result is the same on every target for the same `Hash` implementation.
pub fn native_hash<T: Hash + ?Sized>(value: &T) -> i32 {
    let mut hasher = StableHasher::new();
    value.hash(&mut hasher);
    fold_digest(hasher.finish())
}

/// Folds a 64-bit digest into a 32-bit hash code by xoring its halves.
pub fn fold_digest(digest: u64) -> i32 {
    ((digest as u32) ^ ((digest >> 32) as u32)) as i32
}

/// SipHash-1-3 with a fixed little-endian, 64-bit-width integer encoding.
struct StableHasher {
    inner: SipHasher13,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: SipHasher13::new_with_keys(0, 0),
        }
    }
}

impl Hasher for StableHasher {
    fn finish(&self) -> u64 {
        self.inner.finish()
    }

    fn write(&mut self, bytes: &[u8]) {
        self.inner.write(bytes);
    }

    fn write_u8(&mut self, i: u8) {
        self.inner.write(&[i]);
    }

    fn write_u16(&mut self, i: u16) {
        self.inner.write(&i.to_le_bytes());
    }

    fn write_u32(&mut self, i: u32) {
        self.inner.write(&i.to_le_bytes());
    }

    fn write_u64(&mut self, i: u64) {
        self.inner.write(&i.to_le_bytes());
    }

    fn write_u128(&mut self, i: u128) {
        self.inner.write(&i.to_le_bytes());
    }

    fn write_usize(&mut self, i: usize) {
        self.write_u64(i as u64);
    }

    fn write_i8(&mut self, i: i8) {
        self.write_u8(i as u8);
    }

    fn write_i16(&mut self, i: i16) {
        self.write_u16(i as u16);
    }

    fn write_i32(&mut self, i: i32) {
        self.write_u32(i as u32);
    }

    fn write_i64(&mut self, i: i64) {
        self.write_u64(i as u64);
    }

    fn write_i128(&mut self, i: i128) {
        self.write_u128(i as u128);
    }

    fn write_isize(&mut self, i: isize) {
        self.write_u64(i as i64 as u64);
    }
}
