//! core::hasher
//!
//! Deterministic 64-bit key hashing.
//!
//! # Determinism
//!
//! Vertex and edge files are processed by separate invocations that never
//! talk to each other, so the same local key must hash to the same token in
//! both. The hasher therefore uses XXH64 with a fixed seed and serializes
//! the digest little-endian before encoding, independent of host byte order.
//!
//! Collisions are possible (birthday bound near 2^32 distinct keys) and are
//! not detected.
//!
//! # Example
//!
//! ```
//! use graphkeys::core::hasher::KeyHasher;
//!
//! let hasher = KeyHasher::default();
//! assert_eq!(hasher.hash(b"42").as_str(), "jvUItEYBMwI");
//! ```

use xxhash_rust::xxh64::xxh64;

use super::token::{self, Token};

/// Seed shared by every invocation so independent runs agree on digests.
pub const DEFAULT_SEED: u64 = 0xdead_beef_dead_beef;

/// Hashes byte strings into [`Token`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHasher {
    seed: u64,
}

impl KeyHasher {
    /// Create a hasher with an explicit seed.
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// The seed this hasher was constructed with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Compute the raw 64-bit digest of `input`.
    pub fn digest(&self, input: &[u8]) -> u64 {
        xxh64(input, self.seed)
    }

    /// Hash `input` into an 11-character token.
    pub fn hash(&self, input: &[u8]) -> Token {
        token::encode(&self.digest(input).to_le_bytes())
    }
}

impl Default for KeyHasher {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}
