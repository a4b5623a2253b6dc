//! Random sources for deck shuffling.
//!
//! Every deck owns a ChaCha20 stream seeded from a `u64`. Seeded decks take the
//! seed from the caller; unseeded decks take it from a single process-wide
//! source, initialised from the OS-backed thread RNG on first use and reused
//! for the lifetime of the process. Because the seed is always known, any
//! shuffle can be replayed.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::sync::{Mutex, OnceLock, PoisonError};

static DEFAULT_SOURCE: OnceLock<Mutex<ChaCha20Rng>> = OnceLock::new();

fn default_source() -> &'static Mutex<ChaCha20Rng> {
    DEFAULT_SOURCE.get_or_init(|| Mutex::new(ChaCha20Rng::from_rng(&mut rand::rng())))
}

/// Draws a fresh seed from the process-wide default source.
pub fn next_seed() -> u64 {
    let mut source = default_source()
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    source.next_u64()
}

/// Builds the deterministic stream for `seed`.
pub fn seeded(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}
