//! Request-generation guard for callers that race fetches.
//!
//! The fetchers are stateless and do not stop a caller from issuing a new
//! fetch while one is outstanding; without a guard the last response to
//! resolve wins regardless of submission order. A view layer begins a
//! generation per submission and applies an outcome only while that
//! generation is still the current one.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct FetchSequence {
    latest: AtomicU64,
}

/// Token for one submission. Compare with [`FetchSequence::is_current`]
/// after the fetch settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchGeneration(u64);

impl FetchSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new generation, invalidating all earlier ones.
    pub fn begin(&self) -> FetchGeneration {
        FetchGeneration(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, generation: FetchGeneration) -> bool {
        self.latest.load(Ordering::SeqCst) == generation.0
    }
}
