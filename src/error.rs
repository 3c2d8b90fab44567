//! Error types for the generator.

/// Key material is empty or its length is not a multiple of
/// [`BLOCK_SIZE`](crate::BLOCK_SIZE).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("seed must be a non-empty multiple of 16 bytes, got {len} bytes")]
pub struct SeedSizeError {
    /// Length of the rejected seed.
    pub len: usize,
}

/// Invalid bounds given to [`Drng::next_int`](crate::Drng::next_int).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// `min > max`.
    #[error("inverted bounds: min {min} is greater than max {max}")]
    InvertedBounds { min: i64, max: i64 },
    /// `max - min` does not fit in an `i64`.
    #[error("range [{min}, {max}] overflows a 64-bit signed integer")]
    Overflow { min: i64, max: i64 },
}

/// The block counter would overflow. The stream for this key is used up and
/// further output would repeat earlier output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("counter exhausted: cannot advance block counter {counter} by {blocks} blocks")]
pub struct CounterExhausted {
    /// Counter value at the time of the failed draw.
    pub counter: u64,
    /// Number of blocks the draw needed.
    pub blocks: u64,
}

/// Any error returned by the sampling operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    SeedSize(#[from] SeedSizeError),
    #[error(transparent)]
    Range(#[from] RangeError),
    #[error(transparent)]
    CounterExhausted(#[from] CounterExhausted),
}
