
// Buffer generation and the branchy sum used to show the cost of
// branch misprediction.

use std::hint::black_box;

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Bytes at or above this value are added to the sum.
pub const THRESHOLD: u8 = 128;

/// Seed used when the caller doesn't pick one.
pub const DEFAULT_SEED: u64 = 1;

/// Allocates `count` bytes and fills them with uniform values in
/// `[0, 256)` drawn from a generator seeded with `seed`.
///
/// Allocation is fallible here so an oversized count comes back as an
/// error rather than aborting the process.
pub fn random_bytes(count: u64, seed: u64) -> Result<Vec<u8>, String> {
    let len = usize::try_from(count)
        .map_err(|_| format!("Buffer of {count} bytes does not fit in memory."))?;

    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|e| format!("Unable to allocate {len} bytes: {e}"))?;
    data.resize(len, 0u8);

    let mut rng = StdRng::seed_from_u64(seed);
    rng.fill(data.as_mut_slice());

    Ok(data)
}

/// Sums every byte `>= THRESHOLD`, taking a branch per element.
///
/// On sorted input the branch is not-taken for one run and taken for the
/// rest, which the predictor learns almost immediately.
pub fn conditional_sum(data: &[u8]) -> u64 {
    let mut sum = 0u64;
    for &value in data {
        if value >= THRESHOLD {
            // black_box keeps this a real branch instead of a select
            sum = black_box(sum + value as u64);
        }
    }
    sum
}
