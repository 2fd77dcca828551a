#[cfg(test)]
mod tests;

// Workloads for comparing a single data-dependent chain of additions
// against four independent chains the core can issue in parallel.
//
// Each warm-up body repeats its update five times by hand so loop
// overhead stays small next to the additions. The accumulators pass
// through black_box once per iteration, otherwise the whole warm-up
// folds into a single multiply-add.

use std::hint::black_box;

/// Starting value of every accumulator in the timed phase.
pub const INITIAL_VALUE: u64 = 1;

/// Number of independent accumulators.
pub const LANES: usize = 4;

/// Updates per accumulator in one warm-up loop body. Records the count
/// written out in `dependent_warm_up` and `independent_warm_up`.
pub const UNROLL: u64 = 5;

/// Lane values before the independent warm-up.
pub const WARM_UP_LANES: [u64; LANES] = [1, 2, 3, 4];

/// Five back-to-back increments per iteration, each reading the previous result.
pub fn dependent_warm_up(x: &mut u64, count: u64) {
    let mut acc = *x;
    for _ in 0..count {
        acc = acc.wrapping_add(1);
        acc = acc.wrapping_add(1);
        acc = acc.wrapping_add(1);
        acc = acc.wrapping_add(1);
        acc = black_box(acc.wrapping_add(1));
    }
    *x = acc;
}

/// The measured dependent loop: `x += i & 1` for every `i` below `count`.
pub fn dependent_chain(x: &mut u64, count: u64) {
    let mut acc = *x;
    for i in 0..count {
        acc = acc.wrapping_add(i & 1);
    }
    *x = acc;
}

/// Five rounds per iteration, one increment per lane in each round.
#[rustfmt::skip]
pub fn independent_warm_up(lanes: &mut [u64; LANES], count: u64) {
    let [mut a, mut b, mut c, mut d] = *lanes;
    for _ in 0..count {
        a = a.wrapping_add(1); b = b.wrapping_add(1); c = c.wrapping_add(1); d = d.wrapping_add(1);
        a = a.wrapping_add(1); b = b.wrapping_add(1); c = c.wrapping_add(1); d = d.wrapping_add(1);
        a = a.wrapping_add(1); b = b.wrapping_add(1); c = c.wrapping_add(1); d = d.wrapping_add(1);
        a = a.wrapping_add(1); b = b.wrapping_add(1); c = c.wrapping_add(1); d = d.wrapping_add(1);
        a = a.wrapping_add(1); b = b.wrapping_add(1); c = c.wrapping_add(1); d = d.wrapping_add(1);
        a = black_box(a); b = black_box(b); c = black_box(c); d = black_box(d);
    }
    *lanes = [a, b, c, d];
}

/// The measured independent loop: every lane does `lane += i & 1`,
/// no lane reads another.
pub fn independent_chains(lanes: &mut [u64; LANES], count: u64) {
    let [mut a, mut b, mut c, mut d] = *lanes;
    for i in 0..count {
        let bit = i & 1;
        a = a.wrapping_add(bit);
        b = b.wrapping_add(bit);
        c = c.wrapping_add(bit);
        d = d.wrapping_add(bit);
    }
    *lanes = [a, b, c, d];
}

/// Sum of all lanes, the value reported as the independent result.
pub fn checksum(lanes: &[u64; LANES]) -> u64 {
    lanes.iter().fold(0, |sum, lane| sum.wrapping_add(*lane))
}
