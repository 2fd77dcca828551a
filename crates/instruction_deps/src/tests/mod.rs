// unit tests

use super::*;

use bench_harness::time_section;
use proptest::prelude::*;
use std::time::Duration;

#[test]
fn dependent_chain_ten_iterations() {
    let mut x = INITIAL_VALUE;
    dependent_chain(&mut x, 10);
    assert_eq!(x, 6);
}

#[test]
fn dependent_chain_zero_iterations() {
    let mut x = INITIAL_VALUE;
    dependent_chain(&mut x, 0);
    assert_eq!(x, INITIAL_VALUE);
}

#[test]
fn dependent_warm_up_adds_unroll_per_iteration() {
    let mut x = INITIAL_VALUE;
    dependent_warm_up(&mut x, 7);
    assert_eq!(x, INITIAL_VALUE + 7 * UNROLL);
}

#[test]
fn independent_chains_ten_iterations() {
    let mut lanes = [INITIAL_VALUE; LANES];
    independent_chains(&mut lanes, 10);
    assert_eq!(lanes, [6; LANES]);
    assert_eq!(checksum(&lanes), 24);
}

#[test]
fn independent_chains_zero_iterations() {
    let mut lanes = [INITIAL_VALUE; LANES];
    independent_chains(&mut lanes, 0);
    assert_eq!(checksum(&lanes), 4);
}

#[test]
fn independent_warm_up_keeps_lanes_apart() {
    let mut lanes = WARM_UP_LANES;
    independent_warm_up(&mut lanes, 3);
    assert_eq!(lanes, [16, 17, 18, 19]);
}

#[test]
fn checksum_wraps() {
    assert_eq!(checksum(&[u64::MAX, 1, 0, 0]), 0);
}

// Timing checks only mean something with optimizations on:
//  cargo test --release -p instruction_deps -- --ignored

const TIMING_COUNT: u64 = 100_000_000;

#[test]
#[ignore = "timing, run with --release"]
fn dependent_warm_up_runs_every_iteration() {
    let mut x = INITIAL_VALUE;
    let elapsed = time_section(|| dependent_warm_up(&mut x, TIMING_COUNT));
    assert_eq!(x, INITIAL_VALUE + TIMING_COUNT * UNROLL);
    // a folded loop finishes in well under a microsecond
    assert!(elapsed > Duration::from_millis(5), "warm-up took {elapsed:?}");
}

#[test]
#[ignore = "timing, run with --release"]
fn independent_warm_up_runs_every_iteration() {
    let mut lanes = WARM_UP_LANES;
    let elapsed = time_section(|| independent_warm_up(&mut lanes, TIMING_COUNT));
    assert_eq!(lanes[0], WARM_UP_LANES[0] + TIMING_COUNT * UNROLL);
    assert!(elapsed > Duration::from_millis(5), "warm-up took {elapsed:?}");
}

proptest! {
    #[test]
    fn dependent_result_is_one_plus_half(count in 0u64..100_000) {
        let mut x = INITIAL_VALUE;
        dependent_chain(&mut x, count);
        prop_assert_eq!(x, 1 + count / 2);
    }

    #[test]
    fn independent_result_is_four_times_dependent(count in 0u64..100_000) {
        let mut x = INITIAL_VALUE;
        dependent_chain(&mut x, count);

        let mut lanes = [INITIAL_VALUE; LANES];
        independent_chains(&mut lanes, count);

        prop_assert_eq!(lanes, [x; LANES]);
        prop_assert_eq!(checksum(&lanes), 4 * (1 + count / 2));
    }

    #[test]
    fn repeated_runs_agree(count in 0u64..10_000) {
        let mut first = INITIAL_VALUE;
        let mut second = INITIAL_VALUE;
        dependent_chain(&mut first, count);
        dependent_chain(&mut second, count);
        prop_assert_eq!(first, second);
    }
}
