//! Times four accumulators updated side by side with no data dependency
//! between them.

use bench_harness::{BenchArgs, Report, escape, time_section};
use clap::Parser;
use instruction_deps::{
    INITIAL_VALUE, LANES, WARM_UP_LANES, checksum, independent_chains, independent_warm_up,
};

fn main() {
    env_logger::init();
    let args = BenchArgs::parse();
    let count = args.count;

    let mut lanes = WARM_UP_LANES;
    log::info!("Warming up {LANES} independent chains, {count} iterations");
    independent_warm_up(&mut lanes, count);
    escape(&lanes);
    log::debug!("Warm-up lanes: {lanes:?}");

    lanes = [INITIAL_VALUE; LANES];
    let elapsed = time_section(|| independent_chains(&mut lanes, count));
    escape(&lanes);

    println!(
        "{}",
        Report::new("Independent time", elapsed, "Result", checksum(&lanes))
    );
}
