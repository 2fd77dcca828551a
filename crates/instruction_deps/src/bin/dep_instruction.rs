//! Times a single accumulator whose every update depends on the last one.

use bench_harness::{BenchArgs, Report, escape, time_section};
use clap::Parser;
use instruction_deps::{INITIAL_VALUE, dependent_chain, dependent_warm_up};

fn main() {
    env_logger::init();
    let args = BenchArgs::parse();
    let count = args.count;

    let mut x = INITIAL_VALUE;
    log::info!("Warming up dependent chain, {count} iterations");
    dependent_warm_up(&mut x, count);
    escape(&x);
    log::debug!("Warm-up value: {x}");

    x = INITIAL_VALUE;
    let elapsed = time_section(|| dependent_chain(&mut x, count));
    escape(&x);

    println!("{}", Report::new("Dependent time", elapsed, "Result", x));
}

// Compare against indep_instruction with the same count; the gap is the
// cost of serializing every add behind the previous one.
