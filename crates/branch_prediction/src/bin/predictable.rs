//! Times a branchy sum over a sorted random buffer, where the branch
//! outcome is easy to predict.

use bench_harness::{BenchArgs, Report, escape, time_section};
use branch_prediction::{DEFAULT_SEED, conditional_sum, random_bytes};
use clap::Parser;

#[derive(Parser)]
#[command(about, long_about = None)]
struct Args {
    #[command(flatten)]
    bench: BenchArgs,
    /// Seed for the buffer contents.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,
}

fn main() -> Result<(), String> {
    env_logger::init();
    let args = Args::parse();
    let count = args.bench.count;

    log::info!("Generating {count} random bytes, seed {}", args.seed);
    let mut data = random_bytes(count, args.seed)?;

    // sorting isn't part of the measurement
    data.sort_unstable();
    log::debug!("Buffer sorted");

    let mut sum = conditional_sum(&data);
    escape(&sum);
    log::debug!("Warm-up sum: {sum}");

    sum = 0;
    let elapsed = time_section(|| sum += conditional_sum(&data));
    escape(&sum);

    println!(
        "{}",
        Report::new("Predictable (sorted) time", elapsed, "Sum", sum).aligned()
    );

    Ok(())
}

// There is no unsorted counterpart program. To see the misprediction
// cost, run `cargo bench -p branch_prediction`, which times both orders.
