// SPDX-License-Identifier: MIT

use rand::Rng;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use sumbench::report::{measure_micros, render_report, StrategyRun};
use sumbench::{
    multi_thread_sum_atomic, multi_thread_sum_lock, multi_thread_sum_reduce, single_thread_sum,
    BenchConfig,
};

/// Fills the input array with random values. The distribution only matters
/// for timing realism, not correctness.
fn generate_random_array(len: usize) -> Vec<i64> {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| rng.gen_range(-1000..=1000)).collect()
}

fn main() -> anyhow::Result<()> {
    Registry::default()
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;

    let config = BenchConfig::from_args(std::env::args().skip(1))?;
    info!(
        array_size = config.array_size,
        num_threads = config.num_threads,
        "generating input array"
    );
    let input_array = generate_random_array(config.array_size);

    // Strategies run one after another, each timed independently.
    let (single_sum, single_time) = measure_micros(|| single_thread_sum(&input_array));
    let (lock_sum, lock_time) =
        measure_micros(|| multi_thread_sum_lock(&input_array, config.num_threads));
    let (atomic_sum, atomic_time) =
        measure_micros(|| multi_thread_sum_atomic(&input_array, config.num_threads));
    let (reduce_sum, reduce_time) =
        measure_micros(|| multi_thread_sum_reduce(&input_array, config.num_threads));

    let runs = [
        StrategyRun {
            name: "Single-threaded",
            sum: single_sum,
            micros: single_time,
        },
        StrategyRun {
            name: "Lock-based",
            sum: lock_sum,
            micros: lock_time,
        },
        StrategyRun {
            name: "Atomic-based",
            sum: atomic_sum,
            micros: atomic_time,
        },
        StrategyRun {
            name: "Reduce-based",
            sum: reduce_sum,
            micros: reduce_time,
        },
    ];
    print!(
        "{}",
        render_report(config.array_size, config.num_threads, &runs)
    );

    Ok(())
}
