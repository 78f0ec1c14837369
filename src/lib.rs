// SPDX-License-Identifier: MIT

//! Benchmark of four strategies for summing a large integer array: a
//! sequential baseline and three multi-threaded variants that differ only in
//! how the per-thread partial sums are merged (mutex, relaxed atomic, or a
//! sequential reduce after the join barrier).

pub mod config;
pub mod partition;
pub mod report;
pub mod strategies;

pub use config::BenchConfig;
pub use partition::Partitioner;
pub use strategies::{
    multi_thread_sum_atomic, multi_thread_sum_lock, multi_thread_sum_reduce, single_thread_sum,
};
