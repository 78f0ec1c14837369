// SPDX-License-Identifier: MIT

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Mutex, PoisonError};
use std::thread;

use crate::partition::Partitioner;

/// Runs `work` once per partition on its own worker thread and collects the
/// per-worker results in thread-index order.
///
/// This is the shared parallel-for-then-barrier building block for all the
/// multi-threaded strategies: exactly `num_threads` workers are spawned,
/// one per partition (empty partitions included), and the scope joins every
/// worker before the results are read.
///
/// # Arguments
/// * `input_array` - Array shared read-only across all workers
/// * `num_threads` - Number of worker threads to spawn (must be >= 1)
/// * `work` - Closure run by each worker over its own partition
///
/// # Returns
/// One result per worker, ordered by thread index.
fn run_partitioned<T, F>(input_array: &[i64], num_threads: usize, work: F) -> Vec<T>
where
    T: Send,
    F: Fn(&[i64]) -> T + Sync,
{
    thread::scope(|scope| {
        // Spawn one worker per partition before joining any of them.
        let workers: Vec<_> = Partitioner::new(input_array.len(), num_threads)
            .map(|range| {
                let chunk = &input_array[range];
                let work = &work;
                scope.spawn(move || work(chunk))
            })
            .collect();

        // Join barrier: every worker finishes before any result is read.
        workers
            .into_iter()
            .map(|worker| worker.join().unwrap())
            .collect()
    })
}

/// Sequential sum of the full array. Baseline for the parallel strategies.
pub fn single_thread_sum(input_array: &[i64]) -> i64 {
    input_array.iter().sum()
}

/// Sums the array on `num_threads` workers, merging the per-worker local
/// sums into a shared accumulator under a mutual-exclusion lock.
///
/// Each worker sums its own partition without synchronization, then takes
/// the lock once to add its local sum, so contention is limited to
/// `num_threads` short critical sections.
pub fn multi_thread_sum_lock(input_array: &[i64], num_threads: usize) -> i64 {
    let sum = Mutex::new(0i64);

    run_partitioned(input_array, num_threads, |chunk| {
        let local_sum: i64 = chunk.iter().sum();
        let mut sum_guard = sum.lock().unwrap_or_else(PoisonError::into_inner);
        *sum_guard += local_sum;
    });

    sum.into_inner().unwrap_or_else(PoisonError::into_inner)
}

/// Sums the array on `num_threads` workers, merging the per-worker local
/// sums into a shared atomic accumulator with a relaxed fetch-and-add.
///
/// Relaxed ordering is sufficient: the accumulator is the only shared
/// mutable state, and the scope join orders the final load after every add.
pub fn multi_thread_sum_atomic(input_array: &[i64], num_threads: usize) -> i64 {
    let sum = AtomicI64::new(0);

    run_partitioned(input_array, num_threads, |chunk| {
        let local_sum: i64 = chunk.iter().sum();
        sum.fetch_add(local_sum, Ordering::Relaxed);
    });

    sum.load(Ordering::Relaxed)
}

/// Sums the array on `num_threads` workers with no shared accumulator at
/// all: each worker hands its local sum back through the join, and the main
/// thread reduces the collected partials sequentially after the barrier.
///
/// The sequential merge is O(num_threads), negligible next to the O(n)
/// parallel phase for large arrays.
pub fn multi_thread_sum_reduce(input_array: &[i64], num_threads: usize) -> i64 {
    let partial_sums = run_partitioned(input_array, num_threads, |chunk| {
        chunk.iter().sum::<i64>()
    });

    partial_sums.into_iter().sum()
}
