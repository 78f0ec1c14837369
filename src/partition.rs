// SPDX-License-Identifier: MIT

use std::ops::Range;

/// A struct for splitting a range of items into contiguous per-thread chunks.
///
/// Every chunk except the last holds exactly `total_items / num_chunks`
/// items; the last chunk absorbs the remainder. Exactly `num_chunks` chunks
/// are always produced, so when there are more chunks than items the leading
/// chunks come out empty.
pub struct Partitioner {
    /// Total number of items to be split into chunks.
    total_items: usize,
    /// Number of chunks the items are split into.
    num_chunks: usize,
    /// The size of every chunk except the last.
    chunk_size: usize,
    /// The index of the next chunk to be produced.
    next_chunk: usize,
}

impl Partitioner {
    /// Creates a new `Partitioner` dividing `total_items` into `num_chunks`.
    ///
    /// # Arguments
    /// - `total_items`: The total number of items to be split.
    /// - `num_chunks`: The number of chunks to split the items into.
    ///
    /// # Panics
    /// Panics if `num_chunks` is zero (division by zero).
    pub fn new(total_items: usize, num_chunks: usize) -> Self {
        Partitioner {
            total_items,
            num_chunks,
            // Floor division; the last chunk picks up the remainder.
            chunk_size: total_items / num_chunks,
            next_chunk: 0,
        }
    }
}

impl Iterator for Partitioner {
    type Item = Range<usize>;

    /// Produces the next chunk as a half-open index range.
    ///
    /// # Returns
    /// - `Some(start..end)` for each of the `num_chunks` chunks, in order.
    /// - `None` once all chunks have been produced.
    fn next(&mut self) -> Option<Self::Item> {
        if self.next_chunk == self.num_chunks {
            return None;
        }

        let start = self.next_chunk * self.chunk_size;
        let end = if self.next_chunk == self.num_chunks - 1 {
            self.total_items
        } else {
            start + self.chunk_size
        };

        self.next_chunk += 1;
        Some(start..end)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.num_chunks - self.next_chunk;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Partitioner {}

#[cfg(test)]
mod tests {
    use super::*;

    /// Checks that the ranges are contiguous, in order, and cover `[0, n)`
    /// exactly once.
    fn assert_covers(n: usize, t: usize) {
        let ranges: Vec<_> = Partitioner::new(n, t).collect();
        assert_eq!(ranges.len(), t);

        let mut expected_start = 0;
        for range in &ranges {
            assert_eq!(range.start, expected_start);
            assert!(range.start <= range.end);
            expected_start = range.end;
        }
        assert_eq!(expected_start, n);
    }

    #[test]
    fn test_even_split() {
        let ranges: Vec<_> = Partitioner::new(8, 4).collect();
        assert_eq!(ranges, vec![0..2, 2..4, 4..6, 6..8]);
    }

    #[test]
    fn test_last_chunk_absorbs_remainder() {
        let ranges: Vec<_> = Partitioner::new(10, 3).collect();
        assert_eq!(ranges, vec![0..3, 3..6, 6..10]);
    }

    #[test]
    fn test_more_chunks_than_items() {
        // Leading chunks are empty; the last chunk owns everything.
        let ranges: Vec<_> = Partitioner::new(1, 4).collect();
        assert_eq!(ranges, vec![0..0, 0..0, 0..0, 0..1]);
    }

    #[test]
    fn test_empty_input() {
        let ranges: Vec<_> = Partitioner::new(0, 8).collect();
        assert_eq!(ranges.len(), 8);
        assert!(ranges.iter().all(|r| r.is_empty()));
    }

    #[test]
    fn test_single_chunk() {
        let ranges: Vec<_> = Partitioner::new(100, 1).collect();
        assert_eq!(ranges, vec![0..100]);
    }

    #[test]
    fn test_coverage_across_sizes_and_counts() {
        for n in [0, 1, 2, 7, 64, 1000, 1023] {
            for t in [1, 2, 3, 8, 16, 1500] {
                assert_covers(n, t);
            }
        }
    }

    #[test]
    fn test_exact_size_iterator() {
        let mut splitter = Partitioner::new(100, 5);
        assert_eq!(splitter.len(), 5);
        splitter.next();
        assert_eq!(splitter.len(), 4);
    }
}
