/// Half-open range of raster rows, `start..end`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RowRange {
    pub start: u32,
    pub end: u32,
}

impl RowRange {
    #[inline]
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Splits `height` rows into one contiguous range per worker. Every worker
/// gets `height / workers` rows and the last one also takes the remainder,
/// so the ranges always cover `0..height` exactly once. A worker count of
/// zero is treated as one.
pub fn partition_rows(height: u32, workers: u32) -> Vec<RowRange> {
    let workers = workers.max(1);
    let rows_per_worker = height / workers;
    let mut ranges = Vec::with_capacity(workers as usize);
    for t in 0..workers {
        let start = t * rows_per_worker;
        let end = if t + 1 == workers {
            height
        } else {
            (t + 1) * rows_per_worker
        };
        ranges.push(RowRange { start, end });
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_covers_exactly(height: u32, workers: u32) {
        let ranges = partition_rows(height, workers);
        assert_eq!(ranges.len(), workers.max(1) as usize);
        assert_eq!(ranges.first().unwrap().start, 0);
        assert_eq!(ranges.last().unwrap().end, height);
        for pair in ranges.windows(2) {
            assert_eq!(
                pair[0].end, pair[1].start,
                "ranges must be contiguous and non-overlapping"
            );
        }
    }

    #[test]
    fn covers_all_rows_exactly_once() {
        for &(height, workers) in &[
            (480, 4),
            (7, 3),
            (1, 1),
            (9, 1),
            (10, 10),
            (11, 10),
            (0, 3),
            (5, 64),
        ] {
            assert_covers_exactly(height, workers);
        }
    }

    #[test]
    fn remainder_rows_go_to_the_last_worker() {
        let ranges = partition_rows(10, 4);
        let lens: Vec<u32> = ranges.iter().map(|r| r.len()).collect();
        assert_eq!(lens, vec![2, 2, 2, 4]);
    }

    #[test]
    fn divides_evenly_when_possible() {
        let ranges = partition_rows(12, 4);
        assert!(ranges.iter().all(|r| r.len() == 3));
    }

    #[test]
    fn more_workers_than_rows_leaves_leading_ranges_empty() {
        let ranges = partition_rows(3, 8);
        assert!(ranges[..7].iter().all(|r| r.is_empty()));
        assert_eq!(ranges[7], RowRange { start: 0, end: 3 });
    }

    #[test]
    fn zero_workers_behaves_like_one() {
        assert_eq!(partition_rows(5, 0), partition_rows(5, 1));
        assert_eq!(partition_rows(5, 1), vec![RowRange { start: 0, end: 5 }]);
    }
}
