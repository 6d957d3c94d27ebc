use std::ops::Range;

/// Number of pages needed for `count` items at `capacity` per page.
///
/// `capacity` comes from the closed layout set and is never zero.
pub fn page_count(count: usize, capacity: usize) -> usize {
    debug_assert!(capacity >= 1, "page capacity must be at least one");
    count.div_ceil(capacity.max(1))
}

/// Sequential index ranges, one per page, covering `0..count` exactly.
///
/// Page `k` owns `k * capacity .. min((k + 1) * capacity, count)`; only the
/// last range may be shorter than `capacity`.
pub fn page_ranges(count: usize, capacity: usize) -> Vec<Range<usize>> {
    let capacity = capacity.max(1);
    (0..page_count(count, capacity))
        .map(|page| {
            let start = page * capacity;
            start..(start + capacity).min(count)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count_rounds_up() {
        assert_eq!(page_count(0, 12), 0);
        assert_eq!(page_count(1, 12), 1);
        assert_eq!(page_count(12, 12), 1);
        assert_eq!(page_count(13, 12), 2);
        assert_eq!(page_count(14, 12), 2);
        assert_eq!(page_count(25, 12), 3);
    }

    #[test]
    fn test_ranges_cover_input_without_gaps() {
        for capacity in 1..=12 {
            for count in 0..=40 {
                let ranges = page_ranges(count, capacity);
                assert_eq!(ranges.len(), page_count(count, capacity));
                let flattened: Vec<usize> = ranges.iter().cloned().flatten().collect();
                assert_eq!(flattened, (0..count).collect::<Vec<_>>());
                for range in ranges.iter().rev().skip(1) {
                    assert_eq!(range.len(), capacity);
                }
            }
        }
    }

    #[test]
    fn test_last_page_holds_remainder() {
        let ranges = page_ranges(14, 12);
        assert_eq!(ranges, vec![0..12, 12..14]);
    }
}
