//! Column packing for overlapping intervals.
//!
//! Intervals are sorted by start, then end, with a stable sort so equal keys
//! keep their input order. The sorted sequence is cut into clusters (connected
//! components of the overlap graph): a new cluster begins whenever an interval
//! starts at or after the latest end seen so far. Each cluster is packed with a
//! sweep that reuses the lowest-numbered lane whose last interval has ended,
//! which yields the minimum lane count for an interval graph. Every member of a
//! cluster reports that cluster's lane count.
//!
//! # Reference
//! Golumbic (2004), "Algorithmic Graph Theory and Perfect Graphs", Ch. 8

use crate::models::TimeInterval;
use log::debug;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Lane placement for one interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColumnAssignment {
    pub column_index: usize,
    pub column_count: usize,
    /// Position of the interval's cluster in start order.
    pub cluster: usize,
}

/// Input indices ordered by `(start_minutes, end_minutes)`.
pub fn sorted_order(intervals: &[TimeInterval]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..intervals.len()).collect();
    // `sort_by_key` is stable.
    order.sort_by_key(|&i| (intervals[i].start_minutes, intervals[i].end_minutes));
    order
}

/// Connected components of the overlap graph, each listed in sorted order.
pub fn clusters(intervals: &[TimeInterval]) -> Vec<Vec<usize>> {
    let mut clusters: Vec<Vec<usize>> = Vec::new();
    let mut current: Vec<usize> = Vec::new();
    let mut current_end = 0;

    for index in sorted_order(intervals) {
        let interval = &intervals[index];
        if !current.is_empty() && interval.start_minutes >= current_end {
            clusters.push(std::mem::take(&mut current));
        }
        current_end = if current.is_empty() {
            interval.end_minutes
        } else {
            current_end.max(interval.end_minutes)
        };
        current.push(index);
    }

    if !current.is_empty() {
        clusters.push(current);
    }
    clusters
}

/// Assign every interval a lane and its cluster's lane count.
///
/// The result is indexed like `intervals`. Intervals are assumed valid.
pub fn allocate_columns(intervals: &[TimeInterval]) -> Vec<ColumnAssignment> {
    let mut assignments = vec![
        ColumnAssignment {
            column_index: 0,
            column_count: 1,
            cluster: 0,
        };
        intervals.len()
    ];

    for (cluster, members) in clusters(intervals).iter().enumerate() {
        let (lanes, column_count) = pack_cluster(intervals, members);

        debug!(
            "event=cluster_packed module=allocator cluster={} members={} columns={}",
            cluster,
            members.len(),
            column_count
        );

        for (&index, lane) in members.iter().zip(lanes) {
            assignments[index] = ColumnAssignment {
                column_index: lane,
                column_count,
                cluster,
            };
        }
    }

    assignments
}

/// Sweep one cluster, returning each member's lane and the number of lanes opened.
fn pack_cluster(intervals: &[TimeInterval], members: &[usize]) -> (Vec<usize>, usize) {
    // (end_minutes, lane) of intervals still occupying a lane
    let mut active: BinaryHeap<Reverse<(u32, usize)>> = BinaryHeap::new();
    let mut free: BinaryHeap<Reverse<usize>> = BinaryHeap::new();
    let mut opened = 0;
    let mut lanes = Vec::with_capacity(members.len());

    for &index in members {
        let interval = &intervals[index];

        while let Some(&Reverse((end, lane))) = active.peek() {
            if end > interval.start_minutes {
                break;
            }
            active.pop();
            free.push(Reverse(lane));
        }

        let lane = match free.pop() {
            Some(Reverse(lane)) => lane,
            None => {
                opened += 1;
                opened - 1
            }
        };

        active.push(Reverse((interval.end_minutes, lane)));
        lanes.push(lane);
    }

    (lanes, opened.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(id: &str, start: u32, end: u32) -> TimeInterval {
        TimeInterval::new(id, start, end).unwrap()
    }

    fn columns(intervals: &[TimeInterval]) -> Vec<(usize, usize)> {
        allocate_columns(intervals)
            .into_iter()
            .map(|a| (a.column_index, a.column_count))
            .collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(allocate_columns(&[]).is_empty());
        assert!(clusters(&[]).is_empty());
    }

    #[test]
    fn test_disjoint_intervals_use_one_column() {
        let intervals = vec![iv("a", 600, 660), iv("b", 540, 600), iv("c", 720, 750)];
        assert_eq!(columns(&intervals), vec![(0, 1), (0, 1), (0, 1)]);
        assert_eq!(clusters(&intervals).len(), 3);
    }

    #[test]
    fn test_partial_overlap() {
        let intervals = vec![iv("a", 540, 600), iv("b", 570, 630)];
        assert_eq!(columns(&intervals), vec![(0, 2), (1, 2)]);
    }

    #[test]
    fn test_chain_shares_column_count() {
        let intervals = vec![iv("a", 540, 600), iv("b", 570, 630), iv("c", 600, 660)];
        assert_eq!(columns(&intervals), vec![(0, 2), (1, 2), (0, 2)]);
        assert_eq!(clusters(&intervals), vec![vec![0, 1, 2]]);
    }

    #[test]
    fn test_same_start_packs_shorter_first() {
        let intervals = vec![iv("long", 540, 660), iv("short", 540, 570)];
        let assignments = allocate_columns(&intervals);
        assert_eq!(assignments[1].column_index, 0);
        assert_eq!(assignments[0].column_index, 1);
    }

    #[test]
    fn test_equal_keys_keep_input_order() {
        let intervals = vec![iv("x", 540, 600), iv("y", 540, 600), iv("z", 540, 600)];
        assert_eq!(sorted_order(&intervals), vec![0, 1, 2]);
        assert_eq!(columns(&intervals), vec![(0, 3), (1, 3), (2, 3)]);
    }

    #[test]
    fn test_freed_lane_reused_lowest_first() {
        // b and c end before d starts; d takes b's lane 0, not c's lane 2.
        let intervals = vec![
            iv("a", 540, 720),
            iv("b", 540, 600),
            iv("c", 550, 610),
            iv("d", 615, 700),
        ];
        let assignments = allocate_columns(&intervals);
        let lanes: Vec<usize> = assignments.iter().map(|a| a.column_index).collect();
        assert_eq!(lanes, vec![1, 0, 2, 0]);
        assert!(assignments.iter().all(|a| a.column_count == 3));
    }

    #[test]
    fn test_clusters_get_independent_counts() {
        let intervals = vec![
            iv("a", 540, 600),
            iv("b", 550, 610),
            iv("c", 560, 620),
            iv("d", 700, 760),
        ];
        let assignments = allocate_columns(&intervals);
        assert_eq!(assignments[0].cluster, assignments[2].cluster);
        assert_eq!(assignments[2].column_count, 3);
        assert_eq!(assignments[3].column_count, 1);
        assert_eq!(assignments[3].column_index, 0);
        assert_ne!(assignments[3].cluster, assignments[0].cluster);
    }

    #[test]
    fn test_generated_day_invariants() {
        // Deterministic pseudo-random day, checked against brute force.
        let mut seed: u32 = 17;
        let mut next = || {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            (seed >> 16) % 1000
        };
        let intervals: Vec<TimeInterval> = (0..60)
            .map(|i| {
                let start = 420 + next() % 600;
                let length = 15 + next() % 120;
                iv(&format!("e{i}"), start, start + length)
            })
            .collect();

        let assignments = allocate_columns(&intervals);

        for i in 0..intervals.len() {
            assert!(assignments[i].column_index < assignments[i].column_count);
            for j in (i + 1)..intervals.len() {
                if intervals[i].overlaps(&intervals[j]) {
                    assert_ne!(assignments[i].column_index, assignments[j].column_index);
                    assert_eq!(assignments[i].column_count, assignments[j].column_count);
                    assert_eq!(assignments[i].cluster, assignments[j].cluster);
                }
            }
        }

        // Lane count equals the peak concurrency inside each cluster.
        for members in clusters(&intervals) {
            let peak = members
                .iter()
                .map(|&m| {
                    let at = intervals[m].start_minutes;
                    members
                        .iter()
                        .filter(|&&o| {
                            intervals[o].start_minutes <= at && at < intervals[o].end_minutes
                        })
                        .count()
                })
                .max()
                .unwrap();
            for &m in &members {
                assert_eq!(assignments[m].column_count, peak);
            }
        }
    }
}
