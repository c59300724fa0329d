//! Contiguous memory allocation engine.
//!
//! Places a list of requests into fixed memory blocks, one pass, in
//! request order. Each request lands in at most one block; a block may
//! host several requests as long as its *current* free space allows.
//!
//! # Policies
//!
//! | Policy | Chooses | Tie-break |
//! |--------|---------|-----------|
//! | First-Fit | first block that fits | n/a |
//! | Best-Fit | smallest leftover | lowest index |
//! | Worst-Fit | largest free space | lowest index |
//!
//! Requests no block can host are reported as unallocated; that is an
//! ordinary outcome, not an error.
//!
//! # Usage
//!
//! ```
//! use os_sim::allocation::{allocate, PlacementPolicy};
//!
//! let result = allocate(&[100, 150, 200], &[120], PlacementPolicy::BestFit);
//! assert_eq!(result.assigned_block(0), Some(1));
//! ```

mod fit;
mod kpi;

pub use fit::{BestFit, FirstFit, WorstFit};
pub use kpi::AllocationKpi;

pub use crate::models::PlacementPolicy;

use std::fmt::Debug;

use tracing::{debug, trace};

use crate::models::{AllocationRequest, AllocationResult, MemoryBlock, Placement};

/// A block selection rule.
///
/// `select` returns the index of the block that should host a request of
/// `size`, looking only at current free capacities, or `None` if no block
/// qualifies. It must not return a block that cannot fit the request.
pub trait PlacementStrategy: Send + Sync + Debug {
    /// Strategy name (e.g., "Best-Fit").
    fn name(&self) -> &'static str;

    /// Policy descriptor recorded in results.
    fn policy(&self) -> PlacementPolicy;

    /// Chooses a hosting block.
    fn select(&self, blocks: &[MemoryBlock], size: u64) -> Option<usize>;
}

impl PlacementPolicy {
    /// The built-in strategy for this policy.
    pub fn strategy(self) -> &'static dyn PlacementStrategy {
        match self {
            Self::FirstFit => &FirstFit,
            Self::BestFit => &BestFit,
            Self::WorstFit => &WorstFit,
        }
    }
}

/// Runs one allocation pass with a built-in policy.
///
/// `blocks` and `requests` are sizes; their positions are the block and
/// request indices. The inputs are never mutated. Empty lists are legal.
pub fn allocate(blocks: &[u64], requests: &[u64], policy: PlacementPolicy) -> AllocationResult {
    allocate_with(policy.strategy(), blocks, requests)
}

/// Runs one allocation pass with any strategy.
pub fn allocate_with(
    strategy: &dyn PlacementStrategy,
    blocks: &[u64],
    requests: &[u64],
) -> AllocationResult {
    debug!(
        strategy = strategy.name(),
        blocks = blocks.len(),
        requests = requests.len(),
        "allocation pass"
    );

    let mut working: Vec<MemoryBlock> = blocks
        .iter()
        .enumerate()
        .map(|(i, &capacity)| MemoryBlock::new(i, capacity))
        .collect();
    let mut placements = Vec::with_capacity(requests.len());

    for (index, &size) in requests.iter().enumerate() {
        let request = AllocationRequest::new(index, size);
        let reserved = match strategy.select(&working, size) {
            Some(b) => working
                .get_mut(b)
                .and_then(|block| block.reserve(size).map(|offset| (block.index, offset))),
            None => None,
        };

        let placement = match reserved {
            Some((block_index, offset)) => {
                trace!(request = index, size, block = block_index, offset, "placed");
                Placement::placed(request, block_index, offset)
            }
            None => {
                trace!(request = index, size, "unallocated");
                Placement::unallocated(request)
            }
        };
        placements.push(placement);
    }

    let result = AllocationResult {
        policy: strategy.policy(),
        blocks: working,
        placements,
    };
    debug!(
        strategy = strategy.name(),
        unallocated = result.unallocated().len(),
        "allocation pass complete"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InputLimits;
    use crate::workload::WorkloadGenerator;

    const POLICIES: [PlacementPolicy; 3] = [
        PlacementPolicy::FirstFit,
        PlacementPolicy::BestFit,
        PlacementPolicy::WorstFit,
    ];

    fn assigned(result: &AllocationResult) -> Vec<Option<usize>> {
        result.placements.iter().map(|p| p.block_index).collect()
    }

    #[test]
    fn test_first_fit_uses_current_free_space() {
        let result = allocate(&[100, 500, 200], &[120, 50], PlacementPolicy::FirstFit);
        assert_eq!(assigned(&result), vec![Some(1), Some(1)]);
        assert_eq!(result.blocks[1].free_capacity, 330);
        assert_eq!(result.placements[1].offset, Some(120));
    }

    #[test]
    fn test_best_vs_worst_fit() {
        let best = allocate(&[100, 150, 200], &[120], PlacementPolicy::BestFit);
        assert_eq!(best.assigned_block(0), Some(1));
        assert_eq!(best.blocks[1].free_capacity, 30);

        let worst = allocate(&[100, 150, 200], &[120], PlacementPolicy::WorstFit);
        assert_eq!(worst.assigned_block(0), Some(2));
        assert_eq!(worst.blocks[2].free_capacity, 80);
    }

    #[test]
    fn test_textbook_workload() {
        let blocks = [100, 500, 200, 300, 600];
        let requests = [212, 417, 112, 426];

        let first = allocate(&blocks, &requests, PlacementPolicy::FirstFit);
        assert_eq!(assigned(&first), vec![Some(1), Some(4), Some(1), None]);

        let best = allocate(&blocks, &requests, PlacementPolicy::BestFit);
        assert_eq!(assigned(&best), vec![Some(3), Some(1), Some(2), Some(4)]);

        let worst = allocate(&blocks, &requests, PlacementPolicy::WorstFit);
        assert_eq!(assigned(&worst), vec![Some(4), Some(1), Some(4), None]);
        assert_eq!(worst.blocks[4].free_capacity, 276);
    }

    #[test]
    fn test_unallocated_leaves_blocks_untouched() {
        let result = allocate(&[10, 20], &[50], PlacementPolicy::FirstFit);
        assert_eq!(result.assigned_block(0), None);
        assert_eq!(result.unallocated().len(), 1);
        assert!(result.blocks.iter().all(|b| b.free_capacity == b.capacity));
    }

    #[test]
    fn test_empty_inputs() {
        for policy in POLICIES {
            let none = allocate(&[], &[], policy);
            assert!(none.placements.is_empty());
            assert!(none.blocks.is_empty());

            let no_blocks = allocate(&[], &[5, 6], policy);
            assert_eq!(no_blocks.unallocated().len(), 2);

            let no_requests = allocate(&[5, 6], &[], policy);
            assert_eq!(no_requests.capacities(), vec![5, 6]);
        }
    }

    #[test]
    fn test_inputs_not_mutated() {
        let blocks = vec![100, 200];
        let requests = vec![50, 50];
        let _ = allocate(&blocks, &requests, PlacementPolicy::FirstFit);
        assert_eq!(blocks, vec![100, 200]);
    }

    #[test]
    fn test_policy_recorded() {
        for policy in POLICIES {
            assert_eq!(allocate(&[1], &[1], policy).policy, policy);
            assert_eq!(policy.strategy().policy(), policy);
        }
    }

    #[test]
    fn test_custom_strategy() {
        // Always the last block that fits
        #[derive(Debug)]
        struct LastFit;
        impl PlacementStrategy for LastFit {
            fn name(&self) -> &'static str {
                "Last-Fit"
            }
            fn policy(&self) -> PlacementPolicy {
                PlacementPolicy::FirstFit
            }
            fn select(&self, blocks: &[MemoryBlock], size: u64) -> Option<usize> {
                blocks.iter().rposition(|b| b.fits(size))
            }
        }

        let result = allocate_with(&LastFit, &[300, 300, 10], &[100]);
        assert_eq!(result.assigned_block(0), Some(1));
    }

    #[test]
    fn test_capacity_never_exceeded_on_random_workloads() {
        let mut generator = WorkloadGenerator::seeded(11, InputLimits::default());
        for _ in 0..200 {
            let blocks = generator.sizes(5, 600);
            let requests = generator.sizes(6, 450);
            for policy in POLICIES {
                let result = allocate(&blocks, &requests, policy);
                assert_eq!(result.placements.len(), requests.len());

                for block in &result.blocks {
                    let hosted: u64 = result
                        .placements_in(block.index)
                        .iter()
                        .map(|p| p.size)
                        .sum();
                    assert!(hosted <= block.capacity, "{policy}: {block:?}");
                    assert_eq!(block.capacity - block.free_capacity, hosted);

                    // Placements inside a block never overlap
                    let mut end = 0;
                    for p in result.placements_in(block.index) {
                        let offset = p.offset.unwrap_or_default();
                        assert!(offset >= end);
                        end = offset + p.size;
                    }
                }

                // Free space only shrinks, so a rejected request fits nowhere at the end
                for p in result.unallocated() {
                    assert!(result.blocks.iter().all(|b| !b.fits(p.size)));
                }
            }
        }
    }
}
