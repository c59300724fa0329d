//! Allocation quality metrics.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Utilization | Allocated / total capacity |
//! | Largest Free | Biggest request that could still be served |
//! | Partial Blocks | Blocks that host something but still have room |

use serde::{Deserialize, Serialize};

use crate::models::AllocationResult;

/// Allocation pass indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationKpi {
    /// Requests that were placed.
    pub allocated_requests: usize,
    /// Requests no block could host.
    pub unallocated_requests: usize,
    /// Sum of original block sizes.
    pub total_capacity: u64,
    /// Sum of placed request sizes.
    pub total_allocated: u64,
    /// Sum of remaining free space.
    pub total_free: u64,
    /// Sum of rejected request sizes.
    pub total_rejected: u64,
    /// Allocated fraction of capacity (0.0..1.0).
    pub utilization: f64,
    /// Largest remaining free space in a single block.
    pub largest_free_block: u64,
    /// Blocks that are partly used.
    pub partial_blocks: usize,
}

impl AllocationKpi {
    /// Computes indicators for an allocation result.
    pub fn calculate(result: &AllocationResult) -> Self {
        let (placed, rejected): (Vec<_>, Vec<_>) =
            result.placements.iter().partition(|p| p.is_allocated());

        let total_capacity: u64 = result.blocks.iter().map(|b| b.capacity).sum();
        let total_free: u64 = result.blocks.iter().map(|b| b.free_capacity).sum();
        let total_allocated: u64 = placed.iter().map(|p| p.size).sum();

        let utilization = if total_capacity == 0 {
            0.0
        } else {
            total_allocated as f64 / total_capacity as f64
        };

        Self {
            allocated_requests: placed.len(),
            unallocated_requests: rejected.len(),
            total_capacity,
            total_allocated,
            total_free,
            total_rejected: rejected.iter().map(|p| p.size).sum(),
            utilization,
            largest_free_block: result
                .blocks
                .iter()
                .map(|b| b.free_capacity)
                .max()
                .unwrap_or(0),
            partial_blocks: result
                .blocks
                .iter()
                .filter(|b| b.used() > 0 && b.free_capacity > 0)
                .count(),
        }
    }
}
