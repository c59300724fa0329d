//! Memory placement models.
//!
//! Blocks are fixed partitions laid out back to back in block-index order,
//! so block `i` starts at the sum of the capacities before it. Requests are
//! carved from a block's free tail; a block can host several requests.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Contiguous placement policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementPolicy {
    /// First block with enough free space.
    FirstFit,
    /// Block leaving the smallest leftover.
    BestFit,
    /// Block with the largest free space.
    WorstFit,
}

impl fmt::Display for PlacementPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstFit => write!(f, "First-Fit"),
            Self::BestFit => write!(f, "Best-Fit"),
            Self::WorstFit => write!(f, "Worst-Fit"),
        }
    }
}

/// A memory block with its working free capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryBlock {
    /// Position in the original block list.
    pub index: usize,
    /// Original size.
    pub capacity: u64,
    /// Space not yet reserved. Always `<= capacity`.
    pub free_capacity: u64,
}

impl MemoryBlock {
    /// Creates an empty block.
    pub fn new(index: usize, capacity: u64) -> Self {
        Self {
            index,
            capacity,
            free_capacity: capacity,
        }
    }

    /// Whether `size` fits into the current free space.
    #[inline]
    pub fn fits(&self, size: u64) -> bool {
        self.free_capacity >= size
    }

    /// Space already reserved.
    #[inline]
    pub fn used(&self) -> u64 {
        self.capacity - self.free_capacity
    }

    /// Reserves `size` units from the free tail.
    ///
    /// Returns the in-block offset of the reservation, or `None` (leaving
    /// the block untouched) if it does not fit.
    pub fn reserve(&mut self, size: u64) -> Option<u64> {
        if !self.fits(size) {
            return None;
        }
        let offset = self.used();
        self.free_capacity -= size;
        Some(offset)
    }
}

/// A request for a contiguous region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationRequest {
    /// Position in the original request list.
    pub index: usize,
    /// Requested size.
    pub size: u64,
}

impl AllocationRequest {
    /// Creates a request.
    pub fn new(index: usize, size: u64) -> Self {
        Self { index, size }
    }
}

/// Outcome of one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Index of the request in input order.
    pub request_index: usize,
    /// Requested size.
    pub size: u64,
    /// Hosting block, `None` if no block had room.
    pub block_index: Option<usize>,
    /// Offset inside the hosting block.
    pub offset: Option<u64>,
}

impl Placement {
    /// A request that landed in `block_index` at `offset`.
    pub fn placed(request: AllocationRequest, block_index: usize, offset: u64) -> Self {
        Self {
            request_index: request.index,
            size: request.size,
            block_index: Some(block_index),
            offset: Some(offset),
        }
    }

    /// A request no block could host.
    pub fn unallocated(request: AllocationRequest) -> Self {
        Self {
            request_index: request.index,
            size: request.size,
            block_index: None,
            offset: None,
        }
    }

    /// Whether the request was placed.
    #[inline]
    pub fn is_allocated(&self) -> bool {
        self.block_index.is_some()
    }
}

/// Output of one allocation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationResult {
    /// Policy used for the pass.
    pub policy: PlacementPolicy,
    /// Blocks after the pass (free capacities reflect all placements).
    pub blocks: Vec<MemoryBlock>,
    /// One placement per request, in request order.
    pub placements: Vec<Placement>,
}

impl AllocationResult {
    /// Hosting block of a request.
    pub fn assigned_block(&self, request_index: usize) -> Option<usize> {
        self.placements
            .get(request_index)
            .and_then(|p| p.block_index)
    }

    /// Requests that could not be placed.
    pub fn unallocated(&self) -> Vec<&Placement> {
        self.placements
            .iter()
            .filter(|p| !p.is_allocated())
            .collect()
    }

    /// Requests placed in a block, in placement order.
    pub fn placements_in(&self, block_index: usize) -> Vec<&Placement> {
        self.placements
            .iter()
            .filter(|p| p.block_index == Some(block_index))
            .collect()
    }

    /// Start address of a block in the back-to-back layout.
    ///
    /// `None` if the block does not exist or its address exceeds `u64`.
    pub fn block_base(&self, block_index: usize) -> Option<u64> {
        if block_index >= self.blocks.len() {
            return None;
        }
        self.blocks[..block_index]
            .iter()
            .try_fold(0u64, |base, b| base.checked_add(b.capacity))
    }

    /// Absolute start address of a placed request.
    pub fn address_of(&self, request_index: usize) -> Option<u64> {
        let placement = self.placements.get(request_index)?;
        let base = self.block_base(placement.block_index?)?;
        base.checked_add(placement.offset?)
    }

    /// Original block sizes.
    pub fn capacities(&self) -> Vec<u64> {
        self.blocks.iter().map(|b| b.capacity).collect()
    }
}
