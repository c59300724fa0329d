//! Built-in placement strategies.
//!
//! Every strategy scans the working blocks in index order and only
//! replaces its current candidate on *strict* improvement, so ties always
//! resolve to the lowest block index.
//!
//! # Reference
//! Knuth (1997), "The Art of Computer Programming", Vol. 1, §2.5

use super::PlacementStrategy;
use crate::models::{MemoryBlock, PlacementPolicy};

/// First block with enough free space.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstFit;

impl PlacementStrategy for FirstFit {
    fn name(&self) -> &'static str {
        "First-Fit"
    }

    fn policy(&self) -> PlacementPolicy {
        PlacementPolicy::FirstFit
    }

    fn select(&self, blocks: &[MemoryBlock], size: u64) -> Option<usize> {
        blocks.iter().position(|b| b.fits(size))
    }
}

/// Block whose leftover (`free - size`) is smallest.
#[derive(Debug, Clone, Copy, Default)]
pub struct BestFit;

impl PlacementStrategy for BestFit {
    fn name(&self) -> &'static str {
        "Best-Fit"
    }

    fn policy(&self) -> PlacementPolicy {
        PlacementPolicy::BestFit
    }

    fn select(&self, blocks: &[MemoryBlock], size: u64) -> Option<usize> {
        let mut best: Option<(usize, u64)> = None;
        for (i, block) in blocks.iter().enumerate() {
            if !block.fits(size) {
                continue;
            }
            let leftover = block.free_capacity - size;
            if best.is_none_or(|(_, min)| leftover < min) {
                best = Some((i, leftover));
            }
        }
        best.map(|(i, _)| i)
    }
}

/// Block with the largest free space.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorstFit;

impl PlacementStrategy for WorstFit {
    fn name(&self) -> &'static str {
        "Worst-Fit"
    }

    fn policy(&self) -> PlacementPolicy {
        PlacementPolicy::WorstFit
    }

    fn select(&self, blocks: &[MemoryBlock], size: u64) -> Option<usize> {
        let mut worst: Option<(usize, u64)> = None;
        for (i, block) in blocks.iter().enumerate() {
            if !block.fits(size) {
                continue;
            }
            if worst.is_none_or(|(_, max)| block.free_capacity > max) {
                worst = Some((i, block.free_capacity));
            }
        }
        worst.map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blocks(sizes: &[u64]) -> Vec<MemoryBlock> {
        sizes
            .iter()
            .enumerate()
            .map(|(i, &s)| MemoryBlock::new(i, s))
            .collect()
    }

    #[test]
    fn test_first_fit() {
        let b = blocks(&[100, 500, 200]);
        assert_eq!(FirstFit.select(&b, 120), Some(1));
        assert_eq!(FirstFit.select(&b, 100), Some(0));
        assert_eq!(FirstFit.select(&b, 501), None);
    }

    #[test]
    fn test_best_fit() {
        let b = blocks(&[100, 150, 200]);
        assert_eq!(BestFit.select(&b, 120), Some(1));
        assert_eq!(BestFit.select(&b, 200), Some(2));
        assert_eq!(BestFit.select(&b, 201), None);
    }

    #[test]
    fn test_worst_fit() {
        let b = blocks(&[100, 150, 200]);
        assert_eq!(WorstFit.select(&b, 120), Some(2));
        assert_eq!(WorstFit.select(&b, 10), Some(2));
        assert_eq!(WorstFit.select(&b, 300), None);
    }

    #[test]
    fn test_ties_prefer_lowest_index() {
        let b = blocks(&[50, 300, 300, 300]);
        assert_eq!(BestFit.select(&b, 100), Some(1));
        assert_eq!(WorstFit.select(&b, 100), Some(1));
    }

    #[test]
    fn test_uses_current_free_capacity() {
        let mut b = blocks(&[300, 250]);
        b[0].reserve(100);
        // Block 0 now has 200 free: best fit for 190 is block 0 (leftover 10)
        assert_eq!(BestFit.select(&b, 190), Some(0));
        // Worst fit picks block 1 (250 > 200)
        assert_eq!(WorstFit.select(&b, 190), Some(1));
    }

    #[test]
    fn test_empty_blocks() {
        assert_eq!(FirstFit.select(&[], 1), None);
        assert_eq!(BestFit.select(&[], 0), None);
        assert_eq!(WorstFit.select(&[], 0), None);
    }
}
