//! Simulation domain models.
//!
//! Inputs and results of the two engines. Every type here is plain data:
//! no shared state survives a run.
//!
//! | Type | Engine | Role |
//! |------|--------|------|
//! | `Process` | scheduling | input |
//! | `ProcessRow`, `ExecutionSlice`, `ScheduleResult` | scheduling | output |
//! | `MemoryBlock`, `AllocationRequest` | allocation | input / working state |
//! | `Placement`, `AllocationResult` | allocation | output |

mod memory;
mod process;
mod schedule;

pub use memory::{AllocationRequest, AllocationResult, MemoryBlock, Placement, PlacementPolicy};
pub use process::Process;
pub use schedule::{ExecutionSlice, ProcessRow, ScheduleResult, SchedulingAlgorithm};
