//! Deterministic operating-system teaching simulations.
//!
//! Two independent engines, each a pure function from inputs to a result:
//!
//! - **`scheduler`**: single-CPU scheduling (FCFS, SJF, Round-Robin).
//!   Produces per-process timing rows and the execution timeline.
//! - **`allocation`**: contiguous memory placement (First-Fit, Best-Fit,
//!   Worst-Fit). Produces one block assignment per request.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `ProcessRow`, `ExecutionSlice`,
//!   `ScheduleResult`, `MemoryBlock`, `Placement`, `AllocationResult`
//! - **`validation`**: Precondition checks behind `SimError::InvalidInput`
//! - **`input`**: Strict and lenient size-list parsing
//! - **`config`**: Front-end defaults and input bounds
//! - **`workload`**: Seeded random workloads
//!
//! # Architecture
//!
//! Nothing is shared between runs: every call builds its own working
//! copies (remaining times, free capacities, ready queue) and returns plain
//! data. Presentation (tables, Gantt charts, memory maps) is left to the
//! caller.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5 & 9
//! - Knuth (1997), "The Art of Computer Programming", Vol. 1, §2.5

pub mod allocation;
pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::SimError;
