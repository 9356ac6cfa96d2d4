//! Search Planner subsystem for dirsql
//!
//! Turns extracted statement fragments into an immutable search plan.
//!
//! # Design Principles
//!
//! - Total: planning never fails; a FROM target matching no configured
//!   object class degrades to pass-through addressing
//! - Pure: configuration in, plan out, no I/O
//! - Bounded: the effective row cap is the smaller of the statement
//!   and connector caps, each ignored when unset

mod plan;
mod planner;

pub use plan::SearchPlan;
pub use planner::SearchPlanner;
