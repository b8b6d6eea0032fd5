//! Common traits defining interfaces for planner collaborators

use crate::common::types::GridState;
use crate::path_planning::RrtTree;

/// Source of random states for tree growth.
///
/// The planner draws all of its randomness through this trait so runs
/// can be reproduced under test with a seeded or scripted sampler.
pub trait StateSampler {
    /// Draw the next sample
    fn sample_state(&mut self) -> GridState;
}

/// Observer notified once per growth-loop iteration.
///
/// Observers are a side channel for live views and recording: they see
/// the current tree and the candidate state produced by steering, and
/// must not influence planner state or the returned plan.
pub trait TreeObserver {
    fn on_iteration(&mut self, tree: &RrtTree, candidate: &GridState);
}
