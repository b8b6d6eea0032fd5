//! rrt_planner - RRT path planning over 2D occupancy grids
//!
//! This crate grows a Rapidly-exploring Random Tree over a binary
//! occupancy grid derived from a raster map image, and reconstructs a
//! path from start to destination by following parent pointers.

// Core modules
pub mod common;
pub mod utils;

// Algorithm modules
pub mod mapping;
pub mod path_planning;

// Re-export common types for convenience
pub use common::{GridPath, GridState, StateSampler, TreeObserver};
pub use common::{PlannerError, PlannerResult};
pub use mapping::OccupancyGrid;
pub use path_planning::{
    follow_parent_pointers, steer_towards, PlanOutcome, RrtConfig, RrtPlan, RrtPlanner, RrtTree,
    TreeNode, UniformSampler,
};
