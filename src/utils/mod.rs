//! Utility modules for rrt_planner

pub mod visualization;

pub use visualization::{colors, GrowthRecorder, PlanVisualizer};
