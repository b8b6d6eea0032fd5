//! Common types, traits, and error definitions for rrt_planner
//!
//! This module provides the foundational building blocks used by the
//! occupancy map and the planner.

pub mod types;
pub mod traits;
pub mod error;

pub use types::*;
pub use traits::*;
pub use error::*;
