// Occupancy mapping module

pub mod occupancy_grid;

pub use occupancy_grid::*;
