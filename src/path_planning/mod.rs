// Path Planning algorithms module

pub mod rrt;

pub use rrt::*;
