//! Common types for rrt_planner

use std::hash::{Hash, Hasher};

/// 2D planning state in integer pixel coordinates.
///
/// `x` indexes columns of the occupancy grid and `y` indexes rows.
/// Two states are equal iff their coordinates are equal; tree structure
/// (parent/child links) lives in the tree arena, not on the state.
#[derive(Debug, Clone, Copy)]
pub struct GridState {
    pub x: i32,
    pub y: i32,
}

impl GridState {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn origin() -> Self {
        Self { x: 0, y: 0 }
    }

    /// Euclidean distance to another state
    pub fn distance(&self, other: &GridState) -> f64 {
        let dx = (other.x - self.x) as f64;
        let dy = (other.y - self.y) as f64;
        (dx * dx + dy * dy).sqrt()
    }
}

impl PartialEq for GridState {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Eq for GridState {}

impl Hash for GridState {
    fn hash<H: Hasher>(&self, hasher: &mut H) {
        (self.x, self.y).hash(hasher);
    }
}

impl From<(i32, i32)> for GridState {
    fn from(tuple: (i32, i32)) -> Self {
        Self { x: tuple.0, y: tuple.1 }
    }
}

/// Ordered sequence of states from start to destination
#[derive(Debug, Clone, PartialEq)]
pub struct GridPath {
    pub states: Vec<GridState>,
}

impl GridPath {
    pub fn new() -> Self {
        Self { states: Vec::new() }
    }

    pub fn from_states(states: Vec<GridState>) -> Self {
        Self { states }
    }

    pub fn push(&mut self, state: GridState) {
        self.states.push(state);
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn first(&self) -> Option<&GridState> {
        self.states.first()
    }

    pub fn last(&self) -> Option<&GridState> {
        self.states.last()
    }

    /// X coordinates as floats, for plotting
    pub fn x_coords(&self) -> Vec<f64> {
        self.states.iter().map(|s| s.x as f64).collect()
    }

    /// Y coordinates as floats, for plotting
    pub fn y_coords(&self) -> Vec<f64> {
        self.states.iter().map(|s| s.y as f64).collect()
    }

    /// Total path length (sum of segment lengths)
    pub fn total_length(&self) -> f64 {
        self.states
            .windows(2)
            .map(|pair| pair[0].distance(&pair[1]))
            .sum()
    }
}

impl Default for GridPath {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_state_distance() {
        let a = GridState::new(0, 0);
        let b = GridState::new(3, 4);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(b.distance(&a), 5.0);
        assert_eq!(a.distance(&a), 0.0);
    }

    #[test]
    fn test_state_equality_ignores_everything_but_coords() {
        let a = GridState::new(7, 2);
        let b = GridState::new(7, 2);
        assert_eq!(a, b);

        let mut seen = HashSet::new();
        seen.insert(a);
        assert!(seen.contains(&b));
    }

    #[test]
    fn test_path_total_length() {
        let path = GridPath::from_states(vec![
            GridState::new(0, 0),
            GridState::new(3, 4),
            GridState::new(3, 10),
        ]);
        assert_eq!(path.len(), 3);
        assert_eq!(path.total_length(), 11.0);
    }

    #[test]
    fn test_empty_path() {
        let path = GridPath::new();
        assert!(path.is_empty());
        assert_eq!(path.total_length(), 0.0);
        assert!(path.first().is_none());
    }
}
