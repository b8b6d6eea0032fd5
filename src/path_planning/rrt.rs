//! RRT (Rapidly-exploring Random Tree) planner over an occupancy grid
//!
//! Grows a tree from the start state by repeatedly sampling the map,
//! steering from the nearest tree node toward the sample with a bounded
//! step, and keeping the candidate when the connecting segment is
//! collision-free. Terminates when a node lands within the
//! destination-reached radius or the iteration budget runs out.

use ordered_float::NotNan;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::common::{
    GridPath, GridState, PlannerError, PlannerResult, StateSampler, TreeObserver,
};
use crate::mapping::OccupancyGrid;

/// Number of interpolation points checked along a candidate segment
/// (fractions i/10 for i in 0..10; the endpoint is checked separately)
const SEGMENT_CHECKS: usize = 10;

/// Node in the tree arena.
///
/// Parent and children are arena indices, never owning references, so
/// the back-and-forth links of the tree cannot form ownership cycles.
#[derive(Debug, Clone)]
pub struct TreeNode {
    pub state: GridState,
    pub parent: Option<usize>,
    pub children: Vec<usize>,
}

/// Arena-backed spanning tree rooted at the start state.
///
/// Node 0 is always the root; every other node records the parent it
/// was attached to at insertion time. Nodes are never removed.
#[derive(Debug, Clone)]
pub struct RrtTree {
    nodes: Vec<TreeNode>,
}

impl RrtTree {
    pub fn new(root: GridState) -> Self {
        Self {
            nodes: vec![TreeNode {
                state: root,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn root(&self) -> &TreeNode {
        &self.nodes[0]
    }

    pub fn node(&self, index: usize) -> &TreeNode {
        &self.nodes[index]
    }

    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    /// Insert `state` as a child of `parent`, returning its index
    pub fn add_child(&mut self, parent: usize, state: GridState) -> usize {
        let index = self.nodes.len();
        self.nodes.push(TreeNode {
            state,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent].children.push(index);
        index
    }

    pub fn contains(&self, state: &GridState) -> bool {
        self.nodes.iter().any(|node| node.state == *state)
    }

    /// Index of the node nearest to `state` by Euclidean distance.
    ///
    /// Linear scan; ties go to the first minimum in insertion order.
    pub fn nearest(&self, state: &GridState) -> usize {
        self.nodes
            .iter()
            .enumerate()
            .min_by_key(|(_, node)| {
                // integer coordinates cannot produce a NaN distance
                NotNan::new(node.state.distance(state)).unwrap()
            })
            .map(|(index, _)| index)
            .unwrap()
    }

    /// Parent->child state pairs of every edge, for observers and plotting
    pub fn edges(&self) -> Vec<(GridState, GridState)> {
        self.nodes
            .iter()
            .filter_map(|node| {
                node.parent
                    .map(|parent| (self.nodes[parent].state, node.state))
            })
            .collect()
    }
}

/// Walk parent pointers from `index` to the root and return the
/// root-first path. A chain of k parent links yields k+1 states.
pub fn follow_parent_pointers(tree: &RrtTree, index: usize) -> GridPath {
    let mut states = Vec::new();
    let mut current = Some(index);
    while let Some(i) = current {
        let node = tree.node(i);
        states.push(node.state);
        current = node.parent;
    }
    states.reverse();
    GridPath::from_states(states)
}

/// Bounded-step steering from `nearest` toward `rand`.
///
/// If `rand` lies strictly within `max_radius` of `nearest` the
/// candidate takes `rand`'s coordinates; a sample at exactly
/// `max_radius` takes the far branch. Otherwise the candidate sits at
/// distance `max_radius` from `nearest` along the ray toward `rand`,
/// coordinates truncated to integers. No bounds clamping is applied;
/// out-of-bounds candidates are rejected later by the collision check.
pub fn steer_towards(nearest: &GridState, rand: &GridState, max_radius: f64) -> GridState {
    let dist = nearest.distance(rand);
    if dist < max_radius {
        GridState::new(rand.x, rand.y)
    } else if dist == 0.0 {
        // only reachable with a non-positive max_radius; avoid the
        // division by zero and stay put
        GridState::new(nearest.x, nearest.y)
    } else {
        let scale = max_radius / dist;
        let x = nearest.x as f64 + scale * (rand.x - nearest.x) as f64;
        let y = nearest.y as f64 + scale * (rand.y - nearest.y) as f64;
        GridState::new(x as i32, y as i32)
    }
}

/// Uniform random sampler over the grid extent.
///
/// Draws x from [0, width-1) and y from [0, height-1) as floats and
/// truncates to integers, matching the reference sampling scheme.
pub struct UniformSampler {
    max_x: f64,
    max_y: f64,
    rng: StdRng,
}

impl UniformSampler {
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_rng(width, height, StdRng::from_entropy())
    }

    /// Sampler with a fixed seed, for reproducible runs
    pub fn seeded(width: usize, height: usize, seed: u64) -> Self {
        Self::with_rng(width, height, StdRng::seed_from_u64(seed))
    }

    fn with_rng(width: usize, height: usize, rng: StdRng) -> Self {
        Self {
            max_x: width as f64,
            max_y: height as f64,
            rng,
        }
    }
}

impl StateSampler for UniformSampler {
    fn sample_state(&mut self) -> GridState {
        let x = self.rng.gen_range(0.0..self.max_x - 1.0) as i32;
        let y = self.rng.gen_range(0.0..self.max_y - 1.0) as i32;
        GridState::new(x, y)
    }
}

/// Configuration for the RRT planner
#[derive(Debug, Clone)]
pub struct RrtConfig {
    /// Maximum number of growth iterations
    pub max_num_steps: usize,
    /// Maximum extension step per iteration [pixels]
    pub max_steering_radius: f64,
    /// Radius around the destination that counts as reached [pixels]
    pub dest_reached_radius: f64,
}

impl Default for RrtConfig {
    fn default() -> Self {
        Self {
            max_num_steps: 1000,
            max_steering_radius: 30.0,
            dest_reached_radius: 50.0,
        }
    }
}

/// Terminal outcome of a planning run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanOutcome {
    /// A tree node reached the destination radius
    Succeeded,
    /// The iteration budget ran out; the path is the singleton [start]
    Exhausted,
}

/// Result of a planning run: outcome, path, and the explored tree
#[derive(Debug, Clone)]
pub struct RrtPlan {
    pub outcome: PlanOutcome,
    pub path: GridPath,
    pub tree: RrtTree,
}

impl RrtPlan {
    pub fn succeeded(&self) -> bool {
        self.outcome == PlanOutcome::Succeeded
    }
}

/// RRT planner over a borrowed occupancy grid
pub struct RrtPlanner<'a> {
    grid: &'a OccupancyGrid,
    config: RrtConfig,
}

impl<'a> RrtPlanner<'a> {
    pub fn new(grid: &'a OccupancyGrid, config: RrtConfig) -> Self {
        Self { grid, config }
    }

    pub fn config(&self) -> &RrtConfig {
        &self.config
    }

    /// Is the straight segment from `from` to `to` collision-free?
    ///
    /// `from` must already be a free state; calling this on a colliding
    /// `from` is a programming error and panics. `to` is checked first,
    /// then the fractions i/10 of the segment for i in 0..10.
    pub fn segment_is_free(&self, from: &GridState, to: &GridState) -> bool {
        assert!(
            self.grid.is_free_region(from),
            "segment_is_free called with colliding from state ({}, {})",
            from.x,
            from.y
        );

        if !self.grid.is_free_region(to) {
            return false;
        }

        for i in 0..SEGMENT_CHECKS {
            let t = i as f64 / SEGMENT_CHECKS as f64;
            let x = from.x as f64 + t * (to.x - from.x) as f64;
            let y = from.y as f64 + t * (to.y - from.y) as f64;
            if !self.grid.is_free_region(&GridState::new(x as i32, y as i32)) {
                return false;
            }
        }
        true
    }

    /// Plan without an observer
    pub fn plan(
        &self,
        start: GridState,
        dest: GridState,
        sampler: &mut dyn StateSampler,
    ) -> PlannerResult<RrtPlan> {
        self.plan_with_observer(start, dest, sampler, None)
    }

    /// Grow the tree from `start` until `dest` is reached or the step
    /// budget is exhausted.
    ///
    /// Budget exhaustion is a normal outcome reported as
    /// `PlanOutcome::Exhausted` with the singleton path `[start]`; only
    /// precondition violations (start or destination in collision) and
    /// invalid parameters produce an `Err`.
    pub fn plan_with_observer(
        &self,
        start: GridState,
        dest: GridState,
        sampler: &mut dyn StateSampler,
        mut observer: Option<&mut dyn TreeObserver>,
    ) -> PlannerResult<RrtPlan> {
        if self.config.max_steering_radius <= 0.0 {
            return Err(PlannerError::InvalidParameter(
                "max_steering_radius must be positive".to_string(),
            ));
        }
        if !self.grid.is_free_region(&start) {
            return Err(PlannerError::PreconditionViolated(format!(
                "start state ({}, {}) is not in free space",
                start.x, start.y
            )));
        }
        if !self.grid.is_free_region(&dest) {
            return Err(PlannerError::PreconditionViolated(format!(
                "destination state ({}, {}) is not in free space",
                dest.x, dest.y
            )));
        }

        let mut tree = RrtTree::new(start);
        let mut outcome = PlanOutcome::Exhausted;
        let mut path = GridPath::from_states(vec![start]);

        for _step in 0..self.config.max_num_steps {
            let random_state = sampler.sample_state();
            let nearest_index = tree.nearest(&random_state);
            let nearest_state = tree.node(nearest_index).state;
            let candidate =
                steer_towards(&nearest_state, &random_state, self.config.max_steering_radius);

            if self.segment_is_free(&nearest_state, &candidate) {
                let candidate_index = tree.add_child(nearest_index, candidate);

                if candidate.distance(&dest) < self.config.dest_reached_radius {
                    let dest_index = tree.add_child(candidate_index, dest);
                    path = follow_parent_pointers(&tree, dest_index);
                    outcome = PlanOutcome::Succeeded;
                    if let Some(obs) = observer.as_mut() {
                        obs.on_iteration(&tree, &candidate);
                    }
                    break;
                }
            }

            if let Some(obs) = observer.as_mut() {
                obs.on_iteration(&tree, &candidate);
            }
        }

        Ok(RrtPlan { outcome, path, tree })
    }
}
