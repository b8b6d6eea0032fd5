//! Visualization utilities for rrt_planner
//!
//! Renders the occupancy grid, the explored tree, and the final path
//! with gnuplot. Rendering is a side channel: nothing here feeds back
//! into the planner.

use gnuplot::{AutoOption, AxesCommon, Caption, Color, Figure, LineWidth, PointSize, PointSymbol};

use crate::common::{GridPath, GridState, PlannerError, PlannerResult, TreeObserver};
use crate::mapping::OccupancyGrid;
use crate::path_planning::RrtTree;

/// Color palette for consistent styling
pub mod colors {
    pub const OBSTACLE: &str = "#000000";
    pub const TREE: &str = "#9090FF";
    pub const PATH: &str = "#FF0000";
    pub const START: &str = "#00FF00";
    pub const GOAL: &str = "#0000FF";
}

/// Plot of one planning run over a grid map
pub struct PlanVisualizer {
    figure: Figure,
    title: String,
}

impl PlanVisualizer {
    pub fn new(title: &str) -> Self {
        Self {
            figure: Figure::new(),
            title: title.to_string(),
        }
    }

    /// Draw occupied cells, every tree edge, the final path, and the
    /// start/destination markers. Image coordinates: y grows downward.
    pub fn draw(
        &mut self,
        grid: &OccupancyGrid,
        tree: &RrtTree,
        path: &GridPath,
        start: GridState,
        dest: GridState,
    ) -> &mut Self {
        let mut ox = Vec::new();
        let mut oy = Vec::new();
        for y in 0..grid.height() as i32 {
            for x in 0..grid.width() as i32 {
                if grid.is_occupied(x, y) {
                    ox.push(x as f64);
                    oy.push(y as f64);
                }
            }
        }

        let axes = self.figure.axes2d();
        axes.set_title(&self.title, &[]);
        axes.set_x_label("x [px]", &[]);
        axes.set_y_label("y [px]", &[]);
        axes.set_x_range(AutoOption::Fix(0.0), AutoOption::Fix(grid.width() as f64));
        // flip y so the plot matches image orientation
        axes.set_y_range(AutoOption::Fix(grid.height() as f64), AutoOption::Fix(0.0));
        axes.set_aspect_ratio(AutoOption::Fix(1.0));

        axes.points(
            &ox,
            &oy,
            &[
                Caption("Obstacles"),
                Color(colors::OBSTACLE),
                PointSymbol('S'),
                PointSize(0.4),
            ],
        );

        for (from, to) in tree.edges() {
            axes.lines(
                &[from.x as f64, to.x as f64],
                &[from.y as f64, to.y as f64],
                &[Color(colors::TREE), LineWidth(1.0)],
            );
        }

        if path.len() > 1 {
            axes.lines(
                &path.x_coords(),
                &path.y_coords(),
                &[Caption("Path"), Color(colors::PATH), LineWidth(2.0)],
            );
        }

        axes.points(
            &[start.x as f64],
            &[start.y as f64],
            &[
                Caption("Start"),
                Color(colors::START),
                PointSymbol('O'),
                PointSize(1.5),
            ],
        );
        axes.points(
            &[dest.x as f64],
            &[dest.y as f64],
            &[
                Caption("Destination"),
                Color(colors::GOAL),
                PointSymbol('O'),
                PointSize(1.5),
            ],
        );

        self
    }

    /// Save the figure to a PNG file
    pub fn save_png(&mut self, path: &str, width: u32, height: u32) -> PlannerResult<()> {
        self.figure
            .save_to_png(path, width, height)
            .map_err(|e| PlannerError::VisualizationError(e.to_string()))
    }

    /// Show the figure in a gnuplot window
    pub fn show(&mut self) -> PlannerResult<()> {
        self.figure
            .show()
            .map(|_| ())
            .map_err(|e| PlannerError::VisualizationError(e.to_string()))
    }
}

/// Observer recording tree growth per iteration.
///
/// Keeps the tree size and candidate of every iteration so a run can be
/// inspected or replayed after planning finishes.
#[derive(Debug, Default)]
pub struct GrowthRecorder {
    pub tree_sizes: Vec<usize>,
    pub candidates: Vec<GridState>,
}

impl GrowthRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iterations(&self) -> usize {
        self.candidates.len()
    }
}

impl TreeObserver for GrowthRecorder {
    fn on_iteration(&mut self, tree: &RrtTree, candidate: &GridState) {
        self.tree_sizes.push(tree.len());
        self.candidates.push(*candidate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_growth_recorder_tracks_iterations() {
        let mut recorder = GrowthRecorder::new();
        let mut tree = RrtTree::new(GridState::new(0, 0));
        recorder.on_iteration(&tree, &GridState::new(1, 1));
        tree.add_child(0, GridState::new(1, 1));
        recorder.on_iteration(&tree, &GridState::new(2, 2));

        assert_eq!(recorder.iterations(), 2);
        assert_eq!(recorder.tree_sizes, vec![1, 2]);
        assert_eq!(recorder.candidates[1], GridState::new(2, 2));
    }
}
