// RRT planning over a raster map image.
//
// Usage: rrt_map <map_image> [start_x start_y dest_x dest_y]
//
// Black pixels (first channel 0) are obstacles, everything else is
// free. Prints the resulting plan and saves rrt_result.png with the
// explored tree and the final path.

use std::env;
use std::process;

use rrt_planner::utils::PlanVisualizer;
use rrt_planner::{
    GridState, OccupancyGrid, PlannerError, PlannerResult, RrtConfig, RrtPlanner, UniformSampler,
};

const OUTPUT_IMAGE: &str = "rrt_result.png";

fn parse_coord(arg: &str, name: &str) -> PlannerResult<i32> {
    arg.parse::<i32>()
        .map_err(|_| PlannerError::InvalidParameter(format!("{} must be an integer: {}", name, arg)))
}

fn run(args: &[String]) -> PlannerResult<()> {
    let grid = OccupancyGrid::from_image(&args[1])?;
    println!(
        "Loaded map {} ({}x{} px)",
        args[1],
        grid.width(),
        grid.height()
    );

    let (start, dest) = if args.len() >= 6 {
        (
            GridState::new(
                parse_coord(&args[2], "start_x")?,
                parse_coord(&args[3], "start_y")?,
            ),
            GridState::new(
                parse_coord(&args[4], "dest_x")?,
                parse_coord(&args[5], "dest_y")?,
            ),
        )
    } else {
        (GridState::new(400, 300), GridState::new(15, 200))
    };

    let config = RrtConfig::default();
    let planner = RrtPlanner::new(&grid, config);
    let mut sampler = UniformSampler::new(grid.width(), grid.height());

    let plan = planner.plan(start, dest, &mut sampler)?;
    if plan.succeeded() {
        println!(
            "Path found: {} states, length {:.1} px, tree size {}",
            plan.path.len(),
            plan.path.total_length(),
            plan.tree.len()
        );
        for state in &plan.path.states {
            println!("  ({}, {})", state.x, state.y);
        }
    } else {
        println!(
            "No path found within {} steps (tree size {})",
            planner.config().max_num_steps,
            plan.tree.len()
        );
    }

    let mut vis = PlanVisualizer::new("RRT plan");
    vis.draw(&grid, &plan.tree, &plan.path, start, dest);
    vis.save_png(OUTPUT_IMAGE, 800, 800)?;
    println!("RRT planning complete. Saved {}.", OUTPUT_IMAGE);

    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: rrt_map <map_image> [start_x start_y dest_x dest_y]");
        process::exit(1);
    }

    if let Err(e) = run(&args) {
        eprintln!("rrt_map: {}", e);
        process::exit(1);
    }
}
