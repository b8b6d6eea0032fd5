//! Binary occupancy grid built from a raster map image
//!
//! A cell is occupied iff the first channel of the source pixel is 0
//! (black). The grid is immutable once constructed; the planner only
//! ever queries it.

use itertools::iproduct;
use nalgebra::DMatrix;
use std::path::Path;

use crate::common::{GridState, PlannerError, PlannerResult};

/// Half-window offsets for the free-region test: a 4x4 neighborhood
/// spanning rows y-2..=y+1 and cols x-2..=x+1.
const REGION_OFFSETS: std::ops::RangeInclusive<i32> = -2..=1;

/// 2D binary occupancy grid.
///
/// Stored as a `DMatrix<u8>` indexed `(row, col)` = `(y, x)`, with 1
/// marking an occupied cell and 0 a free cell.
pub struct OccupancyGrid {
    occ: DMatrix<u8>,
    width: usize,
    height: usize,
}

impl OccupancyGrid {
    /// Build a grid from an occupancy matrix (nonzero = occupied)
    pub fn from_matrix(occ: DMatrix<u8>) -> Self {
        let height = occ.nrows();
        let width = occ.ncols();
        Self { occ, width, height }
    }

    /// Build an all-free grid of the given dimensions
    pub fn open(width: usize, height: usize) -> Self {
        Self::from_matrix(DMatrix::zeros(height, width))
    }

    /// Load a map image and threshold its first channel to binary
    /// occupancy: intensity 0 is occupied, anything else is free.
    pub fn from_image<P: AsRef<Path>>(path: P) -> PlannerResult<Self> {
        let img = image::open(path)?.to_rgb8();
        let (width, height) = img.dimensions();
        if width == 0 || height == 0 {
            return Err(PlannerError::MapError("map image is empty".to_string()));
        }
        let occ = DMatrix::from_fn(height as usize, width as usize, |row, col| {
            if img.get_pixel(col as u32, row as u32)[0] == 0 {
                1
            } else {
                0
            }
        });
        Ok(Self::from_matrix(occ))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Is the single cell at (x, y) occupied? Out-of-bounds cells
    /// report occupied.
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        if !self.in_bounds(x, y) {
            return true;
        }
        self.occ[(y as usize, x as usize)] != 0
    }

    /// Free-region test over the 4x4 neighborhood of (x, y).
    ///
    /// Returns true iff (x, y) is in bounds and no in-bounds cell of the
    /// neighborhood is occupied. Neighborhood cells falling outside the
    /// grid are ignored, so states near the border remain usable; a
    /// center outside the grid is never free.
    pub fn is_free_region(&self, state: &GridState) -> bool {
        if !self.in_bounds(state.x, state.y) {
            return false;
        }
        iproduct!(REGION_OFFSETS, REGION_OFFSETS).all(|(dy, dx)| {
            let (nx, ny) = (state.x + dx, state.y + dy);
            !self.in_bounds(nx, ny) || self.occ[(ny as usize, nx as usize)] == 0
        })
    }
}
