//! Palette and grid fixtures.

use pipeworks_core::{Cell, Coords, GridDims, Palette, Rgb};
use pipeworks_grid::VoxelGrid;

/// A palette with one color, so the first stuck or capped walk finishes
/// the run.
pub fn mono_palette() -> Palette {
    palette_of(1)
}

/// A palette of `n` gray levels named `c0`, `c1`, ...
///
/// # Panics
///
/// Panics if `n` is zero or above `u16::MAX`.
pub fn palette_of(n: usize) -> Palette {
    Palette::new((0..n).map(|i| {
        let level = (i * 255 / n.max(1)) as u8;
        (format!("c{i}"), Rgb::new(level, level, level))
    }))
    .expect("fixture palette is valid")
}

/// A grid of `dims` with `cells` pre-written.
pub fn grid_with(dims: GridDims, cells: &[(Coords, Cell)]) -> VoxelGrid {
    let mut grid = VoxelGrid::new(dims).expect("fixture dims are valid");
    for &(at, cell) in cells {
        grid.set(at, cell);
    }
    grid
}
