//! Occupancy bookkeeping under arbitrary write sequences.

use pipeworks_core::{Cell, ColorId, Coords, GridDims, PipeShape};
use pipeworks_grid::{grid_fingerprint, VoxelGrid};
use proptest::prelude::*;

fn arb_cell() -> impl Strategy<Value = Cell> {
    (0usize..16, 0u16..4).prop_map(|(shape, color)| {
        if shape == 15 {
            Cell::EMPTY
        } else {
            Cell::pipe(PipeShape::ALL_PIPES[shape], ColorId(color))
        }
    })
}

proptest! {
    #[test]
    fn occupied_count_matches_a_full_scan(
        writes in prop::collection::vec(((-1i32..5, -1i32..5, -1i32..5), arb_cell()), 0..64)
    ) {
        let mut grid = VoxelGrid::new(GridDims::new(4, 4, 4)).unwrap();
        for ((x, y, z), cell) in writes {
            grid.set(Coords::new(x, y, z), cell);
        }
        let scanned = grid.iter_occupied().count();
        prop_assert_eq!(grid.occupied_count(), scanned);
        prop_assert_eq!(grid.is_full(), scanned == grid.cell_count());
    }

    #[test]
    fn clear_restores_the_empty_fingerprint(
        writes in prop::collection::vec(((0i32..3, 0i32..3, 0i32..3), arb_cell()), 1..32)
    ) {
        let mut grid = VoxelGrid::new(GridDims::new(3, 3, 3)).unwrap();
        let empty = grid_fingerprint(&grid);
        for ((x, y, z), cell) in writes {
            grid.set(Coords::new(x, y, z), cell);
        }
        grid.clear();
        prop_assert_eq!(grid_fingerprint(&grid), empty);
    }
}
