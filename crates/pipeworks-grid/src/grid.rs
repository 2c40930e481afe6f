//! The voxel grid store.

use crate::error::GridError;
use pipeworks_core::{Cell, Coords, GridDims};

/// Result of an explicit bounds-aware lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Probe {
    /// The coordinate is inside the grid and holds this cell.
    InRange(Cell),
    /// The coordinate is outside the grid.
    OutOfBounds,
}

impl Probe {
    /// Whether a walker may enter: in range and empty.
    pub fn is_free(self) -> bool {
        matches!(self, Probe::InRange(c) if c.is_empty())
    }

    /// The cell, if in range.
    pub fn cell(self) -> Option<Cell> {
        match self {
            Probe::InRange(c) => Some(c),
            Probe::OutOfBounds => None,
        }
    }
}

/// A fixed-size 3D array of [`Cell`]s.
///
/// Storage is a flat `Vec` indexed by `x + y*width + z*width*height`, so
/// X varies fastest and Z slowest. Extents never change after
/// construction.
///
/// Two accessors read cells. [`get`](VoxelGrid::get) never fails and
/// answers out-of-range coordinates with [`Cell::OUT_OF_BOUNDS`], a
/// non-empty cell, so "occupied" and "off the edge" look the same to a
/// walker. [`probe`](VoxelGrid::probe) tells the two apart.
///
/// # Examples
///
/// ```
/// use pipeworks_core::{Axis, Cell, ColorId, Coords, GridDims, PipeShape};
/// use pipeworks_grid::VoxelGrid;
///
/// let mut grid = VoxelGrid::new(GridDims::new(4, 4, 4)).unwrap();
/// let pipe = Cell::pipe(PipeShape::Straight { axis: Axis::Z }, ColorId(0));
/// grid.set(Coords::new(1, 2, 3), pipe);
/// assert_eq!(grid.get(Coords::new(1, 2, 3)), pipe);
/// assert_eq!(grid.get(Coords::new(4, 0, 0)), Cell::OUT_OF_BOUNDS);
/// assert_eq!(grid.occupied_count(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoxelGrid {
    dims: GridDims,
    cells: Vec<Cell>,
    occupied: usize,
}

impl VoxelGrid {
    /// Largest accepted extent: coordinates are `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Allocate an all-empty grid.
    ///
    /// Returns [`GridError::EmptyGrid`] if any extent is zero,
    /// [`GridError::DimensionTooLarge`] if one exceeds [`Self::MAX_DIM`],
    /// and [`GridError::CellCountOverflow`] if the volume overflows.
    pub fn new(dims: GridDims) -> Result<Self, GridError> {
        let count = Self::check_dims(dims)?;
        Ok(Self {
            dims,
            cells: vec![Cell::EMPTY; count],
            occupied: 0,
        })
    }

    /// Validate extents without allocating, returning the cell count.
    ///
    /// Applies the same rules as [`new`](VoxelGrid::new).
    pub fn check_dims(dims: GridDims) -> Result<usize, GridError> {
        if dims.width == 0 || dims.height == 0 || dims.length == 0 {
            return Err(GridError::EmptyGrid);
        }
        for (name, value) in [
            ("width", dims.width),
            ("height", dims.height),
            ("length", dims.length),
        ] {
            if value > Self::MAX_DIM {
                return Err(GridError::DimensionTooLarge {
                    name,
                    value,
                    max: Self::MAX_DIM,
                });
            }
        }
        dims.checked_cell_count().ok_or(GridError::CellCountOverflow)
    }

    /// Grid extents.
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of non-empty cells.
    pub fn occupied_count(&self) -> usize {
        self.occupied
    }

    /// Whether every cell holds a pipe.
    pub fn is_full(&self) -> bool {
        self.occupied == self.cells.len()
    }

    /// Whether `c` lies inside the grid.
    pub fn contains(&self, c: Coords) -> bool {
        self.dims.contains(c)
    }

    /// Flat storage index of `c`, or `None` when out of range.
    pub fn index_of(&self, c: Coords) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        let w = self.dims.width as usize;
        let h = self.dims.height as usize;
        Some(c.x as usize + c.y as usize * w + c.z as usize * w * h)
    }

    /// Inverse of [`index_of`](VoxelGrid::index_of).
    pub fn coords_of(&self, index: usize) -> Option<Coords> {
        if index >= self.cells.len() {
            return None;
        }
        let w = self.dims.width as usize;
        let h = self.dims.height as usize;
        // Each component is below an extent that fits i32.
        Some(Coords::new(
            (index % w) as i32,
            ((index / w) % h) as i32,
            (index / (w * h)) as i32,
        ))
    }

    /// The cell at `c`, or [`Cell::OUT_OF_BOUNDS`] outside the grid.
    pub fn get(&self, c: Coords) -> Cell {
        match self.index_of(c) {
            Some(i) => self.cells[i],
            None => Cell::OUT_OF_BOUNDS,
        }
    }

    /// Bounds-aware lookup.
    pub fn probe(&self, c: Coords) -> Probe {
        match self.index_of(c) {
            Some(i) => Probe::InRange(self.cells[i]),
            None => Probe::OutOfBounds,
        }
    }

    /// Write `cell` at `c`. Out-of-range writes are ignored.
    pub fn set(&mut self, c: Coords, cell: Cell) {
        let Some(i) = self.index_of(c) else {
            return;
        };
        let slot = &mut self.cells[i];
        match (slot.is_empty(), cell.is_empty()) {
            (true, false) => self.occupied += 1,
            (false, true) => self.occupied -= 1,
            _ => {}
        }
        *slot = cell;
    }

    /// The cell at a storage index, `None` past the end.
    pub fn cell_at(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Reset every cell to [`Cell::EMPTY`].
    pub fn clear(&mut self) {
        self.cells.fill(Cell::EMPTY);
        self.occupied = 0;
    }

    /// All cells with their coordinates, in storage order (Z outermost,
    /// then Y, then X).
    pub fn iter(&self) -> impl Iterator<Item = (Coords, Cell)> + '_ {
        let w = self.dims.width as usize;
        let h = self.dims.height as usize;
        self.cells.iter().enumerate().map(move |(i, &cell)| {
            let c = Coords::new((i % w) as i32, ((i / w) % h) as i32, (i / (w * h)) as i32);
            (c, cell)
        })
    }

    /// Non-empty cells with their coordinates, in storage order.
    pub fn iter_occupied(&self) -> impl Iterator<Item = (Coords, Cell)> + '_ {
        self.iter().filter(|(_, cell)| !cell.is_empty())
    }

    /// Raw cell storage in index order.
    pub fn as_slice(&self) -> &[Cell] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pipeworks_core::{Axis, ColorId, Orientation, PipeShape};
    use proptest::prelude::*;

    fn straight(axis: Axis) -> Cell {
        Cell::pipe(PipeShape::Straight { axis }, ColorId(1))
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn new_rejects_zero_extents() {
        for dims in [
            GridDims::new(0, 1, 1),
            GridDims::new(1, 0, 1),
            GridDims::new(1, 1, 0),
        ] {
            match VoxelGrid::new(dims) {
                Err(GridError::EmptyGrid) => {}
                other => panic!("expected EmptyGrid for {dims}, got {other:?}"),
            }
        }
    }

    #[test]
    fn new_rejects_extent_past_i32() {
        match VoxelGrid::new(GridDims::new(1, u32::MAX, 1)) {
            Err(GridError::DimensionTooLarge { name, value, .. }) => {
                assert_eq!(name, "height");
                assert_eq!(value, u32::MAX);
            }
            other => panic!("expected DimensionTooLarge, got {other:?}"),
        }
    }

    #[test]
    fn new_rejects_overflowing_volume() {
        let max = VoxelGrid::MAX_DIM;
        // 2^31-1 cubed overflows a 64-bit usize.
        match VoxelGrid::new(GridDims::new(max, max, max)) {
            Err(GridError::CellCountOverflow) => {}
            other => panic!("expected CellCountOverflow, got {other:?}"),
        }
    }

    #[test]
    fn fresh_grid_is_empty() {
        let grid = VoxelGrid::new(GridDims::default()).unwrap();
        assert_eq!(grid.cell_count(), 25 * 25 * 40);
        assert_eq!(grid.occupied_count(), 0);
        assert!(!grid.is_full());
        assert!(grid.iter().all(|(_, c)| c.is_empty()));
    }

    // ── Access ──────────────────────────────────────────────────

    #[test]
    fn get_outside_returns_sentinel() {
        let grid = VoxelGrid::new(GridDims::new(2, 3, 4)).unwrap();
        for c in [
            Coords::new(-1, 0, 0),
            Coords::new(2, 0, 0),
            Coords::new(0, 3, 0),
            Coords::new(0, 0, 4),
            Coords::new(0, 0, -1),
        ] {
            assert_eq!(grid.get(c), Cell::OUT_OF_BOUNDS, "{c}");
            assert_eq!(grid.probe(c), Probe::OutOfBounds, "{c}");
            assert!(!grid.get(c).is_empty());
        }
    }

    #[test]
    fn set_outside_is_a_noop() {
        let mut grid = VoxelGrid::new(GridDims::new(2, 2, 2)).unwrap();
        let before = grid.clone();
        grid.set(Coords::new(2, 0, 0), straight(Axis::X));
        grid.set(Coords::new(0, -1, 0), straight(Axis::Y));
        assert_eq!(grid, before);
    }

    #[test]
    fn probe_distinguishes_empty_occupied_and_outside() {
        let mut grid = VoxelGrid::new(GridDims::new(2, 2, 2)).unwrap();
        let at = Coords::new(1, 1, 1);
        assert_eq!(grid.probe(at), Probe::InRange(Cell::EMPTY));
        assert!(grid.probe(at).is_free());
        grid.set(at, straight(Axis::Z));
        assert_eq!(grid.probe(at).cell(), Some(straight(Axis::Z)));
        assert!(!grid.probe(at).is_free());
        assert!(!grid.probe(Coords::new(5, 5, 5)).is_free());
    }

    #[test]
    fn occupied_count_tracks_writes_and_clear() {
        let mut grid = VoxelGrid::new(GridDims::new(1, 1, 2)).unwrap();
        let elbow = Cell::pipe(
            PipeShape::Elbow {
                axis: Axis::Y,
                orientation: Orientation::R90,
            },
            ColorId(0),
        );
        grid.set(Coords::new(0, 0, 0), elbow);
        grid.set(Coords::new(0, 0, 0), elbow);
        assert_eq!(grid.occupied_count(), 1);
        grid.set(Coords::new(0, 0, 1), straight(Axis::X));
        assert!(grid.is_full());
        grid.set(Coords::new(0, 0, 1), Cell::EMPTY);
        assert_eq!(grid.occupied_count(), 1);
        grid.clear();
        assert_eq!(grid.occupied_count(), 0);
        assert_eq!(grid.get(Coords::new(0, 0, 0)), Cell::EMPTY);
    }

    #[test]
    fn storage_order_is_x_fastest() {
        let grid = VoxelGrid::new(GridDims::new(3, 2, 2)).unwrap();
        let coords: Vec<Coords> = grid.iter().map(|(c, _)| c).take(4).collect();
        assert_eq!(
            coords,
            [
                Coords::new(0, 0, 0),
                Coords::new(1, 0, 0),
                Coords::new(2, 0, 0),
                Coords::new(0, 1, 0),
            ]
        );
        assert_eq!(grid.index_of(Coords::new(0, 0, 1)), Some(6));
        assert_eq!(grid.coords_of(11), Some(Coords::new(2, 1, 1)));
        assert_eq!(grid.coords_of(12), None);
    }

    #[test]
    fn iter_occupied_yields_only_pipes() {
        let mut grid = VoxelGrid::new(GridDims::new(3, 3, 3)).unwrap();
        grid.set(Coords::new(2, 0, 1), straight(Axis::X));
        grid.set(Coords::new(0, 2, 0), straight(Axis::Y));
        let hits: Vec<Coords> = grid.iter_occupied().map(|(c, _)| c).collect();
        assert_eq!(hits, [Coords::new(0, 2, 0), Coords::new(2, 0, 1)]);
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn index_round_trips(w in 1u32..8, h in 1u32..8, l in 1u32..8, seed in any::<usize>()) {
            let grid = VoxelGrid::new(GridDims::new(w, h, l)).unwrap();
            let i = seed % grid.cell_count();
            let c = grid.coords_of(i).unwrap();
            prop_assert!(grid.contains(c));
            prop_assert_eq!(grid.index_of(c), Some(i));
        }
    }
}
