//! Grid fingerprinting.
//!
//! FNV-1a over the grid extents and every cell. Not cryptographic; it
//! exists so two runs can be compared for equality cheaply.

use crate::grid::VoxelGrid;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_bytes(mut hash: u64, bytes: &[u8]) -> u64 {
    for &b in bytes {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// Hash the grid's extents and contents.
///
/// Each cell contributes its shape ordinal and its color (as 2 LE bytes).
/// Empty cells contribute only the ordinal `0`, so the color left behind
/// in an unwritten cell never affects the result.
pub fn grid_fingerprint(grid: &VoxelGrid) -> u64 {
    let dims = grid.dims();
    let mut hash = FNV_OFFSET;
    hash = fnv1a_bytes(hash, &dims.width.to_le_bytes());
    hash = fnv1a_bytes(hash, &dims.height.to_le_bytes());
    hash = fnv1a_bytes(hash, &dims.length.to_le_bytes());

    for cell in grid.as_slice() {
        hash = fnv1a_byte(hash, cell.shape.ordinal());
        if !cell.is_empty() {
            hash = fnv1a_bytes(hash, &cell.color.0.to_le_bytes());
        }
    }
    hash
}
