use crate::{PointPx, SizePx};

/// A square atlas of `atlas_size` pixels, divided into `tile_count x tile_count` square cells.
///
/// The cell size is `atlas_size / tile_count`, rounded down. Remaining pixels form an unused margin
/// at the right and bottom edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGrid {
    atlas_size: u32,
    tile_count: u32,
}

/// Row and column of a cell, counted from the top left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileCell {
    pub row: u32,
    pub col: u32,
}

impl TileGrid {
    pub fn new(atlas_size: u32, tile_count: u32) -> Self {
        assert!(tile_count > 0, "A tile grid needs at least one tile");
        Self {
            atlas_size,
            tile_count,
        }
    }

    pub fn atlas_size(&self) -> SizePx {
        SizePx::new(self.atlas_size, self.atlas_size)
    }

    pub fn tile_count(&self) -> u32 {
        self.tile_count
    }

    /// Number of cells in the grid.
    pub fn len(&self) -> u32 {
        self.tile_count * self.tile_count
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Width and height of a single cell in pixels.
    pub fn cell_size(&self) -> u32 {
        self.atlas_size / self.tile_count
    }

    /// Unused pixels at the right and bottom edges.
    pub fn margin(&self) -> u32 {
        self.atlas_size % self.tile_count
    }

    /// Row-major cell of the cell `index`.
    pub fn cell(&self, index: u32) -> TileCell {
        debug_assert!(index < self.len());
        TileCell {
            row: index / self.tile_count,
            col: index % self.tile_count,
        }
    }

    /// Top left pixel of the cell `index`.
    pub fn origin(&self, index: u32) -> PointPx {
        let TileCell { row, col } = self.cell(index);
        let w = self.cell_size();
        PointPx::new((col * w) as i32, (row * w) as i32)
    }

    pub fn cells(&self) -> impl Iterator<Item = (u32, TileCell)> + '_ {
        (0..self.len()).map(|index| (index, self.cell(index)))
    }
}
