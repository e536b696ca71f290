//! First-fit placement of tiles on the coarse grid.
//!
//! Tiles are visited in display order and each one takes the first free
//! anchor in row-major order (smallest row, then smallest column) where its
//! footprint fits. The pass is a pure function of its inputs.

use folio_core::alloc::{HashMap, HashSet};
use folio_core::geometry::Rect;
use folio_core::profiling::profile_function;

use crate::config::GridConfig;
use crate::occupancy::OccupancyGrid;
use crate::tile::{TileId, TileShape, TileSizeClass};

/// A tile with its placement for the current order and container.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedTile {
    pub id: TileId,
    pub size: TileSizeClass,
    /// Pixel x of the top-left corner, container padding included.
    pub x: f32,
    /// Pixel y of the top-left corner, container padding included.
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub grid_row: usize,
    pub grid_col: usize,
    /// Columns occupied, clamped to the column count.
    pub grid_width: usize,
    /// Rows occupied.
    pub grid_height: usize,
    /// Position of this tile in the display order.
    pub order_index: usize,
}

impl PlacedTile {
    /// Pixel bounds.
    pub fn bounds(&self) -> Rect<f32> {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Occupied footprint in grid cells.
    pub fn cells(&self) -> Rect<usize> {
        Rect::new(self.grid_col, self.grid_row, self.grid_width, self.grid_height)
    }
}

/// Output of one placement pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Placement {
    /// Placed tiles, sorted by `order_index`.
    pub tiles: Vec<PlacedTile>,
    /// Columns available at the container width. Zero for an empty placement.
    pub columns: usize,
    /// Total pixel height of the content, container padding included.
    pub content_height: f32,
}

impl Placement {
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Rows spanned by the placed tiles.
    pub fn rows(&self) -> usize {
        self.tiles
            .iter()
            .map(|t| t.grid_row + t.grid_height)
            .max()
            .unwrap_or(0)
    }

    pub fn get(&self, id: TileId) -> Option<&PlacedTile> {
        self.tiles.iter().find(|t| t.id == id)
    }
}

/// Arrange `tiles` by `order`.
///
/// Ids in `order` without a tile are skipped, repeated ids in `order` count
/// once, and tiles whose id is missing from `order` follow at the end in
/// their original relative order.
pub fn apply_order<'a, T: TileShape>(tiles: &'a [T], order: &[TileId]) -> Vec<&'a T> {
    let by_id: HashMap<TileId, &T> = tiles.iter().map(|t| (t.tile_id(), t)).collect();
    let mut seen: HashSet<TileId> = HashSet::with_capacity(tiles.len());
    let mut ordered = Vec::with_capacity(tiles.len());

    for id in order {
        if let Some(tile) = by_id.get(id)
            && seen.insert(*id)
        {
            ordered.push(*tile);
        }
    }
    for tile in tiles {
        if seen.insert(tile.tile_id()) {
            ordered.push(tile);
        }
    }
    ordered
}

/// Place `tiles` in `order` on a grid sized to `container_width`.
///
/// Never fails: an empty tile list, a non-positive container width or an
/// unusable cell size all produce an empty placement with zero height.
pub fn place<T: TileShape>(
    tiles: &[T],
    order: &[TileId],
    config: &GridConfig,
    container_width: f32,
) -> Placement {
    profile_function!();

    if tiles.is_empty() || !(container_width > 0.0) || !(config.grid_size > 0.0) {
        return Placement::default();
    }

    let columns = config.columns_for_width(container_width);
    let ordered = apply_order(tiles, order);

    // Every tile fits in row 0 once the grid is as wide as all footprints
    // side by side, so further columns never change the result.
    let total_width = ordered
        .iter()
        .map(|tile| config.dimensions(tile.size_class()).grid_width.max(1))
        .fold(0usize, usize::saturating_add);
    let mut grid = OccupancyGrid::new(columns.min(total_width), ordered.len() * 2);
    let usable_width = grid.columns() as f32 * config.grid_size;

    let mut placed = Vec::with_capacity(ordered.len());
    for (order_index, tile) in ordered.into_iter().enumerate() {
        let (id, size) = (tile.tile_id(), tile.size_class());
        let dims = config.dimensions(size);
        let grid_height = dims.grid_height.max(1);
        let requested_width = dims.grid_width.max(1);

        let (row, col, grid_width, width) = match grid.find_first_fit(requested_width, grid_height)
        {
            Some((row, col)) => (row, col, requested_width, dims.width),
            None => {
                // Wider than the grid: start a fresh band below everything.
                tracing::warn!(
                    "Tile {} ({}) needs {} columns but only {} fit, placing full width",
                    id,
                    size,
                    requested_width,
                    columns
                );
                (grid.used_rows(), 0, grid.columns(), dims.width.min(usable_width))
            }
        };

        grid.occupy(row, col, grid_width, grid_height);
        tracing::trace!(
            "Placed {} at row {} col {} ({}x{} cells)",
            id,
            row,
            col,
            grid_width,
            grid_height
        );

        placed.push(PlacedTile {
            id,
            size,
            x: col as f32 * config.grid_size + config.container_padding,
            y: row as f32 * config.grid_size + config.container_padding,
            width,
            height: dims.height,
            grid_row: row,
            grid_col: col,
            grid_width,
            grid_height,
            order_index,
        });
    }

    let content_height =
        grid.used_rows() as f32 * config.grid_size + 2.0 * config.container_padding;

    Placement {
        tiles: placed,
        columns,
        content_height,
    }
}
