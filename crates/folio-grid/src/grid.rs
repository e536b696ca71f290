//! The tile grid: tiles, order and configuration in one place.
//!
//! [`TileGrid`] holds every input of the placement pass and hands out a
//! [`GridLayout`] computed from a single snapshot of them. The layout is
//! cached and rebuilt only after an input changes.

use std::fmt;

use folio_core::math::Vec2;
use folio_core::profiling::profile_function;
use indexmap::IndexMap;
use rand::Rng;

use crate::config::{Breakpoint, ConfigError, GridConfig, ResponsiveGridConfig};
use crate::drag::{DragEvent, DragState};
use crate::insertion_zone::{InsertionZone, ZoneSide, ZoneStyle, generate_zones, zone_at};
use crate::placement::{PlacedTile, place};
use crate::reorder::{ReorderController, TileMove};
use crate::tile::{Tile, TileId};

/// Error types for grid input changes.
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// The same id was supplied for two tiles.
    DuplicateTileId(TileId),
    /// The configuration failed validation.
    Config(ConfigError),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::DuplicateTileId(id) => write!(f, "Tile {} supplied more than once", id),
            GridError::Config(err) => write!(f, "Invalid grid config: {}", err),
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GridError::Config(err) => Some(err),
            GridError::DuplicateTileId(_) => None,
        }
    }
}

impl From<ConfigError> for GridError {
    fn from(err: ConfigError) -> Self {
        GridError::Config(err)
    }
}

/// Result type for grid input changes.
pub type GridResult<T> = Result<T, GridError>;

/// Everything the renderer needs for one frame of the grid.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GridLayout {
    pub breakpoint: Breakpoint,
    pub columns: usize,
    /// Placed tiles in display order.
    pub tiles: Vec<PlacedTile>,
    pub zones: Vec<InsertionZone>,
    pub content_height: f32,
}

/// Input versions a cached layout was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LayoutKey {
    order_version: u32,
    input_version: u32,
}

/// A grid of tiles with drag reordering.
///
/// # Example
/// ```
/// use folio_grid::{Tile, TileGrid, TileId, TileSizeClass};
///
/// let mut grid = TileGrid::new(vec![
///     Tile::new("about", TileSizeClass::Small, "About me"),
///     Tile::new("projects", TileSizeClass::Large, "Projects"),
/// ])
/// .unwrap();
/// grid.set_viewport_width(1280.0);
/// grid.set_container_width(1200.0);
///
/// grid.handle_drag(folio_grid::DragEvent::Start(TileId::new("projects")));
/// grid.handle_drag(folio_grid::DragEvent::Drop { insert_index: 0 });
///
/// let layout = grid.layout();
/// assert_eq!(layout.tiles[0].id, TileId::new("projects"));
/// ```
#[derive(Debug, Clone)]
pub struct TileGrid<P = ()> {
    tiles: IndexMap<TileId, Tile<P>>,
    controller: ReorderController,
    config: ResponsiveGridConfig,
    zone_style: ZoneStyle,
    viewport_width: f32,
    container_width: f32,
    /// Bumped when tiles, config, widths or zone style change.
    input_version: u32,
    cache: Option<(LayoutKey, GridLayout)>,
}

impl<P> TileGrid<P> {
    /// Create a grid with the stock responsive config.
    pub fn new(tiles: Vec<Tile<P>>) -> GridResult<Self> {
        Self::with_config(tiles, ResponsiveGridConfig::standard())
    }

    /// Create a grid with a custom responsive config.
    pub fn with_config(tiles: Vec<Tile<P>>, config: ResponsiveGridConfig) -> GridResult<Self> {
        config.validate()?;
        let tiles = index_tiles(tiles)?;
        let controller = ReorderController::new(tiles.keys().copied());
        Ok(Self {
            tiles,
            controller,
            config,
            zone_style: ZoneStyle::default(),
            viewport_width: 0.0,
            container_width: 0.0,
            input_version: 0,
            cache: None,
        })
    }

    fn touch(&mut self) {
        self.input_version = self.input_version.wrapping_add(1);
    }

    /// Replace the tile set, keeping the order of tiles that survive.
    ///
    /// Payloads of surviving ids are replaced by the new ones.
    pub fn set_tiles(&mut self, tiles: Vec<Tile<P>>) -> GridResult<()> {
        let tiles = index_tiles(tiles)?;
        let ids: Vec<TileId> = tiles.keys().copied().collect();
        self.tiles = tiles;
        self.controller.reconcile(&ids);
        self.touch();
        Ok(())
    }

    /// Replace the responsive config.
    pub fn set_config(&mut self, config: ResponsiveGridConfig) -> GridResult<()> {
        config.validate()?;
        if self.config != config {
            self.config = config;
            self.touch();
        }
        Ok(())
    }

    pub fn set_zone_style(&mut self, style: ZoneStyle) {
        if self.zone_style != style {
            self.zone_style = style;
            self.touch();
        }
    }

    /// Window width, used to pick the breakpoint.
    pub fn set_viewport_width(&mut self, width: f32) {
        if self.viewport_width != width {
            self.viewport_width = width;
            self.touch();
        }
    }

    /// Width of the grid container, used for the column count.
    pub fn set_container_width(&mut self, width: f32) {
        if self.container_width != width {
            self.container_width = width;
            self.touch();
        }
    }

    pub fn tile(&self, id: TileId) -> Option<&Tile<P>> {
        self.tiles.get(&id)
    }

    /// Tiles in the order they were supplied.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile<P>> {
        self.tiles.values()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn order(&self) -> &[TileId] {
        self.controller.order()
    }

    pub fn controller(&self) -> &ReorderController {
        &self.controller
    }

    pub fn drag_state(&self) -> &DragState {
        self.controller.drag_state()
    }

    pub fn zone_style(&self) -> &ZoneStyle {
        &self.zone_style
    }

    /// Breakpoint and config for the current viewport width.
    pub fn active_config(&self) -> (Breakpoint, &GridConfig) {
        self.config.resolve(self.viewport_width)
    }

    /// Feed one drag-session signal.
    pub fn handle_drag(&mut self, event: DragEvent) -> Option<TileMove> {
        self.controller.handle(event)
    }

    /// Report the zone under the pointer as hovered, if any.
    ///
    /// Returns the hovered insert index and side.
    pub fn hover_at(&mut self, point: Vec2) -> Option<(usize, ZoneSide)> {
        if !self.controller.is_dragging() {
            return None;
        }
        let style = self.zone_style;
        let (insert_index, side) = {
            let zone = zone_at(&self.layout().zones, point, &style)?;
            (zone.insert_index, zone.side)
        };
        self.controller.on_zone_hover(insert_index, side);
        Some((insert_index, side))
    }

    pub fn move_tile(&mut self, tile: TileId, insert_index: usize) -> Option<TileMove> {
        self.controller.move_tile(tile, insert_index)
    }

    pub fn shuffle(&mut self) -> bool {
        self.controller.shuffle()
    }

    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        self.controller.shuffle_with(rng)
    }

    pub fn reset(&mut self) -> bool {
        self.controller.reset()
    }

    fn key(&self) -> LayoutKey {
        LayoutKey {
            order_version: self.controller.version(),
            input_version: self.input_version,
        }
    }

    /// Current layout, rebuilt if any input changed since the last call.
    pub fn layout(&mut self) -> &GridLayout {
        let key = self.key();
        let entry = match self.cache.take() {
            Some((cached, layout)) if cached == key => (cached, layout),
            _ => (key, self.compute_layout()),
        };
        &self.cache.insert(entry).1
    }

    /// Build a layout from the current inputs without touching the cache.
    pub fn compute_layout(&self) -> GridLayout {
        profile_function!();

        let (breakpoint, config) = self.active_config();
        let tiles: Vec<&Tile<P>> = self.tiles.values().collect();
        let placement = place(&tiles, self.controller.order(), config, self.container_width);
        let zones = generate_zones(&placement.tiles, &self.zone_style);

        tracing::debug!(
            "Grid layout rebuilt: {} tiles, {} zones, {} columns at {}",
            placement.tiles.len(),
            zones.len(),
            placement.columns,
            breakpoint
        );

        GridLayout {
            breakpoint,
            columns: placement.columns,
            tiles: placement.tiles,
            zones,
            content_height: placement.content_height,
        }
    }
}

fn index_tiles<P>(tiles: Vec<Tile<P>>) -> GridResult<IndexMap<TileId, Tile<P>>> {
    let mut indexed = IndexMap::with_capacity(tiles.len());
    for tile in tiles {
        let id = tile.id;
        if indexed.insert(id, tile).is_some() {
            tracing::warn!("Rejected tile set: {} appears twice", id);
            return Err(GridError::DuplicateTileId(id));
        }
    }
    Ok(indexed)
}
