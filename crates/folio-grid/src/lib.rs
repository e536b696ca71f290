//! Folio Grid - tile placement and drag reordering for the desktop grid
//!
//! This crate lays out a set of tiles on a coarse grid and lets the user
//! reorder them by dragging:
//! - First-fit bin packing over a row-major occupancy grid
//! - Responsive per-breakpoint grid configuration
//! - Drop zones on every side of every tile, with pointer hit testing
//! - A single owner of the tile order with transactional updates
//!
//! Rendering, pointer tracking and persistence are left to the host.
//!
//! ## Quick Start
//!
//! ```rust
//! use folio_grid::{DragEvent, Tile, TileGrid, TileId, TileSizeClass};
//!
//! let mut grid = TileGrid::new(vec![
//!     Tile::bare("about", TileSizeClass::Small),
//!     Tile::bare("projects", TileSizeClass::Large),
//!     Tile::bare("contact", TileSizeClass::Medium),
//! ])
//! .unwrap();
//! grid.set_viewport_width(1440.0);
//! grid.set_container_width(1280.0);
//!
//! // Forward drag-session signals from the host.
//! grid.handle_drag(DragEvent::Start(TileId::new("contact")));
//! grid.handle_drag(DragEvent::Drop { insert_index: 0 });
//!
//! let layout = grid.layout();
//! assert_eq!(layout.tiles[0].id, TileId::new("contact"));
//! assert_eq!(layout.zones.len(), 3 * 4 + 2);
//! ```

pub mod config;
pub mod drag;
pub mod grid;
pub mod insertion_zone;
pub mod occupancy;
pub mod placement;
pub mod reorder;
pub mod tile;

pub use config::{
    Breakpoint, BreakpointPolicy, ConfigError, ConfigResult, GridConfig, ResponsiveGridConfig,
    TileDimensions,
};
pub use drag::{DragEvent, DragState};
pub use grid::{GridError, GridLayout, GridResult, TileGrid};
pub use insertion_zone::{
    DEFAULT_HIT_TOLERANCE, DEFAULT_ZONE_OFFSET, DEFAULT_ZONE_THICKNESS, InsertionZone, ZoneKind,
    ZoneOrientation, ZoneSide, ZoneStyle, generate_zones, zone_at,
};
pub use occupancy::OccupancyGrid;
pub use placement::{PlacedTile, Placement, apply_order, place};
pub use reorder::{ReorderController, TileMove, move_in_order, reconcile_order};
pub use tile::{Tile, TileId, TileShape, TileSizeClass};

// Re-export common types from dependencies
pub use folio_core::geometry::Rect;
pub use folio_core::math::Vec2;
