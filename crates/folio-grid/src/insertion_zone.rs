//! Drop targets derived from a placement.
//!
//! Every placed tile gets four thin strips just outside its bounds. Strips
//! above and to the left insert before the tile, strips below and to the
//! right insert after it. Two sentinel strips cover the very start and very
//! end of the order, so every index in `0..=len` has at least one zone.

use folio_core::geometry::Rect;
use folio_core::math::Vec2;
use folio_core::profiling::profile_function;

use crate::placement::PlacedTile;
use crate::tile::TileId;

/// Default strip thickness in pixels.
pub const DEFAULT_ZONE_THICKNESS: f32 = 4.0;
/// Default distance between a tile edge and its strips.
pub const DEFAULT_ZONE_OFFSET: f32 = 8.0;
/// Default extra hit area around a strip, per side.
pub const DEFAULT_HIT_TOLERANCE: f32 = 4.0;

/// Which side of a tile a zone sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoneSide {
    Top,
    Bottom,
    Left,
    Right,
}

impl ZoneSide {
    /// Whether dropping here inserts before the tile.
    pub fn is_before(&self) -> bool {
        matches!(self, ZoneSide::Top | ZoneSide::Left)
    }

    pub fn orientation(&self) -> ZoneOrientation {
        match self {
            ZoneSide::Top | ZoneSide::Bottom => ZoneOrientation::Horizontal,
            ZoneSide::Left | ZoneSide::Right => ZoneOrientation::Vertical,
        }
    }
}

/// Direction of the strip's long axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoneOrientation {
    Horizontal,
    Vertical,
}

/// What a zone is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoneKind {
    /// A strip beside a placed tile.
    Tile(TileId),
    /// Ahead of the first tile.
    BeforeAll,
    /// After the last tile.
    AfterAll,
}

/// A screen-space drop target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InsertionZone {
    pub kind: ZoneKind,
    pub side: ZoneSide,
    pub orientation: ZoneOrientation,
    pub bounds: Rect<f32>,
    /// Slot in the current order to insert before. A drop moves the
    /// dragged tile there, one less if the slot lies after the tile.
    pub insert_index: usize,
}

/// Geometry of the generated strips.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneStyle {
    pub thickness: f32,
    pub offset: f32,
    /// Extra grabbable area around each strip, per side.
    pub hit_tolerance: f32,
}

impl Default for ZoneStyle {
    fn default() -> Self {
        Self {
            thickness: DEFAULT_ZONE_THICKNESS,
            offset: DEFAULT_ZONE_OFFSET,
            hit_tolerance: DEFAULT_HIT_TOLERANCE,
        }
    }
}

impl ZoneStyle {
    /// Set the strip thickness.
    pub fn thickness(mut self, thickness: f32) -> Self {
        self.thickness = thickness;
        self
    }

    /// Set the distance from the tile edge.
    pub fn offset(mut self, offset: f32) -> Self {
        self.offset = offset;
        self
    }

    /// Set the hit-test tolerance.
    pub fn hit_tolerance(mut self, tolerance: f32) -> Self {
        self.hit_tolerance = tolerance;
        self
    }

    fn strip(&self, tile: &Rect<f32>, side: ZoneSide, distance: f32) -> Rect<f32> {
        let t = self.thickness;
        match side {
            ZoneSide::Top => Rect::new(tile.x, tile.y - distance, tile.width, t),
            ZoneSide::Bottom => {
                Rect::new(tile.x, tile.bottom() + distance - t, tile.width, t)
            }
            ZoneSide::Left => Rect::new(tile.x - distance, tile.y, t, tile.height),
            ZoneSide::Right => {
                Rect::new(tile.right() + distance - t, tile.y, t, tile.height)
            }
        }
    }
}

/// Generate drop zones for a placement.
///
/// `tiles` must be sorted by `order_index` with indices `0..len`, which is
/// how [`place`](crate::place) returns them.
pub fn generate_zones(tiles: &[PlacedTile], style: &ZoneStyle) -> Vec<InsertionZone> {
    profile_function!();

    let (Some(first), Some(last)) = (tiles.first(), tiles.last()) else {
        return Vec::new();
    };

    let mut zones = Vec::with_capacity(tiles.len() * 4 + 2);

    // Sentinels sit one offset further out than the tile strips.
    zones.push(InsertionZone {
        kind: ZoneKind::BeforeAll,
        side: ZoneSide::Top,
        orientation: ZoneOrientation::Horizontal,
        bounds: style.strip(&first.bounds(), ZoneSide::Top, style.offset * 2.0),
        insert_index: 0,
    });

    for (position, tile) in tiles.iter().enumerate() {
        let bounds = tile.bounds();
        for side in [ZoneSide::Top, ZoneSide::Bottom, ZoneSide::Left, ZoneSide::Right] {
            let insert_index = if side.is_before() {
                position
            } else {
                position + 1
            };
            zones.push(InsertionZone {
                kind: ZoneKind::Tile(tile.id),
                side,
                orientation: side.orientation(),
                bounds: style.strip(&bounds, side, style.offset),
                insert_index,
            });
        }
    }

    zones.push(InsertionZone {
        kind: ZoneKind::AfterAll,
        side: ZoneSide::Bottom,
        orientation: ZoneOrientation::Horizontal,
        bounds: style.strip(&last.bounds(), ZoneSide::Bottom, style.offset * 2.0),
        insert_index: tiles.len(),
    });

    zones
}

/// Find the zone under a pointer.
///
/// Each strip is inflated by the style's hit tolerance. When several
/// inflated strips contain the point, the one whose centre is nearest wins.
pub fn zone_at<'a>(
    zones: &'a [InsertionZone],
    point: Vec2,
    style: &ZoneStyle,
) -> Option<&'a InsertionZone> {
    zones
        .iter()
        .filter(|zone| zone.bounds.inflate(style.hit_tolerance).contains(point))
        .min_by(|a, b| {
            let da = a.bounds.center().distance_squared(point);
            let db = b.bounds.center().distance_squared(point);
            da.total_cmp(&db)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::TileSizeClass;

    fn placed(name: &str, order_index: usize, x: f32, y: f32) -> PlacedTile {
        PlacedTile {
            id: TileId::new(name),
            size: TileSizeClass::Small,
            x,
            y,
            width: 100.0,
            height: 100.0,
            grid_row: 0,
            grid_col: 0,
            grid_width: 1,
            grid_height: 1,
            order_index,
        }
    }

    #[test]
    fn test_no_tiles_no_zones() {
        assert!(generate_zones(&[], &ZoneStyle::default()).is_empty());
    }

    #[test]
    fn test_zone_count_and_indices() {
        let tiles = vec![placed("a", 0, 0.0, 0.0), placed("b", 1, 120.0, 0.0)];
        let zones = generate_zones(&tiles, &ZoneStyle::default());
        assert_eq!(zones.len(), 10);

        let b_zones: Vec<_> = zones
            .iter()
            .filter(|z| z.kind == ZoneKind::Tile(TileId::new("b")))
            .map(|z| (z.side, z.insert_index))
            .collect();
        assert_eq!(
            b_zones,
            vec![
                (ZoneSide::Top, 1),
                (ZoneSide::Bottom, 2),
                (ZoneSide::Left, 1),
                (ZoneSide::Right, 2),
            ]
        );

        assert_eq!(zones.first().map(|z| z.insert_index), Some(0));
        assert_eq!(zones.last().map(|z| z.insert_index), Some(2));
    }

    #[test]
    fn test_strip_geometry() {
        let tiles = vec![placed("a", 0, 50.0, 50.0)];
        let zones = generate_zones(&tiles, &ZoneStyle::default());
        let find = |kind, side| {
            zones
                .iter()
                .find(|z| z.kind == kind && z.side == side)
                .map(|z| z.bounds)
                .unwrap()
        };
        let a = ZoneKind::Tile(TileId::new("a"));

        assert_eq!(find(a, ZoneSide::Top), Rect::new(50.0, 42.0, 100.0, 4.0));
        assert_eq!(find(a, ZoneSide::Bottom), Rect::new(50.0, 154.0, 100.0, 4.0));
        assert_eq!(find(a, ZoneSide::Left), Rect::new(42.0, 50.0, 4.0, 100.0));
        assert_eq!(find(a, ZoneSide::Right), Rect::new(154.0, 50.0, 4.0, 100.0));
        assert_eq!(
            find(ZoneKind::BeforeAll, ZoneSide::Top),
            Rect::new(50.0, 34.0, 100.0, 4.0)
        );
        assert_eq!(
            find(ZoneKind::AfterAll, ZoneSide::Bottom),
            Rect::new(50.0, 162.0, 100.0, 4.0)
        );
    }

    #[test]
    fn test_orientation_follows_side() {
        assert_eq!(ZoneSide::Top.orientation(), ZoneOrientation::Horizontal);
        assert_eq!(ZoneSide::Right.orientation(), ZoneOrientation::Vertical);
        assert!(ZoneSide::Left.is_before());
        assert!(!ZoneSide::Bottom.is_before());
    }

    #[test]
    fn test_zone_at_hits_strip() {
        let tiles = vec![placed("a", 0, 50.0, 50.0), placed("b", 1, 200.0, 50.0)];
        let style = ZoneStyle::default();
        let zones = generate_zones(&tiles, &style);

        let hit = zone_at(&zones, Vec2::new(44.0, 100.0), &style).unwrap();
        assert_eq!(hit.kind, ZoneKind::Tile(TileId::new("a")));
        assert_eq!(hit.side, ZoneSide::Left);

        let hit = zone_at(&zones, Vec2::new(194.0, 100.0), &style).unwrap();
        assert_eq!(hit.kind, ZoneKind::Tile(TileId::new("b")));
        assert_eq!(hit.insert_index, 1);

        assert!(zone_at(&zones, Vec2::new(100.0, 100.0), &style).is_none());
    }

    #[test]
    fn test_zone_at_prefers_nearest_centre() {
        let tiles = vec![placed("a", 0, 50.0, 50.0)];
        let style = ZoneStyle::default().hit_tolerance(10.0);
        let zones = generate_zones(&tiles, &style);
        // Both inflated top strips contain y = 38 and y = 43. Strip centres
        // are at y = 44 (tile) and y = 36 (sentinel).
        let hit = zone_at(&zones, Vec2::new(100.0, 38.0), &style).unwrap();
        assert_eq!(hit.kind, ZoneKind::BeforeAll);
        let hit = zone_at(&zones, Vec2::new(100.0, 43.0), &style).unwrap();
        assert_eq!(hit.kind, ZoneKind::Tile(TileId::new("a")));
    }
}
