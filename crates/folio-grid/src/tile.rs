//! Tile identity and size classes.

use std::fmt;

/// A stable identifier for a tile that survives reorders.
///
/// Identity, not position: the grid never synthesizes or discards ids, it
/// only changes their order.
///
/// # Example
/// ```
/// use folio_grid::TileId;
///
/// let about = TileId::new("about");
/// assert_eq!(about, TileId::from("about"));
/// assert_ne!(about, TileId::new("projects"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TileId(u64);

impl TileId {
    /// Create a tile ID from a string key.
    ///
    /// Uses FNV-1a so the same key always yields the same id.
    pub fn new(key: &str) -> Self {
        Self(Self::hash_str(key))
    }

    /// Create a tile ID from a raw integer.
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw u64 value.
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    fn hash_str(s: &str) -> u64 {
        const FNV_OFFSET_BASIS: u64 = 0xcbf29ce484222325;
        const FNV_PRIME: u64 = 0x100000001b3;

        s.as_bytes().iter().fold(FNV_OFFSET_BASIS, |hash, byte| {
            (hash ^ *byte as u64).wrapping_mul(FNV_PRIME)
        })
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tile#{:016x}", self.0)
    }
}

impl From<&str> for TileId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<u64> for TileId {
    fn from(id: u64) -> Self {
        Self::from_raw(id)
    }
}

/// Size class of a tile. The active [`GridConfig`](crate::GridConfig) maps
/// each class to a footprint in cells and a pixel box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileSizeClass {
    #[default]
    Small,
    Medium,
    Large,
}

impl TileSizeClass {
    pub const ALL: [TileSizeClass; 3] = [Self::Small, Self::Medium, Self::Large];

    pub fn label(&self) -> &'static str {
        match self {
            TileSizeClass::Small => "small",
            TileSizeClass::Medium => "medium",
            TileSizeClass::Large => "large",
        }
    }
}

impl fmt::Display for TileSizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A unit of content on the grid.
///
/// `payload` belongs to the rendering layer and is never inspected here.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile<P = ()> {
    pub id: TileId,
    pub size: TileSizeClass,
    pub payload: P,
}

impl<P> Tile<P> {
    pub fn new(id: impl Into<TileId>, size: TileSizeClass, payload: P) -> Self {
        Self {
            id: id.into(),
            size,
            payload,
        }
    }
}

impl Tile<()> {
    /// A tile without payload, handy for layout-only callers.
    pub fn bare(id: impl Into<TileId>, size: TileSizeClass) -> Self {
        Self::new(id, size, ())
    }
}

/// Anything the placement pass can lay out: an id and a size class.
pub trait TileShape {
    fn tile_id(&self) -> TileId;
    fn size_class(&self) -> TileSizeClass;
}

impl<P> TileShape for Tile<P> {
    fn tile_id(&self) -> TileId {
        self.id
    }

    fn size_class(&self) -> TileSizeClass {
        self.size
    }
}

impl<T: TileShape + ?Sized> TileShape for &T {
    fn tile_id(&self) -> TileId {
        (**self).tile_id()
    }

    fn size_class(&self) -> TileSizeClass {
        (**self).size_class()
    }
}
