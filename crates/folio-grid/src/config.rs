//! Grid configuration and breakpoint resolution.
//!
//! A [`GridConfig`] describes one responsive tier: the cell size of the
//! coarse placement grid, spacing, and the footprint of each
//! [`TileSizeClass`]. [`ResponsiveGridConfig`] bundles one config per
//! [`Breakpoint`] and picks the active one from the window width.

use std::fmt;

use crate::tile::TileSizeClass;

/// Footprint of a size class: cells on the coarse grid plus the exact pixel
/// box the renderer draws.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileDimensions {
    /// Columns occupied.
    pub grid_width: usize,
    /// Rows occupied.
    pub grid_height: usize,
    /// Pixel width of the drawn box, gaps already subtracted.
    pub width: f32,
    /// Pixel height of the drawn box, gaps already subtracted.
    pub height: f32,
}

impl TileDimensions {
    pub const fn new(grid_width: usize, grid_height: usize, width: f32, height: f32) -> Self {
        Self {
            grid_width,
            grid_height,
            width,
            height,
        }
    }

    /// Derive the pixel box from a cell footprint: `cells * grid_size - gap`.
    pub fn from_cells(grid_width: usize, grid_height: usize, grid_size: f32, gap: f32) -> Self {
        Self {
            grid_width,
            grid_height,
            width: grid_width as f32 * grid_size - gap,
            height: grid_height as f32 * grid_size - gap,
        }
    }
}

/// Configuration errors reported by [`GridConfig::validate`] and
/// [`ResponsiveGridConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Cell size must be a positive, finite number of pixels.
    NonPositiveGridSize(f32),
    /// Padding and gaps may not be negative.
    NegativeSpacing,
    /// A size class occupies zero cells in some direction.
    EmptyFootprint(TileSizeClass),
    /// A size class has a zero or negative pixel box.
    NonPositiveTileBox(TileSizeClass),
    /// The tablet threshold must be below the desktop threshold.
    UnorderedBreakpoints,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositiveGridSize(size) => {
                write!(f, "Grid size must be positive, got {}", size)
            }
            ConfigError::NegativeSpacing => write!(f, "Padding and gaps must not be negative"),
            ConfigError::EmptyFootprint(size) => {
                write!(f, "Size class '{}' occupies no grid cells", size)
            }
            ConfigError::NonPositiveTileBox(size) => {
                write!(f, "Size class '{}' has an empty pixel box", size)
            }
            ConfigError::UnorderedBreakpoints => {
                write!(f, "Tablet breakpoint must be below the desktop breakpoint")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Result type for configuration checks.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Grid configuration for one breakpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct GridConfig {
    /// Edge length of one grid cell in pixels.
    pub grid_size: f32,
    /// Inner padding the renderer applies inside each tile.
    pub tile_padding: f32,
    /// Padding between the container edge and the grid.
    pub container_padding: f32,
    /// Gap between neighbouring tiles, already folded into the pixel boxes.
    pub tile_gap: f32,
    pub small: TileDimensions,
    pub medium: TileDimensions,
    pub large: TileDimensions,
}

impl GridConfig {
    /// Build a config whose pixel boxes are derived from cell footprints.
    pub fn from_cells(
        grid_size: f32,
        tile_gap: f32,
        small: (usize, usize),
        medium: (usize, usize),
        large: (usize, usize),
    ) -> Self {
        Self {
            grid_size,
            tile_padding: 0.0,
            container_padding: 0.0,
            tile_gap,
            small: TileDimensions::from_cells(small.0, small.1, grid_size, tile_gap),
            medium: TileDimensions::from_cells(medium.0, medium.1, grid_size, tile_gap),
            large: TileDimensions::from_cells(large.0, large.1, grid_size, tile_gap),
        }
    }

    /// Phone-sized layout.
    pub fn mobile() -> Self {
        Self::from_cells(20.0, 8.0, (8, 8), (16, 8), (16, 16))
            .tile_padding(8.0)
            .container_padding(16.0)
    }

    /// Tablet-sized layout.
    pub fn tablet() -> Self {
        Self::from_cells(24.0, 12.0, (8, 8), (16, 8), (16, 16))
            .tile_padding(10.0)
            .container_padding(20.0)
    }

    /// Desktop layout: small 8x8, medium 16x8 and large 16x12 cells of 40px.
    pub fn desktop() -> Self {
        Self::from_cells(40.0, 16.0, (8, 8), (16, 8), (16, 12))
            .tile_padding(12.0)
            .container_padding(24.0)
    }

    /// Footprint of a size class.
    pub fn dimensions(&self, size: TileSizeClass) -> &TileDimensions {
        match size {
            TileSizeClass::Small => &self.small,
            TileSizeClass::Medium => &self.medium,
            TileSizeClass::Large => &self.large,
        }
    }

    /// Number of whole columns that fit in a container, never less than one.
    ///
    /// Saturates at `usize::MAX` for absurdly wide containers.
    pub fn columns_for_width(&self, container_width: f32) -> usize {
        if self.grid_size <= 0.0 || !self.grid_size.is_finite() {
            return 1;
        }
        let usable = container_width - 2.0 * self.container_padding;
        let columns = (usable / self.grid_size).floor();
        if columns >= 1.0 {
            columns as usize
        } else {
            1
        }
    }

    /// Check the config for values the placement pass cannot use.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.grid_size <= 0.0 || !self.grid_size.is_finite() {
            return Err(ConfigError::NonPositiveGridSize(self.grid_size));
        }
        // Written as negated `>=` so NaN is rejected too.
        if !(self.tile_padding >= 0.0 && self.container_padding >= 0.0 && self.tile_gap >= 0.0) {
            return Err(ConfigError::NegativeSpacing);
        }
        for size in TileSizeClass::ALL {
            let dims = self.dimensions(size);
            if dims.grid_width == 0 || dims.grid_height == 0 {
                return Err(ConfigError::EmptyFootprint(size));
            }
            if !(dims.width > 0.0 && dims.height > 0.0) {
                return Err(ConfigError::NonPositiveTileBox(size));
            }
        }
        Ok(())
    }

    /// Set the cell size. Existing pixel boxes are left as they are.
    pub fn grid_size(mut self, size: f32) -> Self {
        self.grid_size = size;
        self
    }

    /// Set the per-tile inner padding.
    pub fn tile_padding(mut self, padding: f32) -> Self {
        self.tile_padding = padding;
        self
    }

    /// Set the container padding.
    pub fn container_padding(mut self, padding: f32) -> Self {
        self.container_padding = padding;
        self
    }

    /// Set the inter-tile gap.
    pub fn tile_gap(mut self, gap: f32) -> Self {
        self.tile_gap = gap;
        self
    }

    /// Replace the footprint of one size class.
    pub fn size(mut self, size: TileSizeClass, dimensions: TileDimensions) -> Self {
        match size {
            TileSizeClass::Small => self.small = dimensions,
            TileSizeClass::Medium => self.medium = dimensions,
            TileSizeClass::Large => self.large = dimensions,
        }
        self
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::desktop()
    }
}

/// Responsive width tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Breakpoint {
    Mobile,
    Tablet,
    #[default]
    Desktop,
}

impl Breakpoint {
    pub const ALL: [Breakpoint; 3] = [Self::Mobile, Self::Tablet, Self::Desktop];
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Breakpoint::Mobile => "mobile",
            Breakpoint::Tablet => "tablet",
            Breakpoint::Desktop => "desktop",
        })
    }
}

/// Window-width thresholds separating the tiers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreakpointPolicy {
    /// Smallest window width treated as a tablet.
    pub tablet_min_width: f32,
    /// Smallest window width treated as a desktop.
    pub desktop_min_width: f32,
}

impl Default for BreakpointPolicy {
    fn default() -> Self {
        Self {
            tablet_min_width: 768.0,
            desktop_min_width: 1024.0,
        }
    }
}

impl BreakpointPolicy {
    /// Classify a window width.
    pub fn breakpoint_for(&self, window_width: f32) -> Breakpoint {
        if window_width >= self.desktop_min_width {
            Breakpoint::Desktop
        } else if window_width >= self.tablet_min_width {
            Breakpoint::Tablet
        } else {
            Breakpoint::Mobile
        }
    }
}

/// One [`GridConfig`] per breakpoint plus the policy choosing between them.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponsiveGridConfig {
    pub policy: BreakpointPolicy,
    pub mobile: GridConfig,
    pub tablet: GridConfig,
    pub desktop: GridConfig,
}

impl ResponsiveGridConfig {
    /// Use the same config at every breakpoint.
    pub fn uniform(config: GridConfig) -> Self {
        Self {
            policy: BreakpointPolicy::default(),
            mobile: config.clone(),
            tablet: config.clone(),
            desktop: config,
        }
    }

    /// The stock mobile/tablet/desktop tiers.
    pub fn standard() -> Self {
        Self {
            policy: BreakpointPolicy::default(),
            mobile: GridConfig::mobile(),
            tablet: GridConfig::tablet(),
            desktop: GridConfig::desktop(),
        }
    }

    pub fn for_breakpoint(&self, breakpoint: Breakpoint) -> &GridConfig {
        match breakpoint {
            Breakpoint::Mobile => &self.mobile,
            Breakpoint::Tablet => &self.tablet,
            Breakpoint::Desktop => &self.desktop,
        }
    }

    /// Resolve the active tier and its config for a window width.
    pub fn resolve(&self, window_width: f32) -> (Breakpoint, &GridConfig) {
        let breakpoint = self.policy.breakpoint_for(window_width);
        (breakpoint, self.for_breakpoint(breakpoint))
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.policy.tablet_min_width >= self.policy.desktop_min_width {
            return Err(ConfigError::UnorderedBreakpoints);
        }
        for breakpoint in Breakpoint::ALL {
            self.for_breakpoint(breakpoint).validate()?;
        }
        Ok(())
    }

    /// Set the breakpoint policy.
    pub fn policy(mut self, policy: BreakpointPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replace the config of one tier.
    pub fn with(mut self, breakpoint: Breakpoint, config: GridConfig) -> Self {
        match breakpoint {
            Breakpoint::Mobile => self.mobile = config,
            Breakpoint::Tablet => self.tablet = config,
            Breakpoint::Desktop => self.desktop = config,
        }
        self
    }
}

impl Default for ResponsiveGridConfig {
    fn default() -> Self {
        Self::standard()
    }
}
