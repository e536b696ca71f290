//! Drag lifecycle state for tile reordering.
//!
//! Pointer tracking belongs to the host; this module only records what the
//! drag session reports: which tile was picked up and which zone is lit.

use crate::insertion_zone::ZoneSide;
use crate::tile::TileId;

/// A signal from the host's drag session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEvent {
    /// A tile was picked up.
    Start(TileId),
    /// The pointer is over a drop zone.
    Hover { insert_index: usize, side: ZoneSide },
    /// The tile was released over a drop zone.
    Drop { insert_index: usize },
    /// The drag ended, with or without a drop.
    End,
}

/// Transient drag state. Neutral (`Default`) whenever no drag is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DragState {
    dragged: Option<TileId>,
    hovered_index: Option<usize>,
    hovered_side: Option<ZoneSide>,
}

impl DragState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin dragging `tile`, replacing any drag already in progress.
    pub fn start(&mut self, tile: TileId) {
        *self = Self {
            dragged: Some(tile),
            hovered_index: None,
            hovered_side: None,
        };
    }

    /// Record the highlighted zone. Ignored while idle.
    ///
    /// Returns true if there's an active drag operation.
    pub fn hover(&mut self, insert_index: usize, side: ZoneSide) -> bool {
        if self.dragged.is_none() {
            return false;
        }
        self.hovered_index = Some(insert_index);
        self.hovered_side = Some(side);
        true
    }

    /// Reset to neutral and return the tile that was being dragged.
    pub fn end(&mut self) -> Option<TileId> {
        std::mem::take(self).dragged
    }

    pub fn is_dragging(&self) -> bool {
        self.dragged.is_some()
    }

    pub fn dragged_tile(&self) -> Option<TileId> {
        self.dragged
    }

    pub fn hovered_index(&self) -> Option<usize> {
        self.hovered_index
    }

    pub fn hovered_side(&self) -> Option<ZoneSide> {
        self.hovered_side
    }

    /// Whether the given zone is the one currently highlighted.
    pub fn is_hovered(&self, insert_index: usize, side: ZoneSide) -> bool {
        self.hovered_index == Some(insert_index) && self.hovered_side == Some(side)
    }
}
