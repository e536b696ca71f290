//! Ownership and mutation of the tile order.
//!
//! [`ReorderController`] is the only place the order changes. Every change
//! is applied in one step and bumps [`ReorderController::version`], which
//! observers compare against their last seen value to know when to re-place.

use folio_core::alloc::HashSet;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::drag::{DragEvent, DragState};
use crate::insertion_zone::ZoneSide;
use crate::tile::TileId;

/// A completed move of one tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileMove {
    pub tile: TileId,
    pub from: usize,
    pub to: usize,
}

/// Move `tile` within `order` to the slot `insert_index` names.
///
/// `insert_index` is a position in the order before the move. The tile is
/// removed first, so an index past its current position is decremented by
/// one: in `[a, b, c]`, moving `a` to 2 yields `[b, a, c]`. Indices past the
/// end are clamped. Returns `None` if the tile is not in the order.
pub fn move_in_order(order: &mut Vec<TileId>, tile: TileId, insert_index: usize) -> Option<TileMove> {
    let from = order.iter().position(|id| *id == tile)?;
    order.remove(from);

    // Removal shifted everything after `from` down by one.
    let adjusted = if insert_index > from {
        insert_index - 1
    } else {
        insert_index
    };
    let to = adjusted.min(order.len());
    order.insert(to, tile);

    Some(TileMove { tile, from, to })
}

/// Keep surviving ids in their current relative order, drop ids that are
/// gone, and append new ids in the order `ids` lists them.
pub fn reconcile_order(order: &[TileId], ids: &[TileId]) -> Vec<TileId> {
    let present: HashSet<TileId> = ids.iter().copied().collect();
    let mut seen: HashSet<TileId> = HashSet::with_capacity(ids.len());

    let mut next: Vec<TileId> = order
        .iter()
        .copied()
        .filter(|id| present.contains(id) && seen.insert(*id))
        .collect();
    next.extend(ids.iter().copied().filter(|id| seen.insert(*id)));
    next
}

/// Owns the canonical tile order and the drag lifecycle.
#[derive(Debug, Clone, Default)]
pub struct ReorderController {
    order: Vec<TileId>,
    /// Order the tiles were supplied in; target of [`reset`](Self::reset).
    initial: Vec<TileId>,
    drag: DragState,
    version: u32,
}

impl ReorderController {
    /// Create a controller whose initial order is `ids` with duplicates
    /// removed.
    pub fn new(ids: impl IntoIterator<Item = TileId>) -> Self {
        let ids: Vec<TileId> = ids.into_iter().collect();
        let initial = reconcile_order(&[], &ids);
        Self {
            order: initial.clone(),
            initial,
            drag: DragState::new(),
            version: 0,
        }
    }

    pub fn order(&self) -> &[TileId] {
        &self.order
    }

    pub fn initial_order(&self) -> &[TileId] {
        &self.initial
    }

    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Bumped on every change to the order.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Check if the order changed since a cached version.
    pub fn is_newer_than(&self, cached_version: u32) -> bool {
        self.version != cached_version
    }

    fn bump(&mut self) {
        self.version = self.version.wrapping_add(1);
    }

    /// A tile was picked up. The order is untouched.
    pub fn on_drag_start(&mut self, tile: TileId) {
        if let Some(previous) = self.drag.dragged_tile() {
            tracing::debug!("Drag of {} replaced by {}", previous, tile);
        } else {
            tracing::debug!("Drag started for {}", tile);
        }
        self.drag.start(tile);
    }

    /// Highlight a zone. Advisory only; ignored while idle.
    pub fn on_zone_hover(&mut self, insert_index: usize, side: ZoneSide) {
        self.drag.hover(insert_index, side);
    }

    /// Drop the dragged tile at `insert_index`.
    ///
    /// A no-op when nothing is being dragged or the dragged id is not in the
    /// order. The drag ends either way. Returns the move when the tile
    /// actually changed position.
    pub fn on_drop(&mut self, insert_index: usize) -> Option<TileMove> {
        let tile = self.drag.end()?;
        let Some(moved) = move_in_order(&mut self.order, tile, insert_index) else {
            tracing::warn!("Dropped tile {} is not in the order", tile);
            return None;
        };

        if moved.from == moved.to {
            tracing::debug!("Drop of {} left it at {}", tile, moved.to);
            return None;
        }

        self.bump();
        tracing::debug!("Moved {} from {} to {}", tile, moved.from, moved.to);
        Some(moved)
    }

    /// End the drag without touching the order.
    pub fn on_drag_end(&mut self) {
        if let Some(tile) = self.drag.end() {
            tracing::debug!("Drag of {} ended", tile);
        }
    }

    /// Feed one drag-session signal. Returns the move for a successful drop.
    pub fn handle(&mut self, event: DragEvent) -> Option<TileMove> {
        match event {
            DragEvent::Start(tile) => {
                self.on_drag_start(tile);
                None
            }
            DragEvent::Hover { insert_index, side } => {
                self.on_zone_hover(insert_index, side);
                None
            }
            DragEvent::Drop { insert_index } => self.on_drop(insert_index),
            DragEvent::End => {
                self.on_drag_end();
                None
            }
        }
    }

    /// Move a tile without a drag session, with drop semantics.
    pub fn move_tile(&mut self, tile: TileId, insert_index: usize) -> Option<TileMove> {
        let moved = move_in_order(&mut self.order, tile, insert_index)?;
        if moved.from == moved.to {
            return None;
        }
        self.bump();
        tracing::debug!("Moved {} from {} to {}", tile, moved.from, moved.to);
        Some(moved)
    }

    /// Replace the order with a uniformly random permutation of itself.
    pub fn shuffle(&mut self) -> bool {
        self.shuffle_with(&mut rand::rng())
    }

    /// [`shuffle`](Self::shuffle) with a caller-supplied generator.
    ///
    /// Returns `true` if the order changed.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        let before = self.order.clone();
        self.order.shuffle(rng);
        let changed = self.order != before;
        if changed {
            self.bump();
        }
        tracing::debug!("Shuffled {} tiles (changed: {})", self.order.len(), changed);
        changed
    }

    /// Restore the order the tiles were supplied in.
    pub fn reset(&mut self) -> bool {
        if self.order == self.initial {
            return false;
        }
        self.order.clone_from(&self.initial);
        self.bump();
        tracing::debug!("Order reset");
        true
    }

    /// Follow a change of the tile set.
    ///
    /// Surviving ids keep their relative order, removed ids are dropped and
    /// new ids are appended. `ids` also becomes the order [`reset`] restores.
    /// A drag whose tile disappeared is ended.
    ///
    /// Returns `true` if the order changed.
    ///
    /// [`reset`]: Self::reset
    pub fn reconcile(&mut self, ids: &[TileId]) -> bool {
        self.initial = reconcile_order(&[], ids);

        if let Some(dragged) = self.drag.dragged_tile()
            && !self.initial.contains(&dragged)
        {
            tracing::debug!("Dragged tile {} removed, ending drag", dragged);
            self.drag.end();
        }

        let next = reconcile_order(&self.order, ids);
        if next == self.order {
            return false;
        }
        tracing::debug!("Reconciled order: {} -> {} tiles", self.order.len(), next.len());
        self.order = next;
        self.bump();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn ids(names: &[&str]) -> Vec<TileId> {
        names.iter().map(|n| TileId::new(n)).collect()
    }

    fn controller(names: &[&str]) -> ReorderController {
        ReorderController::new(ids(names))
    }

    #[test]
    fn test_drop_before_moves_left() {
        let mut c = controller(&["a", "b", "c", "d", "e"]);
        c.on_drag_start(TileId::new("c"));
        let moved = c.on_drop(0).unwrap();
        assert_eq!(c.order(), ids(&["c", "a", "b", "d", "e"]).as_slice());
        assert_eq!((moved.from, moved.to), (2, 0));
        assert!(!c.is_dragging());
    }

    #[test]
    fn test_drop_after_adjusts_for_removal() {
        let mut c = controller(&["a", "b", "c", "d", "e"]);
        c.on_drag_start(TileId::new("b"));
        // Right zone of "d" (position 3) -> insert_index 4
        c.on_drop(4);
        assert_eq!(c.order(), ids(&["a", "c", "d", "b", "e"]).as_slice());
    }

    #[test]
    fn test_insert_index_counts_before_removal() {
        let mut order = ids(&["a", "b", "c"]);
        let moved = move_in_order(&mut order, TileId::new("a"), 2).unwrap();
        assert_eq!(order, ids(&["b", "a", "c"]));
        assert_eq!((moved.from, moved.to), (0, 1));
    }

    #[test]
    fn test_drop_at_end() {
        let mut c = controller(&["a", "b", "c"]);
        c.on_drag_start(TileId::new("a"));
        c.on_drop(3);
        assert_eq!(c.order(), ids(&["b", "c", "a"]).as_slice());
    }

    #[test]
    fn test_drop_in_place_is_noop() {
        let mut c = controller(&["a", "b", "c"]);
        c.on_drag_start(TileId::new("b"));
        // Both sides of "b" resolve to its current slot
        assert_eq!(c.on_drop(2), None);
        c.on_drag_start(TileId::new("b"));
        assert_eq!(c.on_drop(1), None);
        assert_eq!(c.version(), 0);
        assert_eq!(c.order(), ids(&["a", "b", "c"]).as_slice());
    }

    #[test]
    fn test_drop_without_drag_is_noop() {
        let mut c = controller(&["a", "b"]);
        assert_eq!(c.on_drop(0), None);
        assert_eq!(c.order(), ids(&["a", "b"]).as_slice());
    }

    #[test]
    fn test_drop_of_unknown_tile_is_noop() {
        let mut c = controller(&["a", "b"]);
        c.on_drag_start(TileId::new("ghost"));
        assert_eq!(c.on_drop(0), None);
        assert!(!c.is_dragging());
        assert_eq!(c.order(), ids(&["a", "b"]).as_slice());
    }

    #[test]
    fn test_drop_index_clamped() {
        let mut c = controller(&["a", "b", "c"]);
        c.on_drag_start(TileId::new("a"));
        c.on_drop(99);
        assert_eq!(c.order(), ids(&["b", "c", "a"]).as_slice());
    }

    #[test]
    fn test_drag_end_keeps_order() {
        let mut c = controller(&["a", "b"]);
        c.on_drag_start(TileId::new("a"));
        c.on_zone_hover(2, ZoneSide::Right);
        assert_eq!(c.drag_state().hovered_index(), Some(2));
        c.on_drag_end();
        assert!(!c.is_dragging());
        assert_eq!(c.drag_state().hovered_index(), None);
        assert_eq!(c.order(), ids(&["a", "b"]).as_slice());
    }

    #[test]
    fn test_handle_event_stream() {
        let mut c = controller(&["a", "b", "c"]);
        assert_eq!(c.handle(DragEvent::Start(TileId::new("c"))), None);
        c.handle(DragEvent::Hover {
            insert_index: 1,
            side: ZoneSide::Left,
        });
        let moved = c.handle(DragEvent::Drop { insert_index: 1 });
        assert_eq!(
            moved,
            Some(TileMove {
                tile: TileId::new("c"),
                from: 2,
                to: 1
            })
        );
        assert_eq!(c.handle(DragEvent::End), None);
        assert_eq!(c.order(), ids(&["a", "c", "b"]).as_slice());
    }

    #[test]
    fn test_move_tile_without_drag() {
        let mut c = controller(&["a", "b", "c"]);
        assert!(c.move_tile(TileId::new("a"), 2).is_some());
        assert_eq!(c.order(), ids(&["b", "a", "c"]).as_slice());
        assert_eq!(c.version(), 1);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut c = controller(&["a", "b", "c"]);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            c.shuffle_with(&mut rng);
            let mut sorted = c.order().to_vec();
            sorted.sort();
            let mut expected = ids(&["a", "b", "c"]);
            expected.sort();
            assert_eq!(sorted, expected);
        }
    }

    #[test]
    fn test_shuffle_reaches_every_permutation() {
        let mut c = controller(&["a", "b", "c"]);
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = HashSet::new();
        for _ in 0..200 {
            c.shuffle_with(&mut rng);
            seen.insert(c.order().to_vec());
        }
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn test_reset_restores_initial() {
        let mut c = controller(&["a", "b", "c"]);
        c.move_tile(TileId::new("c"), 0);
        assert!(c.reset());
        assert_eq!(c.order(), ids(&["a", "b", "c"]).as_slice());
        assert!(!c.reset());
    }

    #[test]
    fn test_reconcile_preserves_survivors() {
        let mut c = controller(&["a", "b", "c", "d"]);
        c.move_tile(TileId::new("d"), 0);
        // d a b c -> drop b, add e
        assert!(c.reconcile(&ids(&["a", "c", "d", "e"])));
        assert_eq!(c.order(), ids(&["d", "a", "c", "e"]).as_slice());
        assert_eq!(c.initial_order(), ids(&["a", "c", "d", "e"]).as_slice());
    }

    #[test]
    fn test_reconcile_idempotent() {
        let mut c = controller(&["a", "b"]);
        c.reconcile(&ids(&["b", "c"]));
        let once = c.order().to_vec();
        let version = c.version();
        assert!(!c.reconcile(&ids(&["b", "c"])));
        assert_eq!(c.order(), once.as_slice());
        assert_eq!(c.version(), version);
    }

    #[test]
    fn test_reconcile_ends_drag_of_removed_tile() {
        let mut c = controller(&["a", "b"]);
        c.on_drag_start(TileId::new("a"));
        c.reconcile(&ids(&["a", "b", "c"]));
        assert!(c.is_dragging());
        c.reconcile(&ids(&["b", "c"]));
        assert!(!c.is_dragging());
    }

    #[test]
    fn test_new_dedupes() {
        let c = controller(&["a", "b", "a"]);
        assert_eq!(c.order(), ids(&["a", "b"]).as_slice());
    }
}
