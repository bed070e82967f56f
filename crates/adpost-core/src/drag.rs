// crates/adpost-core/src/drag.rs
//
// Drag session for reordering photos in the grid.
//
//   Idle ──drag_start(i)──▶ Dragging { source: i }
//   Dragging { source } ──hover(t), t ≠ source──▶ reorder(source, t) ; source = t
//   Dragging ──release | cancel──▶ Idle
//
// Every hover is a real, committed reorder so the grid moves under the
// pointer. Updating `source` after each commit is what makes consecutive
// hovers compose. Cancel does not roll back: whatever order the last hover
// produced stays.
//
// The session knows nothing about pointers or widgets; adpost-ui turns egui
// responses into these four calls.

use tracing::debug;

use crate::gallery::Gallery;
use crate::preview::PreviewProvider;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging { source: usize },
}

#[derive(Debug, Default)]
pub struct DragSession {
    state: DragState,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Index of the dragged item as it sits in the store right now.
    pub fn source(&self) -> Option<usize> {
        match self.state {
            DragState::Dragging { source } => Some(source),
            DragState::Idle                => None,
        }
    }

    /// Begin dragging the item at `index`. A second start without an
    /// intervening release simply restarts from the new index.
    pub fn drag_start(&mut self, index: usize) {
        debug!("[drag] start at {index}");
        self.state = DragState::Dragging { source: index };
    }

    /// Pointer is over slot `target`. Commits the move immediately.
    ///
    /// Returns `true` when the store was reordered.
    pub fn hover<P: PreviewProvider>(&mut self, gallery: &mut Gallery<P>, target: usize) -> bool {
        let DragState::Dragging { source } = self.state else {
            return false;
        };
        if source == target {
            return false;
        }
        match gallery.reorder_item(source, target) {
            Ok(()) => {
                debug!("[drag] hover {source} → {target}");
                self.state = DragState::Dragging { source: target };
                true
            }
            // Rejected moves leave the session where it was; the next valid
            // hover picks up from the same source.
            Err(_) => false,
        }
    }

    /// Pointer released: the session ends with the current order.
    pub fn release(&mut self) {
        if let Some(source) = self.source() {
            debug!("[drag] released at {source}");
        }
        self.state = DragState::Idle;
    }

    pub fn cancel(&mut self) {
        if let Some(source) = self.source() {
            debug!("[drag] cancel, order kept with item at {source}");
        }
        self.state = DragState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::tests::{files, RecordingPreviews};
    use crate::media_types::Role;

    fn gallery(names: &[&str]) -> Gallery<RecordingPreviews> {
        let mut g = Gallery::new(RecordingPreviews::default());
        g.add_files(&files(names));
        g
    }

    fn order(g: &Gallery<RecordingPreviews>) -> Vec<String> {
        g.items().iter().map(|i| i.file.name.clone()).collect()
    }

    #[test]
    fn hover_commits_live_and_cancel_keeps_order() {
        let mut g = gallery(&["A", "B", "C", "D"]);
        let mut s = DragSession::new();

        s.drag_start(0);
        assert!(s.hover(&mut g, 2));
        assert_eq!(order(&g), vec!["B", "C", "A", "D"]);
        assert_eq!(g.items()[0].role, Role::Cover);

        s.cancel();
        assert_eq!(s.state(), DragState::Idle);
        assert_eq!(order(&g), vec!["B", "C", "A", "D"]);
    }

    #[test]
    fn consecutive_hovers_follow_the_dragged_item() {
        let mut g = gallery(&["A", "B", "C", "D"]);
        let mut s = DragSession::new();

        s.drag_start(0);
        s.hover(&mut g, 1);
        s.hover(&mut g, 2);
        s.hover(&mut g, 3);
        assert_eq!(order(&g), vec!["B", "C", "D", "A"]);
        assert_eq!(s.source(), Some(3));

        s.hover(&mut g, 0);
        assert_eq!(order(&g), vec!["A", "B", "C", "D"]);
        s.release();
        assert!(!s.is_dragging());
    }

    #[test]
    fn restart_while_dragging_moves_source() {
        let mut g = gallery(&["A", "B", "C", "D"]);
        let mut s = DragSession::new();

        s.drag_start(0);
        s.hover(&mut g, 1);
        assert_eq!(order(&g), vec!["B", "A", "C", "D"]);

        s.drag_start(3);
        assert_eq!(s.source(), Some(3));
        assert!(s.hover(&mut g, 0));
        assert_eq!(order(&g), vec!["D", "B", "A", "C"]);
        assert_eq!(s.source(), Some(0));
    }

    #[test]
    fn hover_on_source_is_ignored() {
        let mut g = gallery(&["A", "B"]);
        let mut s = DragSession::new();
        s.drag_start(1);
        assert!(!s.hover(&mut g, 1));
        assert_eq!(order(&g), vec!["A", "B"]);
    }

    #[test]
    fn hover_while_idle_does_nothing() {
        let mut g = gallery(&["A", "B"]);
        let mut s = DragSession::new();
        assert!(!s.hover(&mut g, 0));
        assert!(!s.hover(&mut g, 1));
        assert_eq!(order(&g), vec!["A", "B"]);
    }

    #[test]
    fn out_of_range_hover_keeps_session() {
        let mut g = gallery(&["A", "B", "C"]);
        let mut s = DragSession::new();
        s.drag_start(0);
        assert!(!s.hover(&mut g, 7));
        assert_eq!(s.source(), Some(0));
        assert!(s.hover(&mut g, 1));
        assert_eq!(order(&g), vec!["B", "A", "C"]);
    }

    #[test]
    fn release_ends_session_without_touching_store() {
        let mut g = gallery(&["A", "B", "C"]);
        let mut s = DragSession::new();
        s.drag_start(2);
        s.hover(&mut g, 0);
        s.release();
        assert!(!s.hover(&mut g, 2));
        assert_eq!(order(&g), vec!["C", "A", "B"]);
    }
}
