use std::collections::VecDeque;

use crate::PixelGrid;

pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Bounded, deduplicating undo log of grid snapshots, most recent first.
///
/// Recording a snapshot identical to the current top is a no-op, so commits
/// that changed nothing visible never pile up duplicate entries. When the
/// capacity is exceeded the oldest snapshots are evicted. No redo.
pub struct HistoryStack {
    capacity: usize,
    snapshots: VecDeque<PixelGrid>,
}

impl Default for HistoryStack {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl HistoryStack {
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "history capacity must be positive");
        HistoryStack {
            capacity,
            snapshots: VecDeque::new(),
        }
    }

    /// Pushes a snapshot unless it equals the current top (cell-by-cell).
    /// Returns whether an entry was added.
    pub fn record(&mut self, snapshot: PixelGrid) -> bool {
        if self.snapshots.front() == Some(&snapshot) {
            return false;
        }
        self.snapshots.push_front(snapshot);
        while self.snapshots.len() > self.capacity {
            self.snapshots.pop_back();
            log::debug!("history capacity {} exceeded, evicting oldest snapshot", self.capacity);
        }
        true
    }

    pub fn peek(&self) -> Option<&PixelGrid> {
        self.snapshots.front()
    }

    pub fn pop(&mut self) -> Option<PixelGrid> {
        self.snapshots.pop_front()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::HistoryStack;
    use crate::{Color, PixelGrid};

    #[test]
    fn test_record_dedups_against_top() {
        let mut history = HistoryStack::new(4);
        let mut grid = PixelGrid::new(4, Color::new(0, 0, 0));
        assert!(history.record(grid.clone()));
        assert!(!history.record(grid.clone()));
        assert_eq!(1, history.len());

        grid.fill(Color::new(0xFF, 0xFF, 0xFF));
        assert!(history.record(grid));
        assert_eq!(2, history.len());
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut history = HistoryStack::new(3);
        for i in 0..5u8 {
            history.record(PixelGrid::new(4, Color::new(i, i, i)));
        }
        assert_eq!(3, history.len());
        // Most recent first; the two oldest snapshots are gone.
        assert_eq!(Color::new(4, 4, 4), history.peek().unwrap().get((0, 0)).unwrap());
        let oldest = history.pop().and(history.pop()).and(history.pop()).unwrap();
        assert_eq!(Color::new(2, 2, 2), oldest.get((0, 0)).unwrap());
    }

    #[test]
    fn test_pop_order_is_most_recent_first() {
        let mut history = HistoryStack::new(4);
        history.record(PixelGrid::new(2, Color::new(1, 1, 1)));
        history.record(PixelGrid::new(2, Color::new(2, 2, 2)));
        assert_eq!(Color::new(2, 2, 2), history.pop().unwrap().get((0, 0)).unwrap());
        assert_eq!(Color::new(1, 1, 1), history.pop().unwrap().get((0, 0)).unwrap());
        assert!(history.pop().is_none());
    }
}
