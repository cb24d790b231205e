//! Snapshot history backing rewind.
//!
//! Each entry is a full copy of a past generation, so rewinding restores the
//! board bit-for-bit even if cells were painted after the last step.

use std::collections::VecDeque;

use super::{EngineError, Grid};

/// Default number of generations kept for rewind.
pub const DEFAULT_HISTORY_DEPTH: usize = 1000;

/// Ordered past generations, most recent last.
///
/// With a depth limit the buffer behaves as a ring: pushing onto a full
/// history drops the oldest generation.
#[derive(Clone, Debug)]
pub struct History {
    snapshots: VecDeque<Grid>,
    max_depth: Option<usize>,
}

impl History {
    /// `None` keeps every generation; `Some(0)` is rejected.
    pub fn new(max_depth: Option<usize>) -> Result<Self, EngineError> {
        if max_depth == Some(0) {
            return Err(EngineError::InvalidHistoryDepth);
        }
        let capacity = max_depth.unwrap_or(0).min(64);
        Ok(Self {
            snapshots: VecDeque::with_capacity(capacity),
            max_depth,
        })
    }

    pub fn push(&mut self, snapshot: Grid) {
        if let Some(max) = self.max_depth {
            while self.snapshots.len() >= max {
                self.snapshots.pop_front();
            }
        }
        self.snapshots.push_back(snapshot);
    }

    /// Pop up to `n` generations and return the oldest one popped,
    /// along with how many were removed.
    pub fn pop(&mut self, n: usize) -> Option<(Grid, usize)> {
        let count = n.min(self.snapshots.len());
        if count == 0 {
            return None;
        }
        let keep = self.snapshots.len() - count;
        let oldest = self.snapshots.drain(keep..).next()?;
        Some((oldest, count))
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub const fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }
}

impl Default for History {
    fn default() -> Self {
        Self {
            snapshots: VecDeque::new(),
            max_depth: Some(DEFAULT_HISTORY_DEPTH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cell;

    fn marked(x: usize) -> Grid {
        let mut grid = Grid::new(8, 1).unwrap();
        grid.set(x, 0, Cell::Alive).unwrap();
        grid
    }

    #[test]
    fn test_zero_depth_rejected() {
        assert!(matches!(History::new(Some(0)), Err(EngineError::InvalidHistoryDepth)));
        assert!(History::new(None).is_ok());
    }

    #[test]
    fn test_ring_drops_oldest() {
        let mut history = History::new(Some(3)).unwrap();
        for x in 0..5 {
            history.push(marked(x));
        }
        assert_eq!(history.len(), 3);
        // Oldest surviving entry is generation 2
        let (oldest, count) = history.pop(10).unwrap();
        assert_eq!(count, 3);
        assert_eq!(oldest, marked(2));
        assert!(history.is_empty());
    }

    #[test]
    fn test_pop_returns_oldest_of_popped() {
        let mut history = History::new(None).unwrap();
        for x in 0..4 {
            history.push(marked(x));
        }
        let (grid, count) = history.pop(2).unwrap();
        assert_eq!((grid, count), (marked(2), 2));
        assert_eq!(history.len(), 2);
        assert_eq!(history.pop(1).unwrap().0, marked(1));
    }

    #[test]
    fn test_pop_on_empty_or_zero() {
        let mut history = History::default();
        assert!(history.pop(1).is_none());
        history.push(marked(0));
        assert!(history.pop(0).is_none());
        assert_eq!(history.len(), 1);
    }
}
