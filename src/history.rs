//! Recorded grid states for stepping back and forth through smoothing passes.
//!
//! The current grid lives outside the history. Navigation rotates it through
//! the deque, so repeated steps in one direction cycle through every state
//! and a step in the opposite direction undoes the previous one.

use std::collections::VecDeque;

use crate::cave_grid::CaveGrid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryDirection {
    Forward,
    Backward,
}

/// Deque of previously-current grids.
#[derive(Debug, Clone, Default)]
pub struct MapHistory {
    states: VecDeque<CaveGrid>,
    /// Oldest states are dropped past this many entries. `None` is unbounded.
    max_entries: Option<usize>,
}

impl MapHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_entries(max_entries: usize) -> Self {
        Self {
            states: VecDeque::new(),
            max_entries: Some(max_entries.max(1)),
        }
    }

    /// Append a grid to the back (the most recent end).
    pub fn record(&mut self, grid: CaveGrid) {
        self.states.push_back(grid);
        if let Some(max) = self.max_entries {
            while self.states.len() > max {
                self.states.pop_front();
            }
        }
    }

    /// Current goes to the back; the front becomes current.
    /// Returns false and leaves `current` untouched when empty.
    pub fn step_forward(&mut self, current: &mut CaveGrid) -> bool {
        let Some(next) = self.states.pop_front() else {
            return false;
        };
        self.states.push_back(std::mem::replace(current, next));
        true
    }

    /// Current goes to the front; the back becomes current.
    /// Returns false and leaves `current` untouched when empty.
    pub fn step_backward(&mut self, current: &mut CaveGrid) -> bool {
        let Some(previous) = self.states.pop_back() else {
            return false;
        };
        self.states.push_front(std::mem::replace(current, previous));
        true
    }

    pub fn navigate(&mut self, direction: HistoryDirection, current: &mut CaveGrid) -> bool {
        match direction {
            HistoryDirection::Forward => self.step_forward(current),
            HistoryDirection::Backward => self.step_backward(current),
        }
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Front to back.
    pub fn iter(&self) -> impl Iterator<Item = &CaveGrid> {
        self.states.iter()
    }
}
