//! Hooks for watching a search as it runs, e.g. to draw the frontier.

use gridstar_core::Point;

use crate::engine::SearchState;

/// Receives search events. Every method defaults to doing nothing.
pub trait SearchObserver {
    /// `cell` entered the open set with total cost `cost`.
    fn on_open(&mut self, cell: Point, cost: f64) {
        let _ = (cell, cost);
    }

    /// A cheaper path to the queued `cell` was found.
    fn on_relax(&mut self, cell: Point, old_cost: f64, new_cost: f64) {
        let _ = (cell, old_cost, new_cost);
    }

    /// `cell` was expanded and will not be revisited.
    fn on_close(&mut self, cell: Point) {
        let _ = cell;
    }

    /// The search reached a terminal state.
    fn on_finish(&mut self, state: SearchState) {
        let _ = state;
    }
}

impl SearchObserver for () {}

/// A single recorded search event.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "event", rename_all = "snake_case"))]
pub enum SearchEvent {
    Open { cell: Point, cost: f64 },
    Relax { cell: Point, old_cost: f64, new_cost: f64 },
    Close { cell: Point },
    Finish { state: SearchState },
}

/// Observer that records every event in order.
#[derive(Debug, Clone, Default)]
pub struct SearchTrace {
    events: Vec<SearchEvent>,
}

impl SearchTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[SearchEvent] {
        &self.events
    }

    /// Cells in the order they were expanded.
    pub fn closed(&self) -> impl Iterator<Item = Point> + '_ {
        self.events.iter().filter_map(|e| match e {
            SearchEvent::Close { cell } => Some(*cell),
            _ => None,
        })
    }

    pub fn into_events(self) -> Vec<SearchEvent> {
        self.events
    }
}

impl SearchObserver for SearchTrace {
    fn on_open(&mut self, cell: Point, cost: f64) {
        self.events.push(SearchEvent::Open { cell, cost });
    }

    fn on_relax(&mut self, cell: Point, old_cost: f64, new_cost: f64) {
        self.events.push(SearchEvent::Relax {
            cell,
            old_cost,
            new_cost,
        });
    }

    fn on_close(&mut self, cell: Point) {
        self.events.push(SearchEvent::Close { cell });
    }

    fn on_finish(&mut self, state: SearchState) {
        self.events.push(SearchEvent::Finish { state });
    }
}
