//! The A* search loop as an explicit state machine.
//!
//! A [`SearchEngine`] borrows a [`Grid`] for its whole lifetime and owns all
//! per-search state: the node arena, the open set and the closed set. The
//! search can be driven to completion with [`run`](SearchEngine::run) or one
//! expansion at a time with [`step`](SearchEngine::step), which lets a
//! frame-based host spread the work over several ticks. Dropping the engine
//! abandons the search.

use std::collections::{HashMap, HashSet};

use gridstar_core::{Grid, MoveKind, Occupancy, Point};
use log::{debug, trace};

use crate::config::{DiagonalPolicy, SearchConfig};
use crate::cost::CostModel;
use crate::distance::squared_euclidean;
use crate::error::SearchError;
use crate::node::{NodeId, SearchNode};
use crate::observer::SearchObserver;
use crate::open_set::{OpenSet, SortedOpenSet};

/// Where a search is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SearchState {
    /// Nothing begun, or reset.
    Idle,
    /// Frontier not yet exhausted and target not yet reached.
    Searching,
    /// A node within the arrival radius was reached.
    PathFound,
    /// The frontier ran out.
    Exhausted,
}

impl SearchState {
    pub fn is_terminal(self) -> bool {
        matches!(self, SearchState::PathFound | SearchState::Exhausted)
    }
}

/// Result of a completed search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathOutcome {
    /// Cells from start to the arrival cell, both included.
    Path(Vec<Point>),
    /// Every reachable cell was expanded without arriving.
    NoPathFound,
}

impl PathOutcome {
    pub fn path(&self) -> Option<&[Point]> {
        match self {
            PathOutcome::Path(p) => Some(p),
            PathOutcome::NoPathFound => None,
        }
    }

    pub fn into_path(self) -> Option<Vec<Point>> {
        match self {
            PathOutcome::Path(p) => Some(p),
            PathOutcome::NoPathFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, PathOutcome::Path(_))
    }

    /// Number of moves along the path (cells minus one).
    pub fn moves(&self) -> Option<usize> {
        self.path().map(|p| p.len().saturating_sub(1))
    }
}

#[derive(Debug, Clone, Copy)]
struct Request {
    start: Point,
    target: Point,
    radius_sq: f64,
}

/// A* search over a borrowed grid.
///
/// `S` selects the open-set implementation; the default sorted vector is
/// right for small grids, [`HeapOpenSet`](crate::HeapOpenSet) for large ones.
pub struct SearchEngine<'g, O, S = SortedOpenSet> {
    grid: &'g Grid<O>,
    costs: CostModel,
    diagonals: DiagonalPolicy,
    request: Option<Request>,
    nodes: Vec<SearchNode>,
    by_cell: HashMap<Point, NodeId>,
    open: S,
    closed: HashSet<Point>,
    state: SearchState,
    arrived: Option<NodeId>,
}

impl<'g, O: Occupancy> SearchEngine<'g, O, SortedOpenSet> {
    /// Create an idle engine using the sorted-vector open set.
    pub fn new(grid: &'g Grid<O>, config: SearchConfig) -> Result<Self, SearchError> {
        Self::with_open_set(grid, config)
    }
}

impl<'g, O: Occupancy, S: OpenSet + Default> SearchEngine<'g, O, S> {
    /// Create an idle engine with an explicit open-set implementation.
    pub fn with_open_set(grid: &'g Grid<O>, config: SearchConfig) -> Result<Self, SearchError> {
        Ok(Self {
            grid,
            costs: CostModel::from_config(&config)?,
            diagonals: config.diagonals,
            request: None,
            nodes: Vec::new(),
            by_cell: HashMap::new(),
            open: S::default(),
            closed: HashSet::new(),
            state: SearchState::Idle,
            arrived: None,
        })
    }

    /// Clear all search state and seed a new search.
    ///
    /// Fails before touching any state if `start` or `target` is outside the
    /// grid or `arrival_radius` is negative or not finite.
    pub fn begin(
        &mut self,
        start: Point,
        target: Point,
        arrival_radius: f64,
    ) -> Result<(), SearchError> {
        if !arrival_radius.is_finite() || arrival_radius < 0.0 {
            return Err(SearchError::InvalidArrivalRadius(arrival_radius));
        }
        self.grid.check(start)?;
        self.grid.check(target)?;

        self.reset();
        self.request = Some(Request {
            start,
            target,
            radius_sq: arrival_radius * arrival_radius,
        });
        let total = self.costs.heuristic(start, target);
        self.push_node(start, 0.0, total, None);
        self.state = SearchState::Searching;
        debug!("search {start} -> {target} (radius {arrival_radius}) begun");
        Ok(())
    }

    /// Drop all search state and return to [`SearchState::Idle`].
    pub fn reset(&mut self) {
        self.request = None;
        self.nodes.clear();
        self.by_cell.clear();
        self.open.clear();
        self.closed.clear();
        self.arrived = None;
        self.state = SearchState::Idle;
    }

    /// Perform one expansion and return the resulting state.
    pub fn step(&mut self) -> SearchState {
        self.step_observed(&mut ())
    }

    /// Like [`step`](SearchEngine::step), reporting events to `observer`.
    ///
    /// Idle and terminal engines are left unchanged.
    pub fn step_observed<V>(&mut self, observer: &mut V) -> SearchState
    where
        V: SearchObserver + ?Sized,
    {
        let (SearchState::Searching, Some(req)) = (self.state, self.request) else {
            return self.state;
        };

        let Some(current) = self.open.pop_min() else {
            return self.finish(SearchState::Exhausted, observer);
        };
        let cell = self.nodes[current.0].cell;
        let path_cost = self.nodes[current.0].path_cost;

        if squared_euclidean(cell, req.target) as f64 <= req.radius_sq {
            self.arrived = Some(current);
            return self.finish(SearchState::PathFound, observer);
        }

        self.closed.insert(cell);
        observer.on_close(cell);
        trace!("expand {cell} (path cost {path_cost})");

        for (n, kind) in self.grid.neighbors(cell) {
            if self.closed.contains(&n) || !self.passable(n, req.target) {
                continue;
            }
            if kind == MoveKind::Diagonal && !self.can_cut(cell, n, req.target) {
                continue;
            }
            let g = path_cost + self.costs.move_cost(kind);
            let total = g + self.costs.heuristic(n, req.target);
            match self.open.find_by_cell(n) {
                None => {
                    self.push_node(n, g, total, Some(current));
                    observer.on_open(n, total);
                }
                Some(id) => {
                    let old = self.nodes[id.0].total_cost;
                    if self.open.update_priority(id, total) {
                        let node = &mut self.nodes[id.0];
                        node.path_cost = g;
                        node.total_cost = total;
                        node.came_from = Some(current);
                        observer.on_relax(n, old, total);
                        trace!("relax {n}: {old} -> {total}");
                    }
                }
            }
        }
        self.state
    }

    /// Step until the search ends.
    pub fn run(&mut self) -> Result<PathOutcome, SearchError> {
        self.run_observed(&mut ())
    }

    /// Step until the search ends, reporting events to `observer`.
    pub fn run_observed<V>(&mut self, observer: &mut V) -> Result<PathOutcome, SearchError>
    where
        V: SearchObserver + ?Sized,
    {
        if self.state == SearchState::Idle {
            return Err(SearchError::NotStarted);
        }
        while self.state == SearchState::Searching {
            self.step_observed(observer);
        }
        Ok(self.outcome())
    }

    /// [`begin`](SearchEngine::begin) followed by [`run`](SearchEngine::run).
    pub fn find_path(
        &mut self,
        start: Point,
        target: Point,
        arrival_radius: f64,
    ) -> Result<PathOutcome, SearchError> {
        self.begin(start, target, arrival_radius)?;
        self.run()
    }

    /// [`find_path`](SearchEngine::find_path) with an observer.
    pub fn find_path_observed<V>(
        &mut self,
        start: Point,
        target: Point,
        arrival_radius: f64,
        observer: &mut V,
    ) -> Result<PathOutcome, SearchError>
    where
        V: SearchObserver + ?Sized,
    {
        self.begin(start, target, arrival_radius)?;
        self.run_observed(observer)
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    /// The path, once the state is [`SearchState::PathFound`].
    pub fn path(&self) -> Option<Vec<Point>> {
        let mut id = self.arrived?;
        let mut path = vec![self.nodes[id.0].cell];
        while let Some(prev) = self.nodes[id.0].came_from {
            path.push(self.nodes[prev.0].cell);
            id = prev;
        }
        path.reverse();
        Some(path)
    }

    /// Path for a terminal search; `NoPathFound` otherwise.
    fn outcome(&self) -> PathOutcome {
        match self.path() {
            Some(p) => PathOutcome::Path(p),
            None => PathOutcome::NoPathFound,
        }
    }

    /// Start and target of the current search, if one has begun.
    pub fn endpoints(&self) -> Option<(Point, Point)> {
        self.request.map(|r| (r.start, r.target))
    }

    pub fn grid(&self) -> &'g Grid<O> {
        self.grid
    }

    pub fn cost_model(&self) -> &CostModel {
        &self.costs
    }

    pub fn node(&self, id: NodeId) -> Option<&SearchNode> {
        self.nodes.get(id.0)
    }

    /// The node discovered for `cell`, if any.
    pub fn node_at(&self, cell: Point) -> Option<&SearchNode> {
        self.by_cell.get(&cell).map(|id| &self.nodes[id.0])
    }

    /// Every node discovered so far, in discovery order.
    pub fn nodes(&self) -> &[SearchNode] {
        &self.nodes
    }

    /// Number of cells expanded.
    pub fn expanded(&self) -> usize {
        self.closed.len()
    }

    pub fn open_len(&self) -> usize {
        self.open.len()
    }

    pub fn is_closed(&self, cell: Point) -> bool {
        self.closed.contains(&cell)
    }

    /// Whether `cell` is currently on the frontier.
    pub fn is_open(&self, cell: Point) -> bool {
        self.open.find_by_cell(cell).is_some()
    }

    fn push_node(&mut self, cell: Point, path_cost: f64, total_cost: f64, came_from: Option<NodeId>) {
        let id = NodeId(self.nodes.len());
        self.nodes.push(SearchNode {
            cell,
            path_cost,
            total_cost,
            came_from,
        });
        self.by_cell.insert(cell, id);
        self.open.insert(id, cell, total_cost);
    }

    /// The target is always enterable, whatever the occupancy says.
    #[inline]
    fn passable(&self, p: Point, target: Point) -> bool {
        p == target || !self.grid.is_occupied(p)
    }

    /// Whether a diagonal move `from -> to` is allowed past its two corners.
    fn can_cut(&self, from: Point, to: Point, target: Point) -> bool {
        match self.diagonals {
            DiagonalPolicy::AllowCornerCutting => true,
            DiagonalPolicy::NoCornerCutting => {
                self.passable(Point::new(to.x, from.y), target)
                    && self.passable(Point::new(from.x, to.y), target)
            }
        }
    }

    fn finish<V>(&mut self, state: SearchState, observer: &mut V) -> SearchState
    where
        V: SearchObserver + ?Sized,
    {
        self.state = state;
        observer.on_finish(state);
        if let Some((start, target)) = self.endpoints() {
            debug!(
                "search {start} -> {target} finished: {state:?} after {} expansions, {} nodes",
                self.closed.len(),
                self.nodes.len()
            );
        }
        state
    }
}

/// Search `grid` once from `start` to within `arrival_radius` of `target`.
pub fn find_path<O: Occupancy>(
    grid: &Grid<O>,
    config: SearchConfig,
    start: Point,
    target: Point,
    arrival_radius: f64,
) -> Result<PathOutcome, SearchError> {
    SearchEngine::new(grid, config)?.find_path(start, target, arrival_radius)
}
