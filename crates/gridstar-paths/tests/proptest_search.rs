//! Property-based tests for the search engine.
//!
//! Random grids with random obstacles are searched and the recorded event
//! trace is checked against the A* invariants.
//!
//! Run with: cargo test -p gridstar-paths -- proptest

use std::collections::{HashSet, VecDeque};

use gridstar_core::{Grid, MoveKind, Occupancy, OccupancyMap, Open, Point};
use gridstar_paths::{
    DiagonalPolicy, HeapOpenSet, Heuristic, PathOutcome, SearchConfig, SearchEngine, SearchEvent,
    SearchTrace, chebyshev,
};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

#[derive(Debug, Clone)]
struct Case {
    width: i32,
    height: i32,
    blocked: Vec<Point>,
    start: Point,
    target: Point,
}

impl Case {
    fn grid(&self) -> Grid {
        Grid::new(
            self.width,
            self.height,
            OccupancyMap::with_blocked(self.blocked.iter().copied()),
        )
        .unwrap()
    }
}

/// A grid of 1..=14 cells per side with roughly `density` of them blocked.
fn arb_case(density: f64) -> impl Strategy<Value = Case> {
    (1..=14i32, 1..=14i32).prop_flat_map(move |(w, h)| {
        let cells = prop::collection::vec(prop::bool::weighted(density), (w * h) as usize);
        (cells, 0..w, 0..h, 0..w, 0..h).prop_map(move |(cells, sx, sy, tx, ty)| Case {
            width: w,
            height: h,
            blocked: cells
                .iter()
                .enumerate()
                .filter(|&(_, &b)| b)
                .map(|(i, _)| Point::new(i as i32 % w, i as i32 / w))
                .collect(),
            start: Point::new(sx, sy),
            target: Point::new(tx, ty),
        })
    })
}

fn arb_config() -> impl Strategy<Value = SearchConfig> {
    (
        prop_oneof![Just(Heuristic::SquaredEuclidean), Just(Heuristic::Octile)],
        prop_oneof![
            Just(DiagonalPolicy::NoCornerCutting),
            Just(DiagonalPolicy::AllowCornerCutting)
        ],
    )
        .prop_map(|(h, d)| SearchConfig::default().with_heuristic(h).with_diagonals(d))
}

// =============================================================================
// Reference reachability
// =============================================================================

fn passable<O: Occupancy>(g: &Grid<O>, p: Point, target: Point) -> bool {
    p == target || !g.is_occupied(p)
}

fn legal_move<O: Occupancy>(
    g: &Grid<O>,
    from: Point,
    to: Point,
    target: Point,
    diagonals: DiagonalPolicy,
) -> bool {
    if !g.contains(to) || chebyshev(from, to) != 1 || !passable(g, to, target) {
        return false;
    }
    let diagonal = from.x != to.x && from.y != to.y;
    !diagonal
        || diagonals == DiagonalPolicy::AllowCornerCutting
        || (passable(g, Point::new(to.x, from.y), target)
            && passable(g, Point::new(from.x, to.y), target))
}

/// Breadth-first reachability under the same movement rules.
fn reachable<O: Occupancy>(g: &Grid<O>, start: Point, target: Point, d: DiagonalPolicy) -> bool {
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(p) = queue.pop_front() {
        if p == target {
            return true;
        }
        for (n, _) in g.neighbors(p) {
            if legal_move(g, p, n, target, d) && seen.insert(n) {
                queue.push_back(n);
            }
        }
    }
    false
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn proptest_relaxation_only_lowers_costs(case in arb_case(0.3), config in arb_config()) {
        let g = case.grid();
        let mut trace = SearchTrace::new();
        SearchEngine::new(&g, config)
            .unwrap()
            .find_path_observed(case.start, case.target, 0.0, &mut trace)
            .unwrap();
        for e in trace.events() {
            if let SearchEvent::Relax { old_cost, new_cost, .. } = e {
                prop_assert!(new_cost < old_cost);
            }
        }
    }

    #[test]
    fn proptest_closed_cells_never_reopen(case in arb_case(0.3), config in arb_config()) {
        let g = case.grid();
        let mut trace = SearchTrace::new();
        SearchEngine::new(&g, config)
            .unwrap()
            .find_path_observed(case.start, case.target, 0.0, &mut trace)
            .unwrap();
        let mut closed = HashSet::new();
        for e in trace.events() {
            match e {
                SearchEvent::Close { cell } => {
                    prop_assert!(closed.insert(*cell), "{} closed twice", cell);
                }
                SearchEvent::Open { cell, .. } | SearchEvent::Relax { cell, .. } => {
                    prop_assert!(!closed.contains(cell), "{} touched after closing", cell);
                }
                SearchEvent::Finish { .. } => {}
            }
        }
    }

    #[test]
    fn proptest_found_paths_are_legal(case in arb_case(0.3), config in arb_config()) {
        let g = case.grid();
        let out = SearchEngine::new(&g, config)
            .unwrap()
            .find_path(case.start, case.target, 0.0)
            .unwrap();
        if let PathOutcome::Path(path) = out {
            prop_assert_eq!(path.first(), Some(&case.start));
            prop_assert_eq!(path.last(), Some(&case.target));
            let unique: HashSet<_> = path.iter().collect();
            prop_assert_eq!(unique.len(), path.len());
            for w in path.windows(2) {
                prop_assert!(legal_move(&g, w[0], w[1], case.target, config.diagonals));
            }
        }
    }

    #[test]
    fn proptest_no_path_only_when_unreachable(case in arb_case(0.35), config in arb_config()) {
        let g = case.grid();
        let out = SearchEngine::new(&g, config)
            .unwrap()
            .find_path(case.start, case.target, 0.0)
            .unwrap();
        prop_assert_eq!(
            out.is_found(),
            reachable(&g, case.start, case.target, config.diagonals)
        );
    }

    #[test]
    fn proptest_searches_are_deterministic(case in arb_case(0.25), config in arb_config()) {
        let g = case.grid();
        let a = SearchEngine::new(&g, config).unwrap().find_path(case.start, case.target, 0.0).unwrap();
        let b = SearchEngine::new(&g, config).unwrap().find_path(case.start, case.target, 0.0).unwrap();
        let c = SearchEngine::<_, HeapOpenSet>::with_open_set(&g, config)
            .unwrap()
            .find_path(case.start, case.target, 0.0)
            .unwrap();
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(&a, &c);
    }

    #[test]
    fn proptest_octile_is_optimal_on_open_grids(case in arb_case(0.1)) {
        // Obstacles are ignored here.
        let g = Grid::new(case.width, case.height, Open).unwrap();
        let config = SearchConfig::default().with_heuristic(Heuristic::Octile);
        let out = SearchEngine::new(&g, config)
            .unwrap()
            .find_path(case.start, case.target, 0.0)
            .unwrap();
        prop_assert_eq!(out.moves(), Some(chebyshev(case.start, case.target) as usize));
    }

    #[test]
    fn proptest_arrival_radius_is_respected(case in arb_case(0.2), radius in 0.0..4.0f64) {
        let g = case.grid();
        let out = SearchEngine::new(&g, SearchConfig::default())
            .unwrap()
            .find_path(case.start, case.target, radius)
            .unwrap();
        if let Some(last) = out.path().and_then(|p| p.last()) {
            prop_assert!(gridstar_paths::euclidean(*last, case.target) <= radius + 1e-9);
        }
    }
}

#[test]
fn move_kinds_follow_offsets() {
    let g = Grid::new(3, 3, Open).unwrap();
    for (n, kind) in g.neighbors(Point::new(1, 1)) {
        let diagonal = n.x != 1 && n.y != 1;
        assert_eq!(kind == MoveKind::Diagonal, diagonal);
    }
}
