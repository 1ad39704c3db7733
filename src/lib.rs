//! # maze_astar
//!
//! Shortest paths on integer mazes using
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) with 4-directional unit cost moves
//! and the [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) as heuristic.
//! Negative cells are walls; the exit is found by scanning for a sentinel value. Pre-computes
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory)) to avoid
//! flood-filling behaviour if no path exists. Solved mazes can be rendered as text with the
//! path drawn over them.
pub mod astar;
pub mod config;
pub mod error;
pub mod maze;
pub mod render;
pub mod solver;

use grid_util::point::Point;
use log::{info, warn};

pub use crate::config::Config;
pub use crate::error::{MazeError, Result};
pub use crate::maze::Maze;
pub use crate::render::{format_path, mark_path, render, MarkedMaze, Symbols};
pub use crate::solver::{find_path, is_valid_path, AstarSolver};

use crate::astar::SearchStats;
use crate::solver::MazeSearchContext;

/// Cost of a single move.
pub const C: i32 = 1;
/// Cell value that marks the exit of a maze.
pub const TARGET_SENTINEL: i32 = 1;

/// Positions from start to target, both included.
pub type Path = Vec<Point>;

/// Result of [Pathfinder::solve].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    pub start: Point,
    pub target: Point,
    pub path: Option<Path>,
}

/// [Pathfinder] bundles a [Maze] with a solver and a reusable search context.
pub struct Pathfinder {
    pub maze: Maze,
    pub solver: AstarSolver,
    context: MazeSearchContext,
}

impl Pathfinder {
    pub fn new(maze: Maze) -> Pathfinder {
        Pathfinder {
            maze,
            solver: AstarSolver::new(),
            context: MazeSearchContext::new(),
        }
    }

    /// Computes a path from start to target. Returns [None] straight away when the two are not
    /// on the same connected component.
    pub fn get_path(&mut self, start: Point, target: Point) -> Option<Path> {
        self.maze.update();
        if self.maze.unreachable(&start, &target) {
            info!("{} is not reachable from {}", target, start);
            return None;
        }
        info!("{} is reachable from {}, computing path", target, start);
        let path = self
            .solver
            .find_path(&mut self.context, &self.maze, start, target);
        if path.is_none() {
            warn!("Reachable target could not be pathed to, are the components correct?");
        }
        path
    }

    /// Locates the exit using the configured sentinel and paths to it from the configured
    /// start.
    pub fn solve(&mut self, config: &Config) -> Result<Solution> {
        let start = config.start_point();
        if !self.maze.in_bounds(start) {
            return Err(MazeError::StartOutOfBounds {
                row: start.x,
                col: start.y,
            });
        }
        let target = self.maze.find_target(config.target_sentinel)?;
        info!("Exit found at {}", target);
        let path = self.get_path(start, target);
        Ok(Solution {
            start,
            target,
            path,
        })
    }

    /// Counters of the last search. Searches skipped by the component check leave these as
    /// they were.
    pub fn stats(&self) -> SearchStats {
        self.context.stats()
    }

    /// Positions expanded by the last search, in order.
    pub fn expanded(&self) -> Vec<Point> {
        self.context.expanded().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solve_sample_with_defaults() {
        let mut pathfinder = Pathfinder::new(Maze::sample());
        let solution = pathfinder.solve(&Config::default()).unwrap();
        assert_eq!(solution.start, Point::new(0, 0));
        assert_eq!(solution.target, Point::new(5, 10));
        let path = solution.path.unwrap();
        assert_eq!(path.len(), 26);
        assert!(pathfinder.stats().expanded >= path.len());
        assert_eq!(pathfinder.expanded().first(), Some(&Point::new(0, 0)));
    }

    #[test]
    fn missing_target_is_an_error() {
        let maze = Maze::from_rows(vec![vec![0, 0], vec![0, 0]]).unwrap();
        let mut pathfinder = Pathfinder::new(maze);
        let err = pathfinder.solve(&Config::default()).unwrap_err();
        assert!(matches!(err, MazeError::TargetNotFound { sentinel: 1 }));
    }

    #[test]
    fn start_outside_the_maze_is_an_error() {
        let mut pathfinder = Pathfinder::new(Maze::sample());
        let config = Config {
            start: [6, 0],
            ..Config::default()
        };
        assert!(matches!(
            pathfinder.solve(&config).unwrap_err(),
            MazeError::StartOutOfBounds { row: 6, col: 0 }
        ));
    }

    #[test]
    fn unreachable_target_skips_the_search() {
        let maze = Maze::from_rows(vec![vec![0, -1], vec![-1, 1]]).unwrap();
        let mut pathfinder = Pathfinder::new(maze);
        let solution = pathfinder.solve(&Config::default()).unwrap();
        assert_eq!(solution.target, Point::new(1, 1));
        assert!(solution.path.is_none());
        assert_eq!(pathfinder.stats().created, 0);
    }

    #[test]
    fn new_walls_are_respected() {
        let mut pathfinder = Pathfinder::new(Maze::new(1, 3, 0));
        let start = Point::new(0, 0);
        let end = Point::new(0, 2);
        assert_eq!(pathfinder.get_path(start, end).map(|p| p.len()), Some(3));
        pathfinder.maze.set(0, 1, -1);
        assert!(pathfinder.get_path(start, end).is_none());
    }
}
