use crate::astar::SearchContext;
use crate::maze::Maze;
use crate::{Path, C};
use grid_util::point::Point;
use itertools::Itertools;
use smallvec::SmallVec;

/// Context type used for searches on a [Maze].
pub type MazeSearchContext = SearchContext<Point, i32>;

/// A* on a [Maze] with 4-directional unit cost moves.
#[derive(Clone, Debug)]
pub struct AstarSolver;

impl Default for AstarSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver
    }

    /// Manhattan distance, scaled by C.
    pub fn cost(&self, p1: &Point, p2: &Point) -> i32 {
        p1.manhattan_distance(p2) * C
    }

    /// The unscaled cost. Must never overestimate for the first path found to be a shortest one.
    pub fn heuristic(&self, p1: &Point, p2: &Point) -> i32 {
        self.cost(p1, p2)
    }

    pub fn successors(&self, maze: &Maze, node: &Point) -> SmallVec<[(Point, i32); 4]> {
        maze.neighbours(node).into_iter().map(|p| (p, C)).collect()
    }

    /// Computes a path from `start` to `target`, both included. Returns [None] if either
    /// endpoint is not traversable or the frontier runs out before `target` is reached.
    pub fn find_path(
        &self,
        ctx: &mut MazeSearchContext,
        maze: &Maze,
        start: Point,
        target: Point,
    ) -> Option<Path> {
        if !maze.can_move_to(start) || !maze.can_move_to(target) {
            return None;
        }
        ctx.astar(
            &start,
            |node| self.successors(maze, node),
            |point| self.heuristic(point, &target),
            |point| *point == target,
        )
        .map(|(path, _cost)| path)
    }

    /// Sum of the move costs along `path`.
    pub fn path_cost(&self, path: &[Point]) -> i32 {
        path.iter()
            .tuple_windows()
            .map(|(a, b)| self.cost(a, b))
            .sum()
    }
}

/// Computes a shortest path from `start` to `target` on `maze`.
pub fn find_path(maze: &Maze, start: Point, target: Point) -> Option<Path> {
    let mut ctx = MazeSearchContext::new();
    AstarSolver::new().find_path(&mut ctx, maze, start, target)
}

/// Checks that every step of `path` is a single cardinal move onto a traversable cell.
pub fn is_valid_path(maze: &Maze, path: &[Point]) -> bool {
    path.iter().all(|&p| maze.can_move_to(p))
        && path
            .iter()
            .tuple_windows()
            .all(|(a, b)| a.manhattan_distance(b) == 1)
}
