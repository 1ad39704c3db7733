//! Text rendering of a [Maze] with a path drawn over it.
use crate::maze::Maze;
use core::fmt;
use grid_util::grid::{SimpleValueGrid, ValueGrid};
use grid_util::point::Point;
use itertools::Itertools;
use serde::Deserialize;

/// Characters used for the three kinds of cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Symbols {
    pub wall: char,
    pub free: char,
    pub path: char,
}

impl Default for Symbols {
    fn default() -> Self {
        Symbols {
            wall: 'X',
            free: 'O',
            path: '_',
        }
    }
}

/// A copy of a maze's cells with a set of cells marked as lying on a path.
#[derive(Clone, Debug)]
pub struct MarkedMaze {
    pub cells: SimpleValueGrid<i32>,
    pub marked: SimpleValueGrid<bool>,
}

impl MarkedMaze {
    pub fn rows(&self) -> usize {
        self.cells.width()
    }

    pub fn cols(&self) -> usize {
        self.cells.height()
    }

    pub fn is_marked(&self, point: Point) -> bool {
        self.marked.point_in_bounds(point) && self.marked.get_point(point)
    }

    pub fn marked_count(&self) -> usize {
        self.points().filter(|&p| self.marked.get_point(p)).count()
    }

    fn points(&self) -> impl Iterator<Item = Point> {
        (0..self.rows() as i32)
            .cartesian_product(0..self.cols() as i32)
            .map(|(r, c)| Point::new(r, c))
    }

    fn symbol(&self, point: Point, symbols: &Symbols) -> char {
        if self.marked.get_point(point) {
            symbols.path
        } else if self.cells.get_point(point) >= 0 {
            symbols.free
        } else {
            symbols.wall
        }
    }

    /// One line per row, symbols separated by single spaces.
    pub fn render(&self, symbols: &Symbols) -> String {
        (0..self.rows() as i32)
            .map(|r| {
                (0..self.cols() as i32)
                    .map(|c| self.symbol(Point::new(r, c), symbols))
                    .join(" ")
                    + "\n"
            })
            .collect()
    }
}

impl fmt::Display for MarkedMaze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.render(&Symbols::default()))
    }
}

/// Copies `maze` and marks every point of `path` on the copy. Points outside the maze are
/// ignored and `maze` itself is left untouched.
pub fn mark_path(maze: &Maze, path: &[Point]) -> MarkedMaze {
    let mut marked = SimpleValueGrid::new(maze.rows(), maze.cols(), false);
    for &p in path.iter().filter(|&&p| maze.in_bounds(p)) {
        marked.set_point(p, true);
    }
    MarkedMaze {
        cells: maze.cells.clone(),
        marked,
    }
}

/// Renders `maze` with `path` overlaid.
pub fn render(maze: &Maze, path: &[Point], symbols: &Symbols) -> String {
    mark_path(maze, path).render(symbols)
}

/// Formats a path as `[(row, col), ...]`.
pub fn format_path(path: &[Point]) -> String {
    format!(
        "[{}]",
        path.iter().map(|p| format!("({}, {})", p.x, p.y)).join(", ")
    )
}
