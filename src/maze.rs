use crate::error::{MazeError, Result};
use crate::TARGET_SENTINEL;
use core::fmt;
use grid_util::grid::{SimpleValueGrid, ValueGrid};
use grid_util::point::Point;
use itertools::Itertools;
use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;
use std::str::FromStr;

/// Offsets tried during expansion: left, right, up, down.
pub const NEIGHBOUR_OFFSETS: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

const SAMPLE_MAZE: [[i32; 11]; 6] = [
    [26, -1, -1, -1, 12, 11, 10, 9, 10, 11, 12],
    [25, -1, 0, 0, -1, 12, -1, 8, -1, -1, 13],
    [24, 25, -1, 0, -1, 13, -1, 7, 6, 5, -1],
    [23, -1, 21, -1, 15, 14, 15, -1, -1, 4, 3],
    [22, 21, 20, -1, 16, -1, 16, 17, 18, -1, 2],
    [23, -1, 19, 18, 17, 18, 17, 18, -1, 2, 1],
];

/// [Maze] stores the integer cell costs of a rectangular grid together with a [UnionFind] over
/// its 4-connected traversable cells. Negative cells are walls, everything else can be walked
/// on at unit cost.
///
/// Points address cells as `(row, column)`: `x` is the row and `y` the column.
#[derive(Clone, Debug)]
pub struct Maze {
    pub cells: SimpleValueGrid<i32>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Default for Maze {
    fn default() -> Maze {
        Maze {
            cells: SimpleValueGrid::new(0, 0, 0),
            components: UnionFind::new(0),
            components_dirty: false,
        }
    }
}

impl Maze {
    /// Creates a `rows` x `cols` maze where every cell holds `value`.
    pub fn new(rows: usize, cols: usize, value: i32) -> Maze {
        let mut maze = Maze {
            cells: SimpleValueGrid::new(rows, cols, value),
            components: UnionFind::new(rows * cols),
            components_dirty: false,
        };
        maze.generate_components();
        maze
    }

    /// Builds a maze from row-major cell values. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<i32>>) -> Result<Maze> {
        let expected = rows.first().map(|r| r.len()).unwrap_or(0);
        if expected == 0 {
            return Err(MazeError::EmptyMaze);
        }
        if let Some((row, found)) = rows
            .iter()
            .map(|r| r.len())
            .enumerate()
            .find(|&(_, len)| len != expected)
        {
            return Err(MazeError::RaggedRow {
                row,
                expected,
                found,
            });
        }
        let mut cells = SimpleValueGrid::new(rows.len(), expected, 0);
        for (r, row) in rows.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                cells.set(r as i32, c as i32, value);
            }
        }
        let mut maze = Maze {
            cells,
            components: UnionFind::new(0),
            components_dirty: false,
        };
        maze.generate_components();
        Ok(maze)
    }

    /// The 6x11 maze solved by the binary when no maze file is given. Its exit is the `1` in
    /// the bottom right corner.
    pub fn sample() -> Maze {
        let mut maze = Maze::new(SAMPLE_MAZE.len(), SAMPLE_MAZE[0].len(), 0);
        for (r, row) in SAMPLE_MAZE.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                maze.cells.set(r as i32, c as i32, value);
            }
        }
        maze.generate_components();
        maze
    }

    pub fn rows(&self) -> usize {
        self.cells.width()
    }

    pub fn cols(&self) -> usize {
        self.cells.height()
    }

    pub fn in_bounds(&self, point: Point) -> bool {
        self.cells.point_in_bounds(point)
    }

    /// Bounds-checked lookup of a cell value.
    pub fn cell(&self, point: Point) -> Option<i32> {
        if self.in_bounds(point) {
            Some(self.cells.get_point(point))
        } else {
            None
        }
    }

    /// True for in-bounds cells with a non-negative cost. Points off the grid are simply not
    /// traversable.
    pub fn can_move_to(&self, point: Point) -> bool {
        self.cell(point).is_some_and(|value| value >= 0)
    }

    /// Traversable 4-neighbourhood of `point`, in [NEIGHBOUR_OFFSETS] order.
    pub fn neighbours(&self, point: &Point) -> SmallVec<[Point; 4]> {
        NEIGHBOUR_OFFSETS
            .iter()
            .map(|&(dr, dc)| Point::new(point.x + dr, point.y + dc))
            .filter(|&p| self.can_move_to(p))
            .collect()
    }

    /// Updates a cell. Joins newly connected components and flags the components as dirty if
    /// a new wall (potentially) breaks a component apart. Writes outside the maze are ignored.
    pub fn set(&mut self, row: i32, col: i32, value: i32) {
        let p = Point::new(row, col);
        if !self.in_bounds(p) {
            return;
        }
        let was_open = self.can_move_to(p);
        self.cells.set(row, col, value);
        if value < 0 {
            if was_open {
                self.components_dirty = true;
            }
        } else {
            let p_ix = self.cells.get_ix_point(&p);
            for n in self.neighbours(&p) {
                self.components.union(p_ix, self.cells.get_ix_point(&n));
            }
        }
    }

    /// Row-major scan for the first cell equal to `sentinel`.
    pub fn find_target(&self, sentinel: i32) -> Result<Point> {
        (0..self.rows() as i32)
            .cartesian_product(0..self.cols() as i32)
            .map(|(r, c)| Point::new(r, c))
            .find(|&p| self.cells.get_point(p) == sentinel)
            .ok_or(MazeError::TargetNotFound { sentinel })
    }

    /// [find_target](Self::find_target) with the conventional exit marker.
    pub fn find_exit_target(&self) -> Result<Point> {
        self.find_target(TARGET_SENTINEL)
    }

    /// Retrieves the component id a given [Point] belongs to. Walls and points off the grid
    /// have none.
    pub fn get_component(&self, point: &Point) -> Option<usize> {
        if self.can_move_to(*point) {
            Some(self.components.find(self.cells.get_ix_point(point)))
        } else {
            None
        }
    }

    /// Checks if start and goal are traversable and on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same component. Walls and points off the grid
    /// are unreachable from anywhere.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        if self.can_move_to(*start) && self.can_move_to(*goal) {
            let start_ix = self.cells.get_ix_point(start);
            let goal_ix = self.cells.get_ix_point(goal);
            !self.components.equiv(start_ix, goal_ix)
        } else {
            true
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up traversable neighbours. Only the
    /// lower and right neighbours need to be joined since the relation is symmetric.
    pub fn generate_components(&mut self) {
        let rows = self.rows() as i32;
        let cols = self.cols() as i32;
        self.components = UnionFind::new(self.rows() * self.cols());
        self.components_dirty = false;
        for (r, c) in (0..rows).cartesian_product(0..cols) {
            let point = Point::new(r, c);
            if !self.can_move_to(point) {
                continue;
            }
            let parent_ix = self.cells.get_ix_point(&point);
            for p in [Point::new(r + 1, c), Point::new(r, c + 1)] {
                if self.can_move_to(p) {
                    let ix = self.cells.get_ix_point(&p);
                    self.components.union(parent_ix, ix);
                }
            }
        }
    }

    /// Copies the cells back out in row-major order.
    pub fn to_rows(&self) -> Vec<Vec<i32>> {
        (0..self.rows() as i32)
            .map(|r| {
                (0..self.cols() as i32)
                    .map(|c| self.cells.get(r, c))
                    .collect()
            })
            .collect()
    }
}

impl FromStr for Maze {
    type Err = MazeError;

    /// Parses whitespace separated integers, one row per line. Blank lines are skipped and do
    /// not count towards the row numbers reported in errors.
    fn from_str(s: &str) -> Result<Maze> {
        let mut rows = Vec::new();
        for line in s.lines().filter(|line| !line.trim().is_empty()) {
            let row = line
                .split_whitespace()
                .map(|token| {
                    token.parse::<i32>().map_err(|_| MazeError::InvalidCell {
                        row: rows.len(),
                        token: token.to_owned(),
                    })
                })
                .collect::<Result<Vec<i32>>>()?;
            rows.push(row);
        }
        Maze::from_rows(rows)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.to_rows() {
            writeln!(f, "{}", row.iter().join(" "))?;
        }
        Ok(())
    }
}
