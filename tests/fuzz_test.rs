//! Fuzzes the search by checking on many random mazes that a path is found exactly when the goal
//! is on the same connected component as the start, and that the path is as short as a
//! breadth-first search says it can be.
use grid_util::point::Point;
use maze_astar::{find_path, is_valid_path, Maze, Pathfinder};
use rand::prelude::*;
use std::collections::VecDeque;

fn random_maze(rows: usize, cols: usize, rng: &mut StdRng) -> Maze {
    let cells = (0..rows)
        .map(|_| {
            (0..cols)
                .map(|_| {
                    if rng.gen_bool(0.35) {
                        -rng.gen_range(1..5)
                    } else {
                        rng.gen_range(0..30)
                    }
                })
                .collect()
        })
        .collect();
    Maze::from_rows(cells).unwrap()
}

fn visualize_maze(maze: &Maze, start: &Point, end: &Point) {
    for r in 0..maze.rows() as i32 {
        for c in 0..maze.cols() as i32 {
            let p = Point::new(r, c);
            if *start == p {
                print!("S");
            } else if *end == p {
                print!("G");
            } else if maze.can_move_to(p) {
                print!(".");
            } else {
                print!("#");
            }
        }
        println!();
    }
}

/// Number of steps on a shortest route, if there is one.
fn bfs_distance(maze: &Maze, start: Point, end: Point) -> Option<usize> {
    let mut dist = vec![vec![usize::MAX; maze.cols()]; maze.rows()];
    let mut queue = VecDeque::new();
    dist[start.x as usize][start.y as usize] = 0;
    queue.push_back(start);
    while let Some(p) = queue.pop_front() {
        let d = dist[p.x as usize][p.y as usize];
        if p == end {
            return Some(d);
        }
        for n in maze.neighbours(&p) {
            let slot = &mut dist[n.x as usize][n.y as usize];
            if *slot == usize::MAX {
                *slot = d + 1;
                queue.push_back(n);
            }
        }
    }
    None
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_MAZES: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    let start = Point::new(0, 0);
    let end = Point::new(N as i32 - 1, N as i32 - 1);
    for _ in 0..N_MAZES {
        let mut maze = random_maze(N, N, &mut rng);
        maze.set(start.x, start.y, 0);
        maze.set(end.x, end.y, 0);
        maze.update();
        let reachable = maze.reachable(&start, &end);
        let path = find_path(&maze, start, end);
        // Show the maze if the outcome disagrees with the components
        if path.is_some() != reachable {
            visualize_maze(&maze, &start, &end);
        }
        assert_eq!(path.is_some(), reachable);
    }
}

#[test]
fn fuzz_distance() {
    const N_MAZES: usize = 2000;
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..N_MAZES {
        let rows = rng.gen_range(1..8);
        let cols = rng.gen_range(1..8);
        let maze = random_maze(rows, cols, &mut rng);
        let start = Point::new(rng.gen_range(0..rows) as i32, rng.gen_range(0..cols) as i32);
        let end = Point::new(rng.gen_range(0..rows) as i32, rng.gen_range(0..cols) as i32);
        if !maze.can_move_to(start) || !maze.can_move_to(end) {
            assert!(find_path(&maze, start, end).is_none());
            continue;
        }
        let expected = bfs_distance(&maze, start, end);
        let path = find_path(&maze, start, end);
        match (&path, expected) {
            (Some(path), Some(steps)) => {
                if path.len() != steps + 1 {
                    visualize_maze(&maze, &start, &end);
                    println!("A* path: {path:?}; BFS steps: {steps}");
                }
                assert_eq!(path.len(), steps + 1);
                assert!(is_valid_path(&maze, path));
                assert_eq!(path.first(), Some(&start));
                assert_eq!(path.last(), Some(&end));
            }
            (None, None) => {}
            _ => {
                visualize_maze(&maze, &start, &end);
                panic!("A* and BFS disagree on reachability: {path:?} vs {expected:?}");
            }
        }
    }
}

/// The component pre-check and the plain search agree.
#[test]
fn fuzz_pathfinder() {
    const N: usize = 8;
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..500 {
        let maze = random_maze(N, N, &mut rng);
        let start = Point::new(rng.gen_range(0..N) as i32, rng.gen_range(0..N) as i32);
        let end = Point::new(rng.gen_range(0..N) as i32, rng.gen_range(0..N) as i32);
        let direct = find_path(&maze, start, end);
        let mut pathfinder = Pathfinder::new(maze);
        assert_eq!(pathfinder.get_path(start, end), direct);
    }
}
