use grid_util::point::Point;
use maze_astar::{find_path, mark_path, Maze, MazeError};

fn points(coords: &[(i32, i32)]) -> Vec<Point> {
    coords.iter().map(|&(r, c)| Point::new(r, c)).collect()
}

#[test]
fn detour_around_wall() {
    let maze = Maze::from_rows(vec![vec![0, 0], vec![-1, 0]]).unwrap();
    let path = find_path(&maze, Point::new(0, 0), Point::new(1, 1));
    assert_eq!(path, Some(points(&[(0, 0), (0, 1), (1, 1)])));
}

#[test]
fn enclosed_target_has_no_path() {
    let maze = Maze::from_rows(vec![vec![0, -1], vec![-1, 0]]).unwrap();
    assert_eq!(find_path(&maze, Point::new(0, 0), Point::new(1, 1)), None);

    // Target boxed in on all four sides
    let maze: Maze = "0 0 0 0 0\n0 0 -1 0 0\n0 -1 1 -1 0\n0 0 -1 0 0\n"
        .parse()
        .unwrap();
    let target = maze.find_exit_target().unwrap();
    assert_eq!(target, Point::new(2, 2));
    assert_eq!(find_path(&maze, Point::new(0, 0), target), None);
}

/// A U-shaped corridor forces the path away from the target before reaching it.
#[test]
fn follows_a_corridor() {
    let maze: Maze = "\
0 -1 0
0 -1 0
0 0 0
"
    .parse()
    .unwrap();
    let path = find_path(&maze, Point::new(0, 0), Point::new(0, 2)).unwrap();
    assert_eq!(
        path,
        points(&[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2), (1, 2), (0, 2)])
    );
}

#[test]
fn rendering_leaves_the_maze_alone() {
    let maze = Maze::sample();
    let before = maze.to_rows();
    let target = maze.find_exit_target().unwrap();
    let path = find_path(&maze, Point::new(0, 0), target).unwrap();
    let marked = mark_path(&maze, &path);
    assert_eq!(maze.to_rows(), before);
    assert_eq!(marked.marked_count(), path.len());
}

#[test]
fn malformed_input_is_rejected_before_search() {
    assert!(matches!(
        "0 0\n0\n".parse::<Maze>().unwrap_err(),
        MazeError::RaggedRow { row: 1, .. }
    ));
    assert!(matches!("".parse::<Maze>().unwrap_err(), MazeError::EmptyMaze));
}
