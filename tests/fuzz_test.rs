//! Fuzzes the searches on many random grids. On static grids, path existence is checked against
//! the connected components and path lengths against an independent distance computation. With
//! obstacles enabled, every returned path is checked for shape.
use grid_uninformed::{
    Algorithm, Cell, Grid, NoObstacles, NoopVisualizer, Outcome, Path, RandomObstacles,
};
use rand::prelude::*;
use std::collections::{HashMap, VecDeque};

fn random_grid(n: usize, rng: &mut StdRng, density: f64) -> Grid {
    let start = Cell::new(0, 0);
    let goal = Cell::new(n as i32 - 1, n as i32 - 1);
    let mut grid = Grid::new(n, start, goal);
    for row in 0..n as i32 {
        for col in 0..n as i32 {
            let cell = Cell::new(row, col);
            if cell != start && cell != goal && rng.gen_bool(density) {
                grid.set_wall(cell, true);
            }
        }
    }
    grid.update();
    grid
}

fn visualize_grid(grid: &Grid) {
    println!("{}", grid);
}

/// Shortest path length in cells from start to goal, computed without the crate's searches.
fn shortest_cells(grid: &Grid) -> Option<usize> {
    let mut dist = HashMap::new();
    let mut queue = VecDeque::new();
    dist.insert(grid.start, 1);
    queue.push_back(grid.start);
    while let Some(cell) = queue.pop_front() {
        let d = dist[&cell];
        if cell == grid.goal {
            return Some(d);
        }
        for n in grid.neighbours(cell) {
            if !dist.contains_key(&n) {
                dist.insert(n, d + 1);
                queue.push_back(n);
            }
        }
    }
    None
}

fn run(algorithm: Algorithm, grid: &Grid) -> Outcome {
    algorithm.steps(&mut grid.clone(), &mut NoObstacles).finish()
}

fn assert_path_shape(grid: &Grid, path: &Path) {
    assert_eq!(path.first(), Some(&grid.start));
    assert_eq!(path.last(), Some(&grid.goal));
    for pair in path.windows(2) {
        assert!(grid.is_step(&pair[0], &pair[1]), "{:?} is not a move", pair);
    }
}

#[test]
fn fuzz_static() {
    const N: usize = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    for density in [0.1, 0.3, 0.45] {
        for _ in 0..N_GRIDS {
            let grid = random_grid(N, &mut rng, density);
            let reachable = grid.reachable(&grid.start, &grid.goal);
            let shortest = shortest_cells(&grid);
            if shortest.is_some() != reachable {
                visualize_grid(&grid);
            }
            assert_eq!(shortest.is_some(), reachable);

            let bfs = run(Algorithm::BreadthFirst, &grid);
            assert_eq!(bfs.path().map(|p| p.len()), shortest);
            assert_eq!(run(Algorithm::UniformCost, &grid), bfs);

            let dfs = run(Algorithm::DepthFirst, &grid);
            assert_eq!(dfs.is_found(), reachable);

            let bidirectional = run(Algorithm::Bidirectional, &grid);
            assert_eq!(bidirectional.is_found(), reachable);

            for outcome in [&bfs, &dfs, &bidirectional] {
                if let Some(path) = outcome.path() {
                    assert_path_shape(&grid, path);
                }
            }
            if let (Some(b), Some(d)) = (bfs.path(), bidirectional.path()) {
                if d.len() > b.len() + 1 {
                    visualize_grid(&grid);
                }
                assert!(d.len() >= b.len());
                assert!(d.len() <= b.len() + 1);
            }
            if !reachable {
                assert_eq!(bfs, Outcome::Exhausted);
                assert_eq!(bidirectional, Outcome::Exhausted);
            }
        }
    }
}

#[test]
fn fuzz_depth_limited() {
    const N: usize = 8;
    const N_GRIDS: usize = 300;
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..N_GRIDS {
        let grid = random_grid(N, &mut rng, 0.3);
        let Some(shortest) = shortest_cells(&grid) else {
            continue;
        };
        // A path of `shortest` cells needs `shortest - 1` moves.
        for limit in 0..shortest - 1 {
            assert!(!run(Algorithm::DepthLimited(limit), &grid).is_found());
        }
        let max_depth = 2 * N;
        let first = (1..=max_depth).find(|&l| run(Algorithm::DepthLimited(l), &grid).is_found());
        let iddfs = run(Algorithm::IterativeDeepening(max_depth), &grid);
        match first {
            Some(limit) => {
                let dls = run(Algorithm::DepthLimited(limit), &grid);
                assert_eq!(iddfs, dls);
                let path = iddfs.path().unwrap();
                assert!(path.len() <= limit + 1);
                assert_path_shape(&grid, path);
            }
            None => assert!(!iddfs.is_found()),
        }
    }
}

#[test]
fn fuzz_dynamic_obstacles() {
    const N: usize = 15;
    const N_RUNS: usize = 50;
    let mut rng = StdRng::seed_from_u64(2);
    let base = random_grid(N, &mut rng, 0.15);
    for seed in 0..N_RUNS as u64 {
        for algorithm in [
            Algorithm::BreadthFirst,
            Algorithm::DepthFirst,
            Algorithm::DepthLimited(18),
            Algorithm::IterativeDeepening(30),
            Algorithm::Bidirectional,
        ] {
            let mut spawner = RandomObstacles::new(0.05, StdRng::seed_from_u64(seed));
            let report = algorithm.search(base.clone(), &mut spawner, &mut NoopVisualizer);
            assert!(report.grid.endpoints_valid());
            assert!(report.grid.wall_count() >= base.wall_count());
            if let Some(path) = report.path() {
                assert_path_shape(&report.grid, path);
                // No cell appears twice in a path built from first-assigned parents.
                let mut cells = path.clone();
                cells.sort();
                cells.dedup();
                assert_eq!(cells.len(), path.len());
            }
        }
    }
}
