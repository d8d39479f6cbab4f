use fxhash::FxHashSet;
use grid_uninformed::visualizer::draw_board;
use grid_uninformed::{Grid, Outcome, Recorder, SearchConfig};

// Runs all six searches on the grid below, each on its own copy so that dynamic obstacles from
// one run never show up in the next.
//
// ...............
// ...............
// ..S............
// ...............
// ............#..
// .....#......#..
// .....#......#..
// .....#......#..
// ....#########..
// .....#......#..
// .....#......#..
// .....#......#..
// .....#......G..
// .....#.........
// .....#.........
//
// S marks the start, G the goal and # a wall.
fn main() {
    let config = SearchConfig::default();
    let grid = Grid::with_demo_walls();
    println!("{}", grid);
    let mut spawner = config.spawner(rand::thread_rng());
    for algorithm in config.algorithms() {
        println!("Running {} ...", algorithm);
        let mut recorder = Recorder::new();
        let report = algorithm.search(grid.clone(), &mut spawner, &mut recorder);
        let spawned = report.grid.wall_count() - grid.wall_count();
        match &report.outcome {
            Outcome::Found(path) => println!(
                "\tfound a path of length {} in {} steps ({} dynamic obstacles)",
                path.len(),
                report.steps,
                spawned
            ),
            outcome => println!(
                "\tno path ({:?}) after {} steps ({} dynamic obstacles)",
                outcome, report.steps, spawned
            ),
        }
        let empty = FxHashSet::default();
        let path = report.path().map(|p| p.as_slice());
        println!("{}", draw_board(&report.grid, &empty, &empty, path));
    }
}
