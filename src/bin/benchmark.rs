//! Headless benchmark: serial vs rayon generation stepping

use std::time::Instant;

use life_metrics::{Grid, Topology};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn random_grid(size: usize, topology: Topology) -> Option<Grid> {
    let mut grid = Grid::new(size, size, topology).ok()?;
    grid.randomize(&mut StdRng::seed_from_u64(size as u64), 0.2);
    Some(grid)
}

fn benchmark(grid: &Grid, iterations: u32, step: fn(&Grid) -> Grid) -> f64 {
    let mut grid = grid.clone();
    let start = Instant::now();
    for _ in 0..iterations {
        grid = step(&grid);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Game of Life Step Benchmark ===\n");

    let sizes = [50, 100, 200, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>10} {:>10} {:>12} {:>12} {:>10}", "Size", "Topology", "Serial", "Parallel", "Speedup");
    println!("{:-<60}", "");

    for size in sizes {
        for topology in [Topology::Toroidal, Topology::Bounded] {
            let Some(grid) = random_grid(size, topology) else {
                continue;
            };

            let serial_ms = benchmark(&grid, iterations, Grid::step);
            let parallel_ms = benchmark(&grid, iterations, Grid::step_parallel);

            println!(
                "{:>10} {:>10} {:>10.3}ms {:>10.3}ms {:>9.1}x",
                format!("{}x{}", size, size),
                topology.name(),
                serial_ms,
                parallel_ms,
                serial_ms / parallel_ms.max(f64::EPSILON)
            );
        }
    }
}
