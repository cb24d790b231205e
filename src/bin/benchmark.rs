//! Step and rewind timings for the engine on large boards

use std::time::Instant;

use life_rewind::{Engine, Grid};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn random_grid(size: usize) -> Grid {
    let mut engine = Engine::new(size, size).expect("benchmark sizes are positive");
    engine.randomize(&mut StdRng::seed_from_u64(42), 0.3);
    engine.grid().clone()
}

fn benchmark_serial(size: usize, iterations: u32) -> f64 {
    let mut grid = random_grid(size);

    let start = Instant::now();
    for _ in 0..iterations {
        grid = grid.evolve();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn benchmark_parallel(size: usize, iterations: u32) -> f64 {
    let mut grid = random_grid(size);

    let start = Instant::now();
    for _ in 0..iterations {
        grid = grid.evolve_parallel();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

/// Time of one rewind after `iterations` steps through the engine
fn benchmark_rewind(size: usize, iterations: u32) -> f64 {
    let mut engine =
        Engine::with_history_depth(size, size, None).expect("benchmark sizes are positive");
    engine.randomize(&mut StdRng::seed_from_u64(42), 0.3);
    for _ in 0..iterations {
        engine.update();
    }

    let start = Instant::now();
    for _ in 0..iterations {
        engine.rewind(1);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Game of Life Engine Benchmark ===\n");

    let sizes = [64, 256, 512, 1024, 2048];
    let iterations = 20;

    println!(
        "{:>10} {:>12} {:>12} {:>12} {:>10}",
        "Size", "Serial", "Parallel", "Rewind", "Speedup"
    );
    println!("{:-<60}", "");

    for size in sizes {
        let serial_ms = benchmark_serial(size, iterations);
        let parallel_ms = benchmark_parallel(size, iterations);
        let rewind_ms = benchmark_rewind(size, iterations);

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>12.4} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            rewind_ms,
            serial_ms / parallel_ms
        );
    }

    println!("\nAll times in ms per generation.");
}
