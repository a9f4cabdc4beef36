//! Performance benchmark comparing serial and parallel generation steps

use std::time::Instant;

use game_of_life_3d::domain::{Dimension, Lattice, RuleSet};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn seeded(dimension: Dimension, side: usize) -> Lattice {
    let mut lattice = Lattice::new(dimension, side);
    lattice.populate(50, &mut StdRng::seed_from_u64(1));
    lattice
}

fn benchmark(mut lattice: Lattice, rule: RuleSet, parallel: bool, iterations: u32) -> f64 {
    let start = Instant::now();
    for _ in 0..iterations {
        lattice = if parallel {
            lattice.evolve_parallel(&rule)
        } else {
            lattice.evolve(&rule)
        };
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Game of Life Step Benchmark ===\n");

    let iterations = 10;
    let cases = [
        (Dimension::Two, 100, RuleSet::CONWAY),
        (Dimension::Two, 500, RuleSet::CONWAY),
        (Dimension::Two, 1000, RuleSet::CONWAY),
        (Dimension::Three, 20, RuleSet::LIFE_5766),
        (Dimension::Three, 50, RuleSet::LIFE_5766),
        (Dimension::Three, 100, RuleSet::LIFE_5766),
    ];

    println!("{:>14} {:>12} {:>12} {:>10}", "Lattice", "Serial", "Parallel", "Speedup");
    println!("{:-<52}", "");

    for (dimension, side, rule) in cases {
        let lattice = seeded(dimension, side);
        let serial_ms = benchmark(lattice.clone(), rule, false, iterations);
        let parallel_ms = benchmark(lattice, rule, true, iterations);

        let label = match dimension {
            Dimension::Two => format!("{side}x{side}"),
            Dimension::Three => format!("{side}x{side}x{side}"),
        };
        println!(
            "{:>14} {:>12.2} {:>12.2} {:>9.1}x",
            label,
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }
}
