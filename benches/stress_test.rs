use rand::Rng;
use sequin::{CandidateStrategy, Gsp, LevelObserver, MinerConfig, MiningError};
use std::time::Instant;

struct Quiet;

impl LevelObserver for Quiet {}

fn generate_transactions(
    num_transactions: usize,
    num_items: u32,
    avg_len: usize,
    coherence: f64,
) -> Vec<Vec<u32>> {
    let mut rng = rand::thread_rng();

    (0..num_transactions)
        .map(|_| {
            let random_factor: f64 = rng.r#gen();
            let len = (avg_len as f64 * (0.5 + random_factor)).round() as usize;
            let mut sequence = Vec::with_capacity(len);
            let mut current = rng.gen_range(0..num_items);
            for _ in 0..len {
                sequence.push(current);
                let follow: f64 = rng.r#gen();
                current = if follow < coherence {
                    (current + 1) % num_items
                } else {
                    rng.gen_range(0..num_items)
                };
            }
            sequence
        })
        .collect()
}

fn report(outcome: Result<sequin::MiningResult<u32>, MiningError>, start: Instant) {
    match outcome {
        Ok(result) => {
            println!("  ✓ Completed in {:?}", start.elapsed());
            println!("  Found {} patterns over {} levels", result.total_patterns(), result.len());
            println!("  Stopped: {:?}", result.termination());
        }
        Err(err) => {
            println!("  ✗ {}", err);
        }
    }
}

fn stress_test_large_input() {
    println!("\n=== Large Input Test ===");

    let configs = vec![
        ("10K x 20", 10_000, 20, 10),
        ("50K x 30", 50_000, 30, 12),
        ("100K x 40", 100_000, 40, 15),
    ];

    for (name, num_tx, num_items, avg_len) in configs {
        println!("\nTesting: {}", name);
        let start_gen = Instant::now();
        let miner = match Gsp::new(generate_transactions(num_tx, num_items, avg_len, 0.8)) {
            Ok(miner) => miner,
            Err(err) => {
                println!("  ✗ {}", err);
                continue;
            }
        };
        println!("  Prepared in {:?}", start_gen.elapsed());

        let start = Instant::now();
        report(miner.search_with(&MinerConfig::new(0.05), &Quiet), start);
    }
}

fn stress_test_candidate_explosion() {
    println!("\n=== Candidate Explosion Test ===");

    let miner = match Gsp::new(generate_transactions(5_000, 25, 20, 0.95)) {
        Ok(miner) => miner,
        Err(err) => {
            println!("  ✗ {}", err);
            return;
        }
    };

    for &min_support in &[0.2, 0.1, 0.05, 0.02] {
        for strategy in [CandidateStrategy::ItemProduct, CandidateStrategy::PrefixJoin] {
            println!("\nmin_support = {}, strategy = {:?}", min_support, strategy);
            let config = MinerConfig::new(min_support)
                .with_strategy(strategy)
                .with_candidate_limit(2_000_000);
            let start = Instant::now();
            report(miner.search_with(&config, &Quiet), start);
        }
    }
}

fn main() {
    println!("=== GSP Stress Testing Suite ===");
    println!("Testing large inputs and candidate growth\n");

    stress_test_large_input();
    stress_test_candidate_explosion();

    println!("\n=== Stress Testing Complete ===");
}
