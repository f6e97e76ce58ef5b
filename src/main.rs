//! Demo binary: run the GA once and print the final summary.
//!
//! Per-generation progress goes through the `log` facade; run with
//! `RUST_LOG=info` to see it.

use quadga::{Engine, GaConfig};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GaConfig::new(0.9, 0.05, true, 20, 50);
    let engine = match Engine::new(config) {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            std::process::exit(1);
        }
    };

    let result = engine.run();
    println!("average fitness: {:.3}", result.average_fitness);
    println!("best fitness:    {}", result.best_fitness);
    println!("best individual: x = {}", result.best);
}
