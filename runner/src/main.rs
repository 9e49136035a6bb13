use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use engine::{Grid, Life};
use log::{debug, info, trace};

mod config;

use config::Config;

/// Drives `life` one [`Life::run`] tick at a time at the configured cadence,
/// until it settles or hits the generation bound.
fn run(config: &Config, life: &mut Life) {
    let mut last_step = Instant::now();
    let mut steps_since_log = 0u32;
    let mut last_rate_log = Instant::now();

    loop {
        if config.generations.is_some_and(|max| life.generation() >= max) {
            info!("reached generation limit {}", life.generation());
            break;
        }

        let elapsed = last_step.elapsed();
        if elapsed < config.step_interval {
            thread::sleep(config.step_interval - elapsed);
        }
        last_step = Instant::now();

        if life.run(1) == 0 {
            break;
        }
        let population = life.current().population();
        debug!("generation {}: population {}", life.generation(), population);
        trace!("\n{}", life.current());

        if life.is_settled() {
            if population == 0 {
                info!("died out at generation {}", life.generation());
            } else {
                info!(
                    "settled into a still life at generation {} (population {})",
                    life.generation(),
                    population
                );
            }
            break;
        }

        steps_since_log += 1;
        let elapsed = last_rate_log.elapsed();
        if elapsed >= Duration::from_secs(1) {
            let rate = steps_since_log as f64 / elapsed.as_secs_f64();
            info!("generations/s: {:.1}, population {}", rate, population);
            steps_since_log = 0;
            last_rate_log = Instant::now();
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_args(std::env::args().skip(1))?;
    let seed = config.seed.unwrap_or_else(rand::random);
    info!(
        "seeding {}x{} grid with alive probability {} (seed {})",
        config.rows, config.cols, config.alive_probability, seed
    );

    let grid = Grid::seeded(config.rows, config.cols, config.alive_probability, seed)
        .context("initialize grid")?;
    info!("initial population {}", grid.population());

    let mut life = Life::new(grid);
    run(&config, &mut life);

    info!(
        "stopped after {} generations with population {}",
        life.generation(),
        life.current().population()
    );
    Ok(())
}
