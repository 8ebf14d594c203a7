/*
 * Lucid Swarm
 *
 * Renders the Lucid Solution Designers background animation in a native
 * window: a rotating field of faint points and a boids swarm that follows
 * the pointer. Each boid follows three rules plus pointer attraction:
 * 1. Separation: Avoid crowding neighbors
 * 2. Alignment: Steer towards the average heading of neighbors
 * 3. Cohesion: Steer towards the average position of neighbors
 *
 * Logging is controlled with RUST_LOG (defaults to info).
 */

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

use lucid_swarm::app;
use lucid_swarm::{Args, LaunchConfig};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    debug!("{:?}", args);

    let config = LaunchConfig::from_args(args).context("invalid scene parameters")?;
    app::run(config)
}
