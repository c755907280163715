use anyhow::{Context, Result};
use clap::Parser;
use common::Game;
use std::io;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

use terminal::cli::Args;
use terminal::render::buffer::BufferMount;
use terminal::render::preview;

fn main() -> ExitCode {
    // Load .env file if exists
    dotenv::dotenv().ok();

    // Initialize logging; also captures the core's `log` records
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error caught: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = args.resolve()?;

    let mut mount = BufferMount;
    let mut game = Game::from_config(&mut mount, &config).context("Failed to create surface")?;
    game.draw(args.x_offset, args.y_offset)
        .context("Failed to draw frame")?;

    let surface = game.surface();
    info!(
        width = surface.pixel_width(),
        height = surface.pixel_height(),
        cell_ratio = surface.cell_ratio(),
        "Frame drawn"
    );

    let samples = preview::sample(surface.target(), surface.cell_ratio());
    let mut stdout = io::stdout().lock();
    preview::write_preview(&mut stdout, &samples, &args.preview_config())
        .context("Failed to write preview")?;
    Ok(())
}
