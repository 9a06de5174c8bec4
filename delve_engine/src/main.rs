#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Delve **
//! Turn-based dungeon crawl on a JSON map

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use log::{error, info};

use delve_engine::data_paths::default_map;
use delve_engine::{DELVE_VERSION, InputManager, RandDice, load_world, run_repl};

#[derive(Debug, Parser)]
#[command(name = "delve", version = DELVE_VERSION, about = "Explore a dungeon described by a JSON map.")]
struct Cli {
    /// Path to the map document (defaults to the bundled map)
    map: Option<PathBuf>,
    /// Seed the dice for a reproducible session
    #[arg(long)]
    seed: Option<u64>,
    /// Disable colour and line editing
    #[arg(long)]
    plain: bool,
}

fn main() -> Result<ExitCode> {
    env_logger::init();
    let cli = Cli::parse();
    if cli.plain {
        colored::control::set_override(false);
    }

    let Some(map_path) = cli.map.or_else(default_map) else {
        eprintln!("Please provide a map file.");
        return Ok(ExitCode::FAILURE);
    };
    info!("Start: loading map from {}", map_path.display());
    let mut world = match load_world(&map_path) {
        Ok(world) => world,
        Err(err) => {
            error!("map rejected: {err}");
            eprintln!("{}", format!("Error: {err}").red());
            return Ok(ExitCode::FAILURE);
        },
    };

    let mut dice = match cli.seed {
        Some(seed) => RandDice::seeded(seed),
        None => RandDice::from_entropy(),
    };
    let mut input = if cli.plain { InputManager::plain() } else { InputManager::new() };

    println!("{:^60}\n", "DELVE".bright_yellow().underline());
    let ending = run_repl(&mut world, &mut input, &mut dice).context("while running the game")?;
    info!("game over: {ending:?}");
    Ok(ExitCode::SUCCESS)
}
