use anyhow::{Context, Result};
use clap::Parser;
use macroquad::prelude::*;
use tracing_subscriber::EnvFilter;

use game_of_life_3d::{
    Cli, Settings, Simulation, input,
    rendering::{self, MacroquadSink, Palette},
};

fn window_conf(settings: &Settings) -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: settings.window.width as i32,
        window_height: settings.window.height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

async fn run(mut simulation: Simulation, palette: Palette) {
    let mut sink = MacroquadSink;

    loop {
        if input::quit_requested() {
            tracing::info!(generation = simulation.universe.generation(), "quit requested");
            break;
        }

        simulation = input::process_keyboard_input(simulation);
        simulation = simulation.tick(get_frame_time());

        let polygons = simulation.polygons();
        rendering::draw_frame(&mut sink, &polygons, &palette);

        next_frame().await;
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    // Configuration errors surface here, before a window is opened
    let settings = cli.into_settings().context("invalid configuration")?;
    tracing::info!(
        window = %settings.window,
        variant = ?settings.variant,
        dim = settings.field_dim,
        population = settings.population,
        rules = %settings.rules,
        tick_rate = settings.tick_rate,
        "starting simulation"
    );

    let simulation = Simulation::new(&settings);
    macroquad::Window::from_config(window_conf(&settings), run(simulation, Palette::default()));

    Ok(())
}
