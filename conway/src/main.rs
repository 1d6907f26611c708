// main.rs - Conway's Game of Life desktop front end

use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use eframe::egui;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use life_engine::config::DEFAULT_TICK_INTERVAL_MS;
use life_engine::grid::DEFAULT_GRID_SIZE;
use life_engine::{GridEngine, SimulationConfig, SimulationController, patterns};

mod ui;

use ui::ConwayApp;

#[derive(Parser, Debug)]
#[command(name = "conway", version, about = "Conway's Game of Life")]
struct Args {
    /// Cells per side of the square grid
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
    grid_size: usize,

    /// Milliseconds between generations while running
    #[arg(long, default_value_t = DEFAULT_TICK_INTERVAL_MS)]
    tick_interval_ms: u64,

    /// Preset to load at startup, e.g. "Glider" or "Gosper Glider Gun"
    #[arg(long)]
    pattern: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value_t = Level::INFO)]
    log_level: Level,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(args.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = SimulationConfig {
        grid_size: args.grid_size,
        tick_interval_ms: args.tick_interval_ms,
    };
    config.validate().context("invalid simulation settings")?;

    let engine = Arc::new(GridEngine::new(config.size()));
    if let Some(name) = &args.pattern {
        let pattern = patterns::find(name)?;
        engine
            .load_pattern(pattern, pattern.centered_origin(config.size()))
            .with_context(|| format!("pattern `{}` does not fit the grid", pattern.name))?;
    }

    // Background generations run here; must outlive the window.
    let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    let handle = runtime.handle().clone();

    info!(grid_size = config.grid_size, tick_interval_ms = config.tick_interval_ms, "opening window");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 1000.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |cc| {
            let ctx = cc.egui_ctx.clone();
            let controller = SimulationController::new(engine, config.tick_interval(), handle)
                .with_tick_listener(move |_| ctx.request_repaint());
            Box::new(ConwayApp::new(controller))
        }),
    )
    .map_err(|err| anyhow!("window closed with an error: {err}"))?;

    info!("window closed");
    Ok(())
}
