mod colors;
mod config;
mod logger;
mod match_controller;
mod scoreboard;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use common::games::SessionRng;
use eframe::egui;

use match_controller::MatchController;
use ui::TicTacToeApp;

#[derive(Parser, Debug)]
#[command(name = "tictactoe_client", about = "Tic-tac-toe against a friend or the computer")]
struct Args {
    /// Settings file, defaults to tictactoe_client_config.yaml next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    log_prefix: Option<String>,

    /// Delete stored scores and preferences before starting
    #[arg(long)]
    reset_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logger::init_logger(args.log_prefix);

    let config_manager = config::get_config_manager(args.config);
    if args.reset_config {
        config_manager.clear_config()?;
        log!("Stored settings cleared");
    }

    let rng = SessionRng::from_random();
    log!("Starting tic-tac-toe client, bot seed {}", rng.seed());
    let controller = MatchController::new(config_manager, rng);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 640.0])
            .with_title("Tic-Tac-Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(|_cc| Ok(Box::new(TicTacToeApp::new(controller)))),
    )?;

    Ok(())
}
