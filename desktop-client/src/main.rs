mod config;
mod ui;

use clap::Parser;
use eframe::egui;
use tictactoe_common::{log, logger, version::VERSION};

use config::{Config, get_config_manager};
use ui::TicTacToeApp;

#[derive(Parser)]
#[command(name = "tictactoe_client", version)]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    /// Path to the YAML config file
    #[arg(long)]
    config: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = get_config_manager(args.config.as_deref());
    let config = match config_manager.get_config() {
        Ok(config) => {
            log!("Config loaded, cell size {}", config.board.cell_size);
            config
        }
        Err(e) => {
            log!("Failed to load config, using defaults: {}", e);
            Config::default()
        }
    };

    log!("Starting TicTacToe client v{}", VERSION);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_title(format!("TicTacToe v{}", VERSION)),
        ..Default::default()
    };

    eframe::run_native(
        "TicTacToe Client",
        options,
        Box::new(|_cc| Ok(Box::new(TicTacToeApp::new(config)))),
    )?;

    log!("Client shut down");
    Ok(())
}
