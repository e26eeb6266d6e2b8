mod config;
mod constants;
mod game;
mod state;
mod ui;

use clap::Parser;
use eframe::egui;
use tokio::sync::mpsc;

use common::logger::init_logger;

use config::ClientConfigManager;
use state::SharedState;
use ui::TronApp;

#[derive(Parser)]
#[command(name = "tron_client", about = "Two-player Tron light-cycle battle")]
struct Args {
    /// Path to the client config file
    #[arg(long, default_value = "tron_client.yaml")]
    config: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logger(None);

    let config_manager = ClientConfigManager::from_yaml_file(&args.config);
    let config = config_manager.get_config()?;

    let shared_state = SharedState::new();
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    let task_config = config.clone();
    let task_state = shared_state.clone();
    std::thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
        rt.block_on(game::local_game_task(task_config, task_state, command_rx));
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([820.0, 680.0])
            .with_title("Tron Light-Cycle Battle"),
        ..Default::default()
    };

    eframe::run_native(
        "Tron Light-Cycle Battle",
        options,
        Box::new(|_cc| {
            Ok(Box::new(TronApp::new(
                shared_state,
                command_tx,
                config,
                config_manager,
            )))
        }),
    )?;

    Ok(())
}
