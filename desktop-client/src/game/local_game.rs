use tokio::sync::mpsc::UnboundedReceiver;

use common::level_loader::load_level;
use common::log;
use common::scores::ScoreStore;

use crate::config::Config;
use crate::constants::TOP_SCORE_COUNT;
use crate::state::{ClientCommand, MenuCommand, SharedState};

use super::runner::run_duel;

/// Background task owning the engine and the score store. The UI talks to it
/// through the command channel and reads results back via `SharedState`.
pub async fn local_game_task(
    config: Config,
    shared_state: SharedState,
    mut command_rx: UnboundedReceiver<ClientCommand>,
) {
    let mut score_store = match ScoreStore::open(&config.scores_file) {
        Ok(store) => Some(store),
        Err(e) => {
            log!("Failed to open score store {}: {}", config.scores_file, e);
            shared_state.set_error(format!("High scores are unavailable: {}", e));
            None
        }
    };
    publish_high_scores(&shared_state, score_store.as_ref());

    while let Some(command) = command_rx.recv().await {
        match command {
            ClientCommand::Menu(MenuCommand::StartGame {
                level_path,
                player_one,
                player_two,
            }) => {
                let level = match load_level(&level_path) {
                    Ok(level) => level,
                    Err(e) => {
                        log!("Failed to load level {}: {}", level_path.display(), e);
                        shared_state.set_error(format!(
                            "Could not load level {}: {}",
                            level_path.display(),
                            e
                        ));
                        continue;
                    }
                };

                run_duel(
                    &config,
                    &shared_state,
                    &mut command_rx,
                    level,
                    player_one,
                    player_two,
                    score_store.as_mut(),
                )
                .await;
                publish_high_scores(&shared_state, score_store.as_ref());
            }
            ClientCommand::Menu(MenuCommand::RefreshHighScores) => {
                publish_high_scores(&shared_state, score_store.as_ref());
            }
            // Game commands outside a running duel are stale; drop them.
            ClientCommand::Game(_) => {}
        }
    }

    log!("Command channel closed, game task exiting");
}

fn publish_high_scores(shared_state: &SharedState, score_store: Option<&ScoreStore>) {
    if let Some(store) = score_store {
        shared_state.set_high_scores(store.top_scores(TOP_SCORE_COUNT));
    }
}
