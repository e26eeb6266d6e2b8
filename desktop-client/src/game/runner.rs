use std::time::Duration;

use tokio::sync::mpsc::UnboundedReceiver;

use common::engine::{GameState, Level, PlayerIdentity, PlayerSlot};
use common::log;
use common::scores::ScoreStore;

use crate::config::Config;
use crate::state::{
    AppState, BoardSnapshot, ClientCommand, GameCommand, PlayerSetup, PlayerView, SharedState,
};

/// Drives one duel to completion: ticks the engine at the configured cadence
/// and applies steering commands between ticks. Returns when the duel ends,
/// the players quit to the menu, or the channel closes.
pub async fn run_duel(
    config: &Config,
    shared_state: &SharedState,
    command_rx: &mut UnboundedReceiver<ClientCommand>,
    level: Level,
    player_one: PlayerSetup,
    player_two: PlayerSetup,
    mut score_store: Option<&mut ScoreStore>,
) {
    let mut game = GameState::new(
        level,
        PlayerIdentity::new(player_one.name, player_one.color),
        PlayerIdentity::new(player_two.name, player_two.color),
    );
    log!(
        "Starting duel on [{}]: {} vs {}",
        game.level().name(),
        game.player(PlayerSlot::One).name,
        game.player(PlayerSlot::Two).name
    );

    shared_state.set_state(AppState::InGame {
        snapshot: build_snapshot(&game, config),
    });

    let mut tick_timer = tokio::time::interval(Duration::from_millis(u64::from(
        config.tick_interval_ms,
    )));
    // The first interval tick fires immediately; the first move should land
    // one full interval after the board appears.
    tick_timer.tick().await;

    loop {
        tokio::select! {
            _ = tick_timer.tick() => {
                let result = game.tick();
                if result.is_terminal() {
                    let winner = game.winner_name().map(str::to_string);
                    if let (Some(store), Some(name)) = (score_store.as_deref_mut(), winner.as_deref()) {
                        if let Err(e) = store.record_win(name) {
                            log!("Failed to record win for {}: {}", name, e);
                            shared_state.set_error(format!("Could not save the score: {}", e));
                        }
                    }
                    shared_state.set_state(AppState::GameOver {
                        snapshot: build_snapshot(&game, config),
                        winner,
                    });
                    return;
                }
                shared_state.set_state(AppState::InGame {
                    snapshot: build_snapshot(&game, config),
                });
            }
            command = command_rx.recv() => {
                match command {
                    Some(ClientCommand::Game(GameCommand::SetDirection { slot, direction })) => {
                        game.set_direction(slot, direction);
                    }
                    Some(ClientCommand::Game(GameCommand::QuitToMenu)) => {
                        log!("Duel on [{}] abandoned on tick {}", game.level().name(), game.tick_count());
                        shared_state.set_state(AppState::Setup);
                        return;
                    }
                    // Menu commands cannot arrive while the duel screen is
                    // up; ignore stragglers.
                    Some(ClientCommand::Menu(_)) => {}
                    None => return,
                }
            }
        }
    }
}

fn build_snapshot(game: &GameState, config: &Config) -> BoardSnapshot {
    let view = |slot: PlayerSlot| {
        let player = game.player(slot);
        PlayerView {
            name: player.name.clone(),
            color: player.color,
            position: player.position,
            trail: player.trail.iter().copied().collect(),
        }
    };
    BoardSnapshot {
        level_name: game.level().name().to_string(),
        width: game.level().width(),
        height: game.level().height(),
        walls: game.level().wall_cells().collect(),
        players: [view(PlayerSlot::One), view(PlayerSlot::Two)],
        tick: game.tick_count(),
        tick_interval_ms: config.tick_interval_ms,
        result: game.result(),
    }
}
