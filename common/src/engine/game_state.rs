use crate::log;

use super::level::Level;
use super::player::{Player, PlayerIdentity};
use super::types::{Direction, GameResult, PlayerSlot};

/// Simulation state of one duel. Passive: an external loop calls `tick` at a
/// fixed cadence and feeds `set_direction` between ticks. Once the result is
/// terminal both calls become no-ops until `reset`.
#[derive(Clone, Debug)]
pub struct GameState {
    level: Level,
    players: [Player; 2],
    result: GameResult,
    tick: u64,
}

impl GameState {
    /// Player one starts facing right, player two facing left, so cycles
    /// seated at opposite ends move apart on the first tick.
    pub fn new(level: Level, player_one: PlayerIdentity, player_two: PlayerIdentity) -> Self {
        let one = Player::new(
            player_one,
            level.start_position(PlayerSlot::One),
            Direction::Right,
        );
        let two = Player::new(
            player_two,
            level.start_position(PlayerSlot::Two),
            Direction::Left,
        );
        Self {
            level,
            players: [one, two],
            result: GameResult::InProgress,
            tick: 0,
        }
    }

    /// Full replacement of the previous duel: fresh positions, empty trails,
    /// result back to `InProgress`, tick counter to zero.
    pub fn reset(&mut self, level: Level, player_one: PlayerIdentity, player_two: PlayerIdentity) {
        *self = GameState::new(level, player_one, player_two);
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn player(&self, slot: PlayerSlot) -> &Player {
        &self.players[slot.index()]
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    /// Number of effective ticks since the last reset. Drives the cosmetic
    /// elapsed-time display; the simulation itself never reads a clock.
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn winner_name(&self) -> Option<&str> {
        match self.result {
            GameResult::Won(slot) => Some(&self.player(slot).name),
            GameResult::InProgress | GameResult::Draw => None,
        }
    }

    /// Applies a direction change immediately, unless the game is over or the
    /// requested direction would reverse the player's current heading into
    /// its own most recent trail cell. Checked per call: a later call may
    /// overwrite an earlier one before the next tick.
    pub fn set_direction(&mut self, slot: PlayerSlot, direction: Direction) {
        if self.result.is_terminal() {
            return;
        }
        let player = &mut self.players[slot.index()];
        if direction.is_opposite(&player.direction) {
            return;
        }
        player.direction = direction;
    }

    /// Advances both players one cell and resolves the outcome. Returns the
    /// (possibly freshly latched) result; a terminal engine is left untouched.
    pub fn tick(&mut self) -> GameResult {
        if self.result.is_terminal() {
            return self.result;
        }

        for player in &mut self.players {
            player.advance();
        }
        self.tick += 1;

        let [one, two] = &self.players;

        // All collision facts are computed from post-move state before any
        // winner decision. A player is never checked against its own trail.
        let one_hit_wall = self.level.is_wall(one.position.x, one.position.y);
        let two_hit_wall = self.level.is_wall(two.position.x, two.position.y);
        let one_hit_trail = two.trail.contains(&one.position);
        let two_hit_trail = one.trail.contains(&two.position);
        let head_on = one.position == two.position;

        let one_eliminated = one_hit_wall || one_hit_trail;
        let two_eliminated = two_hit_wall || two_hit_trail;

        self.result = if head_on || (one_eliminated && two_eliminated) {
            GameResult::Draw
        } else if one_eliminated {
            GameResult::Won(PlayerSlot::Two)
        } else if two_eliminated {
            GameResult::Won(PlayerSlot::One)
        } else {
            GameResult::InProgress
        };

        match self.result {
            GameResult::Won(slot) => {
                let loser = self.player(slot.opponent());
                log!(
                    "[{}] {} wins on tick {}: {} crashed at ({}, {})",
                    self.level.name(),
                    self.player(slot).name,
                    self.tick,
                    loser.name,
                    loser.position.x,
                    loser.position.y
                );
            }
            GameResult::Draw => {
                log!("[{}] draw on tick {}", self.level.name(), self.tick);
            }
            GameResult::InProgress => {}
        }

        self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::types::{PlayerColor, Point};
    use std::collections::HashSet;

    fn identity(name: &str) -> PlayerIdentity {
        PlayerIdentity::new(name, PlayerColor::new(200, 40, 40))
    }

    fn open_level(width: i32, height: i32, one_start: Point, two_start: Point) -> Level {
        Level::new(
            width,
            height,
            HashSet::new(),
            one_start,
            two_start,
            "Open Field".to_string(),
        )
    }

    fn new_game(level: Level) -> GameState {
        GameState::new(level, identity("Alice"), identity("Bob"))
    }

    #[test]
    fn test_initial_state() {
        let game = new_game(open_level(10, 10, Point::new(1, 5), Point::new(8, 5)));
        assert_eq!(game.result(), GameResult::InProgress);
        assert_eq!(game.tick_count(), 0);
        assert_eq!(game.player(PlayerSlot::One).position, Point::new(1, 5));
        assert_eq!(game.player(PlayerSlot::One).direction, Direction::Right);
        assert_eq!(game.player(PlayerSlot::Two).position, Point::new(8, 5));
        assert_eq!(game.player(PlayerSlot::Two).direction, Direction::Left);
        assert_eq!(game.winner_name(), None);
    }

    #[test]
    fn test_reversal_is_rejected_other_turns_allowed() {
        let mut game = new_game(open_level(20, 20, Point::new(10, 10), Point::new(15, 15)));
        game.set_direction(PlayerSlot::Two, Direction::Right);
        assert_eq!(game.player(PlayerSlot::Two).direction, Direction::Left);
        game.set_direction(PlayerSlot::Two, Direction::Up);
        assert_eq!(game.player(PlayerSlot::Two).direction, Direction::Up);
    }

    #[test]
    fn test_reversal_check_is_per_call_not_per_tick() {
        let mut game = new_game(open_level(20, 20, Point::new(10, 10), Point::new(15, 15)));
        // One is heading Right. Right -> Down is legal, Down -> Left is
        // legal, so two calls between ticks can end up reversed overall.
        game.set_direction(PlayerSlot::One, Direction::Down);
        game.set_direction(PlayerSlot::One, Direction::Left);
        assert_eq!(game.player(PlayerSlot::One).direction, Direction::Left);
    }

    #[test]
    fn test_trail_grows_one_cell_per_tick() {
        let mut game = new_game(open_level(50, 50, Point::new(5, 25), Point::new(45, 25)));
        for _ in 0..10 {
            assert_eq!(game.tick(), GameResult::InProgress);
        }
        for slot in [PlayerSlot::One, PlayerSlot::Two] {
            let player = game.player(slot);
            assert_eq!(player.trail.len(), 10);
            assert!(!player.trail.contains(&player.position));
        }
        assert_eq!(game.tick_count(), 10);
    }

    #[test]
    fn test_simultaneous_wall_crashes_are_a_draw() {
        // Both head straight off opposite edges on the same tick.
        let mut game = new_game(open_level(3, 3, Point::new(2, 1), Point::new(0, 1)));
        assert_eq!(game.tick(), GameResult::Draw);
        assert_eq!(game.winner_name(), None);
    }

    #[test]
    fn test_single_wall_crash_awards_the_win() {
        let mut game = new_game(open_level(5, 5, Point::new(4, 2), Point::new(3, 2)));
        assert_eq!(game.tick(), GameResult::Won(PlayerSlot::Two));
        assert_eq!(game.winner_name(), Some("Bob"));
    }

    #[test]
    fn test_terminal_engine_ignores_further_ticks() {
        let mut game = new_game(open_level(5, 5, Point::new(4, 2), Point::new(3, 2)));
        game.tick();
        let position_one = game.player(PlayerSlot::One).position;
        let position_two = game.player(PlayerSlot::Two).position;
        let trail_two = game.player(PlayerSlot::Two).trail.clone();

        assert_eq!(game.tick(), GameResult::Won(PlayerSlot::Two));
        assert_eq!(game.player(PlayerSlot::One).position, position_one);
        assert_eq!(game.player(PlayerSlot::Two).position, position_two);
        assert_eq!(game.player(PlayerSlot::Two).trail, trail_two);
        assert_eq!(game.tick_count(), 1);
    }

    #[test]
    fn test_terminal_engine_ignores_set_direction() {
        let mut game = new_game(open_level(5, 5, Point::new(4, 2), Point::new(3, 2)));
        game.tick();
        game.set_direction(PlayerSlot::Two, Direction::Up);
        assert_eq!(game.player(PlayerSlot::Two).direction, Direction::Left);
    }

    #[test]
    fn test_head_on_collision_is_a_draw() {
        // 5x5, One at (1,2) facing right, Two at (3,2) facing left: one tick
        // puts both on (2,2).
        let mut game = new_game(open_level(5, 5, Point::new(1, 2), Point::new(3, 2)));
        assert_eq!(game.tick(), GameResult::Draw);
        assert_eq!(game.player(PlayerSlot::One).position, Point::new(2, 2));
        assert_eq!(game.player(PlayerSlot::Two).position, Point::new(2, 2));

        // Ticking the finished game changes nothing.
        assert_eq!(game.tick(), GameResult::Draw);
        assert_eq!(game.player(PlayerSlot::One).position, Point::new(2, 2));
        assert_eq!(game.tick_count(), 1);
    }

    #[test]
    fn test_running_into_opponent_trail_loses() {
        let mut game = new_game(open_level(7, 7, Point::new(2, 2), Point::new(4, 0)));

        // t1: One (2,2)->(3,2), Two (4,0)->(3,0).
        assert_eq!(game.tick(), GameResult::InProgress);
        // t2: One turns down to (3,3), Two keeps left to (2,0).
        game.set_direction(PlayerSlot::One, Direction::Down);
        assert_eq!(game.tick(), GameResult::InProgress);
        // t3: One turns left to (2,3), Two turns down to (2,1).
        game.set_direction(PlayerSlot::One, Direction::Left);
        game.set_direction(PlayerSlot::Two, Direction::Down);
        assert_eq!(game.tick(), GameResult::InProgress);
        assert!(game.player(PlayerSlot::One).trail.contains(&Point::new(2, 2)));

        // t4: Two steps onto (2,2), a cell of One's trail, while One moves
        // on to (1,3) which is not in Two's trail.
        let result = game.tick();
        assert!(!game
            .player(PlayerSlot::Two)
            .trail
            .contains(&game.player(PlayerSlot::One).position));
        assert_eq!(result, GameResult::Won(PlayerSlot::One));
        assert_eq!(game.winner_name(), Some("Alice"));
    }

    #[test]
    fn test_own_trail_is_not_an_obstacle() {
        // One drives a tight clockwise loop back onto its own trail cell.
        let mut game = new_game(open_level(20, 20, Point::new(2, 2), Point::new(15, 15)));
        assert_eq!(game.tick(), GameResult::InProgress); // One at (3,2)
        game.set_direction(PlayerSlot::One, Direction::Down);
        game.set_direction(PlayerSlot::Two, Direction::Down);
        assert_eq!(game.tick(), GameResult::InProgress); // One at (3,3)
        game.set_direction(PlayerSlot::One, Direction::Left);
        assert_eq!(game.tick(), GameResult::InProgress); // One at (2,3)
        game.set_direction(PlayerSlot::One, Direction::Up);
        assert_eq!(game.tick(), GameResult::InProgress); // One back on (2,2)
        assert!(game.player(PlayerSlot::One).trail.contains(&Point::new(2, 2)));
        assert_eq!(game.result(), GameResult::InProgress);
    }

    #[test]
    fn test_interior_wall_and_boundary_are_equivalent() {
        let mut walls = HashSet::new();
        walls.insert(Point::new(3, 2));
        let level = Level::new(
            5,
            5,
            walls,
            Point::new(2, 2),
            Point::new(2, 4),
            "Walled".to_string(),
        );
        let mut game = new_game(level);
        game.set_direction(PlayerSlot::Two, Direction::Down);
        // One steps right into the interior wall at (3,2); Two exits the
        // bottom edge. Both count as wall collisions: a draw.
        assert_eq!(game.tick(), GameResult::Draw);
    }

    #[test]
    fn test_reset_replaces_all_state() {
        let mut game = new_game(open_level(5, 5, Point::new(1, 2), Point::new(3, 2)));
        game.tick();
        assert!(game.result().is_terminal());

        game.reset(
            open_level(9, 9, Point::new(1, 4), Point::new(7, 4)),
            identity("Carol"),
            identity("Dave"),
        );
        assert_eq!(game.result(), GameResult::InProgress);
        assert_eq!(game.tick_count(), 0);
        assert_eq!(game.player(PlayerSlot::One).name, "Carol");
        assert_eq!(game.player(PlayerSlot::One).position, Point::new(1, 4));
        assert!(game.player(PlayerSlot::One).trail.is_empty());
        assert!(game.player(PlayerSlot::Two).trail.is_empty());
    }

    #[test]
    fn test_fixed_input_script_is_deterministic() {
        let script: &[(u64, PlayerSlot, Direction)] = &[
            (1, PlayerSlot::One, Direction::Down),
            (2, PlayerSlot::Two, Direction::Up),
            (4, PlayerSlot::One, Direction::Right),
            (6, PlayerSlot::Two, Direction::Left),
            (7, PlayerSlot::One, Direction::Up),
        ];

        let run = || {
            let mut game = new_game(open_level(30, 30, Point::new(5, 15), Point::new(25, 15)));
            let mut trace = Vec::new();
            for tick in 1..=12u64 {
                for (at, slot, direction) in script {
                    if *at == tick {
                        game.set_direction(*slot, *direction);
                    }
                }
                let result = game.tick();
                trace.push((
                    game.player(PlayerSlot::One).position,
                    game.player(PlayerSlot::Two).position,
                    result,
                ));
            }
            let one_trail = game.player(PlayerSlot::One).trail.clone();
            let two_trail = game.player(PlayerSlot::Two).trail.clone();
            (trace, one_trail, two_trail)
        };

        assert_eq!(run(), run());
    }
}
