use std::collections::HashSet;

use super::types::{PlayerSlot, Point};

/// Immutable playing field for one duel. Built by the level loader; the
/// engine only ever reads it.
#[derive(Clone, Debug)]
pub struct Level {
    width: i32,
    height: i32,
    walls: HashSet<Point>,
    player_one_start: Point,
    player_two_start: Point,
    name: String,
}

impl Level {
    /// The loader guarantees positive dimensions and in-bounds, non-wall
    /// start cells; this constructor does not re-validate them.
    pub fn new(
        width: i32,
        height: i32,
        walls: HashSet<Point>,
        player_one_start: Point,
        player_two_start: Point,
        name: String,
    ) -> Self {
        Self {
            width,
            height,
            walls,
            player_one_start,
            player_two_start,
            name,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Total over all integer coordinates: anything outside
    /// [0, width) x [0, height) counts as a wall.
    pub fn is_wall(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return true;
        }
        self.walls.contains(&Point::new(x, y))
    }

    /// Interior wall cells only, for rendering. Order is unspecified.
    pub fn wall_cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.walls.iter().copied()
    }

    pub fn start_position(&self, slot: PlayerSlot) -> Point {
        match slot {
            PlayerSlot::One => self.player_one_start,
            PlayerSlot::Two => self.player_two_start,
        }
    }
}
