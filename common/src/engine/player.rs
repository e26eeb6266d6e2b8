use std::collections::HashSet;

use super::types::{Direction, PlayerColor, Point};

/// Name and color chosen in the start dialog. The engine treats both as
/// opaque; the name is only read back when reporting a winner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerIdentity {
    pub name: String,
    pub color: PlayerColor,
}

impl PlayerIdentity {
    pub fn new(name: impl Into<String>, color: PlayerColor) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

/// One light cycle: current head position, heading, and the set of cells it
/// has vacated. The start cell joins the trail only once the player moves
/// off it.
#[derive(Clone, Debug)]
pub struct Player {
    pub name: String,
    pub color: PlayerColor,
    pub position: Point,
    pub direction: Direction,
    pub trail: HashSet<Point>,
}

impl Player {
    pub fn new(identity: PlayerIdentity, start: Point, direction: Direction) -> Self {
        Self {
            name: identity.name,
            color: identity.color,
            position: start,
            direction,
            trail: HashSet::new(),
        }
    }

    /// One unit step in the current direction, leaving the old cell behind
    /// as trail.
    pub fn advance(&mut self) {
        let old_position = self.position;
        self.position = old_position.stepped(self.direction);
        self.trail.insert(old_position);
    }
}
