use super::board::Road;
use super::globals::*;
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
/// Identity tag for one of the two players.
pub enum PlayerToken {
    One,
    Two,
}

impl PlayerToken {
    /// The opposing player's token.
    pub fn other(self) -> PlayerToken {
        match self {
            PlayerToken::One => PlayerToken::Two,
            PlayerToken::Two => PlayerToken::One,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            PlayerToken::One => 0,
            PlayerToken::Two => 1,
        }
    }
}

impl fmt::Display for PlayerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerToken::One => write!(f, "[P1]"),
            PlayerToken::Two => write!(f, "[P2]"),
        }
    }
}

#[derive(Debug, Clone)]
/// A player of the game. Exactly two are created, once, by the engine.
pub struct Player {
    /// Which of the two players this is.
    pub token: PlayerToken,
    /// The player's bank balance. Reaching zero or below ends the game.
    pub balance: f64,
    /// The number of the position the player's counter is on.
    pub position: u8,
    /// Numbers of the positions this player owns. Kept consistent with
    /// the `owner` field of each property record.
    pub properties: HashSet<u8>,
}

impl Player {
    pub(crate) fn new(token: PlayerToken, balance: f64) -> Player {
        Player {
            token,
            balance,
            position: GO_POSITION,
            properties: HashSet::new(),
        }
    }

    /// Whether this player is player one, who always takes the first turn.
    pub fn is_player_one(&self) -> bool {
        self.token == PlayerToken::One
    }

    /// Whether this player holds all three properties of `road`.
    pub fn owns_all_on_road(&self, road: Road) -> bool {
        match ROAD_POSITIONS.get(&road) {
            Some(positions) => positions.iter().all(|posn| self.properties.contains(posn)),
            None => false,
        }
    }

    pub(crate) fn credit(&mut self, amount: f64) {
        self.balance += amount;
    }

    pub(crate) fn debit(&mut self, amount: f64) {
        self.balance -= amount;
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token)
    }
}
