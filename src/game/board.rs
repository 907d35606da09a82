use super::globals::*;
use super::player::PlayerToken;
use std::fmt;

/// One of the eight roads on the board. Each road groups exactly three
/// properties; owning all three unlocks improvements and monopoly rent.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Road {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl Road {
    /// All eight roads in board order.
    pub const ALL: [Road; 8] = [
        Road::A,
        Road::B,
        Road::C,
        Road::D,
        Road::E,
        Road::F,
        Road::G,
        Road::H,
    ];

    /// The road's two price tiers: properties 1 and 2 take the lower
    /// price, property 3 the higher.
    pub fn prices(self) -> (f64, f64) {
        ROAD_PRICES[self as usize]
    }
}

impl fmt::Display for Road {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", (b'A' + *self as u8) as char)
    }
}

#[derive(Debug, Clone, PartialEq)]
/// The property record of an ownable position.
pub struct Property {
    /// The road this property sits on.
    pub road: Road,
    /// The property's number on its road (1 to 3).
    pub road_slot: u8,
    /// The purchase price. Fixed at construction.
    pub price: f64,
    /// The player holding the deed, if any.
    pub owner: Option<PlayerToken>,
    /// Houses built here (0 to 4). Reset to 0 once the hotel goes up.
    pub improvements: u8,
    /// Whether a hotel stands here. Mutually exclusive with a nonzero
    /// house count.
    pub hotel: bool,
}

#[derive(Debug, Clone, PartialEq)]
/// A single position on the board. Plain positions (GO, JAIL and the
/// blank spaces) carry no property record; every ownable position does.
pub struct Position {
    /// The position's number, 1 to 40, unique and fixed at construction.
    pub number: u8,
    /// The property record, or `None` for a plain position.
    pub property: Option<Property>,
}

impl Position {
    fn plain(number: u8) -> Position {
        Position {
            number,
            property: None,
        }
    }

    fn with_property(number: u8, road: Road, road_slot: u8, price: f64) -> Position {
        Position {
            number,
            property: Some(Property {
                road,
                road_slot,
                price,
                owner: None,
                improvements: 0,
                hotel: false,
            }),
        }
    }

    /// Whether this position can be owned.
    pub fn is_property(&self) -> bool {
        self.property.is_some()
    }

    /// The position's display name: "GO", "JAIL", a road slot such as
    /// "B2", or nothing for a blank space.
    pub fn name(&self) -> String {
        match self.number {
            GO_POSITION => "GO".to_owned(),
            JAIL_POSITION => "JAIL".to_owned(),
            _ => match &self.property {
                Some(prpt) => format!("{}{}", prpt.road, prpt.road_slot),
                None => String::new(),
            },
        }
    }
}

/// Build the 40-position board: GO, road sections A to D, JAIL, then
/// sections E to H mirrored on the far side. Sections A-C and E-G hold
/// five positions each (three properties and two blanks); the
/// quarter-end sections D and H hold four.
pub fn build_board() -> Vec<Position> {
    let mut board = Vec::with_capacity(BOARD_SIZE);
    let mut number = GO_POSITION;
    board.push(Position::plain(number));

    for road in Road::ALL.iter().copied() {
        // JAIL sits between the D and E sections, opposite GO
        if road == Road::E {
            number += 1;
            board.push(Position::plain(number));
        }

        let (low, high) = road.prices();
        number += 1;
        board.push(Position::with_property(number, road, 1, low));
        number += 1;
        board.push(Position::plain(number));
        number += 1;
        board.push(Position::with_property(number, road, 2, low));
        number += 1;
        board.push(Position::with_property(number, road, 3, high));

        if road != Road::D && road != Road::H {
            number += 1;
            board.push(Position::plain(number));
        }
    }

    assert!(
        board.len() == BOARD_SIZE && number as usize == BOARD_SIZE,
        "board construction must produce exactly {} positions, got {}",
        BOARD_SIZE,
        board.len()
    );

    board
}

/// Advance `steps` positions from `from` along the board, wrapping
/// position 40 back around to position 1.
pub fn step(from: u8, steps: u8) -> u8 {
    ((from as usize - 1 + steps as usize) % BOARD_SIZE) as u8 + 1
}
