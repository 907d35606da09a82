use super::board::{build_board, Road};
use lazy_static::lazy_static;
use std::collections::{HashMap, HashSet};

/// The number of players playing the game. Minipoly is strictly a
/// two-player game; the rent settlement rules depend on it.
pub const NUM_PLAYERS: usize = 2;

/// The number of positions on the game board.
pub const BOARD_SIZE: usize = 40;

/// Position number of the GO tile, where both players start.
pub const GO_POSITION: u8 = 1;

/// Position number of the JAIL tile. Landing here sends the player
/// straight on to GO.
pub const JAIL_POSITION: u8 = 21;

/// How many positions a player is moved forward after landing on JAIL.
pub const JAIL_REDIRECT_STEPS: u8 = 20;

/// The amount of money each player starts with.
pub const STARTING_BALANCE: f64 = 2000.0;

/// The price tiers of the eight roads, in board order. Properties 1 and
/// 2 of a road take the lower price, property 3 the higher.
pub const ROAD_PRICES: [(f64, f64); 8] = [
    (50.0, 70.0),
    (100.0, 120.0),
    (150.0, 170.0),
    (200.0, 220.0),
    (250.0, 270.0),
    (300.0, 320.0),
    (350.0, 370.0),
    (400.0, 420.0),
];

lazy_static! {
    /// Positions of the property tiles on the game board.
    pub static ref PROPERTY_POSITIONS: HashSet<u8> = build_board()
        .iter()
        .filter(|posn| posn.is_property())
        .map(|posn| posn.number)
        .collect();

    /// The three property positions of each road, in road-slot order.
    pub static ref ROAD_POSITIONS: HashMap<Road, [u8; 3]> = {
        let mut map: HashMap<Road, [u8; 3]> = HashMap::new();

        for posn in build_board() {
            if let Some(prpt) = posn.property {
                let slots = map.entry(prpt.road).or_insert([0; 3]);
                slots[(prpt.road_slot - 1) as usize] = posn.number;
            }
        }

        map
    };
}
