//! The Minipoly game-state engine.
//!
//! A [`Game`] owns the board, both players and the turn state machine.
//! Presentation layers drive it through [`Game::advance_turn`] and
//! [`Game::interact_with_current_position`], read it back through the
//! accessors, and never mutate state directly. Registered listeners are
//! called after every mutating operation so renderers can refresh
//! without polling.

mod board;
mod error;
mod globals;
mod player;
mod report;

pub use board::{build_board, step, Position, Property, Road};
pub use error::GameError;
pub use globals::{
    BOARD_SIZE, GO_POSITION, JAIL_POSITION, JAIL_REDIRECT_STEPS, NUM_PLAYERS, PROPERTY_POSITIONS,
    ROAD_POSITIONS, ROAD_PRICES, STARTING_BALANCE,
};
pub use player::{Player, PlayerToken};
pub use report::{ImprovementKind, RentCharge, TransactionReport, TurnReport};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// A callback invoked with the updated game after every mutating
/// operation.
pub type Listener = Box<dyn FnMut(&Game)>;

/// A single running game. Construct one per game and hand references to
/// whichever front ends render it; there is no global instance.
pub struct Game {
    board: Vec<Position>,
    players: [Player; NUM_PLAYERS],
    current: PlayerToken,
    first_turn: bool,
    last_roll: Option<u8>,
    rng: StdRng,
    listeners: Vec<Listener>,
}

impl Game {
    /*********        INITIALISATION INTERFACES        *********/

    /// Start a new game with the standard £2000.00 stake.
    pub fn new() -> Game {
        Game::create(StdRng::from_entropy(), STARTING_BALANCE)
    }

    /// Start a new game whose dice are driven by a seeded generator, so
    /// that a run can be reproduced.
    pub fn with_seed(seed: u64) -> Game {
        Game::create(StdRng::seed_from_u64(seed), STARTING_BALANCE)
    }

    /// Start a new game with a custom starting stake.
    pub fn with_starting_balance(balance: f64) -> Game {
        Game::create(StdRng::from_entropy(), balance)
    }

    fn create(rng: StdRng, balance: f64) -> Game {
        let game = Game {
            board: build_board(),
            players: [
                Player::new(PlayerToken::One, balance),
                Player::new(PlayerToken::Two, balance),
            ],
            current: PlayerToken::One,
            first_turn: true,
            last_roll: None,
            rng,
            listeners: vec![],
        };
        log::debug!(
            "new game: {} positions, stake £{:.2}",
            game.board.len(),
            balance
        );
        game
    }

    /*********        READ ACCESSORS        *********/

    /// The 40 positions of the board, in traversal order.
    pub fn board(&self) -> &[Position] {
        &self.board
    }

    pub fn player_one(&self) -> &Player {
        &self.players[0]
    }

    pub fn player_two(&self) -> &Player {
        &self.players[1]
    }

    /// The player whose turn it currently is (before the first turn,
    /// the player who will act first).
    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    pub fn current_token(&self) -> PlayerToken {
        self.current
    }

    /// The last dice roll played, `None` before the first turn.
    pub fn last_dice_roll(&self) -> Option<u8> {
        self.last_roll
    }

    /// True until the first call to `advance_turn`.
    pub fn is_first_turn(&self) -> bool {
        self.first_turn
    }

    fn player(&self, token: PlayerToken) -> &Player {
        &self.players[token.index()]
    }

    fn player_mut(&mut self, token: PlayerToken) -> &mut Player {
        &mut self.players[token.index()]
    }

    fn position(&self, number: u8) -> &Position {
        &self.board[number as usize - 1]
    }

    /*********        QUERY PREDICATES        *********/

    /// Whether the current player's position is an unowned property.
    pub fn is_buyable(&self) -> bool {
        match &self.position(self.current_player().position).property {
            Some(prpt) => prpt.owner.is_none(),
            None => false,
        }
    }

    /// Whether the current player's position is a property on a road the
    /// current player has monopolized, with no hotel built yet.
    pub fn is_improvable(&self) -> bool {
        match &self.position(self.current_player().position).property {
            Some(prpt) => !prpt.hotel && self.current_player().owns_all_on_road(prpt.road),
            None => false,
        }
    }

    /// Whether either player has run out of money. Once true, mutating
    /// operations fail with [`GameError::GameOver`], so this never
    /// reverts to false.
    pub fn is_game_over(&self) -> bool {
        self.players.iter().any(|player| player.balance <= 0.0)
    }

    /// The winning player, once the game is over.
    pub fn winner(&self) -> Option<PlayerToken> {
        if !self.is_game_over() {
            return None;
        }

        if self.player_one().balance <= 0.0 {
            Some(PlayerToken::Two)
        } else {
            Some(PlayerToken::One)
        }
    }

    /*********        TURN ENGINE        *********/

    /// Roll two six-sided dice and play out the next turn.
    pub fn advance_turn(&mut self) -> Result<TurnReport, GameError> {
        let roll = self.rng.gen_range(1..=6) + self.rng.gen_range(1..=6);
        self.advance_turn_with_roll(roll)
    }

    /// Play out the next turn with an explicit dice roll.
    ///
    /// The roll must be in 1..=12, the totals reachable with two
    /// six-sided dice. On the first call player one acts; afterwards the
    /// turn alternates before every move. Landing on JAIL redirects the
    /// mover a further 20 positions (on to GO), and landing on a
    /// property someone else owns settles rent automatically.
    pub fn advance_turn_with_roll(&mut self, roll: u8) -> Result<TurnReport, GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }
        if !(1..=12).contains(&roll) {
            return Err(GameError::InvalidRoll(roll));
        }

        // Player one acts without a swap on the very first turn
        if self.first_turn {
            self.first_turn = false;
        } else {
            self.current = self.current.other();
        }
        self.last_roll = Some(roll);

        let mover = self.current;
        let from = self.player(mover).position;
        let mut to = step(from, roll);

        let landed_on_jail = to == JAIL_POSITION;
        if landed_on_jail {
            to = step(to, JAIL_REDIRECT_STEPS);
        }
        self.player_mut(mover).position = to;

        let rent = self.settle_rent();
        let report = TurnReport {
            mover,
            roll,
            from,
            to,
            landed_on_jail,
            rent,
        };
        log::debug!("{}", report);
        if self.is_game_over() {
            log::info!("game over: {} is bankrupt", mover);
        }

        self.notify();
        Ok(report)
    }

    /// Charge rent if the current player stands on somebody else's
    /// property. The amount always moves to the mover's opponent: with
    /// exactly two players the opponent is necessarily the owner, so the
    /// two never diverge.
    fn settle_rent(&mut self) -> Option<RentCharge> {
        let mover = self.current;
        let number = self.player(mover).position;

        let (road, price, improvements, hotel, owner) = match &self.position(number).property {
            Some(prpt) => (
                prpt.road,
                prpt.price,
                prpt.improvements,
                prpt.hotel,
                prpt.owner?,
            ),
            None => return None,
        };
        if owner == mover {
            return None;
        }

        let amount = if self.player(owner).owns_all_on_road(road) {
            let mut amount = 0.2 * price;
            if hotel {
                // Flat bonus approximating the cumulative house and hotel value
                amount += 0.1 * (4.0 * 0.5 * price + 0.8 * price);
            } else if improvements > 0 {
                amount += 0.1 * (f64::from(improvements) * 0.5 * price);
            }
            amount
        } else {
            0.1 * price
        };

        let paid_to = mover.other();
        self.player_mut(mover).debit(amount);
        self.player_mut(paid_to).credit(amount);
        log::debug!(
            "{} pays £{:.2} rent to {} at Posn {}",
            mover,
            amount,
            paid_to,
            number
        );

        Some(RentCharge {
            position: number,
            amount,
            owner,
            paid_by: mover,
            paid_to,
        })
    }

    /*********        BUY / IMPROVE        *********/

    /// Buy the current position if it is unowned, or improve it if the
    /// current player has monopolized its road.
    ///
    /// Callers are expected to check [`Game::is_buyable`] and
    /// [`Game::is_improvable`] first; an ineligible position is a
    /// contract error and leaves the game untouched. The fifth
    /// improvement replaces the four houses with a hotel.
    pub fn interact_with_current_position(&mut self) -> Result<TransactionReport, GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }

        let buyable = self.is_buyable();
        if !buyable && !self.is_improvable() {
            return Err(GameError::NotActionable(self.current_player().position));
        }

        let mover = self.current;
        let number = self.player(mover).position;
        let name = self.position(number).name();
        let index = number as usize - 1;

        let report = if buyable {
            let price = {
                let prpt = match self.board[index].property.as_mut() {
                    Some(prpt) => prpt,
                    // The predicates only pass on properties
                    None => unreachable!(),
                };
                prpt.owner = Some(mover);
                prpt.price
            };

            let buyer = self.player_mut(mover);
            buyer.debit(price);
            buyer.properties.insert(number);
            TransactionReport::Purchase {
                buyer: mover,
                position: number,
                name,
                price,
            }
        } else {
            let (kind, cost) = {
                let prpt = match self.board[index].property.as_mut() {
                    Some(prpt) => prpt,
                    None => unreachable!(),
                };

                // The fifth improvement clears the houses and builds the hotel
                let built = if prpt.improvements == 4 {
                    prpt.improvements = 0;
                    prpt.hotel = true;
                    (ImprovementKind::Hotel, 0.8 * prpt.price)
                } else {
                    prpt.improvements += 1;
                    (ImprovementKind::House, 0.5 * prpt.price)
                };
                assert!(
                    prpt.improvements <= 4,
                    "improvements cannot advance beyond 4"
                );
                built
            };

            self.player_mut(mover).debit(cost);
            TransactionReport::Improvement {
                builder: mover,
                position: number,
                kind,
                cost,
            }
        };

        log::debug!("{}", report);
        if self.is_game_over() {
            log::info!("game over: {} is bankrupt", mover);
        }

        self.notify();
        Ok(report)
    }

    /*********        OBSERVERS        *********/

    /// Register a listener to be called after every mutating operation.
    pub fn subscribe(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }

    /// Listeners receive a shared reference while the engine is borrowed
    /// mutably, so the list is detached for the duration of the call.
    fn notify(&mut self) {
        let mut listeners = std::mem::replace(&mut self.listeners, vec![]);
        for listener in listeners.iter_mut() {
            listener(self);
        }
        self.listeners = listeners;
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Posn\tName\tPrice\tOwner\tImpvmts\tCounters")?;

        for posn in &self.board {
            let mut row = format!("{}:\t {}", posn.number, posn.name());

            if let Some(prpt) = &posn.property {
                let owner = match prpt.owner {
                    Some(token) => token.to_string(),
                    None => "[]".to_owned(),
                };
                let improvements = if prpt.hotel {
                    "Hotel".to_owned()
                } else {
                    prpt.improvements.to_string()
                };
                row += &format!("\t£{:.2}\t {}\t{}", prpt.price, owner, improvements);
            }

            for token in [PlayerToken::One, PlayerToken::Two].iter().copied() {
                if self.player(token).position == posn.number {
                    row += &format!("\t{}", token);
                }
            }

            writeln!(f, "{}", row)?;
        }

        Ok(())
    }
}
