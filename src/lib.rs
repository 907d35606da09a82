//! Minipoly: a two-player, deterministic-rule property-trading board game.
//!
//! The [`game`] module holds the complete game-state engine: board
//! topology, property ownership, the turn state machine and the
//! rent/purchase/improvement economy. Front ends (such as the bundled
//! console binary) drive it through [`game::Game::advance_turn`] and
//! [`game::Game::interact_with_current_position`], and re-render from the
//! read accessors after every call. The engine never prints or blocks;
//! it only mutates state and reports what happened.

pub mod game;
