//! End-to-end tests driving the engine the way a front end would:
//! forced rolls to steer the players, then assertions on the reports
//! and the queryable state.

use minipoly::game::{Game, GameError, ImprovementKind, PlayerToken, TransactionReport};
use std::cell::RefCell;
use std::rc::Rc;

fn assert_money(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected £{:.2}, got £{:.2}",
        expected,
        actual
    );
}

/// Walk player one onto A1, A2 and A3 and buy each, while player two
/// hops between blank positions.
fn monopolize_road_a(game: &mut Game) {
    game.advance_turn_with_roll(1).unwrap(); // [P1] -> 2 (A1)
    game.interact_with_current_position().unwrap();
    game.advance_turn_with_roll(2).unwrap(); // [P2] -> 3
    game.advance_turn_with_roll(2).unwrap(); // [P1] -> 4 (A2)
    game.interact_with_current_position().unwrap();
    game.advance_turn_with_roll(5).unwrap(); // [P2] -> 8
    game.advance_turn_with_roll(1).unwrap(); // [P1] -> 5 (A3)
    game.interact_with_current_position().unwrap();
}

/// Same for road B (positions 7, 9 and 10), leaving player two on
/// position 5 so a short roll lands them on the monopolized road.
fn monopolize_road_b(game: &mut Game) {
    game.advance_turn_with_roll(6).unwrap(); // [P1] -> 7 (B1)
    game.interact_with_current_position().unwrap();
    game.advance_turn_with_roll(2).unwrap(); // [P2] -> 3
    game.advance_turn_with_roll(2).unwrap(); // [P1] -> 9 (B2)
    game.interact_with_current_position().unwrap();
    game.advance_turn_with_roll(2).unwrap(); // [P2] -> 5
    game.advance_turn_with_roll(1).unwrap(); // [P1] -> 10 (B3)
    game.interact_with_current_position().unwrap();
}

#[test]
fn player_one_takes_the_first_turn_without_a_swap() {
    let mut game = Game::new();
    assert!(game.is_first_turn());
    assert_eq!(game.last_dice_roll(), None);

    let report = game.advance_turn_with_roll(6).unwrap();
    assert_eq!(report.mover, PlayerToken::One);
    assert_eq!(report.roll, 6);
    assert_eq!(report.from, 1);
    assert_eq!(report.to, 7);
    assert!(!report.landed_on_jail);
    assert_eq!(report.rent, None);
    assert_eq!(report.to_string(), "[P1] rolls 6\nMoving from Posn 1 to Posn 7");

    assert!(!game.is_first_turn());
    assert_eq!(game.current_token(), PlayerToken::One);
    assert_eq!(game.current_player().position, 7);
    assert_eq!(game.last_dice_roll(), Some(6));
}

#[test]
fn turns_alternate_after_the_first() {
    let mut game = Game::new();

    let report = game.advance_turn_with_roll(2).unwrap();
    assert_eq!(report.mover, PlayerToken::One);

    let report = game.advance_turn_with_roll(2).unwrap();
    assert_eq!(report.mover, PlayerToken::Two);
    assert_eq!(report.from, 1);
    assert_eq!(report.to, 3);

    let report = game.advance_turn_with_roll(2).unwrap();
    assert_eq!(report.mover, PlayerToken::One);
    assert_eq!(report.from, 3);
    assert_eq!(report.to, 5);
    assert_eq!(game.current_token(), PlayerToken::One);
}

#[test]
fn boundary_rolls_are_accepted() {
    let mut game = Game::new();
    let report = game.advance_turn_with_roll(1).unwrap();
    assert_eq!(report.to, 2);

    let mut game = Game::new();
    let report = game.advance_turn_with_roll(12).unwrap();
    assert_eq!(report.to, 13);
}

#[test]
fn rolls_outside_two_dice_range_are_rejected() {
    let mut game = Game::new();
    assert_eq!(game.advance_turn_with_roll(0), Err(GameError::InvalidRoll(0)));
    assert_eq!(game.advance_turn_with_roll(13), Err(GameError::InvalidRoll(13)));

    // A rejected call leaves the game untouched
    assert!(game.is_first_turn());
    assert_eq!(game.last_dice_roll(), None);
    assert_eq!(game.current_player().position, 1);
}

#[test]
fn random_rolls_are_reproducible_from_a_seed() {
    let mut first = Game::with_seed(7);
    let mut second = Game::with_seed(7);

    for _ in 0..10 {
        let a = first.advance_turn().unwrap();
        let b = second.advance_turn().unwrap();
        assert!((2..=12).contains(&a.roll));
        assert_eq!(a, b);
    }
}

#[test]
fn buying_a_property_transfers_the_deed() {
    let mut game = Game::new();
    game.advance_turn_with_roll(1).unwrap();
    assert!(game.is_buyable());
    assert!(!game.is_improvable());

    let report = game.interact_with_current_position().unwrap();
    assert_eq!(
        report,
        TransactionReport::Purchase {
            buyer: PlayerToken::One,
            position: 2,
            name: "A1".to_owned(),
            price: 50.0,
        }
    );
    assert_eq!(report.to_string(), "A1 has been bought by [P1] for £50.00");

    assert_money(game.player_one().balance, 1950.0);
    assert!(game.player_one().properties.contains(&2));
    let owner = game.board()[1].property.as_ref().unwrap().owner;
    assert_eq!(owner, Some(PlayerToken::One));
    assert!(!game.is_buyable());
}

#[test]
fn a_plain_position_is_not_actionable() {
    let mut game = Game::new();
    // Both counters start on GO
    assert_eq!(
        game.interact_with_current_position(),
        Err(GameError::NotActionable(1))
    );
}

#[test]
fn an_owned_property_cannot_be_bought_again() {
    let mut game = Game::new();
    game.advance_turn_with_roll(1).unwrap();
    game.interact_with_current_position().unwrap();

    // [P2] lands on [P1]'s property: rent is settled, but the position
    // is neither buyable nor improvable for [P2]
    let report = game.advance_turn_with_roll(1).unwrap();
    assert!(report.rent.is_some());
    assert!(!game.is_buyable());
    assert_eq!(
        game.interact_with_current_position(),
        Err(GameError::NotActionable(2))
    );
    assert_money(game.player_two().balance, 1995.0);
    assert_money(game.player_one().balance, 1955.0);
}

#[test]
fn improving_builds_four_houses_then_a_hotel() {
    let mut game = Game::new();
    monopolize_road_a(&mut game);
    assert_money(game.player_one().balance, 1830.0);
    assert!(game.is_improvable());

    // Four houses on A3 at half its £70 price
    for expected in 1..=4u8 {
        let report = game.interact_with_current_position().unwrap();
        assert_eq!(
            report,
            TransactionReport::Improvement {
                builder: PlayerToken::One,
                position: 5,
                kind: ImprovementKind::House,
                cost: 35.0,
            }
        );
        let prpt = game.board()[4].property.as_ref().unwrap();
        assert_eq!(prpt.improvements, expected);
        assert!(!prpt.hotel);
    }
    assert_eq!(
        game.interact_with_current_position()
            .unwrap()
            .to_string(),
        "[P1] pays £56.00 to build a hotel at the property."
    );

    let prpt = game.board()[4].property.as_ref().unwrap();
    assert_eq!(prpt.improvements, 0);
    assert!(prpt.hotel);
    assert_money(game.player_one().balance, 1830.0 - 4.0 * 35.0 - 56.0);

    // A hotel ends the improvement ladder
    assert!(!game.is_improvable());
    assert_eq!(
        game.interact_with_current_position(),
        Err(GameError::NotActionable(5))
    );
}

#[test]
fn a_house_costs_half_the_property_price() {
    let mut game = Game::new();
    monopolize_road_a(&mut game);

    let report = game.interact_with_current_position().unwrap();
    assert_eq!(
        report.to_string(),
        "[P1] pays £35.00 to build a house at the property."
    );
}

#[test]
fn monopoly_rent_is_a_fifth_of_the_price() {
    let mut game = Game::new();
    monopolize_road_b(&mut game);

    // [P2] lands on B1 (£100), whose road [P1] has monopolized
    let report = game.advance_turn_with_roll(2).unwrap();
    let rent = report.rent.unwrap();
    assert_eq!(rent.position, 7);
    assert_money(rent.amount, 20.0);
    assert_eq!(rent.owner, PlayerToken::One);
    assert_eq!(rent.paid_by, PlayerToken::Two);
    assert_eq!(rent.paid_to, PlayerToken::One);

    assert_money(game.player_two().balance, 1980.0);
    assert_money(game.player_one().balance, 1700.0);
}

#[test]
fn houses_raise_monopoly_rent() {
    let mut game = Game::new();
    monopolize_road_b(&mut game);

    // Two houses on B3 (£120) at £60 each
    game.interact_with_current_position().unwrap();
    game.interact_with_current_position().unwrap();
    assert_money(game.player_one().balance, 1680.0 - 120.0);

    // [P2] lands on B3: 0.2 x 120 plus 0.1 x (2 x 0.5 x 120)
    let report = game.advance_turn_with_roll(5).unwrap();
    let rent = report.rent.unwrap();
    assert_eq!(rent.position, 10);
    assert_money(rent.amount, 36.0);
    assert_money(game.player_two().balance, 1964.0);
    assert_money(game.player_one().balance, 1596.0);
}

#[test]
fn a_hotel_raises_monopoly_rent_by_a_flat_bonus() {
    let mut game = Game::new();
    monopolize_road_b(&mut game);

    // Four houses then the hotel on B3 (£120)
    for _ in 0..5 {
        game.interact_with_current_position().unwrap();
    }
    assert_money(game.player_one().balance, 1680.0 - 4.0 * 60.0 - 96.0);

    // 0.2 x 120 plus 0.1 x (4 x 0.5 x 120 + 0.8 x 120)
    let report = game.advance_turn_with_roll(5).unwrap();
    let rent = report.rent.unwrap();
    assert_money(rent.amount, 57.6);
    assert_money(game.player_two().balance, 2000.0 - 57.6);
    assert_money(game.player_one().balance, 1344.0 + 57.6);
}

#[test]
fn rent_without_a_monopoly_is_a_tenth_of_the_price() {
    let mut game = Game::new();
    game.advance_turn_with_roll(6).unwrap(); // [P1] -> 7 (B1)
    game.interact_with_current_position().unwrap();

    let report = game.advance_turn_with_roll(6).unwrap(); // [P2] -> 7
    let rent = report.rent.unwrap();
    assert_money(rent.amount, 10.0);
    assert_eq!(rent.paid_to, PlayerToken::One);
    assert_money(game.player_two().balance, 1990.0);
    assert_money(game.player_one().balance, 1910.0);
}

#[test]
fn landing_on_jail_redirects_to_go() {
    let mut game = Game::new();
    game.advance_turn_with_roll(10).unwrap(); // [P1] -> 11
    game.advance_turn_with_roll(2).unwrap(); // [P2] -> 3

    let report = game.advance_turn_with_roll(10).unwrap(); // [P1] -> 21 -> 1
    assert_eq!(report.from, 11);
    assert_eq!(report.to, 1);
    assert!(report.landed_on_jail);
    assert_eq!(
        report.to_string(),
        "[P1] rolls 10\nMoving from Posn 11 to Posn 21 (JAIL)\nSent back to Posn 1"
    );
    assert_eq!(game.player_one().position, 1);
}

#[test]
fn ownership_stays_bidirectionally_consistent() {
    let mut game = Game::new();
    monopolize_road_b(&mut game);
    game.advance_turn_with_roll(12).unwrap(); // [P2] -> 17 (D1)
    game.interact_with_current_position().unwrap();

    for posn in game.board() {
        if let Some(prpt) = &posn.property {
            let owned_by = |token: PlayerToken| {
                let player = if token == PlayerToken::One {
                    game.player_one()
                } else {
                    game.player_two()
                };
                player.properties.contains(&posn.number)
            };

            match prpt.owner {
                Some(token) => {
                    assert!(owned_by(token));
                    assert!(!owned_by(token.other()));
                }
                None => {
                    assert!(!owned_by(PlayerToken::One));
                    assert!(!owned_by(PlayerToken::Two));
                }
            }
        }
    }
}

#[test]
fn a_bankrupting_purchase_ends_the_game() {
    let mut game = Game::with_starting_balance(40.0);
    game.advance_turn_with_roll(1).unwrap(); // [P1] -> 2 (A1, £50)
    game.interact_with_current_position().unwrap();

    assert!(game.is_game_over());
    assert_money(game.player_one().balance, -10.0);
    assert_eq!(game.winner(), Some(PlayerToken::Two));

    // No further mutation is permitted once the game is over
    assert_eq!(game.advance_turn_with_roll(2), Err(GameError::GameOver));
    assert_eq!(game.advance_turn(), Err(GameError::GameOver));
    assert_eq!(
        game.interact_with_current_position(),
        Err(GameError::GameOver)
    );
    assert!(game.is_game_over());
}

#[test]
fn listeners_hear_every_mutation() {
    let notifications = Rc::new(RefCell::new(Vec::new()));
    let seen = Rc::clone(&notifications);

    let mut game = Game::new();
    game.subscribe(Box::new(move |game: &Game| {
        seen.borrow_mut().push(game.current_player().position);
    }));

    game.advance_turn_with_roll(1).unwrap();
    game.interact_with_current_position().unwrap();
    game.advance_turn_with_roll(3).unwrap();

    assert_eq!(*notifications.borrow(), vec![2, 2, 4]);
}

#[test]
fn rejected_calls_do_not_notify_listeners() {
    let count = Rc::new(RefCell::new(0));
    let seen = Rc::clone(&count);

    let mut game = Game::new();
    game.subscribe(Box::new(move |_: &Game| {
        *seen.borrow_mut() += 1;
    }));

    assert!(game.advance_turn_with_roll(13).is_err());
    assert!(game.interact_with_current_position().is_err());
    assert_eq!(*count.borrow(), 0);
}
