//! Command-line front end for Minipoly.
//!
//! Maps numbered commands onto the engine's public operations and
//! re-renders the board after every call. All game rules live in the
//! engine; this binary only prints state and collects input.

use minipoly::game::Game;
use std::io::{self, BufRead, Write};

const LINE: &str = "-------------------------------------------------------";
const INVALID_INPUT: &str = "\nPlease enter a valid input.\n";

const TITLE: &str = r"  __  __ _____ _   _ _____ _____   ____  _  __     __
 |  \/  |_   _| \ | |_   _|  __ \ / __ \| | \ \   / /
 | \  / | | | |  \| | | | | |__) | |  | | |  \ \_/ /
 | |\/| | | | | . ` | | | |  ___/| |  | | |   \   /
 | |  | |_| |_| |\  |_| |_| |    | |__| | |____| |
 |_|  |_|_____|_| \_|_____|_|     \____/|______|_|
";

fn main() {
    env_logger::init();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut game = Game::new();

    let cheat_mode = yes_no(
        &mut input,
        "Enable cheats?\n\nThis mode allows you to choose what the next player\n\
         rolls at the start of their turn. It is designed for\n\
         testing purposes only. Y/N: ",
    );
    println!("\n{}\n\n{}\n{}", LINE, TITLE, LINE);

    loop {
        print!(
            "{}\n{}\n{}\nIt is now {}'s turn.\n{}\n >> ",
            game,
            LINE,
            balances(&game),
            game.current_player(),
            controls(&game, cheat_mode)
        );
        flush();

        match read_line(&mut input).as_str() {
            "0" => {
                if yes_no(&mut input, "\nAre you sure you want to quit? Y/N: ") {
                    break;
                }
                println!("\n{}\n", LINE);
            }
            "1" => match game.advance_turn() {
                Ok(report) => println!("{}\n\n{}\n", LINE, report),
                Err(err) => println!("{}\n\n{}\n", LINE, err),
            },
            "2" if game.is_buyable() || game.is_improvable() => {
                match game.interact_with_current_position() {
                    Ok(report) => println!("{}\n\n{}\n", LINE, report),
                    Err(err) => println!("{}\n\n{}\n", LINE, err),
                }
            }
            "3" if cheat_mode => cheat_roll(&mut input, &mut game),
            _ => println!("{}{}", LINE, INVALID_INPUT),
        }

        if game.is_game_over() {
            println!("{}\n{}", game, balances(&game));
            if let Some(winner) = game.winner() {
                println!("{} WINS!\n", winner);
            }
            break;
        }
    }

    println!("{}\n\nGAME OVER\n", LINE);
}

/// Play the next turn with a user-chosen roll, or cancel on 0.
fn cheat_roll(input: &mut impl BufRead, game: &mut Game) {
    loop {
        print!("\nEnter dice roll (1-12), or 0 to cancel: ");
        flush();

        let entry = read_line(input);
        if entry == "0" {
            println!("{}\n\nCheat dice roll cancelled\n", LINE);
            return;
        }

        match entry.parse::<u8>().ok().filter(|roll| (1..=12).contains(roll)) {
            Some(roll) => {
                match game.advance_turn_with_roll(roll) {
                    Ok(report) => println!("{}\n\n{}\n", LINE, report),
                    Err(err) => println!("{}\n\n{}\n", LINE, err),
                }
                return;
            }
            None => println!("{}{}", LINE, INVALID_INPUT),
        }
    }
}

/// The command menu, with buy/improve and cheat entries shown only when
/// available.
fn controls(game: &Game, cheat_mode: bool) -> String {
    let mut controls = String::from("\nControls:\n    0: Exit game.\n    1: Next turn.\n");

    if game.is_buyable() {
        controls += "    2: Buy the current player's position.\n";
    }
    if game.is_improvable() {
        controls += "    2: Improve the current player's position.\n";
    }
    if cheat_mode {
        controls += "    3: Choose dice roll for next turn.\n";
    }

    controls
}

fn balances(game: &Game) -> String {
    format!(
        "{}: £{:.2}\t\t{}: £{:.2}",
        game.player_one(),
        game.player_one().balance,
        game.player_two(),
        game.player_two().balance
    )
}

fn yes_no(input: &mut impl BufRead, prompt: &str) -> bool {
    loop {
        print!("{}", prompt);
        flush();

        match read_line(input).to_lowercase().as_str() {
            "y" | "yes" => return true,
            "n" | "no" => return false,
            _ => println!("{}", INVALID_INPUT),
        }
    }
}

fn read_line(input: &mut impl BufRead) -> String {
    let mut line = String::new();
    let bytes = input.read_line(&mut line).expect("stdin unavailable");
    if bytes == 0 {
        // EOF counts as quitting
        println!("\n{}\n\nGAME OVER\n", LINE);
        std::process::exit(0);
    }
    line.trim().to_owned()
}

fn flush() {
    io::stdout().flush().expect("stdout unavailable");
}
