//! # Push-Stone Game
//!
//! Terminal front end for the push-stone engine. Loads a board file, wires
//! each player to a human or automated agent and runs the play loop:
//!
//! - the board is printed after loading and after every applied move;
//! - human players are prompted with `P:(R C)> ` and may save the game at
//!   any prompt with `s<filename>` (saving never consumes a turn);
//! - automated moves are reported as `Player P placed at R C`;
//! - at game over the winner line is printed (`Winners: O`, `Winners: X`,
//!   or `Winners: O X` for a tie).
//!
//! Exit codes: 2 invalid player type, 3 unreadable board file, 4 invalid
//! file contents, 5 end of input during a human move, 6 board already full
//! at load.

use clap::Parser;
use colored::Colorize;
use pushgame::savefile::{self, LoadError};
use pushgame::{GameController, Move, PlayerType};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::exit;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Player O agent: 0 (scanner AI), 1 (heuristic AI) or H (human)
    type_o: String,

    /// Player X agent: 0 (scanner AI), 1 (heuristic AI) or H (human)
    type_x: String,

    /// Board file to load the game from
    board_file: PathBuf,
}

fn main() {
    let args = Args::parse();
    let o_type = parse_player_type(&args.type_o);
    let x_type = parse_player_type(&args.type_x);

    let game = match savefile::load_game(&args.board_file) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("{}", err.to_string().red());
            exit(load_error_code(&err));
        }
    };

    let mut controller = GameController::new(game, o_type, x_type);
    print!("{}", controller.game());

    while !controller.is_game_over() {
        match controller.active_player_type() {
            PlayerType::Human => human_turn(&mut controller),
            _ => {
                let outcome = controller.auto_move();
                println!("Player {} placed at {}", outcome.player, outcome.mv);
            }
        }
        print!("{}", controller.game());
    }

    let winners: Vec<String> = controller
        .winners()
        .iter()
        .map(|player| player.to_string())
        .collect();
    println!("{}", format!("Winners: {}", winners.join(" ")).green());
}

fn parse_player_type(raw: &str) -> PlayerType {
    raw.parse().unwrap_or_else(|_| {
        eprintln!("{}", "Invalid player type".red());
        exit(2);
    })
}

fn load_error_code(err: &LoadError) -> i32 {
    match err {
        LoadError::Unreadable => 3,
        LoadError::InvalidContents => 4,
        LoadError::FullBoard => 6,
    }
}

/// Prompts the active human player until one legal move has been applied.
///
/// A line of the form `s<filename>` saves the game and re-prompts without
/// consuming the turn; unparseable or illegal input re-prompts silently.
/// End of input while a move is pending is fatal: the game cannot continue.
fn human_turn(controller: &mut GameController) {
    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("{}:(R C)> ", controller.current_player());
        let _ = io::stdout().flush();

        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => {
                eprintln!("{}", "End of file".red());
                exit(5);
            }
            Ok(_) => {}
        }
        let entry = line.trim_end_matches(&['\r', '\n'][..]);

        if let Some(filename) = entry.strip_prefix('s').filter(|rest| !rest.is_empty()) {
            if savefile::save_game(Path::new(filename), controller.game()).is_err() {
                eprintln!("{}", "Save failed".red());
            }
            continue;
        }

        let mv = match entry.parse::<Move>() {
            Ok(mv) => mv,
            Err(_) => continue,
        };
        if controller.try_make_move(mv).is_ok() {
            return;
        }
    }
}
