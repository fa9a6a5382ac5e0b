//! Interactive two-player prompt loop around the checkers engine.

use std::fs;
use std::io::{self, BufRead, Write};

use spooky_checkers::encode::{decode_game, encode_game};
use spooky_checkers::game::Game;
use spooky_checkers::r#move::Move;

fn main() {
    let mut game = Game::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Bitboard Checkers - simple two-player");
    println!("Enter moves like: b6-a5 or type save <file> / load <file> / quit");
    println!();

    loop {
        print!("{}", game);
        print!("Move> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let line = match lines.next() {
            Some(Ok(line)) => line,
            _ => break,
        };
        let line = line.trim();

        if line == "quit" {
            break;
        }

        if let Some(path) = line.strip_prefix("save ") {
            match fs::write(path, encode_game(&game)) {
                Ok(()) => println!("Saved to {}", path),
                Err(err) => println!("Failed to save {}: {}", path, err),
            }
            continue;
        }

        if let Some(path) = line.strip_prefix("load ") {
            // A failed load leaves the current game untouched.
            match fs::read_to_string(path)
                .ok()
                .and_then(|text| decode_game(&text))
            {
                Some(loaded) => {
                    game = loaded;
                    println!("Loaded {}", path);
                }
                None => println!("Failed to load {}", path),
            }
            continue;
        }

        let Some(move_) = Move::parse(line) else {
            println!("Could not parse move. Use format b6-a5");
            continue;
        };

        if !game.make_move(&move_) {
            println!("Illegal move.");
        }
    }

    println!("Goodbye.");
}
