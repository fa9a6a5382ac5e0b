use crate::board::Board;
use crate::game::Game;
use crate::player::Player;

/// Render `game` in the five-line snapshot layout: the red, black,
/// red_kings and black_kings masks as uppercase zero-padded 16-digit hex,
/// one per line, then the turn digit (0 = Red, 1 = Black).
pub fn encode_game(game: &Game) -> String {
    let [red, black, red_kings, black_kings] = game.board().masks();
    format!(
        "{:016X}\n{:016X}\n{:016X}\n{:016X}\n{}\n",
        red,
        black,
        red_kings,
        black_kings,
        game.turn() as u8
    )
}

/// Inverse of [`encode_game`]. Reads the first five whitespace-separated
/// fields: four hex masks (either letter case accepted, as the original
/// save files were scanned) and the turn digit, which must be 0 or 1.
/// Returns `None` on anything malformed.
pub fn decode_game(text: &str) -> Option<Game> {
    let mut fields = text.split_whitespace();

    let red = u64::from_str_radix(fields.next()?, 16).ok()?;
    let black = u64::from_str_radix(fields.next()?, 16).ok()?;
    let red_kings = u64::from_str_radix(fields.next()?, 16).ok()?;
    let black_kings = u64::from_str_radix(fields.next()?, 16).ok()?;
    let turn = Player::from_int(fields.next()?.parse().ok()?)?;

    Some(Game::from_parts(
        Board::from_masks(red, black, red_kings, black_kings),
        turn,
    ))
}
