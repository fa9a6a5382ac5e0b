pub const BOARD_COLS: u8 = 8;
pub const BOARD_ROWS: u8 = 8;
pub const BOARD_SQUARES: usize = 64;

/// A square on the board. `a1` is col 0, row 0 (bottom-left from Red's
/// side); `h8` is col 7, row 7. Square index = row * 8 + col.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub col: u8,
    pub row: u8,
}

impl Position {
    pub fn new(col: u8, row: u8) -> Self {
        Position { col, row }
    }

    pub fn from_index(index: usize) -> Self {
        Position {
            col: (index % BOARD_COLS as usize) as u8,
            row: (index / BOARD_COLS as usize) as u8,
        }
    }

    pub fn to_index(&self) -> usize {
        self.row as usize * BOARD_COLS as usize + self.col as usize
    }

    pub fn is_valid(&self) -> bool {
        self.col < BOARD_COLS && self.row < BOARD_ROWS
    }

    /// True for the playable (dark) squares, where (row + col) is odd.
    pub fn is_dark(&self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// Parse two-character algebraic notation: a file letter `a`..`h`
    /// (case-insensitive) followed by a rank digit `1`..`8`. Anything else
    /// is rejected.
    pub fn from_algebraic(s: &str) -> Option<Position> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }

        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];

        if !(b'a'..=b'h').contains(&file) {
            return None;
        }
        if !(b'1'..=b'8').contains(&rank) {
            return None;
        }

        Some(Position {
            col: file - b'a',
            row: rank - b'1',
        })
    }

    /// Inverse of [`Position::from_algebraic`] for valid positions.
    pub fn to_algebraic(&self) -> String {
        let file = char::from(b'a' + self.col);
        let rank = char::from(b'1' + self.row);
        format!("{}{}", file, rank)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}
