use std::fmt;

use crate::bitboard::Bitboard;
use crate::piece::Piece;
use crate::player::Player;
use crate::position::{Position, BOARD_COLS, BOARD_ROWS, BOARD_SQUARES};

/// Piece placement for one game: four masks over the 64 squares. A bit in
/// `red_kings`/`black_kings` is only meaningful when the same bit is set in
/// `red`/`black`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    red: Bitboard,
    black: Bitboard,
    red_kings: Bitboard,
    black_kings: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Board {
            red: Bitboard::empty(),
            black: Bitboard::empty(),
            red_kings: Bitboard::empty(),
            black_kings: Bitboard::empty(),
        }
    }

    /// The standard opening position: 12 Red men on the dark squares of
    /// rows 0–2 and 12 Black men on the dark squares of rows 5–7.
    pub fn standard() -> Self {
        let mut board = Board::new();

        for row in 0..3 {
            for col in 0..BOARD_COLS {
                let pos = Position::new(col, row);
                if pos.is_dark() {
                    board.red.set(pos.to_index());
                }
            }
        }

        for row in 5..BOARD_ROWS {
            for col in 0..BOARD_COLS {
                let pos = Position::new(col, row);
                if pos.is_dark() {
                    board.black.set(pos.to_index());
                }
            }
        }

        board
    }

    pub fn is_occupied(&self, index: usize) -> bool {
        if index >= BOARD_SQUARES {
            return false;
        }
        (self.red | self.black).get(index)
    }

    pub fn is_red(&self, index: usize) -> bool {
        if index >= BOARD_SQUARES {
            return false;
        }
        self.red.get(index)
    }

    pub fn is_black(&self, index: usize) -> bool {
        if index >= BOARD_SQUARES {
            return false;
        }
        self.black.get(index)
    }

    pub fn is_king(&self, index: usize) -> bool {
        if index >= BOARD_SQUARES {
            return false;
        }
        (self.red_kings | self.black_kings).get(index)
    }

    pub fn get_piece(&self, pos: &Position) -> Option<Piece> {
        if !pos.is_valid() {
            return None;
        }
        let idx = pos.to_index();
        if self.red.get(idx) {
            Some(Piece {
                player: Player::Red,
                king: self.red_kings.get(idx),
            })
        } else if self.black.get(idx) {
            Some(Piece {
                player: Player::Black,
                king: self.black_kings.get(idx),
            })
        } else {
            None
        }
    }

    pub fn set_piece(&mut self, pos: &Position, piece: Option<Piece>) {
        if !pos.is_valid() {
            return;
        }
        let idx = pos.to_index();
        self.clear_square(idx);
        if let Some(piece) = piece {
            self.place(idx, piece);
        }
    }

    pub fn clear(&mut self) {
        self.red = Bitboard::empty();
        self.black = Bitboard::empty();
        self.red_kings = Bitboard::empty();
        self.black_kings = Bitboard::empty();
    }

    /// The four raw masks in snapshot order: red, black, red_kings,
    /// black_kings.
    pub fn masks(&self) -> [u64; 4] {
        [
            self.red.raw(),
            self.black.raw(),
            self.red_kings.raw(),
            self.black_kings.raw(),
        ]
    }

    /// Rebuild a board from raw masks, as read from a snapshot. No
    /// cross-mask validation is applied, matching the snapshot loader's
    /// permissiveness.
    pub fn from_masks(red: u64, black: u64, red_kings: u64, black_kings: u64) -> Self {
        Board {
            red: Bitboard::from_raw(red),
            black: Bitboard::from_raw(black),
            red_kings: Bitboard::from_raw(red_kings),
            black_kings: Bitboard::from_raw(black_kings),
        }
    }

    #[inline]
    pub(crate) fn pieces_for(&self, player: Player) -> Bitboard {
        match player {
            Player::Red => self.red,
            Player::Black => self.black,
        }
    }

    #[inline]
    pub(crate) fn kings_for(&self, player: Player) -> Bitboard {
        match player {
            Player::Red => self.red_kings,
            Player::Black => self.black_kings,
        }
    }

    /// Remove whatever occupies `index`, across all four masks.
    #[inline]
    pub(crate) fn clear_square(&mut self, index: usize) {
        self.red.clear(index);
        self.black.clear(index);
        self.red_kings.clear(index);
        self.black_kings.clear(index);
    }

    /// Put `piece` on `index`. The square must already be empty.
    #[inline]
    pub(crate) fn place(&mut self, index: usize, piece: Piece) {
        match piece.player {
            Player::Red => {
                self.red.set(index);
                if piece.king {
                    self.red_kings.set(index);
                }
            }
            Player::Black => {
                self.black.set(index);
                if piece.king {
                    self.black_kings.set(index);
                }
            }
        }
    }

    /// Mask invariants: no square held by both colors, and each king mask a
    /// subset of its color mask.
    pub(crate) fn invariants_hold(&self) -> bool {
        (self.red & self.black).is_empty()
            && self.red_kings.is_subset_of(&self.red)
            && self.black_kings.is_subset_of(&self.black)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "    a b c d e f g h")?;
        writeln!(f, "   -----------------")?;

        for row in (0..BOARD_ROWS).rev() {
            write!(f, "{} | ", row + 1)?;

            for col in 0..BOARD_COLS {
                let pos = Position::new(col, row);
                let c = match self.get_piece(&pos) {
                    Some(piece) => piece.to_char(),
                    None => '.',
                };
                write!(f, "{} ", c)?;
            }

            writeln!(f, "| {}", row + 1)?;
        }

        writeln!(f, "   -----------------")?;
        writeln!(f, "    a b c d e f g h")?;

        Ok(())
    }
}
