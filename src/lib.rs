pub mod bitboard;
pub mod board;
pub mod encode;
pub mod game;
pub mod r#move;
pub mod piece;
pub mod player;
pub mod position;

#[cfg(feature = "serde")]
pub mod serde_support;

#[cfg(feature = "python")]
extern crate pyo3;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule(gil_used = false)]
fn spooky_checkers(m: &Bound<'_, PyModule>) -> PyResult<()> {
    use player::Player;
    use python_bindings::*;
    m.add_class::<PyBoard>()?;
    m.add_class::<PyGame>()?;
    m.add_class::<PyMove>()?;
    m.add("RED", Player::Red as u8)?;
    m.add("BLACK", Player::Black as u8)?;
    Ok(())
}

#[cfg(feature = "python")]
mod python_bindings {
    use super::*;
    use crate::board::Board;
    use crate::encode;
    use crate::game::Game;
    use crate::piece::Piece;
    use crate::position::Position;
    use crate::r#move::Move;

    #[pyclass(name = "Board")]
    #[derive(Clone)]
    pub struct PyBoard {
        board: Board,
    }

    #[pymethods]
    impl PyBoard {
        #[new]
        pub fn new() -> Self {
            PyBoard {
                board: Board::new(),
            }
        }

        #[staticmethod]
        pub fn standard() -> Self {
            PyBoard {
                board: Board::standard(),
            }
        }

        /// Piece glyph at (col, row): 'r'/'b' for men, 'R'/'B' for kings,
        /// or None for an empty square.
        pub fn get_piece(&self, col: usize, row: usize) -> Option<char> {
            let pos = Position::new(col as u8, row as u8);
            self.board.get_piece(&pos).map(|p| p.to_char())
        }

        pub fn set_piece(&mut self, col: usize, row: usize, piece: Option<char>) -> PyResult<()> {
            let pos = Position::new(col as u8, row as u8);
            let piece = match piece {
                Some(c) => Some(Piece::from_char(c).ok_or_else(|| {
                    PyErr::new::<pyo3::exceptions::PyValueError, _>(
                        "Piece must be one of 'r', 'R', 'b', 'B'",
                    )
                })?),
                None => None,
            };
            self.board.set_piece(&pos, piece);
            Ok(())
        }

        pub fn clear(&mut self) {
            self.board.clear()
        }

        pub fn __str__(&self) -> String {
            self.board.to_string()
        }

        pub fn __repr__(&self) -> String {
            let [red, black, red_kings, black_kings] = self.board.masks();
            format!(
                "Board(red={:#018X}, black={:#018X}, red_kings={:#018X}, black_kings={:#018X})",
                red, black, red_kings, black_kings
            )
        }
    }

    #[pyclass(name = "Game")]
    pub struct PyGame {
        game: Game,
    }

    #[pymethods]
    impl PyGame {
        #[new]
        pub fn new() -> Self {
            PyGame { game: Game::new() }
        }

        pub fn turn(&self) -> u8 {
            self.game.turn() as u8
        }

        pub fn get_piece(&self, col: usize, row: usize) -> Option<char> {
            let pos = Position::new(col as u8, row as u8);
            self.game.get_piece(&pos).map(|p| p.to_char())
        }

        pub fn is_occupied(&self, index: usize) -> bool {
            self.game.is_occupied(index)
        }

        pub fn is_red(&self, index: usize) -> bool {
            self.game.is_red(index)
        }

        pub fn is_black(&self, index: usize) -> bool {
            self.game.is_black(index)
        }

        pub fn is_king(&self, index: usize) -> bool {
            self.game.is_king(index)
        }

        pub fn is_legal_move(&self, move_: &PyMove) -> bool {
            self.game.is_legal_move(&move_.move_)
        }

        pub fn make_move(&mut self, move_: &PyMove) -> bool {
            self.game.make_move(&move_.move_)
        }

        /// Parse and play move text like "b6-a5". Returns False when the
        /// text does not parse or the move is illegal.
        pub fn make_move_text(&mut self, text: &str) -> bool {
            match Move::parse(text) {
                Some(move_) => self.game.make_move(&move_),
                None => false,
            }
        }

        pub fn encode(&self) -> String {
            encode::encode_game(&self.game)
        }

        #[staticmethod]
        pub fn decode(text: &str) -> PyResult<Self> {
            match encode::decode_game(text) {
                Some(game) => Ok(PyGame { game }),
                None => Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(
                    "malformed game snapshot",
                )),
            }
        }

        pub fn board(&self) -> PyBoard {
            PyBoard {
                board: *self.game.board(),
            }
        }

        pub fn clone(&self) -> PyGame {
            PyGame { game: self.game }
        }

        pub fn __str__(&self) -> String {
            self.game.to_string()
        }

        pub fn __repr__(&self) -> String {
            format!("Game(turn={})", self.game.turn())
        }
    }

    #[pyclass(name = "Move")]
    #[derive(Clone, Debug)]
    pub struct PyMove {
        pub(crate) move_: Move,
    }

    #[pymethods]
    impl PyMove {
        #[new]
        pub fn new(
            from_col: usize,
            from_row: usize,
            to_col: usize,
            to_row: usize,
        ) -> Self {
            PyMove {
                move_: Move::new(
                    Position::new(from_col as u8, from_row as u8),
                    Position::new(to_col as u8, to_row as u8),
                ),
            }
        }

        #[staticmethod]
        pub fn parse(text: &str) -> PyResult<Self> {
            match Move::parse(text) {
                Some(move_) => Ok(PyMove { move_ }),
                None => Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(
                    "invalid move text",
                )),
            }
        }

        pub fn __str__(&self) -> String {
            self.move_.to_string()
        }

        pub fn __repr__(&self) -> String {
            format!(
                "Move.parse(\"{}\")",
                self.move_
            )
        }

        pub fn __eq__(&self, other: &PyMove) -> bool {
            self.move_ == other.move_
        }

        pub fn __hash__(&self) -> u64 {
            use std::hash::{Hash, Hasher};
            let mut hasher = std::collections::hash_map::DefaultHasher::new();
            self.move_.hash(&mut hasher);
            hasher.finish()
        }
    }
}
