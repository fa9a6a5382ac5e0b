use crate::board::Board;
use crate::piece::Piece;
use crate::player::Player;
use crate::position::Position;
use crate::r#move::Move;

/// How a playable move request resolves: a one-square diagonal step, or a
/// two-square jump capturing the square in between.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MoveKind {
    Step,
    Jump { captured: usize },
}

/// One game of checkers: piece placement plus whose move is next.
///
/// `make_move` is the only state transition. A rejected move leaves the game
/// untouched; an accepted move applies the whole transition (capture,
/// relocation, crowning) and flips the turn. Captures are never mandatory
/// and only a single jump is applied per move; multi-jump chaining is not
/// part of this rule set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Game {
    board: Board,
    turn: Player,
}

impl Game {
    /// A fresh game in the standard opening position, Red to move.
    pub fn new() -> Self {
        Game {
            board: Board::standard(),
            turn: Player::Red,
        }
    }

    /// Assemble a game from an existing placement and turn, e.g. a decoded
    /// snapshot or a constructed test position.
    pub fn from_parts(board: Board, turn: Player) -> Self {
        Game { board, turn }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn is_occupied(&self, index: usize) -> bool {
        self.board.is_occupied(index)
    }

    pub fn is_red(&self, index: usize) -> bool {
        self.board.is_red(index)
    }

    pub fn is_black(&self, index: usize) -> bool {
        self.board.is_black(index)
    }

    pub fn is_king(&self, index: usize) -> bool {
        self.board.is_king(index)
    }

    pub fn get_piece(&self, pos: &Position) -> Option<Piece> {
        self.board.get_piece(pos)
    }

    pub fn set_piece(&mut self, pos: &Position, piece: Option<Piece>) {
        self.board.set_piece(pos, piece)
    }

    /// Work out what kind of move this request is, if it is playable at all.
    fn classify(&self, move_: &Move) -> Option<(Piece, MoveKind)> {
        if !move_.from.is_valid() || !move_.to.is_valid() {
            return None;
        }

        let piece = self.board.get_piece(&move_.from)?;
        if self.board.is_occupied(move_.to.to_index()) {
            return None;
        }
        if piece.player != self.turn {
            return None;
        }

        let dr = move_.to.row as i32 - move_.from.row as i32;
        let dc = move_.to.col as i32 - move_.from.col as i32;
        let forward = piece.player.forward_dir();

        if dr.abs() == 1 && dc.abs() == 1 {
            // Men step forward only; kings step either way.
            if !piece.king && dr != forward {
                return None;
            }
            return Some((piece, MoveKind::Step));
        }

        if dr.abs() == 2 && dc.abs() == 2 {
            // The delta is exactly ±2 on both axes, so the midpoint is a
            // whole square.
            let mid = Position::new(
                ((move_.from.col as i32 + move_.to.col as i32) / 2) as u8,
                ((move_.from.row as i32 + move_.to.row as i32) / 2) as u8,
            );
            let jumped = self.board.get_piece(&mid)?;
            if jumped.player == piece.player {
                return None;
            }
            if !piece.king && dr != 2 * forward {
                return None;
            }
            return Some((piece, MoveKind::Jump {
                captured: mid.to_index(),
            }));
        }

        None
    }

    pub fn is_legal_move(&self, move_: &Move) -> bool {
        self.classify(move_).is_some()
    }

    /// Attempt a move. Returns `false` and leaves the game untouched when
    /// the request is unplayable; otherwise applies it in full and flips the
    /// turn.
    pub fn make_move(&mut self, move_: &Move) -> bool {
        let Some((piece, kind)) = self.classify(move_) else {
            return false;
        };

        if let MoveKind::Jump { captured } = kind {
            self.board.clear_square(captured);
        }
        self.board.clear_square(move_.from.to_index());

        // Kings stay kings; men are crowned on reaching the far row.
        let king = piece.king || move_.to.row == piece.player.crowning_row();
        self.board.place(
            move_.to.to_index(),
            Piece {
                player: piece.player,
                king,
            },
        );

        self.turn = self.turn.opposite();
        true
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.board)?;
        writeln!(f, "Turn: {}", self.turn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Move {
        Move::parse(s).expect("test move should parse")
    }

    fn pos(s: &str) -> Position {
        Position::from_algebraic(s).expect("test square should parse")
    }

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.turn(), Player::Red);
        assert_eq!(game.board(), &Board::standard());
        assert!(game.board().invariants_hold());
    }

    #[test]
    fn test_simple_move() {
        let mut game = Game::new();

        // Red man on the front row steps diagonally forward.
        assert!(game.is_legal_move(&parse("b3-c4")));
        assert!(game.make_move(&parse("b3-c4")));

        assert_eq!(game.turn(), Player::Black);
        assert_eq!(game.get_piece(&pos("b3")), None);
        assert_eq!(game.get_piece(&pos("c4")), Some(Piece::man(Player::Red)));
        assert!(game.board().invariants_hold());
    }

    #[test]
    fn test_turn_alternation() {
        let mut game = Game::new();

        assert!(game.make_move(&parse("b3-a4")));
        assert_eq!(game.turn(), Player::Black);

        assert!(game.make_move(&parse("b6-c5")));
        assert_eq!(game.turn(), Player::Red);

        assert!(game.make_move(&parse("d3-e4")));
        assert_eq!(game.turn(), Player::Black);
    }

    #[test]
    fn test_rejected_move_leaves_state_unchanged() {
        let mut game = Game::new();
        let before = game;

        // Sideways, from an empty square, onto an occupied square, and out
        // of turn: all rejected without touching the game.
        assert!(!game.make_move(&parse("b3-a3")));
        assert!(!game.make_move(&parse("a4-b5")));
        assert!(!game.make_move(&parse("b1-c2")));
        assert!(!game.make_move(&parse("b6-a5")));

        assert_eq!(game, before);
    }

    #[test]
    fn test_backward_move_rejected_for_man() {
        let mut board = Board::new();
        board.set_piece(&pos("c4"), Some(Piece::man(Player::Red)));
        let mut game = Game::from_parts(board, Player::Red);
        let before = game;

        assert!(!game.make_move(&parse("c4-b3")));
        assert!(!game.make_move(&parse("c4-d3")));
        assert_eq!(game, before);

        // Forward is still fine.
        assert!(game.make_move(&parse("c4-b5")));
    }

    #[test]
    fn test_off_board_squares_rejected() {
        let mut game = Game::new();
        let before = game;

        assert!(!game.make_move(&Move::new(Position::new(8, 8), Position::new(7, 7))));
        assert!(!game.make_move(&Move::new(Position::new(1, 2), Position::new(2, 8))));
        assert_eq!(game, before);
    }

    #[test]
    fn test_wrong_turn_rejected() {
        let mut game = Game::new();
        assert!(!game.make_move(&parse("b6-a5")));
        assert_eq!(game.turn(), Player::Red);
    }

    #[test]
    fn test_non_diagonal_rejected() {
        let mut board = Board::new();
        board.set_piece(&pos("c4"), Some(Piece::king(Player::Red)));
        let mut game = Game::from_parts(board, Player::Red);
        let before = game;

        assert!(!game.make_move(&parse("c4-c5"))); // straight up
        assert!(!game.make_move(&parse("c4-e4"))); // sideways
        assert!(!game.make_move(&parse("c4-c6"))); // two straight up
        assert!(!game.make_move(&parse("c4-d6"))); // knight-shaped
        assert!(!game.make_move(&parse("c4-f7"))); // three diagonal
        assert!(!game.make_move(&parse("c4-c4"))); // no movement
        assert_eq!(game, before);
    }

    #[test]
    fn test_capture() {
        let mut board = Board::new();
        board.set_piece(&pos("c4"), Some(Piece::man(Player::Red)));
        board.set_piece(&pos("d5"), Some(Piece::man(Player::Black)));
        let mut game = Game::from_parts(board, Player::Black);

        assert!(game.make_move(&parse("d5-b3")));

        assert_eq!(game.get_piece(&pos("c4")), None);
        assert_eq!(game.get_piece(&pos("d5")), None);
        assert_eq!(game.get_piece(&pos("b3")), Some(Piece::man(Player::Black)));
        assert_eq!(game.turn(), Player::Red);
        assert!(game.board().invariants_hold());
    }

    #[test]
    fn test_capture_over_own_piece_rejected() {
        let mut board = Board::new();
        board.set_piece(&pos("b3"), Some(Piece::man(Player::Red)));
        board.set_piece(&pos("c4"), Some(Piece::man(Player::Red)));
        let mut game = Game::from_parts(board, Player::Red);
        let before = game;

        assert!(!game.make_move(&parse("b3-d5")));
        assert_eq!(game, before);
    }

    #[test]
    fn test_capture_over_empty_square_rejected() {
        let mut board = Board::new();
        board.set_piece(&pos("b3"), Some(Piece::man(Player::Red)));
        let mut game = Game::from_parts(board, Player::Red);
        let before = game;

        assert!(!game.make_move(&parse("b3-d5")));
        assert_eq!(game, before);
    }

    #[test]
    fn test_man_cannot_capture_backward() {
        let mut board = Board::new();
        board.set_piece(&pos("d5"), Some(Piece::man(Player::Red)));
        board.set_piece(&pos("c4"), Some(Piece::man(Player::Black)));
        let mut game = Game::from_parts(board, Player::Red);
        let before = game;

        assert!(!game.make_move(&parse("d5-b3")));
        assert_eq!(game, before);
    }

    #[test]
    fn test_king_moves_backward() {
        let mut board = Board::new();
        board.set_piece(&pos("d5"), Some(Piece::king(Player::Red)));
        let mut game = Game::from_parts(board, Player::Red);

        assert!(game.make_move(&parse("d5-c4")));
        assert_eq!(game.get_piece(&pos("c4")), Some(Piece::king(Player::Red)));
    }

    #[test]
    fn test_king_captures_backward() {
        let mut board = Board::new();
        board.set_piece(&pos("d5"), Some(Piece::king(Player::Red)));
        board.set_piece(&pos("c4"), Some(Piece::man(Player::Black)));
        let mut game = Game::from_parts(board, Player::Red);

        assert!(game.make_move(&parse("d5-b3")));
        assert_eq!(game.get_piece(&pos("c4")), None);
        assert_eq!(game.get_piece(&pos("b3")), Some(Piece::king(Player::Red)));
        assert!(game.board().invariants_hold());
    }

    #[test]
    fn test_red_promotion_on_step() {
        let mut board = Board::new();
        board.set_piece(&pos("b7"), Some(Piece::man(Player::Red)));
        let mut game = Game::from_parts(board, Player::Red);

        assert!(game.make_move(&parse("b7-a8")));
        assert_eq!(game.get_piece(&pos("a8")), Some(Piece::king(Player::Red)));
        assert!(game.board().invariants_hold());
    }

    #[test]
    fn test_black_promotion_on_step() {
        let mut board = Board::new();
        board.set_piece(&pos("c2"), Some(Piece::man(Player::Black)));
        let mut game = Game::from_parts(board, Player::Black);

        assert!(game.make_move(&parse("c2-b1")));
        assert_eq!(game.get_piece(&pos("b1")), Some(Piece::king(Player::Black)));
    }

    #[test]
    fn test_promotion_on_capture() {
        let mut board = Board::new();
        board.set_piece(&pos("c6"), Some(Piece::man(Player::Red)));
        board.set_piece(&pos("d7"), Some(Piece::man(Player::Black)));
        let mut game = Game::from_parts(board, Player::Red);

        assert!(game.make_move(&parse("c6-e8")));
        assert_eq!(game.get_piece(&pos("d7")), None);
        assert_eq!(game.get_piece(&pos("e8")), Some(Piece::king(Player::Red)));
    }

    #[test]
    fn test_king_stays_king() {
        let mut board = Board::new();
        board.set_piece(&pos("b7"), Some(Piece::king(Player::Red)));
        let mut game = Game::from_parts(board, Player::Red);

        assert!(game.make_move(&parse("b7-c8")));
        assert_eq!(game.get_piece(&pos("c8")), Some(Piece::king(Player::Red)));

        // Hand the turn back to Red and move the king off the far row.
        let mut game = Game::from_parts(*game.board(), Player::Red);
        assert!(game.make_move(&parse("c8-d7")));
        assert_eq!(game.get_piece(&pos("d7")), Some(Piece::king(Player::Red)));
    }

    #[test]
    fn test_no_mandatory_capture() {
        // Black could capture the red man, but is free to step elsewhere.
        let mut board = Board::new();
        board.set_piece(&pos("c4"), Some(Piece::man(Player::Red)));
        board.set_piece(&pos("d5"), Some(Piece::man(Player::Black)));
        let mut game = Game::from_parts(board, Player::Black);

        assert!(game.is_legal_move(&parse("d5-b3")));
        assert!(game.make_move(&parse("d5-e4")));
        assert_eq!(game.get_piece(&pos("c4")), Some(Piece::man(Player::Red)));
    }

    #[test]
    fn test_display() {
        let game = Game::new();
        let rendered = game.to_string();
        assert!(rendered.contains("a b c d e f g h"));
        assert!(rendered.ends_with("Turn: Red\n"));
    }
}
