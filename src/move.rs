use crate::position::Position;

/// A requested move: origin square and destination square. Whether it is
/// actually playable is decided by the game, not here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

impl Move {
    pub fn new(from: Position, to: Position) -> Self {
        Move { from, to }
    }

    /// Parse move text like `b6-a5` or `b6 a5`: hyphens are normalized to
    /// whitespace, then exactly two algebraic squares must remain.
    pub fn parse(s: &str) -> Option<Move> {
        let normalized = s.replace('-', " ");
        let mut tokens = normalized.split_whitespace();

        let from = Position::from_algebraic(tokens.next()?)?;
        let to = Position::from_algebraic(tokens.next()?)?;
        if tokens.next().is_some() {
            return None;
        }

        Some(Move { from, to })
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}
