#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Player {
    Red = 0,
    Black = 1,
}

impl Player {
    pub fn opposite(&self) -> Player {
        match self {
            Player::Red => Player::Black,
            Player::Black => Player::Red,
        }
    }

    /// Row direction a man of this color advances in. Red starts on the low
    /// rows and moves up the board; Black starts on the high rows and moves
    /// down.
    pub fn forward_dir(&self) -> i32 {
        match self {
            Player::Red => 1,
            Player::Black => -1,
        }
    }

    /// Row a man of this color is crowned on.
    pub fn crowning_row(&self) -> u8 {
        match self {
            Player::Red => 7,
            Player::Black => 0,
        }
    }

    pub fn to_char(&self) -> char {
        match self {
            Player::Red => 'r',
            Player::Black => 'b',
        }
    }

    pub fn from_char(c: char) -> Option<Player> {
        match c {
            'r' | 'R' => Some(Player::Red),
            'b' | 'B' => Some(Player::Black),
            _ => None,
        }
    }

    pub fn from_int(i: u8) -> Option<Player> {
        match i {
            0 => Some(Player::Red),
            1 => Some(Player::Black),
            _ => None,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let player_str = match self {
            Player::Red => "Red",
            Player::Black => "Black",
        };
        write!(f, "{}", player_str)
    }
}
