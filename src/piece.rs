use crate::player::Player;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub player: Player,
    pub king: bool,
}

impl Piece {
    pub fn man(player: Player) -> Self {
        Piece {
            player,
            king: false,
        }
    }

    pub fn king(player: Player) -> Self {
        Piece { player, king: true }
    }

    /// Display glyph: `r`/`b` for men, `R`/`B` for kings.
    pub fn to_char(&self) -> char {
        let c = self.player.to_char();
        if self.king {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }

    pub fn from_char(c: char) -> Option<Piece> {
        let player = Player::from_char(c)?;
        Some(Piece {
            player,
            king: c.is_ascii_uppercase(),
        })
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
