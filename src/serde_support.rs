use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::encode::{decode_game, encode_game};
use crate::game::Game;
use crate::r#move::Move;

impl Serialize for Game {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&encode_game(self))
    }
}

impl<'de> Deserialize<'de> for Game {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        decode_game(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("malformed game snapshot: {:?}", s)))
    }
}

impl Serialize for Move {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Move {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Move::parse(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid move text: {:?}", s)))
    }
}
