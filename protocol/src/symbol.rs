use core::fmt;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::ProtocolError;

/// Number of mines adjacent to a revealed cell, always `0..=8`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MineCount(u8);

impl MineCount {
    pub const MAX: u8 = 8;

    pub const fn new(count: u8) -> Option<Self> {
        if count <= Self::MAX {
            Some(Self(count))
        } else {
            None
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// All valid counts, ascending.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..=Self::MAX).map(Self)
    }
}

/// Display state of a single board cell, as exchanged with the engine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellSymbol {
    /// Not yet revealed (`?`)
    #[default]
    Unknown,
    /// Held down under the pointer, purely local (`.`)
    Pressed,
    /// `B`
    Mine,
    /// `F`
    Flag,
    /// Revealed with this many adjacent mines (`0`..=`8`)
    Cleared(MineCount),
}

impl CellSymbol {
    /// `Cleared` with `count` adjacent mines, if `count` is a valid count.
    pub const fn cleared(count: u8) -> Option<Self> {
        match MineCount::new(count) {
            Some(count) => Some(Self::Cleared(count)),
            None => None,
        }
    }

    pub const fn to_char(self) -> char {
        use CellSymbol::*;
        match self {
            Unknown => '?',
            Pressed => '.',
            Mine => 'B',
            Flag => 'F',
            Cleared(count) => (b'0' + count.get()) as char,
        }
    }

    /// Whether the pointer may show this cell as pressed.
    pub const fn is_unknown(self) -> bool {
        matches!(self, Self::Unknown)
    }

    pub const fn is_pressed(self) -> bool {
        matches!(self, Self::Pressed)
    }
}

impl TryFrom<char> for CellSymbol {
    type Error = ProtocolError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        use CellSymbol::*;
        Ok(match value {
            '?' => Unknown,
            '.' => Pressed,
            'B' => Mine,
            'F' => Flag,
            '0'..='8' => Cleared(MineCount(value as u8 - b'0')),
            _ => return Err(ProtocolError::UnknownSymbol(value)),
        })
    }
}

impl fmt::Display for CellSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl Serialize for CellSymbol {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_char(self.to_char())
    }
}

struct SymbolVisitor;

impl<'de> Visitor<'de> for SymbolVisitor {
    type Value = CellSymbol;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a single cell symbol character")
    }

    fn visit_char<E: de::Error>(self, value: char) -> Result<Self::Value, E> {
        CellSymbol::try_from(value).map_err(E::custom)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self.visit_char(c),
            _ => Err(E::invalid_value(de::Unexpected::Str(value), &self)),
        }
    }
}

impl<'de> Deserialize<'de> for CellSymbol {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(SymbolVisitor)
    }
}

/// Cell symbols in row-major order, given either as a list of one-character
/// strings or as one string with a character per cell.
pub(crate) fn deserialize_board<'de, D>(deserializer: D) -> Result<Vec<CellSymbol>, D::Error>
where
    D: Deserializer<'de>,
{
    struct BoardVisitor;

    impl<'de> Visitor<'de> for BoardVisitor {
        type Value = Vec<CellSymbol>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a sequence of cell symbols or a string of them")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value
                .chars()
                .map(|c| CellSymbol::try_from(c).map_err(E::custom))
                .collect()
        }

        fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut board = Vec::with_capacity(seq.size_hint().unwrap_or(0));
            while let Some(symbol) = seq.next_element::<CellSymbol>()? {
                board.push(symbol);
            }
            Ok(board)
        }
    }

    deserializer.deserialize_any(BoardVisitor)
}
