//! Drawing colours available to sketch details.

use serde::{Deserialize, Serialize};

/// Colour of a sketch detail
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Colour {
    /// No colour; used by details that are not drawn with ink (cross-sections)
    None,
    #[default]
    Black,
    Brown,
    Grey,
    Red,
    Orange,
    Green,
    Blue,
    Purple,
}

impl std::fmt::Display for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Black => write!(f, "black"),
            Self::Brown => write!(f, "brown"),
            Self::Grey => write!(f, "grey"),
            Self::Red => write!(f, "red"),
            Self::Orange => write!(f, "orange"),
            Self::Green => write!(f, "green"),
            Self::Blue => write!(f, "blue"),
            Self::Purple => write!(f, "purple"),
        }
    }
}
