use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DiffError;

/// How input text is split into tokens before diffing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffMode {
    /// One token per character.
    Chars,
    /// Tokens separated by runs of whitespace.
    Words,
    /// Tokens separated by `\n`, empty lines included.
    #[default]
    Lines,
}

impl DiffMode {
    /// Every supported mode, in the order they are advertised.
    pub const ALL: [DiffMode; 3] = [DiffMode::Chars, DiffMode::Words, DiffMode::Lines];

    /// The lowercase wire name of this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Chars => "chars",
            Self::Words => "words",
            Self::Lines => "lines",
        }
    }

    /// String placed between tokens when rebuilding text from a token sequence.
    pub fn separator(self) -> &'static str {
        match self {
            Self::Chars => "",
            Self::Words => " ",
            Self::Lines => "\n",
        }
    }
}

impl fmt::Display for DiffMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiffMode {
    type Err = DiffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chars" => Ok(Self::Chars),
            "words" => Ok(Self::Words),
            "lines" => Ok(Self::Lines),
            other => Err(DiffError::InvalidMode(other.to_string())),
        }
    }
}
