use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the four canonical answer labels.
///
/// The classifier's "no gesture" outcome is `Option<AnswerSymbol>::None`;
/// there is deliberately no fifth variant here, so a submission outside
/// A-D is unrepresentable past the parse boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnswerSymbol {
    A,
    B,
    C,
    D,
}

impl AnswerSymbol {
    /// All symbols in display order.
    pub const ALL: [AnswerSymbol; 4] = [Self::A, Self::B, Self::C, Self::D];

    /// String representation for display and catalog files.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }
}

impl fmt::Display for AnswerSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("not an answer symbol: {raw:?}")]
pub struct ParseSymbolError {
    raw: String,
}

impl FromStr for AnswerSymbol {
    type Err = ParseSymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(Self::A),
            "B" | "b" => Ok(Self::B),
            "C" | "c" => Ok(Self::C),
            "D" | "d" => Ok(Self::D),
            other => Err(ParseSymbolError {
                raw: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_cases() {
        assert_eq!("A".parse::<AnswerSymbol>().unwrap(), AnswerSymbol::A);
        assert_eq!("d".parse::<AnswerSymbol>().unwrap(), AnswerSymbol::D);
        assert_eq!(" b ".parse::<AnswerSymbol>().unwrap(), AnswerSymbol::B);
    }

    #[test]
    fn rejects_unknown_labels() {
        assert!("E".parse::<AnswerSymbol>().is_err());
        assert!("".parse::<AnswerSymbol>().is_err());
        assert!("AB".parse::<AnswerSymbol>().is_err());
    }

    #[test]
    fn display_round_trips() {
        for symbol in AnswerSymbol::ALL {
            assert_eq!(symbol.to_string().parse::<AnswerSymbol>().unwrap(), symbol);
        }
    }
}
