use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Longest body after the market prefix. Option contracts are the long case:
/// root (up to 6) + expiry (6) + side (1) + strike (8).
const MAX_BODY_LEN: usize = 21;

/// Asset class encoded in a provider ticker's `<MARKET>:` prefix.
/// Equities carry no prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Market {
    Stocks,
    Crypto,
    Forex,
    Indices,
    Options,
}

impl Market {
    fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "X" => Some(Self::Crypto),
            "C" => Some(Self::Forex),
            "I" => Some(Self::Indices),
            "O" => Some(Self::Options),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stocks => "stocks",
            Self::Crypto => "crypto",
            Self::Forex => "fx",
            Self::Indices => "indices",
            Self::Options => "options",
        }
    }
}

/// Provider ticker, trimmed and uppercased: `AAPL`, `BRK.B`, `X:BTCUSD`, `I:SPX`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptySymbol);
        }

        let normalized = trimmed.to_ascii_uppercase();
        let (offset, body) = match normalized.split_once(':') {
            Some((prefix, body)) => {
                if Market::from_prefix(prefix).is_none() {
                    return Err(ValidationError::UnknownMarket {
                        prefix: prefix.to_owned(),
                    });
                }
                (prefix.len() + 1, body)
            }
            None => (0, normalized.as_str()),
        };

        let len = body.chars().count();
        if len == 0 {
            return Err(ValidationError::EmptySymbol);
        }
        if len > MAX_BODY_LEN {
            return Err(ValidationError::SymbolTooLong {
                len,
                max: MAX_BODY_LEN,
            });
        }

        if let Some(first) = body.chars().next() {
            if !first.is_ascii_alphabetic() {
                return Err(ValidationError::SymbolInvalidStart { ch: first });
            }
        }

        // Share classes come through as BRK.B or BF-B depending on the venue.
        for (index, ch) in body.chars().enumerate() {
            if !(ch.is_ascii_alphanumeric() || ch == '.' || ch == '-') {
                return Err(ValidationError::SymbolInvalidChar {
                    ch,
                    index: offset + index,
                });
            }
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn market(&self) -> Market {
        self.0
            .split_once(':')
            .and_then(|(prefix, _)| Market::from_prefix(prefix))
            .unwrap_or(Market::Stocks)
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Symbol {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for Symbol {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Symbol> for String {
    fn from(value: Symbol) -> Self {
        value.0
    }
}
