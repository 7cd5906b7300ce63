use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::errors::MarketDataError;

const MAX_SYMBOL_LEN: usize = 10;

/// Validated stock symbol.
///
/// A symbol is accepted exactly when it is 1-10 characters drawn from
/// uppercase ASCII letters, digits, `.` and `-`. Input is not normalized:
/// lowercase tickers are rejected, matching the validation applied at the
/// API boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    /// Parse a raw symbol string.
    pub fn parse(input: &str) -> Result<Self, MarketDataError> {
        let valid = !input.is_empty()
            && input.len() <= MAX_SYMBOL_LEN
            && input
                .chars()
                .all(|ch| ch.is_ascii_uppercase() || ch.is_ascii_digit() || ch == '.' || ch == '-');

        if !valid {
            return Err(MarketDataError::InvalidSymbol {
                symbol: input.to_string(),
            });
        }

        Ok(Self(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Symbol {
    type Error = MarketDataError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for Symbol {
    type Error = MarketDataError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Symbol> for String {
    fn from(value: Symbol) -> Self {
        value.0
    }
}
