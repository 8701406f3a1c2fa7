use thiserror::Error;

/// Validation errors raised while turning caller input into provider requests.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol length {len} exceeds max {max}")]
    SymbolTooLong { len: usize, max: usize },
    #[error("symbol must start with an ASCII letter: '{ch}'")]
    SymbolInvalidStart { ch: char },
    #[error("symbol contains invalid character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },
    #[error("unknown market prefix '{prefix}:', expected one of X, C, I, O")]
    UnknownMarket { prefix: String },

    #[error("missing required parameter '{name}'")]
    MissingParameter { name: &'static str },

    #[error("parameter '{field}' must be a YYYY-MM-DD date: '{value}'")]
    InvalidDate { field: &'static str, value: String },
    #[error("date range is inverted: from {from} is after to {to}")]
    InvertedDateRange { from: String, to: String },

    #[error("invalid timeframe '{value}', expected one of annual, quarterly, ttm")]
    InvalidTimeframe { value: String },
    #[error(
        "invalid timespan '{value}', expected one of minute, hour, day, week, month, quarter, year"
    )]
    InvalidTimespan { value: String },

    #[error("limit must be between 1 and {max}: '{value}'")]
    InvalidLimit { value: String, max: u32 },
    #[error("multiplier must be a positive integer: '{value}'")]
    InvalidMultiplier { value: String },
}

impl ValidationError {
    /// True when the caller omitted a required value, as opposed to sending a malformed one.
    pub const fn is_missing_parameter(&self) -> bool {
        matches!(self, Self::MissingParameter { .. })
    }
}

/// Startup configuration errors. Any of these prevents the proxy from serving.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("provider credential is not set (expected one of: {})", .vars.join(", "))]
    MissingCredential { vars: Vec<&'static str> },

    #[error("environment variable {var} has invalid value '{value}': {reason}")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },
}
