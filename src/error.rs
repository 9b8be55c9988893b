use thiserror::Error;

/// Errors raised by the line coding core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineCodeError {
    /// Input contained a character other than '0' or '1'
    #[error(
        "invalid symbol {symbol:?} at position {position}, expected '0' or '1'"
    )]
    InvalidSymbol { symbol: char, position: usize },

    /// Scheme name did not match any supported line code
    #[error("unknown line coding scheme: {0}")]
    UnknownScheme(String),
}

pub type Result<T> = std::result::Result<T, LineCodeError>;
