use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LineCodeError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bit {
    Zero,
    One,
}

impl Bit {
    pub fn from_char(symbol: char) -> Option<Self> {
        match symbol {
            '0' => Some(Bit::Zero),
            '1' => Some(Bit::One),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Bit::Zero => '0',
            Bit::One => '1',
        }
    }

    pub fn is_one(self) -> bool {
        self == Bit::One
    }
}

/// Validated sequence of bits, read once from user input.
///
/// The only way to build one from text is [`BitString::parse`], so every
/// encoder receives input that has already passed the '0'/'1' alphabet check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BitString(Vec<Bit>);

impl BitString {
    /// Parse user input, rejecting the first character outside {'0', '1'}.
    /// The empty string is valid and yields an empty bit string.
    pub fn parse(input: &str) -> Result<Self> {
        input
            .chars()
            .enumerate()
            .map(|(position, symbol)| {
                Bit::from_char(symbol)
                    .ok_or(LineCodeError::InvalidSymbol { symbol, position })
            })
            .collect::<Result<Vec<_>>>()
            .map(BitString)
    }

    pub fn bits(&self) -> &[Bit] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = Bit> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for BitString {
    type Err = LineCodeError;

    fn from_str(s: &str) -> Result<Self> {
        BitString::parse(s)
    }
}

impl TryFrom<String> for BitString {
    type Error = LineCodeError;

    fn try_from(value: String) -> Result<Self> {
        BitString::parse(&value)
    }
}

impl From<BitString> for String {
    fn from(bits: BitString) -> Self {
        bits.to_string()
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.0 {
            write!(f, "{}", bit.to_char())?;
        }
        Ok(())
    }
}
