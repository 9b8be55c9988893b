use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    BipolarAmi, BitString, DifferentialManchester, LineCode, Manchester, NrzI,
    NrzL, Pseudoternary, SignalLevels,
};
use crate::error::{LineCodeError, Result};

/// The supported line codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scheme {
    NrzL,
    NrzI,
    BipolarAmi,
    Pseudoternary,
    Manchester,
    DifferentialManchester,
}

impl Scheme {
    pub const ALL: [Scheme; 6] = [
        Scheme::NrzL,
        Scheme::NrzI,
        Scheme::BipolarAmi,
        Scheme::Pseudoternary,
        Scheme::Manchester,
        Scheme::DifferentialManchester,
    ];

    pub fn line_code(self) -> &'static dyn LineCode {
        match self {
            Scheme::NrzL => &NrzL,
            Scheme::NrzI => &NrzI,
            Scheme::BipolarAmi => &BipolarAmi,
            Scheme::Pseudoternary => &Pseudoternary,
            Scheme::Manchester => &Manchester,
            Scheme::DifferentialManchester => &DifferentialManchester,
        }
    }

    pub fn name(self) -> &'static str {
        self.line_code().name()
    }

    pub fn samples_per_bit(self) -> usize {
        self.line_code().samples_per_bit()
    }

    pub fn encode(self, bits: &BitString) -> SignalLevels {
        let levels = self.line_code().encode(bits);
        debug!(
            "{}: {} bits -> {} levels",
            self.name(),
            bits.len(),
            levels.len()
        );
        levels
    }

    pub fn encode_str(self, input: &str) -> Result<SignalLevels> {
        let bits = BitString::parse(input)?;
        Ok(self.encode(&bits))
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scheme {
    type Err = LineCodeError;

    /// Accepts display names ("Bipolar AMI") and flag values ("bipolar-ami"),
    /// ignoring case and treating '-', '_' and ' ' alike.
    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match key.as_str() {
            "nrzl" => Ok(Scheme::NrzL),
            "nrzi" => Ok(Scheme::NrzI),
            "bipolarami" | "ami" => Ok(Scheme::BipolarAmi),
            "pseudoternary" => Ok(Scheme::Pseudoternary),
            "manchester" => Ok(Scheme::Manchester),
            "differentialmanchester" | "diffmanchester" => {
                Ok(Scheme::DifferentialManchester)
            }
            _ => Err(LineCodeError::UnknownScheme(s.to_string())),
        }
    }
}
