// Three-level codes. Marks alternate between HIGH and LOW, starting HIGH;
// spaces sit on the NEUTRAL line. Bipolar-AMI marks '1', pseudoternary
// marks '0'.

use super::{
    Bit, BitString, HIGH, Level, LineCode, NEUTRAL, SignalLevels, fold_bits,
    invert,
};

const FIRST_MARK: Level = HIGH;

/// Emit the current mark polarity for `mark` bits and flip it afterwards.
fn alternate_marks(bits: &BitString, mark: Bit) -> SignalLevels {
    fold_bits(bits, FIRST_MARK, move |level, bit| {
        if bit == mark {
            (invert(level), level)
        } else {
            (level, NEUTRAL)
        }
    })
    .collect()
}

/// Alternate mark inversion.
pub struct BipolarAmi;

impl LineCode for BipolarAmi {
    fn name(&self) -> &'static str {
        "Bipolar AMI"
    }

    fn samples_per_bit(&self) -> usize {
        1
    }

    fn encode(&self, bits: &BitString) -> SignalLevels {
        alternate_marks(bits, Bit::One)
    }
}

pub struct Pseudoternary;

impl LineCode for Pseudoternary {
    fn name(&self) -> &'static str {
        "Pseudoternary"
    }

    fn samples_per_bit(&self) -> usize {
        1
    }

    fn encode(&self, bits: &BitString) -> SignalLevels {
        alternate_marks(bits, Bit::Zero)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(s: &str) -> BitString {
        BitString::parse(s).unwrap()
    }

    #[test]
    fn test_bipolar_ami() {
        assert_eq!(BipolarAmi.encode(&bits("1101")), vec![1.0, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_bipolar_ami_spaces_keep_polarity() {
        // the space between marks must not consume a polarity flip
        assert_eq!(
            BipolarAmi.encode(&bits("10001")),
            vec![1.0, 0.5, 0.5, 0.5, 0.0]
        );
    }

    #[test]
    fn test_pseudoternary() {
        assert_eq!(
            Pseudoternary.encode(&bits("0100")),
            vec![1.0, 0.5, 0.0, 1.0]
        );
    }

    #[test]
    fn test_mirror_images() {
        let ami = BipolarAmi.encode(&bits("110100"));
        let pseudo = Pseudoternary.encode(&bits("001011"));
        assert_eq!(ami, pseudo);
    }
}
