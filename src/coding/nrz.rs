use super::{
    Bit, BitString, HIGH, LOW, Level, LineCode, SignalLevels, fold_bits,
    invert,
};

/// NRZ-L: '1' is high, '0' is low for the whole bit interval.
pub struct NrzL;

impl LineCode for NrzL {
    fn name(&self) -> &'static str {
        "NRZ-L"
    }

    fn samples_per_bit(&self) -> usize {
        1
    }

    fn encode(&self, bits: &BitString) -> SignalLevels {
        bits.iter()
            .map(|bit| if bit.is_one() { HIGH } else { LOW })
            .collect()
    }
}

/// NRZ-I: a '1' inverts the line before the bit is sent, a '0' holds it.
/// The line starts low.
pub struct NrzI;

impl NrzI {
    const INITIAL_LEVEL: Level = LOW;

    fn transition(level: Level, bit: Bit) -> (Level, Level) {
        let level = match bit {
            Bit::One => invert(level),
            Bit::Zero => level,
        };
        (level, level)
    }
}

impl LineCode for NrzI {
    fn name(&self) -> &'static str {
        "NRZ-I"
    }

    fn samples_per_bit(&self) -> usize {
        1
    }

    fn encode(&self, bits: &BitString) -> SignalLevels {
        fold_bits(bits, Self::INITIAL_LEVEL, Self::transition).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(s: &str) -> BitString {
        BitString::parse(s).unwrap()
    }

    #[test]
    fn test_nrz_l() {
        assert_eq!(NrzL.encode(&bits("")), Vec::<f32>::new());
        assert_eq!(NrzL.encode(&bits("101")), vec![1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_nrz_i() {
        assert_eq!(NrzI.encode(&bits("1011")), vec![1.0, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_nrz_i_leading_zeros_stay_low() {
        assert_eq!(NrzI.encode(&bits("0001")), vec![0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_nrz_i_no_state_between_calls() {
        let input = bits("1");
        assert_eq!(NrzI.encode(&input), vec![1.0]);
        assert_eq!(NrzI.encode(&input), vec![1.0]);
    }
}
