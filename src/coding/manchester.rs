// Self-clocking codes: two levels per bit with a transition at mid-bit.
// 0 -> [1, 0] (high to low), 1 -> [0, 1] (low to high)

use super::{
    Bit, BitString, HIGH, LOW, Level, LineCode, SignalLevels, fold_bits,
};

const FALLING: [Level; 2] = [HIGH, LOW];
const RISING: [Level; 2] = [LOW, HIGH];

pub struct Manchester;

impl LineCode for Manchester {
    fn name(&self) -> &'static str {
        "Manchester"
    }

    fn samples_per_bit(&self) -> usize {
        2
    }

    fn encode(&self, bits: &BitString) -> SignalLevels {
        let mut samples = Vec::with_capacity(self.samples_for_bits(bits.len()));

        for bit in bits.iter() {
            match bit {
                Bit::Zero => samples.extend(FALLING),
                Bit::One => samples.extend(RISING),
            }
        }

        samples
    }
}

/// Differential Manchester. The state is the level the previous bit ended
/// on, starting HIGH. A '0' repeats the previous transition direction,
/// a '1' reverses it.
pub struct DifferentialManchester;

impl DifferentialManchester {
    const INITIAL_LEVEL: Level = HIGH;

    fn transition(previous: Level, bit: Bit) -> (Level, [Level; 2]) {
        let rising = match bit {
            Bit::Zero => previous != LOW,
            Bit::One => previous == LOW,
        };
        if rising { (HIGH, RISING) } else { (LOW, FALLING) }
    }
}

impl LineCode for DifferentialManchester {
    fn name(&self) -> &'static str {
        "Differential Manchester"
    }

    fn samples_per_bit(&self) -> usize {
        2
    }

    fn encode(&self, bits: &BitString) -> SignalLevels {
        fold_bits(bits, Self::INITIAL_LEVEL, Self::transition)
            .flatten()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(s: &str) -> BitString {
        BitString::parse(s).unwrap()
    }

    #[test]
    fn test_manchester() {
        assert_eq!(Manchester.encode(&bits("01")), vec![1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_manchester_transition_every_bit() {
        let samples = Manchester.encode(&bits("0011010"));
        assert_eq!(samples.len(), 14);
        for pair in samples.chunks(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }

    #[test]
    fn test_differential_manchester_zeros() {
        // starts HIGH, so the first '0' rises and every later '0' repeats it
        assert_eq!(
            DifferentialManchester.encode(&bits("00")),
            vec![0.0, 1.0, 0.0, 1.0]
        );
    }

    #[test]
    fn test_differential_manchester_ones_alternate() {
        assert_eq!(
            DifferentialManchester.encode(&bits("111")),
            vec![1.0, 0.0, 0.0, 1.0, 1.0, 0.0]
        );
    }

    #[test]
    fn test_differential_manchester_mixed() {
        // 1: H -> fall, 0: L -> fall, 1: L -> rise, 0: H -> rise
        assert_eq!(
            DifferentialManchester.encode(&bits("1010")),
            vec![1.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 1.0]
        );
    }
}
