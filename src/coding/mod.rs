// Baseband line coding: bit strings to voltage level sequences.
// Levels are normalised to {0, 0.5, 1}; 0.5 is the zero line of the
// three-level (bipolar) codes.

pub mod bipolar;
pub mod bits;
pub mod manchester;
pub mod nrz;
pub mod scheme;

pub use bipolar::{BipolarAmi, Pseudoternary};
pub use bits::{Bit, BitString};
pub use manchester::{DifferentialManchester, Manchester};
pub use nrz::{NrzI, NrzL};
pub use scheme::Scheme;

use crate::error::Result;

pub type Level = f32;
pub type SignalLevels = Vec<Level>;

pub const LOW: Level = 0.0;
pub const NEUTRAL: Level = 0.5;
pub const HIGH: Level = 1.0;

/// A line code maps each bit to `samples_per_bit` signal levels.
pub trait LineCode: Sync {
    fn name(&self) -> &'static str;

    fn samples_per_bit(&self) -> usize;

    /// Transform already validated bits. Any per-call state starts from the
    /// code's initial value and is dropped when the call returns.
    fn encode(&self, bits: &BitString) -> SignalLevels;

    /// Validate the alphabet of `input`, then encode it.
    fn encode_str(&self, input: &str) -> Result<SignalLevels> {
        let bits = BitString::parse(input)?;
        Ok(self.encode(&bits))
    }

    fn samples_for_bits(&self, num_bits: usize) -> usize {
        num_bits * self.samples_per_bit()
    }
}

/// Swap between the two mark levels.
pub(crate) fn invert(level: Level) -> Level {
    if level == HIGH { LOW } else { HIGH }
}

/// Thread `initial` through `bits`, emitting one output per bit.
/// `transition` receives the current state and returns `(next_state, output)`.
pub(crate) fn fold_bits<S, O, F>(
    bits: &BitString,
    initial: S,
    mut transition: F,
) -> impl Iterator<Item = O> + '_
where
    S: Copy + 'static,
    O: 'static,
    F: FnMut(S, Bit) -> (S, O) + 'static,
{
    bits.iter()
        .scan(initial, move |state, bit| {
            let (next, output) = transition(*state, bit);
            *state = next;
            Some(output)
        })
}
