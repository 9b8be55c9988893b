pub mod coding;
pub mod error;
pub mod layout;
pub mod ui;
pub mod utils;

pub use coding::{BitString, LineCode, Scheme, SignalLevels};
pub use error::{LineCodeError, Result};
pub use layout::{WaveformPlot, encode_and_render, render};
