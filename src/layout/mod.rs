//! Waveform layout: turns encoded levels into a drawable step plot.
//!
//! Each sample occupies one time unit. The plot holds every level until the
//! next unit boundary and repeats the last level once, so the final symbol is
//! as wide as the others. Bits are labelled above the trace, one box per bit,
//! spanning the `samples_per_bit` units that bit produced.
//!
//! Nothing here draws; the result is plain data for whatever surface the
//! caller owns (see [`crate::ui`] for the terminal one).

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::coding::{BitString, Level, Scheme};
use crate::error::Result;
use crate::utils::consts::{
    LABEL_BOX_HEIGHT, LABEL_BOX_Y, NARROW_BOX_WIDTH, WIDE_BOX_WIDTH,
    X_LABEL, Y_LABEL, Y_MAX, Y_MIN,
};

/// Geometry of the plot frame and label boxes
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    pub y_range: (f32, f32),
    pub label_box_y: f32,
    pub label_box_height: f32,
    /// Drawn box width when a bit spans one time unit
    pub narrow_box_width: f32,
    /// Drawn box width when a bit spans two time units
    pub wide_box_width: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            y_range: (Y_MIN, Y_MAX),
            label_box_y: LABEL_BOX_Y,
            label_box_height: LABEL_BOX_HEIGHT,
            narrow_box_width: NARROW_BOX_WIDTH,
            wide_box_width: WIDE_BOX_WIDTH,
        }
    }
}

impl LayoutConfig {
    fn box_width(&self, samples_per_bit: usize) -> f32 {
        if samples_per_bit > 1 {
            self.wide_box_width
        } else {
            self.narrow_box_width
        }
    }
}

/// One vertex of the step path, held until the next vertex's time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepPoint {
    pub time: f32,
    pub level: Level,
}

/// Label for one source bit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelBox {
    pub label: char,
    pub bit_index: usize,
    /// First time unit produced by this bit
    pub span_start: f32,
    /// Number of time units produced by this bit
    pub span_width: f32,
    /// Drawn rectangle, lower-left corner plus size
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Where the label text is centered
    pub text_x: f32,
    pub text_y: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveformPlot {
    pub scheme: Scheme,
    pub title: String,
    pub legend: String,
    pub x_label: String,
    pub y_label: String,
    pub x_range: (f32, f32),
    pub y_range: (f32, f32),
    /// Step path, interpreted step-post; `len(signal) + 1` points
    pub points: Vec<StepPoint>,
    pub labels: Vec<LabelBox>,
}

impl WaveformPlot {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn time_axis(&self) -> Vec<f32> {
        self.points
            .iter()
            .map(|p| p.time)
            .collect()
    }

    pub fn levels(&self) -> Vec<Level> {
        self.points
            .iter()
            .map(|p| p.level)
            .collect()
    }

    /// Corner vertices of the step path, for surfaces that only draw
    /// straight line segments.
    pub fn polyline(&self) -> Vec<(f32, f32)> {
        let mut vertices = Vec::with_capacity(self.points.len() * 2);
        let mut iter = self.points.iter();

        let Some(first) = iter.next() else {
            return vertices;
        };
        vertices.push((first.time, first.level));

        let mut held = first.level;
        for point in iter {
            vertices.push((point.time, held));
            if point.level != held {
                vertices.push((point.time, point.level));
                held = point.level;
            }
        }

        vertices
    }
}

/// Lay out `signal` (the encoding of `bits` under `scheme`) with the default
/// geometry.
pub fn render(
    bits: &BitString,
    signal: &[Level],
    scheme: Scheme,
) -> WaveformPlot {
    render_with(bits, signal, scheme, &LayoutConfig::default())
}

pub fn render_with(
    bits: &BitString,
    signal: &[Level],
    scheme: Scheme,
    config: &LayoutConfig,
) -> WaveformPlot {
    let samples_per_bit = scheme.samples_per_bit();
    let expected = bits.len() * samples_per_bit;
    if signal.len() != expected {
        warn!(
            "{}: {} bits should give {} levels, got {}",
            scheme,
            bits.len(),
            expected,
            signal.len()
        );
    }

    // Repeat the final level so the last symbol gets a full time unit.
    let points: Vec<StepPoint> = signal
        .iter()
        .chain(signal.last())
        .enumerate()
        .map(|(t, &level)| StepPoint {
            time: t as f32,
            level,
        })
        .collect();

    let span_width = samples_per_bit as f32;
    let box_width = config.box_width(samples_per_bit);
    let text_y = config.label_box_y + config.label_box_height / 2.0;

    let labels: Vec<LabelBox> = bits
        .iter()
        .enumerate()
        .map(|(i, bit)| {
            let span_start = i as f32 * span_width;
            let center = span_start + span_width / 2.0;
            LabelBox {
                label: bit.to_char(),
                bit_index: i,
                span_start,
                span_width,
                x: center - box_width / 2.0,
                y: config.label_box_y,
                width: box_width,
                height: config.label_box_height,
                text_x: center,
                text_y,
            }
        })
        .collect();

    debug!(
        "{}: laid out {} points, {} labels",
        scheme,
        points.len(),
        labels.len()
    );

    WaveformPlot {
        scheme,
        title: format!("{} Encoding", scheme),
        legend: scheme.name().to_string(),
        x_label: X_LABEL.to_string(),
        y_label: Y_LABEL.to_string(),
        x_range: (0.0, points.len() as f32),
        y_range: config.y_range,
        points,
        labels,
    }
}

/// Validate `input`, encode it under `scheme` and lay out the result.
pub fn encode_and_render(scheme: Scheme, input: &str) -> Result<WaveformPlot> {
    let bits = BitString::parse(input)?;
    let signal = scheme.encode(&bits);
    Ok(render(&bits, &signal, scheme))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plot(scheme: Scheme, input: &str) -> WaveformPlot {
        encode_and_render(scheme, input).unwrap()
    }

    #[test]
    fn test_last_level_is_extended() {
        let plot = plot(Scheme::NrzL, "101");
        assert_eq!(plot.time_axis(), vec![0.0, 1.0, 2.0, 3.0]);
        assert_eq!(plot.levels(), vec![1.0, 0.0, 1.0, 1.0]);
        assert_eq!(plot.x_range, (0.0, 4.0));
        assert_eq!(plot.y_range, (-0.5, 2.0));
    }

    #[test]
    fn test_single_sample_labels() {
        let plot = plot(Scheme::BipolarAmi, "10");
        assert_eq!(plot.labels.len(), 2);

        let second = &plot.labels[1];
        assert_eq!(second.label, '0');
        assert_eq!(second.span_start, 1.0);
        assert_eq!(second.span_width, 1.0);
        assert_eq!(second.text_x, 1.5);
        assert_eq!(second.x, 1.25);
        assert_eq!(second.width, 0.5);
        assert_eq!((second.y, second.text_y), (1.5, 1.75));
    }

    #[test]
    fn test_two_sample_labels() {
        let plot = plot(Scheme::Manchester, "011");
        assert_eq!(plot.points.len(), 7);
        assert_eq!(plot.labels.len(), 3);

        let second = &plot.labels[1];
        assert_eq!(second.span_start, 2.0);
        assert_eq!(second.span_width, 2.0);
        assert_eq!(second.text_x, 3.0);
        assert!((second.x - 2.6).abs() < 1e-6);
        assert_eq!(second.width, 0.8);
    }

    #[test]
    fn test_empty_plot() {
        let plot = plot(Scheme::DifferentialManchester, "");
        assert!(plot.is_empty());
        assert!(plot.labels.is_empty());
        assert_eq!(plot.x_range, (0.0, 0.0));
        assert!(plot.polyline().is_empty());
    }

    #[test]
    fn test_polyline_corners() {
        let plot = plot(Scheme::NrzL, "10");
        assert_eq!(
            plot.polyline(),
            vec![(0.0, 1.0), (1.0, 1.0), (1.0, 0.0), (2.0, 0.0)]
        );
    }

    #[test]
    fn test_titles() {
        let plot = plot(Scheme::NrzI, "1");
        assert_eq!(plot.title, "NRZ-I Encoding");
        assert_eq!(plot.legend, "NRZ-I");
        assert_eq!(plot.x_label, "Time");
        assert_eq!(plot.y_label, "Voltage Level");
    }

    #[test]
    fn test_mismatched_signal_still_renders() {
        let bits = BitString::parse("11").unwrap();
        let plot = render(&bits, &[1.0], Scheme::Manchester);
        assert_eq!(plot.points.len(), 2);
        assert_eq!(plot.labels.len(), 2);
    }

    #[test]
    fn test_invalid_input_propagates() {
        assert!(encode_and_render(Scheme::Pseudoternary, "0a").is_err());
    }
}
