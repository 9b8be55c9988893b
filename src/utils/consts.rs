/// Default log level (overridden by RUST_LOG)
pub const LOG_LEVEL: &str = "info";

// ============================================================================
// Waveform layout
// ============================================================================

/// Vertical axis bounds, room for levels 0 / 0.5 / 1 and the label row above
pub const Y_MIN: f32 = -0.5;
pub const Y_MAX: f32 = 2.0;

/// Bottom edge of the bit label boxes
pub const LABEL_BOX_Y: f32 = 1.5;

/// Height of the bit label boxes
pub const LABEL_BOX_HEIGHT: f32 = 0.5;

/// Drawn box width for one-sample-per-bit codes (NRZ, bipolar)
pub const NARROW_BOX_WIDTH: f32 = 0.5;

/// Drawn box width for two-sample-per-bit codes (Manchester family)
pub const WIDE_BOX_WIDTH: f32 = 0.8;

pub const X_LABEL: &str = "Time";
pub const Y_LABEL: &str = "Voltage Level";

// ============================================================================
// Terminal drawing
// ============================================================================

/// Characters per time unit
pub const DEFAULT_CELL_WIDTH: usize = 4;
pub const MIN_CELL_WIDTH: usize = 2;
pub const MAX_CELL_WIDTH: usize = 16;

/// Upper bound for `--random`
pub const MAX_RANDOM_BITS: usize = 64;
