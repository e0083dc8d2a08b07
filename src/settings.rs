//! Global constants.

/// The number of parameter values each curve is sampled at.
pub const SAMPLE_COUNT: usize = 1000;

/// The (symmetric) axis limit of the plot, in curve units. Both axes span
/// `-AXIS_LIMIT..=AXIS_LIMIT`.
pub const AXIS_LIMIT: f64 = 1.5;

/// Spacing between grid lines, in curve units.
pub const GRID_SPACING: f64 = 0.5;

/// A convenience struct to allow `WINDOW_SIZE` to have `x` and `y` fields.
pub struct V2 {
    pub x: f64,
    pub y: f64,
}

/// The size of the application's window in display units. The plot is square,
/// so this is square too.
pub const WINDOW_SIZE: V2 = V2 { x: 800.0, y: 800.0 };

/// The vertical space reserved above the viewport for the title.
pub const TITLE_HEIGHT: f64 = 60.0;

/// The line weight of the curve trace.
pub const TRACE_WEIGHT: f64 = 2.0;

/// The number of frames in one full phase sweep.
pub const DEFAULT_FRAME_COUNT: usize = 100;

/// The delay between two animation frames.
pub const FRAME_INTERVAL_MS: u64 = 50;

/// The frame rate recorded for exported image sequences.
pub const EXPORT_FPS: u32 = 20;

/// The modulation depth used when none is supplied.
pub const DEFAULT_MODULATION: f64 = 0.5;

pub const BASIC_EXPORT_DIR: &str = "basic_lissajous";
pub const MODULATED_EXPORT_DIR: &str = "modulated_lissajous";
