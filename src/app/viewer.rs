//! The viewer: binds a curve to a plot and re-renders it at a given phase.

use super::*;

/// The fixed layout of the plot's drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportConfig {
    /// Edge length of the square viewport, in display units.
    pub size: f64,
    /// Both axes span `-axis_limit..=axis_limit`.
    pub axis_limit: f64,
    pub grid: bool,
    pub grid_spacing: f64,
    pub trace_weight: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            size: WINDOW_SIZE.x.min(WINDOW_SIZE.y - TITLE_HEIGHT),
            axis_limit: AXIS_LIMIT,
            grid: true,
            grid_spacing: GRID_SPACING,
            trace_weight: TRACE_WEIGHT,
        }
    }
}

/// The state of the rendering surface: viewport layout, the current trace
/// and the title.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Plot {
    pub viewport: ViewportConfig,
    pub trace: CurvePoints,
    pub title: String,
}

impl Plot {
    /// An empty plot (no trace, no title) with the given layout.
    pub fn new(viewport: ViewportConfig) -> Self {
        Self {
            viewport,
            trace: CurvePoints::default(),
            title: String::new(),
        }
    }

    /// Maps a point in curve units to display units, relative to the centre of
    /// the viewport.
    pub fn to_screen(&self, x: f64, y: f64) -> (f64, f64) {
        let lim = self.viewport.axis_limit;
        let half = self.viewport.size / 2.0;

        (map(x, -lim, lim, -half, half), map(y, -lim, lim, -half, half))
    }

    /// Grid line positions in curve units, or none if the grid is disabled.
    pub fn grid_ticks(&self) -> Vec<f64> {
        if self.viewport.grid {
            grid_ticks(self.viewport.axis_limit, self.viewport.grid_spacing)
        }
        else {
            Vec::new()
        }
    }
}

/// Owns a curve and the plot it is rendered to.
#[derive(Debug, Clone)]
pub struct Viewer<C: Curve> {
    curve: C,
    plot: Plot,
}

impl<C: Curve> Viewer<C> {
    pub fn new(curve: C) -> Self {
        Self::with_viewport(curve, ViewportConfig::default())
    }

    pub fn with_viewport(curve: C, viewport: ViewportConfig) -> Self {
        Self { curve, plot: Plot::new(viewport) }
    }

    pub const fn curve(&self) -> &C {
        &self.curve
    }

    pub fn curve_mut(&mut self) -> &mut C {
        &mut self.curve
    }

    pub const fn plot(&self) -> &Plot {
        &self.plot
    }

    /// Sets the curve's phase, re-samples it, and updates the trace and title.
    ///
    /// Returns the updated plot for the next redraw.
    pub fn render_at_phase(&mut self, phase: f64) -> &Plot {
        self.curve.set_phase(phase);
        self.plot.trace = self.curve.compute_points();
        self.plot.title = format!(
            "Lissajous {}\nPhase: {:.2} rad",
            self.curve.ratio_label(),
            self.curve.phase(),
        );

        &self.plot
    }

    /// Describes a full phase sweep over `frame_count` frames. Nothing is
    /// rendered until the frames are iterated.
    pub fn animate(&self, frame_count: usize) -> Animation {
        Animation::new(frame_count)
    }
}

impl<C: Curve + Into<CurveKind>> Viewer<C> {
    pub fn into_kind(self) -> Viewer<CurveKind> {
        Viewer { curve: self.curve.into(), plot: self.plot }
    }

    /// Renders the curve at `phase` and opens a window showing it.
    ///
    /// Blocks in the window's event loop; the process exits when the window
    /// is closed.
    pub fn show_static(mut self, phase: f64) {
        self.render_at_phase(phase);

        let label = format!("Static {}", self.curve.ratio_label());
        run_scenes(vec![Scene::fixed(label, self.into_kind(), phase)]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let viewer = Viewer::new(BasicCurve::default());
        let plot = viewer.plot();

        assert!(plot.trace.is_empty());
        assert!(plot.title.is_empty());
        assert!(plot.viewport.grid);
        assert!(eps_eq(plot.viewport.axis_limit, 1.5));
    }

    #[test]
    fn render_updates_trace_and_title() {
        let mut viewer = Viewer::new(BasicCurve::new(3.0, 2.0, 0.0).unwrap());
        let plot = viewer.render_at_phase(FRAC_PI_4);

        assert_eq!(plot.trace.len(), SAMPLE_COUNT);
        assert_eq!(plot.title, "Lissajous 3:2\nPhase: 0.79 rad");
        assert!(within_tolerance(viewer.curve().phase(), FRAC_PI_4, 1e-12));
    }

    #[test]
    fn title_shows_wrapped_phase() {
        let mut viewer = Viewer::new(ModulatedCurve::new(4.0, 3.0, 0.0, 0.7).unwrap());
        let plot = viewer.render_at_phase(TAU + 1.0);

        assert_eq!(plot.title, "Lissajous 4:3\nPhase: 1.00 rad");
    }

    #[test]
    fn screen_mapping() {
        let plot = Plot::new(ViewportConfig { size: 600.0, ..Default::default() });

        let (x, y) = plot.to_screen(1.5, -1.5);
        assert!(within_tolerance(x, 300.0, 1e-9));
        assert!(within_tolerance(y, -300.0, 1e-9));

        let (x, y) = plot.to_screen(0.0, 0.75);
        assert!(within_tolerance(x, 0.0, 1e-9));
        assert!(within_tolerance(y, 150.0, 1e-9));
    }

    #[test]
    fn grid_can_be_disabled() {
        let mut plot = Plot::default();
        assert_eq!(plot.grid_ticks().len(), 7);

        plot.viewport.grid = false;
        assert!(plot.grid_ticks().is_empty());
    }

    #[test]
    fn converts_to_kind() {
        let mut viewer = Viewer::new(BasicCurve::new(3.0, 2.0, 0.0).unwrap());
        viewer.render_at_phase(1.0);

        let kind = viewer.into_kind();
        assert_eq!(kind.curve().name(), "basic");
        assert_eq!(kind.plot().trace.len(), SAMPLE_COUNT);
    }
}
