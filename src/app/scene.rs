//! The scenes shown by the app, one at a time.

use super::*;
use std::path::PathBuf;
use std::time::Duration;

/// How a scene's curve is shown.
#[derive(Debug, Clone)]
pub enum Playback {
    /// A single render at a fixed phase.
    Static { phase: f64 },
    /// A looping phase sweep, optionally exported on its first cycle.
    Animated {
        animation: Animation,
        export: Option<FrameExporter>,
    },
}

/// A viewer paired with the way it is played back.
#[derive(Debug, Clone)]
pub struct Scene {
    label: String,
    viewer: Viewer<CurveKind>,
    playback: Playback,

    frame: usize,
    since_frame: Duration,
    pending_capture: Option<PathBuf>,
}

impl Scene {
    pub fn new(
        label: impl Into<String>,
        viewer: Viewer<CurveKind>,
        playback: Playback,
    ) -> Self {
        Self {
            label: label.into(),
            viewer,
            playback,
            frame: 0,
            since_frame: Duration::ZERO,
            pending_capture: None,
        }
    }

    /// A scene showing `viewer` at a fixed `phase`.
    pub fn fixed(
        label: impl Into<String>,
        viewer: Viewer<CurveKind>,
        phase: f64,
    ) -> Self {
        Self::new(label, viewer, Playback::Static { phase })
    }

    /// A scene looping `animation`, exporting the first cycle to `export_dir`
    /// if one is given.
    pub fn animated(
        label: impl Into<String>,
        viewer: Viewer<CurveKind>,
        animation: Animation,
        export_dir: Option<PathBuf>,
    ) -> Self {
        let export = export_dir.map(FrameExporter::new);
        Self::new(label, viewer, Playback::Animated { animation, export })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub const fn viewer(&self) -> &Viewer<CurveKind> {
        &self.viewer
    }

    pub fn viewer_mut(&mut self) -> &mut Viewer<CurveKind> {
        &mut self.viewer
    }

    pub const fn playback(&self) -> &Playback {
        &self.playback
    }

    /// The current frame index (always `0` for static scenes).
    pub const fn frame(&self) -> usize {
        self.frame
    }

    /// Makes this the active scene: renders its first frame and prepares its
    /// export, if any.
    ///
    /// A failed export preparation is logged and disables export for this
    /// scene; playback is unaffected.
    pub fn enter(&mut self) {
        tracing::info!("showing {}", self.label);

        self.frame = 0;
        self.since_frame = Duration::ZERO;
        self.pending_capture = None;

        match &mut self.playback {
            Playback::Static { phase } => {
                self.viewer.render_at_phase(*phase);
            }
            Playback::Animated { animation, export } => {
                let failed = match export.as_mut() {
                    Some(exporter) if !exporter.is_complete() => {
                        exporter.prepare(animation).err()
                    }
                    _ => None,
                };

                if let Some(e) = failed {
                    tracing::warn!("could not export \"{}\": {e}", self.label);
                    *export = None;
                }

                self.viewer.render_at_phase(animation.phase(0));

                if let Some(exporter) = export.as_mut() {
                    self.pending_capture = exporter.capture_target(0);
                }
            }
        }
    }

    /// Advances an animated scene by `since_last`, rendering the next frame
    /// once a full frame interval has passed. Returns the new frame index if
    /// one was rendered.
    ///
    /// At most one frame is rendered per call, and playback holds until a
    /// pending capture has been taken.
    pub fn advance(&mut self, since_last: Duration) -> Option<usize> {
        let Playback::Animated { animation, export } = &mut self.playback
        else {
            return None;
        };

        if animation.is_empty() || self.pending_capture.is_some() {
            return None;
        }

        let interval = animation.interval();
        self.since_frame += since_last;

        if self.since_frame < interval {
            return None;
        }

        self.since_frame = (self.since_frame - interval).min(interval);
        self.frame = (self.frame + 1) % animation.len();
        self.viewer.render_at_phase(animation.phase(self.frame));

        if let Some(exporter) = export.as_mut() {
            self.pending_capture = exporter.capture_target(self.frame);
        }

        tracing::trace!(scene = %self.label, frame = self.frame, "frame rendered");

        Some(self.frame)
    }

    /// Takes the path the next drawn frame should be captured to, if any.
    pub fn take_capture(&mut self) -> Option<PathBuf> {
        self.pending_capture.take()
    }
}

/// The scenes of the demo: each example curve shown statically, then
/// animated and exported.
///
/// # Errors
///
/// Returns [`CurveError`] if an example curve is invalid.
pub fn demo_scenes() -> Result<Vec<Scene>, CurveError> {
    let basic = Viewer::new(CurveKind::from(BasicCurve::new(3.0, 2.0, 0.0)?));
    let modulated =
        Viewer::new(CurveKind::from(ModulatedCurve::new(4.0, 3.0, 0.0, 0.7)?));

    let animation = basic.animate(DEFAULT_FRAME_COUNT);

    Ok(vec![
        Scene::fixed("static basic Lissajous", basic.clone(), FRAC_PI_4),
        Scene::fixed(
            "static amplitude-modulated Lissajous",
            modulated.clone(),
            FRAC_PI_2,
        ),
        Scene::animated(
            "animated basic Lissajous",
            basic,
            animation,
            Some(PathBuf::from(BASIC_EXPORT_DIR)),
        ),
        Scene::animated(
            "animated amplitude-modulated Lissajous",
            modulated,
            animation,
            Some(PathBuf::from(MODULATED_EXPORT_DIR)),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = Duration::from_millis(FRAME_INTERVAL_MS);

    fn basic_viewer() -> Viewer<CurveKind> {
        Viewer::new(BasicCurve::new(3.0, 2.0, 0.0).unwrap().into())
    }

    #[test]
    fn static_scene_renders_once() {
        let mut scene = Scene::fixed("static", basic_viewer(), FRAC_PI_4);
        scene.enter();

        assert_eq!(scene.viewer().plot().title, "Lissajous 3:2\nPhase: 0.79 rad");
        assert_eq!(scene.advance(TICK * 10), None);
        assert_eq!(scene.take_capture(), None);
    }

    #[test]
    fn animated_scene_steps_at_interval() {
        let mut scene =
            Scene::animated("anim", basic_viewer(), Animation::new(4), None);
        scene.enter();
        assert_eq!(scene.frame(), 0);

        assert_eq!(scene.advance(TICK / 2), None);
        assert_eq!(scene.advance(TICK / 2), Some(1));
        assert!(within_tolerance(
            scene.viewer().curve().phase(),
            FRAC_PI_2,
            1e-12
        ));

        // a long stall only advances one frame
        assert_eq!(scene.advance(TICK * 20), Some(2));
        assert_eq!(scene.advance(TICK), Some(3));
        assert_eq!(scene.advance(Duration::ZERO), Some(0));
    }

    #[test]
    fn empty_animation_never_advances() {
        let mut scene =
            Scene::animated("empty", basic_viewer(), Animation::new(0), None);
        scene.enter();

        assert_eq!(scene.advance(TICK * 3), None);
    }

    #[test]
    fn exports_first_cycle_only() {
        let dir = std::env::temp_dir()
            .join(format!("lissajous-scene-{}", std::process::id()));
        let mut scene = Scene::animated(
            "export",
            basic_viewer(),
            Animation::new(2),
            Some(dir.clone()),
        );
        scene.enter();

        // blocked until the first capture is taken
        assert_eq!(scene.advance(TICK), None);
        assert_eq!(scene.take_capture(), Some(dir.join("000.png")));

        assert_eq!(scene.advance(TICK), Some(1));
        assert_eq!(scene.take_capture(), Some(dir.join("001.png")));

        assert_eq!(scene.advance(TICK), Some(0));
        assert_eq!(scene.take_capture(), None);

        // re-entering after a finished export does not capture again
        scene.enter();
        assert_eq!(scene.take_capture(), None);

        _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn failed_export_keeps_playing() {
        let blocker = std::env::temp_dir()
            .join(format!("lissajous-scene-blocker-{}", std::process::id()));
        std::fs::write(&blocker, b"").unwrap();

        let mut scene = Scene::animated(
            "broken export",
            basic_viewer(),
            Animation::new(3),
            Some(blocker.join("frames")),
        );
        scene.enter();

        assert!(matches!(
            scene.playback(),
            Playback::Animated { export: None, .. }
        ));
        assert_eq!(scene.take_capture(), None);
        assert_eq!(scene.advance(TICK), Some(1));

        _ = std::fs::remove_file(&blocker);
    }

    #[test]
    fn demo_scene_list() {
        let scenes = demo_scenes().unwrap();

        assert_eq!(scenes.len(), 4);
        assert!(matches!(scenes[0].playback(), Playback::Static { .. }));
        assert!(matches!(
            scenes[3].playback(),
            Playback::Animated { export: Some(_), .. }
        ));
        assert_eq!(scenes[1].viewer().curve().ratio_label(), "4:3");
    }
}
