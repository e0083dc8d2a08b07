//! The whole app's state.

use super::view::view;
use super::*;
use nannou::prelude::*;
use nannou::prelude::WindowId as Id;
use std::path::PathBuf;

mod constructors;
use constructors::*;

/// The app's model, i.e. its state.
pub struct Model {
    window: Id,

    /// Every scene, in the order they are shown.
    scenes: Vec<Scene>,
    /// Index of the scene currently shown.
    current: usize,
}

impl Model {
    /// Builds the app's `Model` from the scenes parked by
    /// [`run_scenes`](super::run_scenes).
    ///
    /// # Panics
    ///
    /// Panics if a new window cannot be initialized.
    pub fn build(app: &App) -> Self {
        let window =
            build_window(app, WINDOW_SIZE.x as u32, WINDOW_SIZE.y as u32);

        let mut scenes = take_pending_scenes();

        if scenes.is_empty() {
            tracing::warn!("no scenes to show");
        }
        else {
            scenes[0].enter();
        }

        Self { window, scenes, current: 0 }
    }

    pub const fn window_id(&self) -> Id {
        self.window
    }

    pub fn current_scene(&self) -> Option<&Scene> {
        self.scenes.get(self.current)
    }

    pub fn next_scene(&mut self) {
        if self.current + 1 < self.scenes.len() {
            self.switch_to(self.current + 1);
        }
    }

    pub fn previous_scene(&mut self) {
        if self.current > 0 {
            self.switch_to(self.current - 1);
        }
    }

    fn switch_to(&mut self, idx: usize) {
        self.current = idx;
        self.scenes[idx].enter();
    }

    /// Takes the pending frame capture of the current scene.
    pub fn take_capture(&mut self) -> Option<PathBuf> {
        self.scenes.get_mut(self.current).and_then(Scene::take_capture)
    }

    pub fn format_state(&self) -> String {
        self.current_scene().map_or_else(String::new, |scene| {
            format!(
                "{} ({}/{})   [space] next   [left] back   [Q] quit",
                scene.label(),
                self.current + 1,
                self.scenes.len(),
            )
        })
    }
}

impl Updatable for Model {
    fn update(&mut self, update: &Update) {
        if let Some(scene) = self.scenes.get_mut(self.current) {
            scene.advance(update.since_last);
        }
    }
}

impl Drawable for Model {
    fn draw(&self, draw: &Draw, frame: &Frame) {
        let Some(scene) = self.current_scene()
        else {
            return;
        };

        scene.viewer().plot().draw(draw, frame);

        let r = frame.rect();
        let state_msg = self.format_state();

        draw.text(&state_msg)
            .color(Rgba::new(0.5, 0.5, 0.5, 1.0))
            .xy(vec2(0.0, r.bottom() + 12.0))
            .wh(vec2(r.w(), 20.0))
            .justify(text::Justify::Center)
            .font_size(12);
    }
}

/// The app's exit callback: waits for outstanding frame captures, then runs
/// the validation demonstration on the first basic curve.
pub fn exit(app: &App, mut model: Model) {
    if let Some(window) = app.window(model.window) {
        if let Err(e) = window.await_capture_frame_jobs() {
            tracing::warn!("frame captures did not finish: {e:?}");
        }
    }

    let basic = model.scenes.iter_mut().find_map(|scene| {
        match scene.viewer_mut().curve_mut() {
            CurveKind::Basic(curve) => Some(curve),
            CurveKind::Modulated(_) => None,
        }
    });

    if let Some(curve) = basic {
        if let Err(e) = demo::validation_demo(curve) {
            tracing::error!("validation demo failed: {e}");
        }
    }
}
