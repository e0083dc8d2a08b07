//! All app-related state and logic.

use crate::prelude::*;
use nannou::prelude::{App, Draw, Frame, Update};
use nannou::LoopMode::RefreshSync;
use std::sync::Mutex;

pub mod animation;
pub mod demo;
pub mod export;
pub mod keys;
mod model;
pub mod scene;
pub mod update;
pub mod view;
pub mod viewer;

pub use animation::{Animation, Frames, Phases};
pub use export::{ExportError, FrameExporter};
pub use model::Model;
pub use scene::{Playback, Scene};
use update::update;
pub use viewer::{Plot, Viewer, ViewportConfig};

/// Scenes handed to the next app run. Nannou builds the model from a plain
/// function, so they are parked here until then.
static PENDING_SCENES: Mutex<Vec<Scene>> = Mutex::new(Vec::new());

/// Runs the demo: both example curves shown statically, then animated and
/// exported.
///
/// # Errors
///
/// Returns [`CurveError`] if an example curve is invalid.
pub fn run_app() -> Result<(), CurveError> {
    run_scenes(scene::demo_scenes()?);
    Ok(())
}

/// Runs the app via Nannou, showing `scenes` in order.
///
/// Blocks in the window's event loop.
pub fn run_scenes(scenes: Vec<Scene>) {
    match PENDING_SCENES.lock() {
        Ok(mut guard) => *guard = scenes,
        Err(poisoned) => *poisoned.into_inner() = scenes,
    }

    nannou::app(model::Model::build)
        .loop_mode(RefreshSync)
        .update(update)
        .exit(model::exit)
        .run();
}

/// Takes the scenes parked by [`run_scenes`].
fn take_pending_scenes() -> Vec<Scene> {
    match PENDING_SCENES.lock() {
        Ok(mut guard) => std::mem::take(&mut *guard),
        Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
    }
}

pub trait Updatable {
    fn update(&mut self, update: &Update);
}

pub trait Drawable {
    fn draw(&self, draw: &Draw, frame: &Frame);
}
