//! The update callback, for mutating state each frame. Not for drawing.

use super::*;
use nannou::prelude::*;

/// The app's update callback for updating state.
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.update(&update);

    if let Some(path) = model.take_capture() {
        match app.window(model.window_id()) {
            Some(window) => window.capture_frame(&path),
            None => tracing::warn!("no window to capture {}", path.display()),
        }
    }
}
