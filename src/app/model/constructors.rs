//! App constructors.

use super::*;

/// Builds the app window.
///
/// # Panics
///
/// Panics if the window cannot be created.
pub fn build_window(app: &App, width: u32, height: u32) -> Id {
    app.new_window()
        .size(width, height)
        .resizable(false)
        .key_pressed(keys::key_pressed)
        .view(view)
        .title("Lissajous")
        .build()
        .expect("failed to build app window!")
}
