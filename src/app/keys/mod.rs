use super::*;
use nannou::prelude::*;

pub fn key_pressed(app: &App, model: &mut Model, key: Key) {
    match key {
        Key::Space | Key::Right => model.next_scene(),
        Key::Left => model.previous_scene(),
        Key::Q => app.quit(),

        _ => {}
    }
}
