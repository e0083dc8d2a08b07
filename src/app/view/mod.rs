//! The view callback, i.e. "draw loop".

use super::*;
use nannou::color::Srgb;
use nannou::prelude::*;

const BG_COLOR: Srgb<u8> = WHITE;
const TRACE_COLOR: Srgb<u8> = STEELBLUE;
const GRID_COLOR: Srgb<u8> = GAINSBORO;
const AXIS_COLOR: Srgb<u8> = GRAY;
const TEXT_COLOR: Srgb<u8> = BLACK;

/// The app's view callback (AKA "draw loop").
pub fn view(app: &App, model: &Model, frame: Frame) {
    frame.clear(BG_COLOR);
    let frame = &frame;
    let draw = &app.draw();

    model.draw(draw, frame);

    _ = draw.to_frame(app, frame);
}

impl Drawable for Plot {
    fn draw(&self, draw: &Draw, frame: &Frame) {
        let size = self.viewport.size as f32;
        let half = size / 2.0;
        let title_h = TITLE_HEIGHT as f32;

        // the viewport sits below the title band
        let centre = frame.rect().xy() - vec2(0.0, title_h / 2.0);
        let to_screen = |x: f64, y: f64| {
            let (sx, sy) = self.to_screen(x, y);
            centre + vec2(sx as f32, sy as f32)
        };

        let lim = self.viewport.axis_limit;

        for tick in self.grid_ticks() {
            let col = if eps_eq(tick, 0.0) { AXIS_COLOR } else { GRID_COLOR };

            draw.line()
                .start(to_screen(tick, -lim))
                .end(to_screen(tick, lim))
                .weight(1.0)
                .color(col);
            draw.line()
                .start(to_screen(-lim, tick))
                .end(to_screen(lim, tick))
                .weight(1.0)
                .color(col);
        }

        draw.rect()
            .xy(centre)
            .wh(Vec2::splat(size))
            .no_fill()
            .stroke_color(AXIS_COLOR)
            .stroke_weight(1.0);

        if !self.trace.is_empty() {
            draw.polyline()
                .weight(self.viewport.trace_weight as f32)
                .points(self.trace.iter().map(|(x, y)| to_screen(x, y)))
                .color(TRACE_COLOR);
        }

        draw.text(&self.title)
            .xy(centre + vec2(0.0, half + title_h / 2.0))
            .wh(vec2(size, title_h))
            .justify(text::Justify::Center)
            .font_size(16)
            .color(TEXT_COLOR);
    }
}
