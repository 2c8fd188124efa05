//! Macroquad-backed render surface
//!
//! The surface tracks a logical size in pixels (the playfield grid)
//! and draws actors as text glyphs. `flush` presents the frame and is
//! where the loop yields to the windowing backend.

use macroquad::prelude::*;

use super::VideoService;
use crate::casting::{self, Actor};

/// Point size for actor glyphs and the banner
const FONT_SIZE: f32 = 24.0;

pub struct ScreenVideo {
    width: i32,
    height: i32,
    open: bool,
}

impl ScreenVideo {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            open: false,
        }
    }
}

fn screen_color(color: casting::Color) -> Color {
    Color::from_rgba(color.r, color.g, color.b, 255)
}

impl VideoService for ScreenVideo {
    fn open(&mut self) {
        self.open = true;
    }

    fn close(&mut self) {
        self.open = false;
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn clear(&mut self) {
        clear_background(BLACK);
    }

    fn draw_actors(&mut self, actors: &[&Actor]) {
        for actor in actors {
            // Text baseline sits below the logical position, so the
            // glyph occupies the actor's cell
            draw_text(
                &actor.text,
                actor.position.x as f32,
                actor.position.y as f32 + FONT_SIZE * 0.75,
                FONT_SIZE,
                screen_color(actor.color),
            );
        }
    }

    async fn flush(&mut self) {
        // ESC is the polite quit; closing the OS window ends the
        // process before the loop ever polls us again
        if is_key_pressed(KeyCode::Escape) {
            self.open = false;
        }
        next_frame().await;
    }
}
