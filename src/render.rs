//! Render step: turns game state into draw calls on a host-provided sink.

use crate::game::Game;
use crate::geometry::Rect;

/// Fill colors the core asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    White,
}

/// Drawing capabilities the host provides.
pub trait RenderSink {
    fn fill_rect(&mut self, rect: Rect, shade: Shade);
    fn debug_print(&mut self, text: &str);
}

/// Draw the score, the bird, then each pipe's top and bottom in sequence order.
pub fn draw_game<S>(game: &Game<S>, sink: &mut impl RenderSink) {
    sink.debug_print(&format!("Score: {}", game.score));
    sink.fill_rect(game.bird.rect, Shade::White);
    for pipe in &game.pipes {
        sink.fill_rect(pipe.top, Shade::White);
        sink.fill_rect(pipe.bottom, Shade::White);
    }
}
