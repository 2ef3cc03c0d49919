//! Pipe obstacles and the generator that spawns them.

use crate::config::GameConfig;
use crate::geometry::Rect;
use crate::rng::UniformSource;

/// A top and bottom obstacle framing a vertical gap.
///
/// Both rectangles share `x` and `w`; `top.h + gap + bottom.h == screen_height`.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    pub top: Rect,
    pub bottom: Rect,
}

impl Pipe {
    /// Build a pipe at `x` from the top obstacle height and gap size.
    pub fn new(x: f32, top_height: f32, gap: f32, config: &GameConfig) -> Self {
        let bottom_height = config.screen_height - top_height - gap;
        Self {
            top: Rect::new(x, 0.0, config.pipe_width, top_height),
            bottom: Rect::new(
                x,
                config.screen_height - bottom_height,
                config.pipe_width,
                bottom_height,
            ),
        }
    }

    /// Generate a pipe at `x` with a random gap size and position.
    pub fn generate<S: UniformSource + ?Sized>(
        x: f32,
        config: &GameConfig,
        source: &mut S,
    ) -> Self {
        let gap = source.uniform(config.gap_min, config.gap_max);
        let top_height = source.uniform(0.0, config.screen_height - gap);
        Self::new(x, top_height, gap, config)
    }

    pub fn x(&self) -> f32 {
        self.top.x
    }

    /// Trailing (right) edge, used for scoring and culling.
    pub fn right(&self) -> f32 {
        self.top.right()
    }

    /// Vertical size of the opening.
    pub fn gap(&self) -> f32 {
        self.bottom.y - self.top.bottom()
    }

    /// Scroll both halves left as a rigid pair.
    pub fn slide(&mut self, speed: f32) {
        self.top.x -= speed;
        self.bottom.x -= speed;
    }

    /// Whether `rect` overlaps the pipe horizontally and leaves the gap vertically.
    pub fn hits(&self, rect: &Rect) -> bool {
        rect.overlaps_horizontally(&self.top)
            && (rect.y < self.top.bottom() || rect.bottom() > self.bottom.y)
    }
}
