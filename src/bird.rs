//! The player-controlled bird: gravity, jump impulse, and screen containment.

use crate::config::GameConfig;
use crate::geometry::Rect;

/// Result of checking the bird against the screen's top and bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Containment {
    /// Bird is fully inside the play area.
    Inside,
    /// Bird hit the ceiling and was clamped. Not terminal.
    Ceiling,
    /// Bird's bottom edge reached the floor. Terminal.
    Floor,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    pub rect: Rect,
    /// Vertical velocity per frame (positive = downward).
    pub velocity: f32,
}

impl Bird {
    /// A bird at its start position with zero velocity.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            rect: Rect::new(
                config.bird_x,
                config.bird_start_y(),
                config.bird_size,
                config.bird_size,
            ),
            velocity: 0.0,
        }
    }

    /// One frame of gravity: accelerate, cap the fall speed, move.
    pub fn apply_physics(&mut self, config: &GameConfig) {
        self.velocity += config.gravity;
        if self.velocity > config.max_fall_speed {
            self.velocity = config.max_fall_speed;
        }
        self.rect.y += self.velocity;
    }

    /// Overwrite velocity with the jump impulse while the key is held.
    pub fn handle_input(&mut self, jump_held: bool, config: &GameConfig) {
        if jump_held {
            self.velocity = config.jump_impulse;
        }
    }

    /// Clamp at the ceiling; report floor contact so the caller can reset.
    pub fn contain(&mut self, config: &GameConfig) -> Containment {
        let mut result = Containment::Inside;
        if self.rect.y <= 0.0 {
            self.rect.y = 0.0;
            self.velocity = 0.0;
            result = Containment::Ceiling;
        }
        if self.rect.bottom() >= config.screen_height {
            result = Containment::Floor;
        }
        result
    }
}
