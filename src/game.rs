//! The per-frame simulation loop.
//!
//! Frame order is fixed: physics, input, containment, pipe scroll and
//! scoring, collision, culling, spawning. A terminal condition resets the
//! whole state inline and the rest of the frame runs against the fresh state.

use crate::bird::{Bird, Containment};
use crate::config::GameConfig;
use crate::input::{InputSource, Key};
use crate::pipe::Pipe;
use crate::rng::UniformSource;

/// Why the game was reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetCause {
    Floor,
    Collision,
}

/// What happened during one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Points awarded this frame and still held; zero if a collision wiped them.
    pub scored: u32,
    /// Set when a terminal condition reset the game this frame.
    pub reset: Option<ResetCause>,
}

/// Complete game state, exclusively owned by the host's frame loop.
#[derive(Debug, Clone)]
pub struct Game<S> {
    pub config: GameConfig,
    pub bird: Bird,
    /// Spawn order, which is also left-to-right order.
    pub pipes: Vec<Pipe>,
    pub score: u32,
    /// X of the most recent spawn; advances one pipe width per spawn.
    pub last_spawn_x: f32,
    /// Frames since the last reset.
    pub frame: u64,
    source: S,
}

impl<S: UniformSource> Game<S> {
    pub fn new(config: GameConfig, source: S) -> Self {
        Self {
            bird: Bird::new(&config),
            pipes: Vec::new(),
            score: 0,
            last_spawn_x: config.screen_width,
            frame: 0,
            config,
            source,
        }
    }

    /// Advance one frame.
    pub fn update(&mut self, input: &impl InputSource) -> FrameReport {
        let mut report = FrameReport::default();
        self.frame += 1;

        self.bird.apply_physics(&self.config);
        self.bird
            .handle_input(input.is_key_down(Key::Jump), &self.config);
        if self.contain_bird() {
            report.reset = Some(ResetCause::Floor);
        }

        report.scored = self.slide_pipes();

        if self.bird_collides() {
            self.reset_after(ResetCause::Collision);
            report.scored = 0;
            report.reset = Some(ResetCause::Collision);
        }

        self.remove_off_screen_pipes();
        self.maybe_spawn_pipe();

        report
    }

    /// Keep the bird on screen. Returns true if floor contact reset the game.
    pub fn contain_bird(&mut self) -> bool {
        match self.bird.contain(&self.config) {
            Containment::Floor => {
                self.reset_after(ResetCause::Floor);
                true
            }
            Containment::Ceiling | Containment::Inside => false,
        }
    }

    /// Scroll every pipe and award a point for each trailing edge that
    /// crossed the bird's x this frame. Returns the points awarded.
    pub fn slide_pipes(&mut self) -> u32 {
        let speed = self.config.pipe_speed;
        let threshold = self.config.bird_x;
        let mut scored = 0;
        for pipe in &mut self.pipes {
            let before = pipe.right();
            pipe.slide(speed);
            if before > threshold && threshold >= pipe.right() {
                scored += 1;
            }
        }
        if scored > 0 {
            self.score += scored;
            log::debug!("scored {} (total {})", scored, self.score);
        }
        scored
    }

    /// True if the bird overlaps any pipe outside its gap.
    pub fn bird_collides(&self) -> bool {
        self.pipes.iter().any(|pipe| pipe.hits(&self.bird.rect))
    }

    /// Drop pipes whose trailing edge is at or left of the screen edge.
    pub fn remove_off_screen_pipes(&mut self) {
        self.pipes.retain(|pipe| pipe.right() > 0.0);
    }

    /// Spawn when there are no pipes or the newest one has scrolled far enough left.
    pub fn maybe_spawn_pipe(&mut self) -> bool {
        let spawn_line = self.config.screen_width - self.config.gap_between_pipes;
        let due = match self.pipes.last() {
            None => true,
            Some(newest) => newest.x() < spawn_line,
        };
        if due {
            self.add_pipe();
        }
        due
    }

    /// Append a random pipe one pipe width past the previous spawn point.
    pub fn add_pipe(&mut self) {
        self.last_spawn_x += self.config.pipe_width;
        let pipe = Pipe::generate(self.last_spawn_x, &self.config, &mut self.source);
        log::trace!(
            "spawned pipe at x={} top={} gap={}",
            pipe.x(),
            pipe.top.h,
            pipe.gap()
        );
        self.pipes.push(pipe);
    }

    /// Restore every field to its start-of-game value.
    pub fn reset(&mut self) {
        self.bird = Bird::new(&self.config);
        self.pipes.clear();
        self.score = 0;
        self.last_spawn_x = self.config.screen_width;
        self.frame = 0;
    }

    fn reset_after(&mut self, cause: ResetCause) {
        log::debug!(
            "reset after {:?} at frame {} (score {})",
            cause,
            self.frame,
            self.score
        );
        self.reset();
    }
}
