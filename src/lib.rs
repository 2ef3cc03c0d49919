//! Flappy - a side-scrolling arcade game for the terminal.
//!
//! The simulation core (`game`, `bird`, `pipe`) is host-agnostic: it reads
//! keys through [`input::InputSource`], draws through [`render::RenderSink`],
//! and draws randomness from [`rng::UniformSource`].

pub mod bird;
pub mod build_info;
pub mod config;
pub mod game;
pub mod geometry;
pub mod input;
pub mod pipe;
pub mod render;
pub mod rng;
pub mod ui;

pub use config::{AppConfig, ConfigError, GameConfig, WindowConfig};
pub use game::{FrameReport, Game, ResetCause};
pub use input::{InputSource, Key, KeyState};
pub use rng::{RandomSource, UniformSource};
