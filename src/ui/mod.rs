//! Terminal presentation. Only the binary uses this.

pub mod flappy_scene;

pub use flappy_scene::render_game;
