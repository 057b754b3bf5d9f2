mod config;
mod game;
mod router;

pub use config::GameConfig;
pub use game::Game;
