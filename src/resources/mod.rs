pub mod cli;
pub mod config;
pub mod game_clock;
pub mod screen;
pub mod tone;
pub mod weather_rng;

pub use cli::*;
pub use config::*;
pub use game_clock::*;
pub use screen::*;
pub use tone::*;
pub use weather_rng::*;
