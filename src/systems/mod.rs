pub mod day_night;
pub mod screen;
pub mod weather;

pub use day_night::*;
pub use screen::*;
pub use weather::*;
