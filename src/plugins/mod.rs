pub mod core;
pub mod day_night;
pub mod debug_ui;
pub mod graphics;
pub mod input;
pub mod screen;
pub mod weather;
