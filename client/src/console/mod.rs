mod input;
mod render;
mod runner;

pub use input::InputReader;
pub use runner::run_game;
