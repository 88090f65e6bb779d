//! Application module containing the headless runner
//!
//! Drives a `Game` through a scripted walk and logs what happens.

mod game;

pub use game::run_game;
