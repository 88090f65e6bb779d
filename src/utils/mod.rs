pub mod settings;

pub use settings::{DebugSettings, GameSettings, PlayerSettings, WorldSettings};
