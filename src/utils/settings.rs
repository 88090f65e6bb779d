use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use crate::constants::*;

const MAGIC_HEADER: &[u8; 4] = b"BWST";
const VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct GameSettings {
    pub world: WorldSettings,
    pub player: PlayerSettings,
    #[serde(default)]
    pub debug: DebugSettings,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WorldSettings {
    pub seed: u32,
    /// Chunks kept loaded on each side of the observer's chunk.
    pub render_distance: i32,
    pub enemy_count: usize,
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            render_distance: RENDER_DISTANCE,
            enemy_count: ENEMY_COUNT,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PlayerSettings {
    pub walk_speed: f32,
    pub sprint_speed: f32,
    pub acceleration: f32,
    /// Horizontal velocity multiplier applied once per frame.
    pub damping: f32,
    pub jump_velocity: f32,
    pub gravity: f32,
    pub mouse_sensitivity: f32,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            walk_speed: PLAYER_BASE_SPEED,
            sprint_speed: PLAYER_SPRINT_SPEED,
            acceleration: PLAYER_ACCELERATION,
            damping: PLAYER_DAMPING,
            jump_velocity: PLAYER_JUMP_VELOCITY,
            gravity: GRAVITY,
            mouse_sensitivity: 0.002,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DebugSettings {
    pub log_chunk_events: bool,
    /// Frames between status lines of the headless runner. 0 disables them.
    pub report_interval: u32,
}

impl Default for DebugSettings {
    fn default() -> Self {
        Self {
            log_chunk_events: false,
            report_interval: 60,
        }
    }
}

pub fn default_settings_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "blockworld")
        .map(|dirs| dirs.config_dir().join("settings.bin"))
}

pub fn save_settings<P: AsRef<Path>>(path: P, settings: &GameSettings) -> Result<(), String> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| format!("Cannot create settings directory: {}", e))?;
    }

    let file = File::create(path).map_err(|e| format!("Cannot create settings file: {}", e))?;
    let mut writer = BufWriter::new(file);
    writer.write_all(MAGIC_HEADER).map_err(|e| e.to_string())?;
    writer
        .write_all(&VERSION.to_le_bytes())
        .map_err(|e| e.to_string())?;

    let data = bincode::serialize(settings).map_err(|e| format!("Serialization failed: {}", e))?;
    writer.write_all(&data).map_err(|e| e.to_string())?;
    writer.flush().map_err(|e| e.to_string())?;

    tracing::info!("Saved settings to {}", path.display());
    Ok(())
}

pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<GameSettings, String> {
    let file = File::open(path).map_err(|e| format!("Cannot open settings file: {}", e))?;
    let mut reader = BufReader::new(file);

    let mut magic = [0u8; 4];
    reader.read_exact(&mut magic).map_err(|e| e.to_string())?;
    if &magic != MAGIC_HEADER {
        return Err("Not a settings file".to_string());
    }

    let mut version_bytes = [0u8; 4];
    reader
        .read_exact(&mut version_bytes)
        .map_err(|e| e.to_string())?;
    let version = u32::from_le_bytes(version_bytes);
    if version != VERSION {
        return Err(format!("Unsupported settings version: {}", version));
    }

    let mut data = Vec::new();
    reader.read_to_end(&mut data).map_err(|e| e.to_string())?;
    bincode::deserialize(&data).map_err(|e| format!("Deserialization failed: {}", e))
}

/// Settings from `path`, or defaults when the file is missing or unreadable.
pub fn load_or_default<P: AsRef<Path>>(path: P) -> GameSettings {
    let path = path.as_ref();
    if !path.exists() {
        return GameSettings::default();
    }
    match load_settings(path) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Ignoring settings at {}: {}", path.display(), e);
            GameSettings::default()
        }
    }
}
