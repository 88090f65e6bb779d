use clap::Parser;
use std::f32::consts::FRAC_PI_2;
use std::path::PathBuf;

use blockworld::game::crafting::find_recipe;
use blockworld::utils::settings::{self as settings_file, GameSettings};
use blockworld::{BlockType, ChunkEvent, Game, GameEvent, InputState};

/// Headless voxel world simulation
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// World seed (overrides the settings file)
    #[arg(long)]
    seed: Option<u32>,

    /// Chunks loaded on each side of the player
    #[arg(long)]
    render_distance: Option<i32>,

    /// Number of enemies to spawn
    #[arg(long)]
    enemies: Option<usize>,

    /// Frames to simulate
    #[arg(long, default_value_t = 600)]
    frames: u32,

    /// Seconds per frame
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// Settings file (defaults to the user config directory)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Write the effective settings back to the settings file
    #[arg(long, default_value_t = false)]
    save_settings: bool,
}

fn effective_settings(args: &Args) -> (GameSettings, Option<PathBuf>) {
    let path = args.settings.clone().or_else(settings_file::default_settings_path);
    let mut settings = match &path {
        Some(path) => settings_file::load_or_default(path),
        None => GameSettings::default(),
    };

    if let Some(seed) = args.seed {
        settings.world.seed = seed;
    }
    if let Some(distance) = args.render_distance {
        settings.world.render_distance = distance;
    }
    if let Some(enemies) = args.enemies {
        settings.world.enemy_count = enemies;
    }
    (settings, path)
}

/// Input for a frame of the scripted walk: forward the whole time, sprinting
/// in bursts and hopping every second.
fn scripted_input(frame: u32) -> InputState {
    InputState {
        forward: true,
        sprint: (frame / 120) % 2 == 1,
        jump: frame % 60 == 0,
        ..Default::default()
    }
}

fn log_chunk_events(events: &[ChunkEvent], verbose: bool) {
    if !verbose {
        return;
    }
    for event in events {
        match event {
            ChunkEvent::Loaded(pos) => tracing::debug!("chunk ({}, {}) loaded", pos.x, pos.z),
            ChunkEvent::Remeshed(pos) => tracing::debug!("chunk ({}, {}) remeshed", pos.x, pos.z),
            ChunkEvent::Unloaded(pos) => tracing::debug!("chunk ({}, {}) unloaded", pos.x, pos.z),
        }
    }
}

fn log_game_events(events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::BlockBroken { pos, block } => {
                tracing::info!("Broke {} at {}", block.name(), pos)
            }
            GameEvent::BlockPlaced { pos, block } => {
                tracing::info!("Placed {} at {}", block.name(), pos)
            }
            GameEvent::Crafted { output, count } => {
                tracing::info!("Crafted {} x{}", output.name(), count)
            }
            GameEvent::PlayerDied => tracing::warn!("Player died"),
        }
    }
}

/// Look down, dig out the block underfoot and fill the hole with stone.
fn interact(game: &mut Game) {
    let pitch = game.player().camera.pitch;
    game.player_mut().camera.set_pitch(-FRAC_PI_2);

    if let Some(block) = game.break_block() {
        tracing::debug!("Picked up {}", block.name());
    }
    game.inventory_mut().select(BlockType::Stone.index());
    if let Err(e) = game.place_selected() {
        tracing::info!("Placement skipped: {}", e);
    }
    if let Some(recipe) = find_recipe("Planks") {
        game.craft(recipe);
    }

    game.player_mut().camera.set_pitch(pitch);
}

pub fn run_game() {
    let args = Args::parse();
    let (settings, path) = effective_settings(&args);

    if args.save_settings {
        match &path {
            Some(path) => {
                if let Err(e) = settings_file::save_settings(path, &settings) {
                    tracing::error!("Failed to save settings: {}", e);
                }
            }
            None => tracing::warn!("No settings path available, not saving"),
        }
    }

    tracing::info!(
        "Simulating {} frames at {:.4}s (seed {}, render distance {})",
        args.frames,
        args.dt,
        settings.world.seed,
        settings.world.render_distance
    );

    let mut game = Game::new(&settings);
    let mut loaded_total = 0usize;
    let mut unloaded_total = 0usize;
    let report_interval = settings.debug.report_interval;

    for frame in 0..args.frames {
        let report = game.update(args.dt, &scripted_input(frame));

        let chunk_events = game.drain_chunk_events();
        log_chunk_events(&chunk_events, settings.debug.log_chunk_events);
        loaded_total += report.chunks_loaded;
        unloaded_total += report.chunks_unloaded;

        if frame == args.frames / 2 {
            interact(&mut game);
        }
        log_game_events(&game.drain_events());

        if report_interval > 0 && frame % report_interval == 0 {
            let pos = game.player().position();
            tracing::info!(
                "frame {:>5} | pos ({:.1}, {:.1}, {:.1}) | hp {:.2} | {:02}:00{} | target {}",
                frame,
                pos.x,
                pos.y,
                pos.z,
                report.health,
                report.sky.hour,
                if report.sky.is_night { " night" } else { "" },
                report
                    .target
                    .map_or("-".to_string(), |t| format!("{} at {}", t.block.name(), t.pos))
            );
        }

        if game.player().is_dead() {
            tracing::warn!("Stopping early at frame {}", frame);
            break;
        }
    }

    let world = game.world();
    let faces: usize = world
        .chunks()
        .filter_map(|chunk| chunk.mesh())
        .map(|mesh| mesh.face_count())
        .sum();
    tracing::info!(
        "Done: {} chunks resident ({} faces), {} loaded and {} unloaded while moving",
        world.chunk_count(),
        faces,
        loaded_total,
        unloaded_total
    );
}
