//! Gravflip - a gravity-flip tile platformer simulation core
//!
//! Core modules:
//! - `level`: room data model, text codec, seeded procedural generator
//! - `sim`: deterministic fixed-step simulation (physics, hazards, session)
//!
//! Rendering, audio, input wiring, and the frame driver belong to the
//! embedding front end. The front end calls [`sim::step`] once per tick with
//! a clamped `dt` and an input snapshot, then reads state back through the
//! [`sim::Session`] accessors.

pub mod level;
pub mod sim;

pub use level::{LevelFormatError, Room, Tile, encode_levels, generate_procedural, parse_levels};
pub use sim::{Beam, Player, Session, StepInput, step};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Tile edge length in world pixels
    pub const TILE_SIZE: f32 = 32.0;
    /// Largest timestep a single `step` call will integrate (seconds)
    pub const MAX_DT: f32 = 1.0 / 30.0;

    /// Player half extents (slightly narrower than a tile)
    pub const PLAYER_HALF_X: f32 = 12.0;
    pub const PLAYER_HALF_Y: f32 = 14.0;

    /// Horizontal run acceleration (px/s²)
    pub const MOVE_ACCEL: f32 = 1800.0;
    /// Horizontal speed cap (px/s)
    pub const MAX_RUN_SPEED: f32 = 210.0;
    /// Horizontal drag when no direction is held (px/s²)
    pub const RUN_DRAG: f32 = 1500.0;
    /// Gravity magnitude (px/s²); sign comes from `Player::gravity_dir`
    pub const GRAVITY: f32 = 1450.0;
    /// Vertical speed granted by a jump (px/s)
    pub const JUMP_IMPULSE: f32 = 430.0;

    /// Early-press grace window for jumps (seconds)
    pub const JUMP_BUFFER_WINDOW: f32 = 0.12;
    /// Walked-off-a-ledge grace window for jumps (seconds)
    pub const COYOTE_WINDOW: f32 = 0.10;

    /// Blink spike arming rate (radians/s of the shared sinusoid)
    pub const BLINK_RATE: f32 = 4.0;
    /// Per-tile arming phase offsets (radians per tile coordinate)
    pub const BLINK_PHASE_X: f32 = 0.9;
    pub const BLINK_PHASE_Y: f32 = 1.3;

    /// Beam phase advance rate (radians/s)
    pub const BEAM_PHASE_RATE: f32 = 2.2;
    /// Beam oscillation period divisor (seconds)
    pub const BEAM_PERIOD: f32 = 0.65;
    /// Beam swing from its node center (px)
    pub const BEAM_AMPLITUDE: f32 = 44.0;
    /// Lethal distance from the beam's effective center (px)
    pub const BEAM_KILL_RADIUS: f32 = 13.0;

    /// Phase pulse cooldown (seconds)
    pub const PULSE_COOLDOWN: f32 = 1.25;
    /// Phase pulse activation radius around the player (px)
    pub const PULSE_RADIUS: f32 = 120.0;

    /// Cosmetic landing squash duration (seconds)
    pub const SQUASH_TIME: f32 = 0.18;

    /// Procedural room dimensions (tiles, border included)
    pub const GEN_WIDTH: usize = 28;
    pub const GEN_HEIGHT: usize = 15;
}

/// Center of tile `(tx, ty)` in world pixels
#[inline]
pub fn tile_center(tx: usize, ty: usize) -> Vec2 {
    Vec2::new(
        tx as f32 * consts::TILE_SIZE + consts::TILE_SIZE / 2.0,
        ty as f32 * consts::TILE_SIZE + consts::TILE_SIZE / 2.0,
    )
}

/// Tile coordinate containing a world position (floor division; negative
/// for positions left of or above the grid)
#[inline]
pub fn world_to_tile(pos: Vec2) -> (i32, i32) {
    (
        (pos.x / consts::TILE_SIZE).floor() as i32,
        (pos.y / consts::TILE_SIZE).floor() as i32,
    )
}
