//! Session state and core simulation types
//!
//! Room loading, respawn, and the live beam set live here; per-tick
//! integration is in `tick`, `physics`, and `hazards`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::level::{Room, Tile};
use crate::tile_center;

/// The player's continuous state. Half extents are fixed
/// (`consts::PLAYER_HALF_X/Y`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// AABB center in world pixels
    pub pos: Vec2,
    pub vel: Vec2,
    /// True only when the last vertical pass ended on a qualifying contact
    pub grounded: bool,
    /// +1.0 pulls toward +y, -1.0 toward -y
    pub gravity_dir: f32,
    /// Early-jump grace remaining (seconds)
    pub jump_buffer: f32,
    /// Post-ledge grace remaining (seconds)
    pub coyote: f32,
    pub pulse_cooldown: f32,
    /// Cosmetic landing squash timer; the simulation never reads it
    pub squash: f32,
    /// Respawns in the current room (manual resets included)
    pub deaths: u32,
}

impl Player {
    pub(crate) fn new(spawn: (usize, usize)) -> Self {
        Self {
            pos: tile_center(spawn.0, spawn.1),
            vel: Vec2::ZERO,
            grounded: false,
            gravity_dir: 1.0,
            jump_buffer: 0.0,
            coyote: 0.0,
            pulse_cooldown: 0.0,
            squash: 0.0,
            deaths: 0,
        }
    }

    /// Decay every timer toward zero, never below it.
    pub(crate) fn decay_timers(&mut self, dt: f32) {
        self.jump_buffer = (self.jump_buffer - dt).max(0.0);
        self.coyote = (self.coyote - dt).max(0.0);
        self.pulse_cooldown = (self.pulse_cooldown - dt).max(0.0);
        self.squash = (self.squash - dt).max(0.0);
    }
}

/// A live oscillating hazard extracted from a beam seed tile at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beam {
    /// Tile coordinate of the origin node
    pub node: (usize, usize),
    /// Offset axis: true oscillates in x, false in y
    pub horizontal: bool,
    /// Radians, unbounded; advanced every tick and shifted by pulses
    pub phase: f32,
}

/// One running game: the room sequence, the live working room, the beam
/// set, and the player. Owns all mutable simulation state; [`crate::sim::step`]
/// drives it.
#[derive(Debug, Clone)]
pub struct Session {
    pub(crate) rooms: Vec<Room>,
    pub(crate) room_index: usize,
    /// Working copy of the current room; beam seed cells blanked at load
    pub(crate) active: Room,
    pub(crate) beams: Vec<Beam>,
    pub(crate) player: Player,
    /// Simulation-time accumulator (seconds); advances with every step and
    /// never resets, so hazard animation is replayable without a wall clock
    pub(crate) time: f32,
    /// Value of `time` at the last room load
    pub(crate) room_started: f32,
    /// Session RNG; seeds beam phases at load time
    pub(crate) rng: Pcg32,
}

impl Session {
    /// Start a session on the first room.
    ///
    /// # Panics
    /// Panics if `rooms` is empty.
    pub fn new(rooms: Vec<Room>, seed: u64) -> Self {
        assert!(!rooms.is_empty(), "a session needs at least one room");
        let mut session = Self {
            active: rooms[0].clone(),
            player: Player::new(rooms[0].spawn),
            rooms,
            room_index: 0,
            beams: Vec::new(),
            time: 0.0,
            room_started: 0.0,
            rng: Pcg32::seed_from_u64(seed),
        };
        session.load_room(0);
        session
    }

    /// Install `rooms[index % len]`: rebuild the working grid and beam set
    /// wholesale and put the player at spawn with default gravity, a cold
    /// pulse, and a zero death count.
    pub fn load_room(&mut self, index: usize) {
        self.room_index = index % self.rooms.len();
        self.active = self.rooms[self.room_index].clone();

        // Beam seeds become live beams in grid scan order; the cells they
        // occupied are walkable afterwards.
        self.beams.clear();
        for y in 0..self.active.rows.len() {
            for x in 0..self.active.rows[y].len() {
                if self.active.rows[y][x] == Tile::BeamSeed {
                    let phase = self.rng.random::<f32>() * std::f32::consts::TAU;
                    self.beams.push(Beam {
                        node: (x, y),
                        horizontal: true,
                        phase,
                    });
                    self.active.rows[y][x] = Tile::Empty;
                }
            }
        }

        let spawn = self.active.spawn;
        self.player.pos = tile_center(spawn.0, spawn.1);
        self.player.vel = Vec2::ZERO;
        self.player.grounded = false;
        self.player.gravity_dir = 1.0;
        self.player.jump_buffer = 0.0;
        self.player.coyote = 0.0;
        self.player.pulse_cooldown = 0.0;
        self.player.squash = 0.0;
        self.player.deaths = 0;
        self.room_started = self.time;

        log::info!(
            "loaded room {} \"{}\" ({} beams)",
            self.room_index,
            self.active.name,
            self.beams.len()
        );
    }

    /// Put the player back at spawn without reloading. Gravity direction,
    /// pulse cooldown, and the beam set all carry over; only a full
    /// `load_room` resets them.
    pub(crate) fn respawn(&mut self) {
        self.player.deaths += 1;
        let spawn = self.active.spawn;
        self.player.pos = tile_center(spawn.0, spawn.1);
        self.player.vel = Vec2::ZERO;
        self.player.grounded = false;
        log::info!("death {} in \"{}\"", self.player.deaths, self.active.name);
    }

    /// The live working room (beam seeds already blanked).
    pub fn room(&self) -> &Room {
        &self.active
    }

    pub fn room_index(&self) -> usize {
        self.room_index
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn beams(&self) -> &[Beam] {
        &self.beams
    }

    pub fn deaths(&self) -> u32 {
        self.player.deaths
    }

    /// Simulation time since the session started (seconds).
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Simulation time spent in the current room (seconds).
    pub fn room_elapsed(&self) -> f32 {
        self.time - self.room_started
    }
}
