//! Fixed timestep simulation step
//!
//! Advances one session tick in a fixed order: timers, discrete inputs,
//! jump consumption, horizontal then vertical movement, beam phases, then
//! hazard and goal evaluation. Every mutation happens synchronously inside
//! `step`; the caller drives it once per frame with a clamped `dt`.

use serde::{Deserialize, Serialize};

use crate::consts::*;

use super::state::Session;
use super::{hazards, physics};

/// Input snapshot for a single tick, computed once by the front end.
/// `left`/`right` are held signals; everything else is an edge that was
/// pressed since the previous step.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct StepInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    /// Reverse the gravity direction
    pub flip: bool,
    /// Fire the phase pulse (cooldown gated)
    pub pulse: bool,
    /// Respawn at the current room's spawn
    pub reset: bool,
    /// Advance to the next room
    pub skip: bool,
}

/// Advance the session by one step of at most `consts::MAX_DT` seconds.
///
/// Total: no input or room shape can make it fail; out-of-range tile
/// lookups read as non-solid and non-lethal.
pub fn step(session: &mut Session, input: &StepInput, dt: f32) {
    let dt = dt.clamp(0.0, MAX_DT);
    session.time += dt;
    session.player.decay_timers(dt);

    // Discrete inputs before integration.
    if input.flip {
        session.player.gravity_dir = -session.player.gravity_dir;
    }
    if input.pulse && session.player.pulse_cooldown <= 0.0 {
        session.player.pulse_cooldown = PULSE_COOLDOWN;
        let flipped = hazards::pulse_beams(&mut session.beams, session.player.pos);
        log::info!("phase pulse hit {flipped} beams");
    }
    if input.jump {
        session.player.jump_buffer = JUMP_BUFFER_WINDOW;
    }
    if input.skip {
        session.load_room(session.room_index + 1);
    } else if input.reset {
        session.respawn();
    }

    physics::try_jump(&mut session.player);
    physics::apply_run_input(&mut session.player, input, dt);
    physics::apply_gravity(&mut session.player, dt);

    let was_grounded = session.player.grounded;
    physics::move_horizontal(&mut session.player, &session.active, dt);
    physics::move_vertical(&mut session.player, &session.active, dt);
    if session.player.grounded && !was_grounded {
        session.player.squash = SQUASH_TIME;
    }

    hazards::advance_beams(&mut session.beams, dt);

    // Interactions last; a respawn or load resolves inside this same step.
    if hazards::spike_hits(&session.active, session.player.pos, session.time)
        || hazards::beam_hits(&session.beams, session.player.pos, session.time)
    {
        session.respawn();
        return;
    }

    let (tx, ty) = crate::world_to_tile(session.player.pos);
    if tx >= 0 && ty >= 0 && (tx as usize, ty as usize) == session.active.goal {
        log::info!(
            "room {} \"{}\" cleared in {:.2}s",
            session.room_index,
            session.active.name,
            session.room_elapsed()
        );
        session.load_room(session.room_index + 1);
    }
}
