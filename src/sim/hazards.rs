//! Beam oscillation, spike arming, and the phase pulse.
//!
//! Everything here is a pure function of session time, tile coordinates,
//! and the beam set; there are no per-hazard timers to persist.

use glam::Vec2;

use crate::consts::*;
use crate::level::{Room, Tile};

use super::state::Beam;

/// Advance every beam's phase by one tick.
pub(crate) fn advance_beams(beams: &mut [Beam], dt: f32) {
    for beam in beams {
        beam.phase += dt * BEAM_PHASE_RATE;
    }
}

/// A beam's effective hazard center: its node center displaced along the
/// orientation axis by the shared oscillation.
pub fn beam_center(beam: &Beam, time: f32) -> Vec2 {
    let base = crate::tile_center(beam.node.0, beam.node.1);
    let offset = BEAM_AMPLITUDE * (time / BEAM_PERIOD + beam.phase).sin();
    if beam.horizontal {
        base + Vec2::new(offset, 0.0)
    } else {
        base + Vec2::new(0.0, offset)
    }
}

/// Whether any beam's effective center is within the kill radius of `pos`.
pub(crate) fn beam_hits(beams: &[Beam], pos: Vec2, time: f32) -> bool {
    beams
        .iter()
        .any(|beam| beam_center(beam, time).distance_squared(pos) < BEAM_KILL_RADIUS * BEAM_KILL_RADIUS)
}

/// Whether a blinking spike at the given tile is currently armed: a shared
/// sinusoid with a per-tile phase offset, pure in `(time, tx, ty)`.
pub fn blink_armed(time: f32, tx: i32, ty: i32) -> bool {
    (time * BLINK_RATE + tx as f32 * BLINK_PHASE_X + ty as f32 * BLINK_PHASE_Y).sin() > 0.0
}

/// Lethality of the single tile under the player's center.
pub(crate) fn spike_hits(room: &Room, pos: Vec2, time: f32) -> bool {
    let (tx, ty) = crate::world_to_tile(pos);
    match room.tile_at(tx, ty) {
        Tile::Spike => true,
        Tile::BlinkSpike => blink_armed(time, tx, ty),
        _ => false,
    }
}

/// Flip the orientation and quarter-advance the phase of every beam whose
/// node lies within the pulse radius of `pos`. Discrete and instantaneous;
/// beams outside the radius are untouched. Returns how many beams flipped.
pub(crate) fn pulse_beams(beams: &mut [Beam], pos: Vec2) -> usize {
    let mut flipped = 0;
    for beam in beams.iter_mut() {
        let node = crate::tile_center(beam.node.0, beam.node.1);
        if node.distance_squared(pos) <= PULSE_RADIUS * PULSE_RADIUS {
            beam.horizontal = !beam.horizontal;
            beam.phase += std::f32::consts::FRAC_PI_2;
            flipped += 1;
        }
    }
    flipped
}
