//! Per-axis integration and tile collision resolution
//!
//! Movement is resolved one axis at a time: apply the x displacement and
//! push out of any solid overlap, then the same for y. There is no swept
//! test; a body moving more than a tile per step can cross a thin wall.

use glam::Vec2;

use crate::consts::*;
use crate::level::Room;

use super::state::Player;
use super::tick::StepInput;

#[derive(Clone, Copy, PartialEq)]
enum Axis {
    X,
    Y,
}

/// Horizontal acceleration toward the held direction, or drag toward rest.
pub(crate) fn apply_run_input(player: &mut Player, input: &StepInput, dt: f32) {
    let dir = (input.right as i32 - input.left as i32) as f32;
    if dir != 0.0 {
        player.vel.x =
            (player.vel.x + dir * MOVE_ACCEL * dt).clamp(-MAX_RUN_SPEED, MAX_RUN_SPEED);
    } else {
        let drag_step = RUN_DRAG * dt;
        if player.vel.x.abs() <= drag_step {
            // snap to rest instead of oscillating around zero
            player.vel.x = 0.0;
        } else {
            player.vel.x -= drag_step * player.vel.x.signum();
        }
    }
}

/// Constant acceleration along the current gravity direction; no terminal
/// velocity.
pub(crate) fn apply_gravity(player: &mut Player, dt: f32) {
    player.vel.y += GRAVITY * player.gravity_dir * dt;
}

/// Consume a buffered jump when both grace windows are open. Both timers
/// zero on execution so one press yields one jump.
pub(crate) fn try_jump(player: &mut Player) {
    if player.jump_buffer > 0.0 && player.coyote > 0.0 {
        player.vel.y = -player.gravity_dir * JUMP_IMPULSE;
        player.jump_buffer = 0.0;
        player.coyote = 0.0;
        player.grounded = false;
    }
}

/// Move along x and push out of any solid tiles.
pub(crate) fn move_horizontal(player: &mut Player, room: &Room, dt: f32) {
    player.pos.x += player.vel.x * dt;
    resolve_axis(player, room, Axis::X);
}

/// Move along y; `grounded` is recomputed from scratch and only a contact
/// that stops downward-relative motion sets it.
pub(crate) fn move_vertical(player: &mut Player, room: &Room, dt: f32) {
    player.pos.y += player.vel.y * dt;
    player.grounded = false;
    resolve_axis(player, room, Axis::Y);
}

fn resolve_axis(player: &mut Player, room: &Room, axis: Axis) {
    let half = Vec2::new(PLAYER_HALF_X, PLAYER_HALF_Y);
    let (tx0, ty0) = crate::world_to_tile(player.pos - half);
    let (tx1, ty1) = crate::world_to_tile(player.pos + half);

    for ty in ty0..=ty1 {
        for tx in tx0..=tx1 {
            if !room.solid_at(tx, ty) {
                continue;
            }
            let tile_min = Vec2::new(tx as f32 * TILE_SIZE, ty as f32 * TILE_SIZE);
            let tile_max = tile_min + Vec2::splat(TILE_SIZE);

            // true overlap only; edge touching is not a collision, and the
            // player may already have been pushed clear by an earlier tile
            let min = player.pos - half;
            let max = player.pos + half;
            if max.x <= tile_min.x || min.x >= tile_max.x || max.y <= tile_min.y
                || min.y >= tile_max.y
            {
                continue;
            }

            match axis {
                Axis::X => {
                    if player.vel.x > 0.0 {
                        player.pos.x = tile_min.x - half.x;
                    } else if player.vel.x < 0.0 {
                        player.pos.x = tile_max.x + half.x;
                    } else {
                        let to_left = max.x - tile_min.x;
                        let to_right = tile_max.x - min.x;
                        player.pos.x += if to_left < to_right { -to_left } else { to_right };
                    }
                    player.vel.x = 0.0;
                }
                Axis::Y => {
                    // landing is relative to gravity: stopping motion that
                    // was headed "down" grants ground and coyote state
                    let landing = (player.gravity_dir > 0.0 && player.vel.y >= 0.0)
                        || (player.gravity_dir < 0.0 && player.vel.y <= 0.0);
                    if player.vel.y > 0.0 {
                        player.pos.y = tile_min.y - half.y;
                    } else if player.vel.y < 0.0 {
                        player.pos.y = tile_max.y + half.y;
                    } else {
                        let to_top = max.y - tile_min.y;
                        let to_bottom = tile_max.y - min.y;
                        player.pos.y += if to_top < to_bottom { -to_top } else { to_bottom };
                    }
                    player.vel.y = 0.0;
                    if landing {
                        player.grounded = true;
                        player.coyote = COYOTE_WINDOW;
                    }
                }
            }
        }
    }
}
