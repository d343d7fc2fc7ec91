//! Player input response and Euler integration
//!
//! All rates are per tick. There is no delta-time scaling; the clock in
//! `sim::clock` decides how many ticks to run.

use super::state::{Facing, GameEvent, Player};
use super::tick::TickInput;
use crate::consts::WORLD_WIDTH;
use crate::tuning::Tuning;

/// Turn toward the held direction (left wins when both are held)
///
/// Runs every tick, frozen or not, so the figure still turns on the
/// level-complete screen.
pub fn update_facing(player: &mut Player, input: &TickInput) {
    if input.move_left {
        player.facing = Facing::Left;
    } else if input.move_right {
        player.facing = Facing::Right;
    }
}

/// Apply held movement keys and the jump key
///
/// Horizontal input accelerates toward the speed cap instead of setting the
/// velocity outright. A jump only starts from the ground.
pub fn apply_input(player: &mut Player, input: &TickInput, tuning: &Tuning) -> Option<GameEvent> {
    if input.move_right && player.vel.x < tuning.max_speed {
        player.vel.x += tuning.acceleration;
    }

    if input.move_left && player.vel.x > -tuning.max_speed {
        player.vel.x -= tuning.acceleration;
    }

    if input.jump && !player.jumping && player.grounded {
        player.jumping = true;
        player.grounded = false;
        player.vel.y = tuning.jump_velocity;
        return Some(GameEvent::Jumped {
            feet: player.feet(),
        });
    }

    None
}

/// Friction, gravity, position update and horizontal world bounds
pub fn integrate(player: &mut Player, tuning: &Tuning) {
    player.vel.x *= tuning.friction;
    // Unconditional; landing is re-derived from collisions every tick
    player.vel.y += tuning.gravity;

    player.pos += player.vel;

    let max_x = WORLD_WIDTH - player.size.x;
    player.pos.x = player.pos.x.clamp(0.0, max_x);
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn held(right: bool, left: bool, jump: bool) -> TickInput {
        TickInput {
            move_right: right,
            move_left: left,
            jump,
            ..Default::default()
        }
    }

    fn grounded_player() -> Player {
        Player {
            grounded: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_jump_from_rest() {
        let tuning = Tuning::default();
        let mut player = grounded_player();

        let event = apply_input(&mut player, &held(false, false, true), &tuning);

        assert_eq!(player.vel.y, -12.0);
        assert!(player.jumping);
        assert!(!player.grounded);
        assert_eq!(
            event,
            Some(GameEvent::Jumped {
                feet: Vec2::new(110.0, 350.0)
            })
        );
    }

    #[test]
    fn test_no_jump_in_air() {
        let tuning = Tuning::default();
        let mut player = Player::default();
        player.vel.y = 3.0;

        assert!(apply_input(&mut player, &held(false, false, true), &tuning).is_none());
        assert_eq!(player.vel.y, 3.0);
        assert!(!player.jumping);
    }

    #[test]
    fn test_no_double_jump() {
        let tuning = Tuning::default();
        let mut player = grounded_player();
        player.jumping = true;

        assert!(apply_input(&mut player, &held(false, false, true), &tuning).is_none());
    }

    #[test]
    fn test_acceleration_is_incremental() {
        let tuning = Tuning::default();
        let mut player = Player::default();

        apply_input(&mut player, &held(true, false, false), &tuning);
        assert_eq!(player.vel.x, 1.0);

        apply_input(&mut player, &held(false, true, false), &tuning);
        assert_eq!(player.vel.x, 0.0);
    }

    #[test]
    fn test_facing_follows_held_direction() {
        let mut player = Player::default();

        update_facing(&mut player, &held(false, true, false));
        assert_eq!(player.facing, Facing::Left);

        // No direction held keeps the last facing
        update_facing(&mut player, &held(false, false, true));
        assert_eq!(player.facing, Facing::Left);

        update_facing(&mut player, &held(true, false, false));
        assert_eq!(player.facing, Facing::Right);

        update_facing(&mut player, &held(true, true, false));
        assert_eq!(player.facing, Facing::Left);
    }

    #[test]
    fn test_integrate_applies_friction_and_gravity() {
        let tuning = Tuning::default();
        let mut player = Player::default();
        player.vel = Vec2::new(5.0, 0.0);

        integrate(&mut player, &tuning);

        assert_eq!(player.vel, Vec2::new(4.0, 0.5));
        assert_eq!(player.pos, Vec2::new(104.0, 300.5));
    }

    #[test]
    fn test_integrate_clamps_to_world() {
        let tuning = Tuning::default();

        let mut player = Player::default();
        player.pos.x = 1.0;
        player.vel.x = -10.0;
        integrate(&mut player, &tuning);
        assert_eq!(player.pos.x, 0.0);

        let mut player = Player::default();
        player.pos.x = 778.0;
        player.vel.x = 10.0;
        integrate(&mut player, &tuning);
        assert_eq!(player.pos.x, 780.0);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn held_direction_never_exceeds_max_speed(ticks in 1usize..400, right in any::<bool>()) {
                let tuning = Tuning::default();
                let mut player = grounded_player();
                let input = held(right, !right, false);

                for _ in 0..ticks {
                    apply_input(&mut player, &input, &tuning);
                    integrate(&mut player, &tuning);
                    prop_assert!(player.vel.x.abs() <= tuning.max_speed);
                }
            }
        }
    }
}
