//! Collision response against platforms, coins and the goal
//!
//! Runs once per tick after integration. Platforms are resolved one at a
//! time in array order and their pushes accumulate; there is no search for
//! a single best contact.

use super::geometry::{Contact, overlaps, resolve_penetration};
use super::state::{GameEvent, GameState, Platform, Player};

/// Push the player out of every platform and re-derive `grounded`
pub fn resolve_platforms(player: &mut Player, platforms: &[Platform]) {
    player.grounded = false;

    for platform in platforms {
        let mut bounds = player.bounds();
        let contact = resolve_penetration(&mut bounds, &platform.rect);
        player.pos = bounds.pos();

        match contact {
            Contact::Left | Contact::Right => player.vel.x = 0.0,
            Contact::Bottom => {
                player.grounded = true;
                player.jumping = false;
            }
            Contact::Top => player.vel.y = -player.vel.y,
            Contact::None => {}
        }
    }

    // Standing on something wins over a same-tick head bonk
    if player.grounded {
        player.vel.y = 0.0;
    }
}

/// Full collision pass: platforms, then coin pickups, then the goal
pub fn resolve_collisions(state: &mut GameState, events: &mut Vec<GameEvent>) {
    resolve_platforms(&mut state.player, &state.platforms);

    let bounds = state.player.bounds();

    for (index, coin) in state.coins.iter_mut().enumerate() {
        if !coin.collected && overlaps(&bounds, &coin.rect) {
            coin.collected = true;
            state.score += state.tuning.coin_score;
            log::debug!("Coin {} collected, score {}", index, state.score);
            events.push(GameEvent::CoinCollected {
                index,
                center: coin.rect.center(),
            });
        }
    }

    if overlaps(&bounds, &state.goal.rect) && state.complete_level() {
        events.push(GameEvent::GoalReached {
            center: state.goal.rect.center(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::geometry::Rect;
    use glam::Vec2;

    fn platform(x: f32, y: f32, w: f32, h: f32) -> Platform {
        Platform {
            rect: Rect::new(x, y, w, h),
        }
    }

    #[test]
    fn test_landing_zeroes_vertical_velocity() {
        let mut player = Player::default();
        player.pos = Vec2::new(100.0, 302.0);
        player.vel = Vec2::new(0.0, 6.0);
        player.jumping = true;

        resolve_platforms(&mut player, &[platform(0.0, 350.0, 800.0, 50.0)]);

        assert!(player.grounded);
        assert!(!player.jumping);
        assert_eq!(player.vel.y, 0.0);
        assert_eq!(player.pos.y, 300.0);
    }

    #[test]
    fn test_head_bonk_inverts_vertical_velocity() {
        let mut player = Player::default();
        // Head 2px into the underside of a 20px platform
        player.pos = Vec2::new(240.0, 268.0);
        player.vel = Vec2::new(0.0, -7.5);

        resolve_platforms(&mut player, &[platform(200.0, 250.0, 100.0, 20.0)]);

        assert!(!player.grounded);
        assert_eq!(player.vel.y, 7.5);
        assert_eq!(player.pos.y, 270.0);
    }

    #[test]
    fn test_side_contact_stops_horizontal_motion() {
        let mut player = Player::default();
        player.pos = Vec2::new(182.0, 240.0);
        player.vel = Vec2::new(3.0, 0.0);

        resolve_platforms(&mut player, &[platform(200.0, 250.0, 100.0, 20.0)]);

        assert_eq!(player.vel.x, 0.0);
        assert_eq!(player.pos.x, 180.0);
    }

    #[test]
    fn test_grounded_overrides_bonk_in_same_pass() {
        // Squeezed between a floor and a low ceiling
        let mut player = Player::default();
        player.pos = Vec2::new(100.0, 101.0);
        player.vel = Vec2::new(0.0, -4.0);

        let floor = platform(0.0, 150.0, 400.0, 20.0);
        let ceiling = platform(0.0, 80.0, 400.0, 22.0);
        resolve_platforms(&mut player, &[floor, ceiling]);

        assert!(player.grounded);
        assert_eq!(player.vel.y, 0.0);
    }

    #[test]
    fn test_airborne_clears_grounded() {
        let mut player = Player::default();
        player.grounded = true;
        player.pos = Vec2::new(100.0, 100.0);

        resolve_platforms(&mut player, &[platform(0.0, 350.0, 800.0, 50.0)]);
        assert!(!player.grounded);
    }

    #[test]
    fn test_coin_scores_once() {
        let mut state = GameState::new(1);
        state.player.pos = Vec2::new(345.0, 300.0);
        let mut events = Vec::new();

        resolve_collisions(&mut state, &mut events);
        resolve_collisions(&mut state, &mut events);

        assert_eq!(state.score, 10);
        assert!(state.coins[3].collected);
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], GameEvent::CoinCollected { index: 3, .. }));
    }

    #[test]
    fn test_goal_completes_level_once() {
        let mut state = GameState::new(1);
        state.player.pos = Vec2::new(705.0, 300.0);
        let mut events = Vec::new();

        resolve_collisions(&mut state, &mut events);
        resolve_collisions(&mut state, &mut events);

        assert!(state.goal_reached());
        assert!(!state.is_running());
        assert_eq!(state.score, 50);
        assert_eq!(
            events,
            vec![GameEvent::GoalReached {
                center: Vec2::new(715.0, 325.0)
            }]
        );
    }
}
