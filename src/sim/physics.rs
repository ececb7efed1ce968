//! Position integration and field boundaries
//!
//! The ball integrates first and is then checked against the *new* position.
//! There is no sub-stepping and no position correction, so a fast ball can
//! sit past a wall for a frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Ball, Paddle};
use super::store::EntityStore;
use crate::settings::SimConfig;

/// Key state snapshot for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
}

impl InputState {
    pub const NONE: InputState = InputState {
        left: false,
        right: false,
    };
}

/// Boundary contacts found after moving the ball
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoundaryHits {
    pub side_wall: bool,
    pub ceiling: bool,
    /// Ball reached the floor line (loss)
    pub floor: bool,
}

/// Move the paddle by input and clamp it inside the field
pub fn update_paddle(pos: &mut Vec2, paddle: &Paddle, input: &InputState, dt: f32, config: &SimConfig) {
    if input.left {
        pos.x -= config.paddle_speed * dt;
    }
    if input.right {
        pos.x += config.paddle_speed * dt;
    }
    let max_x = (config.field_width - paddle.size().x).max(0.0);
    pos.x = pos.x.clamp(0.0, max_x);
}

/// Move the ball and reflect it off the side walls and ceiling
pub fn update_ball(pos: &mut Vec2, ball: &mut Ball, dt: f32, config: &SimConfig) -> BoundaryHits {
    *pos += ball.vel * config.ball_speed_multiplier * dt;

    let diameter = ball.diameter();
    let mut hits = BoundaryHits::default();

    if pos.x <= 0.0 || pos.x >= config.field_width - diameter {
        ball.bounce_x(config.escalation);
        hits.side_wall = true;
    }
    if pos.y <= 0.0 {
        ball.bounce_y(config.escalation);
        hits.ceiling = true;
    }
    if pos.y >= config.field_height - diameter {
        hits.floor = true;
    }
    hits
}

/// Integrate paddle and ball for one frame
pub fn integrate(store: &mut EntityStore, input: &InputState, dt: f32, config: &SimConfig) -> BoundaryHits {
    if let Some((pos, paddle)) = store.paddle_mut() {
        update_paddle(pos, paddle, input, dt, config);
    }
    match store.ball_mut() {
        Some((pos, ball)) => update_ball(pos, ball, dt, config),
        None => BoundaryHits::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn paddle() -> Paddle {
        Paddle::new(Vec2::new(100.0, 20.0))
    }

    #[test]
    fn test_paddle_moves_with_input() {
        let config = SimConfig::default();
        let mut pos = Vec2::new(350.0, 570.0);

        update_paddle(&mut pos, &paddle(), &InputState { left: true, right: false }, 0.1, &config);
        assert!((pos.x - 310.0).abs() < 1e-4);

        update_paddle(&mut pos, &paddle(), &InputState { left: false, right: true }, 0.05, &config);
        assert!((pos.x - 330.0).abs() < 1e-4);

        // Both held cancel out
        update_paddle(&mut pos, &paddle(), &InputState { left: true, right: true }, 0.1, &config);
        assert!((pos.x - 330.0).abs() < 1e-4);
        assert_eq!(pos.y, 570.0);
    }

    #[test]
    fn test_paddle_clamps_at_edges() {
        let config = SimConfig::default();
        let mut pos = Vec2::new(10.0, 570.0);
        update_paddle(&mut pos, &paddle(), &InputState { left: true, right: false }, 1.0, &config);
        assert_eq!(pos.x, 0.0);

        update_paddle(&mut pos, &paddle(), &InputState { left: false, right: true }, 10.0, &config);
        assert_eq!(pos.x, 700.0);
    }

    #[test]
    fn test_left_wall_escalation() {
        let config = SimConfig::default();
        let mut pos = Vec2::new(2.0, 300.0);
        let mut ball = Ball::new(Vec2::new(-0.2, 0.0), 10.0);

        let hits = update_ball(&mut pos, &mut ball, 0.1, &config);
        assert!(hits.side_wall);
        assert!((ball.vel.x - 0.21).abs() < 1e-6);
        // No position correction
        assert!(pos.x < 0.0);
    }

    #[test]
    fn test_right_wall_and_ceiling() {
        let config = SimConfig::default();
        let mut pos = Vec2::new(778.0, 3.0);
        let mut ball = Ball::new(Vec2::new(0.2, -0.2), 10.0);

        let hits = update_ball(&mut pos, &mut ball, 0.1, &config);
        assert!(hits.side_wall && hits.ceiling && !hits.floor);
        assert!((ball.vel.x + 0.21).abs() < 1e-6);
        assert!((ball.vel.y - 0.21).abs() < 1e-6);
    }

    #[test]
    fn test_floor_is_not_a_bounce() {
        let config = SimConfig::default();
        let mut pos = Vec2::new(400.0, 575.0);
        let mut ball = Ball::new(Vec2::new(0.0, 0.2), 10.0);

        let hits = update_ball(&mut pos, &mut ball, 0.1, &config);
        assert!(hits.floor);
        assert_eq!(ball.vel.y, 0.2);
    }

    proptest! {
        #[test]
        fn prop_paddle_always_in_field(
            start_x in -2000.0f32..2000.0,
            dt in 0.0f32..50.0,
            left in any::<bool>(),
            right in any::<bool>(),
        ) {
            let config = SimConfig::default();
            let mut pos = Vec2::new(start_x, 570.0);
            update_paddle(&mut pos, &paddle(), &InputState { left, right }, dt, &config);
            prop_assert!(pos.x >= 0.0);
            prop_assert!(pos.x <= config.field_width - 100.0);
        }
    }
}
