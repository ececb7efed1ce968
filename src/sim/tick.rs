//! Per-frame simulation step
//!
//! integrate -> resolve collisions -> check end conditions

use serde::{Deserialize, Serialize};

use super::collision::resolve_collisions;
use super::physics::{InputState, integrate};
use super::state::{EndCause, Session, SessionPhase, SimEvent};

/// Outcome of one step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepResult {
    Running,
    Ended(EndCause),
}

impl StepResult {
    pub fn is_running(&self) -> bool {
        matches!(self, StepResult::Running)
    }
}

impl From<SessionPhase> for StepResult {
    fn from(phase: SessionPhase) -> Self {
        match phase {
            SessionPhase::Running => StepResult::Running,
            SessionPhase::Ended(cause) => StepResult::Ended(cause),
        }
    }
}

/// Advance the session by one frame of `dt` seconds
pub fn step(session: &mut Session, dt: f32, input: &InputState) -> StepResult {
    // Ended is terminal
    if let SessionPhase::Ended(cause) = session.phase {
        return StepResult::Ended(cause);
    }

    // A stalled or broken clock must not corrupt positions
    if !dt.is_finite() || dt < 0.0 {
        log::warn!("Ignoring step with invalid dt {}", dt);
        return StepResult::Running;
    }

    session.frame += 1;
    // Events describe the latest frame only
    session.events.clear();

    let hits = integrate(&mut session.store, input, dt, &session.config);
    if hits.side_wall {
        session.events.push(SimEvent::WallBounce);
    }
    if hits.ceiling {
        session.events.push(SimEvent::CeilingBounce);
    }

    // The floor ends the game, but this frame's contacts still resolve
    let report = resolve_collisions(&mut session.store, session.config.escalation);
    if report.paddle_hit {
        session.events.push(SimEvent::PaddleHit);
    }
    for id in &report.destroyed {
        log::debug!("Block {} destroyed on frame {}", id.index(), session.frame);
        session.events.push(SimEvent::BlockDestroyed(*id));
    }

    if hits.floor {
        return end(session, EndCause::LossByFloor);
    }
    if session.store.live_block_count() == 0 {
        return end(session, EndCause::WinByClearance);
    }

    StepResult::Running
}

fn end(session: &mut Session, cause: EndCause) -> StepResult {
    session.phase = SessionPhase::Ended(cause);
    session.events.push(SimEvent::Ended(cause));
    match cause {
        EndCause::LossByFloor => log::info!(
            "Game over on frame {}: ball reached the floor ({} blocks left)",
            session.frame,
            session.remaining_blocks()
        ),
        EndCause::WinByClearance => {
            log::info!("Field cleared on frame {}", session.frame)
        }
    }
    StepResult::Ended(cause)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{EntityKind, initialize_session};
    use glam::Vec2;

    #[test]
    fn test_step_moves_ball() {
        let mut session = initialize_session(800.0, 600.0).unwrap();
        let result = step(&mut session, 0.1, &InputState::NONE);
        assert_eq!(result, StepResult::Running);

        let (pos, _) = session.store().ball().unwrap();
        assert!((pos.x - 398.0).abs() < 1e-3);
        assert!((pos.y - 298.0).abs() < 1e-3);
        assert_eq!(session.frame(), 1);
    }

    #[test]
    fn test_invalid_dt_is_noop() {
        let mut session = initialize_session(800.0, 600.0).unwrap();
        let before = session.store().ball().map(|(pos, _)| pos);

        for dt in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY, -0.016] {
            assert_eq!(step(&mut session, dt, &InputState::NONE), StepResult::Running);
        }

        assert_eq!(session.store().ball().map(|(pos, _)| pos), before);
        assert_eq!(session.frame(), 0);
    }

    #[test]
    fn test_floor_ends_session() {
        let mut session = initialize_session(800.0, 600.0).unwrap();
        if let Some((pos, _)) = session.store_mut().ball_mut() {
            *pos = Vec2::new(200.0, 580.0 + 0.01);
        }

        let result = step(&mut session, 0.016, &InputState::NONE);
        assert_eq!(result, StepResult::Ended(EndCause::LossByFloor));
        assert_eq!(session.phase(), SessionPhase::Ended(EndCause::LossByFloor));
        assert!(session.drain_events().contains(&SimEvent::Ended(EndCause::LossByFloor)));
    }

    #[test]
    fn test_ended_is_terminal() {
        let mut session = initialize_session(800.0, 600.0).unwrap();
        if let Some((pos, _)) = session.store_mut().ball_mut() {
            *pos = Vec2::new(200.0, 590.0);
        }
        step(&mut session, 0.016, &InputState::NONE);
        let frozen = session.store().ball().map(|(pos, ball)| (pos, ball.vel));
        let frame = session.frame();

        for _ in 0..5 {
            let result = step(&mut session, 0.016, &InputState { left: true, right: false });
            assert_eq!(result, StepResult::Ended(EndCause::LossByFloor));
        }
        assert_eq!(session.store().ball().map(|(pos, ball)| (pos, ball.vel)), frozen);
        assert_eq!(session.frame(), frame);
    }

    #[test]
    fn test_clearing_all_blocks_wins() {
        let mut session = initialize_session(800.0, 600.0).unwrap();
        let ids: Vec<_> = session
            .store()
            .iter_kind(EntityKind::Block)
            .map(|(id, _)| id)
            .collect();
        for id in ids {
            session.store_mut().block_mut(id).unwrap().destroy();
        }

        let result = step(&mut session, 0.016, &InputState::NONE);
        assert_eq!(result, StepResult::Ended(EndCause::WinByClearance));
    }

    #[test]
    fn test_events_recorded() {
        let mut session = initialize_session(800.0, 600.0).unwrap();
        // Park the ball inside the first block
        if let Some((pos, ball)) = session.store_mut().ball_mut() {
            *pos = Vec2::new(20.0, 5.0);
            ball.vel = Vec2::ZERO;
        }

        assert!(step(&mut session, 0.016, &InputState::NONE).is_running());
        let events = session.drain_events();
        assert!(events.iter().any(|e| matches!(e, SimEvent::BlockDestroyed(_))));
        assert!(session.drain_events().is_empty());
        assert_eq!(session.remaining_blocks(), 49);
    }

    #[test]
    fn test_undrained_events_hold_latest_frame() {
        let mut session = initialize_session(800.0, 600.0).unwrap();

        for _ in 0..1000 {
            // Pin the ball against the left wall so every frame bounces
            if let Some((pos, ball)) = session.store_mut().ball_mut() {
                *pos = Vec2::new(1.0, 300.0);
                ball.vel = Vec2::new(-0.2, 0.0);
            }
            assert!(step(&mut session, 0.016, &InputState::NONE).is_running());
        }

        assert_eq!(session.frame(), 1000);
        assert_eq!(session.drain_events(), vec![SimEvent::WallBounce]);
    }

    #[test]
    fn test_floor_frame_still_resolves_block_hits() {
        let mut session = initialize_session(800.0, 600.0).unwrap();
        // Short field: the floor line sits inside the block grid
        session.config.field_height = 60.0;
        if let Some((pos, ball)) = session.store_mut().ball_mut() {
            *pos = Vec2::new(20.0, 39.0);
            ball.vel = Vec2::new(0.0, 0.2);
        }

        let result = step(&mut session, 0.016, &InputState::NONE);
        assert_eq!(result, StepResult::Ended(EndCause::LossByFloor));

        let events = session.drain_events();
        assert!(events.iter().any(|e| matches!(e, SimEvent::BlockDestroyed(_))));
        assert_eq!(events.last(), Some(&SimEvent::Ended(EndCause::LossByFloor)));
        assert!(session.remaining_blocks() < 50);
    }

    #[test]
    fn test_step_result_from_phase() {
        assert_eq!(StepResult::from(SessionPhase::Running), StepResult::Running);
        assert_eq!(
            StepResult::from(SessionPhase::Ended(EndCause::WinByClearance)),
            StepResult::Ended(EndCause::WinByClearance)
        );
    }
}
