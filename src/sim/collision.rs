//! Collision detection and response
//!
//! Everything is an axis-aligned box: the ball uses its bounding square.
//! Edges count as touching. Blocks are scanned in creation order with no
//! early exit, so a ball straddling two blocks flips `vy` twice in one frame.

use glam::Vec2;

use super::entity::EntityId;
use super::store::EntityStore;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Inclusive overlap test
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.max.x >= other.min.x
            && self.min.x <= other.max.x
            && self.max.y >= other.min.y
            && self.min.y <= other.max.y
    }
}

/// What the resolver did this frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionReport {
    pub paddle_hit: bool,
    /// Blocks destroyed this frame, in creation order
    pub destroyed: Vec<EntityId>,
}

impl CollisionReport {
    /// Number of `vy` reflections applied to the ball
    pub fn bounces(&self) -> usize {
        self.destroyed.len() + usize::from(self.paddle_hit)
    }
}

/// Resolve ball-vs-paddle and ball-vs-block overlaps
pub fn resolve_collisions(store: &mut EntityStore, escalation: f32) -> CollisionReport {
    let mut report = CollisionReport::default();

    let Some(ball_bounds) = store
        .ball_id()
        .and_then(|id| store.get(id))
        .map(|ball| ball.bounds())
    else {
        return report;
    };

    if let Some((pos, paddle)) = store.paddle() {
        report.paddle_hit = ball_bounds.overlaps(&Aabb::from_pos_size(pos, paddle.size()));
    }

    for (id, pos, block) in store.blocks_mut() {
        if block.is_destroyed() {
            continue;
        }
        if ball_bounds.overlaps(&Aabb::from_pos_size(pos, block.size())) {
            block.destroy();
            report.destroyed.push(id);
        }
    }

    // Overlaps depend only on position, so reflections can be applied after the scan
    if let Some((_, ball)) = store.ball_mut() {
        for _ in 0..report.bounces() {
            ball.bounce_y(escalation);
        }
    }

    report
}
