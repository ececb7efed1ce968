//! Read-only view of entity state for a renderer

use glam::Vec2;

use crate::sim::{Body, Color, EntityId, EntityKind, Session};

/// Shape to draw for an entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderShape {
    Rect { size: Vec2 },
    /// The game draws the ball as its bounding square
    Ball { radius: f32 },
}

/// One drawable entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderItem {
    pub id: EntityId,
    pub kind: EntityKind,
    /// Top-left corner
    pub pos: Vec2,
    pub shape: RenderShape,
    /// `None` means the default white used for paddle and ball
    pub color: Option<Color>,
    pub destroyed: bool,
}

impl RenderItem {
    /// Extent of the drawn rectangle
    pub fn size(&self) -> Vec2 {
        match self.shape {
            RenderShape::Rect { size } => size,
            RenderShape::Ball { radius } => Vec2::splat(radius * 2.0),
        }
    }
}

/// Every entity in creation order, destroyed blocks included and flagged
pub fn extract(session: &Session) -> Vec<RenderItem> {
    session
        .store()
        .iter()
        .map(|(id, entity)| {
            let (shape, color, destroyed) = match &entity.body {
                Body::Paddle(paddle) => (RenderShape::Rect { size: paddle.size() }, None, false),
                Body::Ball(ball) => (
                    RenderShape::Ball {
                        radius: ball.radius(),
                    },
                    None,
                    false,
                ),
                Body::Block(block) => (
                    RenderShape::Rect { size: block.size() },
                    Some(block.color()),
                    block.is_destroyed(),
                ),
            };
            RenderItem {
                id,
                kind: entity.kind(),
                pos: entity.pos,
                shape,
                color,
                destroyed,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::initialize_session;

    #[test]
    fn test_extract_covers_all_entities() {
        let mut session = initialize_session(800.0, 600.0).unwrap();
        let first_block = session
            .store()
            .iter_kind(EntityKind::Block)
            .map(|(id, _)| id)
            .next()
            .unwrap();
        session.store_mut().block_mut(first_block).unwrap().destroy();

        let items = extract(&session);
        assert_eq!(items.len(), 52);

        let ball = items.iter().find(|i| i.kind == EntityKind::Ball).unwrap();
        assert_eq!(ball.size(), Vec2::splat(20.0));
        assert_eq!(ball.color, None);

        let block = items.iter().find(|i| i.id == first_block).unwrap();
        assert!(block.destroyed);
        assert_eq!(block.color, Some(Color::rgb(255, 0, 0)));
        assert_eq!(items.iter().filter(|i| i.destroyed).count(), 1);
    }
}
