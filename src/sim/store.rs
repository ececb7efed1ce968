//! Entity store
//!
//! Append-only arena. Handles are creation-order indices, so they stay valid
//! for the lifetime of the store no matter how many entities follow.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Ball, Block, Body, Color, Entity, EntityId, EntityKind, Paddle};
use crate::error::SimError;

/// Owns every entity of a session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityStore {
    entities: Vec<Entity>,
    paddle: Option<EntityId>,
    ball: Option<EntityId>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, entity: Entity) -> EntityId {
        let id = EntityId(self.entities.len() as u32);
        self.entities.push(entity);
        id
    }

    /// Create the paddle. Only one may exist.
    pub fn create_paddle(&mut self, pos: Vec2, size: Vec2) -> Result<EntityId, SimError> {
        if self.paddle.is_some() {
            return Err(SimError::DuplicateEntity(EntityKind::Paddle));
        }
        SimError::check_dimension("paddle width", size.x)?;
        SimError::check_dimension("paddle height", size.y)?;

        let id = self.push(Entity {
            pos,
            body: Body::Paddle(Paddle::new(size)),
        });
        self.paddle = Some(id);
        Ok(id)
    }

    /// Create the ball. Only one may exist.
    pub fn create_ball(&mut self, pos: Vec2, vel: Vec2, radius: f32) -> Result<EntityId, SimError> {
        if self.ball.is_some() {
            return Err(SimError::DuplicateEntity(EntityKind::Ball));
        }
        SimError::check_dimension("ball radius", radius)?;

        let id = self.push(Entity {
            pos,
            body: Body::Ball(Ball::new(vel, radius)),
        });
        self.ball = Some(id);
        Ok(id)
    }

    pub fn create_block(&mut self, pos: Vec2, size: Vec2, color: Color) -> Result<EntityId, SimError> {
        SimError::check_dimension("block width", size.x)?;
        SimError::check_dimension("block height", size.y)?;

        Ok(self.push(Entity {
            pos,
            body: Body::Block(Block::new(size, color)),
        }))
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id.index())
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(id.index())
    }

    pub fn paddle_id(&self) -> Option<EntityId> {
        self.paddle
    }

    pub fn ball_id(&self) -> Option<EntityId> {
        self.ball
    }

    /// Paddle position and payload
    pub fn paddle(&self) -> Option<(Vec2, &Paddle)> {
        let entity = self.get(self.paddle?)?;
        entity.as_paddle().map(|paddle| (entity.pos, paddle))
    }

    /// Ball position and payload
    pub fn ball(&self) -> Option<(Vec2, &Ball)> {
        let entity = self.get(self.ball?)?;
        entity.as_ball().map(|ball| (entity.pos, ball))
    }

    /// Mutable ball position and payload
    pub fn ball_mut(&mut self) -> Option<(&mut Vec2, &mut Ball)> {
        let entity = self.entities.get_mut(self.ball?.index())?;
        match &mut entity.body {
            Body::Ball(ball) => Some((&mut entity.pos, ball)),
            _ => None,
        }
    }

    /// Mutable paddle position and payload
    pub fn paddle_mut(&mut self) -> Option<(&mut Vec2, &Paddle)> {
        let entity = self.entities.get_mut(self.paddle?.index())?;
        match &entity.body {
            Body::Paddle(paddle) => Some((&mut entity.pos, paddle)),
            _ => None,
        }
    }

    /// Mutable access to a block by handle
    pub fn block_mut(&mut self, id: EntityId) -> Option<&mut Block> {
        self.get_mut(id)?.as_block_mut()
    }

    /// All entities in creation order
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.entities
            .iter()
            .enumerate()
            .map(|(i, e)| (EntityId(i as u32), e))
    }

    /// Entities of one kind in creation order
    pub fn iter_kind(&self, kind: EntityKind) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.iter().filter(move |(_, e)| e.kind() == kind)
    }

    /// Blocks that have not been destroyed, in creation order
    pub fn live_blocks(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.iter_kind(EntityKind::Block)
            .filter(|(_, e)| !e.is_destroyed())
    }

    /// Mutable iteration over all blocks in creation order
    pub(crate) fn blocks_mut(&mut self) -> impl Iterator<Item = (EntityId, Vec2, &mut Block)> {
        self.entities
            .iter_mut()
            .enumerate()
            .filter_map(|(i, e)| {
                let pos = e.pos;
                e.as_block_mut().map(|block| (EntityId(i as u32), pos, block))
            })
    }

    pub fn block_count(&self) -> usize {
        self.iter_kind(EntityKind::Block).count()
    }

    pub fn live_block_count(&self) -> usize {
        self.live_blocks().count()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
