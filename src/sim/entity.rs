//! Entity records: paddle, ball and blocks
//!
//! Positions are top-left anchored. Extents are fixed at creation and only
//! exposed through getters.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;

/// Stable handle into an [`EntityStore`](super::EntityStore)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub(crate) u32);

impl EntityId {
    /// Creation-order index
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Entity discriminant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Paddle,
    Ball,
    Block,
}

/// RGBA display color (rendering only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "Color::opaque")]
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    fn opaque() -> u8 {
        255
    }

    /// Normalized float components for GPU upload
    pub fn to_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    size: Vec2,
}

impl Paddle {
    pub(crate) fn new(size: Vec2) -> Self {
        Self { size }
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Unit-scale direction; multiplied by the ball speed multiplier each frame
    pub vel: Vec2,
    radius: f32,
}

impl Ball {
    pub(crate) fn new(vel: Vec2, radius: f32) -> Self {
        Self { vel, radius }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Side length of the ball's bounding square
    pub fn diameter(&self) -> f32 {
        self.radius * 2.0
    }

    /// Reflect vertically with escalation
    pub fn bounce_y(&mut self, escalation: f32) {
        self.vel.y = -self.vel.y * escalation;
    }

    /// Reflect horizontally with escalation
    pub fn bounce_x(&mut self, escalation: f32) {
        self.vel.x = -self.vel.x * escalation;
    }
}

/// A destructible block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    size: Vec2,
    color: Color,
    destroyed: bool,
}

impl Block {
    pub(crate) fn new(size: Vec2, color: Color) -> Self {
        Self {
            size,
            color,
            destroyed: false,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Mark destroyed. There is no way back.
    pub fn destroy(&mut self) {
        self.destroyed = true;
    }
}

/// Kind-specific payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Body {
    Paddle(Paddle),
    Ball(Ball),
    Block(Block),
}

/// A game object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Top-left corner
    pub pos: Vec2,
    pub body: Body,
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self.body {
            Body::Paddle(_) => EntityKind::Paddle,
            Body::Ball(_) => EntityKind::Ball,
            Body::Block(_) => EntityKind::Block,
        }
    }

    /// Width/height of the entity's bounding box (the ball's square for balls)
    pub fn size(&self) -> Vec2 {
        match &self.body {
            Body::Paddle(paddle) => paddle.size(),
            Body::Ball(ball) => Vec2::splat(ball.diameter()),
            Body::Block(block) => block.size(),
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size())
    }

    pub fn as_ball(&self) -> Option<&Ball> {
        match &self.body {
            Body::Ball(ball) => Some(ball),
            _ => None,
        }
    }

    pub fn as_block(&self) -> Option<&Block> {
        match &self.body {
            Body::Block(block) => Some(block),
            _ => None,
        }
    }

    pub fn as_block_mut(&mut self) -> Option<&mut Block> {
        match &mut self.body {
            Body::Block(block) => Some(block),
            _ => None,
        }
    }

    pub fn as_paddle(&self) -> Option<&Paddle> {
        match &self.body {
            Body::Paddle(paddle) => Some(paddle),
            _ => None,
        }
    }

    /// True for blocks that have been destroyed; always false otherwise
    pub fn is_destroyed(&self) -> bool {
        self.as_block().is_some_and(Block::is_destroyed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounce_escalates() {
        let mut ball = Ball::new(Vec2::new(-0.2, 0.4), 10.0);
        ball.bounce_x(1.05);
        assert!((ball.vel.x - 0.21).abs() < 1e-6);
        ball.bounce_y(1.05);
        assert!((ball.vel.y + 0.42).abs() < 1e-6);
    }

    #[test]
    fn test_entity_bounds() {
        let ball = Entity {
            pos: Vec2::new(10.0, 20.0),
            body: Body::Ball(Ball::new(Vec2::ZERO, 10.0)),
        };
        assert_eq!(ball.kind(), EntityKind::Ball);
        assert_eq!(ball.bounds().max, Vec2::new(30.0, 40.0));
        assert!(!ball.is_destroyed());

        let mut block = Entity {
            pos: Vec2::ZERO,
            body: Body::Block(Block::new(Vec2::new(75.0, 25.0), Color::WHITE)),
        };
        assert_eq!(block.size(), Vec2::new(75.0, 25.0));
        block.as_block_mut().unwrap().destroy();
        assert!(block.is_destroyed());
    }

    #[test]
    fn test_color_to_f32() {
        assert_eq!(Color::rgb(255, 0, 0).to_f32(), [1.0, 0.0, 0.0, 1.0]);
    }
}
