//! Simulation module
//!
//! All gameplay logic lives here. No rendering, clock or platform input:
//! - The driver supplies `dt` and an input snapshot every frame
//! - Blocks are processed in creation order (deterministic)
//! - Entities are never removed; handles stay valid

pub mod collision;
pub mod entity;
pub mod physics;
pub mod state;
pub mod store;
pub mod tick;

pub use collision::{Aabb, CollisionReport, resolve_collisions};
pub use entity::{Ball, Block, Body, Color, Entity, EntityId, EntityKind, Paddle};
pub use physics::{BoundaryHits, InputState, integrate, update_ball, update_paddle};
pub use state::{EndCause, Session, SessionPhase, SimEvent, initialize_session};
pub use store::EntityStore;
pub use tick::{StepResult, step};
