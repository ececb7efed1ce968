//! Session state
//!
//! A session owns the entity store for one game, from setup to the end
//! condition. There are no globals: the driver holds the `Session` and passes
//! it to [`step`](super::step) every frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::EntityId;
use super::store::EntityStore;
use crate::consts::PADDLE_FLOOR_OFFSET;
use crate::error::SimError;
use crate::settings::SimConfig;

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndCause {
    /// Ball reached the bottom boundary
    LossByFloor,
    /// Every block was destroyed
    WinByClearance,
}

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    Running,
    /// Terminal; no further integration or collision processing
    Ended(EndCause),
}

/// Something that happened during a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimEvent {
    WallBounce,
    CeilingBounce,
    PaddleHit,
    BlockDestroyed(EntityId),
    Ended(EndCause),
}

/// One game from setup to end condition
/// Serialize-only: a session is built through `with_config` or `from_store`
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub(crate) config: SimConfig,
    pub(crate) store: EntityStore,
    pub(crate) phase: SessionPhase,
    /// Steps that ran integration
    pub(crate) frame: u64,
    /// Events from the latest frame that ran
    #[serde(skip)]
    pub(crate) events: Vec<SimEvent>,
}

impl Session {
    /// Set up paddle, ball and block grid from a tuning
    pub fn with_config(config: SimConfig) -> Result<Self, SimError> {
        config.validate()?;

        let mut store = EntityStore::new();
        let w = config.field_width;
        let h = config.field_height;

        store.create_paddle(
            Vec2::new(
                w / 2.0 - config.paddle_width / 2.0,
                h - PADDLE_FLOOR_OFFSET,
            ),
            Vec2::new(config.paddle_width, config.paddle_height),
        )?;
        store.create_ball(
            Vec2::new(w / 2.0 - config.ball_radius, h / 2.0 - config.ball_radius),
            config.ball_velocity,
            config.ball_radius,
        )?;
        spawn_block_grid(&mut store, &config)?;

        log::info!(
            "Session started: field {}x{}, {} blocks",
            w,
            h,
            store.block_count()
        );

        Ok(Self {
            config,
            store,
            phase: SessionPhase::Running,
            frame: 0,
            events: Vec::new(),
        })
    }

    /// Build a session around an existing store (custom layouts, tests).
    /// The store must already contain the paddle and the ball.
    pub fn from_store(config: SimConfig, store: EntityStore) -> Result<Self, SimError> {
        config.validate()?;
        if store.paddle_id().is_none() {
            return Err(SimError::InvalidConfig("store has no paddle".into()));
        }
        if store.ball_id().is_none() {
            return Err(SimError::InvalidConfig("store has no ball".into()));
        }
        Ok(Self {
            config,
            store,
            phase: SessionPhase::Running,
            frame: 0,
            events: Vec::new(),
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    /// Direct store access (debug tools, scripted scenarios)
    pub fn store_mut(&mut self) -> &mut EntityStore {
        &mut self.store
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == SessionPhase::Running
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Blocks still standing
    pub fn remaining_blocks(&self) -> usize {
        self.store.live_block_count()
    }

    /// Take the latest frame's events
    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }
}

/// Session on a field of the given size with default tuning
pub fn initialize_session(field_width: f32, field_height: f32) -> Result<Session, SimError> {
    Session::with_config(SimConfig::for_field(field_width, field_height))
}

/// Lay out the block grid row by row; the row index picks the palette color
fn spawn_block_grid(store: &mut EntityStore, config: &SimConfig) -> Result<(), SimError> {
    let cell_w = config.cell_width();
    let cell_h = config.cell_height;
    let size = Vec2::new(cell_w - config.block_gap, cell_h - config.block_gap);

    for row in 0..config.grid_rows {
        let color = config.palette[row as usize % config.palette.len()];
        for col in 0..config.grid_cols {
            let pos = Vec2::new(col as f32 * cell_w, row as f32 * cell_h);
            store.create_block(pos, size, color)?;
        }
    }
    Ok(())
}
