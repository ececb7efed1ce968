//! Simulation tuning
//!
//! Every field defaults to the matching constant in [`crate::consts`], so an
//! empty JSON object yields the classic 800x600 game.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SimError;
use crate::sim::Color;

/// Row colors for the block grid (red, orange, yellow, green, blue)
pub const DEFAULT_PALETTE: [Color; 5] = [
    Color::rgb(255, 0, 0),
    Color::rgb(255, 165, 0),
    Color::rgb(255, 255, 0),
    Color::rgb(0, 255, 0),
    Color::rgb(0, 0, 255),
];

/// Data-driven simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Units per second while a direction key is held
    pub paddle_speed: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Converts the unit-scale velocity into units per second
    pub ball_speed_multiplier: f32,
    /// Launch direction (unit-scale)
    pub ball_velocity: Vec2,
    /// Multiplier applied to the reflected component on every bounce
    pub escalation: f32,

    // === Block grid ===
    pub grid_rows: u32,
    pub grid_cols: u32,
    pub cell_height: f32,
    pub block_gap: f32,
    /// Row colors, cycled by row index
    pub palette: Vec<Color>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,

            ball_radius: BALL_RADIUS,
            ball_speed_multiplier: BALL_SPEED_MULTIPLIER,
            ball_velocity: Vec2::new(BALL_START_VELOCITY.0, BALL_START_VELOCITY.1),
            escalation: ESCALATION,

            grid_rows: GRID_ROWS,
            grid_cols: GRID_COLS,
            cell_height: CELL_HEIGHT,
            block_gap: BLOCK_GAP,
            palette: DEFAULT_PALETTE.to_vec(),
        }
    }
}

impl SimConfig {
    /// Default tuning for a field of the given size
    pub fn for_field(field_width: f32, field_height: f32) -> Self {
        Self {
            field_width,
            field_height,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Width of one grid cell in whole units (field width split across columns)
    pub fn cell_width(&self) -> f32 {
        (self.field_width / self.grid_cols as f32).floor()
    }

    /// Reject tunings the simulation cannot run with
    pub fn validate(&self) -> Result<(), SimError> {
        SimError::check_dimension("field width", self.field_width)?;
        SimError::check_dimension("field height", self.field_height)?;
        SimError::check_dimension("paddle width", self.paddle_width)?;
        SimError::check_dimension("paddle height", self.paddle_height)?;
        SimError::check_dimension("ball radius", self.ball_radius)?;
        SimError::check_dimension("cell height", self.cell_height)?;

        if self.paddle_width > self.field_width {
            return Err(SimError::InvalidConfig(format!(
                "paddle width {} exceeds field width {}",
                self.paddle_width, self.field_width
            )));
        }
        if self.ball_radius * 2.0 > self.field_width.min(self.field_height) {
            return Err(SimError::InvalidConfig(format!(
                "ball diameter {} does not fit the field",
                self.ball_radius * 2.0
            )));
        }
        if !(self.paddle_speed.is_finite() && self.paddle_speed >= 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "paddle speed {} must be finite and non-negative",
                self.paddle_speed
            )));
        }
        if !(self.ball_speed_multiplier.is_finite() && self.ball_speed_multiplier >= 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "ball speed multiplier {} must be finite and non-negative",
                self.ball_speed_multiplier
            )));
        }
        if !self.ball_velocity.is_finite() {
            return Err(SimError::InvalidConfig("ball velocity must be finite".into()));
        }
        if !(self.escalation.is_finite() && self.escalation > 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "escalation {} must be positive",
                self.escalation
            )));
        }
        if self.grid_rows == 0 || self.grid_cols == 0 {
            return Err(SimError::InvalidConfig(
                "block grid needs at least one row and one column".into(),
            ));
        }
        if self.palette.is_empty() {
            return Err(SimError::InvalidConfig("palette is empty".into()));
        }
        if !(self.block_gap.is_finite() && self.block_gap >= 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "block gap {} must be finite and non-negative",
                self.block_gap
            )));
        }
        if self.block_gap >= self.cell_width() || self.block_gap >= self.cell_height {
            return Err(SimError::InvalidConfig(format!(
                "block gap {} leaves no drawable block area",
                self.block_gap
            )));
        }
        Ok(())
    }
}
