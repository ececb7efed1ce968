//! Brickfall - a fixed-camera Breakout simulation core
//!
//! Core modules:
//! - `sim`: Entity store, physics integration, collision response, frame step
//! - `settings`: Data-driven tuning (`SimConfig`)
//! - `renderer`: Read-only extraction of entity state and vertex data for a host renderer
//! - `error`: Error type for session and entity creation

pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::SimError;
pub use settings::SimConfig;
pub use sim::{EndCause, InputState, Session, StepResult, initialize_session, step};

/// Game configuration constants
pub mod consts {
    /// Default play-field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    /// Horizontal paddle speed (units/s)
    pub const PADDLE_SPEED: f32 = 400.0;
    /// Gap between the paddle bottom edge and the field floor
    pub const PADDLE_FLOOR_OFFSET: f32 = 30.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Scales the unit-scale ball velocity into units/s
    pub const BALL_SPEED_MULTIPLIER: f32 = 400.0;
    /// Initial ball direction
    pub const BALL_START_VELOCITY: (f32, f32) = (0.2, 0.2);

    /// Velocity gain applied on every bounce
    pub const ESCALATION: f32 = 1.05;

    /// Block grid
    pub const GRID_ROWS: u32 = 5;
    pub const GRID_COLS: u32 = 10;
    pub const CELL_HEIGHT: f32 = 30.0;
    /// Margin subtracted from each cell's drawable width/height
    pub const BLOCK_GAP: f32 = 5.0;
}
