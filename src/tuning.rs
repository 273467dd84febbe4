//! Session tuning
//!
//! Every constant a session needs, loadable from a JSON file so balance can be
//! changed without a rebuild. Missing fields fall back to the defaults in
//! [`crate::consts`].

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Geometric, timing and rule constants for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Playfield ===
    /// Playfield size; the hook bounces back when its sprite touches an edge
    pub playfield: Vec2,

    // === Swing ===
    pub base_radius: f32,
    /// Oscillation amplitude in radians
    pub max_angle: f32,
    /// Seconds for one full swing
    pub oscillation_period: f32,

    // === Reel ===
    pub extend_speed: f32,
    /// Gold haul speed (rocks move at half)
    pub retract_speed: f32,

    // === Hook geometry ===
    pub hook_size: Vec2,
    /// Grab point relative to the hook sprite's top-left corner
    pub attachment_offset: Vec2,
    pub footprint_size: f32,

    // === Explosives ===
    pub explosive_move_time: f32,
    pub explosive_detonate_time: f32,
    pub initial_charges: u32,

    // === Rules ===
    /// Session length in seconds
    pub time_budget: f32,
    pub target_score: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            playfield: Vec2::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT),

            base_radius: BASE_RADIUS,
            max_angle: MAX_ANGLE,
            oscillation_period: OSCILLATION_PERIOD,

            extend_speed: EXTEND_SPEED,
            retract_speed: RETRACT_SPEED,

            hook_size: Vec2::new(HOOK_WIDTH, HOOK_HEIGHT),
            attachment_offset: Vec2::new(ATTACHMENT_OFFSET_X, ATTACHMENT_OFFSET_Y),
            footprint_size: FOOTPRINT_SIZE,

            explosive_move_time: EXPLOSIVE_MOVE_TIME,
            explosive_detonate_time: EXPLOSIVE_DETONATE_TIME,
            initial_charges: INITIAL_CHARGES,

            time_budget: TIME_BUDGET,
            target_score: TARGET_SCORE,
        }
    }
}

impl Tuning {
    /// Angular frequency of the swing (rad/s)
    #[inline]
    pub fn omega(&self) -> f32 {
        std::f32::consts::TAU / self.oscillation_period
    }

    /// Haul speed for the attached target
    #[inline]
    pub fn haul_speed(&self, is_rock: bool) -> f32 {
        if is_rock {
            self.retract_speed * 0.5
        } else {
            self.retract_speed
        }
    }

    /// Reject values that would make the simulation degenerate
    pub fn validate(&self) -> Result<(), TuningError> {
        fn positive(field: &'static str, value: f32) -> Result<(), TuningError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(TuningError::Invalid {
                    field,
                    reason: "must be a positive number",
                })
            }
        }

        positive("playfield.x", self.playfield.x)?;
        positive("playfield.y", self.playfield.y)?;
        positive("base_radius", self.base_radius)?;
        positive("oscillation_period", self.oscillation_period)?;
        positive("extend_speed", self.extend_speed)?;
        positive("retract_speed", self.retract_speed)?;
        positive("hook_size.x", self.hook_size.x)?;
        positive("hook_size.y", self.hook_size.y)?;
        positive("footprint_size", self.footprint_size)?;
        positive("explosive_move_time", self.explosive_move_time)?;
        positive("explosive_detonate_time", self.explosive_detonate_time)?;
        positive("time_budget", self.time_budget)?;

        if !(self.max_angle > 0.0 && self.max_angle < std::f32::consts::FRAC_PI_2) {
            return Err(TuningError::Invalid {
                field: "max_angle",
                reason: "must be within (0, pi/2) radians",
            });
        }
        Ok(())
    }

    /// Parse and validate tuning from JSON text
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }
}
