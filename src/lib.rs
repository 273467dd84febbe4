//! Gold Miner - simulation core for a 2D arcade gold-mining game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (hook state machine, collisions, scoring, timer)
//! - `tuning`: Data-driven session constants
//! - `highscores`: Top-5 score table with a plain text encoding

pub mod highscores;
pub mod sim;
pub mod tuning;

pub use highscores::HighScores;
pub use tuning::{Tuning, TuningError};

use glam::Vec2;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Playfield dimensions (screen space, origin top-left, y down)
    pub const PLAYFIELD_WIDTH: f32 = 1366.0;
    pub const PLAYFIELD_HEIGHT: f32 = 768.0;

    /// Hook rest distance from the anchor
    pub const BASE_RADIUS: f32 = 70.0;
    /// Oscillation amplitude (75 degrees)
    pub const MAX_ANGLE: f32 = 75.0 * (std::f32::consts::PI / 180.0);
    /// Full swing period in seconds
    pub const OSCILLATION_PERIOD: f32 = 2.0;

    /// Radial speed while extending and while rolling back empty
    pub const EXTEND_SPEED: f32 = 1000.0;
    /// Radial speed while hauling gold (rocks use half)
    pub const RETRACT_SPEED: f32 = 200.0;
    /// Radius is considered home within this distance of the base radius
    pub const RADIUS_EPSILON: f32 = 1.0;

    /// Hook sprite size (928x665 source scaled by 0.05)
    pub const HOOK_WIDTH: f32 = 46.0;
    pub const HOOK_HEIGHT: f32 = 33.0;
    /// Grab point inside the hook sprite, relative to its top-left corner
    pub const ATTACHMENT_OFFSET_X: f32 = 23.0;
    pub const ATTACHMENT_OFFSET_Y: f32 = 4.0;
    /// Side of the square collision footprint
    pub const FOOTPRINT_SIZE: f32 = 20.0;

    /// Explosive sequencing (seconds)
    pub const EXPLOSIVE_MOVE_TIME: f32 = 0.05;
    pub const EXPLOSIVE_DETONATE_TIME: f32 = 0.2;

    /// Session rules
    pub const TIME_BUDGET: f32 = 60.0;
    pub const TARGET_SCORE: u32 = 400;
    pub const INITIAL_CHARGES: u32 = 0;

    /// Fixed frame step used by the headless driver (60 Hz)
    pub const FRAME_DT: f32 = 1.0 / 60.0;
}

/// Offset from the anchor for a hook at `radius` swung `angle` radians from vertical.
///
/// Screen space has y pointing down, so angle 0 hangs straight below the anchor.
#[inline]
pub fn swing_offset(radius: f32, angle: f32) -> Vec2 {
    Vec2::new(radius * angle.sin(), radius * angle.cos())
}

/// Format seconds as `M:SS` for the timer readout (fractions truncated)
pub fn format_timer(seconds: f32) -> String {
    let whole = seconds.max(0.0) as u32;
    format!("{}:{:02}", whole / 60, whole % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swing_offset_straight_down() {
        let offset = swing_offset(70.0, 0.0);
        assert!(offset.x.abs() < 1e-5);
        assert!((offset.y - 70.0).abs() < 1e-5);
    }

    #[test]
    fn test_swing_offset_positive_angle_swings_right() {
        let offset = swing_offset(100.0, std::f32::consts::FRAC_PI_6);
        assert!((offset.x - 50.0).abs() < 1e-3);
        assert!(offset.y > 0.0);
    }

    #[test]
    fn test_format_timer() {
        assert_eq!(format_timer(60.0), "1:00");
        assert_eq!(format_timer(59.9), "0:59");
        assert_eq!(format_timer(5.0), "0:05");
        assert_eq!(format_timer(-3.0), "0:00");
    }
}
