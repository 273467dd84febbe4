//! Read-only view of a session for renderers and other observers
//!
//! Produced after a tick completes, so it never shows a half-updated frame.

use glam::Vec2;
use serde::Serialize;

use super::rect::Rect;
use super::scoring::DrawSource;
use super::state::{CollectibleKind, HookState, Outcome, Session, SessionPhase};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HookSnapshot {
    pub anchor: Vec2,
    /// Sprite center
    pub position: Vec2,
    pub attachment_point: Vec2,
    pub rect: Rect,
    pub angle: f32,
    pub radius: f32,
    pub state: HookState,
    /// Blast location while an explosive is going off
    pub explosion_point: Option<Vec2>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectibleSnapshot {
    pub kind: CollectibleKind,
    pub rect: Rect,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub hook: HookSnapshot,
    pub collectibles: Vec<CollectibleSnapshot>,
    pub score: u32,
    pub target_score: u32,
    pub time_remaining: f32,
    pub charges: u32,
    pub phase: SessionPhase,
    pub outcome: Option<Outcome>,
}

impl<D: DrawSource> Session<D> {
    pub fn snapshot(&self) -> SessionSnapshot {
        let hook = &self.hook;
        SessionSnapshot {
            hook: HookSnapshot {
                anchor: hook.anchor,
                position: hook.position(),
                attachment_point: hook.attachment_point(&self.tuning),
                rect: hook.rect(&self.tuning),
                angle: hook.angle,
                radius: hook.radius,
                state: hook.state,
                explosion_point: hook.explosion_point,
            },
            collectibles: self
                .registry
                .iter()
                .map(|(_, c)| CollectibleSnapshot {
                    kind: c.kind,
                    rect: c.rect,
                    active: c.active,
                })
                .collect(),
            score: self.score,
            target_score: self.tuning.target_score,
            time_remaining: self.time_remaining,
            charges: self.charges,
            phase: self.phase,
            outcome: self.outcome(),
        }
    }
}
