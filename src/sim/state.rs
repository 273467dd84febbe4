//! Session state and core simulation types
//!
//! Everything one play attempt owns lives in [`Session`]: the hook, the
//! collectible registry, the countdown, the score and the draw source for
//! mystery bags. Nothing survives outside a session.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::layout;
use super::rect::Rect;
use super::scoring::{DrawSource, Reward};
use crate::swing_offset;
use crate::tuning::Tuning;

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Timer running, hook responds to input
    Playing,
    /// Timer reached zero; the outcome is decided
    TimeUp,
    /// Host asked to terminate; no outcome
    Quit,
}

/// Final result of a session that ran out of time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Loss,
}

/// Gold nugget sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoldSize {
    Small,
    Medium,
    Big,
    /// Bag whose reward is drawn when it is hauled in
    Mystery,
}

/// Rock sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RockSize {
    Small,
    Big,
}

/// What a collectible is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollectibleKind {
    Gold(GoldSize),
    Rock(RockSize),
}

impl CollectibleKind {
    #[inline]
    pub fn is_rock(&self) -> bool {
        matches!(self, CollectibleKind::Rock(_))
    }
}

/// Index of a collectible in its registry (spawn order)
pub type CollectibleId = usize;

/// A gold or rock entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collectible {
    pub kind: CollectibleKind,
    pub rect: Rect,
    /// False once collected or exploded
    pub active: bool,
}

impl Collectible {
    pub fn new(kind: CollectibleKind, rect: Rect) -> Self {
        Self {
            kind,
            rect,
            active: true,
        }
    }

    pub fn gold(size: GoldSize, rect: Rect) -> Self {
        Self::new(CollectibleKind::Gold(size), rect)
    }

    pub fn rock(size: RockSize, rect: Rect) -> Self {
        Self::new(CollectibleKind::Rock(size), rect)
    }
}

/// Fixed set of collectibles for one session.
///
/// Entries are never removed or reordered, so a [`CollectibleId`] stays valid
/// for the whole session. Iteration follows spawn order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollectibleRegistry {
    items: Vec<Collectible>,
}

impl CollectibleRegistry {
    pub fn new(items: Vec<Collectible>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: CollectibleId) -> Option<&Collectible> {
        self.items.get(id)
    }

    /// All collectibles in spawn order, active or not
    pub fn iter(&self) -> impl Iterator<Item = (CollectibleId, &Collectible)> {
        self.items.iter().enumerate()
    }

    /// Active collectibles in spawn order
    pub fn iter_active(&self) -> impl Iterator<Item = (CollectibleId, &Collectible)> {
        self.iter().filter(|(_, c)| c.active)
    }

    pub fn active_count(&self) -> usize {
        self.items.iter().filter(|c| c.active).count()
    }

    pub fn is_active(&self, id: CollectibleId) -> bool {
        self.items.get(id).is_some_and(|c| c.active)
    }

    /// Center an active collectible on `center`. Inactive or unknown ids are ignored.
    pub fn recenter(&mut self, id: CollectibleId, center: Vec2) {
        if let Some(item) = self.items.get_mut(id).filter(|c| c.active) {
            item.rect.recenter(center);
        }
    }

    /// Deactivate a collectible, returning its kind if it was still active
    pub fn deactivate(&mut self, id: CollectibleId) -> Option<CollectibleKind> {
        let item = self.items.get_mut(id).filter(|c| c.active)?;
        item.active = false;
        Some(item.kind)
    }
}

/// The collectible a hook is hauling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub target: CollectibleId,
    /// Rocks haul at half speed
    pub is_rock: bool,
}

/// Hook state machine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum HookState {
    /// Swinging at rest radius, waiting for the extend input
    Oscillating,
    /// Extending along the stored angle
    PullingDown,
    /// Returning empty-handed after touching a playfield edge
    RollingBack,
    /// Hauling an attached collectible home
    PullingTarget { attachment: Attachment },
    /// Explosive travelling to the target (seconds remaining)
    ExplosiveMoving { remaining: f32 },
    /// Explosion effect playing (seconds remaining)
    ExplosiveDetonating { remaining: f32 },
}

impl HookState {
    pub fn name(&self) -> &'static str {
        match self {
            HookState::Oscillating => "Oscillating",
            HookState::PullingDown => "PullingDown",
            HookState::RollingBack => "RollingBack",
            HookState::PullingTarget { .. } => "PullingTarget",
            HookState::ExplosiveMoving { .. } => "ExplosiveMoving",
            HookState::ExplosiveDetonating { .. } => "ExplosiveDetonating",
        }
    }

    /// Attachment being hauled, if any
    pub fn attachment(&self) -> Option<Attachment> {
        match self {
            HookState::PullingTarget { attachment } => Some(*attachment),
            _ => None,
        }
    }
}

/// The swinging hook
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hook {
    /// Pivot at the character's center
    pub anchor: Vec2,
    /// Current angle from vertical (radians)
    pub angle: f32,
    /// Angle captured when the hook started extending
    pub stored_angle: f32,
    /// Distance from the anchor
    pub radius: f32,
    /// Oscillation phase, reset whenever the hook comes home
    pub phase_offset: f32,
    /// Session clock value the oscillation is measured from
    pub reference_time: f32,
    pub state: HookState,
    /// Where the last explosive went off (cleared once the effect ends)
    pub explosion_point: Option<Vec2>,
}

impl Hook {
    pub fn new(anchor: Vec2, base_radius: f32) -> Self {
        Self {
            anchor,
            angle: 0.0,
            stored_angle: 0.0,
            radius: base_radius,
            phase_offset: 0.0,
            reference_time: 0.0,
            state: HookState::Oscillating,
            explosion_point: None,
        }
    }

    /// Center of the hook sprite
    pub fn position(&self) -> Vec2 {
        self.anchor + swing_offset(self.radius, self.angle)
    }

    /// Hook sprite bounds (unrotated)
    pub fn rect(&self, tuning: &Tuning) -> Rect {
        Rect::from_center(self.position(), tuning.hook_size)
    }

    /// Grab point: fixed offset inside the sprite, where targets hang
    pub fn attachment_point(&self, tuning: &Tuning) -> Vec2 {
        self.rect(tuning).min + tuning.attachment_offset
    }

    /// Collision square centered on the attachment point
    pub fn footprint(&self, tuning: &Tuning) -> Rect {
        Rect::from_center(
            self.attachment_point(tuning),
            Vec2::splat(tuning.footprint_size),
        )
    }

    /// Snap to rest radius and resume swinging from the angle the hook left at.
    pub fn come_home(&mut self, tuning: &Tuning, now: f32) {
        self.radius = tuning.base_radius;
        self.angle = self.stored_angle;
        self.phase_offset = (self.stored_angle / tuning.max_angle).clamp(-1.0, 1.0).asin();
        self.reference_time = now;
        self.state = HookState::Oscillating;
    }
}

/// Something that happened during a tick, for audio/UI collaborators
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SessionEvent {
    HookExtended { angle: f32 },
    TargetAttached { target: CollectibleId, kind: CollectibleKind },
    HookReturnedEmpty,
    TargetRetrieved {
        target: CollectibleId,
        kind: CollectibleKind,
        reward: Reward,
    },
    Detonated { target: CollectibleId, kind: CollectibleKind },
    ExplosionFinished,
    TimeUp { outcome: Outcome },
    Quit,
}

/// One play attempt
#[derive(Debug, Clone)]
pub struct Session<D: DrawSource = Pcg32> {
    pub tuning: Tuning,
    /// Character rectangle; the hook pivots on its center
    pub anchor_rect: Rect,
    pub hook: Hook,
    pub registry: CollectibleRegistry,
    pub score: u32,
    /// Explosive charges available
    pub charges: u32,
    /// Seconds left on the countdown, never negative
    pub time_remaining: f32,
    /// Simulated seconds elapsed while playing
    pub clock: f32,
    pub phase: SessionPhase,
    /// Events from the most recent tick
    pub events: Vec<SessionEvent>,
    pub(crate) draws: D,
}

impl<D: DrawSource> Session<D> {
    /// Start a session with caller-supplied layout and draw source
    pub fn new(tuning: Tuning, anchor_rect: Rect, collectibles: Vec<Collectible>, draws: D) -> Self {
        let hook = Hook::new(anchor_rect.center(), tuning.base_radius);
        Self {
            charges: tuning.initial_charges,
            time_remaining: tuning.time_budget,
            tuning,
            anchor_rect,
            hook,
            registry: CollectibleRegistry::new(collectibles),
            score: 0,
            clock: 0.0,
            phase: SessionPhase::Playing,
            events: Vec::new(),
            draws,
        }
    }

    /// Move the character; the hook follows on the next tick
    pub fn set_anchor_rect(&mut self, rect: Rect) {
        self.anchor_rect = rect;
    }

    /// Result once the timer has run out
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            SessionPhase::TimeUp => Some(if self.score >= self.tuning.target_score {
                Outcome::Win
            } else {
                Outcome::Loss
            }),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase != SessionPhase::Playing
    }
}

impl Session<Pcg32> {
    /// Session whose mystery draws come from a seeded PCG stream
    pub fn seeded(
        tuning: Tuning,
        anchor_rect: Rect,
        collectibles: Vec<Collectible>,
        seed: u64,
    ) -> Self {
        Self::new(tuning, anchor_rect, collectibles, Pcg32::seed_from_u64(seed))
    }

    /// The standard playfield: 11 golds, 4 rocks, miner at the top center
    pub fn classic(tuning: Tuning, seed: u64) -> Self {
        Self::seeded(
            tuning,
            layout::character_rect(),
            layout::classic_collectibles(),
            seed,
        )
    }
}
