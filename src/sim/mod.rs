//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only from the caller-supplied frame delta
//! - Injected draw source only (seeded PCG by default)
//! - Stable iteration order (registry spawn order)
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod explosive;
pub mod hook;
pub mod layout;
pub mod rect;
pub mod scoring;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{Hit, resolve};
pub use rect::Rect;
pub use scoring::{DrawSource, Reward, ScriptedDraws};
pub use snapshot::{CollectibleSnapshot, HookSnapshot, SessionSnapshot};
pub use state::{
    Attachment, Collectible, CollectibleId, CollectibleKind, CollectibleRegistry, GoldSize, Hook,
    HookState, Outcome, RockSize, Session, SessionEvent, SessionPhase,
};
pub use tick::{InputEvent, TickInput, tick};
