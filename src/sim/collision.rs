//! Hook-vs-collectible collision resolution
//!
//! While the hook extends, its footprint is tested against every active
//! collectible. When several overlap at once the one whose center is nearest
//! the attachment point wins, regardless of gold or rock. Exact ties keep the
//! first candidate in registry order (spawn order), which is arbitrary but
//! deterministic.

use glam::Vec2;

use super::rect::Rect;
use super::state::{CollectibleId, CollectibleKind, CollectibleRegistry};

/// A resolved grab
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub target: CollectibleId,
    pub kind: CollectibleKind,
    /// Squared distance from the attachment point to the target's center
    pub distance_sq: f32,
}

impl Hit {
    #[inline]
    pub fn is_rock(&self) -> bool {
        self.kind.is_rock()
    }
}

/// Find the collectible the hook grabs this tick, if any
pub fn resolve(footprint: &Rect, attachment_point: Vec2, registry: &CollectibleRegistry) -> Option<Hit> {
    let mut best: Option<Hit> = None;

    for (id, item) in registry.iter_active() {
        if !footprint.intersects(&item.rect) {
            continue;
        }
        let distance_sq = item.rect.center().distance_squared(attachment_point);
        // Strict comparison keeps the earlier candidate on exact ties
        if best.is_none_or(|b| distance_sq < b.distance_sq) {
            best = Some(Hit {
                target: id,
                kind: item.kind,
                distance_sq,
            });
        }
    }

    best
}
