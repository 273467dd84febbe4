//! Rewards for hauled collectibles
//!
//! Fixed values for rocks and plain gold. Mystery bags draw once, at the moment
//! they reach the miner, from an injected [`DrawSource`].

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::state::{CollectibleKind, GoldSize, RockSize};

/// Mystery draws below this grant an explosive charge
pub const MYSTERY_CHARGE_BELOW: u32 = 30;
/// Mystery draws below this (and not a charge) grant the small bonus
pub const MYSTERY_SMALL_BELOW: u32 = 90;
pub const MYSTERY_SMALL_POINTS: u32 = 100;
pub const MYSTERY_BIG_POINTS: u32 = 250;

/// What a completed haul pays out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reward {
    Points(u32),
    /// One explosive charge, no points
    Charge,
}

/// Uniform integer source in `[0, 100)` for mystery bags
pub trait DrawSource {
    fn draw_percent(&mut self) -> u32;
}

impl DrawSource for Pcg32 {
    fn draw_percent(&mut self) -> u32 {
        self.random_range(0..100)
    }
}

/// Replays a fixed sequence of draws, cycling when exhausted.
///
/// Used to make mystery outcomes reproducible in tests and replays.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDraws {
    draws: Vec<u32>,
    next: usize,
}

impl ScriptedDraws {
    pub fn new(draws: impl IntoIterator<Item = u32>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            next: 0,
        }
    }

    /// Number of draws taken so far
    pub fn taken(&self) -> usize {
        self.next
    }
}

impl DrawSource for ScriptedDraws {
    fn draw_percent(&mut self) -> u32 {
        if self.draws.is_empty() {
            return 0;
        }
        let value = self.draws[self.next % self.draws.len()] % 100;
        self.next += 1;
        value
    }
}

/// Map a mystery draw to its reward
pub fn mystery_reward(draw: u32) -> Reward {
    if draw < MYSTERY_CHARGE_BELOW {
        Reward::Charge
    } else if draw < MYSTERY_SMALL_BELOW {
        Reward::Points(MYSTERY_SMALL_POINTS)
    } else {
        Reward::Points(MYSTERY_BIG_POINTS)
    }
}

/// Reward for hauling `kind` home. Draws only for mystery bags.
pub fn reward_for(kind: CollectibleKind, draws: &mut impl DrawSource) -> Reward {
    match kind {
        CollectibleKind::Rock(RockSize::Small) => Reward::Points(10),
        CollectibleKind::Rock(RockSize::Big) => Reward::Points(20),
        CollectibleKind::Gold(GoldSize::Small) => Reward::Points(50),
        CollectibleKind::Gold(GoldSize::Medium) => Reward::Points(100),
        CollectibleKind::Gold(GoldSize::Big) => Reward::Points(200),
        CollectibleKind::Gold(GoldSize::Mystery) => mystery_reward(draws.draw_percent()),
    }
}

/// Apply a reward to the running totals
pub fn apply_reward(reward: Reward, score: &mut u32, charges: &mut u32) {
    match reward {
        Reward::Points(points) => *score = score.saturating_add(points),
        Reward::Charge => *charges = charges.saturating_add(1),
    }
}
