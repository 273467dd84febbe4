//! The classic playfield
//!
//! Fixed positions for the standard session: eleven golds (five small, three
//! medium, two big, one mystery bag) followed by four rocks. Golds spawn first,
//! so on an exact distance tie the hook prefers gold.

use super::rect::Rect;
use super::state::{Collectible, GoldSize, RockSize};

/// The miner sprite at the top center of the screen
pub fn character_rect() -> Rect {
    Rect::new(583.0, 90.0, 200.0, 100.0)
}

pub fn classic_collectibles() -> Vec<Collectible> {
    use GoldSize::*;

    let golds = [
        (Small, 50.0, 300.0, 20.0),
        (Small, 1250.0, 320.0, 20.0),
        (Small, 350.0, 340.0, 20.0),
        (Small, 600.0, 360.0, 20.0),
        (Small, 900.0, 280.0, 20.0),
        (Medium, 500.0, 520.0, 30.0),
        (Medium, 1150.0, 640.0, 30.0),
        (Medium, 800.0, 700.0, 30.0),
        (Big, 450.0, 600.0, 60.0),
        (Big, 1000.0, 690.0, 60.0),
        (Mystery, 400.0, 450.0, 40.0),
    ];
    let rocks = [
        (RockSize::Big, 250.0, 370.0, 50.0),
        (RockSize::Big, 550.0, 380.0, 50.0),
        (RockSize::Small, 900.0, 320.0, 30.0),
        (RockSize::Small, 1050.0, 340.0, 30.0),
    ];

    golds
        .into_iter()
        .map(|(size, x, y, side)| Collectible::gold(size, Rect::new(x, y, side, side)))
        .chain(
            rocks
                .into_iter()
                .map(|(size, x, y, side)| Collectible::rock(size, Rect::new(x, y, side, side))),
        )
        .collect()
}
