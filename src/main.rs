//! Gold Miner headless driver
//!
//! Runs one classic session at a fixed 60 Hz step with a simple autopilot
//! standing in for the player, then records the score in the high score file.
//!
//! Usage: `gold-miner [seed] [tuning.json]`
//! Set `GOLD_MINER_SCORES` to change the score file (default `highscores.txt`).

use std::process::ExitCode;

use gold_miner::consts::FRAME_DT;
use gold_miner::highscores::{DEFAULT_FILE, HighScores};
use gold_miner::sim::{CollectibleKind, GoldSize, HookState, Session, SessionEvent, TickInput, tick};
use gold_miner::{Tuning, format_timer};

/// How close (radians) the swing must be to a target's bearing before dropping
const AIM_TOLERANCE: f32 = 0.03;

/// Relative desirability of a collectible for the autopilot
fn value_hint(kind: CollectibleKind) -> f32 {
    match kind {
        CollectibleKind::Gold(GoldSize::Big) => 200.0,
        CollectibleKind::Gold(GoldSize::Mystery) => 120.0,
        CollectibleKind::Gold(GoldSize::Medium) => 100.0,
        CollectibleKind::Gold(GoldSize::Small) => 50.0,
        CollectibleKind::Rock(_) => 5.0,
    }
}

/// Decide this frame's input: drop the hook when it points at the best-value
/// target in reach, blow up rocks when a charge is available.
fn autopilot(session: &Session) -> TickInput {
    let mut input = TickInput::default();
    let hook = &session.hook;

    match hook.state {
        HookState::Oscillating => {
            let max_angle = session.tuning.max_angle;
            let best = session
                .registry
                .iter_active()
                .filter_map(|(_, c)| {
                    let to = c.rect.center() - hook.anchor;
                    let bearing = to.x.atan2(to.y);
                    (bearing.abs() <= max_angle).then(|| (bearing, value_hint(c.kind) / to.length()))
                })
                .max_by(|a, b| a.1.total_cmp(&b.1));
            if let Some((bearing, _)) = best {
                input.extend = (hook.angle - bearing).abs() < AIM_TOLERANCE;
            }
        }
        HookState::PullingTarget { attachment } => {
            input.detonate = attachment.is_rock && session.charges > 0;
        }
        _ => {}
    }

    input
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Gold Miner (headless) starting...");

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });

    let tuning = match args.next() {
        Some(path) => match Tuning::load(&path) {
            Ok(tuning) => tuning,
            Err(err) => {
                log::error!("{}", err);
                return ExitCode::FAILURE;
            }
        },
        None => Tuning::default(),
    };

    let mut session = Session::classic(tuning, seed);
    log::info!(
        "Session started with seed {}: reach {} points in {}",
        seed,
        session.tuning.target_score,
        format_timer(session.tuning.time_budget)
    );

    while !session.is_over() {
        let input = autopilot(&session);
        tick(&mut session, &input, FRAME_DT);

        for event in &session.events {
            match event {
                SessionEvent::TargetRetrieved { kind, reward, .. } => {
                    log::info!(
                        "[{}] {:?} -> {:?} (score {})",
                        format_timer(session.time_remaining),
                        kind,
                        reward,
                        session.score
                    );
                }
                SessionEvent::Detonated { kind, .. } => {
                    log::info!("[{}] Blew up {:?}", format_timer(session.time_remaining), kind);
                }
                _ => log::debug!("{:?}", event),
            }
        }
    }

    let snapshot = session.snapshot();
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{}", json),
        Err(err) => log::warn!("Could not encode snapshot: {}", err),
    }
    log::info!(
        "Outcome: {:?} with {} points ({} collectibles left)",
        snapshot.outcome,
        snapshot.score,
        session.registry.active_count()
    );

    let path = std::env::var("GOLD_MINER_SCORES").unwrap_or_else(|_| DEFAULT_FILE.to_string());
    let mut scores = HighScores::load(&path);
    if let Some(rank) = scores.record(session.score) {
        log::info!("New high score! Rank #{}", rank);
    }
    if let Err(err) = scores.save(&path) {
        log::warn!("Could not save high scores to {}: {}", path, err);
    }

    ExitCode::SUCCESS
}
