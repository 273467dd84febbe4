//! Hook state machine
//!
//! One handler per [`HookState`]:
//!
//! ```text
//! Oscillating -> PullingDown -> RollingBack ---------------------------> Oscillating
//!                           \-> PullingTarget -----------------------> Oscillating
//!                                           \-> ExplosiveMoving -> ExplosiveDetonating -> Oscillating
//! ```
//!
//! Radius changes are driven by the frame delta; the swing angle is driven by
//! the session clock so it stays continuous across frames of any length.

use super::collision;
use super::explosive;
use super::scoring::{self, DrawSource};
use super::state::{Attachment, HookState, Session, SessionEvent};

/// Start extending along the current angle. Ignored unless swinging.
pub fn try_extend<D: DrawSource>(session: &mut Session<D>) -> bool {
    let hook = &mut session.hook;
    if hook.state != HookState::Oscillating {
        return false;
    }
    hook.stored_angle = hook.angle;
    hook.state = HookState::PullingDown;
    session.events.push(SessionEvent::HookExtended { angle: hook.angle });
    log::debug!("Hook extending at {:.3} rad", hook.angle);
    true
}

/// Advance the hook by `dt` seconds. The session clock must already include `dt`.
pub(crate) fn update<D: DrawSource>(session: &mut Session<D>, dt: f32) {
    match session.hook.state {
        HookState::Oscillating => oscillate(session),
        HookState::PullingDown => pull_down(session, dt),
        HookState::RollingBack => roll_back(session, dt),
        HookState::PullingTarget { attachment } => pull_target(session, attachment, dt),
        HookState::ExplosiveMoving { remaining } => explosive::advance_moving(session, remaining, dt),
        HookState::ExplosiveDetonating { remaining } => {
            explosive::advance_detonating(session, remaining, dt)
        }
    }
}

fn oscillate<D: DrawSource>(session: &mut Session<D>) {
    let tuning = &session.tuning;
    let hook = &mut session.hook;
    let t = session.clock - hook.reference_time;
    hook.angle = tuning.max_angle * (tuning.omega() * t + hook.phase_offset).sin();
    hook.radius = tuning.base_radius;
}

fn pull_down<D: DrawSource>(session: &mut Session<D>, dt: f32) {
    let tuning = &session.tuning;
    let hook = &mut session.hook;
    hook.radius += tuning.extend_speed * dt;
    hook.angle = hook.stored_angle;

    // A grab wins over an edge bounce in the same tick
    let footprint = hook.footprint(tuning);
    let grab = hook.attachment_point(tuning);
    if let Some(hit) = collision::resolve(&footprint, grab, &session.registry) {
        hook.state = HookState::PullingTarget {
            attachment: Attachment {
                target: hit.target,
                is_rock: hit.is_rock(),
            },
        };
        session.events.push(SessionEvent::TargetAttached {
            target: hit.target,
            kind: hit.kind,
        });
        log::debug!("Hook grabbed {:?} (#{})", hit.kind, hit.target);
        return;
    }

    if hook.rect(tuning).touches_bounds(tuning.playfield) {
        hook.state = HookState::RollingBack;
        log::debug!("Hook hit the edge at radius {:.1}", hook.radius);
    }
}

fn roll_back<D: DrawSource>(session: &mut Session<D>, dt: f32) {
    let tuning = &session.tuning;
    let hook = &mut session.hook;
    hook.radius -= tuning.extend_speed * dt;
    if is_home(hook.radius, tuning.base_radius) {
        hook.come_home(tuning, session.clock);
        session.events.push(SessionEvent::HookReturnedEmpty);
    }
}

fn pull_target<D: DrawSource>(session: &mut Session<D>, attachment: Attachment, dt: f32) {
    let tuning = &session.tuning;
    let hook = &mut session.hook;
    hook.radius -= tuning.haul_speed(attachment.is_rock) * dt;

    // Target hangs from the grab point
    session
        .registry
        .recenter(attachment.target, hook.attachment_point(tuning));

    if !is_home(hook.radius, tuning.base_radius) {
        return;
    }
    hook.come_home(tuning, session.clock);

    // A stale target (already removed) completes with nothing to score
    let Some(kind) = session.registry.deactivate(attachment.target) else {
        return;
    };
    let reward = scoring::reward_for(kind, &mut session.draws);
    scoring::apply_reward(reward, &mut session.score, &mut session.charges);
    session.events.push(SessionEvent::TargetRetrieved {
        target: attachment.target,
        kind,
        reward,
    });
    log::info!("Hauled {:?}: {:?}, score {}", kind, reward, session.score);
}

#[inline]
fn is_home(radius: f32, base_radius: f32) -> bool {
    radius <= base_radius + crate::consts::RADIUS_EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rect::Rect;
    use crate::sim::scoring::{Reward, ScriptedDraws};
    use crate::sim::state::{Collectible, CollectibleKind, GoldSize, RockSize};
    use crate::tuning::Tuning;
    use glam::Vec2;

    const CHARACTER: Rect = Rect {
        min: Vec2::new(583.0, 90.0),
        size: Vec2::new(200.0, 100.0),
    };

    fn session(items: Vec<Collectible>, draws: &[u32]) -> Session<ScriptedDraws> {
        Session::new(
            Tuning::default(),
            CHARACTER,
            items,
            ScriptedDraws::new(draws.iter().copied()),
        )
    }

    /// Step the hook alone (no timer) until `done` or the step budget runs out
    fn run_until(
        session: &mut Session<ScriptedDraws>,
        dt: f32,
        max_steps: usize,
        done: impl Fn(&Session<ScriptedDraws>) -> bool,
    ) -> bool {
        for _ in 0..max_steps {
            session.clock += dt;
            update(session, dt);
            if done(session) {
                return true;
            }
        }
        false
    }

    #[test]
    fn test_extend_only_from_oscillating() {
        let mut s = session(vec![], &[]);
        assert!(try_extend(&mut s));
        assert_eq!(s.hook.state, HookState::PullingDown);
        assert!(!try_extend(&mut s));
        s.hook.state = HookState::RollingBack;
        assert!(!try_extend(&mut s));
    }

    #[test]
    fn test_oscillation_follows_sine() {
        let mut s = session(vec![], &[]);
        // Quarter period: full swing to one side
        s.clock = 0.5;
        update(&mut s, 0.5);
        assert!((s.hook.angle - s.tuning.max_angle).abs() < 1e-5);
        s.clock = 1.5;
        update(&mut s, 1.0);
        assert!((s.hook.angle + s.tuning.max_angle).abs() < 1e-4);
    }

    #[test]
    fn test_empty_extend_bounces_and_returns() {
        let mut s = session(vec![], &[]);
        s.hook.angle = 0.3;
        try_extend(&mut s);

        assert!(run_until(&mut s, 1.0 / 60.0, 600, |s| s.hook.state == HookState::RollingBack));
        let far = s.hook.radius;
        assert!(far > s.tuning.base_radius);

        assert!(run_until(&mut s, 1.0 / 60.0, 600, |s| s.hook.state == HookState::Oscillating));
        assert_eq!(s.hook.radius, s.tuning.base_radius);
        assert_eq!(s.events.last(), Some(&SessionEvent::HookReturnedEmpty));
        // Swing resumes from the departure angle
        assert!((s.hook.angle - 0.3).abs() < 1e-5);
    }

    #[test]
    fn test_haul_medium_gold_scores_100() {
        let gold = Collectible::gold(GoldSize::Medium, Rect::new(668.0, 400.0, 30.0, 30.0));
        let mut s = session(vec![gold], &[]);
        try_extend(&mut s);

        assert!(run_until(&mut s, 1.0 / 60.0, 600, |s| s.hook.state.attachment().is_some()));
        assert!(run_until(&mut s, 1.0 / 60.0, 1200, |s| s.hook.state == HookState::Oscillating));

        assert_eq!(s.score, 100);
        assert!(!s.registry.is_active(0));
        assert_eq!(s.hook.radius, s.tuning.base_radius);
        assert!(matches!(
            s.events.last(),
            Some(SessionEvent::TargetRetrieved {
                reward: Reward::Points(100),
                ..
            })
        ));
    }

    #[test]
    fn test_haul_small_rock_scores_10_at_half_speed() {
        let rock = Collectible::rock(RockSize::Small, Rect::new(668.0, 400.0, 30.0, 30.0));
        let mut s = session(vec![rock], &[]);
        try_extend(&mut s);
        assert!(run_until(&mut s, 1.0 / 60.0, 600, |s| s.hook.state.attachment().is_some()));

        let before = s.hook.radius;
        s.clock += 0.1;
        update(&mut s, 0.1);
        assert!((before - s.hook.radius - 10.0).abs() < 1e-3);

        assert!(run_until(&mut s, 1.0 / 60.0, 2400, |s| s.hook.state == HookState::Oscillating));
        assert_eq!(s.score, 10);
    }

    #[test]
    fn test_attached_target_follows_grab_point() {
        let gold = Collectible::gold(GoldSize::Big, Rect::new(653.0, 400.0, 60.0, 60.0));
        let mut s = session(vec![gold], &[]);
        try_extend(&mut s);
        assert!(run_until(&mut s, 1.0 / 60.0, 600, |s| s.hook.state.attachment().is_some()));

        s.clock += 0.05;
        update(&mut s, 0.05);
        let center = s.registry.get(0).unwrap().rect.center();
        let grab = s.hook.attachment_point(&s.tuning);
        assert!(center.distance(grab) < 1e-3);
    }

    #[test]
    fn test_mystery_draws_once_on_arrival() {
        let bag = Collectible::gold(GoldSize::Mystery, Rect::new(663.0, 400.0, 40.0, 40.0));
        let mut s = session(vec![bag], &[15]);
        try_extend(&mut s);
        assert!(run_until(&mut s, 1.0 / 60.0, 600, |s| s.hook.state.attachment().is_some()));
        assert_eq!(s.draws.taken(), 0);

        assert!(run_until(&mut s, 1.0 / 60.0, 1200, |s| s.hook.state == HookState::Oscillating));
        assert_eq!(s.draws.taken(), 1);
        assert_eq!(s.charges, 1);
        assert_eq!(s.score, 0);
    }

    #[test]
    fn test_stale_target_completes_without_score() {
        let gold = Collectible::gold(GoldSize::Big, Rect::new(653.0, 400.0, 60.0, 60.0));
        let mut s = session(vec![gold], &[]);
        try_extend(&mut s);
        assert!(run_until(&mut s, 1.0 / 60.0, 600, |s| s.hook.state.attachment().is_some()));

        s.registry.deactivate(0);
        assert!(run_until(&mut s, 1.0 / 60.0, 1200, |s| s.hook.state == HookState::Oscillating));
        assert_eq!(s.score, 0);
        assert!(!s
            .events
            .iter()
            .any(|e| matches!(e, SessionEvent::TargetRetrieved { .. })));
    }

    #[test]
    fn test_grab_beats_edge_in_same_tick() {
        // Gold straddling the bottom edge: the tick that reaches it also touches the edge
        let gold = Collectible::gold(GoldSize::Small, Rect::new(673.0, 740.0, 20.0, 20.0));
        let mut s = session(vec![gold], &[]);
        try_extend(&mut s);
        s.hook.radius = 600.0;
        s.clock += 0.02;
        update(&mut s, 0.02);
        assert!(s.hook.rect(&s.tuning).touches_bounds(s.tuning.playfield));
        assert_eq!(
            s.hook.state.attachment().map(|a| a.target),
            Some(0),
            "grab should take priority over the edge bounce"
        );
        assert!(matches!(
            s.events.last(),
            Some(SessionEvent::TargetAttached {
                kind: CollectibleKind::Gold(GoldSize::Small),
                ..
            })
        ));
    }
}
