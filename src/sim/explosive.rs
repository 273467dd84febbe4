//! Explosives
//!
//! A charge lets the player give up the target being hauled in exchange for
//! getting the hook back sooner. The target is removed the moment the charge
//! is used; the hook then waits out two short timed phases (the explosive
//! travelling, then the blast) before swinging again. Nothing is scored.

use super::scoring::DrawSource;
use super::state::{HookState, Session, SessionEvent};

/// Use a charge on the attached target.
///
/// Only honored while hauling an active target with at least one charge left.
/// Returns whether the detonation happened.
pub fn try_detonate<D: DrawSource>(session: &mut Session<D>) -> bool {
    let Some(attachment) = session.hook.state.attachment() else {
        return false;
    };
    if session.charges == 0 {
        return false;
    }
    let Some(kind) = session.registry.deactivate(attachment.target) else {
        // Target already gone; nothing to blow up
        return false;
    };

    session.charges -= 1;
    session.hook.explosion_point = Some(session.hook.position());
    session.hook.state = HookState::ExplosiveMoving {
        remaining: session.tuning.explosive_move_time,
    };
    session.events.push(SessionEvent::Detonated {
        target: attachment.target,
        kind,
    });
    log::debug!(
        "Detonated {:?} (#{}), {} charges left",
        kind,
        attachment.target,
        session.charges
    );
    true
}

/// Count down the travel phase, then start the blast
pub(crate) fn advance_moving<D: DrawSource>(session: &mut Session<D>, remaining: f32, dt: f32) {
    let remaining = remaining - dt;
    session.hook.state = if remaining <= 0.0 {
        HookState::ExplosiveDetonating {
            remaining: session.tuning.explosive_detonate_time,
        }
    } else {
        HookState::ExplosiveMoving { remaining }
    };
}

/// Count down the blast, then bring the hook home
pub(crate) fn advance_detonating<D: DrawSource>(session: &mut Session<D>, remaining: f32, dt: f32) {
    let remaining = remaining - dt;
    if remaining > 0.0 {
        session.hook.state = HookState::ExplosiveDetonating { remaining };
        return;
    }
    session.hook.come_home(&session.tuning, session.clock);
    session.hook.explosion_point = None;
    session.events.push(SessionEvent::ExplosionFinished);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rect::Rect;
    use crate::sim::scoring::ScriptedDraws;
    use crate::sim::state::{Attachment, Collectible, GoldSize};
    use crate::tuning::Tuning;

    fn hauling_session(charges: u32) -> Session<ScriptedDraws> {
        let tuning = Tuning {
            initial_charges: charges,
            ..Tuning::default()
        };
        let mut session = Session::new(
            tuning,
            Rect::new(583.0, 90.0, 200.0, 100.0),
            vec![Collectible::gold(GoldSize::Big, Rect::new(653.0, 400.0, 60.0, 60.0))],
            ScriptedDraws::default(),
        );
        session.hook.radius = 300.0;
        session.hook.state = HookState::PullingTarget {
            attachment: Attachment {
                target: 0,
                is_rock: false,
            },
        };
        session
    }

    #[test]
    fn test_detonate_consumes_charge_and_removes_target() {
        let mut session = hauling_session(2);
        assert!(try_detonate(&mut session));
        assert_eq!(session.charges, 1);
        assert!(!session.registry.is_active(0));
        assert!(matches!(session.hook.state, HookState::ExplosiveMoving { .. }));
        assert_eq!(session.hook.explosion_point, Some(session.hook.position()));
    }

    #[test]
    fn test_detonate_requires_charge() {
        let mut session = hauling_session(0);
        assert!(!try_detonate(&mut session));
        assert!(session.registry.is_active(0));
        assert!(matches!(session.hook.state, HookState::PullingTarget { .. }));
    }

    #[test]
    fn test_detonate_requires_attachment() {
        let mut session = hauling_session(1);
        session.hook.state = HookState::PullingDown;
        assert!(!try_detonate(&mut session));
        assert_eq!(session.charges, 1);
    }

    #[test]
    fn test_stale_attachment_is_noop() {
        let mut session = hauling_session(1);
        session.registry.deactivate(0);
        assert!(!try_detonate(&mut session));
        assert_eq!(session.charges, 1);
    }

    #[test]
    fn test_second_detonate_ignored() {
        let mut session = hauling_session(3);
        assert!(try_detonate(&mut session));
        assert!(!try_detonate(&mut session));
        assert_eq!(session.charges, 2);
    }

    #[test]
    fn test_phases_return_hook_home() {
        let mut session = hauling_session(1);
        try_detonate(&mut session);

        advance_moving(&mut session, 0.05, 0.03);
        assert!(matches!(session.hook.state, HookState::ExplosiveMoving { .. }));
        advance_moving(&mut session, 0.02, 0.03);
        assert_eq!(
            session.hook.state,
            HookState::ExplosiveDetonating { remaining: 0.2 }
        );

        advance_detonating(&mut session, 0.2, 0.1);
        assert!(matches!(session.hook.state, HookState::ExplosiveDetonating { .. }));
        advance_detonating(&mut session, 0.1, 0.1);
        assert_eq!(session.hook.state, HookState::Oscillating);
        assert_eq!(session.hook.radius, session.tuning.base_radius);
        assert_eq!(session.hook.explosion_point, None);
        assert_eq!(session.score, 0);
    }
}
