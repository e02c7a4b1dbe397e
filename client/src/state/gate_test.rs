use super::*;
use crate::net::types::User;

fn principal(uid: &str, email: &str) -> Option<User> {
    Some(User {
        uid: uid.to_owned(),
        email: Some(email.to_owned()),
        display_name: None,
    })
}

/// Pull the single scheduled timer id out of an effect list.
fn scheduled_id(effects: &[GateEffect]) -> TimerId {
    let ids: Vec<TimerId> = effects
        .iter()
        .filter_map(|e| match e {
            GateEffect::ScheduleTimer { id, .. } => Some(*id),
            _ => None,
        })
        .collect();
    assert_eq!(ids.len(), 1, "expected exactly one scheduled timer");
    ids[0]
}

fn navigations(effects: &[GateEffect]) -> Vec<(&'static str, bool)> {
    effects
        .iter()
        .filter_map(|e| match e {
            GateEffect::Navigate { path, replace } => Some((*path, *replace)),
            _ => None,
        })
        .collect()
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn fresh_gate_is_pending_and_renders_placeholder() {
    let gate = SessionGate::new();
    assert_eq!(gate.status(), AuthStatus::Pending);
    assert_eq!(render_kind(gate.status()), GateRender::Placeholder);
}

#[test]
fn status_stays_pending_until_the_delay_elapses() {
    let mut gate = SessionGate::new();
    let effects = gate.on_session_event(principal("u1", "a@b.com"));
    assert_eq!(
        effects,
        vec![GateEffect::ScheduleTimer {
            id: scheduled_id(&effects),
            delay_ms: SETTLE_DELAY_MS,
        }]
    );
    // The event is buffered, not trusted: still the placeholder.
    assert_eq!(gate.status(), AuthStatus::Pending);
    assert_eq!(render_kind(gate.status()), GateRender::Placeholder);
}

// =============================================================
// Authenticated path
// =============================================================

#[test]
fn principal_present_settles_to_authenticated_without_navigation() {
    let mut gate = SessionGate::new();
    let armed = scheduled_id(&gate.on_session_event(principal("u1", "a@b.com")));

    let effects = gate.on_timer_fired(armed);
    assert_eq!(gate.status(), AuthStatus::Authenticated);
    assert_eq!(render_kind(gate.status()), GateRender::View);
    assert!(navigations(&effects).is_empty());
}

// =============================================================
// Unauthenticated path
// =============================================================

#[test]
fn missing_principal_settles_to_unauthenticated_and_redirects_once() {
    let mut gate = SessionGate::new();
    let armed = scheduled_id(&gate.on_session_event(None));

    let effects = gate.on_timer_fired(armed);
    assert_eq!(gate.status(), AuthStatus::Unauthenticated);
    assert_eq!(render_kind(gate.status()), GateRender::Nothing);
    assert_eq!(navigations(&effects), vec![("/login", true)]);

    // The fired timer is spent; a duplicate fire must not redirect again.
    assert!(gate.on_timer_fired(armed).is_empty());
}

// =============================================================
// Superseding events
// =============================================================

#[test]
fn later_event_cancels_the_earlier_timer_and_wins() {
    let mut gate = SessionGate::new();
    let first = scheduled_id(&gate.on_session_event(None));

    let effects = gate.on_session_event(principal("u2", "u2@school.pk"));
    assert_eq!(effects[0], GateEffect::CancelTimer(first));
    let second = scheduled_id(&effects);
    assert_ne!(first, second);

    // The superseded timer can no longer fire in the component layer, but a
    // stale fire must be inert even if it somehow arrived.
    assert!(gate.on_timer_fired(first).is_empty());
    assert_eq!(gate.status(), AuthStatus::Pending);

    let effects = gate.on_timer_fired(second);
    assert_eq!(gate.status(), AuthStatus::Authenticated);
    assert!(navigations(&effects).is_empty());
}

#[test]
fn at_most_one_timer_is_outstanding_across_a_burst_of_events() {
    let mut gate = SessionGate::new();
    let mut outstanding = 0usize;
    for session in [None, principal("u1", "a@b.com"), None, None] {
        for effect in gate.on_session_event(session) {
            match effect {
                GateEffect::ScheduleTimer { .. } => outstanding += 1,
                GateEffect::CancelTimer(_) => outstanding -= 1,
                GateEffect::Navigate { .. } => {}
            }
        }
        assert_eq!(outstanding, 1);
    }
}

// =============================================================
// Teardown safety
// =============================================================

#[test]
fn close_before_the_delay_suppresses_the_transition_and_redirect() {
    let mut gate = SessionGate::new();
    let armed = scheduled_id(&gate.on_session_event(None));

    let effects = gate.close();
    assert_eq!(effects, vec![GateEffect::CancelTimer(armed)]);

    assert!(gate.on_timer_fired(armed).is_empty());
    assert_eq!(gate.status(), AuthStatus::Pending);
}

#[test]
fn events_after_close_are_ignored() {
    let mut gate = SessionGate::new();
    assert!(gate.close().is_empty());
    assert!(gate.on_session_event(principal("u1", "a@b.com")).is_empty());
    assert_eq!(gate.status(), AuthStatus::Pending);
}

#[test]
fn close_is_idempotent() {
    let mut gate = SessionGate::new();
    let _ = gate.on_session_event(None);
    assert_eq!(gate.close().len(), 1);
    assert!(gate.close().is_empty());
}

// =============================================================
// Provider that never responds
// =============================================================

#[test]
fn no_event_means_pending_forever_with_no_redirect() {
    let mut gate = SessionGate::new();
    // Nothing ever arrives; a spurious fire for a timer that was never
    // armed must change nothing.
    assert!(gate.on_timer_fired(TimerId(0)).is_empty());
    assert_eq!(gate.status(), AuthStatus::Pending);
    assert_eq!(render_kind(gate.status()), GateRender::Placeholder);
}

// =============================================================
// Re-entrant transitions
// =============================================================

#[test]
fn sign_out_after_authenticated_settles_to_unauthenticated() {
    let mut gate = SessionGate::new();
    let armed = scheduled_id(&gate.on_session_event(principal("u1", "a@b.com")));
    let _ = gate.on_timer_fired(armed);
    assert_eq!(gate.status(), AuthStatus::Authenticated);

    let armed = scheduled_id(&gate.on_session_event(None));
    let effects = gate.on_timer_fired(armed);
    assert_eq!(gate.status(), AuthStatus::Unauthenticated);
    assert_eq!(navigations(&effects), vec![("/login", true)]);
}

#[test]
fn sign_in_after_redirect_settles_back_to_authenticated() {
    let mut gate = SessionGate::new();
    let armed = scheduled_id(&gate.on_session_event(None));
    let _ = gate.on_timer_fired(armed);
    assert_eq!(gate.status(), AuthStatus::Unauthenticated);

    let armed = scheduled_id(&gate.on_session_event(principal("u3", "u3@school.pk")));
    let effects = gate.on_timer_fired(armed);
    assert_eq!(gate.status(), AuthStatus::Authenticated);
    assert!(navigations(&effects).is_empty());
}
