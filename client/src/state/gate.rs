//! Auth-gate state machine: settle-delayed session evaluation.
//!
//! ARCHITECTURE
//! ============
//! `SessionGate` is the logic core of the `Protected` route guard. It owns a
//! tri-state status and reacts to two inputs — session events from the
//! credential provider and settle-timer fires — by returning effect values
//! the caller materializes (arm/cancel a real timer, navigate). Keeping
//! effects as data lets the full gating contract run under native tests with
//! recorder doubles standing in for the router and the timer host.
//!
//! Each session event buffers its payload and arms a fresh settle timer,
//! cancelling any timer from an earlier event, so at most one evaluation is
//! ever outstanding and the latest event always wins by cancellation rather
//! than by callback ordering. Status keeps re-deciding for the life of the
//! instance: a sign-out event after reaching `Authenticated` walks the gate
//! back through the same settle path.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use crate::net::types::User;

/// Settle delay between receiving a session event and trusting it.
pub const SETTLE_DELAY_MS: u32 = 2_000;

/// Where unauthenticated visitors are sent.
pub const LOGIN_PATH: &str = "/login";

/// Gate status for one mounted guard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthStatus {
    /// No session event has settled yet; the wrapped view is withheld.
    #[default]
    Pending,
    /// A principal settled; the wrapped view is mounted.
    Authenticated,
    /// No principal settled; a login redirect has been issued.
    Unauthenticated,
}

/// What the guard should render for a given status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateRender {
    Placeholder,
    View,
    Nothing,
}

/// Map gate status to render output: placeholder while pending, the wrapped
/// view once authenticated, nothing after the redirect.
#[must_use]
pub fn render_kind(status: AuthStatus) -> GateRender {
    match status {
        AuthStatus::Pending => GateRender::Placeholder,
        AuthStatus::Authenticated => GateRender::View,
        AuthStatus::Unauthenticated => GateRender::Nothing,
    }
}

/// Handle for one armed settle timer.
///
/// Ids are never reused within a gate instance, so a fire from a timer that
/// was already superseded is recognizably stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerId(u64);

/// Side effect requested by the gate; the component layer materializes it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateEffect {
    /// Disarm the named timer before it fires.
    CancelTimer(TimerId),
    /// Arm a settle timer; on expiry call [`SessionGate::on_timer_fired`].
    ScheduleTimer { id: TimerId, delay_ms: u32 },
    /// Route the browser away from the gated view.
    Navigate { path: &'static str, replace: bool },
}

/// State machine gating one mounted protected view.
pub struct SessionGate {
    status: AuthStatus,
    next_timer_id: u64,
    /// The armed timer and the session payload it will evaluate.
    pending: Option<(TimerId, Option<User>)>,
    closed: bool,
}

impl Default for SessionGate {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionGate {
    /// Fresh gate: status starts `Pending`, nothing armed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            status: AuthStatus::Pending,
            next_timer_id: 0,
            pending: None,
            closed: false,
        }
    }

    #[must_use]
    pub fn status(&self) -> AuthStatus {
        self.status
    }

    /// A session event arrived from the provider stream.
    ///
    /// Cancels any outstanding settle timer and arms a fresh one carrying
    /// this event's payload. No status change happens here; the event is
    /// only trusted once the delay elapses.
    #[must_use]
    pub fn on_session_event(&mut self, session: Option<User>) -> Vec<GateEffect> {
        if self.closed {
            return Vec::new();
        }
        let mut effects = Vec::new();
        if let Some((superseded, _)) = self.pending.take() {
            effects.push(GateEffect::CancelTimer(superseded));
        }
        let id = TimerId(self.next_timer_id);
        self.next_timer_id += 1;
        self.pending = Some((id, session));
        effects.push(GateEffect::ScheduleTimer {
            id,
            delay_ms: SETTLE_DELAY_MS,
        });
        effects
    }

    /// A settle timer elapsed. Stale ids and fires after [`close`] are
    /// ignored; the armed timer's payload decides the new status.
    ///
    /// [`close`]: SessionGate::close
    #[must_use]
    pub fn on_timer_fired(&mut self, id: TimerId) -> Vec<GateEffect> {
        if self.closed {
            return Vec::new();
        }
        let Some((armed, session)) = self.pending.take() else {
            return Vec::new();
        };
        if armed != id {
            self.pending = Some((armed, session));
            return Vec::new();
        }
        match session {
            Some(user) => {
                log::info!(
                    "session settled: uid={} email={} display_name={}",
                    user.uid,
                    user.email.as_deref().unwrap_or("-"),
                    user.display_name.as_deref().unwrap_or("-"),
                );
                self.status = AuthStatus::Authenticated;
                Vec::new()
            }
            None => {
                self.status = AuthStatus::Unauthenticated;
                vec![GateEffect::Navigate {
                    path: LOGIN_PATH,
                    replace: true,
                }]
            }
        }
    }

    /// The guard is unmounting: disarm anything outstanding and go inert.
    /// Every later event or fire is a no-op; status never changes again.
    #[must_use]
    pub fn close(&mut self) -> Vec<GateEffect> {
        if self.closed {
            return Vec::new();
        }
        self.closed = true;
        match self.pending.take() {
            Some((armed, _)) => vec![GateEffect::CancelTimer(armed)],
            None => Vec::new(),
        }
    }
}
