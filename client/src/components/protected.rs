//! Route guard mounting its children only for a settled, authenticated
//! session.
//!
//! ARCHITECTURE
//! ============
//! The decision logic lives in [`SessionGate`](crate::state::gate); this
//! component materializes its effects: the settle timer becomes a single
//! `gloo_timers` timeout slot (a superseding event cancels the armed one
//! before a replacement is armed), navigation goes through the router with
//! `replace: true` so back-navigation cannot land on the gated route, and
//! the session subscription plus any armed timer are released in
//! `on_cleanup` on every exit path.
//!
//! While the gate is pending, the guard renders a placeholder; once a
//! principal settles, the children mount; after an unauthenticated
//! settlement it renders nothing, the redirect already issued.

use leptos::prelude::*;

use crate::state::gate::{render_kind, AuthStatus, GateRender};

/// Auth gate wrapping one protected view.
#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let status = RwSignal::new(AuthStatus::Pending);

    #[cfg(feature = "csr")]
    wire_gate(status);

    move || match render_kind(status.get()) {
        GateRender::Placeholder => view! { <div class="gate-placeholder">"Loading..."</div> }
            .into_any(),
        GateRender::View => children().into_any(),
        GateRender::Nothing => ().into_any(),
    }
}

/// Subscribe to the session stream and drive the gate machine for as long
/// as this guard stays mounted.
#[cfg(feature = "csr")]
fn wire_gate(status: RwSignal<AuthStatus>) {
    use std::cell::RefCell;
    use std::rc::Rc;

    use gloo_timers::callback::Timeout;
    use leptos_router::hooks::use_navigate;
    use leptos_router::NavigateOptions;

    use crate::net::session::SessionHub;
    use crate::state::gate::{GateEffect, SessionGate};

    struct Driver {
        gate: RefCell<SessionGate>,
        /// Slot for the one armed settle timer.
        timer: RefCell<Option<Timeout>>,
        status: RwSignal<AuthStatus>,
        navigate: Box<dyn Fn(&str, NavigateOptions)>,
    }

    fn apply(driver: &Rc<Driver>, effects: Vec<GateEffect>) {
        for effect in effects {
            match effect {
                GateEffect::CancelTimer(_) => {
                    if let Some(armed) = driver.timer.take() {
                        armed.cancel();
                    }
                }
                GateEffect::ScheduleTimer { id, delay_ms } => {
                    let fire = Rc::clone(driver);
                    let timeout = Timeout::new(delay_ms, move || {
                        let effects = fire.gate.borrow_mut().on_timer_fired(id);
                        fire.status.set(fire.gate.borrow().status());
                        apply(&fire, effects);
                    });
                    driver.timer.replace(Some(timeout));
                }
                GateEffect::Navigate { path, replace } => {
                    (driver.navigate)(
                        path,
                        NavigateOptions {
                            replace,
                            ..Default::default()
                        },
                    );
                }
            }
        }
    }

    let hub = expect_context::<SessionHub>();
    let navigate = use_navigate();
    let driver = Rc::new(Driver {
        gate: RefCell::new(SessionGate::new()),
        timer: RefCell::new(None),
        status,
        navigate: Box::new(navigate),
    });

    let on_event = Rc::clone(&driver);
    let subscription = hub.subscribe(Rc::new(move |session| {
        let effects = on_event.gate.borrow_mut().on_session_event(session);
        on_event.status.set(on_event.gate.borrow().status());
        apply(&on_event, effects);
    }));

    on_cleanup(move || {
        drop(subscription);
        let _ = driver.gate.borrow_mut().close();
        // Drop the timer slot directly; a spent timeout may still sit here
        // and its closure keeps the driver alive until released.
        if let Some(armed) = driver.timer.take() {
            armed.cancel();
        }
    });
}
