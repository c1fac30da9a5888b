//! Navigation gate evaluated before every route transition.
//!
//! SYSTEM CONTEXT
//! ==============
//! The router hands each transition attempt to [`NavigationGate::guard`]
//! before the target view renders. The gate keeps signed-in users out of the
//! login/signup flow by redirecting them home with a notice. Every other
//! navigation proceeds, including to routes such as `profile` that have no
//! session requirement.
//!
//! DESIGN
//! ======
//! Session state and the notice channel are ports injected at construction,
//! so [`decide`] stays a pure function of `(target, session_present)` and the
//! gate is testable without a browser. A [`Continuation`] is consumed by value
//! and therefore resolved exactly once.


use crate::config::GateConfig;
use crate::routes::RouteName;

/// Reports whether the current visitor holds a session.
///
/// Implementations must re-read their backing state on every call.
pub trait SessionProvider {
    fn session_present(&self) -> bool;
}

/// Delivers a user-facing notice.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Outcome of gating one navigation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Proceed,
    RedirectTo(RouteName),
}

/// Router-side handle that finalizes a transition.
pub trait Continuation {
    /// Let the transition complete.
    fn proceed(self);
    /// Abort the transition and navigate to `target` instead.
    fn redirect(self, target: RouteName);
}

impl Decision {
    /// Resolve `continuation` according to this decision.
    pub fn resolve<C: Continuation>(self, continuation: C) {
        match self {
            Decision::Proceed => continuation.proceed(),
            Decision::RedirectTo(target) => continuation.redirect(target),
        }
    }
}

/// One transition attempt as delivered by the router.
#[derive(Debug)]
pub struct NavigationRequest<C> {
    pub target: RouteName,
    /// `None` on the initial page load.
    pub origin: Option<RouteName>,
    pub continuation: C,
}

/// Pure gate rule: signed-in visitors are sent home from login and signup.
pub fn decide(target: RouteName, session_present: bool) -> Decision {
    if session_present && target.is_auth_flow() {
        Decision::RedirectTo(RouteName::Home)
    } else {
        Decision::Proceed
    }
}

#[derive(Clone, Debug)]
pub struct NavigationGate<S, N> {
    session: S,
    notifier: N,
    notice: String,
}

impl<S: SessionProvider, N: Notifier> NavigationGate<S, N> {
    pub fn new(session: S, notifier: N, config: &GateConfig) -> Self {
        Self {
            session,
            notifier,
            notice: config.already_logged_in_notice.clone(),
        }
    }

    /// Decide for `target` using fresh session state, notifying on redirect.
    pub fn evaluate(&self, target: RouteName) -> Decision {
        let decision = decide(target, self.session.session_present());
        if matches!(decision, Decision::RedirectTo(_)) {
            self.notifier.notify(&self.notice);
        }
        decision
    }

    /// Gate `request` and resolve its continuation.
    pub fn guard<C: Continuation>(&self, request: NavigationRequest<C>) -> Decision {
        let NavigationRequest { target, origin, continuation } = request;
        let decision = self.evaluate(target);
        if let Decision::RedirectTo(to) = decision {
            let origin = origin.map_or("(initial load)", RouteName::as_str);
            leptos::logging::log!("navigation gate: {origin} -> {target} redirected to {to}");
        }
        decision.resolve(continuation);
        decision
    }
}
