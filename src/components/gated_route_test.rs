use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::routes::{RouteDef, ViewLoading};

type Calls = Rc<RefCell<Vec<(String, bool)>>>;

fn recording_navigate(calls: &Calls) -> impl Fn(&str, NavigateOptions) + use<> {
    let calls = Rc::clone(calls);
    move |path: &str, options: NavigateOptions| calls.borrow_mut().push((path.to_owned(), options.replace))
}

#[test]
fn redirect_replaces_history_with_target_href() {
    let table = RouteTable::standard().unwrap();
    let calls = Calls::default();
    RouterContinuation::new(&table, recording_navigate(&calls)).redirect(RouteName::Home);
    assert_eq!(*calls.borrow(), vec![("/".to_owned(), true)]);
}

#[test]
fn proceed_does_not_navigate() {
    let table = RouteTable::standard().unwrap();
    let calls = Calls::default();
    RouterContinuation::new(&table, recording_navigate(&calls)).proceed();
    assert!(calls.borrow().is_empty());
}

#[test]
fn redirect_to_undeclared_route_does_not_navigate() {
    let table = RouteTable::new(&[RouteDef {
        name: RouteName::Login,
        path: "/login",
        loading: ViewLoading::Eager,
        view: not_found,
    }])
    .unwrap();
    let calls = Calls::default();
    RouterContinuation::new(&table, recording_navigate(&calls)).redirect(RouteName::Home);
    assert!(calls.borrow().is_empty());
}

#[test]
fn gate_decision_drives_router_continuation() {
    use crate::config::GateConfig;
    use crate::gate::{NavigationGate, Notifier, SessionProvider};

    struct SignedIn;
    impl SessionProvider for SignedIn {
        fn session_present(&self) -> bool {
            true
        }
    }
    struct Silent;
    impl Notifier for Silent {
        fn notify(&self, _message: &str) {}
    }

    let table = RouteTable::standard().unwrap();
    let gate = NavigationGate::new(SignedIn, Silent, &GateConfig::default());
    let calls = Calls::default();

    let decision = gate.guard(NavigationRequest {
        target: RouteName::Signup,
        origin: None,
        continuation: RouterContinuation::new(&table, recording_navigate(&calls)),
    });
    assert_eq!(decision, Decision::RedirectTo(RouteName::Home));

    let decision = gate.guard(NavigationRequest {
        target: RouteName::Search,
        origin: Some(RouteName::Home),
        continuation: RouterContinuation::new(&table, recording_navigate(&calls)),
    });
    assert_eq!(decision, Decision::Proceed);
    assert_eq!(*calls.borrow(), vec![("/".to_owned(), true)]);
}

#[test]
fn page_body_waits_for_a_client_side_decision() {
    assert!(!shows_page(None));
    assert!(!shows_page(Some(Decision::RedirectTo(RouteName::Home))));
    assert!(shows_page(Some(Decision::Proceed)));
}
