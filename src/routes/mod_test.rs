use super::*;

#[test]
fn route_names_round_trip_through_strings() {
    for name in RouteName::ALL {
        assert_eq!(name.as_str().parse::<RouteName>(), Ok(name));
        assert_eq!(name.to_string(), name.as_str());
    }
}

#[test]
fn book_detail_keeps_deployed_casing() {
    assert_eq!(RouteName::BookDetail.as_str(), "BookDetail");
    assert_eq!(
        "bookDetail".parse::<RouteName>(),
        Err(UnknownRouteName("bookDetail".to_owned()))
    );
}

#[test]
fn only_login_and_signup_are_auth_flow() {
    let auth: Vec<_> = RouteName::ALL.into_iter().filter(|n| n.is_auth_flow()).collect();
    assert_eq!(auth, vec![RouteName::Login, RouteName::Signup]);
}
