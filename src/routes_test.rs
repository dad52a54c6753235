use super::*;

#[test]
fn parse_known_paths() {
    assert_eq!(Route::parse("/"), Some(Route::Landing));
    assert_eq!(Route::parse("/login"), Some(Route::Login));
    assert_eq!(Route::parse("/dashboard"), Some(Route::Dashboard));
    assert_eq!(Route::parse("/clauses"), Some(Route::Clauses));
}

#[test]
fn parse_tolerates_trailing_slash() {
    assert_eq!(Route::parse("/upload/"), Some(Route::Upload));
}

#[test]
fn parse_unknown_is_none() {
    assert_eq!(Route::parse("/admin"), None);
    assert_eq!(Route::parse(""), None);
    assert_eq!(Route::parse("upload"), None);
    assert_eq!(Route::parse("/upload//"), None);
}

#[test]
fn every_route_round_trips_through_its_path() {
    for route in Route::ALL {
        assert_eq!(Route::parse(route.path()), Some(route));
    }
}

#[test]
fn only_upload_and_dashboard_are_protected() {
    let protected: Vec<Route> = Route::ALL.into_iter().filter(|r| r.is_protected()).collect();
    assert_eq!(protected, vec![Route::Upload, Route::Dashboard]);
}

#[test]
fn redirect_targets_are_known_routes() {
    assert_eq!(Route::parse(LOGIN_ROUTE), Some(Route::Login));
    assert_eq!(Route::parse(POST_LOGIN_ROUTE), Some(Route::Upload));
    assert_eq!(Route::parse(POST_SIGN_OUT_ROUTE), Some(Route::Landing));
}
