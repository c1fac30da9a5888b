use super::*;

#[test]
fn link_href_without_table_reports_missing_table() {
    assert_eq!(
        link_href(None, RouteName::Search, &Params::new()),
        Err(LinkError::NoTable(RouteName::Search))
    );
}

#[test]
fn link_href_builds_paths_from_the_table() {
    let table = RouteTable::standard().unwrap();
    let params = Params::from([("isbn".to_owned(), "9788936434120".to_owned())]);
    assert_eq!(
        link_href(Some(&table), RouteName::BookDetail, &params),
        Ok("/book/9788936434120".to_owned())
    );
}

#[test]
fn link_href_passes_table_errors_through() {
    let table = RouteTable::standard().unwrap();
    assert!(matches!(
        link_href(Some(&table), RouteName::BookDetail, &Params::new()),
        Err(LinkError::Table(RouteTableError::Link { name: RouteName::BookDetail, .. }))
    ));
}
