use dioxus::prelude::Routable;
use pretty_assertions::assert_eq;
use rideshare_web::{resolve, validate, Route, RouteEntry, RouteError, ROUTES};
use std::collections::HashSet;

fn trip(id: &str) -> Route {
    Route::TripDetails { id: id.to_string() }
}

#[test]
fn every_declared_path_resolves_to_its_own_entry() {
    for entry in ROUTES {
        let url = entry.path.replace(":id", "17");
        let route = resolve(&url).unwrap_or_else(|err| panic!("{url}: {err}"));
        assert_eq!(route.name(), entry.name, "{url}");
        assert_eq!(route.entry(), entry);
    }
}

#[test]
fn table_keeps_declaration_order() {
    let paths: Vec<_> = ROUTES.iter().map(|entry| entry.path).collect();
    assert_eq!(
        paths,
        [
            "/booking-success",
            "/create-ride",
            "/",
            "/login",
            "/messages",
            "/my-trips",
            "/register",
            "/settings",
            "/trips",
            "/trips/:id",
        ]
    );
}

#[test]
fn names_are_pairwise_distinct() {
    let names: HashSet<_> = ROUTES.iter().map(|entry| entry.name).collect();
    assert_eq!(names.len(), ROUTES.len());
    assert_eq!(validate(ROUTES), Ok(()));
}

#[test]
fn parameterized_path_extracts_id() {
    assert_eq!(resolve("/trips/42").unwrap(), trip("42"));
    assert_eq!(resolve("/trips").unwrap(), Route::Trips {});
    assert_ne!(resolve("/trips/42").unwrap().name(), "trips");
}

#[test]
fn name_and_literal_url_agree() {
    let by_name = Route::from_name("Login", &[]).unwrap();
    assert_eq!(by_name, resolve("/login").unwrap());
    assert_eq!(by_name.to_string(), "/login");

    let by_name = Route::from_name("TripDetails", &[("id", "42")]).unwrap();
    assert_eq!(by_name, resolve("/trips/42").unwrap());
    assert_eq!(by_name.to_string(), "/trips/42");
}

#[test]
fn every_name_builds_its_route() {
    for entry in ROUTES {
        let params: Vec<_> = entry.param().map(|p| (p, "9")).into_iter().collect();
        let route = Route::from_name(entry.name, &params).unwrap();
        assert_eq!(route.entry(), entry);
    }
}

#[test]
fn static_routes_display_their_path() {
    for entry in ROUTES.iter().filter(|entry| entry.param().is_none()) {
        let route = Route::from_name(entry.name, &[]).unwrap();
        assert_eq!(route.to_string(), entry.path);
    }
}

#[test]
fn lowercase_trips_name_is_kept() {
    assert_eq!(Route::Trips {}.name(), "trips");
    assert_eq!(Route::from_name("trips", &[]).unwrap(), Route::Trips {});
    assert_eq!(
        Route::from_name("Trips", &[]),
        Err(RouteError::UnknownName("Trips".into()))
    );
}

#[test]
fn missing_param_is_reported() {
    assert_eq!(
        Route::from_name("TripDetails", &[("trip", "42")]),
        Err(RouteError::MissingParam {
            name: "TripDetails",
            param: "id",
        })
    );
}

#[test]
fn unknown_page_is_not_found() {
    // no catch-all route is declared; the mounted router falls back to home instead
    let err = resolve("/unknown-page").unwrap_err();
    assert!(
        matches!(&err, RouteError::NotFound { path, .. } if path == "/unknown-page"),
        "{err:?}"
    );
    assert!(resolve("/trips/42/seats").is_err());
}

#[test]
fn query_and_fragment_are_ignored() {
    assert_eq!(resolve("/login?next=/my-trips").unwrap(), Route::Login {});
    assert_eq!(resolve("/trips/42#map").unwrap(), trip("42"));
    assert_eq!(resolve("").unwrap(), Route::Home {});
    assert_eq!(resolve("?ref=mail").unwrap(), Route::Home {});
}

#[test]
fn trailing_slashes_parse() {
    assert_eq!(resolve("/settings/").unwrap(), Route::Settings {});
    assert_eq!(resolve("/my-trips/").unwrap(), Route::MyTrips {});
    assert_eq!(resolve("/trips/42/").unwrap(), trip("42"));
}

#[test]
fn encoded_ids_are_decoded() {
    assert_eq!(resolve("/trips/a%20b").unwrap(), trip("a b"));
}

#[test]
fn table_matches_router_static_routes() {
    let mut from_router: Vec<_> = Route::static_routes()
        .iter()
        .map(|route| route.to_string())
        .collect();
    let mut from_table: Vec<_> = ROUTES
        .iter()
        .filter(|entry| entry.param().is_none())
        .map(|entry| entry.path.to_string())
        .collect();
    from_router.sort();
    from_table.sort();
    assert_eq!(from_router, from_table);
}

#[test]
fn names_resolve_through_their_entry() {
    for entry in ROUTES {
        assert_eq!(RouteEntry::by_name(entry.name), Some(entry));
    }
    assert_eq!(RouteEntry::by_name("Checkout"), None);
}

#[test]
fn validation_rejects_duplicates() {
    let names = [
        RouteEntry::new("/a", "Same", "A"),
        RouteEntry::new("/b", "Same", "B"),
    ];
    assert_eq!(validate(&names), Err(RouteError::DuplicateName("Same".into())));

    let paths = [
        RouteEntry::new("/a", "A", "A"),
        RouteEntry::new("/a", "B", "B"),
    ];
    assert_eq!(validate(&paths), Err(RouteError::DuplicatePath("/a".into())));
}

#[test]
fn validation_rejects_ambiguous_params() {
    let entries = [
        RouteEntry::new("/trips/:id", "TripDetails", "TripDetails"),
        RouteEntry::new("/:section/42", "Section", "Section"),
    ];
    assert_eq!(
        validate(&entries),
        Err(RouteError::AmbiguousPatterns {
            first: "/trips/:id".into(),
            second: "/:section/42".into(),
        })
    );
}

#[test]
fn validation_rejects_malformed_paths() {
    let entries = [RouteEntry::new("trips", "Trips", "Trips")];
    assert!(matches!(
        validate(&entries),
        Err(RouteError::MalformedPattern { .. })
    ));
}
