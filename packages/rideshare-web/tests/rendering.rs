use dioxus::prelude::*;
use rideshare_web::{App, AppConfig, HistoryMode};

fn render_at(path: &str) -> String {
    let config = AppConfig::default().with_history(HistoryMode::memory(path));
    let mut dom = VirtualDom::new(App).with_root_context(config);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[test]
fn home_renders_inside_shell() {
    let html = render_at("/");
    assert!(html.contains("Share the ride"), "{html}");
    assert!(html.contains(r#"href="/trips""#), "{html}");
    assert!(html.contains(r#"href="/login""#), "{html}");
}

#[test]
fn trip_details_receives_id() {
    let html = render_at("/trips/42");
    assert!(html.contains("Trip 42"), "{html}");
    assert!(!html.contains("Available trips"), "{html}");
}

#[test]
fn trips_list_does_not_render_details() {
    let html = render_at("/trips");
    assert!(html.contains("Available trips"), "{html}");
    assert!(!html.contains("Trip 42"), "{html}");
}

#[test]
fn every_static_page_renders_its_heading() {
    let pages = [
        ("/booking-success", "Your seat is booked"),
        ("/create-ride", "Offer a ride"),
        ("/login", "Log in"),
        ("/messages", "Messages"),
        ("/my-trips", "My trips"),
        ("/register", "Create an account"),
        ("/settings", "Settings"),
    ];

    for (path, heading) in pages {
        let html = render_at(path);
        assert!(html.contains(&format!("<h1>{heading}</h1>")), "{path}: {html}");
    }
}

#[test]
fn trip_details_links_to_booking() {
    let html = render_at("/trips/7");
    assert!(html.contains(r#"href="/booking-success""#), "{html}");
}

#[test]
fn unknown_page_falls_back_to_home() {
    let html = render_at("/unknown-page");
    assert!(html.contains("Share the ride"), "{html}");
    assert!(html.contains(r#"href="/" aria-current="page""#), "{html}");
}
