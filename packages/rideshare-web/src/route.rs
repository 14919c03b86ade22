//! The route table of the rideshare front-end.
//!
//! [`Route`] is the single canonical table handed to `Router::<Route>`. Each variant maps a url
//! pattern to the page component of the same name. Adding a page means appending a variant here
//! and an entry to [`ROUTES`](crate::ROUTES).

use dioxus::prelude::*;

use crate::pages::{
    BookingSuccess, CreateRide, Home, Login, Messages, MyTrips, Register, Settings, TripDetails,
    Trips,
};

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/booking-success")]
        BookingSuccess {},
        #[route("/create-ride")]
        CreateRide {},
        #[route("/")]
        Home {},
        #[route("/login")]
        Login {},
        #[route("/messages")]
        Messages {},
        #[route("/my-trips")]
        MyTrips {},
        #[route("/register")]
        Register {},
        #[route("/settings")]
        Settings {},
        #[route("/trips")]
        Trips {},
        #[route("/trips/:id")]
        TripDetails { id: String },
}

/// Layout shared by every page: the navigation bar above the current page.
#[component]
fn Shell() -> Element {
    let route = use_route::<Route>();
    tracing::debug!(name = route.name(), path = %route, "rendering route");

    rsx! {
        nav { class: "navbar",
            ul {
                li { Link { to: Route::Home {}, "Home" } }
                li { Link { to: Route::Trips {}, "Find a ride" } }
                li { Link { to: Route::CreateRide {}, "Offer a ride" } }
                li { Link { to: Route::MyTrips {}, "My trips" } }
                li { Link { to: Route::Messages {}, "Messages" } }
                li { Link { to: Route::Settings {}, "Settings" } }
                li { Link { to: Route::Login {}, "Log in" } }
            }
        }
        main { Outlet::<Route> {} }
    }
}
