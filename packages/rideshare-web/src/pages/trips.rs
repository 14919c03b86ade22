use dioxus::prelude::*;

use crate::navigation::push_named;
use crate::Route;

#[component]
pub fn Trips() -> Element {
    rsx! {
        section { class: "trips",
            h1 { "Available trips" }
            p { "Pick a trip to see the driver, the route, and the seats left." }
        }
    }
}

#[component]
pub fn TripDetails(id: String) -> Element {
    rsx! {
        section { class: "trip-details",
            h1 { "Trip {id}" }
            Link { to: Route::BookingSuccess {}, "Book a seat" }
            Link { to: Route::Trips {}, "Back to all trips" }
        }
    }
}

#[component]
pub fn MyTrips() -> Element {
    rsx! {
        section { class: "my-trips",
            h1 { "My trips" }
        }
    }
}

#[component]
pub fn CreateRide() -> Element {
    rsx! {
        section { class: "create-ride",
            h1 { "Offer a ride" }
        }
    }
}

#[component]
pub fn BookingSuccess() -> Element {
    rsx! {
        section { class: "booking-success",
            h1 { "Your seat is booked" }
            button {
                onclick: move |_| {
                    if let Err(err) = push_named("MyTrips", &[]) {
                        tracing::error!("{err}");
                    }
                },
                "See my trips"
            }
        }
    }
}
