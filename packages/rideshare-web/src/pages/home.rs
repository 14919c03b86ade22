use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "home",
            h1 { "Share the ride" }
            p { "Find someone heading your way, or offer the empty seats in your car." }
            Link { class: "cta", to: Route::Trips {}, "Find a ride" }
            Link { class: "cta", to: Route::CreateRide {}, "Offer a ride" }
        }
    }
}
