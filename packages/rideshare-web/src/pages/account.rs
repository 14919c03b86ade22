use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Login() -> Element {
    rsx! {
        section { class: "login",
            h1 { "Log in" }
            p {
                "New here? "
                Link { to: Route::Register {}, "Create an account" }
            }
        }
    }
}

#[component]
pub fn Register() -> Element {
    rsx! {
        section { class: "register",
            h1 { "Create an account" }
            p {
                "Already registered? "
                Link { to: Route::Login {}, "Log in" }
            }
        }
    }
}

#[component]
pub fn Settings() -> Element {
    rsx! {
        section { class: "settings",
            h1 { "Settings" }
        }
    }
}
