use dioxus::prelude::*;

#[component]
pub fn Messages() -> Element {
    rsx! {
        section { class: "messages",
            h1 { "Messages" }
            p { "Conversations with drivers and passengers show up here." }
        }
    }
}
