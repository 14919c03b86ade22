use dioxus::prelude::*;

use crate::{AppConfig, Route};

/// The application root.
///
/// Reads [`AppConfig`] from context, installs the configured history, and mounts the router over
/// the [`Route`] table.
#[component]
pub fn App() -> Element {
    let config = try_use_context::<AppConfig>().unwrap_or_default();

    use_hook(|| {
        if let Some(history) = config.history_provider() {
            tracing::debug!(history = ?config.history, "installing history provider");
            provide_context(history);
        }
    });

    rsx! {
        Router::<Route> {}
    }
}
