use dioxus::prelude::*;

use crate::error::{Result, RouteError};
use crate::Route;

/// Navigate to the route registered under `name`.
///
/// Must be called from inside a component rendered by `Router::<Route>`, typically from an event
/// handler.
pub fn push_named(name: &str, params: &[(&str, &str)]) -> Result<()> {
    let route = Route::from_name(name, params)?;
    tracing::debug!(name, path = %route, "navigating by name");

    if navigator().push(route).is_some() {
        tracing::warn!(name, "navigation by name failed");
        return Err(RouteError::NavigationFailed {
            name: name.to_string(),
        });
    }

    Ok(())
}
