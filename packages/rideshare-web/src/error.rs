use thiserror::Error;

pub type Result<T, E = RouteError> = std::result::Result<T, E>;

/// Everything that can go wrong while looking up, building, or validating routes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// No route in the table matches the requested url.
    #[error("no route matches `{path}`: {reason}")]
    NotFound { path: String, reason: String },

    /// Navigation was requested by a symbolic name that is not in the table.
    #[error("no route is named `{0}`")]
    UnknownName(String),

    /// The entry describes a route but has no way to build it from a name.
    #[error("route `{0}` cannot be navigated to by name")]
    NotNavigable(String),

    /// The router refused to navigate to the route registered under this name.
    #[error("navigation to route `{name}` failed")]
    NavigationFailed { name: String },

    /// The named route has a parameter segment that the caller did not supply.
    #[error("route `{name}` requires parameter `{param}`")]
    MissingParam {
        name: &'static str,
        param: &'static str,
    },

    #[error("route name `{0}` is declared more than once")]
    DuplicateName(String),

    #[error("route path `{0}` is declared more than once")]
    DuplicatePath(String),

    #[error("route path `{path}` is malformed: {reason}")]
    MalformedPattern { path: String, reason: &'static str },

    /// Two parameterized patterns can both match the same url.
    #[error("route paths `{first}` and `{second}` match the same urls")]
    AmbiguousPatterns { first: String, second: String },
}

/// Failures while loading [`AppConfig`](crate::AppConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unknown log level `{0}`")]
    InvalidLogLevel(String),

    /// The browser history takes its prefix from the deployment, not from this config.
    #[error("base path `{0}` is only supported with the memory history")]
    BasePathRequiresMemoryHistory(String),

    #[error("initial path `{path}` is not a route: {source}")]
    InvalidInitialPath {
        path: String,
        #[source]
        source: RouteError,
    },
}
