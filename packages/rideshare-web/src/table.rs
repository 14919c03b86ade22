//! Static description of the route table.
//!
//! [`Route`] is what the router matches against. [`ROUTES`] describes the same table as plain
//! data so components can navigate by symbolic name instead of hard-coding paths, and so the
//! table can be checked for duplicate names and overlapping paths.

use std::collections::HashSet;
use std::str::FromStr;

use crate::error::{Result, RouteError};
use crate::Route;

/// Builds the [`Route`] value for an entry from the caller's named parameters.
pub type RouteBuilder = fn(&Params<'_>) -> Result<Route>;

/// One row of the route table: a url pattern, its symbolic name, and the view it renders.
#[derive(Clone, Copy)]
pub struct RouteEntry {
    /// Url pattern. May contain one named parameter segment such as `:id`.
    pub path: &'static str,
    /// Unique identifier used for programmatic navigation.
    pub name: &'static str,
    /// Name of the page component rendered when `path` matches.
    pub view: &'static str,
    build: RouteBuilder,
}

impl RouteEntry {
    /// An entry that describes a route but cannot be navigated to by name.
    pub const fn new(path: &'static str, name: &'static str, view: &'static str) -> Self {
        Self {
            path,
            name,
            view,
            build: not_navigable,
        }
    }

    /// Attach the function that turns named parameters into a [`Route`].
    pub const fn builds(mut self, build: RouteBuilder) -> Self {
        self.build = build;
        self
    }

    /// Find the entry registered under `name`.
    pub fn by_name(name: &str) -> Option<&'static RouteEntry> {
        ROUTES.iter().find(|entry| entry.name == name)
    }

    /// The name of the parameter segment in this entry's path, if it has one.
    pub fn param(&self) -> Option<&'static str> {
        self.path
            .split('/')
            .find_map(|segment| segment.strip_prefix(':'))
    }

    /// Build the route this entry renders from named parameters.
    pub fn build(&self, params: &[(&str, &str)]) -> Result<Route> {
        (self.build)(&Params {
            route: self.name,
            values: params,
        })
    }
}

impl PartialEq for RouteEntry {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path && self.name == other.name && self.view == other.view
    }
}

impl Eq for RouteEntry {}

impl std::fmt::Debug for RouteEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteEntry")
            .field("path", &self.path)
            .field("name", &self.name)
            .field("view", &self.view)
            .finish()
    }
}

fn not_navigable(params: &Params<'_>) -> Result<Route> {
    Err(RouteError::NotNavigable(params.route.to_string()))
}

/// Named parameters handed to a [`RouteBuilder`].
pub struct Params<'a> {
    route: &'static str,
    values: &'a [(&'a str, &'a str)],
}

impl Params<'_> {
    /// The value of parameter `key`, or [`RouteError::MissingParam`].
    pub fn require(&self, key: &'static str) -> Result<String> {
        self.values
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, value)| value.to_string())
            .ok_or(RouteError::MissingParam {
                name: self.route,
                param: key,
            })
    }
}

const BOOKING_SUCCESS: RouteEntry =
    RouteEntry::new("/booking-success", "BookingSuccess", "BookingSuccess")
        .builds(|_| Ok(Route::BookingSuccess {}));
const CREATE_RIDE: RouteEntry = RouteEntry::new("/create-ride", "CreateRide", "CreateRide")
    .builds(|_| Ok(Route::CreateRide {}));
const HOME: RouteEntry = RouteEntry::new("/", "Home", "Home").builds(|_| Ok(Route::Home {}));
const LOGIN: RouteEntry =
    RouteEntry::new("/login", "Login", "Login").builds(|_| Ok(Route::Login {}));
const MESSAGES: RouteEntry =
    RouteEntry::new("/messages", "Messages", "Messages").builds(|_| Ok(Route::Messages {}));
const MY_TRIPS: RouteEntry =
    RouteEntry::new("/my-trips", "MyTrips", "MyTrips").builds(|_| Ok(Route::MyTrips {}));
const REGISTER: RouteEntry =
    RouteEntry::new("/register", "Register", "Register").builds(|_| Ok(Route::Register {}));
const SETTINGS: RouteEntry =
    RouteEntry::new("/settings", "Settings", "Settings").builds(|_| Ok(Route::Settings {}));
// other components already navigate by the lower-case name
const TRIPS: RouteEntry =
    RouteEntry::new("/trips", "trips", "Trips").builds(|_| Ok(Route::Trips {}));
const TRIP_DETAILS: RouteEntry = RouteEntry::new("/trips/:id", "TripDetails", "TripDetails")
    .builds(|params| {
        Ok(Route::TripDetails {
            id: params.require("id")?,
        })
    });

/// Every route of the application, in declaration order.
pub const ROUTES: &[RouteEntry] = &[
    BOOKING_SUCCESS,
    CREATE_RIDE,
    HOME,
    LOGIN,
    MESSAGES,
    MY_TRIPS,
    REGISTER,
    SETTINGS,
    TRIPS,
    TRIP_DETAILS,
];

impl Route {
    /// The table row describing this route.
    pub fn entry(&self) -> &'static RouteEntry {
        match self {
            Route::BookingSuccess {} => &BOOKING_SUCCESS,
            Route::CreateRide {} => &CREATE_RIDE,
            Route::Home {} => &HOME,
            Route::Login {} => &LOGIN,
            Route::Messages {} => &MESSAGES,
            Route::MyTrips {} => &MY_TRIPS,
            Route::Register {} => &REGISTER,
            Route::Settings {} => &SETTINGS,
            Route::Trips {} => &TRIPS,
            Route::TripDetails { .. } => &TRIP_DETAILS,
        }
    }

    /// The symbolic name of this route.
    pub fn name(&self) -> &'static str {
        self.entry().name
    }

    /// Build a route from its symbolic name, filling parameter segments from `params`.
    ///
    /// ```rust
    /// # use rideshare_web::Route;
    /// let route = Route::from_name("TripDetails", &[("id", "42")]).unwrap();
    /// assert_eq!(route.to_string(), "/trips/42");
    /// ```
    pub fn from_name(name: &str, params: &[(&str, &str)]) -> Result<Self> {
        RouteEntry::by_name(name)
            .ok_or_else(|| RouteError::UnknownName(name.to_string()))?
            .build(params)
    }
}

/// Resolve a literal url to the route it renders.
///
/// The query string and fragment are ignored. An empty url is treated as `/`.
pub fn resolve(url: &str) -> Result<Route> {
    let path = url
        .split(['?', '#'])
        .next()
        .filter(|path| !path.is_empty())
        .unwrap_or("/");

    Route::from_str(path).map_err(|err| RouteError::NotFound {
        path: path.to_string(),
        reason: err.to_string(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    Static(&'a str),
    Param(&'a str),
}

impl Segment<'_> {
    fn overlaps(&self, other: &Segment<'_>) -> bool {
        match (self, other) {
            (Segment::Static(a), Segment::Static(b)) => a == b,
            _ => true,
        }
    }
}

fn is_parameterized(segments: &[Segment<'_>]) -> bool {
    segments.iter().any(|s| matches!(s, Segment::Param(_)))
}

fn segments(path: &str) -> Result<Vec<Segment<'_>>> {
    let malformed = |reason| RouteError::MalformedPattern {
        path: path.to_string(),
        reason,
    };

    let rest = path
        .strip_prefix('/')
        .ok_or_else(|| malformed("must start with `/`"))?;
    if rest.is_empty() {
        return Ok(Vec::new());
    }

    let segments = rest
        .split('/')
        .map(|segment| match segment {
            "" => Err(malformed("empty segment")),
            ":" => Err(malformed("unnamed parameter")),
            _ => Ok(match segment.strip_prefix(':') {
                Some(name) => Segment::Param(name),
                None => Segment::Static(segment),
            }),
        })
        .collect::<Result<Vec<_>>>()?;

    let params = segments
        .iter()
        .filter(|segment| matches!(segment, Segment::Param(_)))
        .count();
    if params > 1 {
        return Err(malformed("more than one parameter segment"));
    }

    Ok(segments)
}

/// Check that a route table is usable: names and paths unique, every path well formed, and no
/// two parameterized paths competing for the same url.
///
/// A literal path always wins over a parameterized one, so `/trips/new` next to `/trips/:id` is
/// fine while `/trips/:id` next to `/:section/42` is not.
pub fn validate(entries: &[RouteEntry]) -> Result<()> {
    let mut names = HashSet::new();
    let mut paths = HashSet::new();
    let mut parsed = Vec::with_capacity(entries.len());

    for entry in entries {
        if !names.insert(entry.name) {
            return Err(RouteError::DuplicateName(entry.name.to_string()));
        }
        if !paths.insert(entry.path) {
            return Err(RouteError::DuplicatePath(entry.path.to_string()));
        }
        parsed.push((entry.path, segments(entry.path)?));
    }

    for (i, (first, a)) in parsed.iter().enumerate() {
        for (second, b) in &parsed[i + 1..] {
            if !is_parameterized(a) || !is_parameterized(b) || a.len() != b.len() {
                continue;
            }
            if a.iter().zip(b).all(|(x, y)| x.overlaps(y)) {
                return Err(RouteError::AmbiguousPatterns {
                    first: first.to_string(),
                    second: second.to_string(),
                });
            }
        }
    }

    tracing::trace!(routes = entries.len(), "route table validated");
    Ok(())
}
