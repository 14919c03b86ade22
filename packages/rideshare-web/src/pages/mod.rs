//! Page views, one per route.
//!
//! These are the render targets of [`Route`](crate::Route). Data fetching, authentication, and
//! booking logic live outside this crate, so each page only lays out its heading and the links
//! that lead to neighbouring pages.

mod account;
mod home;
mod messages;
mod trips;

pub use account::{Login, Register, Settings};
pub use home::Home;
pub use messages::Messages;
pub use trips::{BookingSuccess, CreateRide, MyTrips, TripDetails, Trips};
