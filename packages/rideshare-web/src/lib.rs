#![doc = include_str!("../README.md")]

mod app;
mod config;
mod error;
mod navigation;
mod pages;
mod route;
mod table;

pub use app::App;
pub use config::{AppConfig, HistoryMode};
pub use error::{ConfigError, Result, RouteError};
pub use navigation::push_named;
pub use route::Route;
pub use table::{resolve, validate, Params, RouteBuilder, RouteEntry, ROUTES};
