//! Core game logic for a campus location-guessing quiz.
//!
//! A fixed list of landmark regions is presented one at a time; the player
//! double-clicks a map point and the engine judges the click against the
//! current region, scores it, and advances. Everything here is pure and
//! host-agnostic: map rendering, DOM wiring, timers and persistence live on
//! the other side of the [`session::Command`] / [`session::Event`] boundary.

#[cfg_attr(not(test), allow(unused_imports))]
#[macro_use]
extern crate approx;

pub mod analysis;
pub mod error;
pub mod geometry;
pub mod region;
pub mod session;
pub mod store;

pub use analysis::contains::Contains;
pub use error::ConfigError;
pub use geometry::bounds::Bounds;
pub use geometry::latlng::LatLng;
pub use geometry::polygon::Polygon;
pub use geometry::rotate::Rotate;
pub use region::catalog;
pub use region::{Extent, Region, DEFAULT_RADIUS};
pub use session::{
    Command, Event, MarkerAnimation, MarkerStyle, OverlayStyle, Panel, Phase, Session, TextTarget,
    Transition, ADVANCE_DELAY_SECS,
};
pub use store::{record, MemoryStore, ScoreStore};

/// Parse a log level string into LevelFilter.
pub fn parse_log_level(level: Option<&str>) -> log::LevelFilter {
    match level {
        Some("error") => log::LevelFilter::Error,
        Some("warn") => log::LevelFilter::Warn,
        Some("info") | Some("") | None => log::LevelFilter::Info,
        Some("debug") => log::LevelFilter::Debug,
        Some("trace") => log::LevelFilter::Trace,
        Some(level) => panic!("invalid log level: {}", level),
    }
}
