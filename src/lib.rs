#![deny(clippy::all)]
#![forbid(unsafe_code)]

// FIXME: When derive_builder supports Rust 2018 syntax switch to a local import
#[macro_use]
extern crate derive_builder;

pub mod error;
pub mod feed;
pub mod geo;
pub mod logger;
pub mod notam;
pub mod polygon;

pub use error::{Error, Result};
pub use feed::{ingest, parse_restrictions, Fetch, FileFetcher, HttpFetcher, DEFAULT_PIB_URL};
pub use geo::LatLon;
pub use notam::{Restriction, RestrictionKind, Shape};
