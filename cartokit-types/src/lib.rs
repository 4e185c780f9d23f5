//! Geographic primitives shared by `cartokit` crates.
//!
//! * [`MapUnit`](geo::MapUnit) describes the linear unit map coordinates are expressed in,
//! * [`Datum`](geo::Datum) describes the reference ellipsoid,
//! * [`GeoPoint`](geo::GeoPoint) and [`NewGeoPoint`](geo::NewGeoPoint) are the traits for points
//!   in geographic coordinates, with [`GeoPoint2d`](geo::impls::GeoPoint2d) as the default
//!   implementation.

pub mod error;
pub mod geo;
