//! Points in geographic coordinates (latitude and longitude) (see [`GeoPoint`]), reference
//! ellipsoids (see [`Datum`]) and units of map coordinates (see [`MapUnit`]).

mod datum;
pub mod impls;
mod traits;
mod unit;

pub use datum::Datum;
pub use traits::point::{GeoPoint, NewGeoPoint};
pub use unit::MapUnit;
