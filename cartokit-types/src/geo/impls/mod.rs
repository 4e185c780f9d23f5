//! Default implementations of the geographic traits.

mod point;

pub use point::GeoPoint2d;
