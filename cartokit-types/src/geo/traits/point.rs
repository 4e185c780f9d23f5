use num_traits::{Float, NumCast};

/// A point on the surface of the Earth, in degrees.
pub trait GeoPoint {
    /// Numeric type used to represent coordinates.
    type Num: Float;

    /// Latitude in degrees.
    fn lat(&self) -> Self::Num;
    /// Longitude in degrees.
    fn lon(&self) -> Self::Num;

    /// Returns true if the longitude is inside `(-180, 180)` and the latitude inside `(-90, 90)`.
    ///
    /// Both bounds are exclusive, and NaN coordinates are never in range.
    fn is_in_range(&self) -> bool {
        let lon_limit: Self::Num = NumCast::from(180.0).unwrap_or_else(Float::max_value);
        let lat_limit: Self::Num = NumCast::from(90.0).unwrap_or_else(Float::max_value);
        self.lon().abs() < lon_limit && self.lat().abs() < lat_limit
    }
}

/// Geographic point that can be constructed from coordinates.
pub trait NewGeoPoint<N = f64>: GeoPoint<Num = N> + Sized {
    /// Creates a point from latitude and longitude.
    fn latlon(lat: N, lon: N) -> Self;
    /// Creates a point from longitude and latitude.
    fn lonlat(lon: N, lat: N) -> Self {
        Self::latlon(lat, lon)
    }
}
