use serde::{Deserialize, Serialize};

use crate::geo::traits::point::{GeoPoint, NewGeoPoint};

/// 2d point on the surface of the Earth.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct GeoPoint2d {
    lat: f64,
    lon: f64,
}

impl GeoPoint for GeoPoint2d {
    type Num = f64;

    fn lat(&self) -> f64 {
        self.lat
    }

    fn lon(&self) -> f64 {
        self.lon
    }
}

impl NewGeoPoint<f64> for GeoPoint2d {
    fn latlon(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

#[cfg(feature = "geojson")]
impl TryFrom<geojson::Position> for GeoPoint2d {
    type Error = crate::error::CartoTypesError;

    fn try_from(value: geojson::Position) -> Result<Self, Self::Error> {
        match value[..] {
            [lon, lat, ..] => Ok(Self::latlon(lat, lon)),
            _ => Err(crate::error::CartoTypesError::Conversion(
                "point must contain at least 2 dimensions".to_string(),
            )),
        }
    }
}

/// Creates a new GeoPoint2d from latitude and longitude values (in degrees).
///
/// ```
/// use cartokit_types::geo::GeoPoint;
/// use cartokit_types::latlon;
///
/// let point = latlon!(38.0, 52.0);
/// assert_eq!(point.lat(), 38.0);
/// ```
#[macro_export]
macro_rules! latlon {
    ($lat:expr, $lon:expr) => {
        <::cartokit_types::geo::impls::GeoPoint2d as ::cartokit_types::geo::NewGeoPoint<f64>>::latlon(
            $lat, $lon,
        )
    };
}
