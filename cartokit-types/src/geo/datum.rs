use serde::{Deserialize, Serialize};

/// Reference ellipsoid used to approximate the shape of the Earth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Datum {
    semimajor: f64,
    inv_flattening: f64,
}

impl Datum {
    /// WGS84 ellipsoid.
    pub const WGS84: Self = Datum {
        semimajor: 6_378_137.0,
        inv_flattening: 298.257223563,
    };

    /// Sphere with the given radius in meters. Scale calculations only use the axis length.
    pub fn with_semimajor(semimajor: f64) -> Self {
        Self {
            semimajor,
            inv_flattening: 0.0,
        }
    }

    /// Length of the semi-major axis in meters.
    pub fn semimajor(&self) -> f64 {
        self.semimajor
    }

    /// Inverse flattening. Zero for a sphere.
    pub fn inv_flattening(&self) -> f64 {
        self.inv_flattening
    }

    /// Length of one degree of longitude at the equator, in meters.
    pub fn meters_per_degree(&self) -> f64 {
        std::f64::consts::PI * 2.0 * self.semimajor / 360.0
    }
}

impl Default for Datum {
    fn default() -> Self {
        Self::WGS84
    }
}
