//! Conversions between map scale, display resolution, DPI and map units.
//!
//! *Resolution* is the number of map units covered by one pixel, *scale* is the unitless ratio
//! of a distance on the screen to the same distance on the ground (e.g. `1.0 / 50000.0`).
//!
//! ```
//! use cartokit::scale::{resolution_to_scale, scale_to_resolution};
//! use cartokit_types::geo::MapUnit;
//!
//! let scale = resolution_to_scale(13.229166666666666, 96.0, &MapUnit::Meter).unwrap();
//! assert!((1.0 / scale - 50000.0).abs() < 1e-6);
//!
//! let resolution = scale_to_resolution(scale, 96.0, &MapUnit::Meter).unwrap();
//! assert!((resolution - 13.229166666666666).abs() < 1e-9);
//! ```

use cartokit_types::geo::{Datum, MapUnit};
use serde::{Deserialize, Serialize};

use crate::error::CartokitError;

/// Inches in one meter.
pub const INCHES_PER_METER: f64 = 1.0 / 0.0254;

/// Semi-major axis of WGS84 ellipsoid, used when no datum axis is given.
pub const DEFAULT_DATUM_AXIS: f64 = 6_378_137.0;

/// Value returned by [`resolution_from_scale_dpi`] for non-positive scale or dpi.
pub const INVALID_RESOLUTION: f64 = -1.0;

/// DPI of a typical display.
pub const DEFAULT_DPI: f64 = 96.0;

/// Number of meters in one map unit, or `None` if the unit is not supported.
///
/// Degrees are converted as the length of one degree of longitude at the equator of a sphere
/// with WGS84 semi-major axis.
pub fn meters_per_map_unit(unit: &MapUnit) -> Option<f64> {
    let meters = match unit {
        MapUnit::Meter => 1.0,
        MapUnit::Degree => Datum::WGS84.meters_per_degree(),
        MapUnit::Kilometer => 1.0e-3,
        MapUnit::Inch => 1.0 / 2.5399999918e-2,
        MapUnit::Foot => 0.3048,
        MapUnit::Other(_) => return None,
    };

    Some(meters)
}

/// Converts resolution (map units per pixel) into scale.
///
/// Returns `None` if the map unit is not supported.
pub fn resolution_to_scale(resolution: f64, dpi: f64, map_unit: &MapUnit) -> Option<f64> {
    let meters_per_unit = meters_per_map_unit(map_unit)?;
    Some(1.0 / (resolution * dpi * INCHES_PER_METER * meters_per_unit))
}

/// Converts scale into resolution (map units per pixel). Inverse of [`resolution_to_scale`].
///
/// Returns `None` if the map unit is not supported.
pub fn scale_to_resolution(scale: f64, dpi: f64, map_unit: &MapUnit) -> Option<f64> {
    let meters_per_unit = meters_per_map_unit(map_unit)?;
    Some(1.0 / (scale * dpi * INCHES_PER_METER * meters_per_unit))
}

/// Converts a scale given as a denominator (`50000` for `1:50000`) into a ratio. Values that
/// are not greater than `1.0` are returned as is.
pub fn normalize_scale(scale: f64) -> f64 {
    if scale > 1.0 {
        1.0 / scale
    } else {
        scale
    }
}

/// Calculates resolution for the given scale and dpi.
///
/// `scale` can be given either as a ratio or as a denominator. `coord_unit` of `degree`,
/// `degrees` or `dd` (case-insensitive) means angular coordinates, for which the datum axis
/// (WGS84 if `None`) is used to get the length of a degree. All other units are treated as
/// meters.
///
/// Returns [`INVALID_RESOLUTION`] if `scale` or `dpi` are not positive.
pub fn resolution_from_scale_dpi(
    scale: f64,
    dpi: f64,
    coord_unit: &str,
    datum_axis: Option<f64>,
) -> f64 {
    try_resolution_from_scale_dpi(scale, dpi, coord_unit, datum_axis)
        .unwrap_or(INVALID_RESOLUTION)
}

/// Same as [`resolution_from_scale_dpi`], but returns an error instead of the sentinel value.
pub fn try_resolution_from_scale_dpi(
    scale: f64,
    dpi: f64,
    coord_unit: &str,
    datum_axis: Option<f64>,
) -> Result<f64, CartokitError> {
    // Zero and NaN axis fall back to the default too.
    let datum_axis = datum_axis
        .filter(|axis| *axis != 0.0 && !axis.is_nan())
        .unwrap_or(DEFAULT_DATUM_AXIS);

    resolution_for(scale, dpi, is_degree_unit(coord_unit), datum_axis)
}

fn is_degree_unit(coord_unit: &str) -> bool {
    matches!(
        coord_unit.to_lowercase().as_str(),
        "degree" | "degrees" | "dd"
    )
}

fn resolution_for(
    scale: f64,
    dpi: f64,
    angular: bool,
    datum_axis: f64,
) -> Result<f64, CartokitError> {
    if !(scale > 0.0 && dpi > 0.0) {
        log::debug!("Cannot calculate resolution for scale {scale} and dpi {dpi}");
        return Err(CartokitError::InvalidScaleOrDpi { scale, dpi });
    }

    let scale = normalize_scale(scale);
    let resolution = if angular {
        0.0254 / (dpi * scale * Datum::with_semimajor(datum_axis).meters_per_degree())
    } else {
        0.0254 / (dpi * scale)
    };

    Ok(resolution)
}

/// Display and coordinate system parameters needed to convert between scale and resolution.
///
/// ```
/// use cartokit::scale::ScaleContext;
/// use cartokit_types::geo::MapUnit;
///
/// let context = ScaleContext::new(96.0, MapUnit::Meter);
/// let resolutions = context.lod_resolutions(&[50000.0, 25000.0]).unwrap();
/// assert!(resolutions[0] > resolutions[1]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleContext {
    dpi: f64,
    map_unit: MapUnit,
    #[serde(default)]
    datum: Datum,
}

impl Default for ScaleContext {
    fn default() -> Self {
        Self {
            dpi: DEFAULT_DPI,
            map_unit: MapUnit::Meter,
            datum: Datum::WGS84,
        }
    }
}

impl ScaleContext {
    /// Creates a new context with WGS84 datum.
    pub fn new(dpi: f64, map_unit: MapUnit) -> Self {
        Self {
            dpi,
            map_unit,
            datum: Datum::WGS84,
        }
    }

    /// Replaces the datum used for angular units by [`ScaleContext::resolution_for_scale`].
    pub fn with_datum(self, datum: Datum) -> Self {
        Self { datum, ..self }
    }

    /// Pixels per inch.
    pub fn dpi(&self) -> f64 {
        self.dpi
    }

    /// Unit of map coordinates.
    pub fn map_unit(&self) -> &MapUnit {
        &self.map_unit
    }

    /// Datum of the coordinate system.
    pub fn datum(&self) -> Datum {
        self.datum
    }

    /// Scale for the given resolution. See [`resolution_to_scale`].
    pub fn to_scale(&self, resolution: f64) -> Result<f64, CartokitError> {
        resolution_to_scale(resolution, self.dpi, &self.map_unit)
            .ok_or_else(|| CartokitError::UnsupportedUnit(self.map_unit.clone()))
    }

    /// Resolution for the given scale ratio. See [`scale_to_resolution`].
    pub fn to_resolution(&self, scale: f64) -> Result<f64, CartokitError> {
        scale_to_resolution(scale, self.dpi, &self.map_unit)
            .ok_or_else(|| CartokitError::UnsupportedUnit(self.map_unit.clone()))
    }

    /// Resolution in context map units for the given scale, which can be either a ratio or a
    /// denominator. Uses the context datum for angular units. See [`resolution_from_scale_dpi`].
    pub fn resolution_for_scale(&self, scale: f64) -> Result<f64, CartokitError> {
        let meters_per_unit = meters_per_map_unit(&self.map_unit)
            .ok_or_else(|| CartokitError::UnsupportedUnit(self.map_unit.clone()))?;
        let angular = self.map_unit.is_angular();
        let resolution = resolution_for(scale, self.dpi, angular, self.datum.semimajor())?;

        if angular {
            Ok(resolution)
        } else {
            Ok(resolution / meters_per_unit)
        }
    }

    /// Resolutions for a list of scales, one per level of detail, in the same order.
    pub fn lod_resolutions(&self, scales: &[f64]) -> Result<Vec<f64>, CartokitError> {
        let resolutions = scales
            .iter()
            .map(|scale| self.resolution_for_scale(*scale))
            .collect::<Result<Vec<_>, _>>()?;

        log::trace!(
            "Calculated {} resolutions for {} dpi and {} units",
            resolutions.len(),
            self.dpi,
            self.map_unit
        );

        Ok(resolutions)
    }
}
