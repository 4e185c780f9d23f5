use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Linear unit in which map coordinates are expressed.
///
/// Unit names that are not recognized are kept as [`MapUnit::Other`], so that conversions can
/// report them as unsupported instead of failing at parse time.
///
/// ```
/// use cartokit_types::geo::MapUnit;
///
/// assert_eq!("DD".parse::<MapUnit>(), Ok(MapUnit::Degree));
/// assert_eq!("furlong".parse::<MapUnit>(), Ok(MapUnit::Other("furlong".into())));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum MapUnit {
    /// Meters.
    Meter,
    /// Degrees of longitude/latitude.
    Degree,
    /// Kilometers.
    Kilometer,
    /// Inches.
    Inch,
    /// Feet.
    Foot,
    /// Any other unit. Conversions do not support it.
    Other(String),
}

impl MapUnit {
    /// Canonical name of the unit.
    pub fn name(&self) -> &str {
        match self {
            MapUnit::Meter => "meter",
            MapUnit::Degree => "degree",
            MapUnit::Kilometer => "kilometer",
            MapUnit::Inch => "inch",
            MapUnit::Foot => "foot",
            MapUnit::Other(name) => name,
        }
    }

    /// Returns true if the unit is angular (degrees).
    pub fn is_angular(&self) -> bool {
        matches!(self, MapUnit::Degree)
    }

    /// Returns false for [`MapUnit::Other`].
    pub fn is_supported(&self) -> bool {
        !matches!(self, MapUnit::Other(_))
    }
}

impl FromStr for MapUnit {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unit = match s.trim().to_lowercase().as_str() {
            "meter" | "meters" | "m" => MapUnit::Meter,
            "degree" | "degrees" | "dd" | "deg" => MapUnit::Degree,
            "kilometer" | "kilometers" | "km" => MapUnit::Kilometer,
            "inch" | "inches" | "in" => MapUnit::Inch,
            "foot" | "feet" | "ft" => MapUnit::Foot,
            _ => MapUnit::Other(s.to_string()),
        };

        Ok(unit)
    }
}

impl From<String> for MapUnit {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(unit) => unit,
            Err(never) => match never {},
        }
    }
}

impl From<MapUnit> for String {
    fn from(value: MapUnit) -> Self {
        match value {
            MapUnit::Other(name) => name,
            unit => unit.name().to_string(),
        }
    }
}

impl Display for MapUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
