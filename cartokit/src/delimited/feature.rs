use cartokit_types::geo::{GeoPoint, NewGeoPoint};
use indexmap::IndexMap;
use serde::Serialize;

use crate::error::CartokitError;

/// Collection of point features read from delimited text.
///
/// Serializes into a GeoJSON `FeatureCollection`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "type", rename = "FeatureCollection")]
pub struct ParsedFeatureCollection {
    /// Features in the order of the source lines.
    pub features: Vec<ParsedFeature>,
}

/// Point feature with string attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct ParsedFeature {
    /// Location of the feature.
    pub geometry: PointGeometry,
    /// Attribute values by sanitized column name, in the order of the columns.
    pub properties: IndexMap<String, String>,
}

/// Point geometry with `[longitude, latitude]` coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Point")]
pub struct PointGeometry {
    /// Longitude and latitude in degrees.
    pub coordinates: [f64; 2],
}

impl GeoPoint for PointGeometry {
    type Num = f64;

    fn lat(&self) -> f64 {
        self.coordinates[1]
    }

    fn lon(&self) -> f64 {
        self.coordinates[0]
    }
}

impl NewGeoPoint<f64> for PointGeometry {
    fn latlon(lat: f64, lon: f64) -> Self {
        Self {
            coordinates: [lon, lat],
        }
    }
}

impl ParsedFeature {
    /// Creates a feature without attributes.
    pub fn new(geometry: PointGeometry) -> Self {
        Self {
            geometry,
            properties: IndexMap::new(),
        }
    }

    /// Value of the attribute with the given sanitized name.
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }
}

impl ParsedFeatureCollection {
    /// Number of features.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Returns true if there are no features in the collection.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Serializes the collection as GeoJSON text.
    pub fn to_geojson_string(&self) -> Result<String, CartokitError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl FromIterator<ParsedFeature> for ParsedFeatureCollection {
    fn from_iter<T: IntoIterator<Item = ParsedFeature>>(iter: T) -> Self {
        Self {
            features: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn point_coordinates_order() {
        let point = PointGeometry::latlon(20.0, 10.0);
        assert_eq!(point.coordinates, [10.0, 20.0]);
        assert_eq!(point.lon(), 10.0);
        assert_eq!(point.lat(), 20.0);
    }

    #[test]
    fn serialize_as_geojson() {
        let mut feature = ParsedFeature::new(PointGeometry::lonlat(10.0, 20.5));
        feature
            .properties
            .insert("name".to_string(), "A".to_string());
        let collection: ParsedFeatureCollection = [feature].into_iter().collect();

        assert_snapshot!(collection.to_geojson_string().unwrap(), @r#"{"type":"FeatureCollection","features":[{"type":"Feature","geometry":{"type":"Point","coordinates":[10.0,20.5]},"properties":{"name":"A"}}]}"#);
    }

    #[test]
    fn properties_are_serialized_in_insertion_order() {
        let mut feature = ParsedFeature::new(PointGeometry::lonlat(1.0, 2.0));
        feature.properties.insert("zeta".to_string(), "z".to_string());
        feature.properties.insert("alpha".to_string(), "a".to_string());
        let collection: ParsedFeatureCollection = [feature].into_iter().collect();

        assert_snapshot!(collection.to_geojson_string().unwrap(), @r#"{"type":"FeatureCollection","features":[{"type":"Feature","geometry":{"type":"Point","coordinates":[1.0,2.0]},"properties":{"zeta":"z","alpha":"a"}}]}"#);
    }

    #[test]
    fn empty_collection() {
        let collection = ParsedFeatureCollection::default();
        assert!(collection.is_empty());
        assert_snapshot!(collection.to_geojson_string().unwrap(), @r#"{"type":"FeatureCollection","features":[]}"#);
    }
}
