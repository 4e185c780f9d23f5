use cartokit_types::geo::impls::GeoPoint2d;
use cartokit_types::geo::{GeoPoint, NewGeoPoint};

use super::{ParsedFeature, ParsedFeatureCollection, PointGeometry};
use crate::error::CartokitError;

impl From<ParsedFeature> for ::geojson::Feature {
    fn from(value: ParsedFeature) -> Self {
        let properties: ::geojson::JsonObject = value
            .properties
            .into_iter()
            .map(|(name, value)| (name, serde_json::Value::String(value)))
            .collect();

        ::geojson::Feature {
            bbox: None,
            geometry: Some(::geojson::Geometry::new(::geojson::Value::Point(
                value.geometry.coordinates.to_vec(),
            ))),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        }
    }
}

impl From<ParsedFeatureCollection> for ::geojson::FeatureCollection {
    fn from(value: ParsedFeatureCollection) -> Self {
        ::geojson::FeatureCollection {
            bbox: None,
            features: value.features.into_iter().map(Into::into).collect(),
            foreign_members: None,
        }
    }
}

impl TryFrom<::geojson::Feature> for ParsedFeature {
    type Error = CartokitError;

    /// Only point features with coordinates in the valid range can be converted. Non-string
    /// property values are stored as JSON text.
    fn try_from(value: ::geojson::Feature) -> Result<Self, Self::Error> {
        let Some(geometry) = value.geometry else {
            return Err(CartokitError::Geometry("feature has no geometry".to_string()));
        };

        let position = match geometry.value {
            ::geojson::Value::Point(position) => position,
            other => {
                return Err(CartokitError::Geometry(format!(
                    "expected Point, got {}",
                    type_name(&other)
                )))
            }
        };

        let point = GeoPoint2d::try_from(position)?;
        if !point.is_in_range() {
            return Err(CartokitError::Geometry(format!(
                "coordinates are out of range: [{}, {}]",
                point.lon(),
                point.lat()
            )));
        }

        let properties = value
            .properties
            .unwrap_or_default()
            .into_iter()
            .map(|(name, value)| match value {
                serde_json::Value::String(s) => (name, s),
                other => (name, other.to_string()),
            })
            .collect();

        Ok(ParsedFeature {
            geometry: PointGeometry::latlon(point.lat(), point.lon()),
            properties,
        })
    }
}

impl TryFrom<::geojson::FeatureCollection> for ParsedFeatureCollection {
    type Error = CartokitError;

    fn try_from(value: ::geojson::FeatureCollection) -> Result<Self, Self::Error> {
        value
            .features
            .into_iter()
            .map(ParsedFeature::try_from)
            .collect::<Result<_, _>>()
    }
}

fn type_name(value: &::geojson::Value) -> &'static str {
    match value {
        ::geojson::Value::Point(_) => "Point",
        ::geojson::Value::MultiPoint(_) => "MultiPoint",
        ::geojson::Value::LineString(_) => "LineString",
        ::geojson::Value::MultiLineString(_) => "MultiLineString",
        ::geojson::Value::Polygon(_) => "Polygon",
        ::geojson::Value::MultiPolygon(_) => "MultiPolygon",
        ::geojson::Value::GeometryCollection(_) => "GeometryCollection",
    }
}
