//! Conversion of delimited text (CSV-like) into point features.
//!
//! Every line of the text becomes a [`ParsedFeature`] with a point geometry taken from the
//! longitude and latitude columns, and string attributes taken from all other columns. Lines
//! with wrong number of fields or with coordinates out of the `(-180, 180)` / `(-90, 90)` range
//! are skipped.
//!
//! This is not a general CSV reader: separators inside quoted values and escaped quotes are
//! not supported.
//!
//! ```
//! use cartokit::delimited::{parse_delimited, ParseOptions};
//!
//! let options = ParseOptions::default().with_first_line_titles(true);
//! let features = parse_delimited("lon,lat,name\n10,20,A\n200,20,B\n", &options).unwrap();
//!
//! assert_eq!(features.len(), 1);
//! assert_eq!(features.features[0].property("name"), Some("A"));
//! ```

use cartokit_types::geo::{GeoPoint, NewGeoPoint};
use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;

mod feature;
#[cfg(feature = "geojson")]
mod geojson;
mod options;

pub use feature::{ParsedFeature, ParsedFeatureCollection, PointGeometry};
pub use options::ParseOptions;

lazy_static! {
    static ref NON_WORD_CHARS: Regex =
        Regex::new(r"[^A-Za-z0-9_ ]+").expect("invalid non-word regex");
    static ref SPACES: Regex = Regex::new(r" +").expect("invalid spaces regex");
    static ref NUMBER_PREFIX: Regex =
        Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)")
            .expect("invalid number regex");
}

/// Input of [`csv_to_features`]: either raw text, or features that were already parsed.
#[derive(Debug, Clone, PartialEq)]
pub enum DelimitedSource {
    /// Delimited text.
    Text(String),
    /// Parsed features. They are returned without changes.
    Features(ParsedFeatureCollection),
}

impl From<&str> for DelimitedSource {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for DelimitedSource {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<ParsedFeatureCollection> for DelimitedSource {
    fn from(value: ParsedFeatureCollection) -> Self {
        Self::Features(value)
    }
}

/// Parses text sources with [`parse_delimited`]. Already parsed features are passed through.
pub fn csv_to_features(
    source: impl Into<DelimitedSource>,
    options: &ParseOptions,
) -> Option<ParsedFeatureCollection> {
    match source.into() {
        DelimitedSource::Text(text) => parse_delimited(&text, options),
        DelimitedSource::Features(features) => Some(features),
    }
}

/// Parses delimited text into point features.
///
/// Returns `None` if `options.first_line_titles` is set but the text has less than two lines,
/// or if one of the separators is empty. Invalid lines are skipped, so the result can be empty.
pub fn parse_delimited(text: &str, options: &ParseOptions) -> Option<ParsedFeatureCollection> {
    if options.line_separator.is_empty() || options.field_separator.is_empty() {
        log::warn!("Cannot parse delimited text with an empty separator");
        return None;
    }

    let (titles, data) = if options.first_line_titles {
        let Some((title_line, data)) = text.split_once(options.line_separator.as_str()) else {
            log::warn!("Delimited text must contain a title line and at least one more line");
            return None;
        };

        let titles: Vec<String> = title_line
            .trim()
            .split(options.field_separator.as_str())
            .map(|title| options.dequote(title).to_string())
            .collect();

        (titles, data)
    } else {
        (options.titles.clone(), text)
    };

    let columns = Columns::new(&titles, options);

    let mut skipped = 0;
    let features: ParsedFeatureCollection = data
        .split(options.line_separator.as_str())
        .enumerate()
        .filter_map(|(line_index, line)| {
            let feature = columns.parse_line(line, options);
            if feature.is_none() {
                log::debug!("Skipping line {line_index} of delimited text: {line:?}");
                skipped += 1;
            }

            feature
        })
        .collect();

    log::trace!(
        "Parsed {} features from delimited text, {skipped} lines skipped",
        features.len()
    );

    Some(features)
}

/// Converts a column title into an attribute name.
///
/// The title is lower-cased, everything except ASCII letters, digits, underscores and spaces is
/// removed, and runs of spaces are replaced with a single `_`. If nothing meaningful is left,
/// `prop-{index}` is used.
pub fn property_name(title: &str, index: usize) -> String {
    let lowercase = title.to_lowercase();
    let stripped = NON_WORD_CHARS.replace_all(&lowercase, "");
    let name = SPACES.replace_all(&stripped, "_");

    if name.is_empty() || name == "_" {
        format!("prop-{index}")
    } else {
        name.into_owned()
    }
}

/// Reads the longest numeric prefix of the value, ignoring anything after it.
///
/// Leading whitespace is skipped. `Infinity` with an optional sign is accepted. Returns `None`
/// if the value does not start with a number.
pub fn parse_float_prefix(value: &str) -> Option<f64> {
    let number = NUMBER_PREFIX.find(value.trim_start())?.as_str();
    match number.trim_start_matches(['+', '-']) {
        "Infinity" if number.starts_with('-') => Some(f64::NEG_INFINITY),
        "Infinity" => Some(f64::INFINITY),
        _ => number.parse().ok(),
    }
}

struct Columns {
    count: usize,
    lon_index: Option<usize>,
    lat_index: Option<usize>,
    // (column index, attribute name) for all non-coordinate columns
    properties: Vec<(usize, String)>,
}

impl Columns {
    fn new(titles: &[String], options: &ParseOptions) -> Self {
        let position = |name: &str| titles.iter().position(|title| title == name);
        let lon_index = position(options.longitude_title.as_str());
        let lat_index = position(options.latitude_title.as_str());

        let properties = titles
            .iter()
            .enumerate()
            .filter(|(_, title)| {
                **title != options.latitude_title && **title != options.longitude_title
            })
            .map(|(index, title)| (index, property_name(title, index)))
            .collect();

        Self {
            count: titles.len(),
            lon_index,
            lat_index,
            properties,
        }
    }

    fn parse_line(&self, line: &str, options: &ParseOptions) -> Option<ParsedFeature> {
        let fields: Vec<&str> = line
            .trim()
            .split(options.field_separator.as_str())
            .collect();
        if fields.len() != self.count {
            return None;
        }

        let coordinate = |index: Option<usize>| -> Option<f64> {
            parse_float_prefix(fields.get(index?)?)
        };
        let point = PointGeometry::lonlat(coordinate(self.lon_index)?, coordinate(self.lat_index)?);
        if !point.is_in_range() {
            return None;
        }

        let properties: IndexMap<String, String> = self
            .properties
            .iter()
            .map(|(index, name)| (name.clone(), options.dequote(fields[*index]).to_string()))
            .collect();

        Some(ParsedFeature {
            geometry: point,
            properties,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn with_header() -> ParseOptions {
        ParseOptions::default().with_first_line_titles(true)
    }

    #[test]
    fn header_line_and_out_of_range_row() {
        let features = parse_delimited("lon,lat,name\n10,20,A\n200,20,B\n", &with_header())
            .expect("must parse");

        assert_eq!(features.len(), 1);
        let feature = &features.features[0];
        assert_eq!(feature.geometry.coordinates, [10.0, 20.0]);
        assert_eq!(feature.property("name"), Some("A"));
        assert_eq!(feature.properties.len(), 1);
    }

    #[test]
    fn default_titles() {
        let features = parse_delimited("10,20\n-30.5,40.25", &ParseOptions::default()).unwrap();

        assert_eq!(features.len(), 2);
        assert_eq!(features.features[1].geometry.coordinates, [-30.5, 40.25]);
        assert!(features.features[1].properties.is_empty());
    }

    #[test]
    fn property_names() {
        assert_eq!(property_name("My City!", 2), "my_city");
        assert_eq!(property_name("Population   2020", 0), "population_2020");
        assert_eq!(property_name("snake_case", 0), "snake_case");
        assert_eq!(property_name("!?#", 3), "prop-3");
        assert_eq!(property_name("  ", 1), "prop-1");
        assert_eq!(property_name("", 0), "prop-0");
    }

    #[test]
    fn quoted_titles_and_custom_separators() {
        let text = "\"lon\";\"lat\";\"Full Name\";\"!!\"\r\n2.35;48.85;\"Paris, France\";x\r\n";
        let options = with_header()
            .with_field_separator(";")
            .with_line_separator("\r\n");
        let features = parse_delimited(text, &options).unwrap();

        assert_eq!(features.len(), 1);
        let feature = &features.features[0];
        assert_eq!(feature.geometry.coordinates, [2.35, 48.85]);
        assert_eq!(feature.property("full_name"), Some("Paris, France"));
        assert_eq!(feature.property("prop-3"), Some("x"));
    }

    #[test]
    fn spaces_around_fields() {
        let features = parse_delimited("lon, lat, name\n 10 , 20,  A \n", &with_header()).unwrap();

        assert_eq!(features.len(), 1);
        assert_eq!(features.features[0].geometry.coordinates, [10.0, 20.0]);
        assert_eq!(features.features[0].property("name"), Some("A"));
    }

    #[test]
    fn keep_double_quotes() {
        let options = ParseOptions::default()
            .with_titles(["lon", "lat", "name"])
            .with_delete_double_quotes(false);
        let features = parse_delimited("10,20,\"A\"", &options).unwrap();

        assert_eq!(features.features[0].property("name"), Some("\"A\""));
    }

    #[test]
    fn invalid_rows_are_skipped() {
        let text = "lon,lat,name\n\
                    10,20\n\
                    10,20,A,extra\n\
                    abc,20,B\n\
                    10,90,C\n\
                    -180,0,D\n\
                    NaN,0,E\n\
                    1,2,F";
        let features = parse_delimited(text, &with_header()).unwrap();

        assert_eq!(features.len(), 1);
        assert_eq!(features.features[0].property("name"), Some("F"));
    }

    #[test]
    fn numeric_prefix() {
        assert_eq!(parse_float_prefix("10.5E"), Some(10.5));
        assert_eq!(parse_float_prefix("  20.25N"), Some(20.25));
        assert_eq!(parse_float_prefix("10abc"), Some(10.0));
        assert_eq!(parse_float_prefix("-1.5e2km"), Some(-150.0));
        assert_eq!(parse_float_prefix("1e"), Some(1.0));
        assert_eq!(parse_float_prefix("+.5"), Some(0.5));
        assert_eq!(parse_float_prefix("7."), Some(7.0));
        assert_eq!(parse_float_prefix("-Infinity"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_float_prefix("abc"), None);
        assert_eq!(parse_float_prefix("."), None);
        assert_eq!(parse_float_prefix(""), None);
        assert_eq!(parse_float_prefix("\"10\""), None);
    }

    #[test]
    fn coordinates_with_suffix() {
        let features =
            parse_delimited("lon,lat,name\n10.5E,20.25N,A\n10abc,1,B\nN10,1,C", &with_header())
                .unwrap();

        assert_eq!(features.len(), 2);
        assert_eq!(features.features[0].geometry.coordinates, [10.5, 20.25]);
        assert_eq!(features.features[0].property("name"), Some("A"));
        assert_eq!(features.features[1].geometry.coordinates, [10.0, 1.0]);
    }

    #[test]
    fn properties_keep_column_order() {
        let options = with_header();
        let features = parse_delimited("zeta,lon,alpha,lat,mid\n3,10,1,20,2", &options).unwrap();

        let names: Vec<&str> = features.features[0]
            .properties
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn custom_coordinate_titles() {
        let options = ParseOptions::default()
            .with_titles(["id", "y", "x"])
            .with_coordinate_titles("x", "y");
        let features = parse_delimited("1,55.75,37.61\n2,59.93,30.33", &options).unwrap();

        assert_eq!(features.len(), 2);
        assert_eq!(features.features[0].geometry.lon(), 37.61);
        assert_eq!(features.features[0].geometry.lat(), 55.75);
        assert_eq!(features.features[1].property("id"), Some("2"));
    }

    #[test]
    fn missing_coordinate_column() {
        let options = ParseOptions::default().with_titles(["lon", "latitude"]);
        let features = parse_delimited("10,20", &options).unwrap();

        assert!(features.is_empty());
    }

    #[test]
    fn header_without_data() {
        assert_eq!(parse_delimited("lon,lat,name", &with_header()), None);
        assert_eq!(parse_delimited("", &with_header()), None);
        assert_eq!(
            parse_delimited("lon,lat,name\n", &with_header()),
            Some(ParsedFeatureCollection::default())
        );
    }

    #[test]
    fn empty_separator() {
        let options = ParseOptions::default().with_field_separator("");
        assert_eq!(parse_delimited("10,20", &options), None);
    }

    #[test]
    fn parsed_features_pass_through() {
        let parsed = parse_delimited("10,20", &ParseOptions::default()).unwrap();
        let result = csv_to_features(parsed.clone(), &with_header());

        assert_eq!(result, Some(parsed));
    }

    #[test]
    fn text_source() {
        assert_matches!(
            csv_to_features("lon,lat\n1,2", &with_header()),
            Some(features) if features.len() == 1
        );
        assert_matches!(
            csv_to_features(String::from("1,2\n3,4"), &ParseOptions::default()),
            Some(features) if features.len() == 2
        );
    }

    #[test]
    fn options_are_not_changed() {
        let options = with_header();
        let before = options.clone();
        parse_delimited("x,y\n1,2", &options).unwrap();

        assert_eq!(options, before);
    }
}
