//! Cartokit is a set of small cartographic utilities that map clients need besides rendering:
//!
//! * [`scale`] converts between map scale, display resolution, DPI and map units,
//! * [`delimited`] reads point features with attributes from delimited (CSV-like) text.
//!
//! All functions are pure and take their configuration as arguments, so they can be called
//! from any thread.
//!
//! ```
//! use cartokit::delimited::{parse_delimited, ParseOptions};
//! use cartokit::scale::resolution_from_scale_dpi;
//!
//! let resolution = resolution_from_scale_dpi(50000.0, 96.0, "degree", None);
//! assert!(resolution > 0.0);
//!
//! let options = ParseOptions::default().with_first_line_titles(true);
//! let features = parse_delimited("lon,lat,name\n10,20,A", &options).unwrap();
//! println!("{}", features.to_geojson_string().unwrap());
//! ```

pub mod delimited;
pub mod error;
pub mod scale;

pub use delimited::{csv_to_features, parse_delimited, ParseOptions, ParsedFeatureCollection};
pub use error::CartokitError;
pub use scale::ScaleContext;

// Reexport cartokit_types
pub use cartokit_types;
