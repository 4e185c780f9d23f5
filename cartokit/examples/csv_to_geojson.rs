//! This example shows how to convert a CSV file with point coordinates into GeoJSON, and how to
//! calculate display resolutions for a set of map scales.
//!
//! Run this example with one argument - path to a `.csv` file with `lon` and `lat` columns and a
//! title line. Lines with invalid coordinates or wrong number of fields are skipped.
//!
//! ```shell
//! cargo run --example csv_to_geojson -- ./cartokit/examples/data/cities.csv
//! ```

use anyhow::{anyhow, Result};
use cartokit::delimited::{parse_delimited, ParseOptions};
use cartokit::ScaleContext;
use cartokit_types::geo::MapUnit;

const SCALES: [f64; 4] = [1_000_000.0, 250_000.0, 50_000.0, 10_000.0];

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let Some(file_name) = std::env::args().nth(1) else {
        return Err(anyhow!(
            "This example must be run with one argument - name of the .csv file to load"
        ));
    };

    let text = std::fs::read_to_string(file_name)?;
    let options = ParseOptions::default().with_first_line_titles(true);
    let features = parse_delimited(&text, &options)
        .ok_or_else(|| anyhow!("file must contain a title line and at least one data line"))?;

    log::info!("Loaded {} features", features.len());
    println!("{}", features.to_geojson_string()?);

    let context = ScaleContext::new(96.0, MapUnit::Degree);
    for (scale, resolution) in SCALES.iter().zip(context.lod_resolutions(&SCALES)?) {
        log::info!("1:{scale} -> {resolution:.10} degrees per pixel");
    }

    Ok(())
}
