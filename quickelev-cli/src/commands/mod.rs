pub mod elevation;
pub mod locate;
pub mod search;

use anyhow::{Context, Result};
use quickelev::Coordinates;

/// Feet per meter, for the presentation-side unit conversion.
pub const FEET_PER_METER: f64 = 3.28084;

/// Resolve the TomTom API key from the CLI flag or environment.
pub fn require_api_key(api_key: Option<String>) -> Result<String> {
    api_key.context("TOMTOM_API_KEY environment variable not set. Use --api-key or set TOMTOM_API_KEY")
}

/// Format a coordinate pair the way the result display shows it.
pub fn format_coordinates(coordinates: &Coordinates) -> String {
    format!("{:.6}, {:.6}", coordinates.latitude, coordinates.longitude)
}
