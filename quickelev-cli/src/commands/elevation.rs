use anyhow::Result;
use quickelev::{Coordinates, ElevationClient, ElevationReading};
use serde::Serialize;

use super::{format_coordinates, FEET_PER_METER};

#[derive(Serialize)]
struct ElevationOutput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    latitude: f64,
    longitude: f64,
    meters: f64,
    feet: f64,
}

pub async fn run(lat: f64, lon: f64, json: bool) -> Result<()> {
    let client = ElevationClient::new();
    let reading = client.lookup(Coordinates::new(lat, lon)).await?;
    print_reading(&reading, None, json)
}

/// Render an elevation reading the way the result card shows it.
pub fn print_reading(reading: &ElevationReading, name: Option<&str>, json: bool) -> Result<()> {
    let feet = reading.elevation * FEET_PER_METER;

    if json {
        let output = ElevationOutput {
            name,
            latitude: reading.coordinates.latitude,
            longitude: reading.coordinates.longitude,
            meters: reading.elevation,
            feet,
        };
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }

    if let Some(name) = name {
        println!("Location: {}", name);
    }
    println!("Coordinates: {}", format_coordinates(&reading.coordinates));
    println!(
        "Elevation: {:.1} meters ({:.1} feet)",
        reading.elevation, feet
    );
    Ok(())
}
