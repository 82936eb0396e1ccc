//! Search for a place and report its elevation.
//!
//! Run with: TOMTOM_API_KEY=... cargo run --example search -- "Boulder, CO"

use std::env;

use quickelev::{ElevationClient, GeocodingClient};

#[tokio::main]
async fn main() -> Result<(), quickelev::LocationError> {
    let api_key = env::var("TOMTOM_API_KEY").unwrap_or_else(|_| {
        eprintln!("Set TOMTOM_API_KEY to run this example");
        std::process::exit(1);
    });
    let query = env::args().nth(1).unwrap_or_else(|| {
        eprintln!("Usage: cargo run --example search -- \"<place>\"");
        std::process::exit(1);
    });

    let geocoder = GeocodingClient::new(api_key);
    let elevation = ElevationClient::new();

    let places = geocoder.search(&query).await?;
    match places.first() {
        Some(place) => {
            let reading = elevation.lookup(place.coordinates).await?;
            println!("{}", place.name);
            println!(
                "  {:.6}, {:.6}",
                reading.coordinates.latitude, reading.coordinates.longitude
            );
            println!("  {:.1}m", reading.elevation);
        }
        None => println!("No results for \"{}\"", query),
    }

    Ok(())
}
