//! Basic example demonstrating quickelev library usage.
//!
//! Run with: cargo run --example basic

use quickelev::{Coordinates, ElevationClient};

#[tokio::main]
async fn main() {
    let client = ElevationClient::new();

    // Query some famous peaks
    let locations = [
        ("Mount Fuji, Japan", 35.3606, 138.7274),
        ("Mount Everest, Nepal", 27.9881, 86.9250),
        ("Denali, Alaska", 63.0695, -151.0074),
    ];

    println!("Elevation queries:");
    println!("{:-<50}", "");

    for (name, lat, lon) in &locations {
        match client.lookup(Coordinates::new(*lat, *lon)).await {
            Ok(reading) => {
                println!("{}: {:.1}m", name, reading.elevation);
            }
            Err(e) => {
                println!("{}: error - {}", name, e);
            }
        }
    }
}
