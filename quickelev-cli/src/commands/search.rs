use anyhow::{bail, Result};
use quickelev::GeocodingClient;

use super::{format_coordinates, require_api_key};

pub async fn run(api_key: Option<String>, query: &str, json: bool) -> Result<()> {
    // The data-access layer passes queries through verbatim; filtering
    // empty input is this layer's job.
    if query.trim().is_empty() {
        bail!("Search query must not be empty");
    }

    let client = GeocodingClient::new(require_api_key(api_key)?);
    let locations = client.search(query).await?;

    if json {
        println!("{}", serde_json::to_string(&locations)?);
    } else if locations.is_empty() {
        println!("No results for \"{}\"", query);
    } else {
        for (index, location) in locations.iter().enumerate() {
            println!("{}. {}", index + 1, location.name);
            println!("   {}", format_coordinates(&location.coordinates));
        }
    }

    Ok(())
}
