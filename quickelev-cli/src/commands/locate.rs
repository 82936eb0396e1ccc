use anyhow::{Context, Result};
use quickelev::{locate, ElevationClient, EnvPositionSource, GeocodingClient};

use super::{elevation::print_reading, format_coordinates, require_api_key};

pub async fn run(api_key: Option<String>, json: bool) -> Result<()> {
    let geocoder = GeocodingClient::new(require_api_key(api_key)?);
    let source = EnvPositionSource::from_env();

    // A failed place-name lookup is swallowed inside `locate`; only the
    // position step itself can fail here.
    let position = locate(&source, &geocoder).await.with_context(|| {
        format!(
            "Could not access your location. Set {} to \"lat,lon\"",
            quickelev::position::POSITION_ENV_VAR
        )
    })?;

    let client = ElevationClient::new();
    let reading = client.lookup(position.coordinates).await?;

    let label = position
        .name
        .unwrap_or_else(|| format_coordinates(&position.coordinates));
    print_reading(&reading, Some(&label), json)
}
