//! Elevation lookup client backed by the Open Elevation API.

use serde::Deserialize;

use crate::error::{LocationError, Result};
use crate::types::{Coordinates, ElevationReading};

/// Default URL of the elevation lookup endpoint.
const DEFAULT_LOOKUP_URL: &str = "https://api.open-elevation.com/api/v1/lookup";

/// Client for the elevation provider.
///
/// The provider requires no authentication. Elevations are returned in
/// meters; unit conversion is left to the presentation layer.
///
/// # Example
///
/// ```ignore
/// use quickelev::{Coordinates, ElevationClient};
///
/// let client = ElevationClient::new();
/// let reading = client.lookup(Coordinates::new(40.7128, -74.006)).await?;
/// println!("{:.1}m at {}, {}",
///     reading.elevation,
///     reading.coordinates.latitude,
///     reading.coordinates.longitude);
/// ```
#[derive(Debug, Clone)]
pub struct ElevationClient {
    http: reqwest::Client,
    lookup_url: String,
}

impl ElevationClient {
    /// Create a client against the default provider endpoint.
    pub fn new() -> Self {
        Self::with_lookup_url(DEFAULT_LOOKUP_URL)
    }

    /// Create a client against a non-default endpoint, e.g. a self-hosted
    /// Open Elevation instance.
    pub fn with_lookup_url(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            lookup_url: url.into(),
        }
    }

    /// Look up the elevation at a coordinate pair.
    ///
    /// The provider accepts comma-separated multi-point queries, but this
    /// client only ever sends a single point. The returned coordinates are
    /// the ones echoed by the provider, which may be snapped to its grid
    /// resolution.
    ///
    /// # Errors
    ///
    /// [`LocationError::Elevation`] on a non-success HTTP status or an
    /// empty result set. Transport and decode failures pass through with
    /// their original messages.
    pub async fn lookup(&self, coordinates: Coordinates) -> Result<ElevationReading> {
        match self.try_lookup(coordinates).await {
            Ok(reading) => Ok(reading),
            Err(error) => {
                tracing::error!(
                    %error,
                    latitude = coordinates.latitude,
                    longitude = coordinates.longitude,
                    "elevation lookup failed"
                );
                Err(error)
            }
        }
    }

    async fn try_lookup(&self, coordinates: Coordinates) -> Result<ElevationReading> {
        let locations = format!("{},{}", coordinates.latitude, coordinates.longitude);
        let response = self
            .http
            .get(&self.lookup_url)
            .query(&[("locations", locations.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(LocationError::Elevation);
        }

        parse_lookup_response(&response.text().await?)
    }
}

impl Default for ElevationClient {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Deserialize)]
struct LookupResponse {
    results: Vec<LookupResult>,
}

#[derive(Deserialize)]
struct LookupResult {
    elevation: f64,
    latitude: f64,
    longitude: f64,
}

fn parse_lookup_response(body: &str) -> Result<ElevationReading> {
    let response: LookupResponse = serde_json::from_str(body)?;
    // Only the first result is meaningful for a single-point query.
    let result = response.results.first().ok_or(LocationError::Elevation)?;
    Ok(ElevationReading {
        elevation: result.elevation,
        coordinates: Coordinates {
            latitude: result.latitude,
            longitude: result.longitude,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reading_maps_first_result() {
        let body = r#"{
            "results": [
                { "elevation": 10.5, "latitude": 40.7128, "longitude": -74.006 }
            ]
        }"#;
        let reading = parse_lookup_response(body).unwrap();

        assert_eq!(reading.elevation, 10.5);
        assert_eq!(reading.coordinates, Coordinates::new(40.7128, -74.006));
    }

    #[test]
    fn reading_echoes_provider_coordinates_not_request() {
        // The provider may snap to its grid; the snapped values must win.
        let body = r#"{
            "results": [
                { "elevation": 1608.0, "latitude": 39.75, "longitude": -105.0 }
            ]
        }"#;
        let reading = parse_lookup_response(body).unwrap();
        assert_eq!(reading.coordinates, Coordinates::new(39.75, -105.0));
    }

    #[test]
    fn empty_results_fail() {
        let error = parse_lookup_response(r#"{ "results": [] }"#).unwrap_err();
        assert!(matches!(error, LocationError::Elevation));
        assert_eq!(error.to_string(), "Failed to get elevation data");
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let error = parse_lookup_response(r#"{ "results": "nope" }"#).unwrap_err();
        assert!(matches!(error, LocationError::Json(_)));
    }
}
