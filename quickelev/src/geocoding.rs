//! Geocoding client: free-text location search and reverse geocoding.
//!
//! Backed by the TomTom Search API. Both operations issue a single GET
//! request and normalize the provider response into the crate's value
//! types. Non-success statuses become the fixed errors in
//! [`crate::error::LocationError`]; transport and decode failures are
//! propagated with their original messages.

use std::fmt::Write as _;

use serde::Deserialize;

use crate::error::{LocationError, Result};
use crate::types::{Coordinates, NamedLocation};

/// Default base URL of the free-text search endpoint.
const DEFAULT_SEARCH_URL: &str = "https://api.tomtom.com/search/2/search";

/// Default base URL of the reverse-geocode endpoint.
const DEFAULT_REVERSE_URL: &str = "https://api.tomtom.com/search/2/reverseGeocode";

/// Search results are constrained to this country set.
const COUNTRY_SET: &str = "US";

/// Name reported when a reverse-geocoded address has no usable fields.
const UNKNOWN_LOCATION: &str = "Unknown Location";

/// Client for the geocoding provider.
///
/// Holds the API key and endpoint URLs; cheap to clone, one underlying
/// connection pool per clone group.
///
/// # Example
///
/// ```ignore
/// use quickelev::GeocodingClient;
///
/// let client = GeocodingClient::new("my-api-key");
/// let places = client.search("Boulder, CO").await?;
/// for place in &places {
///     println!("{} ({}, {})", place.name,
///         place.coordinates.latitude, place.coordinates.longitude);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct GeocodingClient {
    http: reqwest::Client,
    api_key: String,
    search_url: String,
    reverse_url: String,
}

impl GeocodingClient {
    /// Create a client against the default provider endpoints.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::builder(api_key).build()
    }

    /// Start building a client with non-default endpoints or HTTP settings.
    pub fn builder(api_key: impl Into<String>) -> GeocodingClientBuilder {
        GeocodingClientBuilder::new(api_key)
    }

    /// Search for places matching a free-text query.
    ///
    /// The returned list keeps the provider's relevance order; it is never
    /// re-sorted. Filtering out empty or whitespace-only queries is the
    /// caller's responsibility.
    ///
    /// # Errors
    ///
    /// [`LocationError::Search`] on a non-success HTTP status. Transport
    /// and decode failures pass through with their original messages.
    pub async fn search(&self, query: &str) -> Result<Vec<NamedLocation>> {
        match self.try_search(query).await {
            Ok(locations) => Ok(locations),
            Err(error) => {
                tracing::error!(%error, query, "location search failed");
                Err(error)
            }
        }
    }

    async fn try_search(&self, query: &str) -> Result<Vec<NamedLocation>> {
        let url = format!("{}/{}.json", self.search_url, encode_path_segment(query));
        let response = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("countrySet", COUNTRY_SET)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(LocationError::Search);
        }

        parse_search_response(&response.text().await?)
    }

    /// Resolve coordinates to a short human-readable place name.
    ///
    /// Only the first address candidate returned by the provider is
    /// inspected; this is a best-match policy, not exhaustive
    /// disambiguation. The candidate's fields collapse into a name by
    /// preferring `municipality` over `localName` for the city part and
    /// pairing it with `countrySubdivision`, with `"Unknown Location"` as
    /// the last resort.
    ///
    /// # Errors
    ///
    /// [`LocationError::LocationName`] on a non-success HTTP status or when
    /// the provider returns no candidates at all. Transport and decode
    /// failures pass through with their original messages.
    pub async fn place_name(&self, coordinates: Coordinates) -> Result<String> {
        match self.try_place_name(coordinates).await {
            Ok(name) => Ok(name),
            Err(error) => {
                tracing::error!(
                    %error,
                    latitude = coordinates.latitude,
                    longitude = coordinates.longitude,
                    "place name lookup failed"
                );
                Err(error)
            }
        }
    }

    async fn try_place_name(&self, coordinates: Coordinates) -> Result<String> {
        // Coordinates go into the path verbatim, not percent-encoded.
        let url = format!(
            "{}/{},{}.json",
            self.reverse_url, coordinates.latitude, coordinates.longitude
        );
        let response = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(LocationError::LocationName);
        }

        parse_reverse_response(&response.text().await?)
    }
}

/// Builder for [`GeocodingClient`].
#[derive(Debug)]
pub struct GeocodingClientBuilder {
    api_key: String,
    search_url: String,
    reverse_url: String,
    http: Option<reqwest::Client>,
}

impl GeocodingClientBuilder {
    /// Start a builder with the default provider endpoints.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            search_url: DEFAULT_SEARCH_URL.to_string(),
            reverse_url: DEFAULT_REVERSE_URL.to_string(),
            http: None,
        }
    }

    /// Override the free-text search endpoint base URL.
    pub fn search_url(mut self, url: impl Into<String>) -> Self {
        self.search_url = url.into();
        self
    }

    /// Override the reverse-geocode endpoint base URL.
    pub fn reverse_url(mut self, url: impl Into<String>) -> Self {
        self.reverse_url = url.into();
        self
    }

    /// Use a preconfigured HTTP client (timeouts, proxies, user agent).
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http = Some(client);
        self
    }

    /// Build the client.
    pub fn build(self) -> GeocodingClient {
        GeocodingClient {
            http: self.http.unwrap_or_default(),
            api_key: self.api_key,
            search_url: self.search_url,
            reverse_url: self.reverse_url,
        }
    }
}

#[derive(Deserialize)]
struct SearchResponse {
    results: Vec<SearchResult>,
}

#[derive(Deserialize)]
struct SearchResult {
    address: SearchAddress,
    position: SearchPosition,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchAddress {
    freeform_address: String,
}

#[derive(Deserialize)]
struct SearchPosition {
    lat: f64,
    lon: f64,
}

fn parse_search_response(body: &str) -> Result<Vec<NamedLocation>> {
    let response: SearchResponse = serde_json::from_str(body)?;
    Ok(response
        .results
        .into_iter()
        .map(|result| NamedLocation {
            name: result.address.freeform_address,
            coordinates: Coordinates {
                latitude: result.position.lat,
                longitude: result.position.lon,
            },
        })
        .collect())
}

#[derive(Deserialize)]
struct ReverseResponse {
    addresses: Vec<ReverseCandidate>,
}

#[derive(Deserialize)]
struct ReverseCandidate {
    address: ReverseAddress,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReverseAddress {
    municipality: Option<String>,
    local_name: Option<String>,
    country_subdivision: Option<String>,
}

fn parse_reverse_response(body: &str) -> Result<String> {
    let response: ReverseResponse = serde_json::from_str(body)?;
    let candidate = response
        .addresses
        .first()
        .ok_or(LocationError::LocationName)?;
    Ok(format_place_name(&candidate.address))
}

/// Collapse a reverse-geocoded address into a short display name.
///
/// The city part prefers `municipality` and falls back to `localName`; the
/// state part is `countrySubdivision`. Empty strings count as absent. When
/// nothing usable remains the literal `"Unknown Location"` is returned.
fn format_place_name(address: &ReverseAddress) -> String {
    let city = non_empty(address.municipality.as_deref())
        .or_else(|| non_empty(address.local_name.as_deref()));
    let state = non_empty(address.country_subdivision.as_deref());

    match (city, state) {
        (Some(city), Some(state)) => format!("{city}, {state}"),
        (Some(city), None) => city.to_string(),
        (None, Some(state)) => state.to_string(),
        (None, None) => UNKNOWN_LOCATION.to_string(),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Percent-encode a free-text query for use as a URL path segment.
fn encode_path_segment(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => {
                let _ = write!(out, "%{byte:02X}");
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address(
        municipality: Option<&str>,
        local_name: Option<&str>,
        country_subdivision: Option<&str>,
    ) -> ReverseAddress {
        ReverseAddress {
            municipality: municipality.map(String::from),
            local_name: local_name.map(String::from),
            country_subdivision: country_subdivision.map(String::from),
        }
    }

    #[test]
    fn name_uses_municipality_and_subdivision() {
        let addr = address(Some("New York"), Some("Manhattan"), Some("New York"));
        assert_eq!(format_place_name(&addr), "New York, New York");
    }

    #[test]
    fn name_falls_back_to_local_name() {
        let addr = address(None, Some("Manhattan"), Some("New York"));
        assert_eq!(format_place_name(&addr), "Manhattan, New York");
    }

    #[test]
    fn name_with_only_subdivision() {
        let addr = address(None, None, Some("New York"));
        assert_eq!(format_place_name(&addr), "New York");
    }

    #[test]
    fn name_with_only_city() {
        let addr = address(Some("Austin"), None, None);
        assert_eq!(format_place_name(&addr), "Austin");
    }

    #[test]
    fn name_without_usable_fields() {
        assert_eq!(format_place_name(&address(None, None, None)), "Unknown Location");
    }

    #[test]
    fn empty_strings_count_as_absent() {
        let addr = address(Some(""), Some(""), Some("Colorado"));
        assert_eq!(format_place_name(&addr), "Colorado");
    }

    #[test]
    fn reverse_response_uses_first_candidate_only() {
        let body = r#"{
            "addresses": [
                { "address": { "municipality": "Denver", "countrySubdivision": "Colorado" } },
                { "address": { "municipality": "Aurora", "countrySubdivision": "Colorado" } }
            ]
        }"#;
        assert_eq!(parse_reverse_response(body).unwrap(), "Denver, Colorado");
    }

    #[test]
    fn reverse_response_without_candidates_fails() {
        let error = parse_reverse_response(r#"{ "addresses": [] }"#).unwrap_err();
        assert!(matches!(error, LocationError::LocationName));
        assert_eq!(error.to_string(), "Failed to get location name");
    }

    #[test]
    fn search_response_preserves_provider_order() {
        let body = r#"{
            "results": [
                {
                    "address": { "freeformAddress": "New York, NY" },
                    "position": { "lat": 40.7128, "lon": -74.006 }
                },
                {
                    "address": { "freeformAddress": "New York Mills, MN" },
                    "position": { "lat": 46.518, "lon": -95.3764 }
                }
            ]
        }"#;
        let locations = parse_search_response(body).unwrap();

        assert_eq!(locations.len(), 2);
        assert_eq!(locations[0].name, "New York, NY");
        assert_eq!(locations[0].coordinates, Coordinates::new(40.7128, -74.006));
        assert_eq!(locations[1].name, "New York Mills, MN");
        assert_eq!(locations[1].coordinates, Coordinates::new(46.518, -95.3764));
    }

    #[test]
    fn search_response_may_be_empty() {
        let locations = parse_search_response(r#"{ "results": [] }"#).unwrap();
        assert!(locations.is_empty());
    }

    #[test]
    fn malformed_search_body_is_a_decode_error() {
        let error = parse_search_response("not json").unwrap_err();
        assert!(matches!(error, LocationError::Json(_)));
    }

    #[test]
    fn parsing_is_idempotent_across_calls() {
        let body = r#"{
            "results": [
                {
                    "address": { "freeformAddress": "Denver, CO" },
                    "position": { "lat": 39.7392, "lon": -104.9903 }
                }
            ]
        }"#;
        assert_eq!(
            parse_search_response(body).unwrap(),
            parse_search_response(body).unwrap()
        );
    }

    #[test]
    fn queries_are_path_encoded() {
        assert_eq!(encode_path_segment("New York"), "New%20York");
        assert_eq!(encode_path_segment("a/b?c#d"), "a%2Fb%3Fc%23d");
        assert_eq!(encode_path_segment("plain-text_1.0~x"), "plain-text_1.0~x");
    }
}
