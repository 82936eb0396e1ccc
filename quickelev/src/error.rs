//! Error types for the quickelev library.

use thiserror::Error;

/// Errors that can occur when looking up locations and elevations.
///
/// The first three variants carry fixed, synthesized messages that callers
/// key off; transport and decode failures are transparent so their original
/// messages reach the caller unchanged.
#[derive(Error, Debug)]
pub enum LocationError {
    /// The geocoding search endpoint answered with a non-success status.
    #[error("Failed to search location")]
    Search,

    /// The reverse-geocode endpoint answered with a non-success status, or
    /// returned no address candidates at all.
    #[error("Failed to get location name")]
    LocationName,

    /// The elevation endpoint answered with a non-success status, or
    /// returned no results.
    #[error("Failed to get elevation data")]
    Elevation,

    /// The HTTP request itself failed (connection, DNS, TLS, timeout).
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// A response body did not match the provider's documented shape.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// No position facility exists in this environment.
    #[error("Geolocation is not supported in this environment")]
    Unsupported,

    /// The position facility reported a failure (e.g. permission denied).
    #[error("{0}")]
    PositionUnavailable(String),
}

/// Result type alias using [`LocationError`].
pub type Result<T> = std::result::Result<T, LocationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synthesized_messages_are_fixed() {
        assert_eq!(
            LocationError::Search.to_string(),
            "Failed to search location"
        );
        assert_eq!(
            LocationError::LocationName.to_string(),
            "Failed to get location name"
        );
        assert_eq!(
            LocationError::Elevation.to_string(),
            "Failed to get elevation data"
        );
    }

    #[test]
    fn decode_errors_pass_through_unchanged() {
        let original = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let expected = original.to_string();

        let wrapped = LocationError::from(original);
        assert_eq!(wrapped.to_string(), expected);
    }

    #[test]
    fn position_errors_carry_platform_message() {
        let err = LocationError::PositionUnavailable("API request failed".to_string());
        assert_eq!(err.to_string(), "API request failed");

        assert_eq!(
            LocationError::Unsupported.to_string(),
            "Geolocation is not supported in this environment"
        );
    }
}
