//! Current-position sources and the current-location flow.
//!
//! [`PositionSource`] is the seam for the host environment's geolocation
//! facility. Headless environments usually have none, in which case the
//! source must fail with [`LocationError::Unsupported`] rather than guess.

use std::future::Future;

use crate::error::{LocationError, Result};
use crate::geocoding::GeocodingClient;
use crate::types::{Coordinates, LocatedPosition};

/// Environment variable read by [`EnvPositionSource::from_env`].
pub const POSITION_ENV_VAR: &str = "QUICKELEV_POSITION";

/// A one-shot source of the host's current position.
///
/// One in-flight request per call; no polling or watching semantics.
pub trait PositionSource {
    /// Request the current position once.
    ///
    /// # Errors
    ///
    /// [`LocationError::Unsupported`] when no position facility exists in
    /// the environment; [`LocationError::PositionUnavailable`] when the
    /// facility itself reports a failure (e.g. permission denied).
    fn current_position(&self) -> impl Future<Output = Result<Coordinates>> + Send;
}

/// Position source backed by an environment variable holding `lat,lon`.
///
/// This is the stand-in for a platform geolocation facility in headless
/// environments: an unset variable means no facility exists at all, while
/// a malformed value is a facility failure.
#[derive(Debug, Clone)]
pub struct EnvPositionSource {
    var: String,
}

impl EnvPositionSource {
    /// Source reading the default `QUICKELEV_POSITION` variable.
    pub fn from_env() -> Self {
        Self::from_var(POSITION_ENV_VAR)
    }

    /// Source reading a custom environment variable.
    pub fn from_var(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl PositionSource for EnvPositionSource {
    async fn current_position(&self) -> Result<Coordinates> {
        match std::env::var(&self.var) {
            Ok(value) => parse_position(&value),
            Err(std::env::VarError::NotPresent) => Err(LocationError::Unsupported),
            Err(error) => Err(LocationError::PositionUnavailable(error.to_string())),
        }
    }
}

/// Parse a `lat,lon` pair in decimal degrees.
fn parse_position(value: &str) -> Result<Coordinates> {
    let (lat, lon) = value.split_once(',').ok_or_else(|| {
        LocationError::PositionUnavailable(format!("expected \"lat,lon\", got \"{value}\""))
    })?;
    let latitude = lat.trim().parse::<f64>().map_err(|error| {
        LocationError::PositionUnavailable(format!("invalid latitude \"{}\": {error}", lat.trim()))
    })?;
    let longitude = lon.trim().parse::<f64>().map_err(|error| {
        LocationError::PositionUnavailable(format!("invalid longitude \"{}\": {error}", lon.trim()))
    })?;
    Ok(Coordinates::new(latitude, longitude))
}

/// Resolve the current position and annotate it with a place name.
///
/// The position step is mandatory and its failure aborts the flow. The
/// place-name step is not: a failed reverse geocode is logged and the flow
/// proceeds with bare coordinates.
pub async fn locate<S: PositionSource>(
    source: &S,
    geocoder: &GeocodingClient,
) -> Result<LocatedPosition> {
    let coordinates = source.current_position().await?;
    let name = geocoder.place_name(coordinates).await;
    if let Err(error) = &name {
        tracing::warn!(%error, "place name lookup failed, continuing without a name");
    }
    Ok(LocatedPosition::from_name_lookup(coordinates, name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_parse_with_optional_whitespace() {
        assert_eq!(
            parse_position("40.7128,-74.006").unwrap(),
            Coordinates::new(40.7128, -74.006)
        );
        assert_eq!(
            parse_position(" 39.7392 , -104.9903 ").unwrap(),
            Coordinates::new(39.7392, -104.9903)
        );
    }

    #[test]
    fn malformed_positions_are_facility_failures() {
        let error = parse_position("somewhere").unwrap_err();
        assert!(matches!(error, LocationError::PositionUnavailable(_)));

        let error = parse_position("40.7,north").unwrap_err();
        assert!(matches!(error, LocationError::PositionUnavailable(_)));
    }

    #[tokio::test]
    async fn unset_variable_means_unsupported() {
        let source = EnvPositionSource::from_var("QUICKELEV_TEST_POSITION_UNSET");
        let error = source.current_position().await.unwrap_err();
        assert!(matches!(error, LocationError::Unsupported));
    }

    #[tokio::test]
    async fn set_variable_yields_coordinates() {
        // Unique variable name so parallel tests cannot interfere.
        std::env::set_var("QUICKELEV_TEST_POSITION_SET", "35.3606,138.7274");
        let source = EnvPositionSource::from_var("QUICKELEV_TEST_POSITION_SET");
        assert_eq!(
            source.current_position().await.unwrap(),
            Coordinates::new(35.3606, 138.7274)
        );
    }
}
