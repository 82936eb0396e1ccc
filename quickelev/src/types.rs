//! Shared value types for location and elevation lookups.
//!
//! Every value here is constructed once from a provider response and handed
//! to the caller by value; nothing is mutated after construction.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees (WGS84).
///
/// No range validation is performed. Out-of-range values are passed through
/// to the provider, whose rejection surfaces as a request failure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

impl Coordinates {
    /// Create a new coordinate pair.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A place returned by the geocoding search.
///
/// `name` is the provider-supplied free-form address; results compare by
/// structure only, there is no identity beyond it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedLocation {
    /// Free-form address string as returned by the provider.
    pub name: String,
    /// Position of the place.
    pub coordinates: Coordinates,
}

/// An elevation value at a provider-resolved position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ElevationReading {
    /// Elevation above sea level in meters.
    pub elevation: f64,
    /// The coordinates the provider actually resolved. These may differ in
    /// precision from the request when the provider snaps to its own grid.
    pub coordinates: Coordinates,
}

/// A current-position fix with an optional human-readable place name.
///
/// The name is optional because the reverse-geocode step of the
/// current-location flow may fail without failing the flow as a whole.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocatedPosition {
    /// The detected position.
    pub coordinates: Coordinates,
    /// Place name for the position, if the lookup succeeded.
    pub name: Option<String>,
}

impl LocatedPosition {
    /// Build a located position from a coordinate fix and the outcome of a
    /// place-name lookup. A failed lookup yields a position with no name.
    pub fn from_name_lookup(coordinates: Coordinates, name: crate::Result<String>) -> Self {
        Self {
            coordinates,
            name: name.ok(),
        }
    }
}
