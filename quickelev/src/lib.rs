//! # QuickElevation core library
//!
//! Find geographic coordinates for a place name (or the host's current
//! position) and look up the elevation at those coordinates.
//!
//! The crate is a thin data-access layer over two public HTTP APIs: a
//! geocoding/search provider (TomTom Search API) and an elevation provider
//! (Open Elevation). Each operation issues a single GET request and
//! normalizes the provider's response into the crate's own value types.
//! There is deliberately no caching, no retrying, no request deduplication
//! and no batching at this layer; callers that want any of those wrap the
//! clients themselves.
//!
//! ## Quick Start
//!
//! ```ignore
//! use quickelev::{Coordinates, ElevationClient, GeocodingClient};
//!
//! let geocoder = GeocodingClient::new("my-tomtom-api-key");
//! let elevation = ElevationClient::new();
//!
//! // Free-text search, provider-ranked order
//! let places = geocoder.search("Denver").await?;
//!
//! // Elevation at the first hit
//! let reading = elevation.lookup(places[0].coordinates).await?;
//! println!("{:.1}m", reading.elevation);
//! ```
//!
//! ## Providers
//!
//! - **TomTom Search API**: free-text search and reverse geocoding,
//!   authenticated by an API key passed explicitly to the client
//!   constructor. Search results are constrained to the US.
//! - **Open Elevation**: elevation lookup, no authentication required.
//!
//! Both endpoint base URLs can be overridden, which is also how embedders
//! point the clients at self-hosted or staging instances.

pub mod elevation;
pub mod error;
pub mod geocoding;
pub mod position;
pub mod types;

// Re-export main types at crate root for convenience
pub use elevation::ElevationClient;
pub use error::{LocationError, Result};
pub use geocoding::{GeocodingClient, GeocodingClientBuilder};
pub use position::{locate, EnvPositionSource, PositionSource};
pub use types::{Coordinates, ElevationReading, LocatedPosition, NamedLocation};
