//! Struct definitions and implementations for [`Location`] and the
//! coordinate types it is built on.
//!
//! A [`Location`] is a named place that becomes a vertex of the
//! [`RouteGraph`](crate::RouteGraph). A [`UserPosition`] is a live
//! device fix; it is never a vertex, but it can be measured against
//! locations. Both expose their position through [`AsCoordinate`], so
//! the distance helpers accept either.

use serde::{Deserialize, Serialize};

use crate::error::{RouterError, RouterResult};

/// Anything that sits at a single point on the globe.
pub trait AsCoordinate {
    /// Returns the point this object represents.
    fn coordinate(&self) -> Coordinate;
}

//------------------------------------------------------------------
// Structs and Implementations
//------------------------------------------------------------------

/// A latitude/longitude pair in decimal degrees.
///
/// Construction does not validate; use [`Coordinate::try_new`] or
/// [`Coordinate::validate`] on untrusted input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate without any range checks.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Coordinate {
            latitude,
            longitude,
        }
    }

    /// Creates a coordinate, rejecting non-finite or out-of-range
    /// values.
    pub fn try_new(latitude: f64, longitude: f64) -> RouterResult<Self> {
        let coordinate = Coordinate::new(latitude, longitude);
        coordinate.validate()?;
        Ok(coordinate)
    }

    /// Checks lat ∈ [-90, 90] and lon ∈ [-180, 180], both finite.
    pub fn validate(&self) -> RouterResult<()> {
        // NaN fails both range checks.
        if (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
        {
            Ok(())
        } else {
            Err(RouterError::InvalidCoordinate {
                latitude: self.latitude,
                longitude: self.longitude,
            })
        }
    }
}

impl AsCoordinate for Coordinate {
    fn coordinate(&self) -> Coordinate {
        *self
    }
}

/// A named place on campus, typically a building.
///
/// Only `id` and `coordinates` matter for routing. The text attributes
/// are opaque and used for search and display. In the serialized form
/// `coordinates` is a `[lat, lng]` array and `category` may also be
/// spelled `department`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Must be unique within one graph.
    pub id: String,

    #[serde(with = "lat_lng_pair")]
    pub coordinates: Coordinate,

    #[serde(default)]
    pub name: String,

    #[serde(default, alias = "department")]
    pub category: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub hours: String,
}

impl Location {
    /// Creates a location with empty text attributes.
    pub fn new(id: impl Into<String>, coordinates: Coordinate) -> Self {
        Location {
            id: id.into(),
            coordinates,
            name: String::new(),
            category: String::new(),
            description: String::new(),
            hours: String::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the category (department, faculty, ...).
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the free-text description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the opening hours text.
    pub fn with_hours(mut self, hours: impl Into<String>) -> Self {
        self.hours = hours.into();
        self
    }

    /// See [`Coordinate::validate`].
    pub fn validate(&self) -> RouterResult<()> {
        self.coordinates.validate()
    }
}

impl AsCoordinate for Location {
    fn coordinate(&self) -> Coordinate {
        self.coordinates
    }
}

/// A position reported by the device's location service.
///
/// The router never reads device state itself; the presentation layer
/// hands fixes in explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserPosition {
    pub latitude: f64,
    pub longitude: f64,

    /// Radius of the reported fix, in meters.
    pub accuracy_m: f64,
}

impl AsCoordinate for UserPosition {
    fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// (De)serializes a [`Coordinate`] as a `[lat, lng]` array.
pub(crate) mod lat_lng_pair {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Coordinate;

    pub fn serialize<S: Serializer>(c: &Coordinate, serializer: S) -> Result<S::Ok, S::Error> {
        (c.latitude, c.longitude).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Coordinate, D::Error> {
        let (latitude, longitude) = <(f64, f64)>::deserialize(deserializer)?;
        Ok(Coordinate::new(latitude, longitude))
    }
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------
