/// One provider's normalized temperature for a single query.
///
/// The three scales express the same physical temperature and are kept
/// consistent by the converters in [`crate::units`]. `(0.0, 0.0)`
/// coordinates mean "unknown"; an all-zero reading is the "no
/// measurement" sentinel (0 K is physically impossible, so it is safe to
/// treat it as absent data).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Reading {
    pub celsius: f64,
    pub fahrenheit: f64,
    pub kelvin: f64,
    pub latitude: f64,
    pub longitude: f64,
}

impl Reading {
    /// Whether this reading carries an actual measurement.
    pub fn is_measured(&self) -> bool {
        self.kelvin > 0.0
    }

    /// Whether both coordinates are present (non-zero).
    pub fn has_coordinates(&self) -> bool {
        self.latitude != 0.0 && self.longitude != 0.0
    }
}

/// Input to one aggregation pass.
///
/// The city name is opaque to the core and passed to providers verbatim.
/// A `(0.0, 0.0)` coordinate pair means the caller does not know the
/// location yet.
#[derive(Debug, Clone)]
pub struct Query {
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Query {
    pub fn for_city(city: impl Into<String>) -> Self {
        Self { city: city.into(), latitude: 0.0, longitude: 0.0 }
    }
}

/// The merged outcome of querying all providers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregateResult {
    pub latitude: f64,
    pub longitude: f64,
    /// Mean of the included readings; `NaN` when no reading qualified.
    pub celsius: f64,
}
