//! Wire constants shared with the transport layer

/// Path of the source creation endpoint
pub const SOURCES_ENDPOINT: &str = "/v1/sources";

/// Content type of an encoded parameter body
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Currency codes fixed by particular payment methods
pub mod currencies {
    /// Euro, used by every European bank redirect method
    pub const EUR: &str = "EUR";
}
