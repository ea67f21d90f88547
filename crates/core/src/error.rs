/// Domain-level errors raised before anything reaches persistence.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// One or more required fields were absent, `null` or empty.
    /// Holds the wire names of the offending fields.
    #[error("Missing fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}
