use thiserror::Error;

/// Core error type shared across samplekit crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A catalog violates its invariants (no categories, empty item list).
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),
    /// A flat reference table is empty or otherwise unusable.
    #[error("invalid table: {0}")]
    InvalidTable(String),
    /// A textual value does not name a known variant.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Convenience alias for results returned by samplekit crates.
pub type Result<T> = std::result::Result<T, Error>;
