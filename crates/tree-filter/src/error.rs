use thiserror::Error;

/// Failure raised by a lazy producer. The engine hands it back untouched, so
/// callers can downcast to their own error type.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Reasons a value tree cannot be handed to a plain-data consumer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlainDataError {
    #[error("dual-view node must be filtered before conversion")]
    UnfilteredDualView,
    #[error("lazy node must be filtered before conversion")]
    UnfilteredLazy,
    #[error("opaque object has no plain data representation: {0}")]
    Opaque(String),
    #[error("number {0} cannot be represented as JSON")]
    NonFiniteNumber(f64),
}
