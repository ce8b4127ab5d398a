use thiserror::Error;

/// Recoverable failures of the strict accessors.
///
/// Everything else the bimap reports is either a logical no-op (a returned
/// end cursor) or a checked precondition violation, which panics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BimapError {
    #[error("no such element was found")]
    NotFound,
}
