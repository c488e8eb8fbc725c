use crate::chain::SpecError;
use thiserror::Error;

/// Top-level error type for the envchain library.
///
/// Variables that are unset never produce an error; only malformed chain
/// descriptions do.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid chain description: {0}")]
    Spec(#[from] SpecError),
}
