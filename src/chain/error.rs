use thiserror::Error;

/// Errors raised while turning a chain description into a [`Resolver`](super::Resolver).
///
/// Indexes refer to the position of the entry in the `source` array.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SpecError {
    #[error("failed to parse chain description: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("source #{index} has an empty variable name")]
    EmptyVarName { index: usize },

    #[error("merge source #{index} names no variables")]
    EmptyMergeGroup { index: usize },

    #[error("merge source #{index} contains an empty variable name")]
    EmptyMergeName { index: usize },
}
