//! Declarative chain descriptions.
//!
//! A chain can be written down instead of assembled in code:
//!
//! ```toml
//! default = "localhost:6379"
//!
//! [[source]]
//! var = "REDIS_URL"
//!
//! [[source]]
//! var = "REDIS_HOST"
//! prepend = "redis://"
//!
//! [[source]]
//! merge = ["REDIS_PORT_6379_TCP_ADDR", "REDIS_PORT_6379_TCP_PORT"]
//! join = ":"
//! ```
//!
//! Only the built-in helpers are available here; arbitrary closures need the
//! builder API.

use serde::Deserialize;

use super::builder::Resolver;
use super::helpers::{append, chain, join, prepend};
use super::SpecError;

/// A serializable description of a [`Resolver`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChainSpec {
    #[serde(default, rename = "source")]
    pub sources: Vec<SourceSpec>,
    #[serde(default)]
    pub default: Option<String>,
}

/// One entry of a [`ChainSpec`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SourceSpec {
    Var(VarSpec),
    Merge(MergeSpec),
}

/// A single variable. When both `prepend` and `append` are given, the prefix
/// is added first.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VarSpec {
    pub var: String,
    #[serde(default)]
    pub prepend: Option<String>,
    #[serde(default)]
    pub append: Option<String>,
}

/// Variables joined with a separator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MergeSpec {
    pub merge: Vec<String>,
    pub join: String,
}

impl ChainSpec {
    /// Parses a chain description from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, SpecError> {
        Ok(toml::from_str(text)?)
    }

    /// Validates the description and builds the resolver it describes.
    pub fn build(&self) -> Result<Resolver, SpecError> {
        let mut resolver = Resolver::new();

        for (index, source) in self.sources.iter().enumerate() {
            resolver = match source {
                SourceSpec::Var(VarSpec {
                    var,
                    prepend: prefix,
                    append: suffix,
                }) => {
                    if var.is_empty() {
                        return Err(SpecError::EmptyVarName { index });
                    }
                    let transform = match (prefix, suffix) {
                        (None, None) => None,
                        (Some(p), None) => Some(prepend(p.as_str())),
                        (None, Some(s)) => Some(append(s.as_str())),
                        (Some(p), Some(s)) => {
                            Some(chain(prepend(p.as_str()), append(s.as_str())))
                        }
                    };
                    match transform {
                        Some(transform) => resolver.add_with_transform(var.as_str(), transform),
                        None => resolver.add(var.as_str()),
                    }
                }
                SourceSpec::Merge(MergeSpec {
                    merge,
                    join: separator,
                }) => {
                    if merge.is_empty() {
                        return Err(SpecError::EmptyMergeGroup { index });
                    }
                    if merge.iter().any(String::is_empty) {
                        return Err(SpecError::EmptyMergeName { index });
                    }
                    resolver.merge(join(separator.as_str()), merge.iter().cloned())
                }
            };
        }

        Ok(match &self.default {
            Some(default) => resolver.with_default(default.as_str()),
            None => resolver,
        })
    }
}

impl Resolver {
    /// Parses and builds a resolver from a TOML chain description.
    ///
    /// See the [`spec`](crate::chain::spec) module for the format.
    pub fn from_toml(text: &str) -> Result<Self, SpecError> {
        ChainSpec::from_toml(text)?.build()
    }
}
