//! Fallback chains over environment variables.

mod builder;
mod env;
mod error;
mod helpers;
mod source;
pub mod spec;

pub use builder::Resolver;
pub use env::{Environment, ProcessEnv};
pub use error::SpecError;
pub use helpers::{append, chain, join, prepend};
pub use source::{Fusion, Source, Transform};
pub use spec::ChainSpec;
