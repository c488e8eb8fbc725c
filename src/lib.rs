pub mod chain;
mod error;

pub use chain::{
    append, join, prepend, ChainSpec, Environment, Fusion, ProcessEnv, Resolver, Source,
    SpecError, Transform,
};
pub use error::Error;
