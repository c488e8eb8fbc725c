//! Read-only access to environment variables.

use std::collections::{BTreeMap, HashMap};

/// A table of named string variables that sources read from.
///
/// Implementations must not mutate anything on lookup. An empty value is
/// returned as-is; callers decide whether empty counts as unset.
pub trait Environment {
    fn get(&self, name: &str) -> Option<String>;
}

/// The live process environment.
///
/// Every lookup reads the current value, so results follow changes made by
/// the hosting process between queries. Values that are not valid Unicode
/// are reported as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }
}

impl<S: std::hash::BuildHasher> Environment for HashMap<String, String, S> {
    fn get(&self, name: &str) -> Option<String> {
        HashMap::get(self, name).cloned()
    }
}

impl Environment for BTreeMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        BTreeMap::get(self, name).cloned()
    }
}

/// Reads `name` and treats an empty value the same as an unset one.
pub(crate) fn lookup_non_empty<E: Environment + ?Sized>(env: &E, name: &str) -> Option<String> {
    env.get(name).filter(|value| !value.is_empty())
}
