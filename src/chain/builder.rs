use super::env::{Environment, ProcessEnv};
use super::source::{Fusion, Source, Transform};

/// Builder and query object for one configuration value.
///
/// Sources are tried in registration order and the first one that yields a
/// value wins, so the order of [`add`](Self::add) and [`merge`](Self::merge)
/// calls is the precedence. If no source matches, the default is used.
///
/// ## Example
///
/// ```
/// use envchain::{join, prepend, Resolver};
///
/// let redis = Resolver::new()
///     .add("REDIS_URL")
///     .add_with_transform("REDIS_HOST", prepend("redis://"))
///     .merge(join(":"), ["REDIS_PORT_6379_TCP_ADDR", "REDIS_PORT_6379_TCP_PORT"])
///     .with_default("localhost:6379");
///
/// let url = redis.resolve();
/// # let _ = url;
/// ```
///
/// Every query reads the environment again; nothing is cached. Configure the
/// resolver fully before sharing it across threads.
#[derive(Debug, Clone, Default)]
#[must_use = "resolvers do nothing until they are queried"]
pub struct Resolver {
    sources: Vec<Source>,
    default: Option<String>,
}

impl Resolver {
    /// Creates a resolver with no sources and no default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a variable whose value is used as-is.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty.
    pub fn add(self, name: impl Into<String>) -> Self {
        self.push(Source::var(name, None))
    }

    /// Adds a variable whose value is passed through `transform` when set.
    ///
    /// The transformed value is returned even if it is empty.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty.
    pub fn add_with_transform(self, name: impl Into<String>, transform: Transform) -> Self {
        self.push(Source::var(name, Some(transform)))
    }

    /// Closure form of [`add_with_transform`](Self::add_with_transform).
    pub fn add_with_transform_fn<F>(self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.add_with_transform(name, Transform::new(f))
    }

    /// Adds a group of variables combined with `fusion`.
    ///
    /// The group matches only when every variable is set and non-empty and
    /// the fused value is non-empty.
    ///
    /// # Panics
    ///
    /// Panics if `names` is empty or contains an empty name.
    pub fn merge<I>(self, fusion: Fusion, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.push(Source::fusion(names, fusion))
    }

    /// Closure form of [`merge`](Self::merge).
    pub fn merge_fn<F, I>(self, f: F, names: I) -> Self
    where
        F: Fn(&[String]) -> String + Send + Sync + 'static,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.merge(Fusion::new(f), names)
    }

    /// Sets the value returned when no source matches, replacing any earlier
    /// default.
    ///
    /// An empty default is indistinguishable from having none: resolution
    /// still reports nothing found.
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    fn push(mut self, source: Source) -> Self {
        self.sources.push(source);
        self
    }

    /// Returns the first match against the process environment, or an empty
    /// string when nothing matches.
    pub fn resolve(&self) -> String {
        self.resolve_in(&ProcessEnv)
    }

    /// Returns the first match against the process environment, falling back
    /// to the default.
    pub fn resolve_ok(&self) -> Option<String> {
        self.resolve_ok_in(&ProcessEnv)
    }

    /// [`resolve`](Self::resolve) against an arbitrary environment.
    pub fn resolve_in<E: Environment + ?Sized>(&self, env: &E) -> String {
        self.resolve_ok_in(env).unwrap_or_default()
    }

    /// [`resolve_ok`](Self::resolve_ok) against an arbitrary environment.
    pub fn resolve_ok_in<E: Environment + ?Sized>(&self, env: &E) -> Option<String> {
        for (index, source) in self.sources.iter().enumerate() {
            match source.resolve(env) {
                Some(value) => {
                    tracing::debug!(index, source = %source, "resolved from source");
                    return Some(value);
                }
                None => tracing::trace!(index, source = %source, "source did not match"),
            }
        }

        match self.default_value() {
            Some(default) => {
                tracing::debug!("no source matched, using default");
                Some(default.to_string())
            }
            None => {
                tracing::debug!(sources = self.sources.len(), "no source matched");
                None
            }
        }
    }

    /// The configured default, if it is non-empty.
    pub fn default_value(&self) -> Option<&str> {
        self.default.as_deref().filter(|value| !value.is_empty())
    }

    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}
