use std::fmt;
use std::sync::Arc;

use super::env::{lookup_non_empty, Environment};

/// A pure function applied to a single resolved value.
///
/// Cloning a `Transform` shares the underlying function.
#[derive(Clone)]
pub struct Transform(Arc<dyn Fn(&str) -> String + Send + Sync>);

impl Transform {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn apply(&self, value: &str) -> String {
        (self.0)(value)
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Transform(..)")
    }
}

/// A pure function combining the values of a group of variables, in the
/// order the variables were declared.
///
/// Cloning a `Fusion` shares the underlying function.
#[derive(Clone)]
pub struct Fusion(Arc<dyn Fn(&[String]) -> String + Send + Sync>);

impl Fusion {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&[String]) -> String + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn apply(&self, values: &[String]) -> String {
        (self.0)(values)
    }
}

impl fmt::Debug for Fusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Fusion(..)")
    }
}

/// One candidate in a resolver's fallback chain.
#[derive(Debug, Clone)]
pub enum Source {
    /// A single variable, optionally transformed.
    Var {
        name: String,
        transform: Option<Transform>,
    },
    /// A group of variables fused into one value. Every variable must be set
    /// and non-empty.
    Fusion { names: Vec<String>, fuse: Fusion },
}

impl Source {
    pub fn var(name: impl Into<String>, transform: Option<Transform>) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "variable name must not be empty");
        Self::Var { name, transform }
    }

    pub fn fusion<I>(names: I, fuse: Fusion) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        assert!(!names.is_empty(), "fusion group must name at least one variable");
        assert!(
            names.iter().all(|name| !name.is_empty()),
            "variable name must not be empty"
        );
        Self::Fusion { names, fuse }
    }

    /// Looks this source up in `env`.
    ///
    /// A single variable that is unset or empty yields `None`. When it is set,
    /// the transform output is returned even if it is empty.
    ///
    /// A fusion group yields `None` as soon as one of its variables is unset
    /// or empty; the remaining variables are not read. An empty fused value
    /// also yields `None`.
    pub fn resolve<E: Environment + ?Sized>(&self, env: &E) -> Option<String> {
        match self {
            Self::Var { name, transform } => {
                let raw = lookup_non_empty(env, name)?;
                Some(match transform {
                    Some(transform) => transform.apply(&raw),
                    None => raw,
                })
            }
            Self::Fusion { names, fuse } => {
                let values = names
                    .iter()
                    .map(|name| lookup_non_empty(env, name))
                    .collect::<Option<Vec<_>>>()?;
                Some(fuse.apply(&values)).filter(|fused| !fused.is_empty())
            }
        }
    }

    /// Variable names this source reads, in lookup order.
    pub fn names(&self) -> &[String] {
        match self {
            Self::Var { name, .. } => std::slice::from_ref(name),
            Self::Fusion { names, .. } => names,
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Var { name, .. } => f.write_str(name),
            Self::Fusion { names, .. } => write!(f, "fusion({})", names.join(", ")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn join_colon() -> Fusion {
        Fusion::new(|values| values.join(":"))
    }

    /// Records every name it is asked for.
    struct Recording<'a> {
        inner: HashMap<String, String>,
        seen: &'a RefCell<Vec<String>>,
    }

    impl Environment for Recording<'_> {
        fn get(&self, name: &str) -> Option<String> {
            self.seen.borrow_mut().push(name.to_string());
            self.inner.get(name).cloned()
        }
    }

    #[test]
    fn test_var_found() {
        let source = Source::var("FOO", None);
        assert_eq!(source.resolve(&env(&[("FOO", "bar")])).as_deref(), Some("bar"));
    }

    #[test]
    fn test_var_missing_or_empty() {
        let source = Source::var("FOO", None);
        assert_eq!(source.resolve(&env(&[])), None);
        assert_eq!(source.resolve(&env(&[("FOO", "")])), None);
    }

    #[test]
    fn test_var_transform_applied() {
        let source = Source::var("FOO", Some(Transform::new(|v| format!("pre-{v}"))));
        assert_eq!(
            source.resolve(&env(&[("FOO", "bar")])).as_deref(),
            Some("pre-bar")
        );
    }

    #[test]
    fn test_var_transform_skipped_when_empty() {
        let source = Source::var("FOO", Some(Transform::new(|_| "always".to_string())));
        assert_eq!(source.resolve(&env(&[("FOO", "")])), None);
    }

    #[test]
    fn test_var_transform_empty_output_still_found() {
        let source = Source::var("FOO", Some(Transform::new(|_| String::new())));
        assert_eq!(source.resolve(&env(&[("FOO", "bar")])).as_deref(), Some(""));
    }

    #[test]
    fn test_fusion_joins_in_declared_order() {
        let source = Source::fusion(["ADDR", "PORT"], join_colon());
        let env = env(&[("PORT", "6379"), ("ADDR", "127.0.0.1")]);
        assert_eq!(source.resolve(&env).as_deref(), Some("127.0.0.1:6379"));
    }

    #[test]
    fn test_fusion_missing_member() {
        let source = Source::fusion(["A", "B"], join_colon());
        assert_eq!(source.resolve(&env(&[("A", "x")])), None);
        assert_eq!(source.resolve(&env(&[("A", "x"), ("B", "")])), None);
    }

    #[test]
    fn test_fusion_stops_at_first_missing() {
        let seen = RefCell::new(Vec::new());
        let recording = Recording {
            inner: env(&[("C", "z")]),
            seen: &seen,
        };
        let source = Source::fusion(["A", "B", "C"], join_colon());

        assert_eq!(source.resolve(&recording), None);
        assert_eq!(*seen.borrow(), vec!["A".to_string()]);
    }

    #[test]
    fn test_fusion_empty_result_not_found() {
        let source = Source::fusion(["A"], Fusion::new(|_| String::new()));
        assert_eq!(source.resolve(&env(&[("A", "x")])), None);
    }

    #[test]
    fn test_shared_transform() {
        let upper = Transform::new(|v| v.to_uppercase());
        let a = Source::var("A", Some(upper.clone()));
        let b = Source::var("B", Some(upper));
        let env = env(&[("A", "one"), ("B", "two")]);

        assert_eq!(a.resolve(&env).as_deref(), Some("ONE"));
        assert_eq!(b.resolve(&env).as_deref(), Some("TWO"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Source::var("FOO", None).to_string(), "FOO");
        assert_eq!(
            Source::fusion(["A", "B"], join_colon()).to_string(),
            "fusion(A, B)"
        );
    }

    #[test]
    #[should_panic(expected = "variable name must not be empty")]
    fn test_empty_name_rejected() {
        let _ = Source::var("", None);
    }

    #[test]
    #[should_panic(expected = "at least one variable")]
    fn test_empty_group_rejected() {
        let _ = Source::fusion(Vec::<String>::new(), join_colon());
    }
}
