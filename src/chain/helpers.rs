//! Ready-made transforms and fusions.

use super::source::{Fusion, Transform};

/// Prepends `prefix` to the resolved value.
pub fn prepend(prefix: impl Into<String>) -> Transform {
    let prefix = prefix.into();
    Transform::new(move |value| format!("{prefix}{value}"))
}

/// Appends `suffix` to the resolved value.
pub fn append(suffix: impl Into<String>) -> Transform {
    let suffix = suffix.into();
    Transform::new(move |value| format!("{value}{suffix}"))
}

/// Joins the fused values with `separator`.
pub fn join(separator: impl Into<String>) -> Fusion {
    let separator = separator.into();
    Fusion::new(move |values| values.join(&separator))
}

/// Applies `first`, then `second`.
pub fn chain(first: Transform, second: Transform) -> Transform {
    Transform::new(move |value| second.apply(&first.apply(value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepend() {
        assert_eq!(prepend("pre-").apply("bar"), "pre-bar");
    }

    #[test]
    fn test_append() {
        assert_eq!(append("-post").apply("bar"), "bar-post");
    }

    #[test]
    fn test_join() {
        let values = vec!["127.0.0.1".to_string(), "6379".to_string()];
        assert_eq!(join(":").apply(&values), "127.0.0.1:6379");
        assert_eq!(join(", ").apply(&values[..1]), "127.0.0.1");
    }

    #[test]
    fn test_chain_order() {
        let wrapped = chain(prepend("redis://"), append("/0"));
        assert_eq!(wrapped.apply("cache"), "redis://cache/0");
    }
}
