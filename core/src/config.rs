//! Recursion policy for header flattening

use serde::{Deserialize, Serialize};

/// Deepest nesting level that is still expanded. Fields found below it are
/// written as single columns whatever their type.
pub const MAX_NESTING_DEPTH: usize = 3;

/// Separator between header path segments
pub const PATH_SEPARATOR: &str = "/";

/// Path segment standing for "the first element" of a sequence
pub const ELEMENT_SEGMENT: &str = "0";

/// Limits and path tokens used while flattening a class into headers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecursionPolicy {
    /// Fields at a depth greater than this are leaves
    pub max_depth: usize,

    /// Separator between path segments
    pub separator: String,

    /// Synthetic segment inserted below a sequence field
    pub element_segment: String,
}

impl Default for RecursionPolicy {
    fn default() -> Self {
        Self {
            max_depth: MAX_NESTING_DEPTH,
            separator: PATH_SEPARATOR.to_string(),
            element_segment: ELEMENT_SEGMENT.to_string(),
        }
    }
}

impl RecursionPolicy {
    /// Whether a field at `depth` must be written as a single column
    #[must_use]
    pub fn is_beyond_limit(&self, depth: usize) -> bool {
        depth > self.max_depth
    }

    /// Prefix for the fields of a recursable class held in `field`
    #[must_use]
    pub fn composite_prefix(&self, prefix: &str, field: &str) -> String {
        format!("{prefix}{field}{}", self.separator)
    }

    /// Prefix for the element fields of a sequence held in `field`
    #[must_use]
    pub fn element_prefix(&self, prefix: &str, field: &str) -> String {
        format!(
            "{prefix}{field}{sep}{seg}{sep}",
            sep = self.separator,
            seg = self.element_segment
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = RecursionPolicy::default();
        assert_eq!(policy.max_depth, 3);
        assert!(!policy.is_beyond_limit(3));
        assert!(policy.is_beyond_limit(4));
    }

    #[test]
    fn test_prefixes() {
        let policy = RecursionPolicy::default();
        assert_eq!(policy.composite_prefix("", "Period"), "Period/");
        assert_eq!(policy.composite_prefix("Period/", "From"), "Period/From/");
        assert_eq!(policy.element_prefix("", "Components"), "Components/0/");
        assert_eq!(
            policy.element_prefix("Quantity/", "Lines"),
            "Quantity/Lines/0/"
        );
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let policy: RecursionPolicy = serde_yaml::from_str("separator: '.'").expect("valid yaml");
        assert_eq!(policy.separator, ".");
        assert_eq!(policy.max_depth, MAX_NESTING_DEPTH);
        assert_eq!(policy.element_segment, ELEMENT_SEGMENT);
    }
}
