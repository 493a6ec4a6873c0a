//! Resolver configuration

/// Shortest string, in characters, treated as a selector
pub const DEFAULT_MIN_SELECTOR_LEN: usize = 2;

/// What single resolution does when a selector matches several elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AmbiguityPolicy {
    /// Emit one warning and use the last match in document order
    #[default]
    Warn,
    /// Fail with [`DomkitError::AmbiguousSelector`](crate::DomkitError::AmbiguousSelector)
    Deny,
}

/// Resolver configuration options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Strings shorter than this are rejected as unknown input instead of
    /// being queried. `0` or `1` lets single-character tags like `"a"` through.
    pub min_selector_len: usize,

    /// Handling of selectors that match more than one element
    pub ambiguity: AmbiguityPolicy,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            min_selector_len: DEFAULT_MIN_SELECTOR_LEN,
            ambiguity: AmbiguityPolicy::Warn,
        }
    }
}

impl ResolverConfig {
    pub fn with_min_selector_len(mut self, len: usize) -> Self {
        self.min_selector_len = len;
        self
    }

    pub fn with_ambiguity(mut self, policy: AmbiguityPolicy) -> Self {
        self.ambiguity = policy;
        self
    }

    /// Whether `input` is long enough to be queried
    pub fn accepts_selector(&self, input: &str) -> bool {
        input.chars().count() >= self.min_selector_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_shareable_across_threads() {
        assert_send_sync::<ResolverConfig>();
        assert_send_sync::<AmbiguityPolicy>();
        assert_send_sync::<crate::Resolver>();
        assert_send_sync::<crate::DomkitError>();
        assert_send_sync::<crate::SelectorElement>();
        assert_send_sync::<crate::SelectorCollection>();
        assert_send_sync::<crate::Props>();
        assert_send_sync::<domkit_dom::Document>();
    }

    #[test]
    fn test_defaults() {
        let config = ResolverConfig::default();
        assert_eq!(config.min_selector_len, 2);
        assert_eq!(config.ambiguity, AmbiguityPolicy::Warn);
        assert!(!config.accepts_selector("a"));
        assert!(!config.accepts_selector(""));
        assert!(config.accepts_selector("ul"));
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        let config = ResolverConfig::default();
        assert!(!config.accepts_selector("é"));
    }

    #[test]
    fn test_builders() {
        let config = ResolverConfig::default()
            .with_min_selector_len(1)
            .with_ambiguity(AmbiguityPolicy::Deny);
        assert!(config.accepts_selector("a"));
        assert_eq!(config.ambiguity, AmbiguityPolicy::Deny);
    }
}
