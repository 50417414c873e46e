//! Mount Configuration
//!
//! The anchor identifier is fixed by the host page. The only runtime knob is
//! debug logging, read from the page's query string.

/// Identifier of the element the root component mounts into
pub const ANCHOR_ID: &str = "root";

/// Bootstrap configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MountConfig {
    /// Element id to resolve as the mount target
    pub anchor_id: String,

    /// Verbose logging
    pub debug: bool,
}

impl Default for MountConfig {
    fn default() -> Self {
        Self {
            anchor_id: ANCHOR_ID.into(),
            debug: false,
        }
    }
}

impl MountConfig {
    /// Default configuration with overrides taken from a URL query string.
    ///
    /// Accepts the string with or without its leading `?`. `debug=1` and
    /// `debug=true` turn on debug logging; every other key is ignored.
    pub fn from_query(query: &str) -> Self {
        let mut config = Self::default();
        let query = query.strip_prefix('?').unwrap_or(query);

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            if let Some(("debug", value)) = pair.split_once('=') {
                config.debug = matches!(value, "1" | "true");
            }
        }

        config
    }

    /// Override the anchor identifier
    pub fn with_anchor(mut self, anchor_id: impl Into<String>) -> Self {
        self.anchor_id = anchor_id.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_anchor() {
        let config = MountConfig::default();
        assert_eq!(config.anchor_id, "root");
        assert!(!config.debug);
    }

    #[test]
    fn test_query_enables_debug() {
        assert!(MountConfig::from_query("?debug=1").debug);
        assert!(MountConfig::from_query("theme=dark&debug=true").debug);
    }

    #[test]
    fn test_query_ignores_other_values() {
        assert!(!MountConfig::from_query("").debug);
        assert!(!MountConfig::from_query("?debug=0").debug);
        assert!(!MountConfig::from_query("?debug").debug);
        assert!(!MountConfig::from_query("?nodebug=1").debug);
    }

    #[test]
    fn test_query_never_moves_anchor() {
        let config = MountConfig::from_query("?anchor_id=app&debug=1");
        assert_eq!(config.anchor_id, ANCHOR_ID);
    }

    #[test]
    fn test_with_anchor() {
        let config = MountConfig::default().with_anchor("app");
        assert_eq!(config.anchor_id, "app");
    }
}
