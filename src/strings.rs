//! Localized diagnostic strings.
//!
//! Error text surfaced to host operators is looked up by a fixed string key
//! so deployments can ship translated tables. The table is process-wide,
//! read-only, and initialized once: either the built-in English table on
//! first use, or a table the host installs at startup via [`install`].
//!
//! # Example
//!
//! ```
//! use servkit::strings::{keys, Strings};
//!
//! let strings = Strings::new();
//! assert!(strings.get(keys::CONFIG_NOT_INITIALIZED).contains("initialized"));
//! ```

use std::collections::HashMap;
use std::sync::OnceLock;

/// Well-known diagnostic keys.
pub mod keys {
    /// A configuration-derived accessor ran before initialization.
    pub const CONFIG_NOT_INITIALIZED: &str = "err.handler_config_not_initialized";
}

/// An immutable table of diagnostic text keyed by string identifier.
///
/// Unknown keys fall back to the key itself so a missing translation is
/// visible in logs rather than a panic or an empty message.
#[derive(Debug, Clone, Default)]
pub struct Strings {
    overrides: HashMap<String, String>,
}

impl Strings {
    /// Create a table serving the built-in English text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table with translated text layered over the built-ins.
    pub fn with_overrides(overrides: HashMap<String, String>) -> Self {
        Self { overrides }
    }

    /// Look up the text for a key.
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        if let Some(text) = self.overrides.get(key) {
            return text;
        }
        builtin(key).unwrap_or(key)
    }
}

/// Built-in English table.
fn builtin(key: &str) -> Option<&'static str> {
    match key {
        keys::CONFIG_NOT_INITIALIZED => {
            Some("handler configuration has not been initialized; the host must call initialize(config) before this operation")
        }
        _ => None,
    }
}

static GLOBAL: OnceLock<Strings> = OnceLock::new();

/// Install the process-wide table.
///
/// Must run before the first lookup (i.e. at host startup, before any
/// handler is placed into service). Returns `false` if a table was already
/// in place, in which case the existing table stays.
pub fn install(strings: Strings) -> bool {
    GLOBAL.set(strings).is_ok()
}

/// The process-wide table, defaulting to the built-in English text.
pub fn global() -> &'static Strings {
    GLOBAL.get_or_init(Strings::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_text_for_known_key() {
        let strings = Strings::new();
        let text = strings.get(keys::CONFIG_NOT_INITIALIZED);
        assert!(text.contains("initialize(config)"));
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        let strings = Strings::new();
        assert_eq!(strings.get("err.no_such_key"), "err.no_such_key");
    }

    #[test]
    fn test_overrides_shadow_builtins() {
        let mut table = HashMap::new();
        table.insert(
            keys::CONFIG_NOT_INITIALIZED.to_string(),
            "konfiguration fehlt".to_string(),
        );
        let strings = Strings::with_overrides(table);

        assert_eq!(strings.get(keys::CONFIG_NOT_INITIALIZED), "konfiguration fehlt");
        // Keys without an override still serve built-in/fallback text.
        assert_eq!(strings.get("err.other"), "err.other");
    }

    #[test]
    fn test_global_serves_builtins() {
        // The global table may already be initialized by another test; either
        // way it must serve a non-empty diagnostic for the known key.
        let text = global().get(keys::CONFIG_NOT_INITIALIZED);
        assert!(!text.is_empty());
    }
}
