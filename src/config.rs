//! Handler configuration supplied by the host container.
//!
//! A [`HandlerConfig`] bundles the handler's logical name, its named
//! initialization parameters, and a reference to the shared
//! [`HostContext`]. It is built by the host (never by the handler), shared
//! behind an `Arc`, and read-only from the handler's side.
//!
//! The host can assemble one programmatically with
//! [`HandlerConfig::builder`], or parse the JSON configuration document it
//! received over its control plane with [`HandlerConfig::from_json`].
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use servkit::{HandlerConfig, TracingContext};
//!
//! let config = HandlerConfig::builder("greeter")
//!     .parameter("greeting", "hello")
//!     .context(Arc::new(TracingContext::new()))
//!     .build();
//!
//! assert_eq!(config.handler_name(), "greeter");
//! assert_eq!(config.init_parameter("greeting"), Some("hello"));
//! assert_eq!(config.init_parameter("missing"), None);
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::context::{HostContext, TracingContext};
use crate::error::Result;

/// Read-only configuration for one handler instance.
///
/// Parameter keys are unique; the host decides their meaning. The embedded
/// context is the deployment-wide environment facade, not per-handler state.
#[derive(Clone)]
pub struct HandlerConfig {
    name: String,
    parameters: HashMap<String, String>,
    context: Arc<dyn HostContext>,
}

impl HandlerConfig {
    /// Start building a configuration for the named handler.
    pub fn builder(name: impl Into<String>) -> HandlerConfigBuilder {
        HandlerConfigBuilder {
            name: name.into(),
            parameters: HashMap::new(),
            context: None,
        }
    }

    /// Parse a JSON configuration document delivered by the host.
    ///
    /// The context cannot travel in the document and is supplied alongside.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError::Json`](crate::HandlerError::Json) for a
    /// malformed document.
    pub fn from_json(document: &str, context: Arc<dyn HostContext>) -> Result<Self> {
        let doc: ConfigDocument = serde_json::from_str(document)?;
        Ok(Self {
            name: doc.name,
            parameters: doc.parameters,
            context,
        })
    }

    /// The handler's logical name as declared by the host.
    pub fn handler_name(&self) -> &str {
        &self.name
    }

    /// Value of a named initialization parameter, `None` if not declared.
    pub fn init_parameter(&self, name: &str) -> Option<&str> {
        self.parameters.get(name).map(String::as_str)
    }

    /// Names of all initialization parameters, sorted; empty if none.
    pub fn init_parameter_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.parameters.keys().cloned().collect();
        names.sort();
        names
    }

    /// The shared host context.
    pub fn context(&self) -> Arc<dyn HostContext> {
        Arc::clone(&self.context)
    }

    /// Serialize back into the control-plane document form.
    ///
    /// The context is deliberately excluded; it must be re-supplied when the
    /// document is parsed again.
    pub fn to_document(&self) -> ConfigDocument {
        ConfigDocument {
            name: self.name.clone(),
            parameters: self.parameters.clone(),
        }
    }
}

impl fmt::Debug for HandlerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerConfig")
            .field("name", &self.name)
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

/// Builder for [`HandlerConfig`].
pub struct HandlerConfigBuilder {
    name: String,
    parameters: HashMap<String, String>,
    context: Option<Arc<dyn HostContext>>,
}

impl HandlerConfigBuilder {
    /// Add one initialization parameter. Re-adding a key replaces its value.
    pub fn parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    /// Set the shared host context. Defaults to [`TracingContext`].
    pub fn context(mut self, context: Arc<dyn HostContext>) -> Self {
        self.context = Some(context);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> HandlerConfig {
        HandlerConfig {
            name: self.name,
            parameters: self.parameters,
            context: self
                .context
                .unwrap_or_else(|| Arc::new(TracingContext::new())),
        }
    }
}

/// Wire form of a configuration as exchanged on the host's control plane.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigDocument {
    /// Handler's logical name.
    pub name: String,
    /// Named initialization parameters.
    #[serde(default)]
    pub parameters: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_collects_parameters() {
        let config = HandlerConfig::builder("files")
            .parameter("root", "/srv/files")
            .parameter("index", "index.html")
            .build();

        assert_eq!(config.handler_name(), "files");
        assert_eq!(config.init_parameter("root"), Some("/srv/files"));
        assert_eq!(config.init_parameter("index"), Some("index.html"));
        assert_eq!(config.init_parameter("nope"), None);
    }

    #[test]
    fn test_parameter_names_sorted() {
        let config = HandlerConfig::builder("h")
            .parameter("zeta", "1")
            .parameter("alpha", "2")
            .parameter("mid", "3")
            .build();

        assert_eq!(config.init_parameter_names(), vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_parameter_names_empty_when_none() {
        let config = HandlerConfig::builder("bare").build();
        assert!(config.init_parameter_names().is_empty());
    }

    #[test]
    fn test_duplicate_key_last_value_wins() {
        let config = HandlerConfig::builder("h")
            .parameter("mode", "draft")
            .parameter("mode", "final")
            .build();

        assert_eq!(config.init_parameter("mode"), Some("final"));
        assert_eq!(config.init_parameter_names().len(), 1);
    }

    #[test]
    fn test_from_json_document() {
        let doc = r#"{"name":"echo","parameters":{"prefix":"> "}}"#;
        let config =
            HandlerConfig::from_json(doc, Arc::new(TracingContext::new())).unwrap();

        assert_eq!(config.handler_name(), "echo");
        assert_eq!(config.init_parameter("prefix"), Some("> "));
    }

    #[test]
    fn test_from_json_parameters_optional() {
        let config = HandlerConfig::from_json(
            r#"{"name":"echo"}"#,
            Arc::new(TracingContext::new()),
        )
        .unwrap();

        assert!(config.init_parameter_names().is_empty());
    }

    #[test]
    fn test_from_json_malformed_is_error() {
        let result = HandlerConfig::from_json("{not json", Arc::new(TracingContext::new()));
        assert!(matches!(
            result,
            Err(crate::HandlerError::Json(_))
        ));
    }

    #[test]
    fn test_document_round_trip_excludes_context() {
        let config = HandlerConfig::builder("echo")
            .parameter("prefix", "> ")
            .build();

        let json = serde_json::to_string(&config.to_document()).unwrap();
        let parsed =
            HandlerConfig::from_json(&json, Arc::new(TracingContext::new())).unwrap();

        assert_eq!(parsed.handler_name(), "echo");
        assert_eq!(parsed.init_parameter("prefix"), Some("> "));
    }
}
