//! Cached configuration and the delegating accessors built on it.

use std::error::Error;
use std::sync::{Arc, OnceLock};

use crate::config::HandlerConfig;
use crate::context::HostContext;
use crate::error::{HandlerError, Result};

/// Write-once configuration slot embedded by every handler.
///
/// The host installs a [`HandlerConfig`] exactly once through
/// [`Handler::initialize`](crate::Handler::initialize); every
/// configuration-derived accessor then reads the cached value. Before
/// installation the accessors fail with
/// [`HandlerError::NotInitialized`] rather than defaulting silently.
///
/// # Thread Safety
///
/// The slot is an `OnceLock`, so completing `install` happens-before any
/// read that observes the value. A host that awaits `initialize` before
/// dispatching `process` therefore needs no further synchronization around
/// this state.
#[derive(Debug, Default)]
pub struct HandlerBase {
    config: OnceLock<Arc<HandlerConfig>>,
}

impl HandlerBase {
    /// Create an unconfigured base.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the host-supplied configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError::AlreadyInitialized`] on a second call; the
    /// first configuration stays in place.
    pub fn install(&self, config: Arc<HandlerConfig>) -> Result<()> {
        self.config
            .set(config)
            .map_err(|_| HandlerError::AlreadyInitialized)
    }

    /// The installed configuration, `None` before initialization.
    pub fn config(&self) -> Option<Arc<HandlerConfig>> {
        self.config.get().cloned()
    }

    /// Single guard shared by all delegating accessors.
    fn require_config(&self) -> Result<&HandlerConfig> {
        self.config
            .get()
            .map(|config| config.as_ref())
            .ok_or_else(HandlerError::not_initialized)
    }

    /// Value of a named initialization parameter.
    ///
    /// `Ok(None)` for an unknown key; the not-initialized condition only
    /// when no configuration is installed.
    pub fn init_parameter(&self, name: &str) -> Result<Option<&str>> {
        Ok(self.require_config()?.init_parameter(name))
    }

    /// Names of all initialization parameters; empty when none declared.
    pub fn init_parameter_names(&self) -> Result<Vec<String>> {
        Ok(self.require_config()?.init_parameter_names())
    }

    /// The shared host context.
    pub fn context(&self) -> Result<Arc<dyn HostContext>> {
        Ok(self.require_config()?.context())
    }

    /// The handler's logical name as declared by the host.
    pub fn handler_name(&self) -> Result<&str> {
        Ok(self.require_config()?.handler_name())
    }

    /// Write `"<name>: <msg>"` to the host's log sink.
    pub fn log(&self, msg: &str) -> Result<()> {
        let config = self.require_config()?;
        config
            .context()
            .log(&format!("{}: {}", config.handler_name(), msg));
        Ok(())
    }

    /// Write `"<name>: <msg>"` plus the failure detail to the log sink.
    pub fn log_error(&self, msg: &str, cause: &(dyn Error + 'static)) -> Result<()> {
        let config = self.require_config()?;
        config
            .context()
            .log_error(&format!("{}: {}", config.handler_name(), msg), cause);
        Ok(())
    }
}
