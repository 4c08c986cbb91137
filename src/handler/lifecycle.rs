//! The handler lifecycle trait.

use std::error::Error;
use std::sync::Arc;

use async_trait::async_trait;

use crate::config::HandlerConfig;
use crate::context::HostContext;
use crate::error::Result;
use crate::message::{Request, Response};

use super::base::HandlerBase;

/// A protocol-independent, container-hosted request handler.
///
/// Implementing a minimal handler takes two methods: [`base`](Handler::base)
/// wires in an embedded [`HandlerBase`], and [`process`](Handler::process)
/// services one exchange. Everything else has a default:
/// [`init`](Handler::init) and [`teardown`](Handler::teardown) are no-op
/// override points, [`handler_info`](Handler::handler_info) is empty, and
/// the accessors delegate to the configuration cached in the base.
///
/// The host container drives the lifecycle in temporal order:
/// [`initialize`](Handler::initialize) once, then
/// [`process`](Handler::process) zero or more times, then
/// [`teardown`](Handler::teardown) once when the handler is taken out of
/// service. The host must let `initialize` complete before dispatching the
/// first `process` call.
///
/// # Example
///
/// ```
/// use async_trait::async_trait;
/// use servkit::{Handler, HandlerBase, Request, Response, Result};
///
/// #[derive(Default)]
/// struct Echo {
///     base: HandlerBase,
/// }
///
/// #[async_trait]
/// impl Handler for Echo {
///     fn base(&self) -> &HandlerBase {
///         &self.base
///     }
///
///     async fn process(&self, request: &Request, response: &mut Response) -> Result<()> {
///         response.write(request.payload().clone());
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Handler: Send + Sync {
    /// The embedded configuration slot the provided methods operate on.
    fn base(&self) -> &HandlerBase;

    /// Service one request/response exchange.
    ///
    /// The sole required hook. Failures propagate unchanged to the host,
    /// which owns error-response generation and any retry policy.
    async fn process(&self, request: &Request, response: &mut Response) -> Result<()>;

    /// Entry point the host calls to place the handler into service.
    ///
    /// Stores the configuration in [`base`](Handler::base), then awaits
    /// [`init`](Handler::init). Called exactly once by the host, before any
    /// request is serviced. Override this form only to intercept storage of
    /// the configuration itself; otherwise override `init`.
    ///
    /// # Errors
    ///
    /// Propagates whatever `init` fails with; on such a failure the host
    /// must not place the handler into service. A repeated call fails with
    /// [`HandlerError::AlreadyInitialized`](crate::HandlerError::AlreadyInitialized).
    async fn initialize(&self, config: Arc<HandlerConfig>) -> Result<()> {
        self.base().install(config)?;
        self.init().await
    }

    /// Convenience initialization hook; default does nothing.
    ///
    /// Runs after the configuration is cached, so all accessors already
    /// work here (e.g. to read required parameters or acquire resources).
    async fn init(&self) -> Result<()> {
        Ok(())
    }

    /// Called by the host when the handler is taken out of service.
    ///
    /// No failure channel: overrides must handle their own errors, e.g. by
    /// logging through [`log_error`](Handler::log_error). Best-effort only;
    /// a crashing host may never call it.
    async fn teardown(&self) {}

    /// Descriptive metadata (author, version); default empty.
    fn handler_info(&self) -> &str {
        ""
    }

    /// The cached configuration, `None` before [`initialize`](Handler::initialize).
    fn config(&self) -> Option<Arc<HandlerConfig>> {
        self.base().config()
    }

    /// Value of a named initialization parameter.
    ///
    /// `Ok(None)` for an unknown key. Fails with the not-initialized
    /// condition before `initialize` has run, as do all accessors below.
    fn init_parameter<'a>(&'a self, name: &str) -> Result<Option<&'a str>> {
        self.base().init_parameter(name)
    }

    /// Names of all initialization parameters; empty when none declared.
    fn init_parameter_names(&self) -> Result<Vec<String>> {
        self.base().init_parameter_names()
    }

    /// The shared host context.
    fn context(&self) -> Result<Arc<dyn HostContext>> {
        self.base().context()
    }

    /// The handler's logical name as declared by the host.
    fn handler_name(&self) -> Result<&str> {
        self.base().handler_name()
    }

    /// Write `"<name>: <msg>"` to the host's log sink.
    fn log(&self, msg: &str) -> Result<()> {
        self.base().log(msg)
    }

    /// Write `"<name>: <msg>"` plus the failure detail to the log sink.
    fn log_error(&self, msg: &str, cause: &(dyn Error + 'static)) -> Result<()> {
        self.base().log_error(msg, cause)
    }
}
