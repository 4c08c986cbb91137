//! Host context - the environment facade handlers log through.
//!
//! The context is owned by the host container and shared by every handler in
//! a deployment. Handlers never construct or mutate it; they only write log
//! lines to it via [`Handler::log`](crate::Handler::log) and
//! [`Handler::log_error`](crate::Handler::log_error).
//!
//! [`TracingContext`] is the stock implementation, forwarding to `tracing`.
//! Hosts with their own log pipeline implement [`HostContext`] directly.

use std::error::Error;

/// Environment facade provided by the host container.
///
/// # Thread Safety
///
/// Shared process-wide behind an `Arc` and read from concurrently dispatched
/// `process` calls, so implementations must be `Send + Sync` and internally
/// synchronized.
pub trait HostContext: Send + Sync {
    /// Write a message to the host's log sink.
    fn log(&self, msg: &str);

    /// Write a message together with the failure that caused it.
    fn log_error(&self, msg: &str, cause: &(dyn Error + 'static));
}

/// [`HostContext`] implementation backed by the `tracing` ecosystem.
///
/// Messages go out at `INFO`, failures at `ERROR` with the full source
/// chain so nested causes are not lost.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingContext;

impl TracingContext {
    /// Create a new tracing-backed context.
    pub fn new() -> Self {
        Self
    }
}

impl HostContext for TracingContext {
    fn log(&self, msg: &str) {
        tracing::info!(target: "servkit", "{msg}");
    }

    fn log_error(&self, msg: &str, cause: &(dyn Error + 'static)) {
        let chain = error_chain(cause);
        tracing::error!(target: "servkit", cause = %chain, "{msg}");
    }
}

/// Render an error and its sources as a single `a: b: c` line.
fn error_chain(err: &(dyn Error + 'static)) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str(": ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_chain_renders_sources() {
        let inner = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "peer reset");
        let outer = crate::error::HandlerError::Io(inner);

        let chain = error_chain(&outer);
        assert_eq!(chain, "I/O error: peer reset: peer reset");
    }

    #[test]
    fn test_error_chain_single_error() {
        let err = crate::error::HandlerError::Processing("bad payload".into());
        assert_eq!(error_chain(&err), "processing failed: bad payload");
    }

    #[test]
    fn test_tracing_context_does_not_panic() {
        // No subscriber installed; calls must still be safe no-ops.
        let ctx = TracingContext::new();
        ctx.log("hello");
        let err = crate::error::HandlerError::Processing("boom".into());
        ctx.log_error("request failed", &err);
    }
}
