//! # servkit
//!
//! SDK for writing protocol-independent request handlers hosted inside a
//! managing container.
//!
//! The container constructs a handler, delivers its configuration through
//! [`Handler::initialize`], dispatches requests to [`Handler::process`], and
//! retires the instance with [`Handler::teardown`]. This crate defines that
//! contract; network I/O, request parsing, routing, and threading all belong
//! to the host.
//!
//! ## Architecture
//!
//! - **Lifecycle** ([`handler`]): the [`Handler`] trait (one required hook,
//!   `process`) and [`HandlerBase`], the write-once configuration slot its
//!   accessors delegate to.
//! - **Configuration** ([`config`]): host-supplied name + parameters +
//!   shared context, buildable in code or from a JSON document.
//! - **Context** ([`context`]): the host's logging facade; handlers write
//!   `"<name>: <message>"` lines through it.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use async_trait::async_trait;
//! use servkit::{Handler, HandlerBase, HandlerConfig, Request, Response, Result};
//!
//! #[derive(Default)]
//! struct Echo {
//!     base: HandlerBase,
//! }
//!
//! #[async_trait]
//! impl Handler for Echo {
//!     fn base(&self) -> &HandlerBase {
//!         &self.base
//!     }
//!
//!     async fn process(&self, req: &Request, res: &mut Response) -> Result<()> {
//!         res.write(req.payload().clone());
//!         Ok(())
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<()> {
//! let handler = Echo::default();
//! handler
//!     .initialize(Arc::new(HandlerConfig::builder("echo").build()))
//!     .await?;
//!
//! let mut res = Response::new();
//! handler.process(&Request::new("hi".into()), &mut res).await?;
//! assert_eq!(&res.into_payload()[..], b"hi");
//!
//! handler.teardown().await;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod handler;
pub mod message;
pub mod strings;

pub use config::{ConfigDocument, HandlerConfig, HandlerConfigBuilder};
pub use context::{HostContext, TracingContext};
pub use error::{HandlerError, Result};
pub use handler::{Handler, HandlerBase};
pub use message::{Request, Response};
