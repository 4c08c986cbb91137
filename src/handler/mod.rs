//! Handler module - the lifecycle contract and its cached configuration.
//!
//! Provides:
//! - [`Handler`] - the trait a concrete handler implements
//! - [`HandlerBase`] - the embedded write-once configuration slot
//!
//! # Example
//!
//! ```ignore
//! use servkit::{Handler, HandlerBase, Request, Response, Result};
//!
//! #[derive(Default)]
//! struct MyHandler {
//!     base: HandlerBase,
//! }
//!
//! #[async_trait::async_trait]
//! impl Handler for MyHandler {
//!     fn base(&self) -> &HandlerBase {
//!         &self.base
//!     }
//!
//!     async fn process(&self, req: &Request, res: &mut Response) -> Result<()> {
//!         res.write_str("ok");
//!         Ok(())
//!     }
//! }
//! ```

mod base;
mod lifecycle;

pub use base::HandlerBase;
pub use lifecycle::Handler;
