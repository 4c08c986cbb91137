//! Echo handler - simple request/response demo.
//!
//! This demo plays both roles: it builds the configuration a host container
//! would deliver, drives the handler through its full lifecycle
//! (initialize, process, teardown), and prints the response.
//!
//! Run with:
//!
//! ```text
//! cargo run --example echo
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use servkit::{
    Handler, HandlerBase, HandlerConfig, Request, Response, Result, TracingContext,
};

/// Echoes each request payload back, with an optional configured prefix.
#[derive(Default)]
struct EchoHandler {
    base: HandlerBase,
}

#[async_trait]
impl Handler for EchoHandler {
    fn base(&self) -> &HandlerBase {
        &self.base
    }

    async fn init(&self) -> Result<()> {
        self.log("placed into service")?;
        Ok(())
    }

    async fn process(&self, request: &Request, response: &mut Response) -> Result<()> {
        if let Some(prefix) = self.init_parameter("prefix")? {
            response.write_str(prefix);
        }
        response.write(request.payload().clone());
        Ok(())
    }

    async fn teardown(&self) {
        let _ = self.log("taken out of service");
    }

    fn handler_info(&self) -> &str {
        "echo demo handler, v1"
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // The host side: configuration arrives as a JSON document plus the
    // shared context.
    let document = r#"{"name":"echo","parameters":{"prefix":"> "}}"#;
    let config = HandlerConfig::from_json(document, Arc::new(TracingContext::new()))?;

    let handler = EchoHandler::default();
    handler.initialize(Arc::new(config)).await?;

    let request = Request::new("hello, host".into()).with_attribute("peer", "demo");
    let mut response = Response::new();
    handler.process(&request, &mut response).await?;

    println!("{}", String::from_utf8_lossy(&response.into_payload()));

    handler.teardown().await;
    Ok(())
}
