use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::Arc;

use exchange_log_context::adapter::{Transport, TransportAdapter};
use exchange_log_context::config::ContextConfig;
use exchange_log_context::error::ExchangeError;
use exchange_log_context::init::init_tracing_from_env;
use exchange_log_context::logger::ExchangeLogger;
use exchange_log_context::payload::Payload;
use exchange_log_context::record::CallerAddress;
use exchange_log_context::tracing_sink::TracingSink;
use serde_json::json;

/// Stand-in for a web framework's request type.
struct Request {
    method: &'static str,
    path: &'static str,
    peer: &'static str,
    headers: HashMap<String, String>,
}

struct RestAdapter;

impl TransportAdapter for RestAdapter {
    type Exchange = Request;
    type Error = Infallible;

    fn caller_address(&self, req: &Request, _: &ContextConfig) -> Result<CallerAddress, Infallible> {
        Ok(CallerAddress::from(req.peer))
    }

    fn method(&self, req: &Request, _: &ContextConfig) -> Result<String, Infallible> {
        Ok(req.method.to_string())
    }

    fn call_point(&self, req: &Request, _: &ContextConfig) -> Result<String, Infallible> {
        Ok(req.path.to_string())
    }

    fn protocol(&self, _: &Request, _: &ContextConfig) -> Result<String, Infallible> {
        Ok(Transport::Http.to_string())
    }

    fn set_request_id(&self, req: &mut Request, id: &str) -> Result<(), Infallible> {
        req.headers.insert("x-request-id".into(), id.into());
        Ok(())
    }

    fn request_id(&self, req: &Request) -> Result<String, Infallible> {
        Ok(req.headers.get("x-request-id").cloned().unwrap_or_default())
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // EXCHANGE_LOG_JSON=1 switches to JSON lines without color.
    let config = init_tracing_from_env()?;
    let logger = ExchangeLogger::new(RestAdapter, Arc::new(TracingSink), config);

    let mut req = Request {
        method: "GET",
        path: "/users/1",
        peer: "127.0.0.1",
        headers: HashMap::new(),
    };
    let start = logger.begin(&mut req)?;
    tokio::time::sleep(std::time::Duration::from_millis(25)).await;
    logger
        .log_success(&Payload::from(json!({ "id": 1 })), &req, start.started_at)
        .await?;

    let mut req = Request {
        method: "DELETE",
        path: "/users/2",
        peer: "127.0.0.1",
        headers: HashMap::new(),
    };
    let start = logger.begin(&mut req)?;
    logger
        .log_error(&ExchangeError::new("user not found").with_status(404), &req, start.started_at)
        .await?;

    Ok(())
}
