use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use exchange_log_context::adapter::{PayloadOrError, Transport, TransportAdapter};
use exchange_log_context::builder::ContextBuilder;
use exchange_log_context::config::ContextConfig;
use exchange_log_context::error::ExchangeError;
use exchange_log_context::payload::Payload;
use exchange_log_context::record::CallerAddress;
use serde_json::json;

/// Socket event with a per-connection correlation slot.
struct SocketEvent {
    name: String,
    peer: String,
    request_id: Option<String>,
}

struct WsAdapter;

impl TransportAdapter for WsAdapter {
    type Exchange = SocketEvent;
    type Error = std::convert::Infallible;

    fn caller_address(&self, ev: &SocketEvent, _: &ContextConfig) -> Result<CallerAddress, Self::Error> {
        Ok(CallerAddress::from(ev.peer.as_str()))
    }

    fn method(&self, _: &SocketEvent, _: &ContextConfig) -> Result<String, Self::Error> {
        Ok("EVENT".into())
    }

    fn call_point(&self, ev: &SocketEvent, _: &ContextConfig) -> Result<String, Self::Error> {
        Ok(ev.name.clone())
    }

    fn protocol(&self, _: &SocketEvent, _: &ContextConfig) -> Result<String, Self::Error> {
        Ok(Transport::WebSocket.to_string())
    }

    fn set_request_id(&self, ev: &mut SocketEvent, id: &str) -> Result<(), Self::Error> {
        ev.request_id = Some(id.to_string());
        Ok(())
    }

    fn request_id(&self, ev: &SocketEvent) -> Result<String, Self::Error> {
        Ok(ev.request_id.clone().unwrap_or_default())
    }

    fn meta(
        &self,
        ev: &SocketEvent,
        source: PayloadOrError<'_>,
        _: &ContextConfig,
    ) -> Result<Option<serde_json::Value>, Self::Error> {
        let failed = matches!(source, PayloadOrError::Error(_));
        Ok(Some(json!({ "requestId": ev.request_id, "failed": failed })))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let builder = Arc::new(ContextBuilder::new(WsAdapter));
    let config = ContextConfig {
        json: true,
        ..ContextConfig::default()
    };

    let n: u64 = 100_000;
    let started = Instant::now();
    let ev = SocketEvent {
        name: "chat.message".into(),
        peer: "10.0.0.3".into(),
        request_id: Some("ws-1".into()),
    };

    for i in 0..n {
        let start = Utc::now();
        if i % 10 == 0 {
            builder.build_error_context(&ExchangeError::new("rate limited"), &ev, start, &config)?;
        } else {
            builder.build_success_context(&Payload::from("hello"), &ev, start, &config)?;
        }
    }

    let elapsed = started.elapsed();
    println!(
        "built {} contexts in {:?} (~{:.0} ctx/s)",
        n,
        elapsed,
        n as f64 / elapsed.as_secs_f64()
    );

    let record = builder.build_success_context(&Payload::from("hello"), &ev, Utc::now(), &config)?;
    println!("{}", serde_json::to_string(&record)?);
    Ok(())
}
