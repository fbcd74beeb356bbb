#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use exchange_log_context::adapter::{PayloadOrError, Transport, TransportAdapter};
use exchange_log_context::config::ContextConfig;
use exchange_log_context::error::ExchangeError;
use exchange_log_context::record::CallerAddress;
use exchange_log_context::status::classify_and_format;
use serde_json::json;
use std::collections::HashMap;

pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 14, 9, 26, 53).unwrap()
}

/// Minimal HTTP request as a REST framework would expose it.
#[derive(Debug, Default)]
pub struct HttpRequest {
    pub method: String,
    pub path: String,
    pub remote_addr: String,
    pub headers: HashMap<String, String>,
}

impl HttpRequest {
    pub fn new(method: &str, path: &str) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            remote_addr: "10.0.0.7".into(),
            headers: HashMap::new(),
        }
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
        self
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RestError {
    #[error("malformed x-forwarded-for header")]
    BadForwardedFor,
}

/// REST adapter: honours `x-forwarded-for` when `trustProxy` is set.
pub struct RestAdapter;

impl TransportAdapter for RestAdapter {
    type Exchange = HttpRequest;
    type Error = RestError;

    fn caller_address(
        &self,
        req: &HttpRequest,
        config: &ContextConfig,
    ) -> Result<CallerAddress, RestError> {
        let trust_proxy = config.option("trustProxy").and_then(|v| v.as_bool()).unwrap_or(false);
        match req.headers.get("x-forwarded-for") {
            Some(chain) if trust_proxy => {
                let hops: Vec<String> = chain.split(',').map(|h| h.trim().to_string()).collect();
                if hops.iter().any(String::is_empty) {
                    return Err(RestError::BadForwardedFor);
                }
                Ok(CallerAddress::from(hops))
            }
            _ => Ok(CallerAddress::from(req.remote_addr.as_str())),
        }
    }

    fn method(&self, req: &HttpRequest, _: &ContextConfig) -> Result<String, RestError> {
        Ok(req.method.clone())
    }

    fn call_point(&self, req: &HttpRequest, _: &ContextConfig) -> Result<String, RestError> {
        Ok(req.path.clone())
    }

    fn protocol(&self, _: &HttpRequest, _: &ContextConfig) -> Result<String, RestError> {
        Ok(Transport::Http.to_string())
    }

    fn set_request_id(&self, req: &mut HttpRequest, id: &str) -> Result<(), RestError> {
        req.headers.insert("x-request-id".into(), id.into());
        Ok(())
    }

    fn request_id(&self, req: &HttpRequest) -> Result<String, RestError> {
        Ok(req.headers.get("x-request-id").cloned().unwrap_or_default())
    }

    fn meta(
        &self,
        req: &HttpRequest,
        _: PayloadOrError<'_>,
        _: &ContextConfig,
    ) -> Result<Option<serde_json::Value>, RestError> {
        Ok(req.headers.get("user-agent").map(|ua| json!({ "userAgent": ua })))
    }
}

/// GraphQL operation context.
#[derive(Debug)]
pub struct GraphQlContext {
    pub operation: &'static str,
    pub field: &'static str,
    pub request_id: Option<String>,
}

/// GraphQL adapter. GraphQL reports failures inside a 200 response, so it
/// overrides the status hook.
pub struct GraphQlAdapter;

impl TransportAdapter for GraphQlAdapter {
    type Exchange = GraphQlContext;
    type Error = std::convert::Infallible;

    fn caller_address(
        &self,
        _: &GraphQlContext,
        _: &ContextConfig,
    ) -> Result<CallerAddress, Self::Error> {
        Ok(CallerAddress::from("192.168.1.20"))
    }

    fn method(&self, ctx: &GraphQlContext, _: &ContextConfig) -> Result<String, Self::Error> {
        Ok(ctx.operation.to_string())
    }

    fn call_point(&self, ctx: &GraphQlContext, _: &ContextConfig) -> Result<String, Self::Error> {
        Ok(ctx.field.to_string())
    }

    fn protocol(&self, _: &GraphQlContext, _: &ContextConfig) -> Result<String, Self::Error> {
        Ok(Transport::GraphQl.to_string())
    }

    fn set_request_id(&self, ctx: &mut GraphQlContext, id: &str) -> Result<(), Self::Error> {
        ctx.request_id = Some(id.to_string());
        Ok(())
    }

    fn request_id(&self, ctx: &GraphQlContext) -> Result<String, Self::Error> {
        Ok(ctx.request_id.clone().unwrap_or_default())
    }

    fn status(
        &self,
        _: &GraphQlContext,
        color_enabled: bool,
        _error: Option<&ExchangeError>,
        _: &ContextConfig,
    ) -> Result<String, Self::Error> {
        Ok(classify_and_format(200, color_enabled))
    }
}

/// Socket event as delivered by a WebSocket gateway.
#[derive(Debug)]
pub struct SocketEvent {
    pub event: String,
    pub peer: String,
    pub data: HashMap<String, String>,
}

pub struct WsAdapter;

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
        Ok(ev.event.clone())
    }

    fn protocol(&self, _: &SocketEvent, _: &ContextConfig) -> Result<String, Self::Error> {
        Ok(Transport::WebSocket.to_string())
    }

    fn set_request_id(&self, ev: &mut SocketEvent, id: &str) -> Result<(), Self::Error> {
        ev.data.insert("requestId".into(), id.into());
        Ok(())
    }

    fn request_id(&self, ev: &SocketEvent) -> Result<String, Self::Error> {
        Ok(ev.data.get("requestId").cloned().unwrap_or_default())
    }

    fn meta(
        &self,
        _: &SocketEvent,
        source: PayloadOrError<'_>,
        _: &ContextConfig,
    ) -> Result<Option<serde_json::Value>, Self::Error> {
        Ok(match source {
            PayloadOrError::Payload(_) => None,
            PayloadOrError::Error(err) => Some(json!({ "reason": err.message })),
        })
    }
}
