use crate::config::ContextConfig;
use crate::error::ExchangeError;
use crate::payload::Payload;
use crate::record::CallerAddress;
use crate::status::{classify_and_format, StatusBucket, DEFAULT_ERROR_STATUS, DEFAULT_SUCCESS_STATUS};
use chrono::{DateTime, Utc};
use std::fmt;

/// Transport families with a canonical protocol label.
///
/// What `method` and `call_point` mean depends on the transport:
///
/// | transport   | `method`                              | `call_point`        |
/// |-------------|---------------------------------------|---------------------|
/// | `Http`      | HTTP verb                             | route path          |
/// | `GraphQl`   | `query` / `mutation` / `subscription` | operation name      |
/// | `Rpc`       | request/reply or event marker         | message pattern     |
/// | `WebSocket` | subscription-event marker             | event name          |
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Transport {
    Http,
    GraphQl,
    Rpc,
    WebSocket,
    Other(String),
}

impl Transport {
    pub fn label(&self) -> &str {
        match self {
            Transport::Http => "http",
            Transport::GraphQl => "graphql",
            Transport::Rpc => "rpc",
            Transport::WebSocket => "ws",
            Transport::Other(label) => label,
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What the `meta` hook gets to look at.
#[derive(Debug, Clone, Copy)]
pub enum PayloadOrError<'a> {
    Payload(&'a Payload),
    Error(&'a ExchangeError),
}

/// Transport-specific extraction hooks used by the
/// [`ContextBuilder`](crate::builder::ContextBuilder).
///
/// One implementation exists per transport. The builder never looks inside
/// `Exchange`; every transport-dependent question is asked through this
/// trait. Hook failures are returned as `Self::Error` and propagate to the
/// caller of the builder unchanged.
pub trait TransportAdapter: Send + Sync {
    /// Native handle for one in-flight exchange (request, GraphQL context,
    /// RPC message, socket event...).
    type Exchange: ?Sized;
    type Error: std::error::Error + Send + Sync + 'static;

    fn caller_address(
        &self,
        exchange: &Self::Exchange,
        config: &ContextConfig,
    ) -> Result<CallerAddress, Self::Error>;

    fn method(&self, exchange: &Self::Exchange, config: &ContextConfig) -> Result<String, Self::Error>;

    fn call_point(
        &self,
        exchange: &Self::Exchange,
        config: &ContextConfig,
    ) -> Result<String, Self::Error>;

    fn protocol(&self, exchange: &Self::Exchange, config: &ContextConfig)
        -> Result<String, Self::Error>;

    /// Attach a correlation id to the exchange. It must stay readable for
    /// the rest of the exchange's lifetime.
    fn set_request_id(&self, exchange: &mut Self::Exchange, id: &str) -> Result<(), Self::Error>;

    /// Correlation id of the exchange, or an empty string when none was set.
    fn request_id(&self, exchange: &Self::Exchange) -> Result<String, Self::Error>;

    /// Render the `status` field.
    ///
    /// Default: 200 without an error. With an error, the error's own status
    /// code when it is a 4xx/5xx failure code, otherwise 500.
    fn status(
        &self,
        _exchange: &Self::Exchange,
        color_enabled: bool,
        error: Option<&ExchangeError>,
        _config: &ContextConfig,
    ) -> Result<String, Self::Error> {
        let code = match error {
            None => DEFAULT_SUCCESS_STATUS,
            Some(err) => err
                .status
                .map(i64::from)
                .filter(|code| StatusBucket::classify(*code).is_failure())
                .unwrap_or(DEFAULT_ERROR_STATUS),
        };
        Ok(classify_and_format(code, color_enabled))
    }

    /// Supplementary data for the record. Default: none.
    fn meta(
        &self,
        _exchange: &Self::Exchange,
        _source: PayloadOrError<'_>,
        _config: &ContextConfig,
    ) -> Result<Option<serde_json::Value>, Self::Error> {
        Ok(None)
    }

    /// When the exchange started. Default: now.
    fn start_time(&self, _exchange: &Self::Exchange) -> DateTime<Utc> {
        Utc::now()
    }
}
