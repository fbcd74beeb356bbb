use crate::adapter::TransportAdapter;
use crate::builder::ContextBuilder;
use crate::clock::{Clock, SystemClock};
use crate::config::ContextConfig;
use crate::error::ExchangeError;
use crate::payload::Payload;
use crate::record::LogRecord;
use crate::request_id::ensure_request_id;
use crate::sink::LogSink;
use chrono::{DateTime, Utc};
use std::error::Error;
use std::sync::Arc;

/// Error returned by [`ExchangeLogger`].
#[derive(thiserror::Error, Debug)]
pub enum LoggerError<E> {
    #[error("transport adapter failed: {0}")]
    Adapter(#[source] E),

    #[error("log sink rejected record: {0}")]
    Sink(#[source] Box<dyn Error + Send + Sync>),
}

/// What an interceptor keeps between the start and the end of an exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeStart {
    pub request_id: String,
    pub started_at: DateTime<Utc>,
}

/// Glue between a [`ContextBuilder`] and a [`LogSink`] for interceptors.
///
/// Call [`begin`](Self::begin) when the exchange arrives, then exactly one
/// of [`log_success`](Self::log_success) / [`log_error`](Self::log_error)
/// once the handler finished.
pub struct ExchangeLogger<A, C = SystemClock> {
    builder: ContextBuilder<A, C>,
    sink: Arc<dyn LogSink>,
    config: ContextConfig,
}

impl<A: TransportAdapter> ExchangeLogger<A, SystemClock> {
    pub fn new(adapter: A, sink: Arc<dyn LogSink>, config: ContextConfig) -> Self {
        Self::with_builder(ContextBuilder::new(adapter), sink, config)
    }
}

impl<A: TransportAdapter, C: Clock> ExchangeLogger<A, C> {
    pub fn with_builder(
        builder: ContextBuilder<A, C>,
        sink: Arc<dyn LogSink>,
        config: ContextConfig,
    ) -> Self {
        Self {
            builder,
            sink,
            config,
        }
    }

    pub fn builder(&self) -> &ContextBuilder<A, C> {
        &self.builder
    }

    pub fn config(&self) -> &ContextConfig {
        &self.config
    }

    /// Tag the exchange with a correlation id and capture its start time.
    pub fn begin(&self, exchange: &mut A::Exchange) -> Result<ExchangeStart, LoggerError<A::Error>> {
        let adapter = self.builder.adapter();
        let request_id = ensure_request_id(adapter, exchange).map_err(LoggerError::Adapter)?;
        Ok(ExchangeStart {
            request_id,
            started_at: adapter.start_time(exchange),
        })
    }

    /// Build the success record and hand it to the sink.
    pub async fn log_success(
        &self,
        payload: &Payload,
        exchange: &A::Exchange,
        start_time: DateTime<Utc>,
    ) -> Result<LogRecord, LoggerError<A::Error>> {
        let record = self
            .builder
            .build_success_context(payload, exchange, start_time, &self.config)
            .map_err(LoggerError::Adapter)?;
        self.dispatch(record).await
    }

    /// Build the error record and hand it to the sink.
    pub async fn log_error(
        &self,
        error: &ExchangeError,
        exchange: &A::Exchange,
        start_time: DateTime<Utc>,
    ) -> Result<LogRecord, LoggerError<A::Error>> {
        let record = self
            .builder
            .build_error_context(error, exchange, start_time, &self.config)
            .map_err(LoggerError::Adapter)?;
        self.dispatch(record).await
    }

    async fn dispatch(&self, record: LogRecord) -> Result<LogRecord, LoggerError<A::Error>> {
        if let Err(e) = self.sink.send(&record).await {
            tracing::warn!(error = %e, call_point = %record.call_point, "log sink rejected record");
            return Err(LoggerError::Sink(e));
        }
        Ok(record)
    }

    /// Flush the underlying sink.
    pub async fn flush(&self) -> Result<(), LoggerError<A::Error>> {
        self.sink.flush().await.map_err(LoggerError::Sink)
    }
}
