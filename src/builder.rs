use crate::adapter::{PayloadOrError, TransportAdapter};
use crate::clock::{elapsed_millis, Clock, SystemClock};
use crate::config::ContextConfig;
use crate::error::ExchangeError;
use crate::payload::Payload;
use crate::record::LogRecord;
use chrono::{DateTime, Utc};

/// Assembles a [`LogRecord`] for one exchange.
///
/// The builder owns only the transport-independent parts of the record
/// (elapsed time, content length, status formatting); everything else is
/// delegated to the [`TransportAdapter`]. It holds no per-exchange state and
/// can be shared between tasks.
#[derive(Debug, Clone)]
pub struct ContextBuilder<A, C = SystemClock> {
    adapter: A,
    clock: C,
}

impl<A: TransportAdapter> ContextBuilder<A, SystemClock> {
    pub fn new(adapter: A) -> Self {
        Self {
            adapter,
            clock: SystemClock,
        }
    }
}

impl<A: TransportAdapter, C: Clock> ContextBuilder<A, C> {
    /// Use a custom time source instead of the system clock.
    pub fn with_clock(adapter: A, clock: C) -> Self {
        Self { adapter, clock }
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Build the record for an exchange that completed normally.
    ///
    /// **Parameters**
    /// - `payload`: response body; [`Payload::Empty`] counts as 0 bytes.
    /// - `exchange`: the transport's native handle.
    /// - `start_time`: captured before the handler ran.
    /// - `config`: coloring / JSON settings plus adapter passthrough options.
    ///
    /// **Returns**
    /// - A fully-populated record; `meta` is whatever the adapter supplies.
    /// - `Err(..)` if any adapter hook failed.
    pub fn build_success_context(
        &self,
        payload: &Payload,
        exchange: &A::Exchange,
        start_time: DateTime<Utc>,
        config: &ContextConfig,
    ) -> Result<LogRecord, A::Error> {
        let status = self
            .adapter
            .status(exchange, config.colorize(), None, config)?;
        let meta = self
            .adapter
            .meta(exchange, PayloadOrError::Payload(payload), config)?;
        self.assemble(exchange, start_time, config, payload.byte_len(), status, meta)
    }

    /// Build the record for an exchange whose handler failed.
    ///
    /// Same shape as [`build_success_context`](Self::build_success_context);
    /// `content_length` is the byte length of the error message and the
    /// status hook sees the error.
    pub fn build_error_context(
        &self,
        error: &ExchangeError,
        exchange: &A::Exchange,
        start_time: DateTime<Utc>,
        config: &ContextConfig,
    ) -> Result<LogRecord, A::Error> {
        let status = self
            .adapter
            .status(exchange, config.colorize(), Some(error), config)?;
        let meta = self
            .adapter
            .meta(exchange, PayloadOrError::Error(error), config)?;
        let content_length = Payload::from(error.message.as_str()).byte_len();
        self.assemble(exchange, start_time, config, content_length, status, meta)
    }

    fn assemble(
        &self,
        exchange: &A::Exchange,
        start_time: DateTime<Utc>,
        config: &ContextConfig,
        content_length: u64,
        status: String,
        meta: Option<serde_json::Value>,
    ) -> Result<LogRecord, A::Error> {
        let record = LogRecord {
            caller_address: self.adapter.caller_address(exchange, config)?,
            method: self.adapter.method(exchange, config)?,
            call_point: self.adapter.call_point(exchange, config)?,
            response_time: elapsed_millis(start_time, self.clock.now()),
            content_length,
            protocol: self.adapter.protocol(exchange, config)?,
            status,
            meta,
        };

        tracing::trace!(
            protocol = %record.protocol,
            method = %record.method,
            call_point = %record.call_point,
            response_time = record.response_time,
            "built exchange log context"
        );

        Ok(record)
    }
}
