use crate::record::LogRecord;
use async_trait::async_trait;
use std::error::Error;

/// Destination for [`LogRecord`]s produced by the context builder.
///
/// Implementations decide what happens to a record (print it, ship it,
/// keep it in memory). The builder never calls a sink itself; the
/// [`ExchangeLogger`](crate::logger::ExchangeLogger) wires the two together.
#[async_trait]
pub trait LogSink: Send + Sync {
    /// Accept a single record.
    ///
    /// **Parameters**
    /// - `record`: fully-populated [`LogRecord`] for one exchange.
    ///
    /// **Returns**
    /// - `Ok(())` if the record was accepted.
    /// - `Err(..)` if the sink failed; the caller decides whether to retry.
    async fn send(&self, record: &LogRecord) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Flush any buffered records, if the sink implements buffering.
    ///
    /// Default implementation is a no-op.
    async fn flush(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(())
    }
}
