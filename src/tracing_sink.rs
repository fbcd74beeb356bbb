use crate::record::LogRecord;
use crate::sink::LogSink;
use crate::status::{parse_status, StatusBucket};
use async_trait::async_trait;
use std::error::Error;
use tracing::Level;

/// Sink that re-emits each record as a structured `tracing` event under the
/// `exchange` target.
///
/// The event level follows the record's status bucket: `INFO` for 1xx-3xx,
/// `WARN` for 4xx and `ERROR` for 5xx or anything unparseable/unclassified.
#[derive(Clone, Default)]
pub struct TracingSink;

impl TracingSink {
    pub fn level_for(record: &LogRecord) -> Level {
        match parse_status(&record.status).map(StatusBucket::classify) {
            Some(StatusBucket::Informational) | Some(StatusBucket::Redirection) => Level::INFO,
            Some(StatusBucket::ClientFault) => Level::WARN,
            _ => Level::ERROR,
        }
    }
}

macro_rules! emit {
    ($level:expr, $record:ident, $caller:ident, $meta:ident) => {
        tracing::event!(
            target: "exchange",
            $level,
            caller_address = %$caller,
            method = %$record.method,
            call_point = %$record.call_point,
            response_time = $record.response_time,
            content_length = $record.content_length,
            protocol = %$record.protocol,
            status = %$record.status,
            meta = %$meta,
            "{} {} {}",
            $record.method,
            $record.call_point,
            $record.status
        )
    };
}

#[async_trait]
impl LogSink for TracingSink {
    async fn send(&self, record: &LogRecord) -> Result<(), Box<dyn Error + Send + Sync>> {
        let caller = serde_json::to_string(&record.caller_address)?;
        let meta = match &record.meta {
            Some(meta) => serde_json::to_string(meta)?,
            None => String::from("null"),
        };

        // `event!` needs a const level
        let level = Self::level_for(record);
        if level == Level::INFO {
            emit!(Level::INFO, record, caller, meta);
        } else if level == Level::WARN {
            emit!(Level::WARN, record, caller, meta);
        } else {
            emit!(Level::ERROR, record, caller, meta);
        }
        Ok(())
    }
}
