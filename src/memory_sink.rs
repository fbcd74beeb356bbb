use crate::record::LogRecord;
use crate::sink::LogSink;
use async_trait::async_trait;
use std::error::Error;
use tokio::sync::Mutex;

/// A sink that keeps every record in memory, in arrival order.
#[derive(Default)]
pub struct MemorySink {
    records: Mutex<Vec<LogRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the records received so far.
    pub async fn records(&self) -> Vec<LogRecord> {
        self.records.lock().await.clone()
    }

    /// Remove and return all received records.
    pub async fn drain(&self) -> Vec<LogRecord> {
        std::mem::take(&mut *self.records.lock().await)
    }
}

#[async_trait]
impl LogSink for MemorySink {
    async fn send(&self, record: &LogRecord) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.records.lock().await.push(record.clone());
        Ok(())
    }
}
