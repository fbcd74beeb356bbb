//! Transport-agnostic log context for request/response exchanges.
//!
//! A [`ContextBuilder`] turns one exchange (HTTP request, GraphQL operation,
//! RPC message, socket event...) into a uniform [`LogRecord`]. Everything it
//! cannot know generically is asked through a [`TransportAdapter`].

pub mod adapter;
pub mod builder;
pub mod clock;
pub mod config;
pub mod env;
pub mod error;
pub mod payload;
pub mod record;
pub mod request_id;
pub mod status;

pub mod init;
pub mod logger;
pub mod memory_sink;
pub mod noop_sink;
pub mod sink;
pub mod tracing_sink;

pub use adapter::{PayloadOrError, Transport, TransportAdapter};
pub use builder::ContextBuilder;
pub use config::ContextConfig;
pub use error::ExchangeError;
pub use payload::Payload;
pub use record::{CallerAddress, LogRecord};
pub use status::{classify_and_format, StatusBucket};
