use serde::{Deserialize, Serialize};

/// Address of the caller. Proxied exchanges produce an ordered chain,
/// originating client first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CallerAddress {
    Single(String),
    Chain(Vec<String>),
}

impl CallerAddress {
    /// Address of the originating caller, if any.
    pub fn first(&self) -> Option<&str> {
        match self {
            CallerAddress::Single(addr) => Some(addr.as_str()),
            CallerAddress::Chain(chain) => chain.first().map(String::as_str),
        }
    }
}

impl From<String> for CallerAddress {
    fn from(addr: String) -> Self {
        CallerAddress::Single(addr)
    }
}

impl From<&str> for CallerAddress {
    fn from(addr: &str) -> Self {
        CallerAddress::Single(addr.to_string())
    }
}

/// A one-hop chain collapses to `Single`; an empty chain becomes an empty
/// `Single` so the field always serializes as a string or a non-empty list.
impl From<Vec<String>> for CallerAddress {
    fn from(mut chain: Vec<String>) -> Self {
        match chain.len() {
            0 => CallerAddress::Single(String::new()),
            1 => CallerAddress::Single(chain.remove(0)),
            _ => CallerAddress::Chain(chain),
        }
    }
}

/// Uniform log context produced for one exchange, whatever its transport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogRecord {
    pub caller_address: CallerAddress,
    /// Transport-specific operation kind (HTTP verb, GraphQL operation, ...).
    pub method: String,
    /// Target invoked (route, query name, topic, event name).
    pub call_point: String,
    /// Elapsed milliseconds.
    pub response_time: u64,
    pub content_length: u64,
    pub protocol: String,
    /// Numeric status, optionally wrapped in a color directive.
    pub status: String,
    pub meta: Option<serde_json::Value>,
}
