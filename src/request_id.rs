use crate::adapter::TransportAdapter;
use uuid::Uuid;

/// Fresh correlation id (UUID v4, hyphenated).
pub fn generate_request_id() -> String {
    Uuid::new_v4().to_string()
}

/// Return the exchange's correlation id, creating and storing one if the
/// adapter reports none yet.
pub fn ensure_request_id<A>(adapter: &A, exchange: &mut A::Exchange) -> Result<String, A::Error>
where
    A: TransportAdapter,
{
    let existing = adapter.request_id(exchange)?;
    if !existing.is_empty() {
        return Ok(existing);
    }

    let id = generate_request_id();
    adapter.set_request_id(exchange, &id)?;
    tracing::debug!(request_id = %id, "assigned request id");
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ContextConfig;
    use crate::record::CallerAddress;
    use std::collections::HashMap;
    use std::convert::Infallible;

    struct HeaderAdapter;

    impl TransportAdapter for HeaderAdapter {
        type Exchange = HashMap<String, String>;
        type Error = Infallible;

        fn caller_address(&self, _: &Self::Exchange, _: &ContextConfig) -> Result<CallerAddress, Infallible> {
            Ok("::1".into())
        }
        fn method(&self, _: &Self::Exchange, _: &ContextConfig) -> Result<String, Infallible> {
            Ok("GET".into())
        }
        fn call_point(&self, _: &Self::Exchange, _: &ContextConfig) -> Result<String, Infallible> {
            Ok("/".into())
        }
        fn protocol(&self, _: &Self::Exchange, _: &ContextConfig) -> Result<String, Infallible> {
            Ok("http".into())
        }
        fn set_request_id(&self, headers: &mut Self::Exchange, id: &str) -> Result<(), Infallible> {
            headers.insert("x-request-id".into(), id.into());
            Ok(())
        }
        fn request_id(&self, headers: &Self::Exchange) -> Result<String, Infallible> {
            Ok(headers.get("x-request-id").cloned().unwrap_or_default())
        }
    }

    #[test]
    fn assigns_once_and_reuses() {
        let mut headers = HashMap::new();
        assert_eq!(HeaderAdapter.request_id(&headers).unwrap(), "");

        let id = ensure_request_id(&HeaderAdapter, &mut headers).unwrap();
        assert!(Uuid::parse_str(&id).is_ok());
        assert_eq!(ensure_request_id(&HeaderAdapter, &mut headers).unwrap(), id);
    }

    #[test]
    fn keeps_caller_supplied_id() {
        let mut headers = HashMap::from([("x-request-id".to_string(), "abc".to_string())]);
        assert_eq!(ensure_request_id(&HeaderAdapter, &mut headers).unwrap(), "abc");
    }
}
