//! API response envelope types

use crate::error::{AppError, ErrorPayload, Result};
use serde::Serialize;

/// Body of every endpoint response
///
/// Failures travel inside a success-shaped payload (`{"error": "..."}` at
/// HTTP 200) rather than as transport fault codes, so clients detect errors
/// by inspecting the body. Serialization is untagged: the success arm emits
/// the data object directly.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ApiPayload<T: Serialize> {
    Ok(T),
    Err(ErrorPayload),
}

impl<T: Serialize> From<Result<T>> for ApiPayload<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(data) => ApiPayload::Ok(data),
            Err(err) => ApiPayload::Err(ErrorPayload::from(&err)),
        }
    }
}

impl<T: Serialize> ApiPayload<T> {
    pub fn error(err: &AppError) -> Self {
        ApiPayload::Err(ErrorPayload::from(err))
    }
}

/// Welcome/health message body
#[derive(Debug, Clone, Serialize)]
pub struct MessagePayload {
    pub message: String,
}

impl MessagePayload {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Dummy {
        value: i32,
    }

    #[test]
    fn test_ok_arm_serializes_flat() {
        let payload = ApiPayload::from(Ok(Dummy { value: 7 }));
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["value"], 7);
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_err_arm_serializes_error_field() {
        let result: Result<Dummy> = Err(AppError::NoPriceAvailable("AAPL".to_string()));
        let payload = ApiPayload::from(result);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["error"], "No price data available for AAPL");
        assert!(json.get("value").is_none());
    }
}
