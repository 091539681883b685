//! Classification of raw transport outcomes into domain results.
//!
//! Every repository call runs its transport outcome through [`classify`] or
//! [`classify_lookup`], so callers see one error taxonomy whatever the
//! endpoint. Both functions only read their input.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::Result;
use crate::error::{ApiError, Error, NetworkError};

/// Fallback message for a lookup that found nothing.
pub const NOT_FOUND_MESSAGE: &str = "Resource not found";

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }
}

/// Why an exchange produced no response at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportFailure {
    /// The connection could not be established.
    Connect { message: String },
    /// No response within the configured timeout.
    Timeout,
    /// The connection broke while sending or receiving.
    Io { message: String },
    /// Anything else, e.g. a request that could not be built.
    Other { message: String },
}

/// Outcome of one logical request at the transport level.
pub type Exchange = std::result::Result<RawResponse, TransportFailure>;

/// Result of a lookup where "no such entity" is an expected answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    Found(T),
    /// The server answered 404. `message` falls back to
    /// [`NOT_FOUND_MESSAGE`] when the body carried no detail.
    Absent {
        code: Option<String>,
        message: String,
    },
}

impl<T> Lookup<T> {
    pub fn found(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::Absent { .. } => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Lookup::Absent { .. })
    }
}

/// Server error body. Both fields are optional and the body may not be JSON.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
    #[serde(default)]
    code: Option<serde_json::Value>,
}

/// Classify an exchange whose success body must decode as `T`.
pub fn classify<T: DeserializeOwned>(exchange: &Exchange) -> Result<T> {
    let response = exchange.as_ref().map_err(transport_error)?;

    if response.is_success() {
        decode_body(response)
    } else {
        Err(Error::Api(api_error(response)))
    }
}

/// Like [`classify`], but a 404 becomes [`Lookup::Absent`] instead of an error.
pub fn classify_lookup<T: DeserializeOwned>(exchange: &Exchange) -> Result<Lookup<T>> {
    match exchange {
        Ok(response) if !response.is_success() => {
            let err = api_error(response);
            if !err.is_not_found() {
                return Err(Error::Api(err));
            }
            Ok(Lookup::Absent {
                code: err.code,
                message: err
                    .message
                    .unwrap_or_else(|| NOT_FOUND_MESSAGE.to_string()),
            })
        }
        _ => classify(exchange).map(Lookup::Found),
    }
}

/// Map a transport failure into the domain taxonomy.
pub fn transport_error(failure: &TransportFailure) -> Error {
    match failure {
        TransportFailure::Connect { message } => Error::Network(NetworkError::Connection {
            message: message.clone(),
        }),
        TransportFailure::Timeout => Error::Network(NetworkError::Timeout),
        TransportFailure::Io { message } => Error::Network(NetworkError::Io {
            message: message.clone(),
        }),
        TransportFailure::Other { message } => Error::unknown(message.clone()),
    }
}

/// Build an [`ApiError`] from a non-2xx response, reading `code` and
/// `detail` from a JSON body when present.
pub fn api_error(response: &RawResponse) -> ApiError {
    let Ok(body) = serde_json::from_slice::<ErrorBody>(&response.body) else {
        return ApiError::new(response.status, None, None);
    };

    ApiError::new(
        response.status,
        body.code.and_then(value_text),
        body.detail.and_then(value_text),
    )
}

fn decode_body<T: DeserializeOwned>(response: &RawResponse) -> Result<T> {
    if response.body.iter().all(u8::is_ascii_whitespace) {
        return Err(Error::unknown(format!(
            "empty response body (HTTP {})",
            response.status
        )));
    }

    serde_json::from_slice(&response.body)
        .map_err(|e| Error::unknown(format!("malformed response body: {}", e)))
}

// `detail` is a string for hand-raised errors but a list of objects for
// request validation failures.
fn value_text(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) if s.is_empty() => None,
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Array(items) => {
            let parts: Vec<String> = items
                .into_iter()
                .filter_map(|item| match item {
                    serde_json::Value::Object(mut obj) => obj.remove("msg").and_then(value_text),
                    other => value_text(other),
                })
                .collect();
            (!parts.is_empty()).then(|| parts.join("; "))
        }
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Item {
        id: i64,
    }

    fn ok(status: u16, body: serde_json::Value) -> Exchange {
        Ok(RawResponse::new(status, body.to_string()))
    }

    #[test]
    fn success_with_body_decodes() {
        let item: Item = classify(&ok(200, json!({"id": 3}))).unwrap();
        assert_eq!(item, Item { id: 3 });
    }

    #[test]
    fn success_with_empty_body_is_unknown() {
        let err = classify::<Item>(&Ok(RawResponse::new(200, ""))).unwrap_err();
        assert!(matches!(err, Error::Unknown { .. }));
    }

    #[test]
    fn success_with_wrong_shape_is_unknown() {
        let err = classify::<Item>(&ok(201, json!({"name": "x"}))).unwrap_err();
        assert!(matches!(err, Error::Unknown { .. }));
    }

    #[test]
    fn non_success_is_api_error_with_body_fields() {
        let exchange = ok(409, json!({"detail": "Step already closed", "code": "step_closed"}));
        let err = classify::<Item>(&exchange).unwrap_err();
        assert_eq!(
            err,
            Error::Api(ApiError::new(
                409,
                Some("step_closed".to_string()),
                Some("Step already closed".to_string())
            ))
        );
    }

    #[test]
    fn non_json_error_body_falls_back() {
        let exchange = Ok(RawResponse::new(500, "Internal Server Error"));
        let err = classify::<Item>(&exchange).unwrap_err();
        assert_eq!(err, Error::Api(ApiError::new(500, None, None)));
    }

    #[test]
    fn validation_detail_list_is_flattened() {
        let exchange = ok(
            422,
            json!({"detail": [{"loc": ["query", "step_id"], "msg": "field required"}]}),
        );
        let err = classify::<Item>(&exchange).unwrap_err();
        assert_eq!(
            err,
            Error::Api(ApiError::new(422, None, Some("field required".to_string())))
        );
    }

    #[test]
    fn not_found_on_plain_classify_is_error() {
        let err = classify::<Item>(&ok(404, json!({"detail": "nope"}))).unwrap_err();
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn not_found_on_lookup_is_absent() {
        let lookup =
            classify_lookup::<Item>(&ok(404, json!({"detail": "Product not found", "code": "product_not_found"})))
                .unwrap();
        assert_eq!(
            lookup,
            Lookup::Absent {
                code: Some("product_not_found".to_string()),
                message: "Product not found".to_string()
            }
        );
    }

    #[test]
    fn not_found_without_body_uses_default_message() {
        let lookup = classify_lookup::<Item>(&Ok(RawResponse::new(404, ""))).unwrap();
        assert_eq!(
            lookup,
            Lookup::Absent {
                code: None,
                message: NOT_FOUND_MESSAGE.to_string()
            }
        );
    }

    #[test]
    fn lookup_found() {
        let lookup = classify_lookup::<Item>(&ok(200, json!({"id": 1}))).unwrap();
        assert_eq!(lookup.found(), Some(Item { id: 1 }));
    }

    #[test]
    fn lookup_other_failures_stay_errors() {
        let err = classify_lookup::<Item>(&ok(500, json!({"detail": "boom"}))).unwrap_err();
        assert_eq!(err.status(), Some(500));
        let err = classify_lookup::<Item>(&Ok(RawResponse::new(401, ""))).unwrap_err();
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn transport_failures() {
        let connect: Exchange = Err(TransportFailure::Connect {
            message: "refused".into(),
        });
        assert!(matches!(
            classify::<Item>(&connect).unwrap_err(),
            Error::Network(NetworkError::Connection { .. })
        ));

        let timeout: Exchange = Err(TransportFailure::Timeout);
        assert_eq!(
            classify::<Item>(&timeout).unwrap_err(),
            Error::Network(NetworkError::Timeout)
        );

        let other: Exchange = Err(TransportFailure::Other {
            message: "builder".into(),
        });
        assert!(matches!(
            classify_lookup::<Item>(&other).unwrap_err(),
            Error::Unknown { .. }
        ));
    }

    #[test]
    fn classification_is_repeatable() {
        let exchanges = [
            ok(401, json!({"detail": "Token expired", "code": "token_expired"})),
            ok(200, json!({"id": 9})),
            Ok(RawResponse::new(204, "")),
            Err(TransportFailure::Io {
                message: "reset".into(),
            }),
        ];

        for exchange in &exchanges {
            let first = classify::<Item>(exchange);
            let second = classify::<Item>(exchange);
            assert_eq!(first, second);
        }
    }
}
