use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{ApiError, Error, Result};
use sf_boundary::ErrorBody;

/// Characters left untouched by `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[must_use]
pub fn encode_component(s: &str) -> String {
    utf8_percent_encode(s, COMPONENT).to_string()
}

/// Ordered key/value parameters of a query string or form body.
///
/// Absent values are never added, so they never reach the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query(Vec<(&'static str, String)>);

impl Query {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn param(mut self, key: &'static str, value: impl ToString) -> Self {
        self.0.push((key, value.to_string()));
        self
    }

    #[must_use]
    pub fn opt<T: ToString>(self, key: &'static str, value: Option<T>) -> Self {
        match value {
            Some(v) => self.param(key, v),
            None => self,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `key=value` pairs joined by `&`.
    #[must_use]
    pub fn to_form_string(&self) -> String {
        self.0
            .iter()
            .map(|(k, v)| format!("{}={}", encode_component(k), encode_component(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Like [`Query::to_form_string`] but prefixed with `?`,
    /// or empty if there are no parameters.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        if self.is_empty() {
            String::new()
        } else {
            format!("?{}", self.to_form_string())
        }
    }
}

#[must_use]
pub fn auth_header_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// The body of a successful response.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Empty,
    Json(Value),
    Text(String),
}

impl Payload {
    /// Empty bodies become `null` and plain text becomes a JSON string.
    pub fn into_typed<T>(self) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let value = match self {
            Self::Empty => Value::Null,
            Self::Json(value) => value,
            Self::Text(text) => Value::String(text),
        };
        serde_json::from_value(value).map_err(|err| Error::Decode(err.to_string()))
    }
}

#[must_use]
pub fn decode_payload(status: u16, content_length: Option<&str>, text: &str) -> Payload {
    if status == 204 || content_length == Some("0") || text.trim().is_empty() {
        return Payload::Empty;
    }
    match serde_json::from_str(text) {
        Ok(value) => Payload::Json(value),
        Err(_) => Payload::Text(text.to_owned()),
    }
}

#[must_use]
pub fn api_error(status: u16, text: &str) -> ApiError {
    let data = serde_json::from_str::<Value>(text).ok();
    let body = data
        .clone()
        .and_then(|value| serde_json::from_value::<ErrorBody>(value).ok())
        .unwrap_or_default();
    let message = body
        .message()
        .map_or_else(|| format!("HTTP error! status: {status}"), ToOwned::to_owned);
    ApiError {
        status,
        message,
        code: body.code,
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn encode_like_encode_uri_component() {
        assert_eq!(encode_component("짐"), "%EC%A7%90");
        assert_eq!(encode_component("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(encode_component("it's-(ok)_*.~!"), "it's-(ok)_*.~!");
        assert_eq!(encode_component("127.0,37.5"), "127.0%2C37.5");
    }

    #[test]
    fn skip_absent_query_values() {
        let query = Query::new()
            .param("page", 1)
            .opt::<u32>("limit", None)
            .opt("keyword", Some("짐"));
        assert_eq!(query.to_query_string(), "?page=1&keyword=%EC%A7%90");
        assert_eq!(Query::new().to_query_string(), "");
    }

    #[test]
    fn float_params_are_formatted_without_trailing_zero() {
        let query = Query::new()
            .param("minRating", 4.0)
            .param("maxRating", 4.5);
        assert_eq!(query.to_form_string(), "minRating=4&maxRating=4.5");
    }

    #[test]
    fn bearer_header() {
        assert_eq!(auth_header_value("abc"), "Bearer abc");
    }

    #[test]
    fn decode_empty_bodies() {
        assert_eq!(decode_payload(204, None, "ignored"), Payload::Empty);
        assert_eq!(decode_payload(200, Some("0"), ""), Payload::Empty);
        assert_eq!(decode_payload(200, None, "  \n"), Payload::Empty);
    }

    #[test]
    fn decode_json_or_text() {
        assert_eq!(
            decode_payload(200, None, r#"{"a":1}"#),
            Payload::Json(serde_json::json!({"a": 1}))
        );
        assert_eq!(
            decode_payload(200, None, "eyJhbGciOiJIUzI1NiJ9.e30.sig"),
            Payload::Text("eyJhbGciOiJIUzI1NiJ9.e30.sig".into())
        );
    }

    #[test]
    fn typed_payloads() {
        let token: String = Payload::Text("abc".into()).into_typed().unwrap();
        assert_eq!(token, "abc");
        let token: String = Payload::Json(Value::String("abc".into()))
            .into_typed()
            .unwrap();
        assert_eq!(token, "abc");
        let nothing: Option<u32> = Payload::Empty.into_typed().unwrap();
        assert_eq!(nothing, None);
        let err = Payload::Text("abc".into()).into_typed::<u32>().unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn error_message_from_body() {
        let err = api_error(400, r#"{"message":"잘못된 요청"}"#);
        assert_eq!(err.message, "잘못된 요청");
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(err.data.is_some());

        let err = api_error(401, r#"{"error":"Unauthorized"}"#);
        assert_eq!(err.message, "Unauthorized");
        assert_eq!(err.kind(), ErrorKind::Unauthorized);

        let err = api_error(500, r#"{"msg":"boom"}"#);
        assert_eq!(err.message, "boom");
        assert_eq!(err.kind(), ErrorKind::Server);
    }

    #[test]
    fn fallback_error_message() {
        let err = api_error(502, "<html>Bad Gateway</html>");
        assert_eq!(err.message, "HTTP error! status: 502");
        assert_eq!(err.data, None);

        let err = api_error(404, "");
        assert_eq!(err.message, "HTTP error! status: 404");
        assert_eq!(err.kind(), ErrorKind::NotFound);

        let err = api_error(400, r#"{"message":"","error":"","msg":""}"#);
        assert_eq!(err.message, "HTTP error! status: 400");
    }

    #[test]
    fn error_code_marks_conflicts() {
        let err = api_error(400, r#"{"message":"이미 작성","code":"DUPLICATE_REVIEW"}"#);
        assert_eq!(err.code.as_deref(), Some("DUPLICATE_REVIEW"));
        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert_eq!(api_error(409, "").kind(), ErrorKind::Conflict);
    }
}
