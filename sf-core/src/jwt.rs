//! Client side inspection of the application JWT.
//!
//! The signature is not verified, the claims are only used for display
//! and ownership hints.

use base64::{
    alphabet,
    engine::{general_purpose, DecodePaddingMode, GeneralPurpose},
    Engine,
};
use serde_json::{Map, Value};

const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    general_purpose::NO_PAD.with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

const USER_ID_CLAIMS: [&str; 3] = ["sub", "userId", "id"];

/// Decode the claims of a `header.payload.signature` token.
#[must_use]
pub fn decode_claims(token: &str) -> Option<Map<String, Value>> {
    let parts: Vec<_> = token.split('.').collect();
    let [_, payload, _] = parts.as_slice() else {
        log::warn!("Unable to decode JWT: expected 3 parts but got {}", parts.len());
        return None;
    };
    let payload = payload.replace('+', "-").replace('/', "_");
    let bytes = match PAYLOAD_ENGINE.decode(payload) {
        Ok(bytes) => bytes,
        Err(err) => {
            log::warn!("Unable to decode JWT payload: {err}");
            return None;
        }
    };
    match serde_json::from_slice(&bytes) {
        Ok(Value::Object(claims)) => Some(claims),
        Ok(_) => {
            log::warn!("Unexpected JWT payload: not an object");
            None
        }
        Err(err) => {
            log::warn!("Unable to parse JWT payload: {err}");
            None
        }
    }
}

/// The numeric user ID of the first non-empty ID claim.
#[must_use]
pub fn user_id_from_token(token: &str) -> Option<i64> {
    let claims = decode_claims(token)?;
    let claim = USER_ID_CLAIMS
        .iter()
        .filter_map(|key| claims.get(*key))
        .find(|value| is_present(value))?;
    match claim {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(truncate)),
        Value::String(s) => parse_leading_int(s),
        _ => None,
    }
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => false,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        _ => true,
    }
}

#[allow(clippy::cast_possible_truncation)]
fn truncate(n: f64) -> i64 {
    n.trunc() as i64
}

/// Parses an optionally signed integer prefix, ignoring leading whitespace.
fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "eyJhbGciOiJIUzI1NiJ9";

    fn token(payload: &str) -> String {
        format!("{HEADER}.{payload}.c2lnbmF0dXJl")
    }

    #[test]
    fn user_id_from_sub_claim() {
        assert_eq!(user_id_from_token(&token("eyJzdWIiOiI0MiJ9")), Some(42));
    }

    #[test]
    fn user_id_from_numeric_user_id_claim() {
        // {"userId":7,"nickname":"홍길동"}
        let t = token("eyJ1c2VySWQiOjcsIm5pY2tuYW1lIjoi7ZmN6ri464-ZIn0=");
        assert_eq!(user_id_from_token(&t), Some(7));
        let claims = decode_claims(&t).unwrap();
        assert_eq!(claims["nickname"], "홍길동");
    }

    #[test]
    fn empty_claims_are_skipped() {
        // {"sub":"","userId":"9"}
        assert_eq!(
            user_id_from_token(&token("eyJzdWIiOiIiLCJ1c2VySWQiOiI5In0=")),
            Some(9)
        );
    }

    #[test]
    fn leading_digits_are_parsed() {
        // {"id":"15abc"}
        assert_eq!(user_id_from_token(&token("eyJpZCI6IjE1YWJjIn0=")), Some(15));
        // {"sub":"abc"}
        assert_eq!(user_id_from_token(&token("eyJzdWIiOiJhYmMifQ==")), None);
    }

    #[test]
    fn malformed_tokens() {
        assert_eq!(user_id_from_token(""), None);
        assert_eq!(user_id_from_token("abc.def"), None);
        assert_eq!(user_id_from_token("a.b.c.d"), None);
        assert_eq!(user_id_from_token(&token("!!!")), None);
        // "[1]"
        assert_eq!(user_id_from_token(&token("WzFd")), None);
    }

    #[test]
    fn parse_int_prefix() {
        assert_eq!(parse_leading_int("  12x"), Some(12));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int(""), None);
    }
}
