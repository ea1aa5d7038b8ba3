use serde_json::Value;

use crate::server::error::AppError;

/// Message returned for any path identifier that is not an integer.
pub const INVALID_ID: &str = "Bad Request: invalid id";

/// Parses a path identifier as an `i32` primary key.
///
/// Identifiers are validated here, before any query runs, rather than relying on the
/// database's own type coercion.
///
/// # Arguments
/// - `value` - Raw path segment
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed identifier
/// - `Err(AppError::BadRequest)` - Value is not an integer or does not fit in `i32`
pub fn parse_id(value: &str) -> Result<i32, AppError> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| AppError::BadRequest(INVALID_ID.to_string()))
}

/// Extracts a required string field from a request body.
///
/// # Arguments
/// - `field` - Field name used in the error message
/// - `value` - Raw JSON value, `None` when the field was absent or `null`
///
/// # Returns
/// - `Ok(String)` - The field's string value
/// - `Err(AppError::BadRequest)` - `"{field} is not defined"` when absent,
///   `"{field} is not a string"` when present with another type
pub fn require_string(field: &str, value: Option<Value>) -> Result<String, AppError> {
    match value {
        None => Err(AppError::BadRequest(format!("{} is not defined", field))),
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(AppError::BadRequest(format!("{} is not a string", field))),
    }
}

/// Extracts an optional string field from a request body.
///
/// # Returns
/// - `Ok(None)` - Field absent or `null`
/// - `Ok(Some(String))` - Field present as a string
/// - `Err(AppError::BadRequest)` - Field present with another type
pub fn optional_string(field: &str, value: Option<Value>) -> Result<Option<String>, AppError> {
    value.map(|v| require_string(field, Some(v))).transpose()
}

/// Extracts the `inc_votes` delta from a vote request body.
///
/// Integral floats such as `2.0` are accepted; the delta must fit in `i32`.
///
/// # Returns
/// - `Ok(i32)` - Vote delta, possibly negative
/// - `Err(AppError::BadRequest)` - `"inc_votes is not defined"` when absent,
///   `"inc_votes is not a number"` when not an integer
pub fn parse_inc_votes(value: Option<Value>) -> Result<i32, AppError> {
    let value = value.ok_or_else(|| AppError::BadRequest("inc_votes is not defined".to_string()))?;

    let delta = match &value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        _ => None,
    };

    delta
        .and_then(|d| i32::try_from(d).ok())
        .ok_or_else(|| AppError::BadRequest("inc_votes is not a number".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn message(err: AppError) -> String {
        match err {
            AppError::BadRequest(msg) => msg,
            other => panic!("expected BadRequest, got {:?}", other),
        }
    }

    #[test]
    fn parses_integer_ids() {
        assert_eq!(parse_id("2").unwrap(), 2);
        assert_eq!(parse_id("9999").unwrap(), 9999);
    }

    #[test]
    fn rejects_non_integer_ids() {
        for raw in ["abc", "1.5", "", "2abc", "99999999999"] {
            assert_eq!(message(parse_id(raw).unwrap_err()), INVALID_ID, "{raw}");
        }
    }

    #[test]
    fn requires_string_fields() {
        assert_eq!(
            require_string("username", Some(json!("butter_bridge"))).unwrap(),
            "butter_bridge"
        );
        assert_eq!(
            message(require_string("username", None).unwrap_err()),
            "username is not defined"
        );
        assert_eq!(
            message(require_string("body", Some(json!(12))).unwrap_err()),
            "body is not a string"
        );
    }

    #[test]
    fn optional_string_allows_absence() {
        assert_eq!(optional_string("article_img_url", None).unwrap(), None);
        assert!(optional_string("article_img_url", Some(json!(true))).is_err());
    }

    #[test]
    fn parses_vote_deltas() {
        assert_eq!(parse_inc_votes(Some(json!(100))).unwrap(), 100);
        assert_eq!(parse_inc_votes(Some(json!(-100))).unwrap(), -100);
        assert_eq!(parse_inc_votes(Some(json!(2.0))).unwrap(), 2);
    }

    #[test]
    fn distinguishes_missing_and_non_numeric_deltas() {
        assert_eq!(
            message(parse_inc_votes(None).unwrap_err()),
            "inc_votes is not defined"
        );
        assert_eq!(
            message(parse_inc_votes(Some(json!("ten"))).unwrap_err()),
            "inc_votes is not a number"
        );
        assert_eq!(
            message(parse_inc_votes(Some(json!(1.5))).unwrap_err()),
            "inc_votes is not a number"
        );
    }
}
