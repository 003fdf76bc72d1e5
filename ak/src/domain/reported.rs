//! Error values as they enter the coordinator

use std::fmt;
use std::sync::Arc;

use serde_json::{Value, json};

/// An error reported by application code
///
/// The variant is chosen where the error enters the system, see
/// [`ErrorClassifier::ingest`](crate::classify::ErrorClassifier::ingest).
#[derive(Debug, Clone)]
pub enum ReportedError {
    /// Server or API error with an explicit code
    Numeric { code: i64, msg: Option<String> },
    /// One of the catalog's well-known error names
    Catalog { name: String },
    /// Anything else
    Opaque(OpaqueValue),
}

/// Payload of an [`ReportedError::Opaque`] error
#[derive(Clone)]
pub enum OpaqueValue {
    Json(Value),
    Failure(Arc<dyn std::error::Error + Send + Sync>),
}

impl fmt::Debug for OpaqueValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(value) => f.debug_tuple("Json").field(value).finish(),
            Self::Failure(err) => f.debug_tuple("Failure").field(&err.to_string()).finish(),
        }
    }
}

impl ReportedError {
    pub fn code(code: i64) -> Self {
        Self::Numeric { code, msg: None }
    }

    pub fn numeric(code: i64, msg: impl Into<String>) -> Self {
        Self::Numeric {
            code,
            msg: Some(msg.into()),
        }
    }

    pub fn catalog(name: impl Into<String>) -> Self {
        Self::Catalog { name: name.into() }
    }

    /// Wrap a JSON error value
    ///
    /// Objects carrying an integral `code` become [`ReportedError::Numeric`]
    /// with their string `msg`; everything else stays opaque.
    pub fn json(value: Value) -> Self {
        if let Value::Object(map) = &value
            && let Some(code) = map.get("code").and_then(integral_code)
        {
            let msg = map.get("msg").and_then(Value::as_str).map(String::from);
            return Self::Numeric { code, msg };
        }
        Self::Opaque(OpaqueValue::Json(value))
    }

    pub fn failure<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Opaque(OpaqueValue::Failure(Arc::new(err)))
    }

    /// The error's numeric code, also read from opaque JSON objects
    pub fn numeric_code(&self) -> Option<i64> {
        match self {
            Self::Numeric { code, .. } => Some(*code),
            Self::Opaque(OpaqueValue::Json(Value::Object(map))) => map.get("code").and_then(integral_code),
            _ => None,
        }
    }

    /// Server-supplied message, if any
    pub fn msg(&self) -> Option<String> {
        match self {
            Self::Numeric { msg, .. } => msg.clone(),
            Self::Opaque(OpaqueValue::Json(Value::Object(map))) => {
                map.get("msg").and_then(Value::as_str).map(String::from)
            }
            _ => None,
        }
    }

    /// Text used to look the error up in the catalog
    ///
    /// Numeric errors and structured JSON have no catalog form.
    pub fn string_form(&self) -> Option<String> {
        match self {
            Self::Numeric { .. } => None,
            Self::Catalog { name } => Some(name.clone()),
            Self::Opaque(OpaqueValue::Json(Value::String(s))) => Some(s.clone()),
            Self::Opaque(OpaqueValue::Json(Value::Number(n))) => Some(n.to_string()),
            Self::Opaque(OpaqueValue::Json(Value::Bool(b))) => Some(b.to_string()),
            Self::Opaque(OpaqueValue::Json(_)) => None,
            Self::Opaque(OpaqueValue::Failure(err)) => Some(err.to_string()),
        }
    }

    /// Render the error for diagnostics
    pub fn describe(&self) -> Result<String, serde_json::Error> {
        match self {
            Self::Numeric { code, msg } => serde_json::to_string(&json!({ "code": code, "msg": msg })),
            Self::Catalog { name } => Ok(name.clone()),
            Self::Opaque(OpaqueValue::Json(value)) => serde_json::to_string(value),
            Self::Opaque(OpaqueValue::Failure(err)) => Ok(err.to_string()),
        }
    }
}

/// Read a JSON number as an error code
///
/// Floats count when they have no fractional part and fit in an `i64`.
pub fn integral_code(value: &Value) -> Option<i64> {
    if let Some(code) = value.as_i64() {
        return Some(code);
    }
    value
        .as_f64()
        .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
        .map(|f| f as i64)
}

impl fmt::Display for ReportedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.describe() {
            Ok(text) => f.write_str(&text),
            Err(_) => f.write_str("<unrenderable error>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Boom;

    impl fmt::Display for Boom {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "boom")
        }
    }

    impl std::error::Error for Boom {}

    #[test]
    fn test_string_form() {
        assert_eq!(ReportedError::code(3).string_form(), None);
        assert_eq!(ReportedError::catalog("ERR_X").string_form().as_deref(), Some("ERR_X"));
        assert_eq!(ReportedError::json(json!("ERR_Y")).string_form().as_deref(), Some("ERR_Y"));
        assert_eq!(ReportedError::json(json!({"a": 1})).string_form(), None);
        assert_eq!(ReportedError::failure(Boom).string_form().as_deref(), Some("boom"));
    }

    #[test]
    fn test_describe() {
        let text = ReportedError::numeric(500, "Server error").describe().unwrap();
        assert!(text.contains("\"code\":500"));
        assert!(text.contains("Server error"));
        assert_eq!(ReportedError::failure(Boom).describe().unwrap(), "boom");
        assert_eq!(ReportedError::json(json!({"a": 1})).to_string(), "{\"a\":1}");
    }

    #[test]
    fn test_json_object_with_code_is_numeric() {
        match ReportedError::json(json!({"code": 10, "msg": "expired"})) {
            ReportedError::Numeric { code, msg } => {
                assert_eq!(code, 10);
                assert_eq!(msg.as_deref(), Some("expired"));
            }
            other => panic!("Wrong variant: {:?}", other),
        }
        assert!(matches!(
            ReportedError::json(json!({"code": 10.0})),
            ReportedError::Numeric { code: 10, msg: None }
        ));
    }

    #[test]
    fn test_json_object_with_unusable_code_stays_opaque() {
        for value in [json!({"code": 10.5}), json!({"code": "E42"}), json!({"code": u64::MAX})] {
            assert!(
                matches!(ReportedError::json(value.clone()), ReportedError::Opaque(OpaqueValue::Json(_))),
                "{}",
                value
            );
        }
    }

    #[test]
    fn test_integral_code() {
        assert_eq!(integral_code(&json!(10)), Some(10));
        assert_eq!(integral_code(&json!(-3)), Some(-3));
        assert_eq!(integral_code(&json!(10.0)), Some(10));
        assert_eq!(integral_code(&json!(10.5)), None);
        assert_eq!(integral_code(&json!(u64::MAX)), None);
        assert_eq!(integral_code(&json!("10")), None);
    }

    #[test]
    fn test_numeric_code_reads_opaque_objects() {
        let raw = ReportedError::Opaque(OpaqueValue::Json(json!({"code": 10, "msg": "expired"})));
        assert_eq!(raw.numeric_code(), Some(10));
        assert_eq!(raw.msg().as_deref(), Some("expired"));
        assert_eq!(ReportedError::json(json!({"code": "E42"})).numeric_code(), None);
        assert_eq!(ReportedError::catalog("ERR_X").numeric_code(), None);
    }
}
