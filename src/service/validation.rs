//! Request validation: per-route typed models built from a JSON object body.

use crate::error::AppError;
use chrono::{DateTime, NaiveDate, Utc};
use serde_json::{Map, Value};

/// A request model that can be built from a validated JSON object.
pub trait Validate: Sized {
    /// Every key the route accepts. Anything else is rejected.
    const FIELDS: &'static [&'static str];

    fn validate(body: &Payload) -> Result<Self, AppError>;
}

/// Validate a raw body into `T`. Declared fields are checked first, then unknown keys.
pub fn validate<T: Validate>(value: Value) -> Result<T, AppError> {
    let Value::Object(fields) = value else {
        return Err(AppError::BadRequest("body must be a JSON object".into()));
    };
    let body = Payload { fields };
    let model = T::validate(&body)?;
    body.deny_unknown(T::FIELDS)?;
    Ok(model)
}

pub struct Payload {
    fields: Map<String, Value>,
}

impl Payload {
    fn required(&self, field: &str) -> Result<&Value, AppError> {
        match self.fields.get(field) {
            None | Some(Value::Null) => Err(AppError::Validation(format!("{} is required", field))),
            Some(v) => Ok(v),
        }
    }

    fn deny_unknown(&self, allowed: &[&str]) -> Result<(), AppError> {
        match self.fields.keys().find(|k| !allowed.contains(&k.as_str())) {
            Some(k) => Err(AppError::Validation(format!("{} is not allowed", k))),
            None => Ok(()),
        }
    }

    /// Non-empty string.
    pub fn text(&self, field: &str) -> Result<String, AppError> {
        match self.required(field)? {
            Value::String(s) if s.is_empty() => {
                Err(AppError::Validation(format!("{} is not allowed to be empty", field)))
            }
            Value::String(s) => Ok(s.clone()),
            _ => Err(AppError::Validation(format!("{} must be a string", field))),
        }
    }

    /// Whole number fitting an `i32`; numeric strings are accepted.
    pub fn integer(&self, field: &str) -> Result<i32, AppError> {
        let n = match self.required(field)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
        .filter(|n| n.is_finite())
        .ok_or_else(|| AppError::Validation(format!("{} must be a number", field)))?;
        if n.fract() != 0.0 || n < i32::MIN as f64 || n > i32::MAX as f64 {
            return Err(AppError::Validation(format!("{} must be an integer", field)));
        }
        Ok(n as i32)
    }

    /// `YYYY-MM-DD`, an RFC 3339 timestamp (UTC date kept), or epoch milliseconds.
    pub fn date(&self, field: &str) -> Result<NaiveDate, AppError> {
        let parsed = match self.required(field)? {
            Value::String(s) => parse_date(s.trim()),
            Value::Number(n) => n
                .as_i64()
                .and_then(DateTime::<Utc>::from_timestamp_millis)
                .map(|dt| dt.date_naive()),
            _ => None,
        };
        parsed.ok_or_else(|| AppError::Validation(format!("{} must be a valid date", field)))
    }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok().or_else(|| {
        DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc).date_naive())
    })
}

/// Path ids are text; only integers can ever match a stored row.
pub fn parse_id(id: &str) -> Option<i32> {
    id.trim().parse().ok()
}
