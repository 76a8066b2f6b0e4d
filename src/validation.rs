//! Shared request validator.
//!
//! Operations describe their fields as an ordered table: each field names a
//! presence rule, a primitive type predicate, and an ordered list of
//! business-rule checks. Presence and type are verified for every field (in
//! declaration order) before any business-rule check runs, so a request with
//! several problems always reports the first one deterministically.

use serde_json::Value;

use crate::error::{AppError, AppResult};

/// Whether a field must appear in the request bag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    Optional,
}

/// A business-rule check run against a field that already passed its type
/// predicate. The closure may capture library state.
pub struct Check<'a> {
    message: &'static str,
    test: Box<dyn Fn(&Value) -> bool + 'a>,
}

impl<'a> Check<'a> {
    pub fn new(message: &'static str, test: impl Fn(&Value) -> bool + 'a) -> Self {
        Self { message, test: Box::new(test) }
    }
}

/// Declaration of a single request field.
pub struct Field<'a> {
    name: &'static str,
    presence: Presence,
    type_check: fn(&Value) -> bool,
    checks: Vec<Check<'a>>,
}

impl<'a> Field<'a> {
    pub fn required(name: &'static str, type_check: fn(&Value) -> bool) -> Self {
        Self { name, presence: Presence::Required, type_check, checks: Vec::new() }
    }

    pub fn optional(name: &'static str, type_check: fn(&Value) -> bool) -> Self {
        Self { name, presence: Presence::Optional, type_check, checks: Vec::new() }
    }

    /// Append a business-rule check; checks run in the order they were added.
    pub fn check(mut self, message: &'static str, test: impl Fn(&Value) -> bool + 'a) -> Self {
        self.checks.push(Check::new(message, test));
        self
    }
}

/// Validate a request bag against an ordered field table.
///
/// Returns the first error encountered: `MISSING`/`BAD_TYPE` in field
/// declaration order, then `BAD_REQ` from the first failing business-rule
/// check. Absent optional fields are skipped entirely. No side effects.
pub fn validate(request: &Value, fields: &[Field<'_>]) -> AppResult<()> {
    for field in fields {
        match request.get(field.name) {
            None => {
                if field.presence == Presence::Required {
                    return Err(AppError::missing(field.name));
                }
            }
            Some(value) => {
                if !(field.type_check)(value) {
                    return Err(AppError::bad_type(field.name));
                }
            }
        }
    }

    for field in fields {
        if let Some(value) = request.get(field.name) {
            for check in &field.checks {
                if !(check.test)(value) {
                    return Err(AppError::bad_req(field.name, check.message));
                }
            }
        }
    }

    Ok(())
}

// Type predicates shared by the operations.

pub fn is_string(v: &Value) -> bool {
    v.is_string()
}

pub fn is_non_empty_string(v: &Value) -> bool {
    v.as_str().map_or(false, |s| !s.is_empty())
}

/// Non-empty array whose elements are all strings.
pub fn is_string_array(v: &Value) -> bool {
    v.as_array()
        .map_or(false, |a| !a.is_empty() && a.iter().all(Value::is_string))
}

pub fn is_integer(v: &Value) -> bool {
    v.as_i64().is_some()
}

/// Business-rule predicate for integer fields that must be > 0 and fit the
/// catalog records' 32-bit fields. Out-of-range values would otherwise be
/// truncated on extraction.
pub fn is_positive(v: &Value) -> bool {
    v.as_i64().map_or(false, |n| n > 0 && n <= u32::MAX as i64)
}
