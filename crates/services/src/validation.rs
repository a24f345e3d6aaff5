//! Presence checks and value coercion shared by the event and group
//! write paths.
//!
//! Required strings are checked for presence only: `""` counts as missing,
//! whitespace does not.

use bson::DateTime;
use chrono::{NaiveDateTime, Utc};
use serde::de::{DeserializeOwned, IntoDeserializer, value::StrDeserializer};
use serde_json::Value;
use validator::Validate;

use crate::dao::base::{DaoError, DaoResult};

pub const EVENT_REQUIRED_MESSAGE: &str =
    "Title, Date/Time, Event Type, and Invite Type are required.";
pub const GROUP_REQUIRED_MESSAGE: &str =
    "Group Name, Group Code, and Group Type are required.";

/// Returns the value if it was sent and is not empty.
pub fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Fails with `message` unless every field is present.
pub fn require_all(fields: &[Option<&str>], message: &str) -> DaoResult<()> {
    if fields.iter().all(|f| present(*f).is_some()) {
        Ok(())
    } else {
        Err(DaoError::Validation(message.to_string()))
    }
}

/// For updates: a required string may be omitted but not blanked.
pub fn require_non_empty(path: &str, value: &str) -> DaoResult<()> {
    if value.is_empty() {
        return Err(DaoError::Validation(format!("Path `{path}` is required.")));
    }
    Ok(())
}

/// Parses `value` as one of the variants of the enum `T`, honouring serde
/// renames and aliases.
pub fn parse_enum<T: DeserializeOwned>(path: &str, value: &str) -> DaoResult<T> {
    let de: StrDeserializer<'_, serde::de::value::Error> = value.into_deserializer();
    <T as serde::Deserialize>::deserialize(de).map_err(|_| {
        DaoError::Validation(format!(
            "`{value}` is not a valid enum value for path `{path}`."
        ))
    })
}

/// Accepts RFC 3339 timestamps and offset-less `YYYY-MM-DDTHH:MM[:SS]`
/// values, the latter read as UTC.
pub fn parse_date_time(path: &str, value: &str) -> DaoResult<DateTime> {
    if let Ok(parsed) = chrono::DateTime::parse_from_rfc3339(value) {
        return Ok(DateTime::from_chrono(parsed.with_timezone(&Utc)));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|naive| DateTime::from_chrono(naive.and_utc()))
        .ok_or_else(|| {
            DaoError::Validation(format!(
                "Cast to date failed for value \"{value}\" at path \"{path}\""
            ))
        })
}

/// Group status on create: only `true` and `"true"` mean active.
pub fn coerce_status(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s == "true",
        _ => false,
    }
}

/// Boolean casting used on updates. `null` means "leave unchanged".
pub fn cast_boolean(path: &str, value: &Value) -> DaoResult<Option<bool>> {
    let cast = match value {
        Value::Null => return Ok(None),
        Value::Bool(b) => Some(*b),
        Value::Number(n) => match n.as_f64() {
            Some(v) if v == 1.0 => Some(true),
            Some(v) if v == 0.0 => Some(false),
            _ => None,
        },
        Value::String(s) => match s.as_str() {
            "true" | "1" | "yes" => Some(true),
            "false" | "0" | "no" => Some(false),
            _ => None,
        },
        _ => None,
    };

    cast.map(Some).ok_or_else(|| {
        let shown = match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        DaoError::Validation(format!(
            "Cast to Boolean failed for value \"{shown}\" at path \"{path}\""
        ))
    })
}

/// Validates each embedded entry, naming the first offending one.
pub fn validate_entries<T: Validate>(path: &str, entries: &[T]) -> DaoResult<()> {
    for (index, entry) in entries.iter().enumerate() {
        if let Err(errors) = entry.validate() {
            let mut fields = errors.field_errors().into_iter().collect::<Vec<_>>();
            fields.sort_by(|a, b| a.0.cmp(&b.0));
            let detail = fields
                .into_iter()
                .flat_map(|(_, errs)| errs.iter())
                .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                .collect::<Vec<_>>()
                .join(" ");
            return Err(DaoError::Validation(format!("{path}.{index}: {detail}")));
        }
    }
    Ok(())
}
