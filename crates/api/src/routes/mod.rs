pub mod event;
pub mod group;
pub mod user;

use bson::oid::ObjectId;
use chrono::SecondsFormat;

use crate::error::ApiError;

/// An id that is not a valid ObjectId can never match, so it is reported
/// the same way as a missing document.
pub(crate) fn parse_id(raw: &str, not_found: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(raw).map_err(|_| ApiError::NotFound(not_found.to_string()))
}

pub(crate) fn hex_id(id: Option<ObjectId>) -> String {
    id.map(|id| id.to_hex()).unwrap_or_default()
}

pub(crate) fn iso(dt: bson::DateTime) -> String {
    dt.to_chrono().to_rfc3339_opts(SecondsFormat::Millis, true)
}
