use bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date_time: DateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    pub event_type: EventType,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub status: EventStatus,
    pub invite_type: InviteType,
    #[serde(default)]
    pub invitees: Vec<Invitee>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EventType {
    Conference,
    Workshop,
    Seminar,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub enum EventStatus {
    #[default]
    Scheduled,
    #[serde(rename = "On Going", alias = "OnGoing")]
    OnGoing,
    Postpone,
    Cancel,
}

/// Descriptive only: invitees are never checked against groups or users.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InviteType {
    Group,
    Individual,
}

/// An invited group or user, embedded by value in its event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Invitee {
    #[validate(length(min = 1, message = "Path `id` is required."))]
    pub id: String,
    #[validate(length(min = 1, message = "Path `name` is required."))]
    pub name: String,
}

impl Event {
    pub const COLLECTION: &'static str = "events";
}
