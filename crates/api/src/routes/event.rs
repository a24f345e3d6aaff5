use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::{error::ApiError, extractors::ApiJson, state::AppState};
use eventhub_db::models::{Event, EventStatus, EventType, InviteType, Invitee};
use eventhub_services::{
    dao::{
        base::DaoResult,
        event::{EventChanges, NewEvent},
    },
    validation::{self, EVENT_REQUIRED_MESSAGE},
};

use super::{hex_id, iso, parse_id};

const NOT_FOUND: &str = "Event not found.";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date_time: Option<String>,
    pub venue: Option<String>,
    pub event_type: Option<String>,
    pub is_public: Option<Value>,
    pub status: Option<String>,
    pub invite_type: Option<String>,
    pub invitees: Option<Vec<Invitee>>,
}

impl CreateEventRequest {
    pub fn into_new_event(self) -> DaoResult<NewEvent> {
        validation::require_all(
            &[
                self.title.as_deref(),
                self.date_time.as_deref(),
                self.event_type.as_deref(),
                self.invite_type.as_deref(),
            ],
            EVENT_REQUIRED_MESSAGE,
        )?;

        let invitees = self.invitees.unwrap_or_default();
        validation::validate_entries("invitees", &invitees)?;

        let status = match validation::present(self.status.as_deref()) {
            Some(s) => validation::parse_enum("status", s)?,
            None => EventStatus::default(),
        };
        let is_public = match &self.is_public {
            Some(v) => validation::cast_boolean("isPublic", v)?.unwrap_or(false),
            None => false,
        };

        Ok(NewEvent {
            title: self.title.unwrap_or_default(),
            description: self.description,
            date_time: validation::parse_date_time(
                "dateTime",
                self.date_time.as_deref().unwrap_or_default(),
            )?,
            venue: self.venue,
            event_type: validation::parse_enum(
                "eventType",
                self.event_type.as_deref().unwrap_or_default(),
            )?,
            is_public,
            status,
            invite_type: validation::parse_enum(
                "inviteType",
                self.invite_type.as_deref().unwrap_or_default(),
            )?,
            invitees,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date_time: Option<String>,
    pub venue: Option<String>,
    pub event_type: Option<String>,
    pub is_public: Option<Value>,
    pub status: Option<String>,
    pub invite_type: Option<String>,
    pub invitees: Option<Vec<Invitee>>,
}

impl UpdateEventRequest {
    /// Keys that were sent are checked against the schema the same way a
    /// create is; keys that were not sent stay untouched.
    pub fn into_changes(self) -> DaoResult<EventChanges> {
        if let Some(title) = &self.title {
            validation::require_non_empty("title", title)?;
        }
        if let Some(invitees) = &self.invitees {
            validation::validate_entries("invitees", invitees)?;
        }

        Ok(EventChanges {
            title: self.title,
            description: self.description,
            date_time: self
                .date_time
                .as_deref()
                .map(|v| validation::parse_date_time("dateTime", v))
                .transpose()?,
            venue: self.venue,
            event_type: self
                .event_type
                .as_deref()
                .map(|v| validation::parse_enum::<EventType>("eventType", v))
                .transpose()?,
            is_public: match &self.is_public {
                Some(v) => validation::cast_boolean("isPublic", v)?,
                None => None,
            },
            status: self
                .status
                .as_deref()
                .map(|v| validation::parse_enum::<EventStatus>("status", v))
                .transpose()?,
            invite_type: self
                .invite_type
                .as_deref()
                .map(|v| validation::parse_enum::<InviteType>("inviteType", v))
                .transpose()?,
            invitees: self.invitees,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    #[serde(rename = "_id")]
    pub object_id: String,
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    pub event_type: EventType,
    pub is_public: bool,
    pub status: EventStatus,
    pub invite_type: InviteType,
    pub invitees: Vec<Invitee>,
    pub created_at: String,
    pub updated_at: String,
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<EventResponse>>, ApiError> {
    let events = state.events.list().await?;
    Ok(Json(events.into_iter().map(to_response).collect()))
}

pub async fn create(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateEventRequest>,
) -> Result<(StatusCode, Json<EventResponse>), ApiError> {
    let new = body.into_new_event()?;
    let event = state.events.create(new).await?;

    info!(id = %hex_id(event.id), title = %event.title, "Event created");
    Ok((StatusCode::CREATED, Json(to_response(event))))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EventResponse>, ApiError> {
    let id = parse_id(&id, NOT_FOUND)?;
    let event = state
        .events
        .get(id)
        .await
        .map_err(|e| ApiError::from_dao(e, NOT_FOUND))?;

    Ok(Json(to_response(event)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<UpdateEventRequest>,
) -> Result<Json<EventResponse>, ApiError> {
    let id = parse_id(&id, NOT_FOUND)?;
    let changes = body.into_changes()?;
    let event = state
        .events
        .update(id, changes)
        .await
        .map_err(|e| ApiError::from_dao(e, NOT_FOUND))?;

    Ok(Json(to_response(event)))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id(&id, NOT_FOUND)?;
    state
        .events
        .delete(id)
        .await
        .map_err(|e| ApiError::from_dao(e, NOT_FOUND))?;

    info!(%id, "Event deleted");
    Ok(Json(serde_json::json!({ "message": "Event deleted successfully." })))
}

fn to_response(e: Event) -> EventResponse {
    let id = hex_id(e.id);
    EventResponse {
        object_id: id.clone(),
        id,
        title: e.title,
        description: e.description,
        date_time: iso(e.date_time),
        venue: e.venue,
        event_type: e.event_type,
        is_public: e.is_public,
        status: e.status,
        invite_type: e.invite_type,
        invitees: e.invitees,
        created_at: iso(e.created_at),
        updated_at: iso(e.updated_at),
    }
}
