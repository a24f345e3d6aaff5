use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::{error::ApiError, extractors::ApiJson, state::AppState};
use eventhub_db::models::{Group, GroupMember, GroupType};
use eventhub_services::{
    dao::{
        base::DaoResult,
        group::{GroupChanges, NewGroup},
    },
    validation::{self, GROUP_REQUIRED_MESSAGE},
};

use super::{hex_id, iso, parse_id};

const NOT_FOUND: &str = "Group not found";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupRequest {
    pub group_name: Option<String>,
    pub group_code: Option<String>,
    /// Loosely typed: clients send either a bool or `"true"`/`"false"`.
    pub status: Option<Value>,
    pub group_members: Option<Vec<GroupMember>>,
    pub group_type: Option<String>,
}

impl CreateGroupRequest {
    pub fn into_new_group(self) -> DaoResult<NewGroup> {
        validation::require_all(
            &[
                self.group_name.as_deref(),
                self.group_code.as_deref(),
                self.group_type.as_deref(),
            ],
            GROUP_REQUIRED_MESSAGE,
        )?;

        let group_members = self.group_members.unwrap_or_default();
        validation::validate_entries("groupMembers", &group_members)?;

        Ok(NewGroup {
            group_type: validation::parse_enum(
                "groupType",
                self.group_type.as_deref().unwrap_or_default(),
            )?,
            group_name: self.group_name.unwrap_or_default(),
            group_code: self.group_code.unwrap_or_default(),
            status: validation::coerce_status(self.status.as_ref()),
            group_members,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGroupRequest {
    pub group_name: Option<String>,
    pub group_code: Option<String>,
    pub status: Option<Value>,
    pub group_members: Option<Vec<GroupMember>>,
    pub group_type: Option<String>,
}

impl UpdateGroupRequest {
    pub fn into_changes(self) -> DaoResult<GroupChanges> {
        if let Some(name) = &self.group_name {
            validation::require_non_empty("groupName", name)?;
        }
        if let Some(code) = &self.group_code {
            validation::require_non_empty("groupCode", code)?;
        }
        if let Some(members) = &self.group_members {
            validation::validate_entries("groupMembers", members)?;
        }

        Ok(GroupChanges {
            status: match &self.status {
                Some(v) => validation::cast_boolean("status", v)?,
                None => None,
            },
            group_type: self
                .group_type
                .as_deref()
                .map(|v| validation::parse_enum::<GroupType>("groupType", v))
                .transpose()?,
            group_name: self.group_name,
            group_code: self.group_code,
            group_members: self.group_members,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupResponse {
    #[serde(rename = "_id")]
    pub object_id: String,
    pub id: String,
    pub group_name: String,
    pub group_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<bool>,
    pub group_members: Vec<GroupMember>,
    pub group_type: GroupType,
    pub created_at: String,
    pub updated_at: String,
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<GroupResponse>>, ApiError> {
    let groups = state.groups.list().await?;
    Ok(Json(groups.into_iter().map(to_response).collect()))
}

pub async fn create(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateGroupRequest>,
) -> Result<(StatusCode, Json<GroupResponse>), ApiError> {
    debug!(?body, "Create group request");

    let new = body.into_new_group()?;
    let group = state.groups.create(new).await?;

    info!(id = %hex_id(group.id), code = %group.group_code, "Group created");
    Ok((StatusCode::CREATED, Json(to_response(group))))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<GroupResponse>, ApiError> {
    let id = parse_id(&id, NOT_FOUND)?;
    let group = state
        .groups
        .get(id)
        .await
        .map_err(|e| ApiError::from_dao(e, NOT_FOUND))?;

    Ok(Json(to_response(group)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<UpdateGroupRequest>,
) -> Result<Json<GroupResponse>, ApiError> {
    let id = parse_id(&id, NOT_FOUND)?;
    let changes = body.into_changes()?;
    let group = state
        .groups
        .update(id, changes)
        .await
        .map_err(|e| ApiError::from_dao(e, NOT_FOUND))?;

    Ok(Json(to_response(group)))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id(&id, NOT_FOUND)?;
    state
        .groups
        .delete(id)
        .await
        .map_err(|e| ApiError::from_dao(e, NOT_FOUND))?;

    info!(%id, "Group deleted");
    Ok(Json(serde_json::json!({ "message": "Group deleted successfully" })))
}

fn to_response(g: Group) -> GroupResponse {
    let id = hex_id(g.id);
    GroupResponse {
        object_id: id.clone(),
        id,
        group_name: g.group_name,
        group_code: g.group_code,
        status: g.status,
        group_members: g.group_members,
        group_type: g.group_type,
        created_at: iso(g.created_at),
        updated_at: iso(g.updated_at),
    }
}
