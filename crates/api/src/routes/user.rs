use axum::{Json, extract::State};
use serde::Serialize;

use crate::{error::ApiError, state::AppState};
use eventhub_db::models::{User, UserRole, UserStatus};

use super::{hex_id, iso};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub object_id: String,
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = state.users.list().await?;
    Ok(Json(users.into_iter().map(to_response).collect()))
}

fn to_response(u: User) -> UserResponse {
    let id = hex_id(u.id);
    UserResponse {
        object_id: id.clone(),
        id,
        user_id: u.user_id,
        user_name: u.user_name,
        email: u.email,
        role: u.role,
        status: u.status,
        created_at: u.created_at.map(iso),
        updated_at: u.updated_at.map(iso),
    }
}
