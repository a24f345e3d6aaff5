use bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub group_name: String,
    pub group_code: String,
    /// `true` means active. Absent on documents written without a status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<bool>,
    #[serde(default)]
    pub group_members: Vec<GroupMember>,
    pub group_type: GroupType,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GroupMember {
    #[validate(length(min = 1, message = "Path `userId` is required."))]
    pub user_id: String,
    #[validate(length(min = 1, message = "Path `userName` is required."))]
    pub user_name: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GroupType {
    Corporate,
    Private,
    Public,
}

impl Group {
    pub const COLLECTION: &'static str = "groups";
}
