use bson::{doc, oid::ObjectId, DateTime, Document};
use mongodb::Database;
use eventhub_db::models::{Group, GroupMember, GroupType};

use super::base::{BaseDao, DaoResult};

#[derive(Debug, Clone)]
pub struct NewGroup {
    pub group_name: String,
    pub group_code: String,
    pub status: bool,
    pub group_members: Vec<GroupMember>,
    pub group_type: GroupType,
}

#[derive(Debug, Clone, Default)]
pub struct GroupChanges {
    pub group_name: Option<String>,
    pub group_code: Option<String>,
    pub status: Option<bool>,
    pub group_members: Option<Vec<GroupMember>>,
    pub group_type: Option<GroupType>,
}

impl GroupChanges {
    pub fn into_set(self) -> DaoResult<Document> {
        let mut set = Document::new();
        if let Some(name) = self.group_name {
            set.insert("groupName", name);
        }
        if let Some(code) = self.group_code {
            set.insert("groupCode", code);
        }
        if let Some(status) = self.status {
            set.insert("status", status);
        }
        if let Some(members) = self.group_members {
            set.insert("groupMembers", bson::to_bson(&members)?);
        }
        if let Some(group_type) = self.group_type {
            set.insert("groupType", bson::to_bson(&group_type)?);
        }
        Ok(set)
    }
}

pub struct GroupDao {
    pub base: BaseDao<Group>,
}

impl GroupDao {
    pub fn new(db: &Database) -> Self {
        Self {
            base: BaseDao::new(db, Group::COLLECTION),
        }
    }

    /// Inserts the group; a taken `groupCode` surfaces as `DuplicateKey`
    /// from the unique index.
    pub async fn create(&self, new: NewGroup) -> DaoResult<Group> {
        let now = DateTime::now();
        let group = Group {
            id: None,
            group_name: new.group_name,
            group_code: new.group_code,
            status: Some(new.status),
            group_members: new.group_members,
            group_type: new.group_type,
            created_at: now,
            updated_at: now,
        };

        let id = self.base.insert_one(&group).await?;
        self.base.find_by_id(id).await
    }

    pub async fn list(&self) -> DaoResult<Vec<Group>> {
        self.base.find_many(doc! {}, None).await
    }

    pub async fn get(&self, id: ObjectId) -> DaoResult<Group> {
        self.base.find_by_id(id).await
    }

    pub async fn update(&self, id: ObjectId, changes: GroupChanges) -> DaoResult<Group> {
        self.base.update_by_id(id, changes.into_set()?).await
    }

    pub async fn delete(&self, id: ObjectId) -> DaoResult<Group> {
        self.base.delete_by_id(id).await
    }
}
