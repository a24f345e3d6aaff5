use bson::doc;
use mongodb::Database;
use eventhub_db::models::User;

use super::base::{BaseDao, DaoResult};

/// Read-only access to users; they are provisioned elsewhere.
pub struct UserDao {
    pub base: BaseDao<User>,
}

impl UserDao {
    pub fn new(db: &Database) -> Self {
        Self {
            base: BaseDao::new(db, User::COLLECTION),
        }
    }

    pub async fn list(&self) -> DaoResult<Vec<User>> {
        self.base.find_many(doc! {}, None).await
    }
}
