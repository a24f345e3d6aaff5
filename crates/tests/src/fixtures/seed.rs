use bson::DateTime;
use eventhub_db::models::{User, UserRole, UserStatus};
use eventhub_services::dao::BaseDao;
use serde_json::Value;

use super::test_app::TestApp;

impl TestApp {
    /// Create an event through the API and return the response body.
    pub async fn create_event(&self, body: Value) -> Value {
        let resp = self
            .post("/api/events")
            .json(&body)
            .send()
            .await
            .expect("Create event request failed");

        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        assert_eq!(status.as_u16(), 201, "Create event failed: {}", text);
        serde_json::from_str(&text).expect("Failed to parse event response")
    }

    /// Create a group through the API and return the response body.
    pub async fn create_group(&self, name: &str, code: &str) -> Value {
        let resp = self
            .post("/api/groups")
            .json(&serde_json::json!({
                "groupName": name,
                "groupCode": code,
                "groupType": "Corporate",
                "status": true,
            }))
            .send()
            .await
            .expect("Create group request failed");

        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        assert_eq!(status.as_u16(), 201, "Create group failed: {}", text);
        serde_json::from_str(&text).expect("Failed to parse group response")
    }

    /// Users have no write endpoint, so they are inserted directly.
    pub async fn seed_user(&self, user_id: &str, user_name: &str, role: UserRole) -> User {
        let now = DateTime::now();
        let user = User {
            id: None,
            user_id: user_id.to_string(),
            user_name: user_name.to_string(),
            email: format!("{}@example.test", user_id),
            role,
            status: UserStatus::Active,
            created_at: Some(now),
            updated_at: Some(now),
        };

        self.db
            .collection::<User>(User::COLLECTION)
            .insert_one(&user)
            .await
            .expect("Failed to seed user");
        user
    }

    pub async fn count(&self, collection: &str) -> u64 {
        BaseDao::<bson::Document>::new(&self.db, collection)
            .count(bson::doc! {})
            .await
            .expect("Count failed")
    }
}

/// The launch event used across the event suites.
pub fn launch_event() -> Value {
    serde_json::json!({
        "title": "Launch",
        "dateTime": "2025-06-01T10:00:00Z",
        "eventType": "Conference",
        "inviteType": "group",
        "invitees": [{ "id": "G1", "name": "Engineering" }],
    })
}
