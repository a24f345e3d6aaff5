use crate::fixtures::test_app::TestApp;
use eventhub_db::models::{User, UserRole};
use serde_json::Value;

#[tokio::test]
async fn list_users_empty() {
    let app = TestApp::spawn().await;

    let resp = app.get("/api/users").send().await.unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let users: Vec<Value> = resp.json().await.unwrap();
    assert!(users.is_empty());
}

#[tokio::test]
async fn list_users_returns_seeded() {
    let app = TestApp::spawn().await;
    app.seed_user("u-1", "Ada", UserRole::Admin).await;
    app.seed_user("u-2", "Grace", UserRole::User).await;

    let resp = app.get("/api/users").send().await.unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let users: Vec<Value> = resp.json().await.unwrap();
    assert_eq!(users.len(), 2);

    let ada = users.iter().find(|u| u["userId"] == "u-1").unwrap();
    assert_eq!(ada["userName"], "Ada");
    assert_eq!(ada["role"], "Admin");
    assert_eq!(ada["status"], "Active");
    assert_eq!(ada["email"], "u-1@example.test");
}

#[tokio::test]
async fn list_users_tolerates_bare_records() {
    let app = TestApp::spawn().await;
    app.db
        .collection::<bson::Document>(User::COLLECTION)
        .insert_one(bson::doc! {
            "userId": "u-3",
            "userName": "Linus",
            "email": "linus@example.test",
        })
        .await
        .unwrap();

    let resp = app.get("/api/users").send().await.unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let users: Vec<Value> = resp.json().await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["userId"], "u-3");
    assert_eq!(users[0]["role"], "User");
    assert_eq!(users[0]["status"], "Active");
    assert!(users[0].get("createdAt").is_none());
}

#[tokio::test]
async fn users_have_no_write_surface() {
    let app = TestApp::spawn().await;

    let resp = app
        .post("/api/users")
        .json(&serde_json::json!({ "userId": "u-9", "userName": "Eve", "email": "e@x" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 405);
}
