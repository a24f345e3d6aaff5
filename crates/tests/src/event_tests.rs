use crate::fixtures::{seed::launch_event, test_app::TestApp};
use eventhub_db::models::Event;
use serde_json::Value;

#[tokio::test]
async fn create_event_applies_defaults() {
    let app = TestApp::spawn().await;

    let json = app.create_event(launch_event()).await;

    assert_eq!(json["id"].as_str().unwrap().len(), 24);
    assert_eq!(json["_id"], json["id"]);
    assert_eq!(json["status"], "Scheduled");
    assert_eq!(json["isPublic"], false);
    assert_eq!(json["invitees"][0]["id"], "G1");
    assert_eq!(json["invitees"][0]["name"], "Engineering");
    assert!(json["createdAt"].as_str().is_some());
    assert!(json["updatedAt"].as_str().is_some());
}

#[tokio::test]
async fn create_event_missing_required_field_persists_nothing() {
    let app = TestApp::spawn().await;

    for field in ["title", "dateTime", "eventType", "inviteType"] {
        let mut body = launch_event();
        body.as_object_mut().unwrap().remove(field);

        let resp = app.post("/api/events").json(&body).send().await.unwrap();
        assert_eq!(resp.status().as_u16(), 400, "missing {field}");
        let json: Value = resp.json().await.unwrap();
        assert_eq!(
            json["message"],
            "Title, Date/Time, Event Type, and Invite Type are required."
        );
    }

    assert_eq!(app.count(Event::COLLECTION).await, 0);
}

#[tokio::test]
async fn create_event_rejects_unknown_event_type() {
    let app = TestApp::spawn().await;

    let mut body = launch_event();
    body["eventType"] = serde_json::json!("Hackathon");

    let resp = app.post("/api/events").json(&body).send().await.unwrap();
    assert_eq!(resp.status().as_u16(), 400);
    assert_eq!(app.count(Event::COLLECTION).await, 0);
}

#[tokio::test]
async fn get_event_round_trips() {
    let app = TestApp::spawn().await;

    let mut body = launch_event();
    body["description"] = serde_json::json!("Product launch");
    body["venue"] = serde_json::json!("Main hall");
    body["isPublic"] = serde_json::json!(true);
    let created = app.create_event(body).await;

    let resp = app
        .get(&format!("/api/events/{}", created["id"].as_str().unwrap()))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 200);
    let json: Value = resp.json().await.unwrap();
    assert_eq!(json, created);
    assert_eq!(json["dateTime"], "2025-06-01T10:00:00.000Z");
    assert_eq!(json["description"], "Product launch");
    assert_eq!(json["venue"], "Main hall");
    assert_eq!(json["isPublic"], true);
}

#[tokio::test]
async fn get_unknown_event_is_not_found() {
    let app = TestApp::spawn().await;

    for id in ["doesnotexist", "64b7f0c2a1b2c3d4e5f60718"] {
        let resp = app.get(&format!("/api/events/{id}")).send().await.unwrap();
        assert_eq!(resp.status().as_u16(), 404);
        let json: Value = resp.json().await.unwrap();
        assert_eq!(json["message"], "Event not found.");
    }
}

#[tokio::test]
async fn list_events() {
    let app = TestApp::spawn().await;

    app.create_event(launch_event()).await;
    let mut second = launch_event();
    second["title"] = serde_json::json!("Retro");
    second["eventType"] = serde_json::json!("Workshop");
    app.create_event(second).await;

    let resp = app.get("/api/events").send().await.unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let events: Vec<Value> = resp.json().await.unwrap();
    assert_eq!(events.len(), 2);
    assert!(events.iter().any(|e| e["title"] == "Retro"));
}

#[tokio::test]
async fn update_status_leaves_other_fields() {
    let app = TestApp::spawn().await;
    let created = app.create_event(launch_event()).await;
    let id = created["id"].as_str().unwrap();

    let resp = app
        .put(&format!("/api/events/{id}"))
        .json(&serde_json::json!({ "status": "Cancel" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 200);
    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["status"], "Cancel");
    for key in ["title", "dateTime", "eventType", "inviteType", "invitees", "isPublic", "createdAt"] {
        assert_eq!(json[key], created[key], "{key} changed");
    }
}

#[tokio::test]
async fn update_accepts_local_date_time_and_replaces_invitees() {
    let app = TestApp::spawn().await;
    let created = app.create_event(launch_event()).await;
    let id = created["id"].as_str().unwrap();

    let resp = app
        .put(&format!("/api/events/{id}"))
        .json(&serde_json::json!({
            "dateTime": "2025-07-15T09:30",
            "inviteType": "individual",
            "invitees": [{ "id": "u-1", "name": "Ada" }, { "id": "u-2", "name": "Grace" }],
            "status": "On Going",
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 200);
    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["dateTime"], "2025-07-15T09:30:00.000Z");
    assert_eq!(json["inviteType"], "individual");
    assert_eq!(json["invitees"].as_array().unwrap().len(), 2);
    assert_eq!(json["status"], "On Going");
}

#[tokio::test]
async fn update_rejects_invalid_status() {
    let app = TestApp::spawn().await;
    let created = app.create_event(launch_event()).await;
    let id = created["id"].as_str().unwrap();

    let resp = app
        .put(&format!("/api/events/{id}"))
        .json(&serde_json::json!({ "status": "Finished" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 400);

    let json: Value = app
        .get(&format!("/api/events/{id}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(json["status"], "Scheduled");
}

#[tokio::test]
async fn update_unknown_event_is_not_found() {
    let app = TestApp::spawn().await;

    let resp = app
        .put("/api/events/64b7f0c2a1b2c3d4e5f60718")
        .json(&serde_json::json!({ "title": "Ghost" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 404);
}

#[tokio::test]
async fn delete_is_not_idempotent() {
    let app = TestApp::spawn().await;
    let created = app.create_event(launch_event()).await;
    let path = format!("/api/events/{}", created["id"].as_str().unwrap());

    let resp = app.delete(&path).send().await.unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["message"], "Event deleted successfully.");

    let resp = app.delete(&path).send().await.unwrap();
    assert_eq!(resp.status().as_u16(), 404);
    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["message"], "Event not found.");

    assert_eq!(app.count(Event::COLLECTION).await, 0);
}
