use bson::{doc, oid::ObjectId, DateTime, Document};
use mongodb::Database;
use eventhub_db::models::{Event, EventStatus, EventType, InviteType, Invitee};

use super::base::{BaseDao, DaoResult};

/// A validated event ready to be stored.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub title: String,
    pub description: Option<String>,
    pub date_time: DateTime,
    pub venue: Option<String>,
    pub event_type: EventType,
    pub is_public: bool,
    pub status: EventStatus,
    pub invite_type: InviteType,
    pub invitees: Vec<Invitee>,
}

/// The fields an update touches. `None` leaves the stored value alone.
#[derive(Debug, Clone, Default)]
pub struct EventChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date_time: Option<DateTime>,
    pub venue: Option<String>,
    pub event_type: Option<EventType>,
    pub is_public: Option<bool>,
    pub status: Option<EventStatus>,
    pub invite_type: Option<InviteType>,
    pub invitees: Option<Vec<Invitee>>,
}

impl EventChanges {
    pub fn into_set(self) -> DaoResult<Document> {
        let mut set = Document::new();
        if let Some(title) = self.title {
            set.insert("title", title);
        }
        if let Some(description) = self.description {
            set.insert("description", description);
        }
        if let Some(date_time) = self.date_time {
            set.insert("dateTime", date_time);
        }
        if let Some(venue) = self.venue {
            set.insert("venue", venue);
        }
        if let Some(event_type) = self.event_type {
            set.insert("eventType", bson::to_bson(&event_type)?);
        }
        if let Some(is_public) = self.is_public {
            set.insert("isPublic", is_public);
        }
        if let Some(status) = self.status {
            set.insert("status", bson::to_bson(&status)?);
        }
        if let Some(invite_type) = self.invite_type {
            set.insert("inviteType", bson::to_bson(&invite_type)?);
        }
        if let Some(invitees) = self.invitees {
            set.insert("invitees", bson::to_bson(&invitees)?);
        }
        Ok(set)
    }
}

pub struct EventDao {
    pub base: BaseDao<Event>,
}

impl EventDao {
    pub fn new(db: &Database) -> Self {
        Self {
            base: BaseDao::new(db, Event::COLLECTION),
        }
    }

    pub async fn create(&self, new: NewEvent) -> DaoResult<Event> {
        let now = DateTime::now();
        let event = Event {
            id: None,
            title: new.title,
            description: new.description,
            date_time: new.date_time,
            venue: new.venue,
            event_type: new.event_type,
            is_public: new.is_public,
            status: new.status,
            invite_type: new.invite_type,
            invitees: new.invitees,
            created_at: now,
            updated_at: now,
        };

        let id = self.base.insert_one(&event).await?;
        self.base.find_by_id(id).await
    }

    pub async fn list(&self) -> DaoResult<Vec<Event>> {
        self.base.find_many(doc! {}, None).await
    }

    pub async fn get(&self, id: ObjectId) -> DaoResult<Event> {
        self.base.find_by_id(id).await
    }

    pub async fn update(&self, id: ObjectId, changes: EventChanges) -> DaoResult<Event> {
        self.base.update_by_id(id, changes.into_set()?).await
    }

    pub async fn delete(&self, id: ObjectId) -> DaoResult<Event> {
        self.base.delete_by_id(id).await
    }
}
