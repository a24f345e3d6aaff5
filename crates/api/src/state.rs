use mongodb::Database;
use eventhub_config::Settings;
use eventhub_services::dao::{event::EventDao, group::GroupDao, user::UserDao};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub events: Arc<EventDao>,
    pub groups: Arc<GroupDao>,
    pub users: Arc<UserDao>,
}

impl AppState {
    pub fn new(db: Database, settings: Settings) -> Self {
        let events = Arc::new(EventDao::new(&db));
        let groups = Arc::new(GroupDao::new(&db));
        let users = Arc::new(UserDao::new(&db));

        Self {
            settings,
            events,
            groups,
            users,
        }
    }
}
