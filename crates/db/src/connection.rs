use eventhub_config::Settings;
use mongodb::{Client, Database, options::ClientOptions};
use tracing::info;

/// Owns the MongoDB client for the lifetime of the process.
///
/// Opened once at startup and handed to the API state; `close` drains the
/// connection pool after the HTTP server has stopped accepting requests.
pub struct Gateway {
    client: Client,
    db: Database,
}

impl Gateway {
    pub async fn open(settings: &Settings) -> Result<Self, mongodb::error::Error> {
        let mut client_options = ClientOptions::parse(&settings.database.url).await?;

        if let Some(max_pool) = settings.database.max_pool_size {
            client_options.max_pool_size = Some(max_pool);
        }
        if let Some(min_pool) = settings.database.min_pool_size {
            client_options.min_pool_size = Some(min_pool);
        }

        let client = Client::with_options(client_options)?;

        // Verify connection
        client
            .database("admin")
            .run_command(bson::doc! { "ping": 1 })
            .await?;

        info!(db = %settings.database.name, "Connected to MongoDB");

        let db = client.database(&settings.database.name);
        Ok(Self { client, db })
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub async fn close(self) {
        self.client.shutdown().await;
        info!("MongoDB connection closed");
    }
}
