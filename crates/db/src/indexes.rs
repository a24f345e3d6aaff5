use mongodb::{Database, IndexModel, options::IndexOptions};
use tracing::info;

use crate::models::{Group, User};

/// Creates the unique indexes that back `groupCode`, `userId` and `email`
/// uniqueness. Duplicate inserts are rejected by the server, never by a
/// lookup beforehand.
pub async fn ensure_indexes(db: &Database) -> Result<(), mongodb::error::Error> {
    create_indexes(
        db,
        Group::COLLECTION,
        vec![index_unique(bson::doc! { "groupCode": 1 })],
    )
    .await?;

    create_indexes(
        db,
        User::COLLECTION,
        vec![
            index_unique(bson::doc! { "userId": 1 }),
            index_unique(bson::doc! { "email": 1 }),
        ],
    )
    .await?;

    info!("All indexes ensured");
    Ok(())
}

fn index_unique(keys: bson::Document) -> IndexModel {
    IndexModel::builder()
        .keys(keys)
        .options(IndexOptions::builder().unique(true).build())
        .build()
}

async fn create_indexes(
    db: &Database,
    collection: &str,
    indexes: Vec<IndexModel>,
) -> Result<(), mongodb::error::Error> {
    db.collection::<bson::Document>(collection)
        .create_indexes(indexes)
        .await?;
    info!(collection, "Indexes created");
    Ok(())
}
