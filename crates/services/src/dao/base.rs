use bson::{doc, oid::ObjectId, Bson, Document};
use futures::TryStreamExt;
use mongodb::{
    Collection, Database,
    error::{ErrorKind, WriteFailure},
    options::ReturnDocument,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Server error code for a unique index violation.
const DUPLICATE_KEY: i32 = 11000;

#[derive(Debug, Error)]
pub enum DaoError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),
    #[error("BSON serialization error: {0}")]
    BsonSer(#[from] bson::ser::Error),
    #[error("BSON deserialization error: {0}")]
    BsonDe(#[from] bson::de::Error),
    #[error("Unexpected inserted id: {0}")]
    InsertedId(Bson),
    #[error("Entity not found")]
    NotFound,
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),
    #[error("Validation: {0}")]
    Validation(String),
}

pub type DaoResult<T> = Result<T, DaoError>;

impl DaoError {
    /// Splits unique index violations out of generic driver errors. Inserts
    /// report them as write errors, find-and-modify as command errors.
    fn from_write(err: mongodb::error::Error) -> Self {
        let duplicate = match err.kind.as_ref() {
            ErrorKind::Write(WriteFailure::WriteError(write_error))
                if write_error.code == DUPLICATE_KEY =>
            {
                Some(write_error.message.clone())
            }
            ErrorKind::Command(command_error) if command_error.code == DUPLICATE_KEY => {
                Some(command_error.message.clone())
            }
            _ => None,
        };

        match duplicate {
            Some(message) => DaoError::DuplicateKey(message),
            None => DaoError::Mongo(err),
        }
    }
}

pub struct BaseDao<T: Send + Sync> {
    collection: Collection<T>,
}

impl<T> BaseDao<T>
where
    T: Serialize + for<'de> Deserialize<'de> + Unpin + Send + Sync,
{
    pub fn new(db: &Database, collection_name: &str) -> Self {
        Self {
            collection: db.collection::<T>(collection_name),
        }
    }

    pub fn collection(&self) -> &Collection<T> {
        &self.collection
    }

    pub async fn find_by_id(&self, id: ObjectId) -> DaoResult<T> {
        self.collection
            .find_one(doc! { "_id": id })
            .await?
            .ok_or(DaoError::NotFound)
    }

    /// Returns every match in natural order unless a sort is given.
    pub async fn find_many(
        &self,
        filter: Document,
        sort: Option<Document>,
    ) -> DaoResult<Vec<T>> {
        let cursor = if let Some(sort) = sort {
            self.collection.find(filter).sort(sort).await?
        } else {
            self.collection.find(filter).await?
        };

        Ok(cursor.try_collect().await?)
    }

    pub async fn insert_one(&self, doc: &T) -> DaoResult<ObjectId> {
        let result = self
            .collection
            .insert_one(doc)
            .await
            .map_err(DaoError::from_write)?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| DaoError::InsertedId(result.inserted_id.clone()))?;
        debug!(collection = %self.collection.name(), %id, "Inserted document");
        Ok(id)
    }

    /// Applies `set` with `$set`, refreshing `updatedAt`, and returns the
    /// document as it is after the update.
    pub async fn update_by_id(&self, id: ObjectId, set: Document) -> DaoResult<T> {
        let mut set = set;
        set.insert("updatedAt", bson::DateTime::now());

        let updated = self
            .collection
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await
            .map_err(DaoError::from_write)?
            .ok_or(DaoError::NotFound)?;

        debug!(collection = %self.collection.name(), %id, "Updated document");
        Ok(updated)
    }

    pub async fn delete_by_id(&self, id: ObjectId) -> DaoResult<T> {
        let deleted = self
            .collection
            .find_one_and_delete(doc! { "_id": id })
            .await?
            .ok_or(DaoError::NotFound)?;

        debug!(collection = %self.collection.name(), %id, "Deleted document");
        Ok(deleted)
    }

    pub async fn count(&self, filter: Document) -> DaoResult<u64> {
        Ok(self.collection.count_documents(filter).await?)
    }
}
