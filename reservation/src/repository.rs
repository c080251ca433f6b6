use std::fmt;

use futures::TryStreamExt;
use mongodb::bson::{self, oid::ObjectId};
use mongodb::options::{FindOneAndUpdateOptions, ReturnDocument};
use mongodb::{Collection, Database};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use abi::Error;

/// Shape declaration for a stored entity.
///
/// Consumed by [`Repository`] purely as a type parameter; the only runtime
/// behavior is access to the identifier field.
pub trait Document: Serialize + DeserializeOwned + Unpin + Send + Sync {
    /// Name of the backing collection.
    const COLLECTION: &'static str;

    fn id(&self) -> Option<ObjectId>;
    fn set_id(&mut self, id: ObjectId);
}

/// Generic CRUD over one collection of documents of shape `T`.
///
/// Single-document reads and mutations fail with [`Error::NotFound`] on zero
/// matches, after logging the offending filter at warn level. Store errors
/// propagate unchanged. Atomicity of the find-and-modify operations is the
/// server's; this layer holds no locks and performs no retries.
pub struct Repository<T: Document> {
    collection: Collection<T>,
    entity: &'static str,
}

impl<T: Document> Repository<T> {
    /// `entity` labels the warn events emitted by this repository.
    pub fn new(db: &Database, entity: &'static str) -> Self {
        Self {
            collection: db.collection(T::COLLECTION),
            entity,
        }
    }

    /// Persist `document` under a freshly generated identifier, replacing any
    /// identifier already set, and return it as stored.
    pub async fn create(&self, mut document: T) -> Result<T, Error> {
        document.set_id(ObjectId::new());
        self.collection.insert_one(&document, None).await?;
        Ok(document)
    }

    /// Return the first document matching `filter`.
    pub async fn find_one(&self, filter: bson::Document) -> Result<T, Error> {
        self.collection
            .find_one(filter.clone(), None)
            .await?
            .ok_or_else(|| self.not_found(&filter))
    }

    /// Atomically update one matching document and return its post-update
    /// state, never the pre-update one.
    pub async fn find_one_and_update(
        &self,
        filter: bson::Document,
        update: bson::Document,
    ) -> Result<T, Error> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();
        self.collection
            .find_one_and_update(filter.clone(), update, options)
            .await?
            .ok_or_else(|| self.not_found(&filter))
    }

    /// Return every document matching `filter`. Zero matches is an empty vec,
    /// not an error.
    pub async fn find(&self, filter: bson::Document) -> Result<Vec<T>, Error> {
        let cursor = self.collection.find(filter, None).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Atomically remove one matching document and return its pre-deletion
    /// state. A no-match reports [`Error::NotFound`], same as the other
    /// single-document operations.
    pub async fn find_one_and_delete(&self, filter: bson::Document) -> Result<T, Error> {
        self.collection
            .find_one_and_delete(filter.clone(), None)
            .await?
            .ok_or_else(|| self.not_found(&filter))
    }

    fn not_found(&self, filter: &bson::Document) -> Error {
        warn!(entity = self.entity, %filter, "document not found");
        Error::NotFound
    }
}

impl<T: Document> Clone for Repository<T> {
    fn clone(&self) -> Self {
        Self {
            collection: self.collection.clone(),
            entity: self.entity,
        }
    }
}

impl<T: Document> fmt::Debug for Repository<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Repository")
            .field("collection", &self.collection.namespace())
            .field("entity", &self.entity)
            .finish()
    }
}
