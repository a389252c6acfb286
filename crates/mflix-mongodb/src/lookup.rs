//! Single-document lookup
//!
//! [`LookupSpec`] captures the namespace and the equality predicate;
//! [`LookupSpec::execute`] issues exactly one `find_one` against it.
//! A missing match is a normal `Ok(None)`, not an error.

use bson::{Bson, Document as BsonDocument};
use mflix_common::{MflixError, Result};
use tracing::{debug, info};

use crate::connection::Connection;
use crate::names::{CollectionName, DatabaseName};

/// Specification of one equality lookup
#[derive(Debug, Clone)]
pub struct LookupSpec {
    database: DatabaseName,
    collection: CollectionName,
    filter: BsonDocument,
}

impl LookupSpec {
    /// Create a spec with an empty predicate
    pub fn new(database: DatabaseName, collection: CollectionName) -> Self {
        Self {
            database,
            collection,
            filter: BsonDocument::new(),
        }
    }

    /// Require equality between a field and a value
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Bson>) -> Self {
        self.filter.insert(field.into(), value.into());
        self
    }

    /// Get the database name
    pub fn database(&self) -> &DatabaseName {
        &self.database
    }

    /// Get the collection name
    pub fn collection(&self) -> &CollectionName {
        &self.collection
    }

    /// Get the BSON filter sent to the server
    pub fn filter_document(&self) -> &BsonDocument {
        &self.filter
    }

    /// Execute the lookup: exactly one `find_one`, no cursor
    pub async fn execute(&self, conn: &Connection) -> Result<Option<BsonDocument>> {
        let db = conn.database(&self.database);
        let collection = conn.collection(&db, &self.collection);

        debug!(filter = %self.filter, "issuing find_one");
        let found = collection
            .find_one(self.filter.clone())
            .await
            .map_err(|e| MflixError::Query(e.to_string()))?;

        info!(
            database = self.database.as_str(),
            collection = self.collection.as_str(),
            matched = found.is_some(),
            "lookup complete"
        );

        Ok(found)
    }
}
