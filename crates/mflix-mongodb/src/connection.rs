//! MongoDB connection management
//!
//! The client is created once per invocation and released through
//! [`Connection::shutdown`]. Construction performs no I/O beyond SRV
//! resolution for `mongodb+srv` connection strings; the first operation
//! on a handle establishes the actual connection.

use bson::{doc, Document as BsonDocument};
use mflix_common::{MflixError, Result};
use mongodb::{
    options::{ClientOptions, ServerApi, ServerApiVersion},
    Client, Collection, Database,
};
use std::time::Duration;
use tracing::debug;

use crate::names::{CollectionName, DatabaseName};

/// Client configuration applied on top of the parsed connection string
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Maximum number of connections in the pool (default: driver's)
    pub max_pool_size: Option<u32>,
    /// Connection timeout (default: 10s)
    pub connect_timeout: Option<Duration>,
    /// Server selection timeout (default: 30s)
    pub server_selection_timeout: Option<Duration>,
    /// Application name for server logs
    pub app_name: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            max_pool_size: None,
            connect_timeout: Some(Duration::from_secs(10)),
            server_selection_timeout: Some(Duration::from_secs(30)),
            app_name: Some("mflix".to_string()),
        }
    }
}

/// Owning handle around the driver client
#[derive(Debug)]
pub struct Connection {
    client: Client,
}

impl Connection {
    /// Create a client with default settings
    pub async fn connect(connection_string: &str) -> Result<Self> {
        Self::with_config(connection_string, ClientConfig::default()).await
    }

    /// Create a client with explicit configuration
    pub async fn with_config(connection_string: &str, config: ClientConfig) -> Result<Self> {
        let mut options = ClientOptions::parse(connection_string).await?;

        if let Some(max) = config.max_pool_size {
            options.max_pool_size = Some(max);
        }
        if let Some(connect) = config.connect_timeout {
            options.connect_timeout = Some(connect);
        }
        if let Some(server_sel) = config.server_selection_timeout {
            options.server_selection_timeout = Some(server_sel);
        }
        if let Some(app) = config.app_name {
            options.app_name = Some(app);
        }

        // Pin the Stable API so the lookup behaves the same across server versions
        let server_api = ServerApi::builder().version(ServerApiVersion::V1).build();
        options.server_api = Some(server_api);

        let client = Client::with_options(options)?;
        debug!("client constructed");

        Ok(Self { client })
    }

    /// Resolve a database handle by validated name
    pub fn database(&self, name: &DatabaseName) -> Database {
        self.client.database(name.as_str())
    }

    /// Resolve an untyped collection handle within a database
    pub fn collection(&self, db: &Database, name: &CollectionName) -> Collection<BsonDocument> {
        db.collection(name.as_str())
    }

    /// Check that the deployment is reachable by pinging through `db`
    pub async fn ping(&self, db: &Database) -> Result<()> {
        db.run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| MflixError::Connection(format!("ping failed: {}", e)))?;
        debug!(database = db.name(), "ping ok");
        Ok(())
    }

    /// Release the client and its pooled connections
    ///
    /// Consumes the connection, so release happens exactly once.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
        debug!("client released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_client_config() {
        let config = ClientConfig::default();
        assert_eq!(config.max_pool_size, None);
        assert_eq!(config.connect_timeout, Some(Duration::from_secs(10)));
        assert_eq!(config.server_selection_timeout, Some(Duration::from_secs(30)));
        assert_eq!(config.app_name, Some("mflix".to_string()));
    }

    #[tokio::test]
    async fn test_with_config_accepts_plain_uri() {
        // Construction is lazy: no listener needs to be running
        let config = ClientConfig {
            max_pool_size: Some(2),
            connect_timeout: Some(Duration::from_secs(1)),
            server_selection_timeout: Some(Duration::from_secs(1)),
            app_name: Some("mflix-test".to_string()),
        };
        let conn = Connection::with_config("mongodb://localhost:27017", config).await;
        assert!(conn.is_ok());
    }

    #[tokio::test]
    async fn test_connect_rejects_malformed_uri() {
        let err = Connection::connect("not-a-connection-string").await.unwrap_err();
        assert!(matches!(err, MflixError::Config(_)));
    }

    #[tokio::test]
    async fn test_database_handle_uses_validated_name() {
        let conn = Connection::connect("mongodb://localhost:27017").await.unwrap();
        let name = DatabaseName::new("sample_mflix").unwrap();
        let db = conn.database(&name);
        assert_eq!(db.name(), "sample_mflix");
        conn.shutdown().await;
    }
}
