use crate::config::Config;
use crate::db::models::ProfessorCredential;
use crate::db::{CredentialStore, RecordId};
use crate::error::SeedError;
use bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};
use tracing::{debug, info, warn};

/// MongoDB-backed credential store bound to one database and collection.
pub struct MongoStore {
    client: Client,
    collection: Collection<ProfessorCredential>,
}

impl MongoStore {
    /// Connect, verify the server answers a `ping`, then check the target collection.
    pub async fn connect(cfg: &Config) -> Result<Self, SeedError> {
        info!(
            uri = %cfg.redacted_uri(),
            database = %cfg.database,
            collection = %cfg.collection,
            "connecting to MongoDB"
        );

        let options = ClientOptions::parse(&cfg.mongodb_uri)
            .await
            .map_err(SeedError::Connectivity)?;
        let client = Client::with_options(options).map_err(SeedError::Connectivity)?;

        let database = client.database(&cfg.database);
        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(SeedError::Connectivity)?;
        info!(database = %cfg.database, "connected to MongoDB");

        check_collection(&database, &cfg.collection).await;

        Ok(Self {
            collection: database.collection(&cfg.collection),
            client,
        })
    }

    /// Shut the client down, releasing its connections.
    pub async fn close(self) {
        self.client.shutdown().await;
        debug!("MongoDB client shut down");
    }
}

/// A missing collection is only worth a warning: the first insert creates it.
async fn check_collection(database: &Database, collection: &str) {
    match database.list_collection_names().await {
        Ok(names) if names.iter().any(|n| n == collection) => {
            debug!(database = %database.name(), collection, "target collection found");
        }
        Ok(_) => {
            warn!(
                database = %database.name(),
                collection,
                "target collection not found; it will be created on insert"
            );
        }
        Err(e) => {
            warn!(database = %database.name(), error = %e, "failed to list collections");
        }
    }
}

impl CredentialStore for MongoStore {
    async fn insert_record(&self, record: ProfessorCredential) -> Result<RecordId, SeedError> {
        debug!(collection = %self.collection.name(), email = %record.email, "inserting record");
        let result = self
            .collection
            .insert_one(record)
            .await
            .map_err(SeedError::Insertion)?;

        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| SeedError::UnexpectedId(result.inserted_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(uri: &str) -> Config {
        Config {
            mongodb_uri: uri.to_string(),
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn malformed_uri_is_a_connectivity_error() {
        let err = MongoStore::connect(&config_for("not a uri"))
            .await
            .err()
            .expect("connect should fail");

        assert!(matches!(err, SeedError::Connectivity(_)));
        assert!(err.is_connectivity());
    }

    #[tokio::test]
    async fn refused_server_fails_before_any_insert() {
        let err = MongoStore::connect(&config_for(
            "mongodb://127.0.0.1:1/?serverSelectionTimeoutMS=300",
        ))
        .await
        .err()
        .expect("connect should fail");

        assert!(matches!(err, SeedError::Connectivity(_)));
        assert!(err.to_string().starts_with("Cannot reach MongoDB: "));
    }
}
