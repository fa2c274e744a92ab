use crate::error::SeedError;
use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use url::Url;

/// Environment prefix for overrides, e.g. `PROFESSOR_SEED_MONGODB_URI`.
pub const ENV_PREFIX: &str = "PROFESSOR_SEED_";

pub const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017/?retryWrites=true&w=majority";
pub const DEFAULT_DATABASE: &str = "PROFESSORES";
pub const DEFAULT_COLLECTION: &str = "usuarios";

#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub mongodb_uri: String,
    pub database: String,
    pub collection: String,
    pub loglevel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mongodb_uri: DEFAULT_MONGODB_URI.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            loglevel: "info".to_string(),
        }
    }
}

impl Config {
    /// Defaults overlaid with `PROFESSOR_SEED_*` environment variables.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Serialized::defaults(env_overrides()))
    }

    pub fn load() -> Result<Self, SeedError> {
        Ok(Self::figment().extract()?)
    }

    /// Connection URI with userinfo and query options stripped, safe to log.
    pub fn redacted_uri(&self) -> String {
        match Url::parse(&self.mongodb_uri) {
            Ok(mut url) => {
                let _ = url.set_username("");
                let _ = url.set_password(None);
                url.set_query(None);
                url.to_string()
            }
            Err(_) => "<unparseable uri>".to_string(),
        }
    }
}

/// `PROFESSOR_SEED_*` variables keyed by lowercased suffix. Values stay
/// strings: a database named `2024` must not turn into an integer.
fn env_overrides() -> BTreeMap<String, String> {
    Env::prefixed(ENV_PREFIX)
        .iter()
        .map(|(key, value)| (key.as_str().to_string(), value))
        .collect()
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("mongodb_uri", &self.redacted_uri())
            .field("database", &self.database)
            .field("collection", &self.collection)
            .field("loglevel", &self.loglevel)
            .finish()
    }
}
