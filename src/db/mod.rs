//! Storage for professor credentials.
//!
//! Layout:
//! - `models.rs`: the record written to the `usuarios` collection
//! - `mongo.rs`: `CredentialStore` backed by the MongoDB driver
//! - `memory.rs`: `CredentialStore` kept in process memory, used by tests

pub mod memory;
pub mod models;
pub mod mongo;

pub use memory::MemoryStore;
pub use models::ProfessorCredential;
pub use mongo::MongoStore;

use crate::error::SeedError;
use std::future::Future;

/// Identifier the store assigns to a newly inserted record.
pub type RecordId = bson::oid::ObjectId;

/// Port for persisting a single credential record.
pub trait CredentialStore {
    /// Insert one record and return the identifier assigned to it.
    fn insert_record(
        &self,
        record: ProfessorCredential,
    ) -> impl Future<Output = Result<RecordId, SeedError>> + Send;
}

impl<S: CredentialStore> CredentialStore for &S {
    fn insert_record(
        &self,
        record: ProfessorCredential,
    ) -> impl Future<Output = Result<RecordId, SeedError>> + Send {
        (**self).insert_record(record)
    }
}
