use crate::db::models::ProfessorCredential;
use crate::db::{CredentialStore, RecordId};
use crate::error::SeedError;
use std::io;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// In-process stand-in for the `usuarios` collection.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<(RecordId, ProfessorCredential)>>,
    unreachable: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every insert fails with a connection-refused `Connectivity` error.
    pub fn unreachable(reason: impl Into<String>) -> Self {
        Self {
            records: Mutex::default(),
            unreachable: Some(reason.into()),
        }
    }

    /// Snapshot of stored records in insertion order.
    pub fn records(&self) -> Vec<(RecordId, ProfessorCredential)> {
        self.lock().clone()
    }

    pub fn get(&self, id: &RecordId) -> Option<ProfessorCredential> {
        self.lock()
            .iter()
            .find(|(stored, _)| stored == id)
            .map(|(_, record)| record.clone())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, Vec<(RecordId, ProfessorCredential)>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CredentialStore for MemoryStore {
    async fn insert_record(&self, record: ProfessorCredential) -> Result<RecordId, SeedError> {
        if let Some(reason) = &self.unreachable {
            let refused = io::Error::new(io::ErrorKind::ConnectionRefused, reason.clone());
            return Err(SeedError::Connectivity(refused.into()));
        }
        let id = RecordId::new();
        self.lock().push((id, record));
        Ok(id)
    }
}
