use crate::db::{CredentialStore, ProfessorCredential, RecordId};
use crate::error::SeedError;
use crate::prompt::CredentialSource;
use tracing::{debug, info};

/// Progress of a single intake run. Both `Submitted` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeState {
    Idle,
    Submitted,
    Failed,
}

/// Result of a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    pub id: RecordId,
}

impl Submission {
    /// Line shown to the operator once the record is stored.
    pub fn confirmation(&self) -> String {
        format!("✅ Professor adicionado com _id: {}", self.id.to_hex())
    }
}

/// Reads one credential pair and submits it to the store exactly once.
pub struct Intake<S> {
    store: S,
    state: IntakeState,
}

impl<S: CredentialStore> Intake<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            state: IntakeState::Idle,
        }
    }

    pub fn state(&self) -> IntakeState {
        self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Submit one record. A run that already reached a terminal state
    /// refuses to run again and leaves the store untouched.
    pub async fn run<C: CredentialSource>(
        &mut self,
        source: &mut C,
    ) -> Result<Submission, SeedError> {
        if self.state != IntakeState::Idle {
            return Err(SeedError::AlreadyRan(self.state));
        }

        match self.submit(source).await {
            Ok(id) => {
                self.transition(IntakeState::Submitted);
                info!(id = %id, "professor credential stored");
                Ok(Submission { id })
            }
            Err(e) => {
                self.transition(IntakeState::Failed);
                Err(e)
            }
        }
    }

    async fn submit<C: CredentialSource>(&self, source: &mut C) -> Result<RecordId, SeedError> {
        let email = source.email()?;
        let password = source.password()?;
        let record = ProfessorCredential::new(email, password);
        debug!(?record, "submitting record");
        self.store.insert_record(record).await
    }

    fn transition(&mut self, next: IntakeState) {
        debug!(from = ?self.state, to = ?next, "intake state change");
        self.state = next;
    }
}
