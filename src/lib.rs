pub mod config;
pub mod db;
pub mod error;
pub mod intake;
pub mod prompt;

pub use config::Config;
pub use db::{CredentialStore, MemoryStore, MongoStore, ProfessorCredential, RecordId};
pub use error::SeedError;
pub use intake::{Intake, IntakeState, Submission};
pub use prompt::{CredentialSource, TerminalPrompt};
