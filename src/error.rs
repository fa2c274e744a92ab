use crate::intake::IntakeState;
use mongodb::error::Error as MongoError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum SeedError {
    #[error("Configuration error: {0}")]
    Config(#[from] figment::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] std::io::Error),

    #[error("Cannot reach MongoDB: {0}")]
    Connectivity(#[source] MongoError),

    #[error("MongoDB rejected the insert: {0}")]
    Insertion(#[source] MongoError),

    #[error("Inserted id is not an ObjectId: {0}")]
    UnexpectedId(String),

    #[error("Intake already finished ({0:?}); nothing was submitted")]
    AlreadyRan(IntakeState),
}

impl SeedError {
    /// True when the failure happened before anything could be written.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, SeedError::Connectivity(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn display_is_the_message_not_the_variant() {
        let err = SeedError::Connectivity(MongoError::from(io::Error::new(
            io::ErrorKind::ConnectionRefused,
            "connection refused",
        )));

        let shown = err.to_string();
        assert!(shown.starts_with("Cannot reach MongoDB: "));
        assert!(shown.contains("connection refused"));
        assert!(!shown.contains("Connectivity("));
        assert!(err.is_connectivity());
    }

    #[test]
    fn already_ran_names_the_state() {
        let err = SeedError::AlreadyRan(IntakeState::Submitted);
        assert_eq!(
            err.to_string(),
            "Intake already finished (Submitted); nothing was submitted"
        );
        assert!(!err.is_connectivity());
    }
}
