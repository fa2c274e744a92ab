use serde::{Deserialize, Serialize};
use std::fmt;

/// A professor login as stored in `PROFESSORES.usuarios`.
///
/// The password is kept in plain text because the backend login route
/// compares `senha` verbatim. Its wire name stays `senha` for the same reason.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfessorCredential {
    pub email: String,
    #[serde(rename = "senha")]
    pub password: String,
}

impl ProfessorCredential {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for ProfessorCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfessorCredential")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
