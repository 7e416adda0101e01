//! Authenticated user account.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The identity the auth collaborator exposes to the core.
///
/// The core never authenticates anyone; it only scopes reads and writes by
/// `id` and uses `name` as the protagonist of generated chapters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
}

impl UserAccount {
    pub fn new(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}
