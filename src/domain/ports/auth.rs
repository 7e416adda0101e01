//! Auth session port.
//!
//! Authentication lives outside this crate. The core only needs to know
//! who is acting (to scope rows and name the protagonist) and how to end
//! the session.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::UserAccount;

/// Interface to the external auth collaborator.
#[async_trait]
pub trait AuthSession: Send + Sync {
    /// The currently authenticated user.
    async fn current_user(&self) -> DomainResult<UserAccount>;

    /// End the current session.
    async fn sign_out(&self) -> DomainResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::DomainError;
    use std::sync::atomic::{AtomicBool, Ordering};
    use uuid::Uuid;

    struct FakeSession {
        user: UserAccount,
        signed_out: AtomicBool,
    }

    #[async_trait]
    impl AuthSession for FakeSession {
        async fn current_user(&self) -> DomainResult<UserAccount> {
            if self.signed_out.load(Ordering::SeqCst) {
                return Err(DomainError::Auth("session ended".to_string()));
            }
            Ok(self.user.clone())
        }

        async fn sign_out(&self) -> DomainResult<()> {
            self.signed_out.store(true, Ordering::SeqCst);
            Ok(())
        }
    }

    #[tokio::test]
    async fn signed_out_session_yields_no_user() {
        let session = FakeSession {
            user: UserAccount::new(Uuid::new_v4(), "Carla"),
            signed_out: AtomicBool::new(false),
        };

        assert!(session.current_user().await.is_ok());
        session.sign_out().await.expect("sign out");
        assert!(matches!(
            session.current_user().await,
            Err(DomainError::Auth(_))
        ));
    }
}
