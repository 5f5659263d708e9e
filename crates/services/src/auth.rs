use std::sync::Arc;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use async_trait::async_trait;
use quiz_core::model::{Account, Username, validate_secret};
use storage::repository::{AccountRepository, NewAccountRecord, StorageError};
use tracing::{info, warn};

use crate::Clock;
use crate::error::AuthError;

/// Password accepted by the demo accounts created with `ensure_demo_accounts`.
pub const DEMO_SECRET: &str = "password";

const DEMO_ACCOUNTS: [(&str, &str); 2] = [("betty", "Betty"), ("ethan", "Ethan")];

/// Verifies credentials and yields the signed-in account.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` for an unknown identifier or a wrong secret.
    async fn login(&self, identifier: &str, secret: &str) -> Result<Account, AuthError>;
}

/// Creates new accounts.
#[async_trait]
pub trait Registrar: Send + Sync {
    /// # Errors
    ///
    /// Returns `AuthError::Account` for an invalid username or short secret,
    /// and `AuthError::AlreadyRegistered` if the username is taken.
    async fn sign_up(
        &self,
        username: &str,
        display_name: &str,
        secret: &str,
    ) -> Result<Account, AuthError>;
}

/// Username and password accounts stored through an `AccountRepository`.
#[derive(Clone)]
pub struct LocalAuthenticator {
    clock: Clock,
    accounts: Arc<dyn AccountRepository>,
}

impl LocalAuthenticator {
    #[must_use]
    pub fn new(clock: Clock, accounts: Arc<dyn AccountRepository>) -> Self {
        Self { clock, accounts }
    }
}

#[async_trait]
impl Authenticator for LocalAuthenticator {
    async fn login(&self, identifier: &str, secret: &str) -> Result<Account, AuthError> {
        let Ok(username) = Username::parse(identifier) else {
            return Err(AuthError::InvalidCredentials);
        };
        let Some(record) = self.accounts.find_account(&username).await? else {
            warn!(%username, "login for unknown account");
            return Err(AuthError::InvalidCredentials);
        };
        if !verify_secret(secret, &record.password_hash)? {
            warn!(%username, "login with wrong password");
            return Err(AuthError::InvalidCredentials);
        }
        info!(%username, "signed in");
        Ok(record.account)
    }
}

#[async_trait]
impl Registrar for LocalAuthenticator {
    async fn sign_up(
        &self,
        username: &str,
        display_name: &str,
        secret: &str,
    ) -> Result<Account, AuthError> {
        let username = Username::parse(username)?;
        validate_secret(secret)?;
        let record = NewAccountRecord {
            username: username.clone(),
            display_name: display_name.trim().to_string(),
            password_hash: hash_secret(secret)?,
            created_at: self.clock.now(),
        };
        match self.accounts.insert_account(record).await {
            Ok(account) => {
                info!(%username, id = %account.id(), "account created");
                Ok(account)
            }
            Err(StorageError::Conflict) => Err(AuthError::AlreadyRegistered),
            Err(err) => Err(err.into()),
        }
    }
}

/// Create the demo accounts unless they already exist.
///
/// Returns how many accounts were created.
///
/// # Errors
///
/// Returns `AuthError` for any failure other than an existing account.
pub async fn ensure_demo_accounts(registrar: &dyn Registrar) -> Result<usize, AuthError> {
    let mut created = 0;
    for (username, display_name) in DEMO_ACCOUNTS {
        match registrar.sign_up(username, display_name, DEMO_SECRET).await {
            Ok(_) => created += 1,
            Err(AuthError::AlreadyRegistered) => {}
            Err(err) => return Err(err),
        }
    }
    Ok(created)
}

fn hash_secret(secret: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(secret.as_bytes(), &salt)
        .map_err(|e| AuthError::Hashing(e.to_string()))?
        .to_string();
    Ok(hash)
}

fn verify_secret(secret: &str, hash: &str) -> Result<bool, AuthError> {
    let parsed = PasswordHash::new(hash).map_err(|e| AuthError::Hashing(e.to_string()))?;
    Ok(Argon2::default()
        .verify_password(secret.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::time::fixed_clock;
    use storage::repository::InMemoryRepository;

    fn authenticator() -> LocalAuthenticator {
        LocalAuthenticator::new(fixed_clock(), Arc::new(InMemoryRepository::new()))
    }

    #[test]
    fn hash_roundtrip_rejects_other_secret() {
        let hash = hash_secret("hunter22").unwrap();
        assert!(verify_secret("hunter22", &hash).unwrap());
        assert!(!verify_secret("hunter23", &hash).unwrap());
    }

    #[tokio::test]
    async fn sign_up_then_login() {
        let auth = authenticator();
        let created = auth.sign_up("Betty", "Betty B", "secret1").await.unwrap();
        assert_eq!(created.username().as_str(), "betty");

        let account = auth.login("betty", "secret1").await.unwrap();
        assert_eq!(account.id(), created.id());
        assert_eq!(account.display_name(), "Betty B");
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_user_look_the_same() {
        let auth = authenticator();
        auth.sign_up("betty", "", "secret1").await.unwrap();

        let wrong = auth.login("betty", "nope123").await.unwrap_err();
        let unknown = auth.login("nobody", "secret1").await.unwrap_err();
        let malformed = auth.login("!", "secret1").await.unwrap_err();
        for err in [wrong, unknown, malformed] {
            assert!(matches!(err, AuthError::InvalidCredentials));
            assert_eq!(err.to_string(), "Invalid login credentials");
        }
    }

    #[tokio::test]
    async fn sign_up_rejects_short_secret_and_duplicates() {
        let auth = authenticator();
        let short = auth.sign_up("betty", "", "abc").await.unwrap_err();
        assert_eq!(short.to_string(), "Password should be at least 6 characters");

        auth.sign_up("betty", "", "secret1").await.unwrap();
        let dup = auth.sign_up("BETTY", "", "secret2").await.unwrap_err();
        assert!(matches!(dup, AuthError::AlreadyRegistered));
    }

    #[tokio::test]
    async fn demo_accounts_are_idempotent() {
        let auth = authenticator();
        assert_eq!(ensure_demo_accounts(&auth).await.unwrap(), 2);
        assert_eq!(ensure_demo_accounts(&auth).await.unwrap(), 0);
        auth.login("ethan", DEMO_SECRET).await.unwrap();
    }
}
