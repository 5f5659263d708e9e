use std::sync::Arc;

use quiz_core::Catalog;
use storage::repository::Storage;
use tokio::runtime::Handle;

use crate::Clock;
use crate::auth::{Authenticator, LocalAuthenticator, Registrar};
use crate::error::AppServicesError;
use crate::personalized_service::PersonalizedService;
use crate::quiz::{QuizController, QuizTiming};

/// Assembles app-facing services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    runtime: Handle,
    catalog: Arc<Catalog>,
    timing: QuizTiming,
    auth: Arc<LocalAuthenticator>,
    personalized: Arc<PersonalizedService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails, the
    /// built-in catalogue is invalid, or no Tokio runtime is running.
    pub async fn new_sqlite(
        db_url: &str,
        clock: Clock,
        timing: QuizTiming,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Self::from_storage(storage, clock, timing)
    }

    /// Build services over an already opened storage backend.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::NoRuntime` outside a Tokio runtime and
    /// `AppServicesError::Catalog` if the built-in catalogue is invalid.
    pub fn from_storage(
        storage: Storage,
        clock: Clock,
        timing: QuizTiming,
    ) -> Result<Self, AppServicesError> {
        let runtime = Handle::try_current().map_err(|_| AppServicesError::NoRuntime)?;
        let catalog = Arc::new(Catalog::builtin()?);
        let auth = Arc::new(LocalAuthenticator::new(clock, Arc::clone(&storage.accounts)));
        let personalized = Arc::new(PersonalizedService::new(
            clock,
            Arc::clone(&storage.user_questions),
        ));

        Ok(Self {
            runtime,
            catalog,
            timing,
            auth,
            personalized,
        })
    }

    /// A fresh quiz controller; each signed-in view owns its own.
    #[must_use]
    pub fn quiz_controller(&self) -> QuizController {
        QuizController::new(Arc::clone(&self.catalog), self.timing, self.runtime.clone())
    }

    #[must_use]
    pub fn authenticator(&self) -> Arc<dyn Authenticator> {
        self.auth.clone()
    }

    #[must_use]
    pub fn registrar(&self) -> Arc<dyn Registrar> {
        self.auth.clone()
    }

    #[must_use]
    pub fn personalized(&self) -> Arc<PersonalizedService> {
        Arc::clone(&self.personalized)
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn timing(&self) -> QuizTiming {
        self.timing
    }
}
