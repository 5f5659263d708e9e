use std::sync::Arc;

use dioxus::prelude::*;
use quiz_core::Catalog;
use quiz_core::model::Account;
use services::{AppServices, Authenticator, PersonalizedService, QuizController, Registrar};

pub trait UiApp: Send + Sync {
    fn authenticator(&self) -> Arc<dyn Authenticator>;
    fn registrar(&self) -> Arc<dyn Registrar>;
    fn personalized(&self) -> Arc<PersonalizedService>;
    fn catalog(&self) -> Arc<Catalog>;

    /// A controller owned by one mounted quiz view.
    fn quiz_controller(&self) -> QuizController;
}

impl UiApp for AppServices {
    fn authenticator(&self) -> Arc<dyn Authenticator> {
        AppServices::authenticator(self)
    }

    fn registrar(&self) -> Arc<dyn Registrar> {
        AppServices::registrar(self)
    }

    fn personalized(&self) -> Arc<PersonalizedService> {
        AppServices::personalized(self)
    }

    fn catalog(&self) -> Arc<Catalog> {
        AppServices::catalog(self)
    }

    fn quiz_controller(&self) -> QuizController {
        AppServices::quiz_controller(self)
    }
}

#[derive(Clone)]
pub struct AppContext {
    app: Arc<dyn UiApp>,
    authenticator: Arc<dyn Authenticator>,
    registrar: Arc<dyn Registrar>,
    personalized: Arc<PersonalizedService>,
    catalog: Arc<Catalog>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: Arc<dyn UiApp>) -> Self {
        Self {
            authenticator: app.authenticator(),
            registrar: app.registrar(),
            personalized: app.personalized(),
            catalog: app.catalog(),
            app,
        }
    }

    #[must_use]
    pub fn authenticator(&self) -> Arc<dyn Authenticator> {
        Arc::clone(&self.authenticator)
    }

    #[must_use]
    pub fn registrar(&self) -> Arc<dyn Registrar> {
        Arc::clone(&self.registrar)
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
    pub fn quiz_controller(&self) -> QuizController {
        self.app.quiz_controller()
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// The signed-in account, shared by every route.
///
/// Must be created inside a component, since it owns a signal.
#[derive(Clone, Copy, PartialEq)]
pub struct AuthState {
    account: Signal<Option<Account>>,
}

impl AuthState {
    #[must_use]
    pub fn new(initial: Option<Account>) -> Self {
        Self {
            account: Signal::new(initial),
        }
    }

    #[must_use]
    pub fn account(&self) -> Option<Account> {
        self.account.read().clone()
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.account.read().is_some()
    }

    pub fn sign_in(&mut self, account: Account) {
        self.account.set(Some(account));
    }

    pub fn sign_out(&mut self) {
        self.account.set(None);
    }
}
