#![forbid(unsafe_code)]

pub mod app_services;
pub mod auth;
pub mod error;
pub mod personalized_service;
pub mod quiz;

pub use quiz_core::Clock;
pub use quiz_core::quiz::QuizTiming;

pub use app_services::AppServices;
pub use auth::{Authenticator, LocalAuthenticator, Registrar, ensure_demo_accounts};
pub use error::{AppServicesError, AuthError, PersonalizedError};
pub use personalized_service::PersonalizedService;
pub use quiz::{QuizController, QuizSnapshot};
