mod auth;
mod guard;
mod home;
mod index;
mod info;
mod learn;
mod personalized;
mod question_card;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use auth::AuthView;
pub use guard::RequireAuth;
pub use home::HomeView;
pub use index::IndexView;
pub use info::{NotFoundView, OurStoryView, TeamView};
pub use learn::LearnView;
pub use personalized::PersonalizedView;
pub use question_card::QuestionCard;
pub use state::{ViewError, ViewState, view_state_from_resource};
