use std::sync::Arc;

use quiz_core::model::{Category, Subject, UserQuestion, UserQuestionDraft, Username, ValidatedUserQuestion};
use storage::repository::{InMemoryRepository, Storage, StorageError, UserQuestionRepository};

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_storage};

const BETTY: Option<(&str, &str)> = Some(("betty", "Betty"));

#[tokio::test(flavor = "current_thread")]
async fn index_view_offers_login_when_signed_out() {
    let mut harness = setup_view_harness(ViewKind::Index, None).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Welcome to PolarizEd!"), "missing welcome in {html}");
    assert!(html.contains("Login / Sign Up"), "missing login link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn auth_view_starts_in_login_mode() {
    let mut harness = setup_view_harness(ViewKind::Auth, None).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Sign In"), "missing title in {html}");
    assert!(html.contains("Please sign up"), "missing toggle in {html}");
    assert!(!html.contains("Name"), "display name field shown in login mode: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_greets_demo_learner() {
    let mut harness = setup_view_harness(ViewKind::Home, BETTY).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Welcome Betty!"), "missing heading in {html}");
    assert!(html.contains("Hi Betty, welcome back!"), "missing motivation in {html}");
    assert!(html.contains("Let’s Learn"), "missing learn button in {html}");
    assert!(html.contains("Log out"), "missing log out in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_greets_other_learners_by_name() {
    let mut harness = setup_view_harness(ViewKind::Home, Some(("maya", "Maya"))).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Welcome, Maya!"), "missing greeting in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn guarded_content_needs_an_account() {
    let mut harness = setup_view_harness(ViewKind::Guarded, None).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Redirecting"), "missing redirect in {html}");
    assert!(!html.contains("members only"), "guarded content leaked: {html}");

    let mut harness = setup_view_harness(ViewKind::Guarded, BETTY).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("members only"), "missing guarded content in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn learn_view_previews_example_question() {
    let mut harness = setup_view_harness(ViewKind::Learn(Subject::Math), BETTY).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("What is 5 + 2?"), "missing prompt in {html}");
    assert!(html.contains("← Back"), "missing back link in {html}");

    let mut harness = setup_view_harness(ViewKind::Learn(Subject::English), BETTY).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Spell the word in the picture."), "missing prompt in {html}");
    assert!(html.contains("(Hint: This is a cute animal!)"), "missing hint in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn personalized_view_lists_saved_questions() {
    let mut harness = setup_view_harness(ViewKind::Personalized, BETTY).await;
    let account = harness.account.clone().expect("signed in");
    harness
        .app
        .personalized()
        .append(
            account.username(),
            UserQuestionDraft {
                category: Category::Science,
                prompt: "What colour is a leaf?".to_string(),
                image: None,
                answer: "green".to_string(),
            },
        )
        .await
        .expect("append question");

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Your Personalized Questions"), "missing title in {html}");
    assert!(html.contains("What colour is a leaf?"), "missing question in {html}");
    assert!(html.contains("Select Questions to Practice"), "missing list title in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn personalized_view_shows_empty_state() {
    let mut harness = setup_view_harness(ViewKind::Personalized, BETTY).await;
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("No personalized questions yet."), "missing empty state in {html}");
}

struct FailingQuestionRepo;

#[async_trait::async_trait]
impl UserQuestionRepository for FailingQuestionRepo {
    async fn append_question(
        &self,
        _username: &Username,
        _question: ValidatedUserQuestion,
    ) -> Result<UserQuestion, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn list_questions(&self, _username: &Username) -> Result<Vec<UserQuestion>, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn personalized_view_renders_error_state() {
    let storage = Storage {
        accounts: Arc::new(InMemoryRepository::new()),
        user_questions: Arc::new(FailingQuestionRepo),
    };
    let mut harness = setup_view_harness_with_storage(ViewKind::Personalized, BETTY, storage).await;
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Something went wrong"), "missing error in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn not_found_view_names_the_path() {
    let mut harness = setup_view_harness(ViewKind::NotFound("nowhere"), None).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Page not found: /nowhere"), "missing path in {html}");
}
