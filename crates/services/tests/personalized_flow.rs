use std::sync::Arc;

use quiz_core::model::{Category, UserQuestionDraft, UserQuestionError, Username};
use quiz_core::practice::{PracticeError, PracticePhase};
use quiz_core::time::fixed_clock;
use services::personalized_service::image_data_from_bytes;
use services::{AppServices, PersonalizedError, PersonalizedService, QuizTiming};
use storage::repository::{InMemoryRepository, Storage};

fn draft(category: Category, prompt: &str, answer: &str) -> UserQuestionDraft {
    UserQuestionDraft {
        category,
        prompt: prompt.to_string(),
        image: None,
        answer: answer.to_string(),
    }
}

fn service() -> PersonalizedService {
    PersonalizedService::new(fixed_clock(), Arc::new(InMemoryRepository::new()))
}

#[tokio::test]
async fn authoring_lists_most_recent_first_per_learner() {
    let svc = service();
    let betty = Username::parse("betty").unwrap();
    let ethan = Username::parse("ethan").unwrap();

    let first = svc
        .append(&betty, draft(Category::Math, " 1 + 1? ", " 2 "))
        .await
        .unwrap();
    let mut with_image = draft(Category::Other, "What is this?", "dot");
    with_image.image = Some(image_data_from_bytes("png", b"\x89PNG").unwrap());
    let second = svc.append(&betty, with_image).await.unwrap();
    svc.append(&ethan, draft(Category::English, "Opposite of hot?", "cold"))
        .await
        .unwrap();

    assert_eq!(first.prompt(), "1 + 1?");
    assert_eq!(first.answer(), "2");
    assert!(second.id() > first.id());

    let listed = svc.list(&betty).await.unwrap();
    let ids: Vec<_> = listed.iter().map(|q| q.id()).collect();
    assert_eq!(ids, vec![second.id(), first.id()]);
    assert!(listed[0].image().is_some());
}

#[tokio::test]
async fn blank_fields_are_rejected_before_storage() {
    let svc = service();
    let betty = Username::parse("betty").unwrap();

    let err = svc
        .append(&betty, draft(Category::Science, "  ", "leaf"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        PersonalizedError::Question(UserQuestionError::MissingFields)
    ));
    assert_eq!(err.to_string(), "Please fill in all fields.");
    assert!(svc.list(&betty).await.unwrap().is_empty());
}

#[tokio::test]
async fn practice_walks_selected_questions_in_list_order() {
    let svc = service();
    let betty = Username::parse("betty").unwrap();
    let a = svc.append(&betty, draft(Category::Math, "2 x 2?", "4")).await.unwrap();
    let b = svc.append(&betty, draft(Category::Math, "3 x 3?", "9")).await.unwrap();
    svc.append(&betty, draft(Category::Math, "unused", "x")).await.unwrap();

    let mut practice = svc.start_practice(&betty, &[a.id(), b.id()]).await.unwrap();
    assert_eq!(practice.position(), (1, 2));
    // Most recent first, so `b` comes before `a`.
    assert_eq!(practice.current().unwrap().id(), b.id());

    assert!(!practice.submit("8").unwrap());
    practice.retry().unwrap();
    assert!(practice.submit(" 9 ").unwrap());
    assert_eq!(practice.next().unwrap(), PracticePhase::Prompt);
    assert_eq!(practice.current().unwrap().id(), a.id());

    assert!(practice.submit("4").unwrap());
    assert_eq!(practice.next().unwrap(), PracticePhase::Finished);
    assert!(practice.is_finished());
}

#[tokio::test]
async fn empty_selection_cannot_start_practice() {
    let svc = service();
    let betty = Username::parse("betty").unwrap();
    let err = svc.start_practice(&betty, &[]).await.unwrap_err();
    assert!(matches!(
        err,
        PersonalizedError::Practice(PracticeError::EmptySelection)
    ));
}

#[tokio::test]
async fn app_services_share_one_storage() {
    let app = AppServices::from_storage(Storage::in_memory(), fixed_clock(), QuizTiming::default())
        .unwrap();
    let account = app
        .registrar()
        .sign_up("betty", "Betty", "secret1")
        .await
        .unwrap();
    let signed_in = app.authenticator().login("betty", "secret1").await.unwrap();
    assert_eq!(signed_in.id(), account.id());

    let personalized = app.personalized();
    personalized
        .append(account.username(), draft(Category::Science, "Sky colour?", "blue"))
        .await
        .unwrap();
    assert_eq!(personalized.list(account.username()).await.unwrap().len(), 1);

    let quiz = app.quiz_controller();
    assert!(quiz.snapshot().is_browsing());
    assert_eq!(app.catalog().sequence(quiz_core::model::Subject::Math).len(), 2);
}
