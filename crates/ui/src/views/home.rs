use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use quiz_core::greeting::welcome_message;
use quiz_core::model::Subject;

use crate::context::{AppContext, AuthState};
use crate::routes::Route;
use crate::views::QuestionCard;
use crate::vm::{AnswerInputVm, ChoiceVm, QuizCardVm, QuizIntent, QuizScreen, apply_intent, quiz_screen};

const REWARD_VIDEO: &str = "https://www.youtube.com/embed/z3-Oy8dpV-A?autoplay=1&controls=1";

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut auth = use_context::<AuthState>();
    let navigator = use_navigator();

    // One controller per mounted view; dropping it cancels pending timers.
    let quiz = use_hook(|| Rc::new(ctx.quiz_controller()));
    let mut snapshot = use_signal(|| quiz.snapshot());
    let mut answer = use_signal(String::new);
    let mut show_subjects = use_signal(|| false);

    // Timer-driven transitions arrive through the controller's channel.
    use_future({
        let quiz = Rc::clone(&quiz);
        move || {
            let mut updates = quiz.subscribe();
            async move {
                let mut snapshot = snapshot;
                while updates.changed().await.is_ok() {
                    let next = updates.borrow_and_update().clone();
                    snapshot.set(next);
                }
            }
        }
    });

    let dispatch = use_callback({
        let quiz = Rc::clone(&quiz);
        move |intent: QuizIntent| {
            if intent.clears_input() {
                answer.set(String::new());
            }
            let next = apply_intent(&quiz, intent).unwrap_or_else(|_| quiz.snapshot());
            snapshot.set(next);
        }
    });

    let Some(account) = auth.account() else {
        return rsx! {};
    };
    let display_name = account.display_name().to_string();
    let welcome = welcome_message(&account);
    let screen = quiz_screen(&snapshot.read());

    let body = match screen {
        QuizScreen::Picker { completed } => rsx! {
            h1 { "Welcome {display_name}!" }
            p { class: "welcome", "{welcome}" }
            if let Some(done) = completed {
                p { class: "notice", "{done}" }
            }
            button {
                class: "button learn",
                onclick: move |_| show_subjects.set(true),
                "Let’s Learn"
            }
            if show_subjects() {
                div { class: "subjects",
                    h2 { "What do you want to learn today?" }
                    for subject in Subject::ALL {
                        SubjectRow { key: "{subject.slug()}", subject, dispatch }
                    }
                    Link { class: "subject personalized", to: Route::Personalized {}, "Personalized" }
                }
            }
        },
        QuizScreen::Question(card) => rsx! {
            QuizCard { card, answer, dispatch }
        },
        QuizScreen::Reward => rsx! {
            RewardPanel { dispatch }
        },
    };

    rsx! {
        section { class: "page home",
            div { class: "top-actions",
                button {
                    class: "logout",
                    onclick: move |_| {
                        dispatch.call(QuizIntent::Quit);
                        auth.sign_out();
                        navigator.replace(Route::Index {});
                    },
                    "Log out"
                }
            }
            div { class: "home-panel", {body} }
        }
    }
}

#[component]
fn SubjectRow(subject: Subject, dispatch: Callback<QuizIntent>) -> Element {
    rsx! {
        div { class: "subject-row",
            button {
                class: "subject {subject.slug()}",
                onclick: move |_| dispatch.call(QuizIntent::Choose(subject)),
                "{subject}"
            }
            Link { class: "preview", to: Route::Learn { subject }, "Preview" }
        }
    }
}

#[component]
fn QuizCard(card: QuizCardVm, answer: Signal<String>, dispatch: Callback<QuizIntent>) -> Element {
    let mut answer = answer;
    let locked = card.locked;

    let input = match card.input.clone() {
        AnswerInputVm::Choices(choices) => rsx! {
            div { class: "choices",
                for choice in choices {
                    ChoiceButton { key: "{choice.label}", choice: choice.clone(), locked, dispatch }
                }
            }
        },
        AnswerInputVm::Text { hint } => rsx! {
            form {
                class: "typed-answer",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    dispatch.call(QuizIntent::Submit(answer()));
                },
                input {
                    placeholder: "Type your answer...",
                    maxlength: "8",
                    value: "{answer}",
                    disabled: locked,
                    oninput: move |evt: FormEvent| answer.set(evt.value()),
                }
                if let Some(hint) = hint {
                    p { class: "hint", "(Hint: {hint})" }
                }
                button { r#type: "submit", disabled: locked, "Submit" }
            }
        },
    };

    rsx! {
        p { class: "progress", "{card.subject_label} · {card.progress_label}" }
        QuestionCard {
            prompt: card.prompt.clone(),
            image_src: card.image_src.clone(),
            large_image: matches!(card.input, AnswerInputVm::Text { .. }),
            {input}
            if let Some(feedback) = card.feedback {
                p { class: "{feedback.class}", "{feedback.message}" }
            }
            div { class: "actions",
                if card.can_retry {
                    button {
                        class: "retry",
                        onclick: move |_| dispatch.call(QuizIntent::Retry),
                        "Retry"
                    }
                }
                button {
                    class: "quit",
                    onclick: move |_| dispatch.call(QuizIntent::Quit),
                    "Quit"
                }
            }
        }
    }
}

#[component]
fn ChoiceButton(choice: ChoiceVm, locked: bool, dispatch: Callback<QuizIntent>) -> Element {
    let class = if choice.highlighted { "choice highlighted" } else { "choice" };
    let label = choice.label.clone();
    rsx! {
        button {
            class: "{class}",
            disabled: locked,
            onclick: move |_| dispatch.call(QuizIntent::Submit(label.clone())),
            "{choice.label}"
        }
    }
}

#[component]
fn RewardPanel(dispatch: Callback<QuizIntent>) -> Element {
    rsx! {
        div { class: "reward",
            p { class: "reward-title", "Great job! Enjoy a break with Cocomelon!" }
            iframe {
                width: "360",
                height: "203",
                src: REWARD_VIDEO,
                title: "Cocomelon Video",
                allow: "autoplay; encrypted-media",
            }
            button {
                class: "continue",
                onclick: move |_| dispatch.call(QuizIntent::Continue),
                "Continue"
            }
            button {
                class: "quit",
                onclick: move |_| dispatch.call(QuizIntent::Quit),
                "Quit"
            }
        }
    }
}
