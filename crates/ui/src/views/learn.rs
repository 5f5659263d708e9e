use dioxus::prelude::*;
use dioxus_router::Link;
use quiz_core::model::{Feedback, Question, Subject};

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::illustration_src;
use crate::views::QuestionCard;

/// One example question per subject, answered without keeping score.
#[component]
pub fn LearnView(subject: Subject) -> Element {
    let ctx = use_context::<AppContext>();
    let example = ctx.catalog().example(subject).cloned();

    let content = match example {
        Some(question) => rsx! {
            ExampleQuestion { key: "{subject.slug()}", question }
        },
        None => rsx! {
            p { class: "empty", "No subject selected." }
        },
    };

    rsx! {
        section { class: "page learn",
            Link { class: "back", to: Route::Home {}, "← Back" }
            h1 { "{subject}" }
            {content}
        }
    }
}

#[component]
fn ExampleQuestion(question: Question) -> Element {
    let mut verdict = use_signal(|| None::<Feedback>);
    let mut attempt = use_signal(String::new);
    let image_src = question.illustration().map(illustration_src);

    let input = match question.choices() {
        Some(choices) => rsx! {
            div { class: "choices",
                for choice in choices.iter().cloned() {
                    PreviewChoice { key: "{choice}", question: question.clone(), choice, verdict }
                }
            }
        },
        None => {
            let question = question.clone();
            rsx! {
                form {
                    class: "typed-answer",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        verdict.set(Some(question.check(&attempt())));
                    },
                    input {
                        placeholder: "Type your answer...",
                        maxlength: "3",
                        value: "{attempt}",
                        oninput: move |evt: FormEvent| attempt.set(evt.value()),
                    }
                    button { r#type: "submit", "Check" }
                }
            }
        }
    };

    let message = verdict().map(|feedback| match feedback {
        Feedback::Correct => "Correct!",
        _ => "Try again!",
    });

    rsx! {
        QuestionCard {
            prompt: question.prompt().to_string(),
            image_src,
            large_image: question.choices().is_none(),
            {input}
            if let Some(hint) = question.hint() {
                p { class: "hint", "(Hint: {hint})" }
            }
            if let Some(message) = message {
                p { class: "verdict", "{message}" }
            }
        }
    }
}

#[component]
fn PreviewChoice(question: Question, choice: String, verdict: Signal<Option<Feedback>>) -> Element {
    let mut verdict = verdict;
    let label = choice.clone();
    rsx! {
        button {
            class: "choice",
            onclick: move |_| verdict.set(Some(question.check(&choice))),
            "{label}"
        }
    }
}
