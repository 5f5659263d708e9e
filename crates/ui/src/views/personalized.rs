use std::path::Path;

use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use quiz_core::model::{Category, Feedback, ImageData, UserQuestionDraft, UserQuestionId};
use quiz_core::practice::{PracticePhase, PracticeSession};
use services::PersonalizedError;
use services::personalized_service::image_data_from_path;

use crate::context::{AppContext, AuthState};
use crate::routes::Route;
use crate::views::{QuestionCard, ViewError, ViewState, view_state_from_resource};
use crate::vm::{
    PracticeIntent, UserQuestionRowVm, apply_practice_intent, map_user_question_rows,
    toggle_selection,
};

const SAVED: &str = "Question saved!";

fn personalized_message(err: &PersonalizedError) -> String {
    match err {
        PersonalizedError::Question(_)
        | PersonalizedError::Practice(_)
        | PersonalizedError::UnsupportedImage(_)
        | PersonalizedError::ImageRead(_) => err.to_string(),
        _ => ViewError::Unknown.message().to_string(),
    }
}

#[component]
pub fn PersonalizedView() -> Element {
    let ctx = use_context::<AppContext>();
    let auth = use_context::<AuthState>();
    let personalized = ctx.personalized();
    let username = auth.account().map(|account| account.username().clone());

    let mut category = use_signal(Category::default);
    let mut prompt = use_signal(String::new);
    let mut answer = use_signal(String::new);
    let image = use_signal(|| None::<ImageData>);
    let mut image_path = use_signal(String::new);
    let message = use_signal(|| None::<String>);
    let selected = use_signal(Vec::<UserQuestionId>::new);
    let practice = use_signal(|| None::<PracticeSession>);
    let attempt = use_signal(String::new);

    let resource = {
        let personalized = personalized.clone();
        let username = username.clone();
        use_resource(move || {
            let personalized = personalized.clone();
            let username = username.clone();
            async move {
                let Some(username) = username else {
                    return Err(ViewError::SignedOut);
                };
                personalized
                    .list(&username)
                    .await
                    .map_err(|_| ViewError::Unknown)
            }
        })
    };

    let on_add = {
        let personalized = personalized.clone();
        let username = username.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let Some(username) = username.clone() else {
                return;
            };
            let personalized = personalized.clone();
            let draft = UserQuestionDraft {
                category: category(),
                prompt: prompt(),
                image: image(),
                answer: answer(),
            };

            let mut category = category;
            let mut prompt = prompt;
            let mut answer = answer;
            let mut image = image;
            let mut image_path = image_path;
            let mut message = message;
            let mut resource = resource;
            spawn(async move {
                match personalized.append(&username, draft).await {
                    Ok(_) => {
                        category.set(Category::default());
                        prompt.set(String::new());
                        answer.set(String::new());
                        image.set(None);
                        image_path.set(String::new());
                        message.set(Some(SAVED.to_string()));
                        resource.restart();
                    }
                    Err(err) => message.set(Some(personalized_message(&err))),
                }
            });
        }
    };

    let on_attach = move |_: MouseEvent| {
        let path = image_path();
        let mut image = image;
        let mut message = message;
        spawn(async move {
            match image_data_from_path(Path::new(path.trim())).await {
                Ok(data) => {
                    image.set(Some(data));
                    message.set(None);
                }
                Err(err) => message.set(Some(personalized_message(&err))),
            }
        });
    };

    let on_practice = {
        let personalized = personalized.clone();
        let username = username.clone();
        move |_: MouseEvent| {
            let Some(username) = username.clone() else {
                return;
            };
            let personalized = personalized.clone();
            let ids = selected();
            let mut practice = practice;
            let mut attempt = attempt;
            let mut message = message;
            spawn(async move {
                match personalized.start_practice(&username, &ids).await {
                    Ok(session) => {
                        attempt.set(String::new());
                        message.set(None);
                        practice.set(Some(session));
                    }
                    Err(err) => message.set(Some(personalized_message(&err))),
                }
            });
        }
    };

    if practice.read().is_some() {
        return rsx! {
            section { class: "page personalized",
                PageHeader {}
                PracticePanel { practice, attempt }
            }
        };
    }

    let list = match view_state_from_resource(&resource) {
        ViewState::Loading => rsx! {
            p { "Loading..." }
        },
        ViewState::Error(err) => rsx! {
            p { class: "error", "{err.message()}" }
        },
        ViewState::Ready(questions) => {
            let rows = map_user_question_rows(&questions, &selected.read());
            if rows.is_empty() {
                rsx! {
                    p { class: "empty", "No personalized questions yet." }
                }
            } else {
                rsx! {
                    ul { class: "question-list",
                        for row in rows {
                            QuestionRow { key: "{row.id}", row: row.clone(), selected }
                        }
                    }
                }
            }
        }
    };
    let image_src = image.read().as_ref().map(|img| img.as_str().to_string());
    let nothing_selected = selected.read().is_empty();

    rsx! {
        section { class: "page personalized",
            PageHeader {}
            form { class: "author-form", onsubmit: on_add,
                label { r#for: "pq-category", "Subject" }
                select {
                    id: "pq-category",
                    value: "{category}",
                    onchange: move |evt: FormEvent| {
                        if let Ok(parsed) = evt.value().parse::<Category>() {
                            category.set(parsed);
                        }
                    },
                    for option_category in Category::ALL {
                        option { key: "{option_category}", value: "{option_category}", "{option_category}" }
                    }
                }
                label { r#for: "pq-prompt", "Question" }
                input {
                    id: "pq-prompt",
                    value: "{prompt}",
                    oninput: move |evt: FormEvent| prompt.set(evt.value()),
                }
                label { r#for: "pq-image", "Image" }
                div { class: "image-picker",
                    input {
                        id: "pq-image",
                        placeholder: "Path to a png, jpg, gif, webp or svg file",
                        value: "{image_path}",
                        oninput: move |evt: FormEvent| image_path.set(evt.value()),
                    }
                    button { r#type: "button", onclick: on_attach, "Attach" }
                }
                if let Some(src) = image_src {
                    img { class: "upload-preview", src: "{src}", alt: "Question uploaded" }
                }
                label { r#for: "pq-answer", "Answer" }
                input {
                    id: "pq-answer",
                    value: "{answer}",
                    oninput: move |evt: FormEvent| answer.set(evt.value()),
                }
                button { r#type: "submit", "Submit" }
                if let Some(text) = message() {
                    p { class: "message", "{text}" }
                }
            }
            div { class: "selection",
                h2 { "Select Questions to Practice" }
                {list}
                button {
                    class: "continue",
                    disabled: nothing_selected,
                    onclick: on_practice,
                    "Continue"
                }
            }
        }
    }
}

#[component]
fn PageHeader() -> Element {
    rsx! {
        header { class: "page-header",
            h1 { "Your Personalized Questions" }
            Link { class: "back", to: Route::Home {}, "← Home" }
        }
    }
}

#[component]
fn QuestionRow(row: UserQuestionRowVm, selected: Signal<Vec<UserQuestionId>>) -> Element {
    let mut selected = selected;
    let id = row.id;
    let class = if row.selected {
        "question-row selected"
    } else {
        "question-row"
    };

    rsx! {
        li {
            class: "{class}",
            onclick: move |_| toggle_selection(&mut selected.write(), id),
            input {
                r#type: "checkbox",
                checked: row.selected,
                onclick: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    toggle_selection(&mut selected.write(), id);
                },
            }
            div { class: "thumb",
                if let Some(src) = row.image_src.clone() {
                    img { src: "{src}", alt: "User visual" }
                } else {
                    span { "No image" }
                }
            }
            div { class: "details",
                span { class: "category", "{row.category}" }
                p { class: "prompt", "{row.prompt}" }
                p { class: "answer", "Answer: {row.answer}" }
                p { class: "added", "Added {row.added_on}" }
            }
        }
    }
}

#[component]
fn PracticePanel(
    practice: Signal<Option<PracticeSession>>,
    attempt: Signal<String>,
) -> Element {
    let navigator = use_navigator();
    let mut practice = practice;
    let mut attempt = attempt;

    let Some(session) = practice.read().clone() else {
        return rsx! {};
    };
    let Some(question) = session.current().cloned() else {
        return rsx! {};
    };
    let (position, total) = session.position();
    let verdict = match session.phase() {
        PracticePhase::Attempted { correct } => Some(correct),
        PracticePhase::Prompt | PracticePhase::Finished => None,
    };
    let attempted = verdict.is_some();
    let message = verdict.and_then(|correct| Feedback::from_match(correct).message());
    let message_class = if verdict == Some(true) {
        "feedback correct"
    } else {
        "feedback wrong"
    };

    rsx! {
        div { class: "practice",
            span { class: "category", "{question.category()}" }
            QuestionCard {
                prompt: question.prompt().to_string(),
                image_src: question.image().map(|img| img.as_str().to_string()),
                form {
                    class: "typed-answer",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        let text = attempt();
                        if let Some(session) = practice.write().as_mut() {
                            apply_practice_intent(session, PracticeIntent::Submit(text));
                        }
                    },
                    input {
                        placeholder: "Your answer",
                        required: true,
                        value: "{attempt}",
                        disabled: attempted,
                        oninput: move |evt: FormEvent| attempt.set(evt.value()),
                    }
                    button { r#type: "submit", disabled: attempted, "Submit" }
                }
                if let Some(message) = message {
                    p { class: "{message_class}", "{message}" }
                }
                if attempted {
                    div { class: "actions",
                        button {
                            class: "retry",
                            onclick: move |_| {
                                attempt.set(String::new());
                                if let Some(session) = practice.write().as_mut() {
                                    apply_practice_intent(session, PracticeIntent::Retry);
                                }
                            },
                            "Retry"
                        }
                        button {
                            class: "next",
                            onclick: move |_| {
                                attempt.set(String::new());
                                let phase = practice
                                    .write()
                                    .as_mut()
                                    .and_then(|s| apply_practice_intent(s, PracticeIntent::Next));
                                if phase == Some(PracticePhase::Finished) {
                                    practice.set(None);
                                    navigator.push(Route::Home {});
                                }
                            },
                            "Next"
                        }
                    }
                }
            }
            p { class: "progress", "Question {position} of {total}" }
        }
    }
}
