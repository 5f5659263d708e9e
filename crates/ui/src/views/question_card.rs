use dioxus::prelude::*;

#[component]
pub fn QuestionCard(
    prompt: String,
    image_src: Option<String>,
    #[props(default)] large_image: bool,
    children: Element,
) -> Element {
    let image_class = if large_image { "visual large" } else { "visual" };
    rsx! {
        div { class: "question-card",
            if let Some(src) = image_src {
                img { class: "{image_class}", src: "{src}", alt: "Question visual" }
            }
            h2 { "{prompt}" }
            {children}
        }
    }
}
