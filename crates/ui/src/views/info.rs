use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

#[component]
pub fn OurStoryView() -> Element {
    rsx! {
        section { class: "page info",
            h1 { "Our Story" }
            p {
                "Welcome to PolarizEd. Our story is about walking beside the child, lighting the way, and growing together as a learning community."
            }
        }
    }
}

#[component]
pub fn TeamView() -> Element {
    rsx! {
        section { class: "page info",
            h1 { "Team" }
            p {
                "Meet the PolarizEd team! We are dedicated educators and innovators passionate about helping every child reach for the stars."
            }
        }
    }
}

#[component]
pub fn NotFoundView(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        section { class: "page not-found",
            h1 { "404" }
            p { "Oops! Page not found: /{path}" }
            Link { to: Route::Index {}, "Return to Home" }
        }
    }
}
