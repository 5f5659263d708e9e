use dioxus::prelude::*;
use dioxus_router::Router;

use crate::context::AuthState;
use crate::routes::Route;

#[component]
pub fn App() -> Element {
    // Nobody is signed in when the window opens.
    use_context_provider(|| AuthState::new(None));

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "PolarizEd" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
