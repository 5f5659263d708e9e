use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AuthState;
use crate::routes::Route;

#[component]
pub fn IndexView() -> Element {
    let auth = use_context::<AuthState>();

    rsx! {
        section { class: "page index",
            h2 { "Welcome to PolarizEd!" }
            if auth.is_signed_in() {
                Link { class: "button primary", to: Route::Home {}, "Continue learning" }
            } else {
                Link { class: "button primary", to: Route::Auth {}, "Login / Sign Up" }
            }
        }
    }
}
