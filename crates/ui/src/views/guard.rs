use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AuthState;
use crate::routes::Route;

/// Renders `children` only while someone is signed in; otherwise sends the
/// visitor back to the landing page.
#[component]
pub fn RequireAuth(children: Element) -> Element {
    let auth = use_context::<AuthState>();
    let navigator = use_navigator();

    use_effect(move || {
        if !auth.is_signed_in() {
            navigator.replace(Route::Index {});
        }
    });

    if !auth.is_signed_in() {
        return rsx! {
            p { class: "redirect", "Redirecting..." }
        };
    }

    rsx! { {children} }
}
