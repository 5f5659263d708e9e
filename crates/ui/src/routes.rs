use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};
use quiz_core::model::Subject;

use crate::views::{
    AuthView, HomeView, IndexView, LearnView, NotFoundView, OurStoryView, PersonalizedView,
    RequireAuth, TeamView,
};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(PublicLayout)]
        #[route("/", IndexView)] Index {},
        #[route("/our-story", OurStoryView)] OurStory {},
        #[route("/team", TeamView)] Team {},
        #[route("/auth", AuthView)] Auth {},
    #[end_layout]
    #[layout(AuthGuard)]
        #[route("/home", HomeView)] Home {},
        #[route("/learn/:subject", LearnView)] Learn { subject: Subject },
        #[route("/personalized", PersonalizedView)] Personalized {},
    #[end_layout]
    #[route("/:..segments", NotFoundView)] NotFound { segments: Vec<String> },
}

#[component]
fn PublicLayout() -> Element {
    rsx! {
        div { class: "app",
            TitleBar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn TitleBar() -> Element {
    rsx! {
        header { class: "title-bar",
            Link { class: "brand", to: Route::Index {}, "PolarizEd" }
            nav {
                Link { to: Route::OurStory {}, "Our Story" }
                Link { to: Route::Team {}, "Team" }
            }
        }
    }
}

#[component]
fn AuthGuard() -> Element {
    rsx! {
        RequireAuth {
            main { class: "content signed-in",
                Outlet::<Route> {}
            }
        }
    }
}
