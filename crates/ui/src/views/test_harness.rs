use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::model::{Account, Subject};
use quiz_core::time::fixed_clock;
use services::{AppServices, QuizTiming};
use storage::repository::Storage;

use crate::context::{AuthState, UiApp, build_app_context};
use crate::views::{
    AuthView, HomeView, IndexView, LearnView, NotFoundView, PersonalizedView, RequireAuth,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewKind {
    Index,
    Auth,
    Home,
    Learn(Subject),
    Personalized,
    Guarded,
    NotFound(&'static str),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<AppServices>,
    view: ViewKind,
    account: Option<Account>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(app));
    use_context_provider(|| AuthState::new(props.account.clone()));
    use_context_provider(|| props.view.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Index => rsx! { IndexView {} },
        ViewKind::Auth => rsx! { AuthView {} },
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Learn(subject) => rsx! { LearnView { subject } },
        ViewKind::Personalized => rsx! { PersonalizedView {} },
        ViewKind::Guarded => rsx! {
            RequireAuth {
                p { "members only" }
            }
        },
        ViewKind::NotFound(path) => rsx! {
            NotFoundView { segments: vec![path.to_string()] }
        },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub app: Arc<AppServices>,
    pub account: Option<Account>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// `signed_in` is a `(username, display name)` pair registered before rendering.
pub async fn setup_view_harness(view: ViewKind, signed_in: Option<(&str, &str)>) -> ViewHarness {
    setup_view_harness_with_storage(view, signed_in, Storage::in_memory()).await
}

pub async fn setup_view_harness_with_storage(
    view: ViewKind,
    signed_in: Option<(&str, &str)>,
    storage: Storage,
) -> ViewHarness {
    let app = Arc::new(
        AppServices::from_storage(storage, fixed_clock(), QuizTiming::default())
            .expect("app services"),
    );

    let account = match signed_in {
        Some((username, display_name)) => Some(
            app.registrar()
                .sign_up(username, display_name, "password")
                .await
                .expect("sign up"),
        ),
        None => None,
    };

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app: Arc::clone(&app),
            view,
            account: account.clone(),
        },
    );

    ViewHarness { dom, app, account }
}
