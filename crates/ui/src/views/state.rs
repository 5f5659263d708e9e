use dioxus::prelude::*;

/// Why a page could not load its data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// The page needs a learner but nobody is signed in.
    SignedOut,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::SignedOut => "Please log in to see your questions.",
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Ready(T),
    Error(ViewError),
}

/// Collapse a loader resource into what the page renders.
///
/// A paused or stopped loader counts as still loading.
#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    if resource.state().cloned() != UseResourceState::Ready {
        return ViewState::Loading;
    }
    match resource.value().read().as_ref() {
        Some(Ok(data)) => ViewState::Ready(data.clone()),
        Some(Err(err)) => ViewState::Error(*err),
        None => ViewState::Loading,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_learner_facing() {
        assert_eq!(
            ViewError::SignedOut.message(),
            "Please log in to see your questions."
        );
        assert!(ViewError::Unknown.message().starts_with("Something went wrong"));
    }
}
