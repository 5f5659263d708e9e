use quiz_core::model::{UserQuestion, UserQuestionId};

use super::time_fmt::format_added_on;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserQuestionRowVm {
    pub id: UserQuestionId,
    pub category: String,
    pub prompt: String,
    pub answer: String,
    pub image_src: Option<String>,
    pub added_on: String,
    pub selected: bool,
}

#[must_use]
pub fn map_user_question_rows(
    questions: &[UserQuestion],
    selected: &[UserQuestionId],
) -> Vec<UserQuestionRowVm> {
    questions
        .iter()
        .map(|q| UserQuestionRowVm {
            id: q.id(),
            category: q.category().to_string(),
            prompt: q.prompt().to_string(),
            answer: q.answer().to_string(),
            image_src: q.image().map(|img| img.as_str().to_string()),
            added_on: format_added_on(q.created_at()),
            selected: selected.contains(&q.id()),
        })
        .collect()
}

/// Add `id` to the selection, or drop it if already there.
pub fn toggle_selection(selected: &mut Vec<UserQuestionId>, id: UserQuestionId) {
    if let Some(pos) = selected.iter().position(|existing| *existing == id) {
        selected.remove(pos);
    } else {
        selected.push(id);
    }
}
