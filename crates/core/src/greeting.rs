use crate::model::Account;

const BETTY: &str = "Hi Betty, welcome back! You’ve made great progress on PolarizEdu.";
const ETHAN: &str = "Hope your vacation went great. Let’s start from where you left off last week. \
You’ve made a great job learning about making effective conversations.";

/// Welcome line for the home page.
#[must_use]
pub fn welcome_message(account: &Account) -> String {
    match account.username().as_str() {
        "betty" => BETTY.to_string(),
        "ethan" => ETHAN.to_string(),
        _ => format!("Welcome, {}!", account.display_name()),
    }
}
