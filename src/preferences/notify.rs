use tracing::{error, info};

/// Sink for user-facing outcome messages.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str, title: &str);
    fn error(&self, message: &str, title: &str);
}

/// Writes notifications to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str, title: &str) {
        info!(title, "{}", message);
    }

    fn error(&self, message: &str, title: &str) {
        error!(title, "{}", message);
    }
}

pub const SAVE_SUCCESS_MESSAGE: &str = "User preferences successfully saved";
pub const SAVE_SUCCESS_TITLE: &str = "Preferences saved";
pub const LOAD_FAILURE_TITLE: &str = "Could not retrieve user preferences";
pub const SAVE_FAILURE_TITLE: &str = "Could not save user preferences";

#[must_use]
pub fn load_failure_message(user_name: &str, cause: &dyn std::fmt::Display) -> String {
    format!(
        "Loading of user preferences for \"{user_name}\" failed with status: {cause}. Try reloading the page"
    )
}

#[must_use]
pub fn save_failure_message(user_name: &str, cause: &dyn std::fmt::Display) -> String {
    format!("Saving of preferences for \"{user_name}\" failed with status: {cause}")
}
