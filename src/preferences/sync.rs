use tracing::{info, warn};

use crate::clients::PreferenceTransport;
use crate::core::models::{PreferenceList, list_to_map, map_to_list};
use crate::errors::PreferenceError;

/// Load/save of a user's preferences with the user named on every call.
pub struct PreferenceSync<T> {
    transport: T,
}

fn validate_user_name(user_name: &str) -> Result<(), PreferenceError> {
    if user_name.trim().is_empty() {
        return Err(PreferenceError::InvalidUserName(user_name.to_string()));
    }
    Ok(())
}

impl<T: PreferenceTransport> PreferenceSync<T> {
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch `user_name`'s preferences as a list sorted by name.
    ///
    /// # Errors
    ///
    /// `InvalidUserName` for an empty name (no request is sent), otherwise
    /// whatever the transport reports.
    pub async fn load(&self, user_name: &str) -> Result<PreferenceList, PreferenceError> {
        validate_user_name(user_name)?;

        match self.transport.fetch_preferences(user_name).await {
            Ok(map) => {
                let list = map_to_list(map.as_ref());
                info!(user = user_name, count = list.len(), "Loaded user preferences");
                Ok(list)
            }
            Err(e) => {
                warn!(user = user_name, "Failed to load user preferences: {}", e);
                Err(e)
            }
        }
    }

    /// Store `list` as `user_name`'s preferences and hand the list back.
    ///
    /// Values are coerced to booleans before anything is sent. Failures are
    /// not retried.
    ///
    /// # Errors
    ///
    /// `InvalidUserName` for an empty name (no request is sent), otherwise
    /// whatever the transport reports.
    pub async fn save(
        &self,
        user_name: &str,
        list: PreferenceList,
    ) -> Result<PreferenceList, PreferenceError> {
        validate_user_name(user_name)?;
        let map = list_to_map(&list);

        match self.transport.store_preferences(user_name, &map).await {
            Ok(()) => {
                info!(user = user_name, count = map.len(), "Saved user preferences");
                Ok(list)
            }
            Err(e) => {
                warn!(user = user_name, "Failed to save user preferences: {}", e);
                Err(e)
            }
        }
    }
}
