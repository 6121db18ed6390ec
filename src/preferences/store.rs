use std::future::Future;
use std::sync::{PoisonError, RwLock};

use crate::clients::PreferenceTransport;
use crate::core::models::PreferenceList;
use crate::errors::PreferenceError;

use super::notify::{
    LOAD_FAILURE_TITLE, Notifier, SAVE_FAILURE_TITLE, SAVE_SUCCESS_MESSAGE, SAVE_SUCCESS_TITLE,
    load_failure_message, save_failure_message,
};
use super::sync::PreferenceSync;

/// Load-modify-save facade that remembers the last loaded user and reports
/// outcomes to a [`Notifier`].
///
/// `save` writes to the user of the last successful `load`. The user name is
/// captured when `save` is called, before the returned future is polled: a
/// `load` for another user finishing after that does not redirect the save,
/// but any save called afterwards goes to the newly loaded user. Callers
/// juggling several users should use [`PreferenceSync`] directly.
pub struct PreferenceStore<T, N> {
    sync: PreferenceSync<T>,
    notifier: N,
    current_user: RwLock<Option<String>>,
}

impl<T: PreferenceTransport, N: Notifier> PreferenceStore<T, N> {
    #[must_use]
    pub fn new(transport: T, notifier: N) -> Self {
        Self {
            sync: PreferenceSync::new(transport),
            notifier,
            current_user: RwLock::new(None),
        }
    }

    #[must_use]
    pub fn current_user(&self) -> Option<String> {
        self.current_user
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn sync(&self) -> &PreferenceSync<T> {
        &self.sync
    }

    #[must_use]
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Load preferences for `user_name` and make it the current user.
    ///
    /// On a server or network failure an error notification is shown. The
    /// current user is left as it was on any failure.
    ///
    /// # Errors
    ///
    /// Propagates the failure from [`PreferenceSync::load`].
    pub async fn load(&self, user_name: &str) -> Result<PreferenceList, PreferenceError> {
        match self.sync.load(user_name).await {
            Ok(list) => {
                *self
                    .current_user
                    .write()
                    .unwrap_or_else(PoisonError::into_inner) = Some(user_name.to_string());
                Ok(list)
            }
            Err(e) => {
                if e.is_remote() {
                    self.notifier
                        .error(&load_failure_message(user_name, &e), LOAD_FAILURE_TITLE);
                }
                Err(e)
            }
        }
    }

    /// Save `list` for the current user.
    ///
    /// The current user is read here, not when the returned future runs.
    ///
    /// # Errors
    ///
    /// `NoUserContext` if no load has succeeded yet; nothing is sent and no
    /// notification is shown in that case. Transport failures are notified
    /// and returned.
    pub fn save(
        &self,
        list: PreferenceList,
    ) -> impl Future<Output = Result<PreferenceList, PreferenceError>> + Send + '_ {
        let current = self.current_user();

        async move {
            let user_name = current.ok_or(PreferenceError::NoUserContext)?;

            match self.sync.save(&user_name, list).await {
                Ok(list) => {
                    self.notifier.success(SAVE_SUCCESS_MESSAGE, SAVE_SUCCESS_TITLE);
                    Ok(list)
                }
                Err(e) => {
                    self.notifier
                        .error(&save_failure_message(&user_name, &e), SAVE_FAILURE_TITLE);
                    Err(e)
                }
            }
        }
    }
}
