#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Notify;

use prefsync::clients::PreferenceTransport;
use prefsync::core::models::PreferenceMap;
use prefsync::errors::PreferenceError;
use prefsync::preferences::Notifier;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Fetch(String),
    Store(String),
}

/// In-memory stand-in for the REST API.
///
/// Users missing from `users` answer with HTTP 404. A user mapped to `None`
/// exists but has no preferences.
#[derive(Default)]
pub struct FakeTransport {
    pub users: Mutex<HashMap<String, Option<PreferenceMap>>>,
    pub calls: Mutex<Vec<Call>>,
    pub fail_store: Mutex<bool>,
    store_gate: Mutex<Option<Arc<Notify>>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(self, name: &str, preferences: Value) -> Self {
        let map = serde_json::from_value::<Option<PreferenceMap>>(preferences)
            .expect("preferences must be an object or null");
        self.users.lock().unwrap().insert(name.to_string(), map);
        self
    }

    /// Make the next store wait until `gate` is notified.
    pub fn with_store_gate(self, gate: Arc<Notify>) -> Self {
        *self.store_gate.lock().unwrap() = Some(gate);
        self
    }

    pub fn failing_store(self) -> Self {
        *self.fail_store.lock().unwrap() = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn stored(&self, name: &str) -> Option<PreferenceMap> {
        self.users.lock().unwrap().get(name).cloned().flatten()
    }
}

#[async_trait]
impl PreferenceTransport for FakeTransport {
    async fn fetch_preferences(
        &self,
        user_name: &str,
    ) -> Result<Option<PreferenceMap>, PreferenceError> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Fetch(user_name.to_string()));
        match self.users.lock().unwrap().get(user_name) {
            Some(map) => Ok(map.clone()),
            None => Err(PreferenceError::ApiError {
                status: 404,
                body: format!("User {user_name} not found"),
            }),
        }
    }

    async fn store_preferences(
        &self,
        user_name: &str,
        preferences: &PreferenceMap,
    ) -> Result<(), PreferenceError> {
        let gate = self.store_gate.lock().unwrap().take();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        self.calls
            .lock()
            .unwrap()
            .push(Call::Store(user_name.to_string()));
        if *self.fail_store.lock().unwrap() {
            return Err(PreferenceError::HttpError("connection reset".into()));
        }
        self.users
            .lock()
            .unwrap()
            .insert(user_name.to_string(), Some(preferences.clone()));
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success { message: String, title: String },
    Error { message: String, title: String },
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str, title: &str) {
        self.notices.lock().unwrap().push(Notice::Success {
            message: message.to_string(),
            title: title.to_string(),
        });
    }

    fn error(&self, message: &str, title: &str) {
        self.notices.lock().unwrap().push(Notice::Error {
            message: message.to_string(),
            title: title.to_string(),
        });
    }
}
