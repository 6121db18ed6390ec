//! Preference load/save on top of a [`PreferenceTransport`](crate::clients::PreferenceTransport).

pub mod notify;
pub mod store;
pub mod sync;

pub use notify::{Notifier, TracingNotifier};
pub use store::PreferenceStore;
pub use sync::PreferenceSync;
