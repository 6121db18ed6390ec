//! prefsync - keeps a user's boolean preferences in sync with a log-management
//! server's per-user REST resource.
//!
//! The server stores preferences as a map of name to value; callers work with
//! a list sorted by name. Values are read as booleans: `true` and `"true"` are
//! enabled, anything else is not.
//!
//! # Architecture
//!
//! - [`core::models`] holds the map/list conversions
//! - [`clients::RestClient`] talks to `/users/{name}` over reqwest
//! - [`preferences::PreferenceSync`] loads and saves with the user passed explicitly
//! - [`preferences::PreferenceStore`] remembers the last loaded user and reports
//!   outcomes to a [`preferences::Notifier`]
//!
//! # Example
//!
//! ```no_run
//! use prefsync::clients::RestClient;
//! use prefsync::core::config::AppConfig;
//! use prefsync::core::models::Preference;
//! use prefsync::preferences::PreferenceSync;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     prefsync::setup_logging();
//!
//!     let config = AppConfig::from_env()?;
//!     let sync = PreferenceSync::new(RestClient::new(&config)?);
//!
//!     let mut prefs = sync.load("alice").await?;
//!     prefs.push(Preference::new("enableSmartSearch", true));
//!     sync.save("alice", prefs).await?;
//!
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod clients;
pub mod core;
pub mod errors;
pub mod preferences;
pub mod utils;

/// Configure structured JSON logging on stderr.
///
/// The level comes from `RUST_LOG` and defaults to `info`. Calling this more
/// than once is harmless; only the first call installs a subscriber.
///
/// # Example
///
/// ```
/// prefsync::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let default_level = if cfg!(feature = "debug-logs") {
        "debug"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_target(true)
        .with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
