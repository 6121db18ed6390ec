//! Client modules for the preference REST API

pub mod rest_client;

pub use rest_client::{PreferenceTransport, RestClient};
