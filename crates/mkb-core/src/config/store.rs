//! Assignment store configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which backend answers "get assignment(s) for user [and pole]".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreProvider {
    /// Direct SQL against the backend's PostgreSQL database.
    #[default]
    Postgres,
    /// The hosted backend's REST interface.
    Rest,
}

impl fmt::Display for StoreProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Postgres => write!(f, "postgres"),
            Self::Rest => write!(f, "rest"),
        }
    }
}

/// Top-level store configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Selected provider.
    #[serde(default)]
    pub provider: StoreProvider,
    /// Settings for the `rest` provider.
    #[serde(default)]
    pub rest: RestStoreConfig,
}

/// Settings for the hosted backend's REST interface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestStoreConfig {
    /// Project base URL, e.g. `https://<project>.supabase.co`.
    #[serde(default)]
    pub url: String,
    /// Service API key, sent as `apikey` and as the bearer credential.
    #[serde(default)]
    pub api_key: String,
    /// Database schema exposed over REST.
    #[serde(default = "default_schema")]
    pub schema: String,
    /// Name of the user–pole assignment table.
    #[serde(default = "default_assignments_table")]
    pub assignments_table: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for RestStoreConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            api_key: String::new(),
            schema: default_schema(),
            assignments_table: default_assignments_table(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_schema() -> String {
    "public".to_string()
}

fn default_assignments_table() -> String {
    "user_poles".to_string()
}

fn default_timeout() -> u64 {
    10
}
