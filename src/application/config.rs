/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::VERSION;
use crate::constants::{CLIENT_NAME, DEFAULT_PAGE_SIZE, DEFAULT_TIMEOUT_SECS};
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::env::consts::OS;
use std::time::Duration;
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Transport settings for the listmonk client
///
/// Only tuning knobs live here. The instance URL and the credentials are
/// always handed to the [`Client`](crate::application::client::Client) at
/// runtime and are never read from the environment.
pub struct Config {
    /// Timeout in seconds applied to every request
    pub timeout_secs: u64,
    /// Number of items requested per page when aggregating listings
    pub page_size: u32,
    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment, falling back to defaults
    ///
    /// Reads `LISTMONK_TIMEOUT_SECS` and `LISTMONK_PAGE_SIZE`, loading a
    /// `.env` file first when one exists.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let mut page_size = get_env_or_default("LISTMONK_PAGE_SIZE", DEFAULT_PAGE_SIZE);
        if page_size == 0 {
            debug!("LISTMONK_PAGE_SIZE must be positive, using {DEFAULT_PAGE_SIZE}");
            page_size = DEFAULT_PAGE_SIZE;
        }

        Config {
            timeout_secs: get_env_or_default("LISTMONK_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS),
            page_size,
            user_agent: default_user_agent(),
        }
    }

    /// Returns a copy with a different request timeout
    #[must_use]
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Returns a copy with a different page size; zero is ignored
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        if page_size > 0 {
            self.page_size = page_size;
        }
        self
    }

    /// Request timeout as a [`Duration`]
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Version of the compiler that built the crate, captured by the build script
pub const RUSTC_VERSION: &str = env!("LISTMONK_RUSTC_VERSION");

/// Builds the `User-Agent` string: client name and version, compiler version, platform
pub fn default_user_agent() -> String {
    format!(
        "{CLIENT_NAME} v{VERSION} / Rust {RUSTC_VERSION} / {}",
        capitalize(OS)
    )
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
