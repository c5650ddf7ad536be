/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Session state for a listmonk instance
//!
//! A [`Session`] remembers where the instance lives, which credentials to
//! send, and whether those credentials have been accepted by the server. It
//! performs no I/O; the live credential check is done by
//! [`Client::login`](crate::application::client::Client::login), which then
//! records the outcome through [`Session::mark_logged_in`].

use crate::error::AppError;
use std::fmt;

/// Username and password sent as HTTP Basic auth
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Listmonk username (or API user)
    pub username: String,
    /// Password or API token
    pub password: String,
}

impl Credentials {
    /// Validates and wraps a username / password pair
    pub fn new(username: &str, password: &str) -> Result<Self, AppError> {
        if username.is_empty() {
            return Err(AppError::Validation("Username cannot be empty".to_string()));
        }
        if password.is_empty() {
            return Err(AppError::Validation("Password cannot be empty".to_string()));
        }
        Ok(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Base URL, credentials and login flag for one listmonk instance
#[derive(Debug, Clone, Default)]
pub struct Session {
    base_url: Option<String>,
    credentials: Option<Credentials>,
    logged_in: bool,
}

impl Session {
    /// Creates an empty session: no URL, no credentials, not logged in
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the instance base URL (without `/api`)
    ///
    /// The URL must be non-empty and start with `http://` or `https://`.
    /// Surrounding whitespace and a trailing slash are removed. Pointing the
    /// session at a new URL drops any previous login.
    pub fn set_base_url(&mut self, url: &str) -> Result<(), AppError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(AppError::Validation("URL must not be empty.".to_string()));
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(AppError::Validation(
                "The url must start with the HTTP scheme (http:// or https://).".to_string(),
            ));
        }

        let url = url.strip_suffix('/').unwrap_or(url);
        if self.base_url.as_deref() != Some(url) {
            self.logged_in = false;
        }
        self.base_url = Some(url.to_string());
        Ok(())
    }

    /// The base URL, if one has been set
    #[must_use]
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Stores credentials after validating them
    ///
    /// Fails with [`AppError::OperationNotAllowed`] when no base URL is set and
    /// with [`AppError::Validation`] when either value is empty. The session is
    /// not considered logged in until [`Session::mark_logged_in`] is called.
    pub fn set_credentials(&mut self, username: &str, password: &str) -> Result<(), AppError> {
        if self.base_url.is_none() {
            return Err(AppError::OperationNotAllowed(
                "base_url must be set before you can call login.".to_string(),
            ));
        }
        let credentials = Credentials::new(username, password)?;
        self.credentials = Some(credentials);
        self.logged_in = false;
        Ok(())
    }

    /// Records the outcome of the live credential check
    pub fn mark_logged_in(&mut self, logged_in: bool) {
        self.logged_in = logged_in && self.credentials.is_some();
    }

    /// Whether a login has succeeded for the current URL and credentials
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    /// Stored credentials, if any
    #[must_use]
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// `(username, password)` pair sent as HTTP Basic auth
    #[must_use]
    pub fn basic_auth(&self) -> Option<(&str, &str)> {
        self.credentials
            .as_ref()
            .map(|c| (c.username.as_str(), c.password.as_str()))
    }

    /// State guard run before every remote operation
    ///
    /// Fails when `url` is required but no base URL is set, or when no login
    /// has succeeded yet.
    pub fn require(&self, url: bool) -> Result<(), AppError> {
        if url && self.base_url.is_none() {
            return Err(AppError::OperationNotAllowed(
                "URL Base must be set to proceed.".to_string(),
            ));
        }
        if !self.logged_in {
            return Err(AppError::OperationNotAllowed(
                "You must login before proceeding.".to_string(),
            ));
        }
        Ok(())
    }

    /// Joins a path such as `/api/lists` onto the base URL
    pub fn url_for(&self, path: &str) -> Result<String, AppError> {
        let base = self.base_url.as_deref().ok_or_else(|| {
            AppError::OperationNotAllowed("URL Base must be set to proceed.".to_string())
        })?;
        let path = path.trim_start_matches('/');
        Ok(format!("{base}/{path}"))
    }
}
