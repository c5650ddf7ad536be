/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::session::Session;
use tracing::{debug, info, warn};

/// Client for one listmonk instance
///
/// Owns the [`Session`] and the request executor. Pointing the client at an
/// instance and logging in take `&mut self`; every domain operation (see the
/// service traits in [`crate::application::interfaces`]) takes `&self` and
/// fails with [`AppError::OperationNotAllowed`] until a login has succeeded.
///
/// ```no_run
/// use listmonk_client::prelude::*;
///
/// # async fn run() -> Result<(), AppError> {
/// let mut client = Client::new(Config::default())?;
/// client.set_base_url("https://mail.example.com")?;
/// if client.login("api-user", "api-token").await? {
///     for list in client.lists().await? {
///         println!("{:?} has {:?} subscribers", list.name, list.subscriber_count);
///     }
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    session: Session,
    http_client: HttpClient,
    config: Config,
}

impl Client {
    /// Creates a client with no base URL and no credentials
    pub fn new(config: Config) -> Result<Self, AppError> {
        let http_client = HttpClient::new(&config)?;
        Ok(Self {
            session: Session::new(),
            http_client,
            config,
        })
    }

    /// Creates a client from the environment configuration with a different
    /// request timeout
    pub fn with_timeout(timeout_secs: u64) -> Result<Self, AppError> {
        Self::new(Config::default().with_timeout_secs(timeout_secs))
    }

    /// Points the client at a listmonk instance
    ///
    /// See [`Session::set_base_url`] for the accepted formats. A different URL
    /// drops the current login.
    pub fn set_base_url(&mut self, url: &str) -> Result<(), AppError> {
        self.session.set_base_url(url)?;
        debug!("Base URL set to {:?}", self.session.base_url());
        Ok(())
    }

    /// The instance base URL, if one has been set
    pub fn base_url(&self) -> Option<&str> {
        self.session.base_url()
    }

    /// Stores the credentials and checks them against the health endpoint
    ///
    /// Fails with [`AppError::OperationNotAllowed`] when no base URL is set and
    /// with [`AppError::Validation`] when either value is empty. Any failure of
    /// the live check itself, including network errors, yields `Ok(false)`.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<bool, AppError> {
        self.session.set_credentials(username, password)?;
        info!("Logging in to {:?} as {}", self.session.base_url(), username);

        let accepted = match self.http_client.probe(&self.session).await {
            Ok(healthy) => healthy,
            Err(e) => {
                warn!("Login check failed: {}", e);
                false
            }
        };

        self.session.mark_logged_in(accepted);
        debug!("Logged in: {}", accepted);
        Ok(accepted)
    }

    /// Whether the instance answers its health check with the stored
    /// credentials
    ///
    /// Every failure, including a missing login, yields `false`.
    pub async fn is_healthy(&self) -> bool {
        if let Err(e) = self.session.require(true) {
            warn!("Health check skipped: {}", e);
            return false;
        }
        match self.http_client.probe(&self.session).await {
            Ok(healthy) => healthy,
            Err(e) => {
                warn!("Health check failed: {}", e);
                false
            }
        }
    }

    /// Re-checks the stored credentials against the server
    pub async fn verify_login(&self) -> bool {
        self.is_healthy().await
    }

    /// Whether a login has succeeded for the current URL and credentials
    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }

    /// Session state
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Transport configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) fn http(&self) -> &HttpClient {
        &self.http_client
    }
}
