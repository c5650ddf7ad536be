/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

use crate::application::config::Config;
use crate::constants::paths;
use crate::error::AppError;
use crate::model::responses::{Envelope, decode};
use crate::session::Session;
use reqwest::header::ACCEPT;
use reqwest::multipart::{Form, Part};
use reqwest::{Client as HttpInternalClient, Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::PathBuf;
use tracing::{debug, error};

/// Request executor for one listmonk instance
///
/// Builds every call from the session (base URL and Basic auth), sends it
/// and turns the response into either the envelope's `data` field or an
/// [`AppError`]. It does not check whether the session is logged in; that is
/// the job of [`Session::require`].
#[derive(Debug, Clone)]
pub struct HttpClient {
    http_client: HttpInternalClient,
}

impl HttpClient {
    /// Creates an executor with the configured user agent and timeout
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let http_client = HttpInternalClient::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()?;
        Ok(Self { http_client })
    }

    /// Makes a GET request with query parameters
    pub async fn get<T: DeserializeOwned>(
        &self,
        session: &Session,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, AppError> {
        let request = self.request(session, Method::GET, path)?.query(query);
        self.send_json(request).await
    }

    /// Makes a POST request with a JSON body
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        session: &Session,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let request = self.request(session, Method::POST, path)?.json(body);
        self.send_json(request).await
    }

    /// Makes a PUT request with a JSON body
    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        session: &Session,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let request = self.request(session, Method::PUT, path)?.json(body);
        self.send_json(request).await
    }

    /// Makes a PUT request without a body
    pub async fn put_empty<T: DeserializeOwned>(
        &self,
        session: &Session,
        path: &str,
    ) -> Result<T, AppError> {
        let request = self.request(session, Method::PUT, path)?;
        self.send_json(request).await
    }

    /// Makes a DELETE request
    pub async fn delete<T: DeserializeOwned>(
        &self,
        session: &Session,
        path: &str,
    ) -> Result<T, AppError> {
        let request = self.request(session, Method::DELETE, path)?;
        self.send_json(request).await
    }

    /// Makes a GET request and returns the raw body, used for HTML previews
    pub async fn get_text(&self, session: &Session, path: &str) -> Result<String, AppError> {
        let request = self.request(session, Method::GET, path)?;
        let response = self.send(request).await?;
        Ok(response.text().await?)
    }

    /// Posts an url-encoded form and returns the raw body
    pub async fn post_form_text(
        &self,
        session: &Session,
        path: &str,
        form: &[(&str, &str)],
    ) -> Result<String, AppError> {
        let request = self.request(session, Method::POST, path)?.form(form);
        let response = self.send(request).await?;
        Ok(response.text().await?)
    }

    /// Posts a multipart form: the JSON body goes into a `data` field and each
    /// attachment into a `file` part
    ///
    /// Attachments are read fully into memory before the request is sent.
    pub async fn post_multipart<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        session: &Session,
        path: &str,
        body: &B,
        attachments: &[PathBuf],
    ) -> Result<T, AppError> {
        let data = serde_json::to_string(body).map_err(|e| AppError::Validation(e.to_string()))?;
        let mut form = Form::new().text("data", data);

        for attachment in attachments {
            if !attachment.is_file() {
                return Err(AppError::FileNotFound(attachment.clone()));
            }
            let bytes = tokio::fs::read(attachment).await?;
            let file_name = attachment
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| "attachment".to_string());
            debug!("Attaching {} ({} bytes)", file_name, bytes.len());
            form = form.part("file", Part::bytes(bytes).file_name(file_name));
        }

        let request = self.request(session, Method::POST, path)?.multipart(form);
        self.send_json(request).await
    }

    /// Calls the health endpoint with the session's credentials
    pub async fn probe(&self, session: &Session) -> Result<bool, AppError> {
        self.get(session, paths::HEALTH, &[]).await
    }

    /// Starts a request with the base URL and Basic auth applied
    fn request(&self, session: &Session, method: Method, path: &str) -> Result<RequestBuilder, AppError> {
        let url = session.url_for(path)?;
        debug!("{} {}", method, url);
        let mut request = self.http_client.request(method, url);
        if let Some((username, password)) = session.basic_auth() {
            request = request.basic_auth(username, Some(password));
        }
        Ok(request)
    }

    /// Sends a JSON call and unwraps the `data` envelope
    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, AppError> {
        let request = request.header(ACCEPT, "application/json");
        let response = self.send(request).await?;
        let text = response.text().await?;
        parse_envelope(&text)
    }

    /// Sends a request and rejects non-success statuses
    async fn send(&self, request: RequestBuilder) -> Result<Response, AppError> {
        let response = request.send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        error!("Request failed with status {}: {}", status, body);
        Err(AppError::Http { status, body })
    }
}

/// Decodes `{"data": ...}` into the requested type
///
/// An empty body is [`AppError::EmptyResponse`], unparsable text is
/// [`AppError::InvalidJson`] and a body without `data` or with the wrong
/// shape is [`AppError::SchemaMismatch`].
pub fn parse_envelope<T: DeserializeOwned>(text: &str) -> Result<T, AppError> {
    if text.trim().is_empty() {
        return Err(AppError::EmptyResponse);
    }
    let value: Value = serde_json::from_str(text).map_err(AppError::InvalidJson)?;
    let envelope: Envelope<Value> = decode(value)?;
    decode(envelope.data)
}
