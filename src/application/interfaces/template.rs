/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::requests::CreateTemplateRequest;
use crate::presentation::template::{Template, TemplatePreview};
use async_trait::async_trait;

/// Interface for the template service
#[async_trait]
pub trait TemplateService: Send + Sync {
    /// Gets every template
    async fn templates(&self) -> Result<Vec<Template>, AppError>;

    /// Gets one template; `None` when the server answers 404
    async fn template_by_id(&self, template_id: i64) -> Result<Option<Template>, AppError>;

    /// Gets the rendered HTML of a template filled with sample content
    async fn template_preview_by_id(&self, template_id: i64) -> Result<TemplatePreview, AppError>;

    /// Creates a template
    ///
    /// The body must contain `{{ template "content" . }}` exactly once; this
    /// is checked before anything is sent.
    async fn create_template(&self, request: CreateTemplateRequest) -> Result<Template, AppError>;

    /// Writes a modified template snapshot and returns the stored result
    async fn update_template(&self, template: &Template) -> Result<Template, AppError>;

    /// Deletes a template; `false` when it does not exist
    async fn delete_template(&self, template_id: i64) -> Result<bool, AppError>;

    /// Makes a template the default for new campaigns; `false` when it does
    /// not exist
    async fn set_default_template(&self, template_id: i64) -> Result<bool, AppError>;
}
