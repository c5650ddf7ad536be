/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::utils::null_as_default;
use crate::presentation::list::MailingList;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Every JSON response from the API is wrapped as `{"data": ...}`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Envelope<T> {
    /// Payload of the response
    pub data: T,
}

/// One page of a collection endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    /// Items on this page, in server order
    #[serde(default = "Vec::new", deserialize_with = "null_as_default")]
    pub results: Vec<T>,
    /// Number of items across all pages
    #[serde(default)]
    pub total: u64,
    /// Page size the server applied
    #[serde(default)]
    pub per_page: Option<i64>,
    /// Page number the server returned
    #[serde(default)]
    pub page: Option<i64>,
}

/// Decodes a JSON value into a model, reporting shape problems as
/// [`AppError::SchemaMismatch`]
pub fn decode<T: for<'de> Deserialize<'de>>(value: Value) -> Result<T, AppError> {
    serde_json::from_value(value).map_err(|e| AppError::SchemaMismatch(e.to_string()))
}

/// Normalizes the payload of `GET /api/lists/{id}`
///
/// Depending on the listmonk version the endpoint answers with the list object
/// itself or with a page wrapper holding a `results` array (upstream issue
/// knadh/listmonk#2117). The wrapper is searched for the requested id; a
/// wrapper without a matching entry is reported as [`AppError::NotFound`].
pub fn resolve_mailing_list(data: Value, list_id: i64) -> Result<MailingList, AppError> {
    let Some(results) = data.get("results") else {
        return decode(data);
    };

    debug!("List endpoint returned a page wrapper, searching for id {list_id}");
    let matching = results
        .as_array()
        .into_iter()
        .flatten()
        .find(|entry| entry.get("id").and_then(Value::as_i64) == Some(list_id))
        .cloned();

    match matching {
        Some(entry) => decode(entry),
        None => Err(AppError::NotFound(format!("List with ID {list_id} not found."))),
    }
}
