/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::responses::Page;
use crate::session::Session;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

/// Whether another page exists after `page` when each holds `per_page` items
///
/// ```
/// use listmonk_client::application::pagination::has_more;
///
/// assert!(has_more(500, 2, 1200));
/// assert!(!has_more(500, 2, 1000));
/// ```
#[must_use]
pub fn has_more(per_page: u32, page: u32, total: u64) -> bool {
    u64::from(per_page) * u64::from(page) < total
}

/// Fetches every page of a collection endpoint and merges the results in
/// server order
///
/// `query` carries the endpoint's filters; `page` and `per_page` are added
/// here. Fetching stops once `per_page * page` reaches the `total` reported by
/// the first page, or when the server returns an empty page.
pub async fn fetch_all_pages<T: DeserializeOwned>(
    http: &HttpClient,
    session: &Session,
    path: &str,
    query: &[(&'static str, String)],
    per_page: u32,
) -> Result<Vec<T>, AppError> {
    let per_page = per_page.max(1);
    let mut items = Vec::new();
    let mut current_page: u32 = 1;

    loop {
        info!("Getting {} page {}", path, current_page);
        let mut params: Vec<(&str, String)> = vec![
            ("page", current_page.to_string()),
            ("per_page", per_page.to_string()),
        ];
        params.extend(query.iter().cloned());

        let page: Page<T> = http.get(session, path, &params).await?;
        let fetched = page.results.len();
        let total = page.total;
        items.extend(page.results);
        debug!("Page {current_page}: {fetched} items, {total} in total");

        if fetched == 0 || !has_more(per_page, current_page, total) {
            break;
        }
        current_page += 1;
    }

    debug!("Total obtained from {}: {} items", path, items.len());
    Ok(items)
}
