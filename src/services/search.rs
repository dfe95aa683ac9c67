use tracing::{debug, error};

use crate::error::Error;
use crate::models::PlaceCandidate;
use crate::services::api::{ApiService, PageRequest, PlacesApi, log_status};
use crate::utils::Delay;

/// Candidates gathered across nearby-search pages.
#[derive(Debug, Default)]
pub struct SearchPages {
    pub candidates: Vec<PlaceCandidate>,
    pub pages_fetched: u32,
    /// Set when a page failed and pagination stopped early.
    pub stopped_by: Option<Error>,
}

/// Follows continuation tokens for at most `max_pages` pages, pausing before
/// each continuation. A failed page ends the walk but keeps what was
/// already collected.
pub async fn search_nearby<A, D>(
    api: &ApiService<A>,
    delay: &D,
    first: PageRequest,
    max_pages: u32,
) -> SearchPages
where
    A: PlacesApi,
    D: Delay + ?Sized,
{
    let mut pages = SearchPages::default();
    let mut next = Some(first);

    while let Some(request) = next.take() {
        if pages.pages_fetched >= max_pages {
            break;
        }
        pages.pages_fetched += 1;
        let page_number = pages.pages_fetched;

        let response = match api.search_page(&request).await {
            Ok(response) => response,
            Err(e) => {
                match &e {
                    Error::ApiStatus { status, .. } => log_status(status, &e),
                    _ => error!(page = page_number, error = %e, "Nearby search request failed"),
                }
                pages.stopped_by = Some(e);
                break;
            }
        };

        debug!(
            page = page_number,
            results = response.results.len(),
            has_next = response.next_page_token.is_some(),
            "Fetched nearby search page"
        );
        pages.candidates.extend(response.results);

        match response.next_page_token {
            Some(token) if pages.pages_fetched < max_pages => {
                delay.pause().await;
                next = Some(PageRequest::Next { token });
            }
            Some(_) => {
                debug!(max_pages = max_pages, "Page limit reached, ignoring continuation token");
            }
            None => {}
        }
    }

    pages
}
