// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================

use gloo_net::http::Request;
use crate::config::CONFIG;
use crate::models::{Venue, VenueListResponse};
use crate::utils::constants::SEARCH_ENDPOINT;

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.backend_url())
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// URL de búsqueda; sin `?` cuando no hay filtros
    pub fn search_url(&self, query_string: &str) -> String {
        if query_string.is_empty() {
            format!("{}{}", self.base_url, SEARCH_ENDPOINT)
        } else {
            format!("{}{}?{}", self.base_url, SEARCH_ENDPOINT, query_string)
        }
    }

    /// Buscar canchas con la query string ya construida
    pub async fn search_venues(&self, query_string: &str) -> Result<Vec<Venue>, String> {
        let url = self.search_url(query_string);

        let response = Request::get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            let status = response.status();
            let error_text = response.text().await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(format!("HTTP error {}: {}", status, error_text));
        }

        response
            .json::<VenueListResponse>()
            .await
            .map(VenueListResponse::into_venues)
            .map_err(|e| format!("Parse error: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_url_omits_empty_query() {
        let client = ApiClient::with_base_url("http://localhost:5000/");
        assert_eq!(client.search_url(""), "http://localhost:5000/api/canchas");
        assert_eq!(
            client.search_url("q=futbol&radius=5"),
            "http://localhost:5000/api/canchas?q=futbol&radius=5"
        );
    }
}
