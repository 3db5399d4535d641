//! Best-effort recipe drafts from an external recipe database.
//!
//! A lookup is one search request followed by up to N detail requests, all
//! sequential and never retried. Any failure along the way yields
//! [`AutofillDraft::failed`]; callers only ever see the `success` flag.

mod config;
mod provider;
mod sanitize;
mod vocabulary;

pub use config::{AutofillConfig, DEFAULT_BASE_URL, DEFAULT_CANDIDATES, MAX_CANDIDATES};
pub use sanitize::html_to_text;
pub use vocabulary::{find_hint, INGREDIENT_VOCABULARY};

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use url::Url;

use crate::error::{FetchError, ResolveError};
use crate::http::{HttpClient, ReqwestClient};
use provider::{RecipeDetails, SearchResponse};

/// Fields to pre-populate a new recipe with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AutofillDraft {
    /// Plain-text summary
    pub description: String,
    /// Comma-joined ingredient lines
    pub ingredients: String,
    /// Minutes
    pub time: i32,
    /// Per-serving price in whole currency units
    pub cost: i32,
    pub success: bool,
}

impl AutofillDraft {
    pub fn failed() -> Self {
        Self::default()
    }

    fn from_details(details: &RecipeDetails) -> Option<Self> {
        let ingredients = details.ingredient_lines();
        if ingredients.is_empty() {
            return None;
        }

        Some(Self {
            description: details
                .summary
                .as_deref()
                .map(html_to_text)
                .unwrap_or_default(),
            ingredients: ingredients.join(", "),
            time: details.ready_in_minutes.map(minutes).unwrap_or(0),
            cost: details.price_per_serving.map(cents_to_units).unwrap_or(0),
            success: true,
        })
    }
}

fn minutes(value: f64) -> i32 {
    value.round().max(0.0) as i32
}

/// Minor units to whole units, rounding half away from zero (1050 -> 11).
pub fn cents_to_units(cents: f64) -> i32 {
    (cents / 100.0).round().max(0.0) as i32
}

/// Resolves free-text recipe names into [`AutofillDraft`]s.
pub struct AutofillResolver {
    client: Arc<dyn HttpClient>,
    config: AutofillConfig,
}

impl AutofillResolver {
    pub fn new(client: Arc<dyn HttpClient>, config: AutofillConfig) -> Self {
        Self { client, config }
    }

    /// Build a resolver backed by a real HTTP client honouring `config.timeout`.
    pub fn from_config(config: AutofillConfig) -> Result<Self, reqwest::Error> {
        let client = ReqwestClient::builder().timeout(config.timeout).build()?;
        Ok(Self::new(Arc::new(client), config))
    }

    /// Whether an API key is configured.
    pub fn is_enabled(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// Look up `raw_name` and build a draft. Never fails: problems collapse
    /// into a draft with `success == false`.
    pub async fn resolve(&self, raw_name: &str) -> AutofillDraft {
        let name = raw_name.trim();
        if name.is_empty() {
            return AutofillDraft::failed();
        }

        let Some(api_key) = self.config.api_key.as_deref() else {
            tracing::debug!("autofill skipped: no API key configured");
            return AutofillDraft::failed();
        };

        match self.lookup(name, api_key).await {
            Ok(Some(draft)) => draft,
            Ok(None) => {
                tracing::debug!(name, "autofill found no candidate with ingredients");
                AutofillDraft::failed()
            }
            Err(e) => {
                tracing::warn!(name, error = %e, "autofill lookup failed");
                AutofillDraft::failed()
            }
        }
    }

    async fn lookup(
        &self,
        name: &str,
        api_key: &str,
    ) -> Result<Option<AutofillDraft>, ResolveError> {
        let hint = find_hint(name);
        let search_url = self.search_url(api_key, name, hint)?;

        tracing::debug!(name, hint, "autofill: searching");
        let body = self.client.fetch_text(&search_url).await?;
        let search: SearchResponse = serde_json::from_str(&body)?;

        for hit in search.results.iter().take(self.config.candidates) {
            let details_url = self.details_url(api_key, hit.id)?;
            let body = self.client.fetch_text(&details_url).await?;
            let details: RecipeDetails = serde_json::from_str(&body)?;

            if let Some(draft) = AutofillDraft::from_details(&details) {
                tracing::debug!(name, candidate = hit.id, "autofill: candidate accepted");
                return Ok(Some(draft));
            }
            tracing::debug!(name, candidate = hit.id, "autofill: candidate has no ingredients");
        }

        Ok(None)
    }

    fn endpoint(&self, path: &str) -> Result<Url, FetchError> {
        let base = self.config.base_url.trim_end_matches('/');
        Url::parse(&format!("{}{}", base, path))
            .map_err(|e| FetchError::InvalidUrl(e.to_string()))
    }

    /// URL of the search request for `name`, optionally refined by an ingredient hint.
    pub fn search_url(
        &self,
        api_key: &str,
        name: &str,
        hint: Option<&str>,
    ) -> Result<String, FetchError> {
        let mut url = self.endpoint("/recipes/complexSearch")?;
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("apiKey", api_key)
                .append_pair("query", name)
                .append_pair("number", &self.config.candidates.to_string());
            if let Some(hint) = hint {
                query.append_pair("titleMatch", hint);
            }
        }
        Ok(url.into())
    }

    /// URL of the details request for a search result.
    pub fn details_url(&self, api_key: &str, id: i64) -> Result<String, FetchError> {
        let mut url = self.endpoint(&format!("/recipes/{}/information", id))?;
        url.query_pairs_mut()
            .append_pair("apiKey", api_key)
            .append_pair("includeNutrition", "false");
        Ok(url.into())
    }
}
