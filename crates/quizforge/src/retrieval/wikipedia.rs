//! Wikipedia retrieval client
//!
//! Queries the MediaWiki API for the single top-ranked article matching a
//! free-text topic, then fetches its plain-text extract. A topic with no
//! matching article is a "no context" result, not an error.

use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

use crate::config::WikipediaConfig;
use crate::error::{Error, Result};

/// The top-ranked reference article for a topic
#[derive(Debug, Clone, PartialEq)]
pub struct WikipediaArticle {
    pub title: String,
    pub extract: String,
}

/// MediaWiki API client
pub struct WikipediaClient {
    client: Client,
    config: WikipediaConfig,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    query: Option<SearchQuery>,
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    title: String,
}

#[derive(Debug, Deserialize)]
struct ExtractResponse {
    #[serde(default)]
    query: Option<ExtractQuery>,
}

#[derive(Debug, Deserialize)]
struct ExtractQuery {
    #[serde(default)]
    pages: HashMap<String, ExtractPage>,
}

#[derive(Debug, Deserialize)]
struct ExtractPage {
    title: String,
    #[serde(default)]
    extract: String,
}

impl WikipediaClient {
    /// Create a new client
    pub fn new(config: &WikipediaConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("quizforge/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            config: config.clone(),
        }
    }

    /// Retrieve the single best-matching article for `topic`.
    /// Returns `Ok(None)` when the search has no hits or the winning page
    /// carries no extract text.
    pub async fn search_top_article(&self, topic: &str) -> Result<Option<WikipediaArticle>> {
        let search: SearchResponse = self
            .get(&[
                ("action", "query"),
                ("list", "search"),
                ("srsearch", topic),
                ("srlimit", "1"),
                ("format", "json"),
            ])
            .await?;

        let Some(title) = top_search_hit(&search) else {
            tracing::info!("No Wikipedia article matched topic '{}'", topic);
            return Ok(None);
        };

        let extract: ExtractResponse = self
            .get(&[
                ("action", "query"),
                ("prop", "extracts"),
                ("explaintext", "1"),
                ("redirects", "1"),
                ("titles", title.as_str()),
                ("format", "json"),
            ])
            .await?;

        Ok(first_extract(extract))
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, params: &[(&str, &str)]) -> Result<T> {
        let response = self
            .client
            .get(&self.config.api_url)
            .query(params)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Wikipedia(format!(
                "API returned HTTP {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| Error::Wikipedia(format!("Failed to decode API response: {}", e)))
    }
}

/// Title of the top search hit, if any
fn top_search_hit(response: &SearchResponse) -> Option<String> {
    response
        .query
        .as_ref()?
        .search
        .first()
        .map(|hit| hit.title.clone())
}

/// First page with a non-empty extract, if any
fn first_extract(response: ExtractResponse) -> Option<WikipediaArticle> {
    let pages = response.query?.pages;
    pages
        .into_values()
        .find(|page| !page.extract.trim().is_empty())
        .map(|page| WikipediaArticle {
            title: page.title,
            extract: page.extract,
        })
}
