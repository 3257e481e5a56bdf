use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::error;

use crate::config::TmdbConfig;
use crate::dto::{map_array, CastMember, MovieDetails, MovieSummary, Review};
use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct TmdbClient {
    client: Client,
    config: TmdbConfig,
}

/// The five operations the pages depend on. Behind a trait so tests and
/// downstream callers can substitute a fake.
#[async_trait]
pub trait TmdbApi: Send + Sync {
    async fn trending(&self) -> Result<Vec<MovieSummary>>;
    async fn search_movies(&self, query: &str) -> Result<Vec<MovieSummary>>;
    async fn movie_details(&self, id: u64) -> Result<MovieDetails>;
    async fn movie_cast(&self, id: u64) -> Result<Vec<CastMember>>;
    async fn movie_reviews(&self, id: u64) -> Result<Vec<Review>>;
}

impl TmdbClient {
    pub fn new(config: TmdbConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self::new(TmdbConfig::from_env()?))
    }

    async fn get_json(&self, operation: &'static str, path: &str) -> Result<Value> {
        let url = format!("{}/{}", self.config.base_url, path);
        let res = self
            .client
            .get(&url)
            .bearer_auth(&self.config.bearer_token)
            .send()
            .await?;
        let status = res.status();
        let text = res.text().await?;
        if !status.is_success() {
            return Err(Error::Status {
                operation,
                status,
                body: text,
            });
        }
        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl TmdbApi for TmdbClient {
    async fn trending(&self) -> Result<Vec<MovieSummary>> {
        self.get_json("trending", "trending/movie/day")
            .await
            .and_then(|data| {
                map_array(data.get("results"), |raw| {
                    MovieSummary::from_raw(raw, &self.config.images)
                })
            })
            .inspect_err(|e| error!("Error fetching trending movies: {}", e))
    }

    async fn search_movies(&self, query: &str) -> Result<Vec<MovieSummary>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(Error::InvalidInput("search query is required".into()));
        }
        let path = format!("search/movie?query={}", urlencoding::encode(query));
        self.get_json("search", &path)
            .await
            .and_then(|data| {
                map_array(data.get("results"), |raw| {
                    MovieSummary::from_raw(raw, &self.config.images)
                })
            })
            .inspect_err(|e| error!("Error searching movies for '{}': {}", query, e))
    }

    async fn movie_details(&self, id: u64) -> Result<MovieDetails> {
        let id = require_id(id)?;
        self.get_json("movie details", &format!("movie/{id}"))
            .await
            .and_then(|data| MovieDetails::from_raw(&data, &self.config.images))
            .inspect_err(|e| error!("Error fetching movie with id {}: {}", id, e))
    }

    async fn movie_cast(&self, id: u64) -> Result<Vec<CastMember>> {
        let id = require_id(id)?;
        self.get_json("movie cast", &format!("movie/{id}/credits"))
            .await
            .and_then(|data| {
                map_array(data.get("cast"), |raw| {
                    CastMember::from_raw(raw, &self.config.images)
                })
            })
            .inspect_err(|e| error!("Error fetching cast for movie with id {}: {}", id, e))
    }

    async fn movie_reviews(&self, id: u64) -> Result<Vec<Review>> {
        let id = require_id(id)?;
        self.get_json("movie reviews", &format!("movie/{id}/reviews"))
            .await
            .and_then(|data| map_array(data.get("results"), Review::from_raw))
            .inspect_err(|e| error!("Error fetching reviews for movie with id {}: {}", id, e))
    }
}

// TMDB has never issued id 0, so a zero id is treated as absent rather
// than looked up.
fn require_id(id: u64) -> Result<u64> {
    if id == 0 {
        return Err(Error::InvalidInput("movie id is required".into()));
    }
    Ok(id)
}
