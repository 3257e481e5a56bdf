use anyhow::{Context, Result};
use std::env;

const API_BASE: &str = "https://api.themoviedb.org/3";
const IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w500";
const PLACEHOLDER_IMAGE: &str = "https://placehold.co/500x750?text=No+Picture";

/// Where poster and profile images resolve from, and the fallback shown
/// when a record carries no image path.
#[derive(Debug, Clone)]
pub struct ImageConfig {
    pub base_url: String,
    pub placeholder: String,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            base_url: IMAGE_BASE.to_string(),
            placeholder: PLACEHOLDER_IMAGE.to_string(),
        }
    }
}

/// Client configuration, built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct TmdbConfig {
    pub base_url: String,
    pub bearer_token: String,
    pub images: ImageConfig,
}

impl TmdbConfig {
    pub fn new(bearer_token: impl Into<String>) -> Self {
        Self {
            base_url: API_BASE.to_string(),
            bearer_token: bearer_token.into(),
            images: ImageConfig::default(),
        }
    }

    pub fn from_env() -> Result<Self> {
        let token = env::var("TMDB_ACCESS_TOKEN").context("TMDB_ACCESS_TOKEN not set")?;
        Ok(Self::new(token))
    }
}
