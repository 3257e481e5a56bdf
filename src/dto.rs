//! Display-ready records mapped from raw TMDB payloads.
//!
//! Conversions are pure: every field of a mapped record always holds a
//! defined value, with absent source fields replaced by the defaults
//! documented on each struct. The raw record itself must be present;
//! `null` fails with [`Error::MissingData`].

use serde::Serialize;
use serde_json::Value;

use crate::config::ImageConfig;
use crate::error::{Error, Result};
use crate::text::strip_html_tags;

/// A movie as it appears in trending and search lists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieSummary {
    pub id: i64,
    pub title: String,
    /// Resolved absolute URL, or the configured placeholder when the
    /// record has no poster path.
    pub poster_url: String,
    pub vote_average: Option<f64>,
}

impl MovieSummary {
    pub fn from_raw(raw: &Value, images: &ImageConfig) -> Result<Self> {
        if raw.is_null() {
            return Err(Error::MissingData("movie"));
        }
        Ok(Self {
            id: raw.get("id").and_then(Value::as_i64).unwrap_or_default(),
            title: str_or_empty(raw, "title"),
            poster_url: resolve_image(raw.get("poster_path"), images),
            vote_average: raw.get("vote_average").and_then(Value::as_f64),
        })
    }
}

/// A single movie page: the summary fields plus detail-only ones.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieDetails {
    pub id: i64,
    pub title: String,
    pub poster_url: String,
    pub vote_average: Option<f64>,
    /// `round(vote_average * 10)`, always within 0..=100; `0` when the
    /// average is absent.
    pub vote_score: u32,
    /// First four characters of the release date, or empty.
    pub release_year: String,
    pub overview: String,
    pub genre_names: Vec<String>,
}

impl MovieDetails {
    /// Builds on [`MovieSummary::from_raw`] for the shared fields, so the
    /// list and detail views can never disagree about them.
    pub fn from_raw(raw: &Value, images: &ImageConfig) -> Result<Self> {
        let summary = MovieSummary::from_raw(raw, images)?;
        let vote_score = summary
            .vote_average
            .map(|avg| (avg * 10.0).round().clamp(0.0, 100.0) as u32)
            .unwrap_or(0);
        Ok(Self {
            id: summary.id,
            title: summary.title,
            poster_url: summary.poster_url,
            vote_average: summary.vote_average,
            vote_score,
            release_year: release_year(raw.get("release_date")),
            overview: str_or_empty(raw, "overview"),
            genre_names: genre_names(raw.get("genres")),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CastMember {
    pub id: i64,
    pub name: String,
    pub character: String,
    pub profile_url: String,
}

impl CastMember {
    pub fn from_raw(raw: &Value, images: &ImageConfig) -> Result<Self> {
        if raw.is_null() {
            return Err(Error::MissingData("cast"));
        }
        Ok(Self {
            id: raw.get("id").and_then(Value::as_i64).unwrap_or_default(),
            name: str_or_empty(raw, "name"),
            character: str_or_empty(raw, "character"),
            profile_url: resolve_image(raw.get("profile_path"), images),
        })
    }
}

/// A user review with markup removed from the body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Review {
    pub id: String,
    pub author: String,
    pub content: String,
}

impl Review {
    pub fn from_raw(raw: &Value) -> Result<Self> {
        if raw.is_null() {
            return Err(Error::MissingData("review"));
        }
        Ok(Self {
            id: str_or_empty(raw, "id"),
            author: str_or_empty(raw, "author"),
            content: raw
                .get("content")
                .and_then(Value::as_str)
                .map(strip_html_tags)
                .unwrap_or_default(),
        })
    }
}

/// Applies a single-record conversion across a raw JSON array, preserving
/// order and length.
///
/// The collection itself must be present and actually be an array; anything
/// else fails with [`Error::InvalidInput`]. A `null` element fails the
/// whole batch with the conversion's [`Error::MissingData`] rather than
/// being skipped.
pub fn map_array<T, F>(raw: Option<&Value>, convert: F) -> Result<Vec<T>>
where
    F: Fn(&Value) -> Result<T>,
{
    let Some(Value::Array(items)) = raw else {
        return Err(Error::InvalidInput("expected an array of records".into()));
    };
    items.iter().map(convert).collect()
}

fn str_or_empty(raw: &Value, key: &str) -> String {
    raw.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

// Upstream paths carry a leading slash and the configured base may carry a
// trailing one; the join must not produce "//".
fn resolve_image(path: Option<&Value>, images: &ImageConfig) -> String {
    match path.and_then(Value::as_str) {
        Some(p) if !p.is_empty() && !images.base_url.is_empty() => {
            format!(
                "{}/{}",
                images.base_url.trim_end_matches('/'),
                p.trim_start_matches('/')
            )
        }
        _ => images.placeholder.clone(),
    }
}

fn release_year(date: Option<&Value>) -> String {
    date.and_then(Value::as_str)
        .map(|d| d.chars().take(4).collect())
        .unwrap_or_default()
}

fn genre_names(raw: Option<&Value>) -> Vec<String> {
    let Some(Value::Array(genres)) = raw else {
        return Vec::new();
    };
    genres
        .iter()
        .filter_map(|g| g.get("name").and_then(Value::as_str))
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
