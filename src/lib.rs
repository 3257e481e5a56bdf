pub mod config;
pub mod dto;
pub mod error;
pub mod tmdb;
mod text;

pub use config::{ImageConfig, TmdbConfig};
pub use dto::{map_array, CastMember, MovieDetails, MovieSummary, Review};
pub use error::{Error, Result};
pub use tmdb::{TmdbApi, TmdbClient};
