use anyhow::{bail, Context, Result};
use dotenvy::dotenv;
use std::env;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cinescope::{TmdbApi, TmdbClient};

const USAGE: &str = "usage: cinescope trending | search <query> | movie <id> | cast <id> | reviews <id>";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn check_env() -> Result<()> {
    if env::var("TMDB_ACCESS_TOKEN").is_err() {
        bail!("Missing required environment variable: TMDB_ACCESS_TOKEN");
    }
    info!("All required environment variables are set");
    Ok(())
}

fn parse_id(arg: Option<&String>) -> Result<u64> {
    let raw = arg.context(USAGE)?;
    raw.parse()
        .with_context(|| format!("invalid movie id '{raw}'"))
}

fn vote_label(vote: Option<f64>) -> String {
    vote.map(|v| format!("{v:.1}"))
        .unwrap_or_else(|| "-".to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    match dotenv() {
        Ok(path) => info!("Loaded environment from {:?}", path),
        Err(e) => warn!("No .env file loaded ({}) - relying on environment", e),
    }
    check_env()?;

    let client = TmdbClient::from_env()?;
    let args: Vec<String> = env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("trending") => {
            for movie in client.trending().await? {
                println!(
                    "{:>9}  {}  [{}]",
                    movie.id,
                    movie.title,
                    vote_label(movie.vote_average)
                );
            }
        }
        Some("search") => {
            let query = args[1..].join(" ");
            let movies = client.search_movies(&query).await?;
            if movies.is_empty() {
                println!("Nothing found");
            }
            for movie in &movies {
                println!(
                    "{:>9}  {}  [{}]",
                    movie.id,
                    movie.title,
                    vote_label(movie.vote_average)
                );
            }
        }
        Some("movie") => {
            let movie = client.movie_details(parse_id(args.get(1))?).await?;
            println!("{} ({})", movie.title, movie.release_year);
            println!("score: {}%", movie.vote_score);
            if !movie.genre_names.is_empty() {
                println!("genres: {}", movie.genre_names.join(", "));
            }
            println!("poster: {}", movie.poster_url);
            if !movie.overview.is_empty() {
                println!("\n{}", movie.overview);
            }
        }
        Some("cast") => {
            let cast = client.movie_cast(parse_id(args.get(1))?).await?;
            if cast.is_empty() {
                println!("No cast found");
            }
            for member in &cast {
                println!("{} as {}", member.name, member.character);
            }
        }
        Some("reviews") => {
            let reviews = client.movie_reviews(parse_id(args.get(1))?).await?;
            if reviews.is_empty() {
                println!("No reviews yet");
            }
            for review in &reviews {
                println!("--- {}\n{}\n", review.author, review.content);
            }
        }
        _ => bail!(USAGE),
    }
    Ok(())
}
