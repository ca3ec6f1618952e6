use std::env;
use std::path::PathBuf;

/// Job configuration. Defaults match the deployed constants; every field can
/// be overridden through environment variables so a deploy can retarget the
/// job without a rebuild.
#[derive(Debug, Clone)]
pub struct Config {
    /// Term to match in post titles (case-insensitive substring).
    pub term: String,
    /// Subreddit whose hot listing is fetched.
    pub subreddit: String,
    /// Where the JSON snapshot is written.
    pub output_path: PathBuf,
    /// Maximum number of listing items to request.
    pub fetch_limit: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            term: "Bitcoin".to_string(),
            subreddit: "cryptocurrency".to_string(),
            output_path: PathBuf::from("api_data/data.json"),
            fetch_limit: 15,
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to the
    /// defaults for anything unset.
    /// Panics with a clear message if SENTIPULSE_FETCH_LIMIT is not a number.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            term: env::var("SENTIPULSE_TERM").unwrap_or(defaults.term),
            subreddit: env::var("SENTIPULSE_SUBREDDIT").unwrap_or(defaults.subreddit),
            output_path: env::var("SENTIPULSE_OUTPUT_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_path),
            fetch_limit: match env::var("SENTIPULSE_FETCH_LIMIT") {
                Ok(raw) => raw
                    .parse()
                    .expect("SENTIPULSE_FETCH_LIMIT must be a number"),
                Err(_) => defaults.fetch_limit,
            },
        }
    }
}
