//! Run orchestration: fetch titles, filter by term, score, persist.
//!
//! One linear pass per invocation. Fetch failures never abort the run;
//! they degrade to an empty title list, which ends the run without
//! touching the previous snapshot. Filesystem failures do abort.

use std::path::PathBuf;

use anyhow::Result;
use async_trait::async_trait;
use tracing::{info, warn};

use reddit_client::RedditClient;
use sentipulse_common::{Config, ResultRecord};

use crate::sentiment;
use crate::snapshot;

/// Seam between the pipeline and the listing API, so tests can substitute
/// canned or failing sources.
#[async_trait]
pub trait TitleSource: Send + Sync {
    async fn hot_titles(&self, subreddit: &str, limit: u32) -> reddit_client::Result<Vec<String>>;
}

#[async_trait]
impl TitleSource for RedditClient {
    async fn hot_titles(&self, subreddit: &str, limit: u32) -> reddit_client::Result<Vec<String>> {
        RedditClient::hot_titles(self, subreddit, limit).await
    }
}

/// Terminal state of one run.
#[derive(Debug, PartialEq)]
pub enum RunOutcome {
    /// No titles matched (or the fetch failed); nothing was written.
    Skipped,
    Persisted {
        path: PathBuf,
        score: f64,
        posts: usize,
    },
}

/// Retain titles whose lowercase form contains the lowercase term.
/// Source order and duplicates are preserved.
pub fn filter_titles(titles: Vec<String>, term: &str) -> Vec<String> {
    let needle = term.to_lowercase();
    titles
        .into_iter()
        .filter(|title| title.to_lowercase().contains(&needle))
        .collect()
}

/// Fetch the hot listing and filter it. Any fetch error is logged with its
/// kind and degraded to an empty list; a failed fetch skips this run's
/// update instead of crashing the job.
pub async fn fetch_filtered(source: &dyn TitleSource, config: &Config) -> Vec<String> {
    match source.hot_titles(&config.subreddit, config.fetch_limit).await {
        Ok(titles) => filter_titles(titles, &config.term),
        Err(err) => {
            warn!(error = %err, subreddit = %config.subreddit, "Fetch failed, skipping this run");
            Vec::new()
        }
    }
}

/// Drive one full run. Returns what happened so callers (and tests) can
/// tell a no-op from a persisted update.
pub async fn run_once(config: &Config, source: &dyn TitleSource) -> Result<RunOutcome> {
    info!(term = %config.term, subreddit = %config.subreddit, "Scanning hot titles");

    let titles = fetch_filtered(source, config).await;
    if titles.is_empty() {
        info!("No matching titles; snapshot left unchanged");
        return Ok(RunOutcome::Skipped);
    }

    let mean = sentiment::mean_compound(&titles);
    let record = ResultRecord::new(mean, titles.len(), &config.term, &config.subreddit);
    snapshot::persist(&record, &config.output_path)?;

    Ok(RunOutcome::Persisted {
        path: config.output_path.clone(),
        score: record.sentiment_score,
        posts: record.total_posts_analyzed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn filter_is_case_insensitive() {
        let kept = filter_titles(
            titles(&["I love bitcoin today", "I love ethereum today"]),
            "Bitcoin",
        );
        assert_eq!(kept, vec!["I love bitcoin today"]);
    }

    #[test]
    fn filter_preserves_order_and_duplicates() {
        let kept = filter_titles(
            titles(&["BITCOIN up", "no match", "bitcoin down", "BITCOIN up"]),
            "bitcoin",
        );
        assert_eq!(kept, vec!["BITCOIN up", "bitcoin down", "BITCOIN up"]);
    }

    #[test]
    fn filter_matches_substring_anywhere() {
        let kept = filter_titles(titles(&["Thoughts on Bitcoin?"]), "bitcoin");
        assert_eq!(kept.len(), 1);
    }
}
