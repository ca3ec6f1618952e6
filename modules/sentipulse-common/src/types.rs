use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One run's persisted snapshot. Field order here is the key order in the
/// output document; downstream readers rely on it staying stable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultRecord {
    /// Mean VADER compound polarity over the analyzed titles, rounded to
    /// 4 decimal places.
    pub sentiment_score: f64,
    pub timestamp_utc: DateTime<Utc>,
    pub total_posts_analyzed: usize,
    pub analyzed_term: String,
    pub source: String,
}

impl ResultRecord {
    /// Build a record for a completed scoring pass. Rounding happens here,
    /// at the persistence boundary; the scorer itself never rounds.
    pub fn new(mean_score: f64, titles_analyzed: usize, term: &str, subreddit: &str) -> Self {
        Self {
            sentiment_score: round4(mean_score),
            timestamp_utc: Utc::now(),
            total_posts_analyzed: titles_analyzed,
            analyzed_term: term.to_string(),
            source: format!("Reddit r/{subreddit}"),
        }
    }
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
