//! Title scoring: mean VADER compound polarity.

use vader_sentiment::SentimentIntensityAnalyzer;

/// Mean compound polarity over `titles`, in [-1.0, 1.0]. Returns exactly
/// 0.0 for empty input without touching the analyzer. No rounding here;
/// that belongs to the snapshot record.
pub fn mean_compound(titles: &[String]) -> f64 {
    if titles.is_empty() {
        return 0.0;
    }

    let analyzer = SentimentIntensityAnalyzer::new();
    let sum: f64 = titles
        .iter()
        .map(|title| compound(&analyzer, title))
        .sum();
    sum / titles.len() as f64
}

fn compound(analyzer: &SentimentIntensityAnalyzer, text: &str) -> f64 {
    analyzer
        .polarity_scores(text)
        .get("compound")
        .copied()
        .unwrap_or(0.0)
}
