use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use reddit_client::RedditClient;
use sentipulse_common::Config;
use sentipulse_job::{run_once, RunOutcome};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("sentipulse_job=info".parse()?)
                .add_directive("reddit_client=info".parse()?),
        )
        .init();

    let config = Config::from_env();
    let client = RedditClient::new();

    match run_once(&config, &client).await? {
        RunOutcome::Persisted { path, score, posts } => {
            info!(path = %path.display(), score, posts, "Run complete, snapshot updated");
        }
        RunOutcome::Skipped => {
            info!("Run complete, no update");
        }
    }

    Ok(())
}
