//! Top-level pipeline: prepare the destination, generate jobs, fetch them all

use crate::config::Config;
use crate::destination;
use crate::error::Error;
use crate::jobs;
use crate::observability::MetricsSnapshot;
use crate::worker::{Fetcher, FetcherConfig, HttpConfig};
use tracing::info;

/// Run one complete download.
///
/// Any destination preparation failure, including partially failed
/// clearing, aborts before the first request is made.
pub async fn run(config: &Config) -> Result<MetricsSnapshot, Error> {
    let dest_dir = destination::expand_home(&config.store.path)?;
    destination::prepare(&dest_dir)?;

    let mut rng = jobs::rng(config.jobs.seed);
    let jobs = jobs::generate(config.jobs.images, config.jobs.id_range, &mut rng);

    let fetcher = Fetcher::new(FetcherConfig {
        source: config.source.url.clone(),
        dest_dir,
        max_attempts: config.source.max_attempts,
        http: HttpConfig {
            user_agent: config.source.user_agent.clone(),
        },
    })?;

    info!(
        images = jobs.len(),
        source = %config.source.url,
        "Starting download"
    );

    let result = fetcher.run_all(jobs).await;

    let stats = fetcher.metrics().snapshot();
    info!(
        requests = stats.requests_sent,
        placeholders = stats.placeholders_skipped,
        written = stats.images_written,
        failed = stats.jobs_failed,
        "Download finished"
    );

    result?;
    Ok(stats)
}
