//! Job runner: the per-job retry loop and the fan-out over all jobs

use super::http::{DownloadError, HttpClient, HttpConfig};
use crate::error::MultiError;
use crate::jobs::Job;
use crate::observability::Metrics;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Download(#[from] DownloadError),

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no image found for ids {first_id}..={last_id} after {attempts} attempts")]
    AttemptsExhausted {
        first_id: u64,
        last_id: u64,
        attempts: u64,
    },

    #[error("job aborted: {0}")]
    Aborted(String),
}

pub type Result<T> = std::result::Result<T, FetchError>;

/// Settings for a [`Fetcher`]
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// Base URL, `/<id>` is appended
    pub source: String,
    /// Directory the images are written into
    pub dest_dir: PathBuf,
    /// `None` keeps bumping the id until an image is found
    pub max_attempts: Option<u32>,
    pub http: HttpConfig,
}

/// Fetches jobs concurrently into one destination directory
#[derive(Clone)]
pub struct Fetcher {
    client: HttpClient,
    source: Arc<str>,
    dest_dir: Arc<PathBuf>,
    max_attempts: Option<u32>,
    metrics: Arc<Metrics>,
}

impl Fetcher {
    pub fn new(config: FetcherConfig) -> std::result::Result<Self, reqwest::Error> {
        let client = HttpClient::new(&config.http)?;
        let source = config.source.trim_end_matches('/');

        Ok(Self {
            client,
            source: Arc::from(source),
            dest_dir: Arc::new(config.dest_dir),
            max_attempts: config.max_attempts,
            metrics: Arc::new(Metrics::new()),
        })
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn resource_url(&self, id: u64) -> String {
        format!("{}/{}", self.source, id)
    }

    pub fn output_path(&self, job: &Job) -> PathBuf {
        self.dest_dir.join(job.file_name())
    }

    /// Run every job concurrently and wait for all of them.
    ///
    /// One task is spawned per job with no concurrency cap. Failures are
    /// gathered in completion order; the result is `Ok` only if every job
    /// wrote its file.
    pub async fn run_all(
        &self,
        jobs: Vec<Job>,
    ) -> std::result::Result<(), MultiError<FetchError>> {
        let mut tasks = JoinSet::new();

        for job in jobs {
            let fetcher = self.clone();
            tasks.spawn(async move { fetcher.fetch_one(job).await });
        }

        let mut errors = MultiError::new();

        while let Some(joined) = tasks.join_next().await {
            let outcome = joined.unwrap_or_else(|e| Err(FetchError::Aborted(e.to_string())));

            if let Err(e) = outcome {
                self.metrics.job_failed();
                warn!(error = %e, "Job failed");
                errors.push(e);
            }
        }

        errors.into_result()
    }

    /// Fetch a single job, walking ids upward past placeholder responses.
    ///
    /// Transport, read and write failures end the job immediately.
    pub async fn fetch_one(&self, job: Job) -> Result<PathBuf> {
        let mut current = job.resource_id;
        let mut attempts: u64 = 0;

        let body = loop {
            attempts += 1;
            let url = self.resource_url(current);

            self.metrics.request_sent();
            let fetched = self.client.get(&url).await?;

            if fetched.is_image() {
                break fetched.body;
            }

            self.metrics.placeholder_skipped();
            debug!(
                url = %url,
                status = fetched.status.as_u16(),
                index = job.output_index,
                "Placeholder response, trying next id"
            );

            if let Some(max) = self.max_attempts {
                if attempts >= u64::from(max) {
                    return Err(FetchError::AttemptsExhausted {
                        first_id: job.resource_id,
                        last_id: current,
                        attempts,
                    });
                }
            }

            current += 1;
        };

        let path = self.output_path(&job);
        tokio::fs::write(&path, &body)
            .await
            .map_err(|source| FetchError::Write {
                path: path.clone(),
                source,
            })?;

        self.metrics.image_written();
        info!(
            path = %path.display(),
            resource_id = current,
            attempts,
            size = body.len(),
            "Image written"
        );

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetcher(source: &str) -> Fetcher {
        Fetcher::new(FetcherConfig {
            source: source.to_string(),
            dest_dir: PathBuf::from("/tmp/walls"),
            max_attempts: None,
            http: HttpConfig::default(),
        })
        .unwrap()
    }

    #[test]
    fn test_resource_url() {
        let fetcher = fetcher("http://example.com/download");
        assert_eq!(fetcher.resource_url(42), "http://example.com/download/42");
    }

    #[test]
    fn test_resource_url_trims_trailing_slash() {
        let fetcher = fetcher("http://example.com/download/");
        assert_eq!(fetcher.resource_url(0), "http://example.com/download/0");
    }

    #[test]
    fn test_output_path_uses_index_not_id() {
        let fetcher = fetcher("http://example.com");
        let job = Job {
            resource_id: 129_999,
            output_index: 2,
        };
        assert_eq!(fetcher.output_path(&job), PathBuf::from("/tmp/walls/2.jpg"));
    }

    #[test]
    fn test_error_messages() {
        let err = FetchError::AttemptsExhausted {
            first_id: 10,
            last_id: 14,
            attempts: 5,
        };
        assert_eq!(
            err.to_string(),
            "no image found for ids 10..=14 after 5 attempts"
        );
    }

    #[test]
    fn test_attempt_count_exceeds_u32() {
        let attempts = u64::from(u32::MAX) + 1;
        let err = FetchError::AttemptsExhausted {
            first_id: 0,
            last_id: attempts - 1,
            attempts,
        };
        assert!(err.to_string().ends_with("after 4294967296 attempts"));
    }
}
