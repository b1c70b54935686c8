//! Image fetch worker
//!
//! Spawns one task per job, each issuing GETs against `<source>/<id>` and
//! bumping the id until a real image comes back, then writing it to disk.

pub mod http;
pub mod runner;

pub use http::{DownloadError, HttpClient, HttpConfig, is_placeholder};
pub use runner::{FetchError, Fetcher, FetcherConfig};
