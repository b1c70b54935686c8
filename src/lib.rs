pub mod app;
pub mod config;
pub mod destination;
pub mod error;
pub mod jobs;
pub mod observability;
pub mod worker;
