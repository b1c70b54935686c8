use super::models::Config;
use reqwest::Url;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid source URL '{url}': {reason}")]
    InvalidSourceUrl { url: String, reason: String },

    #[error("Unsupported source URL scheme '{scheme}', expected 'http' or 'https'")]
    UnsupportedScheme { scheme: String },

    #[error("max_attempts must be at least 1 when set")]
    ZeroMaxAttempts,

    #[error("Store path must not be empty")]
    EmptyStorePath,

    #[error("id_range must be at least 1")]
    EmptyIdRange,
}

/// Validate the entire configuration
pub fn validate(config: &Config) -> Result<(), ValidationError> {
    validate_source(config)?;
    validate_store(config)?;
    validate_jobs(config)?;
    Ok(())
}

fn validate_source(config: &Config) -> Result<(), ValidationError> {
    let url = Url::parse(&config.source.url).map_err(|e| ValidationError::InvalidSourceUrl {
        url: config.source.url.clone(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(ValidationError::UnsupportedScheme {
                scheme: other.to_string(),
            });
        }
    }

    if config.source.max_attempts == Some(0) {
        return Err(ValidationError::ZeroMaxAttempts);
    }

    Ok(())
}

fn validate_store(config: &Config) -> Result<(), ValidationError> {
    if config.store.path.trim().is_empty() {
        return Err(ValidationError::EmptyStorePath);
    }
    Ok(())
}

fn validate_jobs(config: &Config) -> Result<(), ValidationError> {
    if config.jobs.id_range == 0 {
        return Err(ValidationError::EmptyIdRange);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_rejects_garbage_url() {
        let mut config = Config::default();
        config.source.url = "not a url".to_string();

        let result = validate(&config);
        assert!(matches!(
            result,
            Err(ValidationError::InvalidSourceUrl { .. })
        ));
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let mut config = Config::default();
        config.source.url = "ftp://example.com/images".to_string();

        match validate(&config) {
            Err(ValidationError::UnsupportedScheme { scheme }) => assert_eq!(scheme, "ftp"),
            other => panic!("expected UnsupportedScheme, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_zero_max_attempts() {
        let mut config = Config::default();
        config.source.max_attempts = Some(0);
        assert!(matches!(
            validate(&config),
            Err(ValidationError::ZeroMaxAttempts)
        ));

        config.source.max_attempts = Some(1);
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_rejects_empty_store_path() {
        let mut config = Config::default();
        config.store.path = "  ".to_string();
        assert!(matches!(
            validate(&config),
            Err(ValidationError::EmptyStorePath)
        ));
    }

    #[test]
    fn test_rejects_empty_id_range() {
        let mut config = Config::default();
        config.jobs.id_range = 0;
        assert!(matches!(
            validate(&config),
            Err(ValidationError::EmptyIdRange)
        ));
    }
}
