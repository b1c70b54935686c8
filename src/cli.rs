use autowall::config::Config;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "autowall")]
#[command(about = "Download several wallpapers from a source", long_about = None)]
pub struct Cli {
    /// Source of wallpapers; `/<id>` is appended for each request
    #[arg(short = 's', long)]
    pub source: Option<String>,

    /// Directory to store images (cleared first)
    #[arg(short = 'f', long)]
    pub store: Option<String>,

    /// Number of images to download
    #[arg(short = 'n', long)]
    pub images: Option<usize>,

    /// Give up on a job after this many requests
    #[arg(long)]
    pub max_attempts: Option<u32>,

    /// Seed for picking resource ids
    #[arg(long)]
    pub seed: Option<u64>,

    /// Configuration file (defaults to $AUTOWALL_CONFIG or ./autowall.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Flags win over file and environment values
    pub fn apply(&self, config: &mut Config) {
        if let Some(source) = &self.source {
            config.source.url = source.clone();
        }
        if let Some(store) = &self.store {
            config.store.path = store.clone();
        }
        if let Some(images) = self.images {
            config.jobs.images = images;
        }
        if let Some(max_attempts) = self.max_attempts {
            config.source.max_attempts = Some(max_attempts);
        }
        if let Some(seed) = self.seed {
            config.jobs.seed = Some(seed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_flags() {
        let cli = Cli::parse_from(["autowall", "-s", "http://h/x", "-f", "/tmp/w", "-n", "3"]);
        assert_eq!(cli.source.as_deref(), Some("http://h/x"));
        assert_eq!(cli.store.as_deref(), Some("/tmp/w"));
        assert_eq!(cli.images, Some(3));
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from([
            "autowall",
            "--images",
            "7",
            "--max-attempts",
            "100",
            "--seed",
            "9",
        ]);
        let mut config = Config::default();
        cli.apply(&mut config);

        assert_eq!(config.jobs.images, 7);
        assert_eq!(config.source.max_attempts, Some(100));
        assert_eq!(config.jobs.seed, Some(9));
        assert_eq!(config.store.path, "~/wallpapers");
    }

    #[test]
    fn test_flag_repairs_invalid_file_value() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("autowall.toml");
        std::fs::write(
            &config_path,
            r#"
[source]
url = "ftp://mirror.local/walls"
max_attempts = 0
            "#,
        )
        .unwrap();

        let mut config = Config::load_from_path(config_path).unwrap();
        assert!(config.validate().is_err());

        let cli = Cli::parse_from([
            "autowall",
            "--max-attempts",
            "5",
            "-s",
            "http://mirror.local/walls",
        ]);
        cli.apply(&mut config);

        assert!(config.validate().is_ok());
        assert_eq!(config.source.max_attempts, Some(5));
    }

    #[test]
    fn test_no_flags_keeps_config() {
        let cli = Cli::parse_from(["autowall"]);
        let mut config = Config::default();
        cli.apply(&mut config);

        assert_eq!(config.jobs.images, 30);
        assert_eq!(config.source.max_attempts, None);
    }
}
