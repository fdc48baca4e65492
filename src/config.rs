use crate::error::{config_error, ReportResult};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use url::Url;

/// Endpoint serving the time entries when `TIME_ENTRIES_URL` is not set
pub const DEFAULT_TIME_ENTRIES_URL: &str = "https://rc-vault-fap-live-1.azurewebsites.net/api/gettimeentries?code=vO17RnE8vuzXzPJo5eaLLjXjmRW07law99QTD90zat9FfOQJKKUcgQ==";

/// Directory the reports are written to when `OUTPUT_DIR` is not set
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Main configuration structure for the report run
#[derive(Debug, Clone)]
pub struct Config {
    /// Endpoint returning the JSON array of time entries
    pub time_entries_url: Url,
    /// Directory for `employee_hours.html` and `employee_hours.png`
    pub output_dir: PathBuf,
    /// Font used for chart labels; system fonts are probed when unset
    pub font_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the environment, falling back to defaults
    pub fn load() -> ReportResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        Self::from_vars(
            env::var("TIME_ENTRIES_URL").ok(),
            env::var("OUTPUT_DIR").ok(),
            env::var("REPORT_FONT_PATH").ok(),
        )
    }

    /// Build a config from optional raw values; empty values count as unset
    pub fn from_vars(
        time_entries_url: Option<String>,
        output_dir: Option<String>,
        font_path: Option<String>,
    ) -> ReportResult<Self> {
        let raw_url =
            non_empty(time_entries_url).unwrap_or_else(|| DEFAULT_TIME_ENTRIES_URL.to_string());
        let time_entries_url = Url::parse(&raw_url)
            .map_err(|e| config_error(&format!("Invalid TIME_ENTRIES_URL '{}': {}", raw_url, e)))?;

        if !matches!(time_entries_url.scheme(), "http" | "https") {
            return Err(config_error(&format!(
                "TIME_ENTRIES_URL must use http or https, got '{}'",
                time_entries_url.scheme()
            )));
        }

        let output_dir = non_empty(output_dir)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

        Ok(Config {
            time_entries_url,
            output_dir,
            font_path: non_empty(font_path).map(PathBuf::from),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_vars(None, None, None).unwrap();
        assert_eq!(config.time_entries_url.as_str(), DEFAULT_TIME_ENTRIES_URL);
        assert_eq!(config.output_dir, PathBuf::from("output"));
        assert!(config.font_path.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_vars(
            Some("http://127.0.0.1:8080/entries".to_string()),
            Some("reports".to_string()),
            Some("/tmp/font.ttf".to_string()),
        )
        .unwrap();
        assert_eq!(config.time_entries_url.as_str(), "http://127.0.0.1:8080/entries");
        assert_eq!(config.output_dir, PathBuf::from("reports"));
        assert_eq!(config.font_path, Some(PathBuf::from("/tmp/font.ttf")));
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = Config::from_vars(Some("  ".to_string()), Some(String::new()), None).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("output"));
        assert_eq!(config.time_entries_url.as_str(), DEFAULT_TIME_ENTRIES_URL);
    }

    #[test]
    fn test_invalid_url_is_config_error() {
        let result = Config::from_vars(Some("not a url".to_string()), None, None);
        assert!(matches!(result, Err(crate::error::Error::Config(_))));

        let result = Config::from_vars(Some("ftp://example.com/x".to_string()), None, None);
        assert!(matches!(result, Err(crate::error::Error::Config(_))));
    }
}
