pub mod models;

pub use models::TimeEntry;

use crate::error::{format_error, network_error, ReportResult};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};
use url::Url;

/// Source of the raw time entries document
#[async_trait]
pub trait TimeEntrySource: Send + Sync {
    /// Fetch the raw JSON body
    async fn fetch(&self) -> ReportResult<String>;
}

/// Time entries served over HTTP(S)
#[derive(Debug, Clone)]
pub struct HttpTimeEntrySource {
    client: Client,
    url: Url,
}

impl HttpTimeEntrySource {
    pub fn new(url: Url) -> Self {
        Self {
            client: Client::new(),
            url,
        }
    }
}

#[async_trait]
impl TimeEntrySource for HttpTimeEntrySource {
    async fn fetch(&self) -> ReportResult<String> {
        fetch_time_entries(&self.client, &self.url).await
    }
}

/// Issue a single GET and return the body text; any failure is fatal
pub async fn fetch_time_entries(client: &Client, url: &Url) -> ReportResult<String> {
    info!("Fetching time entries from {}", url.host_str().unwrap_or("<unknown host>"));

    let response = client.get(url.clone()).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(network_error(&format!(
            "Time entries request failed with status {}",
            status
        )));
    }

    let body = response.text().await?;
    debug!("Received {} bytes of time entries", body.len());

    Ok(body)
}

/// Deserialize the body into time entries
pub fn parse_time_entries(body: &str) -> ReportResult<Vec<TimeEntry>> {
    let entries: Vec<TimeEntry> = serde_json::from_str(body).map_err(|e| {
        format_error(&format!("Time entries are not an array of records: {}", e))
    })?;

    info!("Parsed {} time entries", entries.len());
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_parse_wire_format() {
        let body = r#"[
            {"employeeName":"Alice","starTimeUtc":"2024-01-01T08:00:00Z","endTimeUtc":"2024-01-01T12:00:00Z"},
            {"employeeName":null,"starTimeUtc":"2024-01-01T10:00:00Z","endTimeUtc":"2024-01-01T09:00:00Z"}
        ]"#;

        let entries = parse_time_entries(body).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].employee_name.as_deref(), Some("Alice"));
        assert_eq!(entries[0].start_time_utc, "2024-01-01T08:00:00Z");
        assert_eq!(entries[1].employee_name, None);
        assert_eq!(entries[1].end_time_utc, "2024-01-01T09:00:00Z");
    }

    #[test]
    fn test_parse_pascal_case_and_extra_fields() {
        let body = r#"[{"Id":"1","EmployeeName":"Bob","StarTimeUtc":"2022-02-22 11:48:00","EndTimeUtc":"2022-02-22 13:00:00","EntryNotes":"x","DeletedOn":null}]"#;

        let entries = parse_time_entries(body).unwrap();
        assert_eq!(
            entries,
            vec![TimeEntry::new(Some("Bob"), "2022-02-22 11:48:00", "2022-02-22 13:00:00")]
        );
    }

    #[test]
    fn test_missing_name_is_allowed() {
        let body = r#"[{"starTimeUtc":"2024-01-01T08:00:00Z","endTimeUtc":"2024-01-01T09:00:00Z"}]"#;
        let entries = parse_time_entries(body).unwrap();
        assert_eq!(entries[0].employee_name, None);
    }

    #[test]
    fn test_parse_rejects_malformed_bodies() {
        for body in [
            "",
            "not json",
            r#"{"employeeName":"Alice"}"#,
            r#"[1, 2, 3]"#,
            r#"[{"employeeName":"Alice","endTimeUtc":"2024-01-01T12:00:00Z"}]"#,
            r#"[{"employeeName":"Alice","starTimeUtc":null,"endTimeUtc":"2024-01-01T12:00:00Z"}]"#,
        ] {
            let result = parse_time_entries(body);
            assert!(matches!(result, Err(Error::Format(_))), "accepted: {body}");
        }
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(parse_time_entries("[]").unwrap().is_empty());
    }
}
