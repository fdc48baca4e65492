use serde::Deserialize;

/// One raw clock-in/clock-out record as served by the time entries API
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TimeEntry {
    #[serde(rename = "employeeName", alias = "EmployeeName", default)]
    pub employee_name: Option<String>,
    /// Upstream spells this field `starTimeUtc`
    #[serde(rename = "starTimeUtc", alias = "StarTimeUtc")]
    pub start_time_utc: String,
    #[serde(rename = "endTimeUtc", alias = "EndTimeUtc")]
    pub end_time_utc: String,
}

impl TimeEntry {
    pub fn new(employee_name: Option<&str>, start_time_utc: &str, end_time_utc: &str) -> Self {
        Self {
            employee_name: employee_name.map(str::to_string),
            start_time_utc: start_time_utc.to_string(),
            end_time_utc: end_time_utc.to_string(),
        }
    }
}
