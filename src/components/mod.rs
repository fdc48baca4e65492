use crate::config::Config;
use crate::error::ReportResult;
use ab_glyph::FontVec;
use std::fmt;
use std::path::PathBuf;
use tracing::info;

// Export pipeline stages
pub mod hours;
pub mod report;
pub mod time_entries;

pub use hours::{aggregate_hours, rank_employees, EmployeeHours, RankedEntry};
pub use report::{build_reports, write_reports, ReportPaths, Reports};
pub use time_entries::{parse_time_entries, HttpTimeEntrySource, TimeEntry, TimeEntrySource};

/// Runs fetch, parse, aggregate, rank, render and write in sequence
pub struct ReportPipeline<S> {
    source: S,
    output_dir: PathBuf,
    font: Option<FontVec>,
}

impl<S> fmt::Debug for ReportPipeline<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReportPipeline")
            .field("output_dir", &self.output_dir)
            .field("has_font", &self.font.is_some())
            .finish()
    }
}

impl ReportPipeline<HttpTimeEntrySource> {
    /// Build the pipeline for a configured endpoint and output directory
    pub fn from_config(config: &Config) -> ReportResult<Self> {
        let font = report::load_label_font(config.font_path.as_deref())?;
        Ok(Self::new(
            HttpTimeEntrySource::new(config.time_entries_url.clone()),
            config.output_dir.clone(),
            font,
        ))
    }
}

impl<S: TimeEntrySource> ReportPipeline<S> {
    pub fn new(source: S, output_dir: PathBuf, font: Option<FontVec>) -> Self {
        Self {
            source,
            output_dir,
            font,
        }
    }

    /// Produce both reports; nothing is written unless every stage succeeds
    pub async fn run(&self) -> ReportResult<ReportPaths> {
        let body = self.source.fetch().await?;
        let entries = parse_time_entries(&body)?;
        let hours = aggregate_hours(&entries)?;
        let ranked = rank_employees(&hours);

        for entry in &ranked {
            info!("{}: {:.2} hours", entry.name, entry.hours);
        }

        let reports = build_reports(&ranked, self.font.as_ref())?;
        write_reports(&self.output_dir, &reports)
    }
}
