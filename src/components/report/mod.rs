pub mod chart;
pub mod fonts;
pub mod html;

pub use chart::{pie_slices, render_chart, PieSlice, PALETTE};
pub use fonts::load_label_font;
pub use html::{render_html, LOW_HOURS_CLASS, LOW_HOURS_THRESHOLD};

use crate::components::hours::RankedEntry;
use crate::error::ReportResult;
use ab_glyph::FontVec;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const HTML_FILE_NAME: &str = "employee_hours.html";
pub const PNG_FILE_NAME: &str = "employee_hours.png";

/// Both reports, fully rendered in memory
#[derive(Debug, Clone)]
pub struct Reports {
    pub html: String,
    pub png: Vec<u8>,
}

/// Where the reports were written
#[derive(Debug, Clone, PartialEq)]
pub struct ReportPaths {
    pub html: PathBuf,
    pub png: PathBuf,
}

/// Render both reports before anything touches the filesystem
pub fn build_reports(ranked: &[RankedEntry], font: Option<&FontVec>) -> ReportResult<Reports> {
    let html = render_html(ranked);
    let png = render_chart(ranked, font)?;
    Ok(Reports { html, png })
}

/// Write both reports into `dir`, creating it if needed
pub fn write_reports(dir: &Path, reports: &Reports) -> ReportResult<ReportPaths> {
    fs::create_dir_all(dir)?;

    let paths = ReportPaths {
        html: dir.join(HTML_FILE_NAME),
        png: dir.join(PNG_FILE_NAME),
    };

    fs::write(&paths.html, &reports.html)?;
    info!("{} generated successfully.", paths.html.display());

    fs::write(&paths.png, &reports.png)?;
    info!("{} generated successfully.", paths.png.display());

    Ok(paths)
}
