//! HTML table report of total hours per employee

use crate::components::hours::RankedEntry;

/// Rows below this many hours are highlighted
pub const LOW_HOURS_THRESHOLD: f64 = 100.0;

/// CSS class marking a low-hours row
pub const LOW_HOURS_CLASS: &str = "low-hours";

const REPORT_TITLE: &str = "Employee Work Report";
const REPORT_HEADING: &str = "Employee Total Hours Worked";

/// Escape HTML special characters
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn styles() -> &'static str {
    r#"
        body { font-family: Arial, sans-serif; margin: 40px; background: #f7f7f7; }
        table { border-collapse: collapse; width: 60%; margin: auto; background: #fff; }
        th, td { border: 1px solid #ccc; padding: 10px 15px; text-align: left; }
        th { background-color: #4CAF50; color: white; }
        tr:nth-child(even) { background-color: #f2f2f2; }
        .low-hours { background-color: #ffcccc !important; }
        h2 { text-align: center; }
    "#
}

/// Whether a row gets the low-hours marker
pub fn is_low_hours(hours: f64) -> bool {
    hours < LOW_HOURS_THRESHOLD
}

fn render_row(out: &mut String, entry: &RankedEntry) {
    let class_attr = if is_low_hours(entry.hours) {
        format!(r#" class="{}""#, LOW_HOURS_CLASS)
    } else {
        String::new()
    };

    out.push_str(&format!(
        r#"
            <tr{}>
                <td>{}</td>
                <td>{:.2}</td>
            </tr>"#,
        class_attr,
        escape_html(&entry.name),
        entry.hours
    ));
}

/// Render the ranking as a self-contained HTML document
pub fn render_html(ranked: &[RankedEntry]) -> String {
    let mut html = format!(
        r#"<!DOCTYPE html>
<html>
    <head>
        <meta charset="utf-8">
        <title>{}</title>
        <style>{}</style>
    </head>
    <body>
        <h2>{}</h2>
        <table>
            <tr>
                <th>Employee Name</th>
                <th>Total Hours Worked</th>
            </tr>"#,
        REPORT_TITLE,
        styles(),
        REPORT_HEADING
    );

    for entry in ranked {
        render_row(&mut html, entry);
    }

    html.push_str(
        r#"
        </table>
    </body>
</html>
"#,
    );
    html
}
