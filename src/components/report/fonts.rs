use crate::error::{config_error, ReportResult};
use ab_glyph::FontVec;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Common system locations of a sans-serif TrueType font
const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

fn read_font(path: &Path) -> Result<FontVec, String> {
    let data =
        fs::read(path).map_err(|e| format!("Failed to read font {}: {}", path.display(), e))?;
    FontVec::try_from_vec(data).map_err(|e| format!("Invalid font file {}: {}", path.display(), e))
}

/// Load the font for chart labels.
///
/// An explicitly configured font must load. Otherwise the system candidates
/// are probed and `None` is returned when none of them is usable.
pub fn load_label_font(configured: Option<&Path>) -> ReportResult<Option<FontVec>> {
    if let Some(path) = configured {
        let font = read_font(path).map_err(|e| config_error(&e))?;
        info!("Using chart font {}", path.display());
        return Ok(Some(font));
    }

    for candidate in SYSTEM_FONT_CANDIDATES {
        let path = Path::new(candidate);
        if !path.is_file() {
            continue;
        }
        match read_font(path) {
            Ok(font) => {
                info!("Using chart font {}", path.display());
                return Ok(Some(font));
            }
            Err(e) => debug!("Skipping font candidate: {}", e),
        }
    }

    warn!("No usable font found, set REPORT_FONT_PATH to label the chart");
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_configured_font_is_error() {
        let result = load_label_font(Some(Path::new("/definitely/not/here.ttf")));
        assert!(matches!(result, Err(crate::error::Error::Config(_))));
    }

    #[test]
    fn test_invalid_configured_font_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"this is not a font").unwrap();

        let result = load_label_font(Some(file.path()));
        assert!(matches!(result, Err(crate::error::Error::Config(_))));
    }

    #[test]
    fn test_probing_never_fails() {
        // Depends on the host fonts; only the absence of an error is checked
        assert!(load_label_font(None).is_ok());
    }
}
