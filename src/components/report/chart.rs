//! PNG pie chart of each employee's share of total hours
//!
//! Angles are in degrees, measured clockwise from the positive x axis since
//! image rows grow downwards. The first slice starts at 0°.

use crate::components::hours::RankedEntry;
use crate::error::ReportResult;
use ab_glyph::{FontVec, PxScale};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use imageproc::drawing::{draw_polygon_mut, draw_text_mut, text_size};
use imageproc::point::Point;
use std::io::Cursor;
use tracing::{debug, info, warn};

pub const CANVAS_SIZE: u32 = 1200;
const CENTER: (f32, f32) = (CANVAS_SIZE as f32 / 2.0, CANVAS_SIZE as f32 / 2.0 + 75.0);
const RADIUS: f32 = 450.0;
/// Percentage labels sit inside the slice
const PERCENT_RADIUS: f32 = RADIUS * 0.6;
/// Employee names sit just outside the pie
const NAME_RADIUS: f32 = RADIUS * 1.15;

const CHART_TITLE: &str = "Employee Total Hours Worked (%)";
const TITLE_TOP: i32 = 40;
const TITLE_SCALE: f32 = 42.0;
const PERCENT_SCALE: f32 = 18.0;
const NAME_SCALE: f32 = 16.0;

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Slice colours, reused cyclically
pub const PALETTE: [Rgb<u8>; 6] = [
    Rgb([255, 0, 0]),   // red
    Rgb([0, 128, 0]),   // green
    Rgb([0, 0, 255]),   // blue
    Rgb([255, 255, 0]), // yellow
    Rgb([128, 0, 128]), // purple
    Rgb([255, 165, 0]), // orange
];

/// Geometry and labelling of one pie slice
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub name: String,
    pub start_angle: f64,
    pub sweep_angle: f64,
    /// Share of total hours, 0–100
    pub percent: f64,
    pub color: Rgb<u8>,
}

impl PieSlice {
    pub fn mid_angle(&self) -> f64 {
        self.start_angle + self.sweep_angle / 2.0
    }

    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.sweep_angle
    }

    /// One decimal place, halves rounded away from zero
    pub fn percent_label(&self) -> String {
        format!("{:.1}%", (self.percent * 10.0).round() / 10.0)
    }
}

/// Lay out one slice per ranked entry, in ranking order.
///
/// Returns no slices when the total is not positive, since shares are
/// undefined then.
pub fn pie_slices(ranked: &[RankedEntry]) -> Vec<PieSlice> {
    let total: f64 = ranked.iter().map(|entry| entry.hours).sum();
    if total <= 0.0 || !total.is_finite() {
        return Vec::new();
    }

    let mut start_angle = 0.0;
    ranked
        .iter()
        .enumerate()
        .map(|(position, entry)| {
            let share = entry.hours / total;
            let slice = PieSlice {
                name: entry.name.clone(),
                start_angle,
                sweep_angle: share * 360.0,
                percent: share * 100.0,
                color: PALETTE[position % PALETTE.len()],
            };
            start_angle += slice.sweep_angle;
            slice
        })
        .collect()
}

/// Point at `radius` from `center` along `angle` degrees
fn polar(center: (f32, f32), radius: f32, angle: f64) -> (f32, f32) {
    let radians = angle.to_radians();
    (
        center.0 + radius * radians.cos() as f32,
        center.1 + radius * radians.sin() as f32,
    )
}

fn to_point((x, y): (f32, f32)) -> Point<i32> {
    Point::new(x.round() as i32, y.round() as i32)
}

/// Outline of a slice as a closed polygon: the centre followed by the arc
fn slice_polygon(slice: &PieSlice) -> Vec<Point<i32>> {
    // Roughly one vertex per degree of arc
    let steps = (slice.sweep_angle.ceil() as usize).max(1);

    let mut points = vec![to_point(CENTER)];
    for step in 0..=steps {
        let angle = slice.start_angle + slice.sweep_angle * step as f64 / steps as f64;
        let point = to_point(polar(CENTER, RADIUS, angle));
        if points.last() != Some(&point) {
            points.push(point);
        }
    }

    // imageproc rejects polygons whose last vertex repeats the first
    while points.len() > 1 && points.first() == points.last() {
        points.pop();
    }
    points
}

/// Draw `text` centred on `anchor`
fn draw_centered_text(
    canvas: &mut RgbImage,
    font: &FontVec,
    scale: PxScale,
    anchor: (f32, f32),
    text: &str,
) {
    let (width, height) = text_size(scale, font, text);
    let x = anchor.0 - width as f32 / 2.0;
    let y = anchor.1 - height as f32 / 2.0;
    draw_text_mut(canvas, BLACK, x.round() as i32, y.round() as i32, scale, font, text);
}

fn draw_labels(canvas: &mut RgbImage, slices: &[PieSlice], font: &FontVec) {
    let title_scale = PxScale::from(TITLE_SCALE);
    let (title_width, _) = text_size(title_scale, font, CHART_TITLE);
    let title_left = (CANVAS_SIZE as i32 - title_width as i32) / 2;
    draw_text_mut(canvas, BLACK, title_left, TITLE_TOP, title_scale, font, CHART_TITLE);

    for slice in slices {
        let mid = slice.mid_angle();
        draw_centered_text(
            canvas,
            font,
            PxScale::from(PERCENT_SCALE),
            polar(CENTER, PERCENT_RADIUS, mid),
            &slice.percent_label(),
        );
        draw_centered_text(
            canvas,
            font,
            PxScale::from(NAME_SCALE),
            polar(CENTER, NAME_RADIUS, mid),
            &slice.name,
        );
    }
}

fn encode_png(canvas: RgbImage) -> ReportResult<Vec<u8>> {
    let mut buffer = Vec::new();
    DynamicImage::ImageRgb8(canvas).write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)?;
    Ok(buffer)
}

/// Render the ranking as a pie chart and return the PNG bytes.
///
/// Without a font the slices are drawn unlabelled.
pub fn render_chart(ranked: &[RankedEntry], font: Option<&FontVec>) -> ReportResult<Vec<u8>> {
    let mut canvas = RgbImage::from_pixel(CANVAS_SIZE, CANVAS_SIZE, WHITE);

    let slices = pie_slices(ranked);
    if slices.is_empty() && !ranked.is_empty() {
        warn!("Total hours are zero, the chart has no slices");
    }

    for slice in &slices {
        let polygon = slice_polygon(slice);
        if polygon.len() < 3 {
            debug!("Slice for {} is too thin to draw", slice.name);
            continue;
        }
        draw_polygon_mut(&mut canvas, &polygon, slice.color);
    }

    // Labels go on last so later slices cannot cover them
    match font {
        Some(font) => draw_labels(&mut canvas, &slices, font),
        None => warn!("Rendering chart without labels"),
    }

    let png = encode_png(canvas)?;
    info!("Rendered pie chart with {} slices ({} bytes)", slices.len(), png.len());
    Ok(png)
}
