//! SVG document construction and export

use crate::io::error::{Result, file_system_error};
use crate::pattern::result::PatternResult;
use crate::shape::geometry::Point;
use crate::shape::primitive::{Geometry, Gradient, GradientKind, Paint, ShapePrimitive};
use std::path::Path;
use svg::Document;
use svg::node::Node;
use svg::node::element::path::Data;
use svg::node::element::{
    Circle, Definitions, LinearGradient, Polygon, RadialGradient, Rectangle, Stop,
};

/// Format a coordinate with at most two decimals, trailing zeros trimmed
pub fn format_number(value: f64) -> String {
    let mut text = format!("{value:.2}");
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    if text == "-0" {
        text = "0".to_string();
    }
    text
}

/// Id the `index`-th gradient definition is registered under
pub fn gradient_id(index: usize) -> String {
    format!("gradient_{index}")
}

// Path data is single precision; round first so it prints like the attributes
fn path_number(value: f64) -> f32 {
    ((value * 100.0).round() / 100.0) as f32 + 0.0
}

fn format_points(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", format_number(p.x), format_number(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn path_data(points: &[Point]) -> Data {
    points.iter().enumerate().fold(Data::new(), |data, (i, p)| {
        let position = (path_number(p.x), path_number(p.y));
        if i == 0 {
            data.move_to(position)
        } else {
            data.line_to(position)
        }
    })
}

fn gradient_stops(gradient: &Gradient) -> [Stop; 2] {
    [gradient.from, gradient.to].map(|stop| {
        Stop::new()
            .set("offset", format!("{}%", format_number(stop.offset * 100.0)))
            .set("stop-color", stop.color.to_string())
            .set("stop-opacity", format_number(stop.opacity))
    })
}

fn gradient_node(id: &str, gradient: &Gradient) -> Box<dyn Node> {
    let [from, to] = gradient_stops(gradient);
    match gradient.kind {
        GradientKind::Radial => Box::new(
            RadialGradient::new()
                .set("id", id)
                .set("cx", "50%")
                .set("cy", "50%")
                .set("r", "50%")
                .add(from)
                .add(to),
        ),
        GradientKind::Linear => Box::new(
            LinearGradient::new()
                .set("id", id)
                .set("x1", "0%")
                .set("y1", "0%")
                .set("x2", "100%")
                .set("y2", "100%")
                .add(from)
                .add(to),
        ),
    }
}

// Gradient stops carry their own opacity, so gradient shapes omit the attribute
fn paint_attributes(
    paint: &Paint,
    opacity: f64,
    gradient: Option<&str>,
) -> Vec<(&'static str, String)> {
    match (paint, gradient) {
        (Paint::Gradient(_), Some(id)) => vec![("fill", format!("url(#{id})"))],
        (Paint::Stroke { color, width }, _) => vec![
            ("fill", "none".to_string()),
            ("stroke", color.to_string()),
            ("stroke-width", format_number(*width)),
            ("opacity", format_number(opacity)),
        ],
        (paint, _) => vec![
            ("fill", paint.base_color().to_string()),
            ("opacity", format_number(opacity)),
        ],
    }
}

fn shape_node(shape: &ShapePrimitive, gradient: Option<&str>) -> Box<dyn Node> {
    let paint = paint_attributes(&shape.paint, shape.opacity, gradient);
    match &shape.geometry {
        Geometry::Circle { center, radius } => {
            let circle = Circle::new()
                .set("cx", format_number(center.x))
                .set("cy", format_number(center.y))
                .set("r", format_number(*radius));
            Box::new(paint.into_iter().fold(circle, |el, (k, v)| el.set(k, v)))
        }
        Geometry::Polygon { points } => {
            let polygon = Polygon::new().set("points", format_points(points));
            Box::new(paint.into_iter().fold(polygon, |el, (k, v)| el.set(k, v)))
        }
        Geometry::Path { points } => {
            let path = svg::node::element::Path::new().set("d", path_data(points));
            Box::new(paint.into_iter().fold(path, |el, (k, v)| el.set(k, v)))
        }
    }
}

/// Build the document tree for a pattern
///
/// Layout: root element with explicit dimensions, an optional `<defs>` block
/// holding gradient definitions, one full-bounds background rectangle, then
/// every shape in draw order.
pub fn document(result: &PatternResult) -> Document {
    let canvas = result.canvas();
    let width = format_number(canvas.width);
    let height = format_number(canvas.height);

    let mut document = Document::new()
        .set("width", width.as_str())
        .set("height", height.as_str())
        .set("viewBox", format!("0 0 {width} {height}"));

    // Ids follow shape order so each gradient shape finds its definition
    let mut definitions = Definitions::new();
    let mut ids = Vec::with_capacity(result.shapes().len());
    let mut next_gradient = 0;
    for shape in result.shapes() {
        if let Paint::Gradient(gradient) = &shape.paint {
            let id = gradient_id(next_gradient);
            next_gradient += 1;
            definitions = definitions.add(gradient_node(&id, gradient));
            ids.push(Some(id));
        } else {
            ids.push(None);
        }
    }
    if next_gradient > 0 {
        document = document.add(definitions);
    }

    document = document.add(
        Rectangle::new()
            .set("x", 0)
            .set("y", 0)
            .set("width", width.as_str())
            .set("height", height.as_str())
            .set("fill", canvas.background.to_string()),
    );

    result
        .shapes()
        .iter()
        .zip(&ids)
        .fold(document, |document, (shape, id)| {
            document.add(shape_node(shape, id.as_deref()))
        })
}

/// Serialize a pattern as a standalone SVG document
pub fn render(result: &PatternResult) -> String {
    document(result).to_string()
}

/// Write a pattern to disk as SVG, creating parent directories
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The file cannot be written
pub fn write_svg(result: &PatternResult, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system_error(parent, "create directory", e))?;
    }

    svg::save(output_path, &document(result))
        .map_err(|e| file_system_error(output_path, "write pattern", e))?;

    Ok(())
}
