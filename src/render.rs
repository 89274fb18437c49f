use crate::core::config::RooflineConfig;
use crate::core::figure::{canvas_for, points_to_pixels, CanvasLayout};
use crate::core::format::format_tick;
use crate::core::layout::{HAlign, Label, RooflineLayout, TextRole};
use crate::error::{Result, RooflineError};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;
use tracing::{debug, info};

const FONT: &str = "sans-serif";
const CEILING_GREY: RGBColor = RGBColor(128, 128, 128);
const GRID_GREY: RGBColor = RGBColor(0xdd, 0xdd, 0xdd);
const MARKER_LINE: RGBColor = RGBColor(0xaa, 0xaa, 0xaa);
const MARKER_TEXT: RGBColor = RGBColor(0x88, 0x88, 0x88);
const POINT_RADIUS: i32 = 5;

// Matplotlib's default colour cycle
const POINT_COLORS: [RGBColor; 10] = [
    RGBColor(0x1f, 0x77, 0xb4),
    RGBColor(0xff, 0x7f, 0x0e),
    RGBColor(0x2c, 0xa0, 0x2c),
    RGBColor(0xd6, 0x27, 0x28),
    RGBColor(0x94, 0x67, 0xbd),
    RGBColor(0x8c, 0x56, 0x4b),
    RGBColor(0xe3, 0x77, 0xc2),
    RGBColor(0x7f, 0x7f, 0x7f),
    RGBColor(0xbc, 0xbd, 0x22),
    RGBColor(0x17, 0xbe, 0xcf),
];

/// Drawing backend, picked from the output file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Bitmap,
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "svg" => Ok(OutputFormat::Svg),
            "png" | "bmp" | "jpg" | "jpeg" => Ok(OutputFormat::Bitmap),
            _ => Err(RooflineError::UnsupportedFormat(ext)),
        }
    }
}

fn render_err<E: std::fmt::Display>(err: E) -> RooflineError {
    RooflineError::Render(err.to_string())
}

/// Draw `layout` into `config.output_path`
pub fn render(config: &RooflineConfig, layout: &RooflineLayout) -> Result<()> {
    let format = OutputFormat::from_path(&config.output_path)?;
    let canvas = canvas_for(&config.figure, &config.subplot);
    let size = (canvas.width, canvas.height);
    debug!(?format, width = size.0, height = size.1, "rendering roofline");

    match format {
        OutputFormat::Svg => {
            let root = SVGBackend::new(&config.output_path, size).into_drawing_area();
            draw(&root, config, layout, &canvas)?;
        }
        OutputFormat::Bitmap => {
            let root = BitMapBackend::new(&config.output_path, size).into_drawing_area();
            draw(&root, config, layout, &canvas)?;
        }
    }

    info!(path = %config.output_path.display(), "roofline written");
    Ok(())
}

fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    config: &RooflineConfig,
    layout: &RooflineLayout,
    canvas: &CanvasLayout,
) -> Result<()> {
    let dpi = config.figure.dpi;
    let px = |pt: f64| points_to_pixels(pt, dpi);
    let b = &config.axis_bounds;

    root.fill(&WHITE).map_err(render_err)?;

    // 1. Axes: margins sized so the plotting area matches the figure size
    let mut chart = ChartBuilder::on(root)
        .margin_top(canvas.margin_top)
        .margin_right(canvas.margin_right)
        .x_label_area_size(canvas.margin_bottom)
        .y_label_area_size(canvas.margin_left)
        .build_cartesian_2d((b.xmin..b.xmax).log_scale(), (b.ymin..b.ymax).log_scale())
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .bold_line_style(GRID_GREY.stroke_width(1))
        .light_line_style(WHITE.stroke_width(0))
        .x_desc("Arithmetic Intensity [FLOP/Byte]")
        .y_desc("Performance [GFLOP/s]")
        .axis_desc_style((FONT, px(15.0)))
        .label_style((FONT, px(10.0)))
        .x_label_formatter(&|x| format_tick(*x))
        .y_label_formatter(&|y| format_tick(*y))
        .draw()
        .map_err(render_err)?;

    // 2. Bandwidth slopes
    for slope in &layout.slopes {
        match layout.geometry.clip(&slope.segment) {
            Some(visible) => {
                chart
                    .draw_series(DashedLineSeries::new(
                        visible.points(),
                        8,
                        4,
                        CEILING_GREY.stroke_width(1),
                    ))
                    .map_err(render_err)?;
            }
            None => debug!(slope = %slope.name, "slope outside window"),
        }
        let origin = chart.backend_coord(&slope.label.position);
        draw_slanted(root, origin, &slope.label, dpi)?;
    }

    // 3. Compute roofs
    for roof in &layout.roofs {
        match layout.geometry.clip(&roof.segment) {
            Some(visible) => {
                chart
                    .draw_series(DashedLineSeries::new(
                        visible.points(),
                        8,
                        4,
                        CEILING_GREY.stroke_width(1),
                    ))
                    .map_err(render_err)?;
            }
            None => debug!(roof = %roof.name, "roof outside window"),
        }
        chart
            .draw_series(std::iter::once(Text::new(
                roof.label.text.clone(),
                roof.label.position,
                text_style(&roof.label, dpi),
            )))
            .map_err(render_err)?;
    }

    // 4. Benchmark markers
    for marker in &layout.markers {
        if let Some(visible) = layout.geometry.clip(&marker.segment) {
            chart
                .draw_series(DashedLineSeries::new(
                    visible.points(),
                    10,
                    10,
                    MARKER_LINE.stroke_width(1),
                ))
                .map_err(render_err)?;
        }
        chart
            .draw_series(std::iter::once(Text::new(
                marker.label.text.clone(),
                marker.label.position,
                text_style(&marker.label, dpi),
            )))
            .map_err(render_err)?;
    }

    // 5. Measurements
    for point in &layout.points {
        let color = POINT_COLORS[point.series % POINT_COLORS.len()];
        let series = chart
            .draw_series(std::iter::once(Circle::new(
                (point.intensity, point.performance),
                POINT_RADIUS,
                color.filled(),
            )))
            .map_err(render_err)?;
        if let Some(legend) = &point.legend {
            series
                .label(legend.clone())
                .legend(move |(x, y)| Circle::new((x, y), POINT_RADIUS, color.filled()));
        }

        if let Some(annotation) = &point.annotation {
            chart
                .draw_series(std::iter::once(Text::new(
                    annotation.text.clone(),
                    annotation.position,
                    text_style(annotation, dpi),
                )))
                .map_err(render_err)?;
        }
    }

    if layout.points.iter().any(|p| p.legend.is_some()) {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::LowerRight)
            .label_font((FONT, px(14.0)))
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(render_err)?;
    }

    // 6. Title, centred over the plotting area
    let title_style = (FONT, px(23.0))
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));
    root.draw(&Text::new(
        config.title.clone(),
        title_anchor(canvas),
        title_style,
    ))
    .map_err(render_err)?;

    root.present().map_err(render_err)?;
    Ok(())
}

fn title_anchor(canvas: &CanvasLayout) -> (i32, i32) {
    (
        (canvas.margin_left + canvas.plot_width() / 2) as i32,
        canvas.margin_top as i32 / 2,
    )
}

fn text_style(label: &Label, dpi: f64) -> TextStyle<'static> {
    let color = match label.role {
        TextRole::Ceiling => CEILING_GREY,
        TextRole::Benchmark => MARKER_TEXT,
        TextRole::Annotation => BLACK,
    };
    let hpos = match label.align {
        HAlign::Left => HPos::Left,
        HAlign::Right => HPos::Right,
    };
    let quarter_turns = label.rotation_deg.rem_euclid(360.0) as u32;
    // Anchored before rotation: a quarter turn counter-clockwise maps the
    // glyph tops onto the anchor side, keeping the text right of it
    let vpos = if quarter_turns == 90 {
        VPos::Top
    } else {
        VPos::Bottom
    };
    let style = (FONT, points_to_pixels(label.font_pt, dpi))
        .into_font()
        .color(&color)
        .pos(Pos::new(hpos, vpos));

    // plotters rotates clockwise
    match quarter_turns {
        90 => style.transform(FontTransform::Rotate270),
        180 => style.transform(FontTransform::Rotate180),
        270 => style.transform(FontTransform::Rotate90),
        _ => style,
    }
}

/// Lay glyphs out one by one along a baseline rotated by `label.rotation_deg`.
///
/// plotters only rotates text by quarter turns, so slope labels walk the
/// baseline in pixel space with upright glyphs.
fn draw_slanted<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    origin: (i32, i32),
    label: &Label,
    dpi: f64,
) -> Result<()> {
    let style = (FONT, points_to_pixels(label.font_pt, dpi))
        .into_font()
        .color(&CEILING_GREY)
        .pos(Pos::new(HPos::Left, VPos::Bottom));
    let (sin, cos) = label.rotation_deg.to_radians().sin_cos();

    let mut advance = 0.0;
    for ch in label.text.chars() {
        let glyph = ch.to_string();
        let x = f64::from(origin.0) + advance * cos;
        // Pixel y grows downwards
        let y = f64::from(origin.1) - advance * sin;
        root.draw(&Text::new(
            glyph.clone(),
            (x.round() as i32, y.round() as i32),
            style.clone(),
        ))
        .map_err(render_err)?;
        let (width, _) = root.estimate_text_size(&glyph, &style).map_err(render_err)?;
        advance += f64::from(width);
    }
    Ok(())
}
