use crate::core::config::{FigureSize, SubplotParams};

/// Pixel dimensions of the canvas and the padding around the plotting area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasLayout {
    pub width: u32,
    pub height: u32,
    pub margin_left: u32,
    pub margin_right: u32,
    pub margin_top: u32,
    pub margin_bottom: u32,
}

impl CanvasLayout {
    pub fn plot_width(&self) -> u32 {
        self.width - self.margin_left - self.margin_right
    }

    pub fn plot_height(&self) -> u32 {
        self.height - self.margin_top - self.margin_bottom
    }
}

/// Size the canvas so that the plotting area, not the whole canvas,
/// matches the requested figure size.
pub fn canvas_for(figure: &FigureSize, subplot: &SubplotParams) -> CanvasLayout {
    let canvas_w = figure.width_inches() / (subplot.right - subplot.left) * figure.dpi;
    let canvas_h = figure.height_inches() / (subplot.top - subplot.bottom) * figure.dpi;

    let plot_w = (figure.width_inches() * figure.dpi).round() as u32;
    let plot_h = (figure.height_inches() * figure.dpi).round() as u32;
    let width = (canvas_w.round() as u32).max(plot_w);
    let height = (canvas_h.round() as u32).max(plot_h);

    let margin_left = ((subplot.left * canvas_w).round() as u32).min(width - plot_w);
    let margin_bottom = ((subplot.bottom * canvas_h).round() as u32).min(height - plot_h);

    CanvasLayout {
        width,
        height,
        margin_left,
        margin_right: width - plot_w - margin_left,
        margin_top: height - plot_h - margin_bottom,
        margin_bottom,
    }
}

/// Font size in points to pixels at `dpi`
#[inline]
pub fn points_to_pixels(points: f64, dpi: f64) -> f64 {
    points * dpi / 72.0
}
