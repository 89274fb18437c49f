//! Console summary of a computed layout
//!
//! Lists the axis window and every ceiling, marker and measurement so a run
//! can be checked without opening the chart.

use crate::core::layout::RooflineLayout;
use colored::Colorize;

/// Format the layout as coloured text for the terminal
#[must_use]
pub fn format_summary(layout: &RooflineLayout) -> String {
    let g = &layout.geometry;
    let b = &g.bounds;
    let mut output = String::new();

    output.push_str(&format!(
        "{} 10^[({:.3} -> {:.3}) x ({:.3} -> {:.3})] = 10^[{:.3} x {:.3}]\n",
        "Axis limits:".white().bold(),
        b.xmax.log10(),
        b.xmin.log10(),
        b.ymax.log10(),
        b.ymin.log10(),
        g.xlogsize,
        g.ylogsize
    ));
    output.push_str(&format!(
        "{} {:.3}\n\n",
        "Plot logarithmic ratio:".white().bold(),
        g.m
    ));

    for slope in &layout.slopes {
        output.push_str(&format!(
            "{}\t{:<24}\t{} GB/s\n",
            "slope".yellow(),
            format!("\"{}\"", slope.name),
            slope.bandwidth
        ));
    }
    output.push('\n');

    for roof in &layout.roofs {
        output.push_str(&format!(
            "{}\t{:<24}\t{} GFLOP/s\n",
            "roof".green(),
            format!("\"{}\"", roof.name),
            roof.value
        ));
    }
    output.push('\n');

    for marker in &layout.markers {
        output.push_str(&format!(
            "{}\t{:<24}\t{} FLOP/Byte\n",
            "benchmark".cyan(),
            format!("\"{}\"", marker.name),
            marker.intensity
        ));
    }

    if !layout.points.is_empty() {
        output.push('\n');
    }
    for point in &layout.points {
        let legend = point.legend.as_deref().unwrap_or("-");
        output.push_str(&format!(
            "{}\t({}, {})\t{}\n",
            "point".magenta(),
            point.intensity,
            point.performance,
            legend
        ));
    }

    output
}
