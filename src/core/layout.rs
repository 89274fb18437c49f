use crate::core::config::{Intensity, RooflineConfig};
use crate::core::geometry::{AxisGeometry, Point, Segment};
use crate::error::{Result, RooflineError};
use tracing::debug;

/// Horizontal text alignment relative to the anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Right,
}

/// Decides colour when drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRole {
    Ceiling,
    Benchmark,
    Annotation,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub position: Point,
    /// Counter-clockwise, in degrees
    pub rotation_deg: f64,
    pub align: HAlign,
    pub font_pt: f64,
    pub role: TextRole,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlopeLine {
    pub name: String,
    pub bandwidth: f64,
    pub segment: Segment,
    pub label: Label,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoofLine {
    pub name: String,
    pub value: f64,
    pub segment: Segment,
    pub label: Label,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkMarker {
    pub name: String,
    pub intensity: f64,
    pub segment: Segment,
    pub label: Label,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedPoint {
    pub intensity: f64,
    pub performance: f64,
    /// `None` plots the point without a legend entry
    pub legend: Option<String>,
    pub annotation: Option<Label>,
    /// Index into the point colour cycle
    pub series: usize,
}

/// Every primitive of one chart, in data coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct RooflineLayout {
    pub geometry: AxisGeometry,
    pub max_roof: f64,
    pub max_slope: f64,
    pub slopes: Vec<SlopeLine>,
    pub roofs: Vec<RoofLine>,
    pub markers: Vec<BenchmarkMarker>,
    pub points: Vec<PlacedPoint>,
}

impl RooflineLayout {
    /// Resolve and place everything in `config`.
    ///
    /// Fails before producing any primitive if the configuration is invalid
    /// or a datapoint names an unknown benchmark.
    pub fn compute(config: &RooflineConfig) -> Result<Self> {
        config.validate()?;
        let geometry = AxisGeometry::new(&config.axis_bounds);

        let max_roof = max_value(config.roofs.iter().map(|r| r.value));
        let max_slope = max_value(config.slopes.iter().map(|s| s.value));

        let slopes = layout_slopes(config, &geometry, max_roof);
        let roofs = layout_roofs(config, &geometry, max_slope);
        let markers = layout_markers(config, &geometry);
        let points = layout_points(config, &geometry)?;

        Ok(Self {
            geometry,
            max_roof,
            max_slope,
            slopes,
            roofs,
            markers,
            points,
        })
    }
}

fn max_value(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(f64::NEG_INFINITY, f64::max)
}

/// On-screen angle of any bandwidth line.
///
/// Every slope has gradient 1 in log-log space, so the angle depends only
/// on decades per axis and the plot's width/height ratio.
pub fn slope_label_rotation(geometry: &AxisGeometry, figure_ratio: f64) -> f64 {
    (geometry.m / figure_ratio).atan().to_degrees()
}

fn layout_slopes(config: &RooflineConfig, geometry: &AxisGeometry, max_roof: f64) -> Vec<SlopeLine> {
    let bounds = &config.axis_bounds;
    let rotation = slope_label_rotation(geometry, config.figure.ratio);

    config
        .slopes
        .iter()
        .map(|slope| {
            let bw = slope.value;
            let segment = Segment::new((0.0, 0.0), (max_roof / bw, max_roof));

            let mut xpos = bounds.xmin * geometry.x_offset(0.016);
            let mut ypos = xpos * bw * geometry.y_offset(0.004);
            if ypos < bounds.ymin {
                // Line leaves the window through the bottom edge
                ypos = bounds.ymin * geometry.y_offset(0.02);
                xpos = ypos / bw;
                debug!(slope = %slope.name, xpos, ypos, "label anchored at bottom edge");
            }

            SlopeLine {
                name: slope.name.clone(),
                bandwidth: bw,
                segment,
                label: Label {
                    text: format!("{}: {} GB/s", slope.name, bw),
                    position: (xpos, ypos),
                    rotation_deg: rotation,
                    align: HAlign::Left,
                    font_pt: 11.0,
                    role: TextRole::Ceiling,
                },
            }
        })
        .collect()
}

fn layout_roofs(config: &RooflineConfig, geometry: &AxisGeometry, max_slope: f64) -> Vec<RoofLine> {
    let xmax = config.axis_bounds.xmax;

    config
        .roofs
        .iter()
        .map(|roof| {
            let value = roof.value;
            // Extends past the right edge; clipped when drawn
            let segment = Segment::new((value / max_slope, value), (xmax * 10.0, value));
            RoofLine {
                name: roof.name.clone(),
                value,
                segment,
                label: Label {
                    text: format!("{}: {} GFLOPs", roof.name, value),
                    position: (xmax / geometry.x_offset(0.01), value * geometry.y_offset(0.01)),
                    rotation_deg: 0.0,
                    align: HAlign::Right,
                    font_pt: 11.0,
                    role: TextRole::Ceiling,
                },
            }
        })
        .collect()
}

fn layout_markers(config: &RooflineConfig, geometry: &AxisGeometry) -> Vec<BenchmarkMarker> {
    let bounds = &config.axis_bounds;

    config
        .named_intensities
        .iter()
        .map(|bench| BenchmarkMarker {
            name: bench.name.clone(),
            intensity: bench.value,
            segment: Segment::new((bench.value, bounds.ymin), (bench.value, bounds.ymax)),
            label: Label {
                text: bench.name.clone(),
                position: (
                    bench.value / geometry.x_offset(0.02),
                    bounds.ymin * geometry.y_offset(0.03),
                ),
                rotation_deg: 90.0,
                align: HAlign::Left,
                font_pt: 12.0,
                role: TextRole::Benchmark,
            },
        })
        .collect()
}

/// Turn a datapoint's intensity into FLOP/Byte
pub fn resolve_intensity(config: &RooflineConfig, intensity: &Intensity) -> Result<f64> {
    match intensity {
        Intensity::Literal(value) => Ok(*value),
        Intensity::Named(name) => config
            .intensity_of(name)
            .ok_or_else(|| RooflineError::UnknownBenchmark(name.clone())),
    }
}

fn layout_points(config: &RooflineConfig, geometry: &AxisGeometry) -> Result<Vec<PlacedPoint>> {
    config
        .datapoints
        .iter()
        .enumerate()
        .map(|(series, point)| {
            let intensity = resolve_intensity(config, &point.intensity)?;
            let performance = point.performance;
            let annotation = point.annotation.as_ref().map(|text| Label {
                text: text.clone(),
                position: (
                    intensity * geometry.x_offset(0.005),
                    performance * geometry.y_offset(0.005),
                ),
                rotation_deg: 0.0,
                align: HAlign::Left,
                font_pt: 9.0,
                role: TextRole::Annotation,
            });
            Ok(PlacedPoint {
                intensity,
                performance,
                legend: point.label.clone(),
                annotation,
                series,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{AxisBounds, Datapoint, Roof, Slope};

    fn example_layout() -> RooflineLayout {
        RooflineLayout::compute(&RooflineConfig::default()).unwrap()
    }

    #[test]
    fn test_max_roof_is_largest_roof() {
        let layout = example_layout();
        assert_eq!(layout.max_roof, 1691.96);
        for slope in &layout.slopes {
            assert_eq!(slope.segment.end.1, layout.max_roof);
        }
    }

    #[test]
    fn test_max_roof_independent_of_order() {
        let mut config = RooflineConfig::default();
        config.roofs.reverse();
        let layout = RooflineLayout::compute(&config).unwrap();
        assert_eq!(layout.max_roof, 1691.96);
        assert_eq!(layout.max_slope, 7398.95);
    }

    #[test]
    fn test_slope_endpoints_on_bandwidth_line() {
        let layout = example_layout();
        for slope in &layout.slopes {
            assert_eq!(slope.segment.start, (0.0, 0.0));
            let (x, y) = slope.segment.end;
            assert_eq!(x, layout.max_roof / slope.bandwidth);
            assert!((x * slope.bandwidth - y).abs() < 1e-9);
        }
    }

    #[test]
    fn test_roof_segments() {
        let layout = example_layout();
        assert_eq!(layout.max_slope, 7398.95);
        for roof in &layout.roofs {
            assert_eq!(roof.segment.start.1, roof.value);
            assert_eq!(roof.segment.end.1, roof.value);
            assert_eq!(roof.segment.start.0, roof.value / 7398.95);
            assert_eq!(roof.segment.end.0, 6000.0);
        }
    }

    #[test]
    fn test_slope_rotation_same_for_every_bandwidth() {
        let layout = example_layout();
        let expected = (layout.geometry.m / 2.0).atan() * 180.0 / std::f64::consts::PI;
        for slope in &layout.slopes {
            assert!((slope.label.rotation_deg - expected).abs() < 1e-12);
        }
        // m ~ 0.984 on a 2:1 plot
        assert!((expected - 26.2).abs() < 0.1);
    }

    #[test]
    fn test_slope_label_near_left_edge() {
        let layout = example_layout();
        let g = &layout.geometry;
        let ddr = layout.slopes.iter().find(|s| s.name == "DDR Bandwidth").unwrap();
        let xpos = 0.04 * g.x_offset(0.016);
        assert_eq!(ddr.label.position.0, xpos);
        assert_eq!(ddr.label.position.1, xpos * 81.35 * g.y_offset(0.004));
        assert_eq!(ddr.label.text, "DDR Bandwidth: 81.35 GB/s");
    }

    #[test]
    fn test_slope_label_reanchors_at_bottom_edge() {
        let config = RooflineConfig {
            axis_bounds: AxisBounds::new(1.0, 100.0, 10.0, 1000.0),
            slopes: vec![Slope {
                name: "Slow".to_string(),
                value: 2.0,
            }],
            ..Default::default()
        };
        let layout = RooflineLayout::compute(&config).unwrap();
        let g = &layout.geometry;
        let (xpos, ypos) = layout.slopes[0].label.position;
        assert_eq!(ypos, 10.0 * g.y_offset(0.02));
        assert_eq!(xpos, ypos / 2.0);
    }

    #[test]
    fn test_roof_label_at_right_edge() {
        let layout = example_layout();
        let g = &layout.geometry;
        let scalar = &layout.roofs[0];
        assert_eq!(scalar.label.text, "Scalar Add Peak: 98.48 GFLOPs");
        assert_eq!(scalar.label.align, HAlign::Right);
        assert_eq!(scalar.label.position.0, 600.0 / g.x_offset(0.01));
        assert_eq!(scalar.label.position.1, 98.48 * g.y_offset(0.01));
    }

    #[test]
    fn test_benchmark_markers() {
        let layout = example_layout();
        let names: Vec<_> = layout.markers.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["MyBWHungryBenchmark", "MyCPUIntensiveBenchmark"]);
        let bw = &layout.markers[0];
        assert_eq!(bw.segment.start, (0.8, 0.4));
        assert_eq!(bw.segment.end, (0.8, 7000.0));
        assert_eq!(bw.label.rotation_deg, 90.0);
        assert!(bw.label.position.0 < 0.8);
    }

    #[test]
    fn test_named_intensity_resolves() {
        let layout = example_layout();
        let lame = &layout.points[0];
        assert_eq!((lame.intensity, lame.performance), (0.8, 20.0));
        let cool = &layout.points[1];
        assert_eq!((cool.intensity, cool.performance), (8.0, 1000.0));
        assert_eq!(layout.points[2].intensity, 30.0);
    }

    #[test]
    fn test_unknown_benchmark_aborts_layout() {
        let mut config = RooflineConfig::default();
        config.datapoints.push(Datapoint::new("NotABenchmark", 1.0));
        match RooflineLayout::compute(&config) {
            Err(RooflineError::UnknownBenchmark(name)) => assert_eq!(name, "NotABenchmark"),
            other => panic!("expected UnknownBenchmark, got {other:?}"),
        }
    }

    #[test]
    fn test_legend_only_for_labelled_points() {
        let config = RooflineConfig {
            datapoints: vec![
                Datapoint::new(1.0, 10.0),
                Datapoint::new(2.0, 20.0).label("X"),
            ],
            ..Default::default()
        };
        let layout = RooflineLayout::compute(&config).unwrap();
        assert_eq!(layout.points[0].legend, None);
        assert_eq!(layout.points[1].legend.as_deref(), Some("X"));
        assert_eq!(layout.points[1].series, 1);
    }

    #[test]
    fn test_annotation_offset_up_and_right() {
        let layout = example_layout();
        let anno = layout.points[0].annotation.as_ref().unwrap();
        assert_eq!(anno.text, "(I'm lame)");
        assert_eq!(anno.role, TextRole::Annotation);
        assert!(anno.position.0 > 0.8 && anno.position.1 > 20.0);
        assert!(layout.points[1].annotation.is_none());
    }

    #[test]
    fn test_single_roof_and_slope() {
        let config = RooflineConfig {
            roofs: vec![Roof {
                name: "Peak".to_string(),
                value: 100.0,
            }],
            slopes: vec![Slope {
                name: "DRAM".to_string(),
                value: 50.0,
            }],
            datapoints: vec![],
            ..Default::default()
        };
        let layout = RooflineLayout::compute(&config).unwrap();
        assert_eq!(layout.slopes[0].segment.end, (2.0, 100.0));
        assert_eq!(layout.roofs[0].segment.start, (2.0, 100.0));
    }
}
