use crate::error::{Result, RooflineError};
use std::path::PathBuf;

pub const DEFAULT_OUTPUT: &str = "roofline.svg";

/// Horizontal compute ceiling in GFLOP/s
#[derive(Debug, Clone, PartialEq)]
pub struct Roof {
    pub name: String,
    pub value: f64,
}

/// Memory bandwidth ceiling in GB/s, drawn as `performance = value * intensity`
#[derive(Debug, Clone, PartialEq)]
pub struct Slope {
    pub name: String,
    pub value: f64,
}

/// Arithmetic intensity (FLOP/Byte) of a named benchmark
#[derive(Debug, Clone, PartialEq)]
pub struct NamedIntensity {
    pub name: String,
    pub value: f64,
}

/// Where a datapoint's x coordinate comes from
#[derive(Debug, Clone, PartialEq)]
pub enum Intensity {
    Literal(f64),
    Named(String),
}

impl From<f64> for Intensity {
    fn from(value: f64) -> Self {
        Intensity::Literal(value)
    }
}

impl From<&str> for Intensity {
    fn from(name: &str) -> Self {
        Intensity::Named(name.to_string())
    }
}

/// A measured (intensity, performance) observation
#[derive(Debug, Clone, PartialEq)]
pub struct Datapoint {
    pub intensity: Intensity,
    pub performance: f64,
    /// Legend entry; `None` plots the point without listing it
    pub label: Option<String>,
    pub annotation: Option<String>,
}

impl Datapoint {
    pub fn new(intensity: impl Into<Intensity>, performance: f64) -> Self {
        Self {
            intensity: intensity.into(),
            performance,
            label: None,
            annotation: None,
        }
    }

    pub fn label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    pub fn annotation(mut self, annotation: &str) -> Self {
        self.annotation = Some(annotation.to_string());
        self
    }
}

/// Visible log-log window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBounds {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl AxisBounds {
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Self {
        Self {
            xmin,
            xmax,
            ymin,
            ymax,
        }
    }

    pub fn validate(&self) -> Result<()> {
        check_axis("x", self.xmin, self.xmax)?;
        check_axis("y", self.ymin, self.ymax)
    }
}

fn check_axis(axis: &'static str, min: f64, max: f64) -> Result<()> {
    // Negated comparisons also reject NaN
    if !(min > 0.0 && min < max && max.is_finite()) {
        return Err(RooflineError::DegenerateAxis { axis, min, max });
    }
    Ok(())
}

/// Physical size of the plotting area (not the whole canvas)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureSize {
    /// Plot height in inches
    pub dimension: f64,
    /// Plot width / plot height
    pub ratio: f64,
    pub dpi: f64,
}

impl FigureSize {
    pub fn width_inches(&self) -> f64 {
        self.dimension * self.ratio
    }

    pub fn height_inches(&self) -> f64 {
        self.dimension
    }
}

impl Default for FigureSize {
    fn default() -> Self {
        Self {
            dimension: 5.0,
            ratio: 2.0,
            dpi: 100.0,
        }
    }
}

/// Canvas padding around the plotting area, as fractions of the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubplotParams {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for SubplotParams {
    fn default() -> Self {
        Self {
            left: 0.125,
            right: 0.9,
            top: 0.88,
            bottom: 0.11,
        }
    }
}

/// Everything a render pass needs. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct RooflineConfig {
    pub axis_bounds: AxisBounds,
    pub figure: FigureSize,
    pub subplot: SubplotParams,
    pub roofs: Vec<Roof>,
    pub slopes: Vec<Slope>,
    pub named_intensities: Vec<NamedIntensity>,
    pub datapoints: Vec<Datapoint>,
    pub title: String,
    pub output_path: PathBuf,
}

impl RooflineConfig {
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Look up a benchmark's arithmetic intensity by name
    pub fn intensity_of(&self, name: &str) -> Option<f64> {
        self.named_intensities
            .iter()
            .find(|b| b.name == name)
            .map(|b| b.value)
    }

    pub fn validate(&self) -> Result<()> {
        self.axis_bounds.validate()?;
        if self.roofs.is_empty() {
            return Err(RooflineError::MissingCeilings("roofs"));
        }
        if self.slopes.is_empty() {
            return Err(RooflineError::MissingCeilings("slopes"));
        }
        for roof in &self.roofs {
            check_positive("roof", &roof.name, roof.value)?;
        }
        for slope in &self.slopes {
            check_positive("slope", &slope.name, slope.value)?;
        }
        for bench in &self.named_intensities {
            check_positive("benchmark", &bench.name, bench.value)?;
        }
        for (i, point) in self.datapoints.iter().enumerate() {
            let name = point.label.clone().unwrap_or_else(|| format!("#{i}"));
            if let Intensity::Literal(value) = point.intensity {
                check_positive("datapoint intensity", &name, value)?;
            }
            check_positive("datapoint performance", &name, point.performance)?;
        }
        Ok(())
    }
}

fn check_positive(kind: &'static str, name: &str, value: f64) -> Result<()> {
    if !(value > 0.0 && value.is_finite()) {
        return Err(RooflineError::NonPositiveValue {
            kind,
            name: name.to_string(),
            value,
        });
    }
    Ok(())
}

fn roof(name: &str, value: f64) -> Roof {
    Roof {
        name: name.to_string(),
        value,
    }
}

fn slope(name: &str, value: f64) -> Slope {
    Slope {
        name: name.to_string(),
        value,
    }
}

fn benchmark(name: &str, value: f64) -> NamedIntensity {
    NamedIntensity {
        name: name.to_string(),
        value,
    }
}

impl Default for RooflineConfig {
    /// Example Xeon Phi style machine with two benchmarks
    fn default() -> Self {
        Self {
            axis_bounds: AxisBounds::new(0.04, 600.0, 0.4, 7000.0),
            figure: FigureSize::default(),
            subplot: SubplotParams::default(),
            roofs: vec![
                roof("Scalar Add Peak", 98.48),
                roof("DP Vector Add Peak", 843.06),
                roof("DP Vector FMA Peak", 1691.96),
            ],
            slopes: vec![
                slope("L1 Bandwidth", 7398.95),
                slope("L2 Bandwidth", 1237.34),
                slope("MCDRAM Bandwidth", 393.75),
                slope("DDR Bandwidth", 81.35),
            ],
            named_intensities: vec![
                benchmark("MyBWHungryBenchmark", 0.8),
                benchmark("MyCPUIntensiveBenchmark", 30.0),
            ],
            datapoints: vec![
                Datapoint::new("MyBWHungryBenchmark", 20.0)
                    .label("This is lame")
                    .annotation("(I'm lame)"),
                Datapoint::new(8.0, 1000.0).label("This is pretty cool"),
                Datapoint::new("MyCPUIntensiveBenchmark", 3000.0).label("This is unbelievable"),
            ],
            title: "Rooflini example".to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}
