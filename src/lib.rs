//! rooflini: roofline chart renderer
//!
//! Places compute ceilings (roofs), memory bandwidth ceilings (slopes),
//! benchmark markers and measured datapoints on a log-log chart of
//! arithmetic intensity against performance, then draws it with plotters.
//!
//! ```rust
//! use rooflini::{RooflineConfig, RooflineLayout};
//!
//! let layout = RooflineLayout::compute(&RooflineConfig::default()).unwrap();
//! assert_eq!(layout.max_roof, 1691.96);
//! assert_eq!(layout.points[0].intensity, 0.8);
//! ```

// Declare the modules
pub mod core;
pub mod error;
pub mod render;
pub mod report;

// Bring the main types into scope
pub use crate::core::config::{
    AxisBounds, Datapoint, FigureSize, Intensity, NamedIntensity, Roof, RooflineConfig, Slope,
    SubplotParams, DEFAULT_OUTPUT,
};
pub use crate::core::format::format_tick;
pub use crate::core::layout::RooflineLayout;
pub use error::{Result, RooflineError};
pub use render::{render, OutputFormat};
