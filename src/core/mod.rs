pub mod config;
pub mod figure;
pub mod format;
pub mod geometry;
pub mod layout;
