//! Core types shared by the woolfall crates.

mod color;
mod config;

pub use color::{ParseRgbError, Rgb};
pub use config::{BallStyle, ConfigError, FieldConfig};
