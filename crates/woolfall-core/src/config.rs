//! Field configuration and its validation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Rgb;

/// How a wool ball is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BallStyle {
    /// Flat circle with straight strands, no rotation.
    #[default]
    Classic,
    /// Rotating circle with curved, shaded strands.
    Spinning,
}

impl BallStyle {
    /// Whether balls of this style carry a rotation rate.
    pub fn spins(self) -> bool {
        self == BallStyle::Spinning
    }
}

/// Immutable configuration of a ball field.
///
/// Sizes, speeds and gravity are in surface pixels (half a terminal cell)
/// and pixels per frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Number of balls created at startup.
    pub num_balls: usize,
    /// Palette balls pick their color from.
    pub colors: Vec<Rgb>,
    pub min_size: f32,
    pub max_size: f32,
    pub min_speed: f32,
    pub max_speed: f32,
    /// Added to vertical velocity every frame.
    pub gravity: f32,
    /// Velocity retained on a boundary collision (0.0-1.0).
    pub bounce: f32,
    pub style: BallStyle,
    /// Decorative strokes per ball.
    pub strands: usize,
    /// Stroke length as a fraction of the radius.
    pub strand_length: f32,
    /// Stroke width in pixels.
    pub strand_width: f32,
    /// Lighten/darken amount for spinning strands.
    pub shade_percent: f32,
    /// Maximum rotation rate in radians per frame.
    pub max_spin: f32,
    /// Interval between frames in milliseconds.
    pub frame_interval_ms: u64,
    /// RNG seed; a random one is used when absent.
    pub seed: Option<u64>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            num_balls: 20,
            colors: vec![
                Rgb::new(0xff, 0x99, 0x99),
                Rgb::new(0x99, 0xff, 0x99),
                Rgb::new(0x99, 0x99, 0xff),
                Rgb::new(0xff, 0xff, 0x99),
                Rgb::new(0xff, 0x99, 0xff),
            ],
            min_size: 1.5,
            max_size: 4.0,
            min_speed: 0.2,
            max_speed: 0.8,
            gravity: 0.02,
            bounce: 0.8,
            style: BallStyle::Classic,
            strands: 4,
            strand_length: 0.8,
            strand_width: 2.0,
            shade_percent: 20.0,
            max_spin: 0.05,
            frame_interval_ms: 16,
            seed: None,
        }
    }
}

/// A configuration value outside its documented range.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    EmptyPalette,
    NonFinite(&'static str),
    NotPositive(&'static str),
    Negative(&'static str),
    InvertedRange {
        min: &'static str,
        max: &'static str,
    },
    OutOfRange {
        field: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
    ZeroFrameInterval,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyPalette => write!(f, "colors must contain at least one color"),
            ConfigError::NonFinite(field) => write!(f, "{field} must be a finite number"),
            ConfigError::NotPositive(field) => write!(f, "{field} must be greater than zero"),
            ConfigError::Negative(field) => write!(f, "{field} must not be negative"),
            ConfigError::InvertedRange { min, max } => {
                write!(f, "{min} must not be greater than {max}")
            }
            ConfigError::OutOfRange {
                field,
                value,
                min,
                max,
            } => write!(f, "{field} = {value} is outside {min}..={max}"),
            ConfigError::ZeroFrameInterval => {
                write!(f, "frame_interval_ms must be greater than zero")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl FieldConfig {
    /// Reject values that would produce degenerate or non-finite motion.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.colors.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }

        for (name, value) in [
            ("min_size", self.min_size),
            ("max_size", self.max_size),
            ("min_speed", self.min_speed),
            ("max_speed", self.max_speed),
            ("gravity", self.gravity),
            ("bounce", self.bounce),
            ("strand_length", self.strand_length),
            ("strand_width", self.strand_width),
            ("shade_percent", self.shade_percent),
            ("max_spin", self.max_spin),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite(name));
            }
        }

        for (name, value) in [
            ("min_size", self.min_size),
            ("strand_length", self.strand_length),
            ("strand_width", self.strand_width),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NotPositive(name));
            }
        }
        if self.min_size > self.max_size {
            return Err(ConfigError::InvertedRange {
                min: "min_size",
                max: "max_size",
            });
        }

        for (name, value) in [
            ("min_speed", self.min_speed),
            ("gravity", self.gravity),
            ("max_spin", self.max_spin),
        ] {
            if value < 0.0 {
                return Err(ConfigError::Negative(name));
            }
        }
        if self.min_speed > self.max_speed {
            return Err(ConfigError::InvertedRange {
                min: "min_speed",
                max: "max_speed",
            });
        }

        check_range("bounce", self.bounce, 0.0, 1.0)?;
        check_range("shade_percent", self.shade_percent, 0.0, 100.0)?;

        if self.frame_interval_ms == 0 {
            return Err(ConfigError::ZeroFrameInterval);
        }
        Ok(())
    }
}

fn check_range(field: &'static str, value: f32, min: f32, max: f32) -> Result<(), ConfigError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}
