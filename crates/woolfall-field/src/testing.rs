//! Surface that records draw calls for assertions.

use woolfall_core::Rgb;

use crate::surface::{Point, Surface};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear,
    FillCircle {
        center: Point,
        radius: f32,
        color: Rgb,
    },
    StrokeLine {
        from: Point,
        to: Point,
        color: Rgb,
        width: f32,
    },
    StrokeCurve {
        from: Point,
        control: Point,
        to: Point,
        color: Rgb,
        width: f32,
    },
    Save,
    Restore,
    Translate {
        dx: f32,
        dy: f32,
    },
    Rotate {
        angle: f32,
    },
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub width: f32,
    pub height: f32,
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
        }
    }

    /// Centers of every filled circle, in call order.
    pub fn circle_centers(&self) -> Vec<Point> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::FillCircle { center, .. } => Some(*center),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn clear(&mut self) {
        self.calls.push(DrawCall::Clear);
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Rgb) {
        self.calls.push(DrawCall::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Rgb, width: f32) {
        self.calls.push(DrawCall::StrokeLine {
            from,
            to,
            color,
            width,
        });
    }

    fn stroke_curve(&mut self, from: Point, control: Point, to: Point, color: Rgb, width: f32) {
        self.calls.push(DrawCall::StrokeCurve {
            from,
            control,
            to,
            color,
            width,
        });
    }

    fn save(&mut self) {
        self.calls.push(DrawCall::Save);
    }

    fn restore(&mut self) {
        self.calls.push(DrawCall::Restore);
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.calls.push(DrawCall::Translate { dx, dy });
    }

    fn rotate(&mut self, angle: f32) {
        self.calls.push(DrawCall::Rotate { angle });
    }
}
