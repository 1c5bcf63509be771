//! Drawing surface abstraction.

use woolfall_core::Rgb;

/// A point in surface space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Point at `length` from `self` in direction `angle` (radians).
    pub fn offset_polar(self, angle: f32, length: f32) -> Self {
        Self::new(self.x + angle.cos() * length, self.y + angle.sin() * length)
    }

    pub fn distance(self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// 2D affine transform in canvas order: `x' = a*x + c*y + e`, `y' = b*x + d*y + f`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    a: f32,
    b: f32,
    c: f32,
    d: f32,
    e: f32,
    f: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    /// Append a translation in local coordinates.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.e += self.a * dx + self.c * dy;
        self.f += self.b * dx + self.d * dy;
    }

    /// Append a rotation (radians, clockwise in y-down space).
    pub fn rotate(&mut self, angle: f32) {
        let (sin, cos) = angle.sin_cos();
        let (a, b, c, d) = (self.a, self.b, self.c, self.d);
        self.a = a * cos + c * sin;
        self.b = b * cos + d * sin;
        self.c = c * cos - a * sin;
        self.d = d * cos - b * sin;
    }

    /// Map a local point to device space.
    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }
}

/// A 2D drawing target sized to the viewport.
///
/// Coordinates are pixels with the origin at the top-left and y growing down.
/// Drawing calls go through the current transform, which `save`/`restore`
/// push and pop.
pub trait Surface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;

    /// Erase the whole surface.
    fn clear(&mut self);

    fn fill_circle(&mut self, center: Point, radius: f32, color: Rgb);

    fn stroke_line(&mut self, from: Point, to: Point, color: Rgb, width: f32);

    /// Stroke a quadratic curve from `from` to `to` bent toward `control`.
    fn stroke_curve(&mut self, from: Point, control: Point, to: Point, color: Rgb, width: f32);

    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, dx: f32, dy: f32);
    fn rotate(&mut self, angle: f32);
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    fn assert_near(p: Point, x: f32, y: f32) {
        assert!((p.x - x).abs() < 1e-5 && (p.y - y).abs() < 1e-5, "{p:?} != ({x}, {y})");
    }

    #[test]
    fn test_identity() {
        assert_near(Transform::IDENTITY.apply(Point::new(3.0, 4.0)), 3.0, 4.0);
    }

    #[test]
    fn test_translate_then_rotate() {
        let mut t = Transform::IDENTITY;
        t.translate(10.0, 20.0);
        t.rotate(FRAC_PI_2);
        // Local +x maps to device +y after a quarter turn
        assert_near(t.apply(Point::new(1.0, 0.0)), 10.0, 21.0);
        assert_near(t.apply(Point::ORIGIN), 10.0, 20.0);
        // Translation after rotation happens in the rotated frame
        t.translate(2.0, 0.0);
        assert_near(t.apply(Point::ORIGIN), 10.0, 22.0);
    }

    #[test]
    fn test_offset_polar() {
        assert_near(Point::new(1.0, 1.0).offset_polar(0.0, 2.0), 3.0, 1.0);
        assert_near(Point::new(1.0, 1.0).offset_polar(FRAC_PI_2, 2.0), 1.0, 3.0);
        assert!((Point::ORIGIN.distance(Point::new(3.0, 4.0)) - 5.0).abs() < 1e-6);
    }
}
