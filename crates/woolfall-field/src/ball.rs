//! Wool ball entity: kinematics and procedural drawing.

use std::f32::consts::TAU;

use rand::Rng;
use woolfall_core::{BallStyle, FieldConfig, Rgb};

use crate::surface::{Point, Surface};

/// Per-frame forces shared by every ball in a field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Physics {
    /// Added to vertical velocity every frame.
    pub gravity: f32,
    /// Velocity retained on a boundary collision.
    pub bounce: f32,
}

impl From<&FieldConfig> for Physics {
    fn from(config: &FieldConfig) -> Self {
        Self {
            gravity: config.gravity,
            bounce: config.bounce,
        }
    }
}

/// How the decorative strands of a ball are drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Strands {
    pub style: BallStyle,
    pub count: usize,
    /// Length as a fraction of the radius.
    pub length: f32,
    pub width: f32,
    pub shade_percent: f32,
}

impl From<&FieldConfig> for Strands {
    fn from(config: &FieldConfig) -> Self {
        Self {
            style: config.style,
            count: config.strands,
            length: config.strand_length,
            width: config.strand_width,
            shade_percent: config.shade_percent,
        }
    }
}

/// A single simulated wool ball.
#[derive(Debug, Clone, PartialEq)]
pub struct WoolBall {
    pub x: f32,
    pub y: f32,
    /// Constant for the lifetime of the ball.
    pub radius: f32,
    pub color: Rgb,
    pub vx: f32,
    pub vy: f32,
    /// Rotation in radians.
    pub angle: f32,
    /// Rotation rate in radians per frame.
    pub spin: f32,
}

impl WoolBall {
    /// Create a ball at rest position `(x, y)` with a random launch velocity.
    ///
    /// Horizontal velocity is uniform in `[-0.5, 0.5) * speed`, vertical in
    /// `[0, 1) * speed`, so balls never start moving upward. The caller places
    /// the ball fully on the surface.
    pub fn new<R: Rng>(
        x: f32,
        y: f32,
        radius: f32,
        color: Rgb,
        speed: f32,
        max_spin: f32,
        rng: &mut R,
    ) -> Self {
        let vx = (rng.random::<f32>() - 0.5) * speed;
        let vy = rng.random::<f32>() * speed;
        let angle = rng.random::<f32>() * TAU;
        let spin = (rng.random::<f32>() * 2.0 - 1.0) * max_spin;
        Self {
            x,
            y,
            radius,
            color,
            vx,
            vy,
            angle,
            spin,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Advance one frame against a surface of the given size.
    ///
    /// The x axis reflects without clamping, so a ball may overshoot a side
    /// wall for a frame. The floor clamps. There is no ceiling.
    pub fn update(&mut self, width: f32, height: f32, physics: Physics) {
        self.x += self.vx;
        self.y += self.vy;
        self.vy += physics.gravity;
        self.angle = (self.angle + self.spin).rem_euclid(TAU);

        if self.x + self.radius > width || self.x - self.radius < 0.0 {
            self.vx = -self.vx * physics.bounce;
        }
        if self.y + self.radius > height {
            self.y = height - self.radius;
            // The subtraction can round up by an ulp
            while self.y + self.radius > height {
                self.y = self.y.next_down();
            }
            self.vy = -self.vy * physics.bounce;
        }
    }

    /// Draw the ball and its strands.
    ///
    /// Strand geometry is re-rolled from `rng` on every call, which makes the
    /// wool shimmer from frame to frame.
    pub fn draw<S, R>(&self, surface: &mut S, strands: &Strands, rng: &mut R)
    where
        S: Surface + ?Sized,
        R: Rng,
    {
        match strands.style {
            BallStyle::Classic => self.draw_classic(surface, strands, rng),
            BallStyle::Spinning => self.draw_spinning(surface, strands, rng),
        }
    }

    fn draw_classic<S, R>(&self, surface: &mut S, strands: &Strands, rng: &mut R)
    where
        S: Surface + ?Sized,
        R: Rng,
    {
        let center = self.center();
        surface.fill_circle(center, self.radius, self.color);

        let length = self.radius * strands.length;
        for _ in 0..strands.count {
            let angle = rng.random::<f32>() * TAU;
            let end = center.offset_polar(angle, length);
            surface.stroke_line(center, end, self.color, strands.width);
        }
    }

    fn draw_spinning<S, R>(&self, surface: &mut S, strands: &Strands, rng: &mut R)
    where
        S: Surface + ?Sized,
        R: Rng,
    {
        surface.save();
        surface.translate(self.x, self.y);
        surface.rotate(self.angle);
        surface.fill_circle(Point::ORIGIN, self.radius, self.color);

        let length = self.radius * strands.length;
        for _ in 0..strands.count {
            let end = Point::ORIGIN.offset_polar(rng.random::<f32>() * TAU, length);
            let control = Point::ORIGIN.offset_polar(
                rng.random::<f32>() * TAU,
                rng.random::<f32>() * self.radius,
            );
            let shade = if rng.random_bool(0.5) {
                strands.shade_percent
            } else {
                -strands.shade_percent
            };
            surface.stroke_curve(
                Point::ORIGIN,
                control,
                end,
                self.color.shade(shade),
                strands.width,
            );
        }
        surface.restore();
    }
}
