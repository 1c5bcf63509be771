//! The ball field: a fixed set of wool balls sharing one surface.

use log::debug;
use rand::Rng;
use woolfall_core::{ConfigError, FieldConfig};

use crate::ball::{Physics, Strands, WoolBall};
use crate::surface::Surface;

/// A fixed collection of independent wool balls.
#[derive(Debug, Clone)]
pub struct BallField {
    balls: Vec<WoolBall>,
    physics: Physics,
    strands: Strands,
}

impl BallField {
    /// Create `config.num_balls` balls placed fully on a `width` x `height` surface.
    ///
    /// Radius, placement, palette color and launch speed are drawn uniformly
    /// from the configured ranges. On an axis too small to hold a ball, the
    /// ball is centered instead.
    pub fn new<R: Rng>(
        config: &FieldConfig,
        width: f32,
        height: f32,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let max_spin = if config.style.spins() {
            config.max_spin
        } else {
            0.0
        };

        let balls = (0..config.num_balls)
            .map(|_| {
                let radius = uniform(rng, config.min_size, config.max_size);
                let x = place(rng, width, radius);
                let y = place(rng, height, radius);
                let color = config.colors[rng.random_range(0..config.colors.len())];
                let speed = uniform(rng, config.min_speed, config.max_speed);
                WoolBall::new(x, y, radius, color, speed, max_spin, rng)
            })
            .collect::<Vec<_>>();

        debug!(
            "created {} wool balls on a {width}x{height} surface",
            balls.len()
        );

        Ok(Self::from_balls(balls, config))
    }

    /// Build a field from already constructed balls.
    pub fn from_balls(balls: Vec<WoolBall>, config: &FieldConfig) -> Self {
        Self {
            balls,
            physics: Physics::from(config),
            strands: Strands::from(config),
        }
    }

    pub fn balls(&self) -> &[WoolBall] {
        &self.balls
    }

    pub fn len(&self) -> usize {
        self.balls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }

    /// Update then draw every ball in creation order against the surface's
    /// current size.
    pub fn step<S, R>(&mut self, surface: &mut S, rng: &mut R)
    where
        S: Surface + ?Sized,
        R: Rng,
    {
        let width = surface.width();
        let height = surface.height();
        for ball in &mut self.balls {
            ball.update(width, height, self.physics);
            ball.draw(surface, &self.strands, rng);
        }
    }
}

/// Uniform sample in `[min, max)`, or `min` when the range is empty.
fn uniform<R: Rng>(rng: &mut R, min: f32, max: f32) -> f32 {
    min + rng.random::<f32>() * (max - min)
}

/// Coordinate keeping a ball of `radius` inside `[0, extent]`.
fn place<R: Rng>(rng: &mut R, extent: f32, radius: f32) -> f32 {
    let span = extent - radius * 2.0;
    if span < 0.0 {
        extent / 2.0
    } else {
        radius + rng.random::<f32>() * span
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use woolfall_core::{BallStyle, Rgb};

    use super::*;
    use crate::testing::{DrawCall, RecordingSurface};

    fn config() -> FieldConfig {
        FieldConfig {
            num_balls: 50,
            min_size: 2.0,
            max_size: 5.0,
            min_speed: 1.0,
            max_speed: 3.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_creates_configured_count() {
        let mut rng = Pcg32::seed_from_u64(1);
        let field = BallField::new(&config(), 160.0, 96.0, &mut rng).unwrap();
        assert_eq!(field.len(), 50);
        assert!(!field.is_empty());
    }

    #[test]
    fn test_balls_start_inside_surface() {
        let config = config();
        let mut rng = Pcg32::seed_from_u64(2);
        let field = BallField::new(&config, 160.0, 96.0, &mut rng).unwrap();

        for ball in field.balls() {
            assert!((2.0..5.0).contains(&ball.radius));
            assert!(ball.x - ball.radius >= 0.0 && ball.x + ball.radius <= 160.0);
            assert!(ball.y - ball.radius >= 0.0 && ball.y + ball.radius <= 96.0);
            assert!(config.colors.contains(&ball.color));
            assert!(ball.vy >= 0.0);
            // speed <= 3 bounds each component
            assert!(ball.vx.abs() <= 1.5 && ball.vy < 3.0);
            assert_eq!(ball.spin, 0.0);
        }
    }

    #[test]
    fn test_uses_whole_palette() {
        let config = FieldConfig {
            num_balls: 200,
            ..config()
        };
        let mut rng = Pcg32::seed_from_u64(3);
        let field = BallField::new(&config, 160.0, 96.0, &mut rng).unwrap();
        for color in &config.colors {
            assert!(field.balls().iter().any(|b| b.color == *color));
        }
    }

    #[test]
    fn test_spinning_style_gets_spin() {
        let config = FieldConfig {
            style: BallStyle::Spinning,
            ..config()
        };
        let mut rng = Pcg32::seed_from_u64(4);
        let field = BallField::new(&config, 160.0, 96.0, &mut rng).unwrap();
        assert!(field.balls().iter().any(|b| b.spin != 0.0));
        assert!(field.balls().iter().all(|b| b.spin.abs() <= config.max_spin));
    }

    #[test]
    fn test_small_surface_centers_balls() {
        let config = FieldConfig {
            num_balls: 5,
            min_size: 4.0,
            max_size: 4.0,
            ..config()
        };
        let mut rng = Pcg32::seed_from_u64(5);
        let field = BallField::new(&config, 6.0, 100.0, &mut rng).unwrap();
        for ball in field.balls() {
            assert_eq!(ball.radius, 4.0);
            assert_eq!(ball.x, 3.0);
            assert!(ball.y >= 4.0 && ball.y <= 96.0);
        }
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = FieldConfig {
            colors: Vec::new(),
            ..config()
        };
        let mut rng = Pcg32::seed_from_u64(6);
        let err = BallField::new(&config, 100.0, 100.0, &mut rng).unwrap_err();
        assert_eq!(err, ConfigError::EmptyPalette);
    }

    #[test]
    fn test_same_seed_same_field() {
        let a = BallField::new(&config(), 120.0, 80.0, &mut Pcg32::seed_from_u64(42)).unwrap();
        let b = BallField::new(&config(), 120.0, 80.0, &mut Pcg32::seed_from_u64(42)).unwrap();
        assert_eq!(a.balls(), b.balls());
    }

    #[test]
    fn test_step_updates_then_draws_in_order() {
        let config = FieldConfig {
            gravity: 0.0,
            ..config()
        };
        let balls = vec![
            WoolBall {
                x: 10.0,
                y: 10.0,
                radius: 2.0,
                color: Rgb::new(1, 1, 1),
                vx: 1.0,
                vy: 0.0,
                angle: 0.0,
                spin: 0.0,
            },
            WoolBall {
                x: 30.0,
                y: 30.0,
                radius: 3.0,
                color: Rgb::new(2, 2, 2),
                vx: 0.0,
                vy: 2.0,
                angle: 0.0,
                spin: 0.0,
            },
        ];
        let mut field = BallField::from_balls(balls, &config);
        let mut surface = RecordingSurface::new(100.0, 100.0);
        field.step(&mut surface, &mut Pcg32::seed_from_u64(0));

        // Drawn positions are the post-update positions
        let centers = surface.circle_centers();
        assert_eq!(centers.len(), 2);
        assert_eq!((centers[0].x, centers[0].y), (11.0, 10.0));
        assert_eq!((centers[1].x, centers[1].y), (30.0, 32.0));
        // Each ball's strands follow its circle
        let strands = config.strands;
        assert!(matches!(surface.calls[0], DrawCall::FillCircle { .. }));
        assert!(matches!(surface.calls[strands + 1], DrawCall::FillCircle { .. }));
        assert_eq!(surface.calls.len(), 2 * (strands + 1));
    }
}
