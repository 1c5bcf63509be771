//! Pixel raster surface blitted to the terminal with half-block glyphs.

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use woolfall_core::Rgb;

use crate::surface::{Point, Surface, Transform};

/// Upper half block: foreground paints the top pixel, background the bottom.
const UPPER_HALF: char = '▀';
/// Lower half block for cells whose top pixel is empty.
const LOWER_HALF: char = '▄';

/// An RGB raster where each terminal cell holds two stacked pixels.
#[derive(Debug, Clone)]
pub struct PixelSurface {
    width: u16,
    height: u16,
    pixels: Vec<Option<Rgb>>,
    transform: Transform,
    saved: Vec<Transform>,
}

impl PixelSurface {
    /// Create a blank surface of `width` x `height` pixels.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            pixels: vec![None; width as usize * height as usize],
            transform: Transform::IDENTITY,
            saved: Vec::new(),
        }
    }

    /// Create a surface covering a terminal area of `cols` x `rows` cells.
    pub fn for_terminal(cols: u16, rows: u16) -> Self {
        Self::new(cols, rows.saturating_mul(2))
    }

    /// Match a new terminal size. Contents are discarded.
    pub fn resize_to_terminal(&mut self, cols: u16, rows: u16) {
        *self = Self::for_terminal(cols, rows);
    }

    /// Surface dimensions in pixels.
    #[cfg(test)]
    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Color of the pixel at `(x, y)`, if painted.
    fn pixel(&self, x: u16, y: u16) -> Option<Rgb> {
        if x < self.width && y < self.height {
            self.pixels[y as usize * self.width as usize + x as usize]
        } else {
            None
        }
    }

    /// Number of painted pixels.
    #[cfg(test)]
    fn painted(&self) -> usize {
        self.pixels.iter().filter(|p| p.is_some()).count()
    }

    /// Paint every pixel whose center lies within `radius` of a device-space point.
    fn stamp(&mut self, center: Point, radius: f32, color: Rgb) {
        if self.width == 0 || self.height == 0 || !center.x.is_finite() || !center.y.is_finite() {
            return;
        }

        let max_x = self.width as f32 - 1.0;
        let max_y = self.height as f32 - 1.0;
        let x0 = (center.x - radius).floor().max(0.0);
        let x1 = (center.x + radius).ceil().min(max_x);
        let y0 = (center.y - radius).floor().max(0.0);
        let y1 = (center.y + radius).ceil().min(max_y);
        if x0 > x1 || y0 > y1 {
            return;
        }

        let r2 = radius * radius;
        for py in y0 as usize..=y1 as usize {
            for px in x0 as usize..=x1 as usize {
                let dx = px as f32 + 0.5 - center.x;
                let dy = py as f32 + 0.5 - center.y;
                if dx * dx + dy * dy <= r2 {
                    self.pixels[py * self.width as usize + px] = Some(color);
                }
            }
        }

        // Sub-pixel discs still mark the pixel they sit in
        if (0.0..=max_x + 1.0).contains(&center.x) && (0.0..=max_y + 1.0).contains(&center.y) {
            let px = (center.x as usize).min(self.width as usize - 1);
            let py = (center.y as usize).min(self.height as usize - 1);
            self.pixels[py * self.width as usize + px] = Some(color);
        }
    }

    /// Stamp discs along a device-space path sampled at half-pixel spacing.
    fn stroke_path(&mut self, length: f32, width: f32, color: Rgb, at: impl Fn(f32) -> Point) {
        if !length.is_finite() {
            return;
        }
        let steps = (length * 2.0).ceil().max(1.0) as usize;
        let radius = (width / 2.0).max(0.5);
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            self.stamp(at(t), radius, color);
        }
    }
}

impl Surface for PixelSurface {
    fn width(&self) -> f32 {
        self.width as f32
    }

    fn height(&self) -> f32 {
        self.height as f32
    }

    fn clear(&mut self) {
        self.pixels.fill(None);
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Rgb) {
        let center = self.transform.apply(center);
        self.stamp(center, radius, color);
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Rgb, width: f32) {
        let from = self.transform.apply(from);
        let to = self.transform.apply(to);
        self.stroke_path(from.distance(to), width, color, |t| {
            Point::new(from.x + (to.x - from.x) * t, from.y + (to.y - from.y) * t)
        });
    }

    fn stroke_curve(&mut self, from: Point, control: Point, to: Point, color: Rgb, width: f32) {
        let from = self.transform.apply(from);
        let control = self.transform.apply(control);
        let to = self.transform.apply(to);
        // Control polygon length bounds the curve length
        let length = from.distance(control) + control.distance(to);
        self.stroke_path(length, width, color, |t| {
            let u = 1.0 - t;
            Point::new(
                u * u * from.x + 2.0 * u * t * control.x + t * t * to.x,
                u * u * from.y + 2.0 * u * t * control.y + t * t * to.y,
            )
        });
    }

    fn save(&mut self) {
        self.saved.push(self.transform);
    }

    fn restore(&mut self) {
        if let Some(transform) = self.saved.pop() {
            self.transform = transform;
        }
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.transform.translate(dx, dy);
    }

    fn rotate(&mut self, angle: f32) {
        self.transform.rotate(angle);
    }
}

impl Widget for &PixelSurface {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for row in 0..area.height {
            let top_y = row.saturating_mul(2);
            for col in 0..area.width {
                let top = self.pixel(col, top_y);
                let bottom = self.pixel(col, top_y.saturating_add(1));
                let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) else {
                    continue;
                };
                match (top, bottom) {
                    (None, None) => {}
                    (Some(top), None) => {
                        cell.set_char(UPPER_HALF).set_fg(top.into());
                    }
                    (None, Some(bottom)) => {
                        cell.set_char(LOWER_HALF).set_fg(bottom.into());
                    }
                    (Some(top), Some(bottom)) => {
                        cell.set_char(UPPER_HALF)
                            .set_fg(top.into())
                            .set_bg(bottom.into());
                    }
                }
            }
        }
    }
}
