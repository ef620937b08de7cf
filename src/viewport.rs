//! Mapping from pixel space onto the complex plane.

use crate::pixel::{Complex, Pixel};

/**
Linearly rescale `value` from `[istart, istop]` into `[ostart, ostop]`.

`istart` must differ from `istop`. Equal bounds divide by zero and yield an
infinite or NaN result; callers map from `0..width` and `0..height`, and
[`Config::validate`](crate::config::Config::validate) rejects zero sizes.
*/
pub fn map(value: f64, istart: f64, istop: f64, ostart: f64, ostop: f64) -> f64 {
    ostart + (ostop - ostart) * ((value - istart) / (istop - istart))
}

/// The rectangle of the complex plane shown in the window.
///
/// A sample is `center + zoom * mapped`, so the default `zoom = 1` and
/// `center = 0` show exactly the four bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub min_real: f64,
    pub max_real: f64,
    pub min_imaginary: f64,
    pub max_imaginary: f64,
    pub zoom: f64,
    pub center: Complex,
}

impl Viewport {
    pub fn new(min_real: f64, max_real: f64, min_imaginary: f64, max_imaginary: f64) -> Self {
        Self {
            min_real,
            max_real,
            min_imaginary,
            max_imaginary,
            zoom: 1.0,
            center: Complex::ZERO,
        }
    }

    pub fn with_zoom(mut self, zoom: f64) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn with_center(mut self, center: Complex) -> Self {
        self.center = center;
        self
    }

    /// The complex sample for `pixel` on a `width` x `height` grid.
    pub fn sample(&self, pixel: Pixel, width: u32, height: u32) -> Complex {
        let real = map(
            pixel.x as f64,
            0.0,
            width as f64,
            self.min_real,
            self.max_real,
        );
        let imaginary = map(
            pixel.y as f64,
            0.0,
            height as f64,
            self.min_imaginary,
            self.max_imaginary,
        );
        Complex {
            real: self.center.real + real * self.zoom,
            imaginary: self.center.imaginary + imaginary * self.zoom,
        }
    }

    /// Bounds must be ordered and the zoom finite and positive.
    pub fn is_valid(&self) -> bool {
        self.min_real < self.max_real
            && self.min_imaginary < self.max_imaginary
            && self.zoom.is_finite()
            && self.zoom > 0.0
    }
}
