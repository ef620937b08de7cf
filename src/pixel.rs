use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Pod, Zeroable, Clone, Copy, Debug, PartialEq)]
pub struct Complex {
    pub real: f64,
    pub imaginary: f64,
}

impl Complex {
    pub const ZERO: Self = Complex {
        real: 0.0,
        imaginary: 0.0,
    };

    pub fn new(real: f64, imaginary: f64) -> Self {
        Self { real, imaginary }
    }

    /// `self² + c`, one step of the quadratic recurrence.
    pub fn square_add(self, c: Complex) -> Self {
        Complex {
            real: self.real * self.real - self.imaginary * self.imaginary + c.real,
            imaginary: 2.0 * self.real * self.imaginary + c.imaginary,
        }
    }

    /// Squared magnitude; compared against 4.0 instead of taking a square root.
    pub fn norm_sqr(self) -> f64 {
        self.real * self.real + self.imaginary * self.imaginary
    }
}

/// A pixel coordinate with `0 <= x < width` and `0 <= y < height`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pixel {
    pub x: u32,
    pub y: u32,
}

impl Pixel {
    /// Row-major position of the pixel in a buffer `width` pixels wide.
    pub fn index(self, width: u32) -> usize {
        self.x as usize + self.y as usize * width as usize
    }

    pub fn from_index(index: usize, width: u32) -> Self {
        Pixel {
            x: (index % width as usize) as u32,
            y: (index / width as usize) as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_add_multiplies_as_complex() {
        // (1 + 2i)² = -3 + 4i
        let z = Complex::new(1.0, 2.0).square_add(Complex::new(0.5, -1.0));
        assert_eq!(z, Complex::new(-2.5, 3.0));
    }

    #[test]
    fn norm_sqr_skips_the_root() {
        assert_eq!(Complex::new(3.0, 4.0).norm_sqr(), 25.0);
        assert_eq!(Complex::ZERO.norm_sqr(), 0.0);
    }

    #[test]
    fn index_is_row_major() {
        let width = 7;
        assert_eq!(Pixel { x: 3, y: 2 }.index(width), 3 + 2 * 7);
        for index in 0..35 {
            assert_eq!(Pixel::from_index(index, width).index(width), index);
        }
    }
}
