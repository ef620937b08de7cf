//! Escape-time iteration.
//!
//! Every step applies `z <- z² + c` and then tests `|z|² > 4`. A step that
//! escapes is not counted, so the result is the number of updates that stayed
//! inside the escape circle, capped at `max_iterations`. A count equal to
//! `max_iterations` means the orbit never escaped and the point is treated as
//! part of the set.

use crate::pixel::Complex;

/// Squared escape radius.
pub const ESCAPE_NORM: f64 = 4.0;

/// Iterate from `z` with constant `c`, returning a count in `[0, max_iterations]`.
pub fn escape_time(mut z: Complex, c: Complex, max_iterations: u32) -> u32 {
    let mut iteration = 0;
    while iteration < max_iterations {
        z = z.square_add(c);
        if z.norm_sqr() > ESCAPE_NORM {
            break;
        }
        iteration += 1;
    }
    iteration
}

pub fn mandelbrot(c: Complex, max_iterations: u32) -> u32 {
    escape_time(Complex::ZERO, c, max_iterations)
}

pub fn julia(z: Complex, c: Complex, max_iterations: u32) -> u32 {
    escape_time(z, c, max_iterations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_never_escapes() {
        for max_iterations in [1, 2, 15, 500] {
            assert_eq!(mandelbrot(Complex::ZERO, max_iterations), max_iterations);
        }
    }

    #[test]
    fn escaping_step_is_not_counted() {
        // For |c| > 2 the first update escapes.
        assert_eq!(mandelbrot(Complex::new(2.5, 0.0), 15), 0);
        assert_eq!(mandelbrot(Complex::new(0.0, 3.0), 15), 0);
        // z1 = 2 lies on the circle and counts, z2 = 6 escapes.
        assert_eq!(mandelbrot(Complex::new(2.0, 0.0), 15), 1);
    }

    #[test]
    fn escape_circle_itself_is_bounded() {
        // The orbit 0, -2, 2, 2, ... stays on the circle.
        assert_eq!(mandelbrot(Complex::new(-2.0, 0.0), 50), 50);
    }

    #[test]
    fn counts_bounded_updates() {
        // c = 1: 1, 2, 5 -> two bounded updates.
        assert_eq!(mandelbrot(Complex::new(1.0, 0.0), 15), 2);
        assert_eq!(mandelbrot(Complex::new(-1.25, -0.75), 3), 2);
    }

    #[test]
    fn result_stays_within_cap() {
        let samples = [
            Complex::new(-0.75, 0.1),
            Complex::new(0.3, 0.5),
            Complex::new(-1.9, 0.0),
            Complex::new(10.0, -10.0),
        ];
        for c in samples {
            for max_iterations in [0, 1, 7, 100] {
                let iteration = mandelbrot(c, max_iterations);
                assert!(iteration <= max_iterations);
                assert_eq!(iteration, mandelbrot(c, max_iterations));
            }
        }
    }

    #[test]
    fn julia_starts_from_the_sample() {
        let c = Complex::new(-0.7, 0.27015);
        assert_eq!(julia(Complex::new(3.0, 0.0), c, 15), 0);
        // With c = 0 the unit disc is the filled Julia set.
        assert_eq!(julia(Complex::new(0.5, 0.5), Complex::ZERO, 15), 15);
        assert_eq!(julia(Complex::ZERO, c, 15), mandelbrot(c, 15));
    }
}
