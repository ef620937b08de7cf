//! Render settings and the named presets.

use crate::{colour::Palette, error::Error, pixel::Complex, screen, viewport::Viewport};

/// Which recurrence is iterated for each pixel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Fractal {
    /// `z0 = 0`, `c` = the pixel's sample.
    Mandelbrot,
    /// `z0` = the pixel's sample, `c` fixed.
    Julia { c: Complex },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub max_iterations: u32,
    pub viewport: Viewport,
    pub palette: Palette,
    pub fractal: Fractal,
}

pub const DEFAULT_PRESET: &str = "smooth";

pub const PRESETS: [&str; 3] = ["smooth", "blue", "julia"];

impl Config {
    /// Smooth polynomial colouring at a high iteration cap.
    pub fn smooth() -> Self {
        Self {
            title: String::from("Mandelbrot Renderer"),
            width: 500,
            height: 500,
            max_iterations: 500,
            viewport: Viewport::new(-2.0, 1.2, -1.7, 1.7),
            palette: Palette::Smooth,
            fractal: Fractal::Mandelbrot,
        }
    }

    /// Blue ramp at a low iteration cap.
    pub fn blue() -> Self {
        Self {
            title: String::from("Mandelbrot Renderer"),
            width: 500,
            height: 500,
            max_iterations: 15,
            viewport: Viewport::new(-2.0, 1.0, -1.5, 1.5),
            palette: Palette::LinearBlue,
            fractal: Fractal::Mandelbrot,
        }
    }

    pub fn julia() -> Self {
        Self {
            title: String::from("Julia Renderer"),
            width: 500,
            height: 500,
            max_iterations: 15,
            viewport: Viewport::new(-1.5, 1.5, -1.5, 1.5),
            palette: Palette::LinearBlue,
            fractal: Fractal::Julia {
                c: Complex::new(-0.7, 0.27015),
            },
        }
    }

    pub fn preset(name: &str) -> Result<Self, Error> {
        match name {
            "smooth" => Ok(Self::smooth()),
            "blue" => Ok(Self::blue()),
            "julia" => Ok(Self::julia()),
            _ => Err(Error::InvalidConfig(format!(
                "unknown preset {:?}, expected one of {:?}",
                name, PRESETS
            ))),
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidConfig(format!(
                "frame size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.max_iterations == 0 {
            return Err(Error::InvalidConfig(String::from(
                "max_iterations must be positive",
            )));
        }
        if !self.viewport.is_valid() {
            return Err(Error::InvalidConfig(format!(
                "degenerate viewport {:?}",
                self.viewport
            )));
        }
        Ok(())
    }

    /// The same render at another frame size. `width` and `height` above are the
    /// window's logical size; frames are rendered at the presenter's physical size.
    pub fn resized(&self, size: screen::Size) -> Self {
        Self {
            width: size.width,
            height: size.height,
            ..self.clone()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::smooth()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_preset_is_valid() {
        for name in PRESETS {
            let config = Config::preset(name).unwrap();
            config.validate().unwrap();
        }
        assert_eq!(Config::preset(DEFAULT_PRESET).unwrap(), Config::default());
    }

    #[test]
    fn unknown_preset_is_rejected() {
        let error = Config::preset("buddhabrot").unwrap_err();
        assert!(matches!(error, Error::InvalidConfig(_)));
        assert!(error.to_string().contains("buddhabrot"));
    }

    #[test]
    fn presets_pair_palettes_with_caps() {
        assert_eq!(Config::smooth().max_iterations, 500);
        assert_eq!(Config::smooth().palette, Palette::Smooth);
        assert_eq!(Config::blue().max_iterations, 15);
        assert_eq!(Config::blue().palette, Palette::LinearBlue);
        assert!(matches!(Config::julia().fractal, Fractal::Julia { .. }));
    }

    #[test]
    fn resized_keeps_everything_but_the_size() {
        let config = Config::julia();
        let resized = config.resized(screen::Size {
            width: 1000,
            height: 800,
        });
        assert_eq!((resized.width, resized.height), (1000, 800));
        assert_eq!(resized.viewport, config.viewport);
        assert_eq!(resized.fractal, config.fractal);
        assert_eq!(resized.max_iterations, config.max_iterations);
    }

    #[test]
    fn validate_rejects_zero_sizes() {
        let mut config = Config::blue();
        config.width = 0;
        assert!(config.validate().is_err());

        let mut config = Config::blue();
        config.max_iterations = 0;
        assert!(config.validate().is_err());

        let mut config = Config::blue();
        config.viewport = Viewport::new(1.0, -1.0, -1.0, 1.0);
        assert!(config.validate().is_err());
    }
}
