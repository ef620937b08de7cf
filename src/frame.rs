//! The frame buffer and the per-pixel render pass.

use log::trace;
use rayon::prelude::{IndexedParallelIterator, IntoParallelRefMutIterator, ParallelIterator};

use crate::{
    colour::Colour,
    config::{Config, Fractal},
    escape,
    pixel::Pixel,
};

/// Row-major packed colours for one frame, `index = x + y * width`.
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Colour>,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Colour::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self) {
        self.pixels.fill(Colour::default());
    }

    pub fn get(&self, pixel: Pixel) -> Colour {
        self.pixels[pixel.index(self.width)]
    }

    /// The buffer as raw `0xAARRGGBB` values, as handed to a presenter.
    pub fn as_u32(&self) -> &[u32] {
        bytemuck::cast_slice(&self.pixels)
    }
}

/// Colour of a single pixel. Depends on nothing but `pixel` and `config`.
pub fn shade(config: &Config, pixel: Pixel) -> Colour {
    let sample = config.viewport.sample(pixel, config.width, config.height);
    let iteration = match config.fractal {
        Fractal::Mandelbrot => escape::mandelbrot(sample, config.max_iterations),
        Fractal::Julia { c } => escape::julia(sample, c, config.max_iterations),
    };
    config.palette.colour(iteration, config.max_iterations)
}

/// Overwrite every pixel of `frame` in parallel.
pub fn render(config: &Config, frame: &mut FrameBuffer) {
    trace!("begin render");

    debug_assert_eq!(frame.width, config.width);
    debug_assert_eq!(frame.height, config.height);

    let width = frame.width;
    frame
        .pixels
        .par_iter_mut()
        .enumerate()
        .for_each(|(index, colour)| {
            *colour = shade(config, Pixel::from_index(index, width));
        });

    trace!("end render");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{colour::Palette, pixel::Complex, viewport::Viewport};

    fn fixture(max_iterations: u32) -> Config {
        Config {
            title: String::from("fixture"),
            width: 4,
            height: 4,
            max_iterations,
            viewport: Viewport::new(-2.0, 1.0, -1.5, 1.5),
            palette: Palette::LinearBlue,
            fractal: Fractal::Mandelbrot,
        }
    }

    fn rendered(config: &Config) -> Vec<u32> {
        let mut frame = FrameBuffer::new(config.width, config.height);
        render(config, &mut frame);
        frame.as_u32().to_vec()
    }

    #[test]
    fn single_iteration_fixture_is_opaque_black() {
        // Both escaped (count 0, blue 0) and bounded pixels are black at a cap of 1.
        assert_eq!(rendered(&fixture(1)), vec![0xff00_0000u32; 16]);
    }

    #[test]
    fn three_iteration_fixture() {
        #[rustfmt::skip]
        let expected: Vec<u32> = vec![
            0xff00_0000, 0xff00_0014, 0xff00_0014, 0xff00_0014,
            0xff00_0000, 0xff00_0028, 0xff00_0000, 0xff00_0000,
            0xff00_0000, 0xff00_0000, 0xff00_0000, 0xff00_0000,
            0xff00_0000, 0xff00_0028, 0xff00_0000, 0xff00_0000,
        ];
        assert_eq!(rendered(&fixture(3)), expected);
        assert_eq!(rendered(&fixture(3)), rendered(&fixture(3)));
    }

    #[test]
    fn parallel_render_matches_pixel_by_pixel() {
        let mut config = Config::smooth();
        config.width = 37;
        config.height = 23;
        config.max_iterations = 64;

        let mut frame = FrameBuffer::new(config.width, config.height);
        render(&config, &mut frame);

        for y in 0..config.height {
            for x in 0..config.width {
                let pixel = Pixel { x, y };
                assert_eq!(frame.get(pixel), shade(&config, pixel), "{:?}", pixel);
            }
        }
    }

    #[test]
    fn julia_render_uses_fixed_constant() {
        let mut config = fixture(15);
        config.fractal = Fractal::Julia { c: Complex::ZERO };
        config.viewport = Viewport::new(-2.0, 2.0, -2.0, 2.0);
        // c = 0 keeps the closed unit disc bounded; -1 - i and 1 + i take one step.
        let mut frame = FrameBuffer::new(4, 4);
        render(&config, &mut frame);
        assert_eq!(frame.get(Pixel { x: 2, y: 2 }), Colour::BLACK);
        assert_eq!(frame.get(Pixel { x: 3, y: 2 }), Colour::BLACK);
        assert_eq!(frame.get(Pixel { x: 1, y: 1 }), Colour::opaque(0, 0, 20));
        assert_eq!(frame.get(Pixel { x: 3, y: 3 }), Colour::opaque(0, 0, 20));
    }

    #[test]
    fn clear_resets_every_pixel() {
        let config = fixture(3);
        let mut frame = FrameBuffer::new(4, 4);
        render(&config, &mut frame);
        frame.clear();
        assert!(frame.as_u32().iter().all(|&pixel| pixel == 0));
        assert_eq!(frame.as_u32().len(), 16);
    }
}
