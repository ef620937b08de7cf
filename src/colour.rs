//! Colouring algorithms.

use bytemuck::{Pod, Zeroable};

/// A packed `0xAARRGGBB` pixel.
///
/// Little-endian memory order of the packed value is `B, G, R, A`, which is
/// what the frame texture's `Bgra8Unorm` format expects.
#[repr(transparent)]
#[derive(Pod, Zeroable, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Colour(pub u32);

impl Colour {
    pub const BLACK: Self = Colour::opaque(0, 0, 0);

    pub const fn opaque(red: u8, green: u8, blue: u8) -> Self {
        Colour(0xff00_0000 | ((red as u32) << 16) | ((green as u32) << 8) | blue as u32)
    }

    pub fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub fn blue(self) -> u8 {
        self.0 as u8
    }
}

/// Maps an escape count to a colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Palette {
    /// Bernstein-like polynomials over `t = iteration / max_iterations`. Black at both ends.
    Smooth,
    /// Blue rising by 20 per iteration; points that never escaped are black.
    LinearBlue,
}

impl Palette {
    pub fn colour(self, iteration: u32, max_iterations: u32) -> Colour {
        match self {
            Palette::Smooth => smooth(iteration, max_iterations),
            Palette::LinearBlue => linear_blue(iteration, max_iterations),
        }
    }
}

/// Truncate towards zero and saturate into a byte.
fn channel(value: f64) -> u8 {
    value.trunc().clamp(0.0, 255.0) as u8
}

fn smooth(iteration: u32, max_iterations: u32) -> Colour {
    let t = iteration as f64 / max_iterations as f64;
    let s = 1.0 - t;

    let red = channel(9.0 * s * t * t * t * 255.0);
    let green = channel(15.0 * s * s * t * t * 255.0);
    let blue = channel(8.5 * s * s * s * t * 255.0);

    Colour::opaque(red, green, blue)
}

const LINEAR_BLUE_STEP: u32 = 20;

fn linear_blue(iteration: u32, max_iterations: u32) -> Colour {
    if iteration >= max_iterations {
        return Colour::BLACK;
    }
    let blue = iteration.saturating_mul(LINEAR_BLUE_STEP).min(u8::MAX as u32);
    Colour::opaque(0, 0, blue as u8)
}
