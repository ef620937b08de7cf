use bytemuck::{Pod, Zeroable};

use crate::config::Config;

/// Frame dimensions in physical pixels, laid out as the shader's `vec2<u32>` uniform.
#[repr(C)]
#[derive(Pod, Zeroable, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn of_frame(config: &Config) -> Self {
        Self {
            width: config.width,
            height: config.height,
        }
    }
}

impl From<winit::dpi::PhysicalSize<u32>> for Size {
    fn from(size: winit::dpi::PhysicalSize<u32>) -> Self {
        Self {
            width: size.width,
            height: size.height,
        }
    }
}
