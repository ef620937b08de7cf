use thiserror::Error;

/// Failures while opening or presenting to the window.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to create window: {0}")]
    CreateWindow(#[from] winit::error::OsError),
    #[error("no graphics adapter can present to the window")]
    NoAdapter,
    #[error("failed to open graphics device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
    #[error("window surface supports no texture formats")]
    NoSurfaceFormat,
    #[error("failed to acquire surface texture: {0}")]
    Surface(#[source] wgpu::SurfaceError),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
