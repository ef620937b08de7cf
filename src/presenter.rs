use crate::{error::Error, screen};

/// Outcome of draining pending window events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Poll {
    Continue,
    Quit,
}

/// Something that can show a packed `0xAARRGGBB` frame.
pub trait Presenter {
    /// Drain pending events without blocking.
    fn poll(&mut self) -> Poll;

    /// Size of the frames this presenter shows, in physical pixels. May change after `poll`.
    fn frame_size(&self) -> screen::Size;

    /// Reset the presentable surface before the next frame.
    fn clear(&mut self);

    /// Upload and show a complete frame. `row_width` is the frame's width in pixels.
    fn present(&mut self, pixels: &[u32], row_width: u32) -> Result<(), Error>;
}
