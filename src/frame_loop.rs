//! Poll, compute, present until the presenter reports a quit.

use std::time::Instant;

use log::{debug, info};

use crate::{
    config::Config,
    error::Error,
    frame::{self, FrameBuffer},
    presenter::{Poll, Presenter},
};

/// Run frames until `presenter` asks to quit, returning how many were presented.
///
/// Each frame is computed in full, at the presenter's current frame size, before
/// it is presented, and no frame is started once a quit has been observed.
pub fn run<P: Presenter>(presenter: &mut P, config: &Config) -> Result<usize, Error> {
    let mut frame_config = config.resized(presenter.frame_size());
    let mut frame = FrameBuffer::new(frame_config.width, frame_config.height);
    let mut frames = 0;

    loop {
        if presenter.poll() == Poll::Quit {
            info!("quit requested after {} frames", frames);
            break;
        }

        let size = presenter.frame_size();
        if size.width != frame.width() || size.height != frame.height() {
            debug!("frame resized to {}x{}", size.width, size.height);
            frame_config = config.resized(size);
            frame = FrameBuffer::new(size.width, size.height);
        }

        presenter.clear();
        frame.clear();

        let start = Instant::now();
        frame::render(&frame_config, &mut frame);
        presenter.present(frame.as_u32(), frame.width())?;
        frames += 1;

        debug!("frame time: {}ms", start.elapsed().as_millis());
    }

    Ok(frames)
}
