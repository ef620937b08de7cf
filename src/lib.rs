//! Escape-time fractal rendering into a window.
//!
//! Every frame maps each pixel onto the complex plane through a [`Viewport`],
//! counts the iterations of `z <- z² + c` until the orbit leaves the circle of
//! radius 2, colours the count with a [`Palette`] and hands the finished
//! [`FrameBuffer`] to a [`Presenter`].
//!
//! [`Viewport`]: viewport::Viewport
//! [`Palette`]: colour::Palette
//! [`FrameBuffer`]: frame::FrameBuffer
//! [`Presenter`]: presenter::Presenter

pub mod colour;
pub mod config;
pub mod error;
pub mod escape;
pub mod frame;
pub mod frame_loop;
pub mod pixel;
pub mod presenter;
pub mod screen;
pub mod var;
pub mod viewport;
pub mod window;
