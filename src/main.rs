use anyhow::Context;
use log::{error, info};

use mandelbrot_renderer::{
    config::{self, Config},
    error::Error,
    frame_loop,
    window::WindowPresenter,
};

fn run() -> anyhow::Result<()> {
    let preset = std::env::args()
        .nth(1)
        .unwrap_or_else(|| String::from(config::DEFAULT_PRESET));

    let config = Config::preset(&preset)?;
    config.validate()?;
    info!(
        "preset {:?}: {}x{}, {} iterations, {:?} palette, {:?}",
        preset,
        config.width,
        config.height,
        config.max_iterations,
        config.palette,
        config.fractal
    );

    let mut presenter = WindowPresenter::open(&config).context("failed to open the window")?;
    let frames = frame_loop::run(&mut presenter, &config)?;
    info!("presented {} frames", frames);

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Mandelbrot Renderer Started!");

    let result = run();
    if let Err(err) = &result {
        match err.downcast_ref::<Error>() {
            Some(_) => error!("{:#}", err),
            None => error!("unexpected error: {:?}", err),
        }
    }

    info!("Mandelbrot Renderer Finished!");

    if result.is_err() {
        std::process::exit(1);
    }
}
