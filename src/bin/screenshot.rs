//! Headless screenshot generator for squaregrid
//!
//! Runs the render loop against an in-memory frame and writes a PNG.
//!
//! Usage:
//!   cargo run --bin screenshot -- --out grid.png
//!   cargo run --bin screenshot -- --frames 120 --pointer 45,5 --scale 2

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use image::{Rgba, RgbaImage};

use squaregrid::config::GridConfig;
use squaregrid::render_loop::RenderLoop;
use squaregrid::runtime::{FrameScheduler, Signal, SignalHub};
use squaregrid::view::{Canvas, Frame};
use squaregrid::viewport::FixedViewport;

#[derive(Parser, Debug)]
#[command(name = "screenshot", about = "Render the grid to a PNG without a window")]
struct Args {
    /// Config file to render (defaults apply when omitted)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Width in logical pixels
    #[arg(long, default_value_t = 800.0)]
    width: f64,
    /// Height in logical pixels
    #[arg(long, default_value_t = 600.0)]
    height: f64,
    /// Device scale factor
    #[arg(long, default_value_t = 1.0)]
    scale: f64,
    /// Frames to advance before capturing
    #[arg(long, default_value_t = 1)]
    frames: u32,
    /// Pointer position as "x,y" in logical pixels
    #[arg(long, value_parser = parse_point)]
    pointer: Option<(f64, f64)>,
    /// Output PNG path
    #[arg(long, default_value = "grid.png")]
    out: PathBuf,
}

fn parse_point(raw: &str) -> Result<(f64, f64), String> {
    let (x, y) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected x,y, got {:?}", raw))?;
    let x = x.trim().parse::<f64>().map_err(|e| e.to_string())?;
    let y = y.trim().parse::<f64>().map_err(|e| e.to_string())?;
    Ok((x, y))
}

fn to_image(frame: &Frame) -> RgbaImage {
    let mut img = RgbaImage::new(frame.width() as u32, frame.height() as u32);
    for (i, px) in frame.pixels().iter().enumerate() {
        let x = (i % frame.width()) as u32;
        let y = (i / frame.width()) as u32;
        img.put_pixel(
            x,
            y,
            Rgba([(px >> 16) as u8, (px >> 8) as u8, *px as u8, 0xFF]),
        );
    }
    img
}

fn main() -> Result<()> {
    squaregrid::tracing::init_console();
    let args = Args::parse();

    if args.frames == 0 {
        bail!("--frames must be at least 1");
    }

    let config = match &args.config {
        Some(path) => GridConfig::load_from(path),
        None => GridConfig::default(),
    };
    let host = FixedViewport::new(args.width, args.height, args.scale);

    let signals = SignalHub::new();
    let mut frames = FrameScheduler::new();
    let mut render_loop = RenderLoop::new();
    let mut frame = Frame::new(1, 1);

    render_loop.start(config, &signals, &mut frames);
    if let Some((x, y)) = args.pointer {
        signals.dispatch(Signal::PointerMove { x, y });
    }

    for _ in 0..args.frames {
        frames.run_frame();
        render_loop.pump(&host, Some(&mut frame as &mut dyn Canvas));
    }
    render_loop.stop();

    let (width, height) = frame.size_px();
    to_image(&frame)
        .save(&args.out)
        .with_context(|| format!("Failed to write {}", args.out.display()))?;
    println!("Wrote {}x{} screenshot to {}", width, height, args.out.display());
    Ok(())
}
