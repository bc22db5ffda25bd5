//! Face overlay application: replay frames and a landmark trace, write composited output.

use anyhow::Result;
use clap::Parser;
use face_overlay::app::{AppOptions, ImageDirSource, OverlayApp};
use face_overlay::config::{Config, EXAMPLE_CONFIG};
use face_overlay::filter_config::FilterKind;
use face_overlay::landmarks::{FaceLandmarker, NoopLandmarker, TraceLandmarker};
use face_overlay::pipeline::OverlayPipeline;
use log::info;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory of input frames (image files, processed in name order)
    #[arg(long)]
    frames: PathBuf,

    /// Landmark trace file (YAML); without it every frame passes through
    #[arg(long)]
    landmarks: Option<PathBuf>,

    /// Output directory for composited frames
    #[arg(short, long, default_value = "out")]
    out: PathBuf,

    /// Initial filter key ('1' glasses, '2' mustache, '3' hat, '4' crown)
    #[arg(short, long, default_value = "1")]
    filter: char,

    /// Configuration file (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print an example configuration file and exit
    #[arg(long)]
    print_example_config: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    if args.print_example_config {
        print!("{EXAMPLE_CONFIG}");
        return Ok(());
    }

    // Load and validate configuration before touching any frame
    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    config.validate()?;

    let initial = FilterKind::from_key(args.filter)
        .ok_or_else(|| anyhow::anyhow!("Unknown filter key: {}", args.filter))?;
    info!("Initial filter: {initial}");

    let pipeline = OverlayPipeline::new(
        config.load_assets()?,
        initial,
        config.create_smoother()?,
        config.depth.mapping(),
    )?
    .with_depth_reference(config.depth.reference_index)?;

    let source = ImageDirSource::new(&args.frames)?;
    let detector: Box<dyn FaceLandmarker> = match &args.landmarks {
        Some(path) => Box::new(TraceLandmarker::from_file(path)?),
        None => Box::new(NoopLandmarker),
    };

    let options = AppOptions {
        output_dir: args.out,
        flip_horizontal: config.display.flip_horizontal,
        log_fps: config.display.log_fps,
    };

    let mut app = OverlayApp::new(pipeline, Box::new(source), detector, options)?;
    let stats = app.run()?;
    info!("Done: {} frames processed, {} overlays drawn", stats.frames, stats.overlays);

    Ok(())
}
