//! Springball window: drag the ball, `S` adds a spring, `R` resets.

use std::process::ExitCode;

use clap::Parser;
use ftlog::{LevelFilter, LoggerGuard};

use springball::Config;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Window width in pixels.
    #[arg(long, default_value_t = 2400)]
    width: u32,

    /// Window height in pixels.
    #[arg(long, default_value_t = 1200)]
    height: u32,

    /// Pixels per meter.
    #[arg(short('s'), long, default_value_t = 10.0)]
    scale: f32,

    /// Pixel x of the world origin.
    #[arg(long, default_value_t = 1000.0)]
    origin_x: f32,

    /// Pixel y of the world origin.
    #[arg(long, default_value_t = 600.0)]
    origin_y: f32,

    /// Soft frame-rate cap; 0 disables it.
    #[arg(short('f'), long, default_value_t = 600.0)]
    max_fps: f32,

    /// Step the physics by this many seconds every frame instead of the
    /// measured frame time.
    #[arg(long)]
    fixed_dt: Option<f32>,

    /// Physics speed multiplier; 0.5 is slow motion.
    #[arg(short('t'), long, default_value_t = 1.0)]
    time_scale: f32,

    /// Do not log FPS, delta time and ball position every frame.
    #[arg(short('q'), long)]
    quiet: bool,

    /// Maximum log level (off, error, warn, info, debug, trace).
    #[arg(short('l'), long, default_value = "info")]
    log_level: LevelFilter,
}

impl Args {
    fn config(&self) -> Config {
        Config::new()
            .with_window_size(self.width, self.height)
            .with_scale(self.scale)
            .with_origin(self.origin_x, self.origin_y)
            .with_max_fps(self.max_fps)
            .with_fixed_delta(self.fixed_dt)
            .with_time_scale(self.time_scale)
            .with_frame_diagnostics(!self.quiet)
    }
}

/// Configures the logger to write to stderr.
fn configure_logger(level: LevelFilter) -> Result<LoggerGuard, String> {
    ftlog::Builder::new()
        .max_log_level(level)
        .root(std::io::stderr())
        .try_init()
        .map_err(|e| e.to_string())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let _guard = match configure_logger(args.log_level) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logger: {e}");
            return ExitCode::FAILURE;
        }
    };

    let config = args.config();
    ftlog::info!("Starting with {:?}", config);

    match springball::run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ftlog::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
