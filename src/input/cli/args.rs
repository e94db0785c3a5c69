use std::num::{NonZeroU32, NonZeroUsize};
use std::path::PathBuf;

use clap::{Args, Parser};

use crate::config::{DEFAULT_HEIGHT, DEFAULT_WIDTH, ViewerConfig};
use crate::core::actions::render_frame::DEFAULT_BAND_COUNT;
use crate::core::actions::render_frame::dispatchers::DispatchStrategy;
use crate::core::data::colour::Colour;
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::fractals::mandelbrot::algorithm::{DEFAULT_ESCAPE_RADIUS_SQUARED, DEFAULT_MAX_ITERATIONS};
use crate::core::fractals::mandelbrot::palette::PaletteKind;
use crate::core::util::available_threads::available_threads;

/// Options shared by every binary.
#[derive(Args, Debug, Clone, PartialEq)]
pub struct ViewerArgs {
    /// Raster width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Raster height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Iteration budget per pixel
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub max_iterations: u32,

    /// Squared magnitude past which a point counts as escaped
    #[arg(long, default_value_t = DEFAULT_ESCAPE_RADIUS_SQUARED)]
    pub escape_radius_squared: f64,

    /// Row bands per frame
    #[arg(long, default_value_t = DEFAULT_BAND_COUNT)]
    pub bands: NonZeroU32,

    /// Worker threads (defaults to available parallelism)
    #[arg(long)]
    pub threads: Option<NonZeroUsize>,

    #[arg(long, value_enum, default_value_t)]
    pub palette: PaletteKind,

    /// Colour for points that never escape, as RRGGBB hex
    #[arg(long, value_parser = parse_hex_colour)]
    pub interior_colour: Option<Colour>,

    #[arg(long, value_enum, default_value_t)]
    pub dispatch: DispatchStrategy,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    pub verbose: bool,
}

impl ViewerArgs {
    #[must_use]
    pub fn into_config(self) -> ViewerConfig {
        ViewerConfig {
            width: self.width,
            height: self.height,
            max_iterations: self.max_iterations,
            escape_radius_squared: self.escape_radius_squared,
            band_count: self.bands,
            threads: self.threads.unwrap_or_else(available_threads),
            palette: self.palette,
            interior_colour: self.interior_colour,
            dispatch: self.dispatch,
            ..ViewerConfig::default()
        }
    }
}

fn parse_hex_colour(value: &str) -> Result<Colour, String> {
    let digits = value.strip_prefix('#').unwrap_or(value);
    if digits.len() != 6 || !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        return Err(format!("expected RRGGBB, got {value:?}"));
    }

    let packed = u32::from_str_radix(digits, 16).map_err(|err| format!("invalid colour {value:?}: {err}"))?;
    let [_, r, g, b] = packed.to_be_bytes();
    Ok(Colour::opaque(r, g, b))
}

#[derive(Parser, Debug)]
#[command(name = "viewer", version, about = "Interactive Mandelbrot set viewer")]
pub struct ViewerCli {
    #[command(flatten)]
    pub viewer: ViewerArgs,
}

#[derive(Parser, Debug)]
#[command(name = "mandelbrot_viewer", version, about = "Render one Mandelbrot frame to a PPM file")]
pub struct SnapshotCli {
    #[command(flatten)]
    pub viewer: ViewerArgs,

    /// Destination PPM file
    #[arg(short, long, default_value = "output/mandelbrot.ppm")]
    pub output: PathBuf,

    /// Real part of the view centre
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub offset_x: f64,

    /// Imaginary part of the view centre
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub offset_y: f64,

    #[arg(long, default_value_t = 1.0)]
    pub zoom: f64,
}

impl SnapshotCli {
    pub fn viewport(&self) -> Result<Viewport, ViewportError> {
        Viewport::new(self.offset_x, self.offset_y, self.zoom)
    }
}
