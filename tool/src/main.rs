//! png-to-bitmap CLI - convert the mascot artwork into e-ink bitmap arrays.

use clap::{Parser, ValueEnum};
use mascot_image::{DEFAULT_THRESHOLD, Method, load_image};
use tracing_subscriber::EnvFilter;

use png_to_bitmap::{ToolConfig, build_artifacts, write_artifacts};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MethodArg {
    Threshold,
    Dither,
}

#[derive(Parser)]
#[command(
    name = "png-to-bitmap",
    about = "Convert the mascot artwork into packed 1-bit bitmaps for the e-ink display"
)]
struct Args {
    /// Binarization method
    #[arg(value_enum, default_value = "threshold")]
    method: MethodArg,
    /// Cut-off level for the threshold method (ignored when dithering).
    /// Values outside 0..=255 give an all-black or all-white image.
    #[arg(default_value_t = DEFAULT_THRESHOLD, allow_negative_numbers = true)]
    threshold: i32,
}

impl Args {
    fn method(&self) -> Method {
        match self.method {
            MethodArg::Threshold => Method::Threshold {
                threshold: self.threshold,
            },
            MethodArg::Dither => Method::Dither,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .without_time()
        .with_level(false)
        .init();

    let args = Args::parse();
    let config = ToolConfig::load();

    tracing::info!("Loading {}...", config.source.display());
    let source = load_image(&config.source)?;
    tracing::info!(
        "  Original: {}x{}, mode={:?}",
        source.width(),
        source.height(),
        source.color()
    );

    let artifacts = build_artifacts(&source, args.method(), &config.source_name())?;
    write_artifacts(&artifacts, &config)?;

    tracing::info!("Done!");
    Ok(())
}
