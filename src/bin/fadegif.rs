use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use fadegif::{BlendParams, FadeError};

/// Create a blending animation between two images.
#[derive(Parser, Debug)]
#[command(name = "fadegif", version)]
struct Cli {
    /// Path to the first image.
    image1: PathBuf,

    /// Path to the second image.
    image2: PathBuf,

    /// Path to save the output GIF.
    output: PathBuf,

    /// Number of blend steps [default: 30].
    #[arg(long)]
    frames: Option<u32>,

    /// Duration of each frame in ms [default: 100].
    #[arg(long)]
    duration: Option<u32>,

    /// Time to hold on the first image in ms [default: 2000].
    #[arg(long)]
    hold_start: Option<u32>,

    /// Time to hold on the final image in ms [default: 5000].
    #[arg(long)]
    hold_end: Option<u32>,

    /// Downscale inputs whose width or height exceeds this [default: 800].
    #[arg(long)]
    max_dimension: Option<u32>,

    /// JSON file with blend settings; explicit flags take precedence.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log per-stage details.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn blend_params(&self) -> anyhow::Result<BlendParams> {
        let mut params = match &self.config {
            Some(path) => BlendParams::from_path(path)?,
            None => BlendParams::default(),
        };
        if let Some(v) = self.frames {
            params.frames = v;
        }
        if let Some(v) = self.duration {
            params.duration_ms = v;
        }
        if let Some(v) = self.hold_start {
            params.hold_start_ms = v;
        }
        if let Some(v) = self.hold_end {
            params.hold_end_ms = v;
        }
        if let Some(v) = self.max_dimension {
            params.max_dimension = v;
        }
        params.validate().context("invalid blend settings")?;
        Ok(params)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .with_target(false)
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let params = cli.blend_params()?;

    match fadegif::blend_to_gif(&cli.image1, &cli.image2, &cli.output, &params) {
        Ok(report) => {
            tracing::info!(
                frames = report.frame_count(),
                size = %report.size,
                encoder = %report.encoder,
                "gif created successfully and saved to {}",
                cli.output.display()
            );
            Ok(())
        }
        // Encoding is best effort: report and exit normally without a valid output.
        Err(FadeError::Encode(msg)) => {
            tracing::error!(error = %msg, "could not save gif");
            tracing::error!("try reducing image dimensions or number of frames");
            Ok(())
        }
        Err(e) => Err(e).with_context(|| {
            format!(
                "blend '{}' -> '{}'",
                cli.image1.display(),
                cli.image2.display()
            )
        }),
    }
}
