//! `retouch`: generative photo edits from the command line.
//!
//! Geometry (padding, markers, crop-back) runs locally; the relay only
//! forwards the model call. Each edit writes a PNG and prints a JSON summary
//! on stdout. Logs go to stderr.

mod args;
mod error;
mod pipeline;
mod relay;

use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use image::{Rgba, RgbaImage};
use serde::Serialize;
use tracing::Level;
use wire::EditKind;

use canvas::consts::DEFAULT_PAD_FILL;
use canvas::geometry::display_to_natural;
use canvas::{Expansion, Point, Rect, Size, codec, raster};

use crate::error::CliError;
use crate::pipeline::{EditSummary, Editor};
use crate::relay::{ImageGenerator, RelayClient};

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;

#[derive(Parser, Debug)]
#[command(name = "retouch", about = "Generative photo edits through the retouch relay")]
struct Cli {
    #[arg(long, global = true, env = "RETOUCH_RELAY_URL", default_value = "http://127.0.0.1:3000")]
    relay_url: String,

    /// Padding colour for the square canvas and expanded edges [default: opaque black].
    #[arg(long, global = true, value_parser = args::parse_color)]
    fill: Option<Rgba<u8>>,

    #[arg(long, global = true, default_value_t = 180)]
    timeout_secs: u64,

    /// Log request details to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    fn fill(&self) -> Rgba<u8> {
        self.fill.unwrap_or(Rgba(DEFAULT_PAD_FILL))
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    #[command(flatten)]
    Edit(EditCommand),
    /// Crop locally, without calling the relay.
    Crop {
        image: PathBuf,
        #[arg(long, value_parser = args::parse_rect)]
        rect: Rect,
        #[command(flatten)]
        out: OutputArgs,
    },
    /// Check that the relay is up.
    Ping,
    /// Show the relay's model and whether it holds an API key.
    Info,
}

#[derive(Subcommand, Debug)]
enum EditCommand {
    /// Localized edit at a hotspot.
    Retouch {
        image: PathBuf,
        #[command(flatten)]
        hotspot: HotspotArgs,
        #[arg(long)]
        prompt: String,
        #[command(flatten)]
        out: OutputArgs,
    },
    /// Stylistic filter over the whole photo.
    Filter {
        image: PathBuf,
        #[arg(long)]
        prompt: String,
        #[command(flatten)]
        out: OutputArgs,
    },
    /// Global photographic adjustment.
    Adjust {
        image: PathBuf,
        #[arg(long)]
        prompt: String,
        #[command(flatten)]
        out: OutputArgs,
    },
    /// Place an object into a scene at a hotspot.
    Place {
        scene: PathBuf,
        object: PathBuf,
        #[command(flatten)]
        hotspot: HotspotArgs,
        #[arg(long, default_value = "")]
        prompt: String,
        #[command(flatten)]
        out: OutputArgs,
    },
    /// New scene from mood-board tiles.
    Compose {
        #[arg(required = true)]
        tiles: Vec<PathBuf>,
        #[arg(long)]
        prompt: String,
        /// Side of the square output.
        #[arg(long, default_value_t = 1024)]
        size: u32,
        #[command(flatten)]
        out: OutputArgs,
    },
    /// Grow the canvas and fill the new area.
    Expand {
        image: PathBuf,
        #[command(flatten)]
        edges: EdgeArgs,
        #[arg(long, default_value = "")]
        prompt: String,
        #[command(flatten)]
        out: OutputArgs,
    },
}

#[derive(Args, Debug)]
struct HotspotArgs {
    /// Hotspot as X,Y in image pixels, or display pixels with --display.
    #[arg(long, value_parser = args::parse_point)]
    at: Point,

    /// Size the image was shown at when X,Y was picked, as WxH.
    #[arg(long, value_parser = args::parse_display)]
    display: Option<(f64, f64)>,
}

impl HotspotArgs {
    fn resolve(&self, natural: Size) -> Result<Point, CliError> {
        let Some((width, height)) = self.display else {
            return Ok(self.at);
        };
        display_to_natural(self.at, width, height, natural).ok_or_else(|| {
            CliError::InvalidArg(format!(
                "({}, {}) is outside the {width}x{height} display",
                self.at.x, self.at.y
            ))
        })
    }
}

#[derive(Args, Debug)]
struct EdgeArgs {
    /// Pixels to add on every edge not given explicitly.
    #[arg(long)]
    all: Option<u32>,
    #[arg(long)]
    top: Option<u32>,
    #[arg(long)]
    right: Option<u32>,
    #[arg(long)]
    bottom: Option<u32>,
    #[arg(long)]
    left: Option<u32>,
}

impl EdgeArgs {
    fn expansion(&self) -> Expansion {
        let base = self.all.unwrap_or(0);
        Expansion {
            top: self.top.unwrap_or(base),
            right: self.right.unwrap_or(base),
            bottom: self.bottom.unwrap_or(base),
            left: self.left.unwrap_or(base),
        }
    }
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Output PNG path. Defaults to `<stem>-<kind>.png` next to the input.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl OutputArgs {
    fn path_for(&self, input: &Path, suffix: &str) -> PathBuf {
        if let Some(path) = &self.output {
            return path.clone();
        }
        let stem = input.file_stem().map_or(Cow::Borrowed("image"), |s| s.to_string_lossy());
        input.with_file_name(format!("{stem}-{suffix}.png"))
    }
}

/// Printed after an edit.
#[derive(Serialize)]
struct Report<'a> {
    written: &'a Path,
    #[serde(flatten)]
    summary: &'a EditSummary,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let fill = cli.fill();
    match cli.command {
        Command::Crop { image, rect, out } => run_crop(&image, rect, &out),
        Command::Ping => {
            relay_client(&cli.relay_url, cli.timeout_secs)?.ping().await?;
            println!("ok");
            Ok(())
        }
        Command::Info => print_json(&relay_client(&cli.relay_url, cli.timeout_secs)?.info().await?),
        Command::Edit(command) => {
            let editor = Editor::new(relay_client(&cli.relay_url, cli.timeout_secs)?, fill);
            run_edit(&editor, command).await
        }
    }
}

fn relay_client(url: &str, timeout_secs: u64) -> Result<RelayClient, CliError> {
    RelayClient::new(url, Duration::from_secs(timeout_secs))
}

async fn run_edit<G: ImageGenerator>(editor: &Editor<G>, command: EditCommand) -> Result<(), CliError> {
    let (outcome, output) = match command {
        EditCommand::Retouch { image, hotspot, prompt, out } => {
            let img = load_image(&image)?;
            let at = hotspot.resolve(raster::size_of(&img))?;
            let outcome = editor.retouch(&img, at, &prompt).await?;
            (outcome, out.path_for(&image, EditKind::Retouch.as_str()))
        }
        EditCommand::Filter { image, prompt, out } => {
            let outcome = editor.filter(&load_image(&image)?, &prompt).await?;
            (outcome, out.path_for(&image, EditKind::Filter.as_str()))
        }
        EditCommand::Adjust { image, prompt, out } => {
            let outcome = editor.adjust(&load_image(&image)?, &prompt).await?;
            (outcome, out.path_for(&image, EditKind::Adjust.as_str()))
        }
        EditCommand::Place { scene, object, hotspot, prompt, out } => {
            let scene_img = load_image(&scene)?;
            let at = hotspot.resolve(raster::size_of(&scene_img))?;
            let outcome = editor.place(&scene_img, &load_image(&object)?, at, &prompt).await?;
            (outcome, out.path_for(&scene, EditKind::Place.as_str()))
        }
        EditCommand::Compose { tiles, prompt, size, out } => {
            let first = tiles
                .first()
                .ok_or_else(|| CliError::InvalidArg("compose needs at least one tile".into()))?;
            let images = tiles.iter().map(|p| load_image(p)).collect::<Result<Vec<_>, _>>()?;
            let outcome = editor.compose(&images, &prompt, size).await?;
            (outcome, out.path_for(first, EditKind::Compose.as_str()))
        }
        EditCommand::Expand { image, edges, prompt, out } => {
            let outcome = editor.expand(&load_image(&image)?, edges.expansion(), &prompt).await?;
            (outcome, out.path_for(&image, EditKind::Expand.as_str()))
        }
    };

    save_png(&output, &outcome.image)?;
    tracing::info!(path = %output.display(), "wrote edited image");
    print_json(&Report { written: &output, summary: &outcome.summary })
}

fn run_crop(image: &Path, rect: Rect, out: &OutputArgs) -> Result<(), CliError> {
    let img = load_image(image)?;
    let cropped = raster::crop(&img, rect)?;
    let output = out.path_for(image, "crop");
    save_png(&output, &cropped)?;
    print_json(&serde_json::json!({
        "written": output,
        "input": raster::size_of(&img),
        "output": raster::size_of(&cropped),
    }))
}

fn load_image(path: &Path) -> Result<RgbaImage, CliError> {
    let bytes = std::fs::read(path).map_err(|source| CliError::Io { path: path.to_owned(), source })?;
    let Some(mime) = codec::sniff_mime(&bytes) else {
        return Err(CliError::UnsupportedImage(path.to_owned()));
    };
    tracing::debug!(path = %path.display(), mime, bytes = bytes.len(), "loaded input image");
    Ok(codec::decode(&bytes)?)
}

fn save_png(path: &Path, img: &RgbaImage) -> Result<(), CliError> {
    let png = codec::encode_png(img)?;
    std::fs::write(path, png).map_err(|source| CliError::Io { path: path.to_owned(), source })
}

fn print_json(value: &impl Serialize) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
