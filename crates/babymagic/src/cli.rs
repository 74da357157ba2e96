// Author: Dustin Pilgrim
// License: MIT

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

use babymagic_core::{AspectConstraint, AspectPreset, CropRect, Gesture, Surface};

#[derive(Debug, Parser)]
#[command(name = "babymagic", version, about = "BabyMagic: crop a photo for the studio.")]
pub struct Args {
    /// Log to stderr (in addition to the log file)
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Override log file path (default: $XDG_STATE_HOME/babymagic/babymagic.log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Override config file path (default: $XDG_CONFIG_HOME/babymagic/babymagic.rune)
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Debug, Subcommand)]
pub enum Cmd {
    /// List the aspect ratio presets
    Presets,

    /// Show the natural size and format of an image
    Inspect {
        /// Image file
        image: PathBuf,
    },

    /// Run a crop session on an image and save the result
    Crop(CropArgs),
}

#[derive(Debug, ClapArgs)]
pub struct CropArgs {
    /// Image file to crop
    pub image: PathBuf,

    /// Lock to a preset ratio (default: config babymagic.default_aspect)
    #[arg(long, conflicts_with = "ratio")]
    pub aspect: Option<AspectPreset>,

    /// Lock to a custom ratio, e.g. 5:4 or 1.25
    #[arg(long, value_name = "W:H")]
    pub ratio: Option<AspectConstraint>,

    /// Explicit selection in percent of the image box
    #[arg(long, value_name = "X,Y,W,H")]
    pub rect: Option<CropRect>,

    /// On-screen size of the image box (default: natural image size)
    #[arg(long, value_name = "WxH")]
    pub surface: Option<Surface>,

    /// Replay a drag gesture; pixels are surface pixels. Repeatable.
    #[arg(long = "drag", value_name = "KIND:DX,DY", allow_hyphen_values = true)]
    pub drags: Vec<Gesture>,

    /// JPEG quality 1-100 (default: config babymagic.jpeg_quality)
    #[arg(long, short = 'q', value_parser = clap::value_parser!(u8).range(1..=100))]
    pub quality: Option<u8>,

    /// Output file (default: <output dir>/babymagic-<timestamp>.jpg)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Print the result as a data: URL instead of writing a file
    #[arg(long, conflicts_with = "output")]
    pub data_url: bool,

    /// Replay everything but stop before confirming; prints the selection
    #[arg(long)]
    pub dry_run: bool,
}

impl CropArgs {
    /// Explicit ratio wins over a preset, a preset over the configured default.
    pub fn constraint(&self, default: AspectPreset) -> AspectConstraint {
        match (self.ratio, self.aspect) {
            (Some(ratio), _) => ratio,
            (None, Some(preset)) => preset.constraint(),
            (None, None) => default.constraint(),
        }
    }
}
