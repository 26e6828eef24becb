//! Command-line interface for rendering, saving and previewing one identicon

use crate::io::configuration::DEFAULT_TILE_SIZE;
use crate::io::error::Result;
use crate::io::image::{default_output_path, save_png, show};
use crate::render::renderer::render_identicon;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "identicon")]
#[command(
    author,
    version,
    about = "Render a deterministic identicon from an input string"
)]
/// Command-line arguments for the identicon tool
pub struct Cli {
    /// Input code to derive the identicon from
    #[arg(short, long)]
    pub code: String,

    /// Tile edge length in pixels (the image is three tiles square)
    #[arg(short, long, default_value_t = DEFAULT_TILE_SIZE)]
    pub size: u32,

    /// Save to this path (takes priority over --no-save)
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Skip saving to the default file name
    #[arg(short, long)]
    pub no_save: bool,

    /// Open the image in the platform viewer
    #[arg(short = 'r', long)]
    pub show: bool,
}

impl Cli {
    /// Where the image should be saved, if anywhere
    ///
    /// Priority: explicit `--file`, then `--no-save`, then the default name.
    pub fn save_target(&self) -> Option<PathBuf> {
        match (&self.file, self.no_save) {
            (Some(path), _) => Some(path.clone()),
            (None, true) => None,
            (None, false) => Some(default_output_path(&self.code)),
        }
    }
}

/// Runs one CLI invocation: render, then save and display independently
pub struct Generator {
    cli: Cli,
}

impl Generator {
    /// Create a generator with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Render and dispatch the identicon
    ///
    /// Returns the path the image was saved to, if it was saved.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering, saving or launching the viewer fails
    // Allow print for user feedback on the saved location
    #[allow(clippy::print_stdout)]
    pub fn process(&self) -> Result<Option<PathBuf>> {
        let image = render_identicon(&self.cli.code, self.cli.size)?;

        let saved = self.cli.save_target();
        if let Some(path) = &saved {
            save_png(&image, path)?;
            log::info!("saved identicon for {:?}", self.cli.code);
            println!("Saved to: {}", path.display());
        }

        if self.cli.show {
            show(&image, &self.cli.code)?;
        }

        Ok(saved)
    }
}
