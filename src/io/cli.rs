//! Command-line interface for applying one selection-based edit to a world image

use crate::extent::TileWorld;
use crate::geometry::Vector;
use crate::io::configuration::{DEFAULT_CHANGE_LIMIT, OUTPUT_SUFFIX};
use crate::io::error::Result;
use crate::io::image::{export_world, load_world};
use crate::io::progress::ProgressManager;
use crate::mask::Mask;
use crate::region::{Region, RegionSelector, SelectorKind};
use crate::session::{Clipboard, EditSession};
use crate::tile::Block;
use clap::Parser;
use log::info;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "tiledit")]
#[command(
    author,
    version,
    about = "Apply masked, limited and undoable edits to a tile world image"
)]
/// Command-line arguments for the batch editor
// Each flag toggles an independent pipeline step
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// World PNG to edit
    #[arg(value_name = "WORLD")]
    pub world: PathBuf,

    /// Output PNG (defaults to <world>_edited.png)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Selection shape
    #[arg(long, value_name = "SHAPE", default_value_t = SelectorKind::Rectangular)]
    pub shape: SelectorKind,

    /// Primary selection point
    #[arg(short, long, value_name = "X,Y", allow_hyphen_values = true)]
    pub primary: Vector,

    /// Secondary selection point
    #[arg(short, long, value_name = "X,Y", allow_hyphen_values = true)]
    pub secondary: Vector,

    /// Block to apply to the selection (air, terrain:N, wall:N, liquid:N)
    #[arg(long, value_name = "BLOCK", conflicts_with = "clear")]
    pub set: Option<Block>,

    /// Clear terrain and liquid from the selection
    #[arg(short, long)]
    pub clear: bool,

    /// Only edit tiles matching this block
    #[arg(short, long, value_name = "BLOCK")]
    pub mask: Option<Block>,

    /// Only edit tiles not matching the mask block
    #[arg(long, requires = "mask")]
    pub invert_mask: bool,

    /// Maximum number of tiles changed by the whole run
    #[arg(short, long, default_value_t = DEFAULT_CHANGE_LIMIT)]
    pub limit: usize,

    /// Copy the selection and paste it with its lower corner here
    #[arg(long, value_name = "X,Y", allow_hyphen_values = true)]
    pub paste_at: Option<Vector>,

    /// Clear the selection after copying it
    #[arg(long)]
    pub cut: bool,

    /// Undo every change of the run before exporting
    #[arg(short, long)]
    pub undo: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Selector holding both points with the requested shape
    pub const fn selector(&self) -> RegionSelector {
        RegionSelector::new(self.shape)
            .with_primary(self.primary)
            .with_secondary(self.secondary)
    }

    /// Mask gating every write of the run
    pub fn build_mask(&self) -> Mask {
        match self.mask {
            None => Mask::Always,
            Some(block) if self.invert_mask => Mask::negated(Mask::template(block)),
            Some(block) => Mask::template(block),
        }
    }

    /// Whether the selection must be copied before editing
    pub const fn needs_clipboard(&self) -> bool {
        self.cut || self.paste_at.is_some()
    }

    /// Number of pipeline steps the run will perform
    pub const fn step_count(&self) -> usize {
        let mut steps = 2;
        if self.needs_clipboard() {
            steps += 1;
        }
        if self.set.is_some() || self.clear {
            steps += 1;
        }
        if self.paste_at.is_some() {
            steps += 1;
        }
        if self.undo {
            steps += 1;
        }
        steps
    }

    /// Path the edited world is written to
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| Self::default_output_path(&self.world))
    }

    fn default_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{OUTPUT_SUFFIX}.png", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

/// Tile counts produced by each step of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditReport {
    /// Tiles captured into the clipboard
    pub copied: usize,
    /// Tiles cleared by a cut
    pub cut: usize,
    /// Tiles changed by `--set` or `--clear`
    pub changed: usize,
    /// Tiles written by the paste
    pub pasted: usize,
    /// Changes reverted by `--undo`
    pub undone: usize,
}

/// Runs the edit pipeline described by the command line
pub struct EditProcessor {
    cli: Cli,
    progress: ProgressManager,
}

impl EditProcessor {
    /// Create a processor for the given arguments
    pub fn new(cli: Cli) -> Self {
        let progress = if cli.should_show_progress() {
            ProgressManager::new(cli.step_count())
        } else {
            ProgressManager::hidden()
        };

        Self { cli, progress }
    }

    /// Load the world, run every requested step and export the result
    ///
    /// # Errors
    ///
    /// Returns an error if the world cannot be loaded or the result cannot be
    /// exported
    pub fn process(&self) -> Result<EditReport> {
        self.progress.start_step("loading world");
        let (mut world, palette) = load_world(&self.cli.world)?;
        self.progress.complete_step("world loaded");

        let region = self.cli.selector().region();
        let report = self.edit(&mut world, &region)?;

        let output_path = self.cli.output_path();
        self.progress.start_step("exporting world");
        export_world(&world, &palette, &output_path)?;
        self.progress.complete_step("world exported");
        self.progress.finish();

        info!(
            "{}: {report:?} written to {}",
            self.cli.world.display(),
            output_path.display()
        );
        Ok(report)
    }

    /// Run the editing steps against an already loaded world
    ///
    /// # Errors
    ///
    /// Returns an error if the edit session cannot be built
    pub fn edit(&self, world: &mut TileWorld, region: &Region) -> Result<EditReport> {
        let mut report = EditReport::default();
        let mut session = EditSession::builder()
            .world(world)
            .mask(self.cli.build_mask())
            .limit(self.cli.limit)
            .build()?;

        let clipboard = if self.cli.cut {
            self.progress.start_step("cutting selection");
            let (clipboard, cleared) = Clipboard::cut_from(&mut session, region);
            report.cut = cleared;
            report.copied = clipboard.len();
            self.progress.complete_step("selection cut");
            Some(clipboard)
        } else if self.cli.needs_clipboard() {
            self.progress.start_step("copying selection");
            let clipboard = Clipboard::copy_from(&session, region);
            report.copied = clipboard.len();
            self.progress.complete_step("selection copied");
            Some(clipboard)
        } else {
            None
        };

        if let Some(block) = self.cli.set {
            self.progress.start_step("applying block");
            report.changed = session.apply_template(&block, region);
            self.progress.complete_step("block applied");
        } else if self.cli.clear {
            self.progress.start_step("clearing selection");
            report.changed = session.clear(region);
            self.progress.complete_step("selection cleared");
        }

        if let (Some(clipboard), Some(destination)) = (&clipboard, self.cli.paste_at) {
            self.progress.start_step("pasting clipboard");
            report.pasted = clipboard.paste_to(&mut session, destination);
            self.progress.complete_step("clipboard pasted");
        }

        if self.cli.undo {
            self.progress.start_step("undoing changes");
            report.undone = session.undo();
            self.progress.complete_step("changes undone");
        }

        Ok(report)
    }
}
