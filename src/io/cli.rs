//! Command-line interface for generating domino tilings

use crate::algorithm::{GenerationStats, SearchConfig, StepResult, TilingGenerator};
use crate::io::configuration::{
    DEFAULT_ATTEMPTS, DEFAULT_CELL_SIZE, DEFAULT_HEIGHT, DEFAULT_MAX_STEPS, DEFAULT_SEED,
    DEFAULT_WIDTH, GIF_FRAME_DELAY_MS, MAX_CAPTURED_FRAMES, MAX_CELL_SIZE,
};
use crate::io::error::{Result, TilingError, invalid_parameter};
use crate::io::image::export_tiling_as_png;
use crate::io::progress::ProgressManager;
use crate::io::text::render_ascii;
use crate::io::visualization::VisualizationCapture;
use crate::spatial::Tile;
use clap::{ArgAction, Parser};
use rand::{SeedableRng, rngs::StdRng};
use std::io::Write;
use std::path::PathBuf;
use tracing::{Level, info, warn};

#[derive(Parser, Debug)]
#[command(name = "dominotile")]
#[command(
    author,
    version,
    about = "Generate random domino tilings of rectangular grids"
)]
/// Command-line arguments for the tiling generator
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Grid width in cells
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH, allow_negative_numbers = true)]
    pub width: i32,

    /// Grid height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT, allow_negative_numbers = true)]
    pub height: i32,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Maximum search steps per attempt
    #[arg(short, long, default_value_t = DEFAULT_MAX_STEPS)]
    pub max_steps: usize,

    /// Attempts before giving up, each seeded with the next seed value
    #[arg(short, long, default_value_t = DEFAULT_ATTEMPTS)]
    pub attempts: usize,

    /// Write the finished tiling as a PNG image
    #[arg(short, long, value_name = "PNG")]
    pub output: Option<PathBuf>,

    /// Write every search step as an animated GIF
    #[arg(long, value_name = "GIF")]
    pub visualize: Option<PathBuf>,

    /// Side length of one cell in pixels
    #[arg(short, long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: u32,

    /// Print the finished tiling as text
    #[arg(long)]
    pub ascii: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (repeat for more detail)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable eager placement of forced dominoes
    #[arg(long)]
    pub no_forced_moves: bool,

    /// Explore cells in random order instead of edges first
    #[arg(long)]
    pub no_center_bias: bool,

    /// Run on odd-area grids instead of rejecting them up front
    #[arg(long)]
    pub allow_odd: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Search parameters selected by the flags
    pub const fn search_config(&self) -> SearchConfig {
        SearchConfig {
            forced_moves: !self.no_forced_moves,
            center_bias: !self.no_center_bias,
            require_even_area: !self.allow_odd,
        }
    }

    /// Log level implied by `--quiet` and the number of `-v` flags
    pub const fn log_level(&self) -> Level {
        if self.quiet {
            return Level::ERROR;
        }
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    /// Number of dominoes a complete tiling of the requested grid holds
    pub fn target_tiles(&self) -> usize {
        self.width.max(0) as usize * self.height.max(0) as usize / 2
    }

    /// Reject argument combinations the generator cannot use
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for a zero step budget, zero attempts, or a
    /// cell size outside the supported range.
    pub fn validate(&self) -> Result<()> {
        if self.max_steps == 0 {
            return Err(invalid_parameter(
                "max_steps",
                &self.max_steps,
                &"at least one step is required",
            ));
        }
        if self.attempts == 0 {
            return Err(invalid_parameter(
                "attempts",
                &self.attempts,
                &"at least one attempt is required",
            ));
        }
        if self.cell_size == 0 || self.cell_size > MAX_CELL_SIZE {
            return Err(invalid_parameter(
                "cell_size",
                &self.cell_size,
                &format!("must be between 1 and {MAX_CELL_SIZE}"),
            ));
        }
        Ok(())
    }
}

/// Result of a successful run
pub struct RunOutcome {
    /// The complete tiling
    pub tiles: Vec<Tile>,
    /// Seed of the attempt that succeeded
    pub seed: u64,
    /// Zero-based index of the attempt that succeeded
    pub attempt: usize,
    /// Work counters of the successful attempt
    pub stats: GenerationStats,
    /// Captured steps, when visualization was requested
    pub capture: Option<VisualizationCapture>,
}

/// Drives the generator for the CLI: retries, progress, and exports
pub struct TilingRunner {
    cli: Cli,
    progress: Option<ProgressManager>,
}

impl TilingRunner {
    /// Create a runner for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let target = cli.target_tiles();
        let progress = cli
            .should_show_progress()
            .then(|| ProgressManager::new(target));

        Self { cli, progress }
    }

    /// Parsed arguments
    pub const fn cli(&self) -> &Cli {
        &self.cli
    }

    /// Generate a tiling, export the requested artefacts, and print it if asked
    ///
    /// Attempts that exhaust the search or the step budget are retried with
    /// the next seed until the attempt budget is spent.
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments are invalid, every attempt fails,
    /// an internal invariant breaks, or an export cannot be written.
    pub fn run(&mut self, out: &mut impl Write) -> Result<RunOutcome> {
        self.cli.validate()?;

        let mut last_error = None;
        for attempt in 0..self.cli.attempts {
            let seed = self.cli.seed.wrapping_add(attempt as u64);
            info!(
                attempt,
                seed,
                width = self.cli.width,
                height = self.cli.height,
                "starting attempt"
            );

            match self.run_attempt(attempt, seed) {
                Ok(outcome) => {
                    self.export(&outcome)?;
                    if self.cli.ascii {
                        writeln!(
                            out,
                            "{}",
                            render_ascii(self.cli.width, self.cli.height, &outcome.tiles)
                        )?;
                    }
                    return Ok(outcome);
                }
                Err(
                    error @ (TilingError::SearchExhausted { .. }
                    | TilingError::StepLimitExceeded { .. }),
                ) => {
                    warn!(%error, attempt, "attempt failed");
                    last_error = Some(error);
                }
                Err(error) => return Err(error),
            }
        }

        Err(last_error.unwrap_or_else(|| {
            invalid_parameter("attempts", &0, &"at least one attempt is required")
        }))
    }

    fn run_attempt(&mut self, attempt: usize, seed: u64) -> Result<RunOutcome> {
        let (width, height) = (self.cli.width, self.cli.height);
        let mut generator = TilingGenerator::with_config(
            width,
            height,
            StdRng::seed_from_u64(seed),
            self.cli.search_config(),
        )?;

        let cell_size = self.cli.cell_size;
        let mut capture = self.cli.visualize.as_ref().map(|_| {
            VisualizationCapture::new(width, height, cell_size, MAX_CAPTURED_FRAMES)
        });

        if let Some(ref mut pm) = self.progress {
            pm.start_attempt(attempt, seed);
        }

        for _ in 0..self.cli.max_steps {
            match generator.advance()? {
                StepResult::InProgress(tiles) => {
                    if let Some(ref mut capture) = capture {
                        capture.record_step(&tiles);
                    }
                    if let Some(ref mut pm) = self.progress {
                        pm.update(tiles.len(), generator.stats());
                    }
                }
                StepResult::Done(tiles) => {
                    if let Some(ref mut capture) = capture {
                        capture.record_final(&tiles);
                    }
                    if let Some(ref pm) = self.progress {
                        pm.finish(tiles.len(), "done");
                    }
                    info!(
                        steps = generator.stats().steps,
                        backtracks = generator.stats().backtracks,
                        "tiling complete"
                    );
                    return Ok(RunOutcome {
                        tiles,
                        seed,
                        attempt,
                        stats: *generator.stats(),
                        capture,
                    });
                }
                StepResult::Failed(error) => return Err(error),
            }
        }

        Err(TilingError::StepLimitExceeded {
            width,
            height,
            steps: self.cli.max_steps,
        })
    }

    fn export(&self, outcome: &RunOutcome) -> Result<()> {
        let (width, height) = (self.cli.width, self.cli.height);
        if width == 0 || height == 0 {
            if self.cli.output.is_some() || self.cli.visualize.is_some() {
                warn!("grid has no cells, skipping image export");
            }
            return Ok(());
        }

        if let Some(ref path) = self.cli.output {
            export_tiling_as_png(width, height, &outcome.tiles, self.cli.cell_size, path)?;
            info!(path = %path.display(), "wrote tiling image");
        }

        if let (Some(path), Some(capture)) = (&self.cli.visualize, &outcome.capture) {
            capture.export_gif(path, GIF_FRAME_DELAY_MS)?;
            info!(
                path = %path.display(),
                frames = capture.frame_count(),
                "wrote visualization"
            );
        }

        Ok(())
    }
}
