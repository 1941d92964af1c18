//! Command-line interface for generating patterns to stdout or files

use crate::color::palette::PaletteTable;
use crate::color::rgb::Rgb;
use crate::io::configuration::{DEFAULT_PATTERN_COUNT, OUTPUT_EXTENSION, OUTPUT_STEM};
use crate::io::error::{Result, file_system_error, invalid_parameter};
use crate::io::progress::ProgressManager;
use crate::io::svg::write_svg;
use crate::pattern::fallback::Accents;
use crate::pattern::family::FamilyChoice;
use crate::pattern::generator::{PatternGenerator, PatternRequest};
use clap::Parser;
use std::io::Write;
use std::path::{Path, PathBuf};

// Path reported when writing to the run's output stream fails
const STDOUT: &str = "<stdout>";

#[derive(Parser, Debug)]
#[command(name = "svgpattern")]
#[command(author, version, about = "Generate decorative SVG card patterns")]
/// Command-line arguments for the pattern generation tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Pattern family, or `random` for a different family per pattern
    #[arg(short, long, default_value_t = FamilyChoice::default())]
    pub family: FamilyChoice,

    /// Palette name to draw colors from (random when omitted)
    #[arg(short, long)]
    pub palette: Option<String>,

    /// Number of colors sampled from the palette (4 to 12)
    #[arg(short, long)]
    pub colors: Option<usize>,

    /// Number of patterns to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_PATTERN_COUNT)]
    pub count: usize,

    /// Output `.svg` file for a single pattern, or directory for a batch
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Random seed for reproducible generation
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Keep every fill flat
    #[arg(long)]
    pub no_gradients: bool,

    /// Overwrite files that already exist
    #[arg(long)]
    pub no_skip: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Log generation details
    #[arg(short, long)]
    pub verbose: bool,

    /// Primary accent color used by the fallback pattern
    #[arg(long, value_name = "HEX")]
    pub primary: Option<Rgb>,

    /// Hover accent color used by the fallback pattern
    #[arg(long, value_name = "HEX")]
    pub hover: Option<Rgb>,

    /// Background color used by the fallback pattern
    #[arg(long, value_name = "HEX")]
    pub background: Option<Rgb>,

    /// Print the built-in palette names and exit
    #[arg(long)]
    pub list_palettes: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Generation hints gathered from the flags
    pub fn request(&self) -> PatternRequest {
        PatternRequest {
            family: self.family,
            palette: self.palette.clone(),
            color_count: self.colors,
            colors: None,
            gradients: !self.no_gradients,
        }
    }

    /// Accent colors with unspecified ones left at their defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the background accent is too bright
    pub fn accents(&self) -> Result<Accents> {
        Accents::new(
            self.primary.unwrap_or(Accents::PRIMARY),
            self.hover.unwrap_or(Accents::HOVER),
            self.background.unwrap_or(Accents::BACKGROUND),
        )
    }

    /// Whether the output path names a single file rather than a directory
    pub fn writes_single_file(&self) -> bool {
        self.count == 1
            && self.output.as_deref().is_some_and(|path| {
                path.extension().and_then(|ext| ext.to_str()) == Some(OUTPUT_EXTENSION)
            })
    }
}

/// What a run produced
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Patterns written to stdout
    pub printed: usize,
    /// Files written
    pub written: usize,
    /// Existing files left untouched
    pub skipped: usize,
}

/// Orchestrates pattern generation and output according to CLI arguments
#[derive(Debug)]
pub struct BatchRunner {
    cli: Cli,
    generator: PatternGenerator<'static>,
}

impl BatchRunner {
    /// Build the generator described by the CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the accent colors or palette hint are invalid
    pub fn new(cli: Cli) -> Result<Self> {
        let mut generator = PatternGenerator::new().with_accents(cli.accents()?);
        if let Some(seed) = cli.seed {
            generator = generator.with_seed(seed);
        }

        // A typo in the palette name would otherwise only show as fallback output
        if let Some(name) = cli.palette.as_deref()
            && generator.palettes().get(name).is_none()
        {
            return Err(invalid_parameter(
                "palette",
                &name,
                &"not a built-in palette; see --list-palettes",
            ));
        }

        Ok(Self { cli, generator })
    }

    /// Run against stdout
    ///
    /// # Errors
    ///
    /// Returns an error if any output cannot be written
    pub fn run(&self) -> Result<BatchSummary> {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        self.run_with_writer(&mut lock)
    }

    /// Run, sending listings and unrouted patterns to `out`
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` or to the output path fails
    pub fn run_with_writer(&self, out: &mut impl Write) -> Result<BatchSummary> {
        if self.cli.list_palettes {
            for name in PaletteTable::builtin().names() {
                writeln!(out, "{name}")
                    .map_err(|e| file_system_error(STDOUT, "list palettes", e))?;
            }
            return Ok(BatchSummary::default());
        }

        let request = self.cli.request();
        match self.cli.output.as_deref() {
            None => {
                for pattern in self.generator.generate_batch(&request, self.cli.count) {
                    writeln!(out, "{pattern}")
                        .map_err(|e| file_system_error(STDOUT, "write pattern", e))?;
                }
                Ok(BatchSummary {
                    printed: self.cli.count,
                    ..BatchSummary::default()
                })
            }
            Some(path) if self.cli.writes_single_file() => self.write_single(path, &request),
            Some(dir) => self.write_batch(dir, &request),
        }
    }

    fn write_single(&self, path: &Path, request: &PatternRequest) -> Result<BatchSummary> {
        if self.cli.skip_existing() && path.exists() {
            tracing::info!(path = %path.display(), "skipping existing output");
            return Ok(BatchSummary {
                skipped: 1,
                ..BatchSummary::default()
            });
        }
        write_svg(&self.generator.generate_with(request), path)?;
        Ok(BatchSummary {
            written: 1,
            ..BatchSummary::default()
        })
    }

    fn write_batch(&self, dir: &Path, request: &PatternRequest) -> Result<BatchSummary> {
        if dir.is_file() {
            return Err(invalid_parameter(
                "output",
                &dir.display(),
                &"batch output must be a directory",
            ));
        }
        std::fs::create_dir_all(dir).map_err(|e| file_system_error(dir, "create directory", e))?;

        let mut progress = if self.cli.should_show_progress() {
            ProgressManager::new(self.cli.count)
        } else {
            ProgressManager::hidden(self.cli.count)
        };

        for path in Self::output_paths(dir, self.cli.count) {
            if self.cli.skip_existing() && path.exists() {
                progress.skipped(&path);
                continue;
            }
            write_svg(&self.generator.generate_with(request), &path)?;
            progress.wrote(&path);
        }
        progress.finish();

        tracing::info!(
            written = progress.written_count(),
            skipped = progress.skipped_count(),
            dir = %dir.display(),
            "batch complete"
        );

        Ok(BatchSummary {
            printed: 0,
            written: progress.written_count(),
            skipped: progress.skipped_count(),
        })
    }

    /// Batch file paths: `pattern_001.svg`, `pattern_002.svg`, ...
    ///
    /// Indices are zero-padded to at least three digits, wider for large batches.
    pub fn output_paths(dir: &Path, count: usize) -> Vec<PathBuf> {
        let width = count.to_string().len().max(3);
        (1..=count)
            .map(|index| dir.join(format!("{OUTPUT_STEM}_{index:0width$}.{OUTPUT_EXTENSION}")))
            .collect()
    }
}
