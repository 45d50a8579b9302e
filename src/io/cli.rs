//! Command-line interface for searching, flooding and sampling map files

use crate::algorithm::adjacency::Connectivity;
use crate::algorithm::pathfind::{PathSearch, SearchConfig, SearchOutcome, SearchStep};
use crate::io::configuration::{DEFAULT_SAMPLE_COUNT, DEFAULT_SEED, DEFAULT_THROTTLE, OUTPUT_SUFFIX};
use crate::io::error::{GridError, Result, WithPath};
use crate::io::image::export_map_png;
use crate::io::map::{Tile, load_map, path_overlay, render_map};
use crate::io::progress::SearchProgress;
use crate::spatial::grid::Grid;
use crate::spatial::position::Position;
use clap::{Args, Parser, Subcommand};
use rand::{SeedableRng, rngs::StdRng};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "cellgrid")]
#[command(
    author,
    version,
    about = "Find paths, flood regions and sample cells on grid maps"
)]
/// Command-line arguments for the map tool
pub struct Cli {
    /// Suppress progress and summary output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available operations
#[derive(Subcommand)]
pub enum Command {
    /// Find the shortest path between two cells
    Path(PathArgs),
    /// Flood a connected region from a seed cell
    Fill(FillArgs),
    /// Draw random cells
    Sample(SampleArgs),
}

/// Arguments for `path`
#[derive(Args)]
pub struct PathArgs {
    /// Text or PNG map
    #[arg(value_name = "MAP")]
    pub map: PathBuf,

    /// Start cell as `x,y`
    #[arg(long, value_name = "X,Y", allow_hyphen_values = true)]
    pub from: Position,

    /// Goal cell as `x,y`
    #[arg(long, value_name = "X,Y", allow_hyphen_values = true)]
    pub to: Position,

    /// Allow diagonal moves
    #[arg(short, long)]
    pub diagonal: bool,

    /// Expansions between progress updates
    #[arg(long, default_value_t = DEFAULT_THROTTLE)]
    pub throttle: usize,

    /// Give up after this many expansions
    #[arg(long)]
    pub max_expansions: Option<usize>,

    /// Write the result here (`.png` renders an image)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write the result next to the map with the result suffix
    #[arg(short, long)]
    pub save: bool,

    /// Mark expanded cells in the output
    #[arg(long)]
    pub trace: bool,
}

/// Arguments for `fill`
#[derive(Args)]
pub struct FillArgs {
    /// Text or PNG map
    #[arg(value_name = "MAP")]
    pub map: PathBuf,

    /// Seed cell as `x,y`
    #[arg(long, value_name = "X,Y", allow_hyphen_values = true)]
    pub at: Position,

    /// Spread diagonally as well
    #[arg(short, long)]
    pub diagonal: bool,

    /// Characters that stop the fill (default: every non-floor tile)
    #[arg(short, long, value_name = "CHARS")]
    pub boundary: Option<String>,

    /// Character written into the region
    #[arg(short, long, value_name = "CHAR", default_value_t = '~')]
    pub with: char,

    /// Write the result here (`.png` renders an image)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write the result next to the map with the result suffix
    #[arg(short, long)]
    pub save: bool,
}

/// Arguments for `sample`
#[derive(Args)]
pub struct SampleArgs {
    /// Text or PNG map
    #[arg(value_name = "MAP")]
    pub map: PathBuf,

    /// Number of cells to draw
    #[arg(short, long, default_value_t = DEFAULT_SAMPLE_COUNT)]
    pub count: usize,

    /// Random seed for reproducible draws
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Draw cells holding this character instead of floor
    #[arg(long, value_name = "CHAR")]
    pub of: Option<char>,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Fail unless `position` lies inside the map
///
/// # Errors
///
/// Returns `GridError::PositionOutOfBounds` for positions outside the map
pub fn check_position(grid: &Grid<Tile>, position: Position) -> Result<()> {
    if grid.is_valid_position(position) {
        Ok(())
    } else {
        Err(GridError::PositionOutOfBounds {
            position: position.to_string(),
            width: grid.width(),
            height: grid.height(),
        })
    }
}

/// Run a path search, reporting progress between resume batches
///
/// # Errors
///
/// Returns an error if either endpoint lies outside the map
pub fn search(
    grid: &Grid<Tile>,
    args: &PathArgs,
    progress: &SearchProgress,
) -> Result<(SearchOutcome, Vec<Position>)> {
    check_position(grid, args.from)?;
    check_position(grid, args.to)?;

    let config = SearchConfig {
        connectivity: Connectivity::from_diagonals(args.diagonal),
        throttle: args.throttle,
        record_expansions: args.trace,
    };
    let mut search = PathSearch::new(grid, args.from, args.to, config);

    let outcome = if let Some(budget) = args.max_expansions {
        search.run_with_budget(budget)
    } else {
        loop {
            let step = search.resume();
            progress.update(search.nodes_expanded(), search.open_len());
            match step {
                SearchStep::Continue => {}
                SearchStep::Found(result) => break SearchOutcome::Found(result),
                SearchStep::Exhausted => break SearchOutcome::NoPath,
            }
        }
    };
    progress.update(search.nodes_expanded(), search.open_len());

    Ok((outcome, search.expanded().to_vec()))
}

/// Tiles that stop a fill
///
/// Without an explicit list every distinct non-floor tile on the map is a
/// boundary.
pub fn boundary_tiles(grid: &Grid<Tile>, chars: Option<&str>) -> Vec<Tile> {
    let mut tiles: Vec<Tile> = match chars {
        Some(chars) => chars.chars().map(Tile::from_char).collect(),
        None => grid.non_empty_elements(),
    };
    tiles.sort_by_key(|tile| tile.to_char());
    tiles.dedup();
    tiles
}

/// Draw `count` cells, with replacement, from a seeded generator
pub fn sample_positions(grid: &Grid<Tile>, args: &SampleArgs) -> Vec<Position> {
    let mut rng = StdRng::seed_from_u64(args.seed);
    let kind = args.of.map_or(Tile::Open, Tile::from_char);
    (0..args.count)
        .map_while(|_| grid.random_position_of_type(&kind, &mut rng))
        .collect()
}

/// Output file next to the input, named `<stem><suffix>.<ext>`
pub fn default_output_path(input_path: &Path) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let output_name = match input_path.extension() {
        Some(extension) => format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            extension.to_string_lossy()
        ),
        None => format!("{}{}", stem.to_string_lossy(), OUTPUT_SUFFIX),
    };

    if let Some(parent) = input_path.parent() {
        parent.join(output_name)
    } else {
        PathBuf::from(output_name)
    }
}

/// Render to a file, choosing PNG or text by extension
///
/// # Errors
///
/// Returns an error if the file cannot be written
pub fn write_map(grid: &Grid<Tile>, overlay: &[(Position, char)], output_path: &Path) -> Result<()> {
    let is_png = output_path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
    if is_png {
        return export_map_png(grid, overlay, output_path);
    }

    std::fs::write(output_path, render_map(grid, overlay)).with_path(output_path, "write map")
}

/// Dispatches the selected command
pub struct MapProcessor {
    cli: Cli,
}

impl MapProcessor {
    /// Create a processor for the parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the selected command
    ///
    /// # Errors
    ///
    /// Returns an error if the map cannot be loaded, a position is outside
    /// the map or the result cannot be written
    pub fn process(&self) -> Result<()> {
        match &self.cli.command {
            Command::Path(args) => self.run_path(args),
            Command::Fill(args) => self.run_fill(args),
            Command::Sample(args) => self.run_sample(args),
        }
    }

    fn resolve_output(map: &Path, output: Option<&PathBuf>, save: bool) -> Option<PathBuf> {
        output
            .cloned()
            .or_else(|| save.then(|| default_output_path(map)))
    }

    // Allow print for the rendered map and the search summary
    #[allow(clippy::print_stdout, clippy::print_stderr)]
    fn run_path(&self, args: &PathArgs) -> Result<()> {
        let grid = load_map(&args.map)?;
        let progress = if self.cli.should_show_progress() && args.max_expansions.is_none() {
            SearchProgress::new(&format!("{} -> {}", args.from, args.to))
        } else {
            SearchProgress::hidden()
        };

        let (outcome, expanded) = search(&grid, args, &progress)?;
        let result = match outcome {
            SearchOutcome::Found(result) => {
                progress.clear();
                result
            }
            SearchOutcome::NoPath => {
                progress.finish("no path");
                if !self.cli.quiet {
                    eprintln!("No path from {} to {}", args.from, args.to);
                }
                return Ok(());
            }
            SearchOutcome::BudgetExceeded { nodes_expanded } => {
                progress.finish("budget exceeded");
                if !self.cli.quiet {
                    eprintln!(
                        "No path from {} to {} within {nodes_expanded} expansions",
                        args.from, args.to
                    );
                }
                return Ok(());
            }
        };

        let overlay = path_overlay(&result.forward(), &expanded);
        match Self::resolve_output(&args.map, args.output.as_ref(), args.save) {
            Some(path) => write_map(&grid, &overlay, &path)?,
            None => print!("{}", render_map(&grid, &overlay)),
        }

        if !self.cli.quiet {
            eprintln!(
                "Path of {} cells, cost {:.3}, {} expansions",
                result.len(),
                result.cost,
                result.nodes_expanded
            );
        }
        Ok(())
    }

    // Allow print for the rendered map and the fill summary
    #[allow(clippy::print_stdout, clippy::print_stderr)]
    fn run_fill(&self, args: &FillArgs) -> Result<()> {
        let mut grid = load_map(&args.map)?;
        check_position(&grid, args.at)?;

        let boundary = boundary_tiles(&grid, args.boundary.as_deref());
        let connectivity = Connectivity::from_diagonals(args.diagonal);
        let Some(filled) = grid.flood_fill(args.at, &boundary, connectivity, &Tile::from_char(args.with))
        else {
            if !self.cli.quiet {
                eprintln!("Cell {} is a boundary cell; nothing filled", args.at);
            }
            return Ok(());
        };

        match Self::resolve_output(&args.map, args.output.as_ref(), args.save) {
            Some(path) => write_map(&grid, &[], &path)?,
            None => print!("{}", render_map(&grid, &[])),
        }

        if !self.cli.quiet {
            eprintln!("Filled {filled} cells from {}", args.at);
        }
        Ok(())
    }

    // Allow print for the sampled positions
    #[allow(clippy::print_stdout, clippy::print_stderr)]
    fn run_sample(&self, args: &SampleArgs) -> Result<()> {
        let grid = load_map(&args.map)?;
        let positions = sample_positions(&grid, args);
        if positions.is_empty() && !self.cli.quiet {
            eprintln!("No matching cells in {}", args.map.display());
        }
        for position in positions {
            println!("{position}");
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/io/cli.rs"]
mod unit;
