mod svg;
mod text;

use anyhow::{anyhow, bail, Context};
use config::{Config, File};
use hexlife::{timed, Grid, Layout, LifeConfig, Seed};
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
    process,
};
use structopt::StructOpt;
use strum::{Display, EnumString};

/// CLI for running hex-grid Game of Life simulations headlessly. Fills a
/// grid with random cells, steps it until nothing changes anymore (or the
/// generation limit is hit), then writes out the final generation.
#[derive(Debug, StructOpt)]
#[structopt(name = "hexlife")]
struct Opt {
    /// Path to a config file that defines the simulation. Supported formats:
    /// JSON, TOML. If not given, the default config is used.
    #[structopt(short, long)]
    config: Option<PathBuf>,

    /// Override the seed from the config. Any integer or string is allowed
    #[structopt(short, long)]
    seed: Option<String>,

    /// Maximum number of steps to run. The simulation stops early if a step
    /// doesn't change anything.
    #[structopt(short = "n", long, default_value = "100")]
    generations: u64,

    /// If given, the final generation will be saved to this directory. The
    /// exact files that appear in the directory are defined by the output
    /// formats. See `--output-formats` for more info
    #[structopt(short, long)]
    output: Option<PathBuf>,

    /// The format(s) to output the grid in. Supported formats:
    ///
    /// cfg - The full config used for the simulation, in TOML format
    ///
    /// json - Every cell of the final generation, as JSON
    ///
    /// svg - 2D rendering of the final generation
    ///
    /// txt - Plain text rendering of the final generation
    #[structopt(short = "f", long)]
    output_formats: Vec<OutputFormat>,

    /// The logging level to use. See
    /// https://docs.rs/log/0.4.11/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "info")]
    log_level: LevelFilter,
}

/// Different output formats.
#[derive(Copy, Clone, Debug, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
enum OutputFormat {
    // If you change this, make sure to update the help text for
    // `--output-formats`!
    /// Export the full config in a human-readable file, which can be loaded
    /// again with `--config` to rerun the same simulation
    Cfg,
    /// Export the final cells as JSON
    Json,
    /// Render the final generation as a 2D SVG
    Svg,
    /// Render the final generation as text
    Txt,
}

impl OutputFormat {
    fn file_ext(self) -> &'static str {
        match self {
            Self::Cfg => "toml",
            Self::Json => "json",
            Self::Svg => "svg",
            Self::Txt => "txt",
        }
    }
}

fn load_config(config_path: &Path) -> anyhow::Result<LifeConfig> {
    let mut settings = Config::new();
    let config_path = config_path.to_str().ok_or_else(|| {
        anyhow!("invalid character in path {:?}", config_path)
    })?;
    settings
        .merge(File::with_name(config_path))
        .context("error reading config file")?;
    settings.try_into().context("error reading config")
}

/// Step the grid until it stops changing, or until `limit` steps have run.
/// Returns whether the grid stabilized.
fn run_simulation(grid: &mut Grid, limit: u64) -> bool {
    for _ in 0..limit {
        grid.step();
        if !grid.has_changed() {
            return true;
        }
    }
    false
}

/// Generate an output form of the grid in the given format.
fn gen_output(
    output_dir: &Path,
    output_format: OutputFormat,
    config: &LifeConfig,
    grid: &Grid,
) -> anyhow::Result<()> {
    fn generate_bytes(
        output_format: OutputFormat,
        config: &LifeConfig,
        grid: &Grid,
    ) -> anyhow::Result<Vec<u8>> {
        Ok(match output_format {
            OutputFormat::Cfg => toml::to_string_pretty(config)
                .context("error serializing config")?
                .into_bytes(),
            OutputFormat::Json => {
                let cells: Vec<_> = grid.cells().collect();
                serde_json::to_vec_pretty(&cells)
                    .context("error serializing cells")?
            }
            OutputFormat::Svg => {
                let layout = Layout::from_config(&config.layout);
                svg::draw_grid(grid, &layout, config).to_string().into_bytes()
            }
            OutputFormat::Txt => text::draw_grid(grid).into_bytes(),
        })
    }

    let output_file_path = output_dir
        .join("grid")
        .with_extension(output_format.file_ext());

    timed!(
        &format!(
            "Generating {} output and writing to {:?}",
            output_format, &output_file_path
        ),
        log::Level::Info,
        {
            let bytes = generate_bytes(output_format, config, grid)?;
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&output_file_path)
                .with_context(|| {
                    format!("error opening output file {:?}", &output_file_path)
                })?;
            file.write_all(&bytes).with_context(|| {
                format!("error writing to file {:?}", &output_file_path)
            })?;
        }
    );

    Ok(())
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    let mut config = match &opt.config {
        Some(config_path) => load_config(config_path)?,
        None => LifeConfig::default(),
    };
    if let Some(seed) = &opt.seed {
        config.seed = Seed::from(seed.as_str());
    }

    let mut grid = Grid::from_config(&config)?;
    grid.randomize(grid.region());
    info!(
        "Randomized {} grid, {} cells alive",
        grid.region(),
        grid.alive_count()
    );

    let stabilized = timed!(
        "Simulation",
        log::Level::Info,
        run_simulation(&mut grid, opt.generations)
    );
    if stabilized {
        info!("Grid stabilized at generation {}", grid.generation());
    } else {
        info!(
            "Generation limit reached at generation {}, {} cells alive",
            grid.generation(),
            grid.alive_count()
        );
    }

    if let Some(output_dir) = opt.output {
        if opt.output_formats.is_empty() {
            bail!("output dir was specified, but no output formats were given")
        }
        fs::create_dir_all(&output_dir)?;

        for output_format in opt.output_formats {
            gen_output(&output_dir, output_format, &config, &grid)?;
        }
    }

    Ok(())
}

fn main() {
    let exit_code = match run(Opt::from_args()) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    process::exit(exit_code);
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexlife::{CubePoint, RegionSize, Rules};

    #[test]
    fn test_run_simulation_stabilizes() {
        let mut grid =
            Grid::new(RegionSize::new(5, 5), Rules::default(), &Seed::Int(0));
        grid.set_cell_state(CubePoint::ORIGIN, true).unwrap();
        // Step 1 kills the cell, step 2 changes nothing
        assert!(run_simulation(&mut grid, 10));
        assert_eq!(grid.generation(), 3);
    }

    #[test]
    fn test_run_simulation_limit() {
        let mut grid =
            Grid::new(RegionSize::new(5, 5), Rules::default(), &Seed::Int(0));
        grid.set_cell_state(CubePoint::ORIGIN, true).unwrap();
        assert!(!run_simulation(&mut grid, 1));
        assert_eq!(grid.generation(), 2);

        assert!(!run_simulation(&mut grid, 0));
        assert_eq!(grid.generation(), 2);
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("svg".parse::<OutputFormat>().unwrap().file_ext(), "svg");
        assert_eq!("cfg".parse::<OutputFormat>().unwrap().file_ext(), "toml");
        assert!("stl".parse::<OutputFormat>().is_err());
    }
}
