//! Builds cities and writes out what they look like. Cities come from JSON config files; without
//! one, the built-in Alpha city is used.

#[macro_use]
extern crate log;

use anyhow::Result;
use structopt::StructOpt;

use cartographer::SvgOptions;
use city_model::CityConfig;

#[derive(StructOpt)]
#[structopt(name = "city_cli", about = "Procedurally builds and draws city road networks")]
enum Command {
    /// Builds and finalizes a city, prints its summary, and writes `<name>.svg`
    Generate {
        #[structopt(flatten)]
        input: Input,
        /// The directory to write the SVG file to
        #[structopt(long, default_value = ".")]
        output_dir: String,
        /// Distance between grid lines, in world units. 0 disables the grid.
        #[structopt(long, default_value = "10")]
        grid_spacing: i32,
        /// Don't print the summary
        #[structopt(long)]
        quiet: bool,
    },
    /// Builds and finalizes a city, then just prints its summary
    Summary {
        #[structopt(flatten)]
        input: Input,
    },
    /// Prints the config that would be used, as JSON. Useful as a starting point for a new city.
    DumpConfig {
        #[structopt(flatten)]
        input: Input,
    },
}

#[derive(StructOpt)]
struct Input {
    /// The path to a JSON city config. If unset, the built-in Alpha city is used.
    #[structopt(long)]
    input: Option<String>,
}

impl Input {
    fn load(&self) -> Result<CityConfig> {
        match self.input {
            Some(ref path) => CityConfig::load(path),
            None => Ok(CityConfig::alpha()),
        }
    }
}

fn main() -> Result<()> {
    abstutil::logger::setup();
    let cmd = Command::from_args();

    match cmd {
        Command::Generate {
            input,
            output_dir,
            grid_spacing,
            quiet,
        } => {
            let city = input.load()?.build_finalized()?;
            if !quiet {
                println!("{}", city.summary());
            }
            let path = cartographer::save_svg(&city, &output_dir, &SvgOptions { grid_spacing })?;
            info!("{} is drawn at {}", city.name(), path);
        }
        Command::Summary { input } => {
            let city = input.load()?.build_finalized()?;
            println!("{}", city.summary());
        }
        Command::DumpConfig { input } => {
            println!("{}", abstutil::to_json(&input.load()?)?);
        }
    }
    Ok(())
}
