pub mod dist;
pub mod info;
pub mod reference;
pub mod verify;

use std::path::PathBuf;

use clap::{
    Parser,
    Subcommand,
};
use color_eyre::eyre::Error;

#[derive(Clone, Debug, Parser)]
struct Args {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Check every supported backend against the bit-by-bit reference.
    Verify {
        #[clap(short, long, default_value = "1000000")]
        samples: u64,

        #[clap(long, default_value = "0")]
        seed: u64,
    },
    /// Print the detected and supported backends.
    Info,
    /// Build the shared library and copy it to `output`.
    Dist {
        #[clap(short, long)]
        release: bool,

        #[clap(long)]
        software_only: bool,

        #[clap(short, long, default_value = ".")]
        output: PathBuf,
    },
}

fn main() -> Result<(), Error> {
    let _ = dotenvy::dotenv();
    color_eyre::install()?;
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    match args.command {
        Command::Verify { samples, seed } => {
            verify::verify(samples, seed)?;
        }
        Command::Info => {
            info::print_info()?;
        }
        Command::Dist {
            release,
            software_only,
            output,
        } => {
            dist::dist(release, software_only, output)?;
        }
    }

    Ok(())
}
