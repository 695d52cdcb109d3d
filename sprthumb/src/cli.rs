use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{
    config::{load_config, Config},
    modules::{
        batch::batch,
        info::describe,
        thumb::{output_path, write_thumbnail},
    },
};

pub enum CliRes {
    Ok,
    Err,
}

#[derive(Debug, Parser)]
#[command(version, about = "Makes .png previews of GoldSrc sprites", long_about = None)]
struct SprThumbCli {
    /// Sets path to config file
    ///
    /// Defaults to sprthumb.toml next to the executable
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Makes a preview of one .spr
    Thumb {
        input: PathBuf,
        /// Sets output .png path
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Sets preview width in pixels
        #[arg(short, long)]
        width: Option<u32>,
    },
    /// Makes previews for every .spr inside a folder
    Batch {
        dir: PathBuf,
        /// Sets preview width in pixels
        #[arg(short, long)]
        width: Option<u32>,
        /// Also looks inside sub-folders
        #[arg(short, long)]
        recursive: bool,
    },
    /// Prints sprite header and frame layout
    Info { input: PathBuf },
}

pub fn cli() -> CliRes {
    let args = SprThumbCli::parse();

    let config = match load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            log::error!("Cannot read config: {err}");
            return CliRes::Err;
        }
    };

    match run(args.command, &config) {
        Ok(()) => CliRes::Ok,
        Err(err) => {
            log::error!("{err}");
            CliRes::Err
        }
    }
}

fn run(command: Commands, config: &Config) -> eyre::Result<()> {
    match command {
        Commands::Thumb {
            input,
            output,
            width,
        } => {
            let output = output.unwrap_or_else(|| output_path(&input, &config.suffix));
            write_thumbnail(&input, &output, width.unwrap_or(config.width))?;
        }
        Commands::Batch {
            dir,
            width,
            recursive,
        } => {
            let report = batch(
                &dir,
                width.unwrap_or(config.width),
                &config.suffix,
                recursive || config.recursive,
            )?;

            println!("Wrote {} previews, {} failed", report.written, report.failed);

            if report.failed > 0 {
                return Err(eyre::eyre!("{} sprites failed", report.failed));
            }
        }
        Commands::Info { input } => {
            let sprite = spr::Sprite::open_from_file(&input)?;

            println!("{}", describe(&sprite));
        }
    }

    Ok(())
}
