use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use quill::Outcome;

mod app;
mod config;
mod error;

use app::App;
use config::Config;
use error::Error;

/// Passage used when no file is given
const SAMPLE_PASSAGE: &str = "for i in 0..3 {\n    println!(\"{i}\");\n}";

#[derive(Debug, Parser)]
#[command(version, about = "Practice typing a passage in your terminal")]
struct Args {
    /// File containing the passage to type
    file: Option<PathBuf>,

    /// Override the configuration directory
    #[arg(long)]
    config: Option<PathBuf>,
}

fn run(args: Args) -> Result<Outcome, Error> {
    let config = Config::get(args.config)?;

    let text = match args.file {
        Some(path) => std::fs::read_to_string(path)?,
        None => SAMPLE_PASSAGE.to_string(),
    };

    let mut app = App::new(&text, config);
    Ok(app.run()?)
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(Outcome::Cancelled) => {
            println!("Cancelled");
            ExitCode::SUCCESS
        }
        Ok(_) => {
            println!("Complete");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}
