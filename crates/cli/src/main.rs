// gridtween CLI - headless driver for the grid mutation engine

mod script;

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use script::{execute, layout_report, Script};

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_GRID_ERROR: u8 = 1;
pub const EXIT_IO_ERROR: u8 = 3;
pub const EXIT_PARSE_ERROR: u8 = 4;

#[derive(Parser)]
#[command(name = "gridtween")]
#[command(about = "Run grid mutation scripts and print transition descriptors")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a script and print each step's transition descriptors as JSON
    #[command(after_help = "\
Examples:
  gridtween run script.json
  gridtween run script.json --pretty
  gridtween run script.json | jq '.[].transitions[] | select(.kind == \"move\")'")]
    Run {
        /// Script file (JSON: {\"grid\": ..., \"steps\": [...]})
        script: PathBuf,

        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },

    /// Run a script and print only the final grid geometry
    #[command(after_help = "\
Examples:
  gridtween layout script.json
  gridtween layout script.json --pretty
  gridtween layout script.json | jq '.column_widths'")]
    Layout {
        /// Script file (JSON: {\"grid\": ..., \"steps\": [...]})
        script: PathBuf,

        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let code = match cli.command {
        Commands::Run { script, pretty } => cmd_run(&script, pretty),
        Commands::Layout { script, pretty } => cmd_layout(&script, pretty),
    };
    ExitCode::from(code)
}

fn load_script(path: &PathBuf) -> Result<Script, u8> {
    let text = fs::read_to_string(path).map_err(|e| {
        eprintln!("error: cannot read {}: {e}", path.display());
        EXIT_IO_ERROR
    })?;
    serde_json::from_str(&text).map_err(|e| {
        eprintln!("error: invalid script {}: {e}", path.display());
        EXIT_PARSE_ERROR
    })
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> u8 {
    let out = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    match out {
        Ok(json) => {
            println!("{json}");
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("error: serialization failed: {e}");
            EXIT_GRID_ERROR
        }
    }
}

fn cmd_run(path: &PathBuf, pretty: bool) -> u8 {
    let parsed = match load_script(path) {
        Ok(s) => s,
        Err(code) => return code,
    };
    match execute(parsed) {
        Ok((_, records)) => print_json(&records, pretty),
        Err(e) => {
            eprintln!("error: {e}");
            EXIT_GRID_ERROR
        }
    }
}

fn cmd_layout(path: &PathBuf, pretty: bool) -> u8 {
    let parsed = match load_script(path) {
        Ok(s) => s,
        Err(code) => return code,
    };
    match execute(parsed) {
        Ok((grid, _)) => print_json(&layout_report(&grid), pretty),
        Err(e) => {
            eprintln!("error: {e}");
            EXIT_GRID_ERROR
        }
    }
}
