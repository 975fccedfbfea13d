use std::io::{self, Write};
use std::process::ExitCode;

use clap::builder::styling::{AnsiColor, Effects, Style, Styles};
use clap::{Parser, Subcommand};
use relpath::{Relativizer, VirtualPath};

const HEADER: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
const USAGE: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
const LITERAL: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
const PLACEHOLDER: Style = AnsiColor::Cyan.on_default();
const ERROR: Style = AnsiColor::Red.on_default().effects(Effects::BOLD);
const VALID: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
const INVALID: Style = AnsiColor::Yellow.on_default().effects(Effects::BOLD);

/// Cargo's color style
/// [source](https://github.com/crate-ci/clap-cargo/blob/master/src/style.rs)
const CARGO_STYLING: Styles = Styles::styled()
    .header(HEADER)
    .usage(USAGE)
    .literal(LITERAL)
    .placeholder(PLACEHOLDER)
    .error(ERROR)
    .valid(VALID)
    .invalid(INVALID);

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[clap(styles = CARGO_STYLING)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the relative path from BASE's directory to each DEST
    Relative {
        /// Path references are resolved from; a trailing `/` marks a directory
        #[arg()]
        base: String,

        /// File paths to reference
        #[arg(required = true)]
        dests: Vec<String>,

        /// Accept directory destinations and keep their trailing `/`
        #[arg(long)]
        allow_directory: bool,
    },
    /// Resolve each relative REFERENCE against BASE's directory
    Resolve {
        /// Path the references are relative to; a trailing `/` marks a directory
        #[arg()]
        base: String,

        /// Relative references, as printed by `relative`
        #[arg(required = true)]
        references: Vec<String>,
    },
}

fn run(cli: Cli) -> io::Result<()> {
    let mut stdout = io::stdout().lock();

    match cli.command {
        Command::Relative {
            base,
            dests,
            allow_directory,
        } => {
            let relativizer = Relativizer::new().allow_directory_destination(allow_directory);
            let base = VirtualPath::new(&base);
            for dest in &dests {
                let relative = relativizer.try_relative(&base, &VirtualPath::new(dest))?;
                writeln!(stdout, "{}", relative)?;
            }
        }
        Command::Resolve { base, references } => {
            let base = VirtualPath::new(&base);
            for reference in &references {
                writeln!(stdout, "{}", base.resolve(reference))?;
            }
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("{:?}", cli);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
