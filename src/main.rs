//! roffdown - render markdown document trees as man pages

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use roffdown::Document;
use roffdown::export::{Exporter, RoffConfig, RoffExporter};

#[derive(Parser)]
#[command(name = "roffdown")]
#[command(version, about = "Render markdown document trees as man pages", long_about = None)]
#[command(after_help = "EXAMPLES:
    roffdown page.json -o page.1    Convert a JSON tree to a man page
    parser page.md | roffdown       Convert a tree read from stdin")]
struct Cli {
    /// JSON document tree (stdin if omitted or `-`)
    #[arg(value_name = "INPUT")]
    input: Option<String>,

    /// Output file (stdout if omitted)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<String>,

    /// Omit the generated-by comment banner
    #[arg(long)]
    no_banner: bool,

    /// End the output with a newline
    #[arg(long)]
    trailing_newline: bool,

    /// Suppress output messages
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.quiet);

    match convert(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Log filter used when `RUST_LOG` is unset.
fn default_filter(quiet: bool) -> &'static str {
    if quiet { "roffdown=error" } else { "roffdown=info" }
}

fn init_logging(quiet: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(quiet).into()),
        )
        .with_writer(io::stderr)
        .init();
}

fn convert(cli: &Cli) -> roffdown::Result<()> {
    let doc = match cli.input.as_deref() {
        None | Some("-") => Document::from_reader(io::stdin().lock())?,
        Some(path) => Document::open(path)?,
    };

    let config = RoffConfig::default()
        .with_banner(!cli.no_banner)
        .with_trailing_newline(cli.trailing_newline);
    let exporter = RoffExporter::with_config(config);

    match cli.output.as_deref() {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            exporter.export(&doc, &mut writer)?;
            info!(path, "wrote man page");
        }
        None => {
            let mut stdout = io::stdout().lock();
            exporter.export(&doc, &mut stdout)?;
            stdout.flush()?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_hides_progress_messages() {
        assert_eq!(default_filter(false), "roffdown=info");
        assert_eq!(default_filter(true), "roffdown=error");
    }

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::parse_from(["roffdown", "page.json", "-o", "page.1", "-q", "--no-banner"]);
        assert_eq!(cli.input.as_deref(), Some("page.json"));
        assert_eq!(cli.output.as_deref(), Some("page.1"));
        assert!(cli.quiet);
        assert!(cli.no_banner);
        assert!(!cli.trailing_newline);
    }
}
