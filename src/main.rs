//! odtree - Dump and export OpenDocument Text element trees

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use log::{LevelFilter, info};

use odtree::{Catalog, Document, DumpOptions, ParseOptions};

#[derive(Parser)]
#[command(name = "odtree")]
#[command(version, about = "OpenDocument Text element tree tool", long_about = None)]
#[command(after_help = "EXAMPLES:
    odtree report.odt                     Print the element dump
    odtree report.odt --dump report.txt   Write the dump to a file
    odtree report.odt --json - --pretty   Print the document as JSON
    odtree extracted/ --catalog defs.json Use custom definitions")]
struct Cli {
    /// Input document (.odt file or extracted package directory)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Export the document as JSON to FILE ("-" for stdout)
    #[arg(long, value_name = "FILE")]
    json: Option<String>,

    /// Write the element dump to FILE (stdout when omitted)
    #[arg(long, value_name = "FILE", num_args = 0..=1, default_missing_value = "-")]
    dump: Option<String>,

    /// Element and attribute definitions (bundled definitions when omitted)
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Keep whitespace-only text runs that contain line breaks
    #[arg(long)]
    keep_whitespace: bool,

    /// Indent JSON output
    #[arg(long)]
    pretty: bool,

    /// Include preserved markup of unrecognized elements in the dump
    #[arg(long)]
    markup: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let _ = env_logger::builder()
        .filter_module("odtree", log_level(cli.verbose))
        .parse_default_env()
        .try_init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        },
    }
}

/// Library log level for a `-v` count. `RUST_LOG` still takes precedence.
fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn run(cli: &Cli) -> odtree::Result<()> {
    let catalog = match &cli.catalog {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::load()?,
    };
    let options = ParseOptions::new().with_layout_whitespace(cli.keep_whitespace);
    let document = Document::open_with_options(&cli.input, &catalog, &options)?;
    info!(
        "Read {} elements from {}",
        document.element_count(),
        cli.input.display()
    );

    if let Some(target) = &cli.json {
        let json = if cli.pretty {
            document.to_json_pretty()?
        } else {
            document.to_json()?
        };
        write_output(target, &json)?;
    }

    let dump_target = match (&cli.dump, &cli.json) {
        (Some(target), _) => Some(target.as_str()),
        (None, None) => Some("-"),
        (None, Some(_)) => None,
    };
    if let Some(target) = dump_target {
        let dump = document.dump_with(&DumpOptions::new().with_markup(cli.markup));
        write_output(target, &dump)?;
    }

    Ok(())
}

fn write_output(target: &str, text: &str) -> odtree::Result<()> {
    if target == "-" {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        if !text.ends_with('\n') {
            stdout.write_all(b"\n")?;
        }
        stdout.flush()?;
    } else {
        std::fs::write(target, text)?;
        info!("Output written to: {}", target);
    }
    Ok(())
}
