use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::{ArgAction, Parser};
use color_eyre::eyre::{Report, Result, WrapErr, eyre};
use tracing_subscriber::EnvFilter;

use linkform::{DocumentFormat, LinkForm, OutputDestination, OutputOptions, UiOptions, emit};

#[derive(Debug, Parser)]
#[command(
    name = "linkform",
    version,
    about = "Compose a batch video/folder URL request in the terminal"
)]
struct Cli {
    /// Title shown at the top of the form
    #[arg(long = "title", value_name = "TEXT")]
    title: Option<String>,

    /// Replace the helper text shown under the heading
    #[arg(long = "description", value_name = "TEXT")]
    description: Option<String>,

    /// Output destinations ("-" writes to stdout). Accepts multiple values per flag use.
    #[arg(short = 'o', long = "output", value_name = "DEST", num_args = 1.., action = ArgAction::Append)]
    outputs: Vec<String>,

    /// Emit compact output rather than pretty formatting
    #[arg(long = "no-pretty")]
    no_pretty: bool,

    /// Overwrite output files even if they already exist
    #[arg(short = 'f', long = "force", short_alias = 'y', alias = "yes")]
    force: bool,

    /// Quit without the discard confirmation when edits are pending
    #[arg(long = "no-confirm-exit")]
    no_confirm_exit: bool,

    /// Append a debug log to this file (the form owns the terminal)
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if let Some(path) = cli.log_file.as_deref() {
        init_logging(path)?;
    }

    let destinations = parse_destinations(&cli.outputs);
    ensure_paths_available(&destinations, cli.force)?;
    let format = pick_format(&destinations);

    let mut options = UiOptions::default();
    if cli.no_confirm_exit {
        options = options.with_confirm_exit(false);
    }

    let mut form = LinkForm::new().with_options(options);
    if let Some(title) = cli.title {
        form = form.with_title(title);
    }
    if let Some(description) = cli.description {
        form = form.with_description(description);
    }

    let payload = form.run().map_err(Report::msg)?;

    let output = OutputOptions::new(format)
        .with_pretty(!cli.no_pretty)
        .with_destinations(destinations);
    emit(&payload, &output)
        .map_err(Report::msg)
        .wrap_err("failed to write the request payload")?;
    Ok(())
}

fn parse_destinations(specs: &[String]) -> Vec<OutputDestination> {
    if specs.is_empty() {
        return vec![OutputDestination::Stdout];
    }
    specs
        .iter()
        .map(|spec| {
            if spec == "-" {
                OutputDestination::Stdout
            } else {
                OutputDestination::file(spec)
            }
        })
        .collect()
}

fn ensure_paths_available(destinations: &[OutputDestination], force: bool) -> Result<()> {
    if force {
        return Ok(());
    }
    for destination in destinations {
        if let OutputDestination::File(path) = destination
            && path.exists()
        {
            return Err(eyre!(
                "output file {} already exists (pass --force to overwrite)",
                path.display()
            ));
        }
    }
    Ok(())
}

fn pick_format(destinations: &[OutputDestination]) -> DocumentFormat {
    destinations
        .iter()
        .find_map(|destination| match destination {
            OutputDestination::File(path) => Some(DocumentFormat::from_extension(path)),
            OutputDestination::Stdout => None,
        })
        .unwrap_or(DocumentFormat::Json)
}

fn init_logging(path: &Path) -> Result<()> {
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("failed to open log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,linkform=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    tracing::info!("linkform logging to {}", path.display());
    Ok(())
}
