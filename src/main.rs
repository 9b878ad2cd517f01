use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use mask_luma::Execution;
use template_mask::TemplateError;
use template_mask::config::config::TemplateConfig;

/// Turn an image into a template mask: black pixels whose alpha is the inverted brightness
/// of the original, ready for UI tinting.
#[derive(Parser, Debug)]
#[command(name = "templatize", version)]
#[command(about = "Convert an image into a black, alpha-masked template PNG")]
#[command(long_about = "Convert an image into a black, alpha-masked template PNG.
Dark pixels become opaque and bright pixels become transparent. The source alpha is ignored.")]
struct Args {
    /// Image to convert (PNG or any other raster format the decoder supports)
    input: PathBuf,

    /// Where to write the template PNG (not allowed with --in-place)
    output: Option<PathBuf>,

    /// Overwrite INPUT with the result
    #[arg(short, long)]
    in_place: bool,

    /// Transform rows on a single thread instead of the rayon pool
    #[arg(long)]
    sequential: bool,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    let execution = if args.sequential {
        Execution::Sequential
    } else {
        Execution::Parallel
    };

    let config = TemplateConfig::new(args.input, args.output, args.in_place, execution);
    let options = config
        .to_template_options()
        .map_err(|e| with_hint(e.into()))?;

    template_mask::convert_to_template(&options)
        .map_err(with_hint)
        .with_context(|| format!("Could not convert {}", options.input.display()))?;

    Ok(())
}

/// Warn by default; `RUST_LOG` still overrides the level chosen on the command line.
fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => LevelFilter::Error,
        (false, 0) => LevelFilter::Warn,
        (false, 1) => LevelFilter::Info,
        (false, _) => LevelFilter::Debug,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .parse_default_env()
        .init();
}

fn with_hint(err: TemplateError) -> anyhow::Error {
    log::debug!("{} stage failed", err.category());
    if let Some(hint) = err.recovery_suggestion() {
        eprintln!("hint: {}", hint);
    }
    anyhow::Error::new(err)
}
