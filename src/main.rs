//! `verseflow` - analyze the rhyme scheme and syllables of lyrics.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use verseflow::config::Config;
use verseflow::input::InputSource;
use verseflow::{report, LyricsParser};

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "verseflow", version, about = "Rhyme scheme and syllable analysis for lyrics")]
struct Args {
    /// Lyrics text; read from stdin when omitted or `-`
    text: Option<String>,

    /// Read lyrics from a file (`-` for stdin)
    #[arg(short, long, value_name = "PATH")]
    file: Option<String>,

    /// Title printed above the report
    #[arg(short, long)]
    title: Option<String>,

    /// Print the raw analysis as JSON
    #[arg(long)]
    json: bool,

    /// Indent JSON output (implies --json)
    #[arg(long)]
    pretty: bool,

    /// Analyze stanzas in parallel
    #[arg(long)]
    parallel: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(config: &Config, verbose: bool) {
    let fallback = if verbose { "verseflow=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_filter.as_deref().unwrap_or(fallback)))
        .unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::load().context("Failed to load configuration")?;
    init_tracing(&config, args.verbose);

    tracing::debug!("Starting {} v{}", config.app_name(), config.app_version());

    let source = InputSource::resolve(args.text, args.file.as_deref());
    let text = source.read().with_context(|| format!("Failed to read lyrics from {source}"))?;

    let parallel = args.parallel || config.parallel;
    let parsed = LyricsParser::new().with_parallel(parallel).parse(&text);

    if args.json || args.pretty || config.json {
        let json = report::to_json(&parsed, args.pretty || config.pretty)
            .context("Failed to serialize analysis")?;
        println!("{json}");
    } else {
        print!("{}", report::render(&parsed, args.title.as_deref()));
    }

    Ok(())
}
