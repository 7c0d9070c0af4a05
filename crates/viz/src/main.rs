//! piviz - Watch the Leibniz series converge to π
//!
//! Usage:
//!   piviz                     # Interactive chart starting at 20 terms
//!   piviz --terms 35          # Start somewhere else
//!   piviz --print --terms 10  # Print the sequence as a table
//!   piviz --print --json      # Print the sequence as JSON
//!
//! Keys:
//!   ←/→, h/l, +/-             # One term less/more
//!   PageDown/PageUp           # Ten terms less/more
//!   Home/End                  # 1 / 50 terms
//!   [ / ]                     # Inspect the previous/next point
//!   r                         # Back to the starting term count
//!   q, Esc, Ctrl+C            # Quit

use clap::Parser as ClapParser;
use leibniz_series::{TermCount, generate};
use pi_viz::app::App;
use pi_viz::config::{Config, LogConfig};
use pi_viz::{Result, print};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(ClapParser, Debug)]
#[command(name = "piviz")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Chart the Leibniz series approximation of π", long_about = None)]
struct Args {
    /// Number of terms to start with (1-50)
    #[arg(short, long)]
    terms: Option<TermCount>,

    /// Config file (default: $PI_VIZ_CONFIG, then the user config dir)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the sequence instead of starting the chart
    #[arg(long)]
    print: bool,

    /// With --print, emit JSON instead of a table
    #[arg(long, requires = "print")]
    json: bool,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = Config::load(args.config.as_deref())?;
    init_logging(&config.log, args.log_file.as_deref(), args.print)?;
    debug!(?config, "configuration loaded");

    if args.print {
        let terms = match args.terms {
            Some(t) => t,
            None => config.initial_terms()?,
        };
        info!(terms = terms.get(), json = args.json, "printing sequence");

        let points = generate(terms.get());
        let mut out = io::stdout().lock();
        return if args.json {
            print::write_json(&mut out, &points)
        } else {
            print::write_table(&mut out, &points)
        };
    }

    let app = App::from_config(&config, args.terms)?;
    pi_viz::run(app)
}

/// Set up tracing.
///
/// `RUST_LOG` wins over the configured filter. The chart owns the terminal,
/// so without a log file only print mode logs (to stderr).
fn init_logging(config: &LogConfig, log_file: Option<&Path>, print_mode: bool) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));

    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None if print_mode => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .init();
        }
        None => {}
    }
    Ok(())
}
