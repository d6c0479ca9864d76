use crate::nbscan::{
    families::{hybrid::DEFAULT_MAX_DISTANCE, Family, ScanMode},
    hotspots::{DEFAULT_MIN_COUNT, DEFAULT_WINDOW},
    resolve::Resolution,
    workflows::HotspotSource,
};
use crate::utils::Result;
use clap::{ArgAction, ArgGroup, Parser, Subcommand};
use env_logger::fmt::Color;
use log::{Level, LevelFilter};
use once_cell::sync::Lazy;
use std::{
    io::Write,
    path::{Path, PathBuf},
};

pub static FULL_VERSION: Lazy<String> = Lazy::new(|| {
    format!(
        "{}-{}",
        env!("CARGO_PKG_VERSION"),
        env!("VERGEN_GIT_DESCRIBE")
    )
});

#[derive(Parser)]
#[command(name="nbscan",
          version=&**FULL_VERSION,
          about = env!("CARGO_PKG_DESCRIPTION"),
          long_about = None,
          disable_help_subcommand = true,
          after_help = "This program comes with ABSOLUTELY NO WARRANTY; it is intended for
research use only.",
          help_template = "{name} {version}\n{about-section}\n{usage-heading}\n    {usage}\n\n{all-args}{after-help}",
          )]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[clap(short = 'v')]
    #[clap(long = "verbose")]
    #[clap(action = ArgAction::Count, help = "Specify multiple times to increase verbosity level (e.g., -vv for more verbosity)")]
    pub verbosity: u8,
}

#[derive(Subcommand)]
pub enum Command {
    #[clap(about = "Non-B DNA Motif Scanner")]
    Scan(ScanArgs),
    #[clap(about = "FASTA Input Validator")]
    Validate(ValidateArgs),
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("scan")))]
#[command(arg_required_else_help(true))]
pub struct ScanArgs {
    #[clap(required = true)]
    #[clap(short = 'i')]
    #[clap(long = "input")]
    #[clap(help = "FASTA file with sequences to scan (optionally gzipped)")]
    #[clap(value_name = "FASTA")]
    #[arg(value_parser = check_file_exists)]
    pub input_path: PathBuf,

    #[clap(required = true)]
    #[clap(short = 'o')]
    #[clap(long = "output-prefix")]
    #[clap(help = "Prefix for output files")]
    #[clap(value_name = "OUTPUT_PREFIX")]
    #[arg(value_parser = check_prefix_path)]
    pub output_prefix: String,

    #[clap(short = 't')]
    #[clap(long = "threads")]
    #[clap(help = "Number of threads")]
    #[clap(value_name = "THREADS")]
    #[clap(default_value = "1")]
    #[arg(value_parser = threads_in_range)]
    pub num_threads: usize,

    #[clap(long = "families")]
    #[clap(value_name = "FAMILIES")]
    #[clap(value_delimiter = ',')]
    #[clap(
        help = "Comma-separated motif families to report: quadruplex, imotif, zdna, cruciform, mirror, triplex, direct, str, bend, hybrid [default: all]"
    )]
    pub families: Vec<Family>,

    #[clap(long = "scan-mode")]
    #[clap(value_name = "MODE")]
    #[clap(help = "Report every occurrence or scan each family left to right without overlaps (overlapping or non-overlapping)")]
    #[clap(default_value = "overlapping")]
    pub scan_mode: ScanMode,

    #[clap(long = "resolve")]
    #[clap(value_name = "SCOPE")]
    #[clap(help = "Overlap resolution across all classes, within each class, or none (all, class or none)")]
    #[clap(default_value = "all")]
    pub resolution: Resolution,

    #[clap(help_heading("Hotspots"))]
    #[clap(long = "hotspot-window")]
    #[clap(value_name = "WINDOW")]
    #[clap(help = "Sliding window length")]
    #[clap(default_value_t = DEFAULT_WINDOW)]
    #[arg(value_parser = positive_integer)]
    pub hotspot_window: usize,

    #[clap(help_heading("Hotspots"))]
    #[clap(long = "hotspot-min-count")]
    #[clap(value_name = "COUNT")]
    #[clap(help = "Minimum number of motifs intersecting a window")]
    #[clap(default_value_t = DEFAULT_MIN_COUNT)]
    #[arg(value_parser = positive_integer)]
    pub hotspot_min_count: usize,

    #[clap(help_heading("Hotspots"))]
    #[clap(long = "hotspot-source")]
    #[clap(value_name = "SOURCE")]
    #[clap(help = "Motif set counted in windows (resolved or candidates)")]
    #[clap(default_value = "resolved")]
    pub hotspot_source: HotspotSource,

    #[clap(help_heading("Hotspots"))]
    #[clap(long = "no-hotspots")]
    #[clap(help = "Skip hotspot detection")]
    pub no_hotspots: bool,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "hybrid-distance")]
    #[clap(value_name = "DISTANCE")]
    #[clap(help = "Maximum gap between two motifs forming a hybrid")]
    #[clap(default_value_t = DEFAULT_MAX_DISTANCE)]
    pub hybrid_distance: usize,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "max-palindrome-len")]
    #[clap(value_name = "LENGTH")]
    #[clap(help = "Skip cruciform and mirror repeat scans on sequences longer than this")]
    pub max_palindrome_len: Option<usize>,
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("validate")))]
#[command(arg_required_else_help(true))]
pub struct ValidateArgs {
    #[clap(required = true)]
    #[clap(short = 'i')]
    #[clap(long = "input")]
    #[clap(help = "FASTA file to validate (optionally gzipped)")]
    #[clap(value_name = "FASTA")]
    #[arg(value_parser = check_file_exists)]
    pub input_path: PathBuf,
}

pub fn init_verbose(args: &Cli) {
    let filter_level: LevelFilter = match args.verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            let level = record.level();
            let mut style = buf.style();
            match record.level() {
                Level::Error => style.set_color(Color::Red),
                Level::Warn => style.set_color(Color::Yellow),
                Level::Info => style.set_color(Color::Green),
                Level::Debug => style.set_color(Color::Blue),
                Level::Trace => style.set_color(Color::Cyan),
            };

            writeln!(
                buf,
                "{} [{}] - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                style.value(level),
                record.args()
            )
        })
        .filter_level(filter_level)
        .init();
}

fn check_prefix_path(s: &str) -> Result<String> {
    let path = Path::new(s);
    if let Some(parent_dir) = path.parent() {
        if !parent_dir.as_os_str().is_empty() && !parent_dir.exists() {
            return Err(format!("Path does not exist: {}", parent_dir.display()));
        }
    }
    Ok(s.to_string())
}

fn threads_in_range(s: &str) -> Result<usize> {
    let thread: usize = s
        .parse()
        .map_err(|_| format!("`{}` is not a valid thread number", s))?;
    if thread >= 1 {
        Ok(thread)
    } else {
        Err("Number of threads must be at least 1".into())
    }
}

fn check_file_exists(s: &str) -> Result<PathBuf> {
    let path = Path::new(s);
    if !path.exists() {
        Err(format!("File does not exist: {}", path.display()))
    } else {
        Ok(path.to_path_buf())
    }
}

fn positive_integer(s: &str) -> Result<usize> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("`{}` is not a valid integer", s))?;
    if value >= 1 {
        Ok(value)
    } else {
        Err("Value must be at least 1".into())
    }
}
