mod error;
mod io_utils;
mod readers;
mod region;
mod util;

pub use error::ScanError;
pub use io_utils::{close_output, create_writer, open_output, OutputSink};
pub use readers::{normalize_bases, open_fasta_reader};
pub use region::Interval;
pub use util::{handle_error_and_exit, round_to, Result};
