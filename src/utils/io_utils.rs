use crate::utils::Result;
use flate2::{write::GzEncoder, Compression};
use std::{
    fs::File,
    io::{self, BufWriter, Write},
};

pub fn create_writer<T, F>(output_prefix: &str, output_suffix: &str, f: F) -> Result<T>
where
    F: FnOnce(&str) -> Result<T>,
{
    let output_path = format!("{}.{}", output_prefix, output_suffix);
    f(&output_path)
}

/// Output file, gzip-compressed or plain
pub enum OutputSink {
    Plain(File),
    Gzip(GzEncoder<File>),
}

impl Write for OutputSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            OutputSink::Plain(file) => file.write(buf),
            OutputSink::Gzip(encoder) => encoder.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            OutputSink::Plain(file) => file.flush(),
            OutputSink::Gzip(encoder) => encoder.flush(),
        }
    }
}

impl OutputSink {
    /// Flushes the file, writing the gzip trailer first when compressing
    pub fn finish(self) -> io::Result<()> {
        match self {
            OutputSink::Plain(mut file) => file.flush(),
            OutputSink::Gzip(encoder) => encoder.finish()?.flush(),
        }
    }
}

/// Opens `path` for writing, gzip-compressing when it ends in `.gz`
pub fn open_output(path: &str) -> Result<BufWriter<OutputSink>> {
    let file = File::create(path).map_err(|e| format!("Failed to create {}: {}", path, e))?;
    let sink = if path.to_lowercase().ends_with(".gz") {
        OutputSink::Gzip(GzEncoder::new(file, Compression::default()))
    } else {
        OutputSink::Plain(file)
    };
    Ok(BufWriter::new(sink))
}

/// Flushes buffered output and completes the file
pub fn close_output(writer: BufWriter<OutputSink>, path: &str) -> Result<()> {
    writer
        .into_inner()
        .map_err(|e| e.into_error())
        .and_then(OutputSink::finish)
        .map_err(|e| format!("Failed to finish {}: {}", path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn gzip_output_is_complete_after_close() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.tsv.gz");
        let path = path.to_str().unwrap();

        let mut writer = open_output(path).unwrap();
        assert!(matches!(writer.get_ref(), OutputSink::Gzip(_)));
        writeln!(writer, "seq_id\tstart").unwrap();
        close_output(writer, path).unwrap();

        // the single-member decoder rejects a stream without its trailer
        let mut content = String::new();
        flate2::read::GzDecoder::new(File::open(path).unwrap())
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "seq_id\tstart\n");
    }

    #[test]
    fn plain_output_is_flushed_on_close() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.tsv");
        let path = path.to_str().unwrap();

        let mut writer = open_output(path).unwrap();
        assert!(matches!(writer.get_ref(), OutputSink::Plain(_)));
        write!(writer, "a\tb").unwrap();
        close_output(writer, path).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "a\tb");
    }
}
