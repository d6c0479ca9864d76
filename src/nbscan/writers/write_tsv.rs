//! Tab-separated writers for resolved motifs and hotspot windows.
//!

use crate::nbscan::{hotspots::Hotspot, motif::Motif};
use crate::utils::{close_output, open_output, OutputSink, Result};
use itertools::Itertools;
use std::{
    env,
    io::{BufWriter, Write},
};

const MOTIF_COLUMNS: [&str; 10] = [
    "seq_id",
    "class",
    "subtype",
    "start",
    "end",
    "length",
    "gc",
    "score",
    "score_method",
    "sequence",
];

const HOTSPOT_COLUMNS: [&str; 4] = ["seq_id", "start", "end", "motif_count"];

type Sink = BufWriter<OutputSink>;

/// Writes the provenance lines followed by the column header.
///
/// # Arguments
/// * `writer` - Destination of the header.
/// * `columns` - Column names of the table.
fn write_header(writer: &mut Sink, columns: &[&str]) -> Result<()> {
    let command_line = env::args().join(" ");
    writeln!(
        writer,
        "##{}Version={}",
        env!("CARGO_PKG_NAME"),
        *crate::cli::FULL_VERSION
    )
    .and_then(|_| writeln!(writer, "##{}Command={}", env!("CARGO_PKG_NAME"), command_line))
    .and_then(|_| writeln!(writer, "{}", columns.join("\t")))
    .map_err(|e| format!("Failed to write header: {}", e))
}

/// Structure for writing motif records, one line per motif.
pub struct MotifWriter {
    writer: Sink,
    output_path: String,
}

impl MotifWriter {
    /// Constructs a new `MotifWriter` and writes the header.
    ///
    /// # Arguments
    /// * `output_path` - Path of the output table; gzip-compressed when it ends in `.gz`.
    pub fn new(output_path: &str) -> Result<MotifWriter> {
        let mut writer = open_output(output_path)?;
        write_header(&mut writer, &MOTIF_COLUMNS)?;
        Ok(MotifWriter {
            writer,
            output_path: output_path.to_string(),
        })
    }

    /// Writes every motif found on one sequence.
    ///
    /// # Arguments
    /// * `seq_id` - Identifier of the sequence the motifs were found on.
    /// * `motifs` - Motifs in output order.
    pub fn write(&mut self, seq_id: &str, motifs: &[Motif]) -> Result<()> {
        for motif in motifs {
            writeln!(
                self.writer,
                "{}\t{}\t{}\t{}\t{}\t{}\t{:.1}\t{}\t{}\t{}",
                seq_id,
                motif.class,
                motif.subtype,
                motif.start,
                motif.end,
                motif.len(),
                motif.gc_content(),
                motif.score,
                motif.score_method,
                motif.seq
            )
            .map_err(|e| format!("Failed to write motif: {}", e))?;
        }
        Ok(())
    }

    /// Flushes the table and, for gzip output, writes the stream trailer.
    pub fn finish(self) -> Result<()> {
        close_output(self.writer, &self.output_path)
    }
}

/// Structure for writing hotspot windows.
pub struct HotspotWriter {
    writer: Sink,
    output_path: String,
}

impl HotspotWriter {
    pub fn new(output_path: &str) -> Result<HotspotWriter> {
        let mut writer = open_output(output_path)?;
        write_header(&mut writer, &HOTSPOT_COLUMNS)?;
        Ok(HotspotWriter {
            writer,
            output_path: output_path.to_string(),
        })
    }

    pub fn write(&mut self, seq_id: &str, hotspots: &[Hotspot]) -> Result<()> {
        for hotspot in hotspots {
            writeln!(
                self.writer,
                "{}\t{}\t{}\t{}",
                seq_id, hotspot.start, hotspot.end, hotspot.motif_count
            )
            .map_err(|e| format!("Failed to write hotspot: {}", e))?;
        }
        Ok(())
    }

    pub fn finish(self) -> Result<()> {
        close_output(self.writer, &self.output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nbscan::motif::{MotifClass, Score, ScoreMethod};
    use crate::nbscan::sequence::Sequence;
    use std::io::Read;

    fn table_lines(path: &std::path::Path) -> Vec<String> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .filter(|l| !l.starts_with("##"))
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn motif_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.motifs.tsv");
        let seq = Sequence::new("TTGGGCCAAAAAA").unwrap();
        let motifs = vec![
            Motif::new(
                MotifClass::Quadruplex,
                "G-Quadruplex",
                &seq,
                2,
                7,
                Score::Value(1.5),
                ScoreMethod::G4Hunter,
            ),
            Motif::new(
                MotifClass::Bend,
                "A/T-tract",
                &seq,
                7,
                13,
                Score::NotApplicable,
                ScoreMethod::None,
            ),
        ];
        let mut writer = MotifWriter::new(path.to_str().unwrap()).unwrap();
        writer.write("chr1", &motifs).unwrap();
        writer.finish().unwrap();

        let lines = table_lines(&path);
        assert_eq!(lines[0], MOTIF_COLUMNS.join("\t"));
        assert_eq!(
            lines[1],
            "chr1\tQuadruplex\tG-Quadruplex\t3\t7\t5\t100.0\t1.5\tG4Hunter\tGGGCC"
        );
        assert_eq!(
            lines[2],
            "chr1\tBend\tA/T-tract\t8\t13\t6\t0.0\tNA\tnone\tAAAAAA"
        );
    }

    #[test]
    fn gzipped_hotspot_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.hotspots.tsv.gz");
        let mut writer = HotspotWriter::new(path.to_str().unwrap()).unwrap();
        let hotspots = [Hotspot {
            start: 4,
            end: 103,
            motif_count: 5,
        }];
        writer.write("chr2", &hotspots).unwrap();
        writer.finish().unwrap();

        let mut content = String::new();
        flate2::read::GzDecoder::new(std::fs::File::open(&path).unwrap())
            .read_to_string(&mut content)
            .unwrap();
        let last = content.lines().last().unwrap();
        assert_eq!(last, "chr2\t4\t103\t5");
        assert!(content.contains("seq_id\tstart\tend\tmotif_count"));
    }
}
