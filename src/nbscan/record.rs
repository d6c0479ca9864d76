use crate::utils::{normalize_bases, open_fasta_reader, Result};
use bio::io::fasta;
use crossbeam_channel::Sender;
use std::io::BufRead;
use std::path::Path;

/// A normalised FASTA record; `index` is its position in the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeqRecord {
    pub index: usize,
    pub id: String,
    pub bases: String,
}

/// Iterates over the records of a FASTA stream, normalising each sequence.
/// Parsing stops at the first malformed record.
pub fn get_records<B: BufRead>(reader: B) -> impl Iterator<Item = Result<SeqRecord>> {
    let mut failed = false;
    fasta::Reader::from_bufread(reader)
        .records()
        .enumerate()
        .map_while(move |(index, record)| {
            if failed {
                return None;
            }
            Some(match record {
                Ok(record) => Ok(SeqRecord {
                    index,
                    id: record.id().to_string(),
                    bases: normalize_bases(record.seq()),
                }),
                Err(err) => {
                    failed = true;
                    Err(format!("Error at FASTA record {}: {}", index + 1, err))
                }
            })
        })
}

pub fn stream_records_into_channel(input_path: &Path, sender: Sender<Result<SeqRecord>>) -> Result<()> {
    let reader = open_fasta_reader(input_path)?;
    for record in get_records(reader) {
        let failed = record.is_err();
        sender
            .send(record)
            .map_err(|_| "Record channel closed before the input was consumed".to_string())?;
        if failed {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn records_are_normalised_and_indexed() {
        let input = b">chr1 description\nacgu\nGGNN\n>chr2\n\n>chr3\nTT AA\n";
        let records: Vec<SeqRecord> = get_records(Cursor::new(&input[..]))
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].id, "chr1");
        assert_eq!(records[0].bases, "ACGTGGNN");
        assert_eq!(records[1].index, 1);
        assert_eq!(records[1].bases, "");
        assert_eq!(records[2].bases, "TTAA");
    }

    #[test]
    fn missing_header_is_an_error() {
        let mut records = get_records(Cursor::new(&b"ACGT\n"[..]));
        assert!(records.next().unwrap().is_err());
        assert!(records.next().is_none());
    }

    #[test]
    fn stream_sends_every_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.fa");
        std::fs::write(&path, ">a\nACGT\n>b\nGGGG\n").unwrap();
        let (sender, receiver) = crossbeam_channel::unbounded();
        stream_records_into_channel(&path, sender).unwrap();
        let ids: Vec<String> = receiver.iter().map(|r| r.unwrap().id).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }
}
