use super::shift_match_runs;
use crate::nbscan::motif::{Motif, MotifClass, Score, ScoreMethod};
use crate::nbscan::sequence::Sequence;

const MIN_UNIT: usize = 10;
const MAX_UNIT: usize = 25;
const MAX_SPACER: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Unit {
    len: usize,
    spacer: usize,
}

impl Unit {
    fn beats(&self, other: &Unit) -> bool {
        self.len > other.len || (self.len == other.len && self.spacer < other.spacer)
    }
}

/// Slipped-strand candidates: a unit followed, after a short spacer, by an
/// identical copy. Each start keeps its longest unit, ties going to the
/// smallest spacer.
pub fn find_direct_repeats(seq: &Sequence) -> Vec<Motif> {
    let bases = seq.as_bytes();
    let mut best: Vec<Option<Unit>> = vec![None; bases.len()];

    for shift in MIN_UNIT..=MAX_UNIT + MAX_SPACER {
        if shift >= bases.len() {
            break;
        }
        // A shift d pairs a unit of length L with spacer d - L
        let runs = shift_match_runs(bases, shift);
        let min_len = MIN_UNIT.max(shift.saturating_sub(MAX_SPACER));
        for (start, &run) in runs.iter().enumerate() {
            let len = run.min(MAX_UNIT).min(shift);
            if len < min_len {
                continue;
            }
            let unit = Unit {
                len,
                spacer: shift - len,
            };
            match best[start] {
                Some(current) if !unit.beats(&current) => {}
                _ => best[start] = Some(unit),
            }
        }
    }

    best.into_iter()
        .enumerate()
        .filter_map(|(start, unit)| {
            let unit = unit?;
            let end = start + 2 * unit.len + unit.spacer;
            Some(Motif::new(
                MotifClass::Repeat,
                "Slipped_DNA",
                seq,
                start,
                end,
                Score::Value(unit.len as f64),
                ScoreMethod::UnitLength,
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(motifs: &[Motif]) -> Vec<(usize, usize, f64)> {
        motifs
            .iter()
            .map(|m| (m.start, m.end, m.score.value().unwrap()))
            .collect()
    }

    #[test]
    fn spaced_copy_is_found() {
        let seq = Sequence::new("TTACGTTGCAGTCACCCACGTTGCAGTCAGG").unwrap();
        let motifs = find_direct_repeats(&seq);
        assert_eq!(
            spans(&motifs),
            vec![(3, 29, 12.0), (4, 29, 11.0), (5, 29, 10.0)]
        );
        assert!(motifs.iter().all(|m| m.subtype == "Slipped_DNA"));
        assert_eq!(motifs[0].seq, "ACGTTGCAGTCACCCACGTTGCAGTCA");
    }

    #[test]
    fn adjacent_copies() {
        let seq = Sequence::new("ACGTACGTACACGTACGTAC").unwrap();
        assert_eq!(spans(&find_direct_repeats(&seq)), vec![(1, 20, 10.0)]);
    }

    #[test]
    fn unit_is_capped() {
        let seq = Sequence::new("A".repeat(60)).unwrap();
        let motifs = find_direct_repeats(&seq);
        assert_eq!(motifs[0].start, 1);
        assert_eq!(motifs[0].score, Score::Value(MAX_UNIT as f64));
        assert_eq!(motifs[0].end, 2 * MAX_UNIT);
        assert!(motifs.iter().all(|m| m.end <= 60));
    }

    #[test]
    fn short_sequence_has_no_repeats() {
        let seq = Sequence::new("ACGTACGTA").unwrap();
        assert!(find_direct_repeats(&seq).is_empty());
    }
}
