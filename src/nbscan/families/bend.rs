use super::pattern::{MotifPattern, TractStart};
use crate::nbscan::motif::{Motif, MotifClass, Score, ScoreMethod};
use crate::nbscan::sequence::Sequence;
use once_cell::sync::Lazy;
use std::ops::RangeInclusive;

const TRACT_LEN: RangeInclusive<usize> = 6..=11;
const PHASED_RUN_LEN: RangeInclusive<usize> = 3..=11;
const PHASED_GAP: RangeInclusive<usize> = 3..=11;
const MIN_PHASED_RUNS: usize = 3;

static FLEXIBLE: Lazy<MotifPattern> = Lazy::new(|| {
    MotifPattern::new(r"(?:CA){4,}|(?:TG){4,}", b"CT", TractStart::Period(2)).open_ended()
});

/// Maximal A or T homopolymer run as a 0-based half-open range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Run {
    start: usize,
    end: usize,
}

impl Run {
    fn len(&self) -> usize {
        self.end - self.start
    }
}

fn at_runs(bases: &[u8]) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut offset = 0;
    for chunk in bases.chunk_by(|a, b| a == b) {
        if matches!(chunk[0], b'A' | b'T') {
            runs.push(Run {
                start: offset,
                end: offset + chunk.len(),
            });
        }
        offset += chunk.len();
    }
    runs
}

fn bend_motif(seq: &Sequence, subtype: &str, start: usize, end: usize, score: Score) -> Motif {
    let method = match score {
        Score::Value(_) => ScoreMethod::TractCount,
        Score::NotApplicable => ScoreMethod::None,
    };
    Motif::new(MotifClass::Bend, subtype, seq, start, end, score, method)
}

/// Maximal chains of A/T runs spaced close to the helical repeat
fn phased_tracts(seq: &Sequence, runs: &[Run]) -> Vec<Motif> {
    let candidates: Vec<Run> = runs
        .iter()
        .filter(|r| PHASED_RUN_LEN.contains(&r.len()))
        .copied()
        .collect();

    let mut motifs = Vec::new();
    let mut first = 0;
    while first < candidates.len() {
        let mut last = first;
        while last + 1 < candidates.len()
            && PHASED_GAP.contains(&(candidates[last + 1].start - candidates[last].end))
        {
            last += 1;
        }
        let count = last - first + 1;
        if count >= MIN_PHASED_RUNS {
            motifs.push(bend_motif(
                seq,
                "Phased_A-tract",
                candidates[first].start,
                candidates[last].end,
                Score::Value(count as f64),
            ));
        }
        first = last + 1;
    }
    motifs
}

/// A/T-tracts, phased A-tracts and flexible CA/TG stretches
pub fn find_bends(seq: &Sequence) -> Vec<Motif> {
    let runs = at_runs(seq.as_bytes());

    let mut motifs: Vec<Motif> = runs
        .iter()
        .filter(|r| TRACT_LEN.contains(&r.len()))
        .map(|r| bend_motif(seq, "A/T-tract", r.start, r.end, Score::NotApplicable))
        .collect();

    motifs.extend(phased_tracts(seq, &runs));

    motifs.extend(
        FLEXIBLE
            .find_all(seq.as_bytes())
            .into_iter()
            .map(|(start, end)| {
                bend_motif(seq, "CA/TG_Flexible", start, end, Score::NotApplicable)
            }),
    );

    motifs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn of_subtype(seq: &str, subtype: &str) -> Vec<(usize, usize, Score)> {
        let seq = Sequence::new(seq).unwrap();
        find_bends(&seq)
            .into_iter()
            .filter(|m| m.subtype == subtype)
            .map(|m| (m.start, m.end, m.score))
            .collect()
    }

    #[test]
    fn adjacent_a_and_t_runs_are_separate_tracts() {
        let seq = Sequence::new("AAAAAATTTTTTT").unwrap();
        let motifs = find_bends(&seq);
        let spans: Vec<_> = motifs.iter().map(|m| (m.start, m.end)).collect();
        assert_eq!(spans, vec![(1, 6), (7, 13)]);
        assert!(motifs.iter().all(|m| m.subtype == "A/T-tract"));
        assert!(motifs.iter().all(|m| m.score == Score::NotApplicable));
        assert_eq!(motifs[1].seq, "TTTTTTT");
    }

    #[test]
    fn long_runs_are_not_tracts() {
        assert!(of_subtype("GTTTTTTTTTTTTG", "A/T-tract").is_empty());
    }

    #[test]
    fn three_phased_runs() {
        assert_eq!(
            of_subtype("GAAAACGCGTTTTGCGCAAAAG", "Phased_A-tract"),
            vec![(2, 21, Score::Value(3.0))]
        );
    }

    #[test]
    fn chain_is_reported_from_its_first_run() {
        assert_eq!(
            of_subtype("GAAAACGCGTTTTGCGCAAAAGCCAAAC", "Phased_A-tract"),
            vec![(2, 27, Score::Value(4.0))]
        );
    }

    #[test]
    fn long_phased_region_is_one_chain() {
        let phased = of_subtype(&"AAAAACCCCC".repeat(2_000), "Phased_A-tract");
        assert_eq!(phased, vec![(1, 19_995, Score::Value(2_000.0))]);
    }

    #[test]
    fn flexible_dinucleotides() {
        let flexible = of_subtype("CCACACACACAG", "CA/TG_Flexible");
        assert_eq!(flexible, vec![(2, 11, Score::NotApplicable)]);
    }

    #[test]
    fn at_runs_skip_gc() {
        let runs = at_runs(b"GAATCCT");
        assert_eq!(
            runs,
            vec![
                Run { start: 1, end: 3 },
                Run { start: 3, end: 4 },
                Run { start: 6, end: 7 }
            ]
        );
    }
}
