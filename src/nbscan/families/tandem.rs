use super::shift_match_runs;
use crate::nbscan::motif::{Motif, MotifClass, Score, ScoreMethod};
use crate::nbscan::sequence::Sequence;

const MAX_UNIT: usize = 9;
const MIN_COPIES: usize = 2;
const MIN_SPAN: usize = 10;

fn is_primitive(unit: &[u8]) -> bool {
    let k = unit.len();
    (1..k).filter(|p| k % p == 0).all(|p| {
        unit.chunks(p).any(|chunk| chunk != &unit[..p])
    })
}

/// Short tandem repeats with a primitive unit of 1 to 9 bases. Only tracts
/// that cannot be extended to the left are reported, each trimmed to whole
/// copies of its unit.
pub fn find_tandem_repeats(seq: &Sequence) -> Vec<Motif> {
    let bases = seq.as_bytes();
    let n = bases.len();
    let mut motifs = Vec::new();

    for k in 1..=MAX_UNIT {
        if k >= n {
            break;
        }
        let runs = shift_match_runs(bases, k);
        for start in 0..n - k {
            if start > 0 && bases[start - 1] == bases[start - 1 + k] {
                continue;
            }
            let copies = (k + runs[start]) / k;
            if copies < MIN_COPIES || copies * k < MIN_SPAN {
                continue;
            }
            if !is_primitive(&bases[start..start + k]) {
                continue;
            }
            motifs.push(Motif::new(
                MotifClass::Repeat,
                format!("STR_{}bp", k),
                seq,
                start,
                start + copies * k,
                Score::Value(copies as f64),
                ScoreMethod::RepeatCount,
            ));
        }
    }

    motifs.sort_by_key(|m| (m.start, m.end));
    motifs
}
