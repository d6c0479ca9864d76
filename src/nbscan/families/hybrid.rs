use super::Family;
use crate::nbscan::motif::{Motif, MotifClass, Score, ScoreMethod};
use crate::nbscan::sequence::Sequence;
use crate::utils::Interval;
use std::collections::BTreeSet;

pub const DEFAULT_MAX_DISTANCE: usize = 20;

/// Two families whose candidates combine into a hybrid when they lie close together
pub struct HybridRule {
    pub subtype: &'static str,
    pub left: Family,
    pub right: Family,
}

pub const RULES: [HybridRule; 3] = [
    HybridRule {
        subtype: "G4_iMotif_Hybrid",
        left: Family::Quadruplex,
        right: Family::IMotif,
    },
    HybridRule {
        subtype: "Quadruplex_Triplex_Hybrid",
        left: Family::Quadruplex,
        right: Family::Triplex,
    },
    HybridRule {
        subtype: "Cruciform_Triplex_Junction",
        left: Family::Cruciform,
        right: Family::Triplex,
    },
];

fn candidates_of(raw: &[(Family, Vec<Motif>)], family: Family) -> Vec<Interval> {
    raw.iter()
        .filter(|(f, _)| *f == family)
        .flat_map(|(_, motifs)| motifs.iter().map(Motif::interval))
        .collect()
}

/// Spans covering every left/right pair separated by at most `max_distance` bases
fn paired_spans(left: &[Interval], right: &mut [Interval], max_distance: usize) -> BTreeSet<Interval> {
    right.sort_unstable();
    let longest = right.iter().map(Interval::len).max().unwrap_or(0);
    let mut spans = BTreeSet::new();
    for l in left {
        // a right interval starting before `first` ends too far left of `l`
        let first = right.partition_point(|r| {
            r.start.saturating_add(longest).saturating_add(max_distance) < l.start
        });
        let limit = l.end.saturating_add(max_distance).saturating_add(1);
        let upper = right.partition_point(|r| r.start <= limit);
        for r in &right[first..upper.max(first)] {
            if l.gap(r) <= max_distance {
                spans.insert(l.hull(r));
            }
        }
    }
    spans
}

/// Hybrid and junction motifs from the raw overlapping candidates of each
/// family. Families that were not scanned contribute no pairs.
pub fn find_hybrids(
    seq: &Sequence,
    raw: &[(Family, Vec<Motif>)],
    max_distance: usize,
) -> Vec<Motif> {
    let mut motifs = Vec::new();
    for rule in &RULES {
        let left = candidates_of(raw, rule.left);
        let mut right = candidates_of(raw, rule.right);
        for span in paired_spans(&left, &mut right, max_distance) {
            let (start, end) = span.to_zero_based();
            motifs.push(Motif::new(
                MotifClass::Hybrid,
                rule.subtype,
                seq,
                start,
                end,
                Score::NotApplicable,
                ScoreMethod::None,
            ));
        }
    }
    motifs
}
