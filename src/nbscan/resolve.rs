use super::motif::{Motif, MotifClass};
use std::{collections::BTreeMap, str::FromStr};

/// Scope of the overlap resolution pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// One pass across every class
    All,
    /// Independent passes per motif class
    WithinClass,
    /// Keep every candidate
    None,
}

impl FromStr for Resolution {
    type Err = &'static str;
    fn from_str(resolution: &str) -> Result<Self, Self::Err> {
        match resolution {
            "all" => Ok(Resolution::All),
            "class" => Ok(Resolution::WithinClass),
            "none" => Ok(Resolution::None),
            _ => Err("Invalid resolution"),
        }
    }
}

/// Greedy selection of non-intersecting candidates.
///
/// Candidates are visited by ascending start, higher scores first among equal
/// starts, and accepted when they share no position with anything accepted
/// before. Accepted spans are disjoint and visited in start order, so the end
/// of the last accepted span stands in for the full covered set.
pub fn resolve_overlaps(candidates: &[Motif]) -> Vec<Motif> {
    let mut order: Vec<&Motif> = candidates.iter().collect();
    order.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| b.score.cmp(&a.score)));

    let mut last_end = 0;
    let mut kept = Vec::new();
    for motif in order {
        if motif.start > last_end {
            last_end = motif.end;
            kept.push(motif.clone());
        }
    }
    kept
}

pub fn resolve(candidates: &[Motif], resolution: Resolution) -> Vec<Motif> {
    match resolution {
        Resolution::All => resolve_overlaps(candidates),
        Resolution::WithinClass => {
            let mut by_class: BTreeMap<MotifClass, Vec<Motif>> = BTreeMap::new();
            for motif in candidates {
                by_class.entry(motif.class).or_default().push(motif.clone());
            }
            let mut kept: Vec<Motif> = by_class
                .values()
                .flat_map(|group| resolve_overlaps(group))
                .collect();
            kept.sort_by_key(|m| (m.start, m.class));
            kept
        }
        Resolution::None => candidates.to_vec(),
    }
}
