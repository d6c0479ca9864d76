use super::pattern::{MotifPattern, TractStart};
use crate::nbscan::motif::{Motif, MotifClass, Score, ScoreMethod};
use crate::nbscan::scoring::zseeker;
use crate::nbscan::sequence::Sequence;
use once_cell::sync::Lazy;

static ALTERNATING: Lazy<MotifPattern> = Lazy::new(|| {
    MotifPattern::new(
        r"(?:GC|CG|GT|TG|AC|CA){6,}",
        b"ACGT",
        TractStart::Alternating,
    )
    .open_ended()
});

/// Alternating purine/pyrimidine tracts able to adopt the left-handed helix
pub fn find_zdna(seq: &Sequence) -> Vec<Motif> {
    let bases = seq.as_bytes();
    ALTERNATING
        .find_all(bases)
        .into_iter()
        .map(|(start, end)| {
            Motif::new(
                MotifClass::ZDna,
                "Z-DNA",
                seq,
                start,
                end,
                Score::Value(zseeker(&bases[start..end])),
                ScoreMethod::ZSeeker,
            )
        })
        .collect()
}
