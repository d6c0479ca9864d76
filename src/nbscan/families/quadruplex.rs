use super::pattern::{MotifPattern, TractStart};
use crate::nbscan::motif::{Motif, MotifClass, Score, ScoreMethod};
use crate::nbscan::scoring::{g4hunter, g4hunter_scaled, imotif_score};
use crate::nbscan::sequence::Sequence;
use once_cell::sync::Lazy;
use std::collections::HashSet;

static CANONICAL: Lazy<MotifPattern> = Lazy::new(|| {
    MotifPattern::new(r"(?:G{3,}[ACGT]{1,7}){3}G{3,}", b"G", TractStart::Run)
});
static RELAXED: Lazy<MotifPattern> = Lazy::new(|| {
    MotifPattern::new(r"(?:G{3,}[ACGT]{1,12}){3}G{3,}", b"G", TractStart::Run)
});
// A tract may be split by a short non-G bulge
static BULGED: Lazy<MotifPattern> = Lazy::new(|| {
    MotifPattern::new(
        r"(?:(?:G{2,}[ACT]{1,3}G{2,}|G{3,})[ACGT]{1,7}){3}(?:G{2,}[ACT]{1,3}G{2,}|G{3,})",
        b"G",
        TractStart::Run,
    )
});
static BIPARTITE: Lazy<MotifPattern> = Lazy::new(|| {
    MotifPattern::new(
        r"(?:G{3,}[ACGT]{1,7}){3}G{3,}[ACGT]{0,30}(?:G{3,}[ACGT]{1,7}){3}G{3,}",
        b"G",
        TractStart::Run,
    )
});
static MULTIMERIC: Lazy<MotifPattern> = Lazy::new(|| {
    MotifPattern::new(r"(?:G{3,}[ACGT]{1,12}){4,}G{3,}", b"G", TractStart::Run).open_ended()
});
static G_TRIPLEX: Lazy<MotifPattern> = Lazy::new(|| {
    MotifPattern::new(r"(?:G{3,}[ACGT]{1,7}){2}G{3,}", b"G", TractStart::Run)
});
static IMOTIF: Lazy<MotifPattern> = Lazy::new(|| {
    MotifPattern::new(r"(?:C{3,}[ACGT]{1,7}){3}C{3,}", b"C", TractStart::Run)
});

fn g4_motif(seq: &Sequence, subtype: &str, start: usize, end: usize) -> Motif {
    let score = g4hunter(&seq.as_bytes()[start..end]);
    Motif::new(
        MotifClass::Quadruplex,
        subtype,
        seq,
        start,
        end,
        Score::Value(score),
        ScoreMethod::G4Hunter,
    )
}

/// G-rich four-stranded structures and their three-tract relative
pub fn find_quadruplexes(seq: &Sequence) -> Vec<Motif> {
    let bases = seq.as_bytes();
    let canonical = CANONICAL.find_all(bases);
    let mut motifs = Vec::new();

    for &(start, end) in &canonical {
        motifs.push(g4_motif(seq, "G-Quadruplex", start, end));
    }
    for (start, end) in RELAXED.find_all(bases) {
        motifs.push(g4_motif(seq, "Relaxed_G-Quadruplex", start, end));
    }

    let canonical_spans: HashSet<(usize, usize)> = canonical.iter().copied().collect();
    for span in BULGED.find_all(bases) {
        if !canonical_spans.contains(&span) {
            motifs.push(g4_motif(seq, "Bulged_G-Quadruplex", span.0, span.1));
        }
    }
    for (start, end) in BIPARTITE.find_all(bases) {
        motifs.push(g4_motif(seq, "Bipartite_G-Quadruplex", start, end));
    }
    for (start, end) in MULTIMERIC.find_all(bases) {
        motifs.push(g4_motif(seq, "Multimeric_G-Quadruplex", start, end));
    }

    // canonical is sorted by start; a running maximum of ends answers
    // "does any canonical match begin before `end` and reach past `start`"
    let reach: Vec<usize> = canonical
        .iter()
        .scan(0, |max_end, &(_, end)| {
            *max_end = end.max(*max_end);
            Some(*max_end)
        })
        .collect();
    for (start, end) in G_TRIPLEX.find_all(bases) {
        let preceding = canonical.partition_point(|&(s, _)| s < end);
        let overlaps_g4 = preceding > 0 && reach[preceding - 1] > start;
        if !overlaps_g4 {
            motifs.push(Motif::new(
                MotifClass::Quadruplex,
                "G-Triplex",
                seq,
                start,
                end,
                Score::Value(g4hunter_scaled(&bases[start..end])),
                ScoreMethod::G4HunterScaled,
            ));
        }
    }

    motifs
}

/// C-rich counterpart of the canonical quadruplex
pub fn find_imotifs(seq: &Sequence) -> Vec<Motif> {
    let bases = seq.as_bytes();
    IMOTIF
        .find_all(bases)
        .into_iter()
        .map(|(start, end)| {
            Motif::new(
                MotifClass::Quadruplex,
                "i-Motif",
                seq,
                start,
                end,
                Score::Value(imotif_score(&bases[start..end])),
                ScoreMethod::G4Hunter,
            )
        })
        .collect()
}
