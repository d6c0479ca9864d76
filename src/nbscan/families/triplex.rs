use super::arms::{find_arm_pairs, ArmComposition, ArmParams, Symmetry};
use super::pattern::{MotifPattern, TractStart};
use crate::nbscan::motif::{Motif, MotifClass, Score, ScoreMethod};
use crate::nbscan::sequence::Sequence;
use once_cell::sync::Lazy;

const H_DNA: ArmParams = ArmParams {
    min_arm: 10,
    max_arm: 100,
    max_spacer: 8,
    symmetry: Symmetry::Mirror,
    composition: ArmComposition::HomoPurinePyrimidine,
};

static STICKY: Lazy<MotifPattern> = Lazy::new(|| {
    MotifPattern::new(r"(?:GAA){5,}|(?:TTC){5,}", b"GT", TractStart::Period(3)).open_ended()
});

/// Homopurine/homopyrimidine mirror repeats (H-DNA) and GAA/TTC tracts
pub fn find_triplexes(seq: &Sequence) -> Vec<Motif> {
    let mut motifs: Vec<Motif> = find_arm_pairs(seq.as_bytes(), &H_DNA)
        .into_iter()
        .map(|m| {
            Motif::new(
                MotifClass::Triplex,
                "H-DNA",
                seq,
                m.start,
                m.end,
                Score::NotApplicable,
                ScoreMethod::None,
            )
        })
        .collect();

    for (start, end) in STICKY.find_all(seq.as_bytes()) {
        let copies = (end - start) / 3;
        motifs.push(Motif::new(
            MotifClass::Triplex,
            "Sticky_DNA",
            seq,
            start,
            end,
            Score::Value(copies as f64),
            ScoreMethod::RepeatCount,
        ));
    }

    motifs
}
