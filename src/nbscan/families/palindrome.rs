use super::arms::{find_arm_pairs, ArmComposition, ArmParams, Symmetry};
use crate::nbscan::motif::{Motif, MotifClass, Score, ScoreMethod};
use crate::nbscan::sequence::Sequence;

const MAX_ARM: usize = 100;
const MAX_SPACER: usize = 100;

const CRUCIFORM: ArmParams = ArmParams {
    min_arm: 6,
    max_arm: MAX_ARM,
    max_spacer: MAX_SPACER,
    symmetry: Symmetry::Inverted,
    composition: ArmComposition::Any,
};

const MIRROR: ArmParams = ArmParams {
    min_arm: 10,
    max_arm: MAX_ARM,
    max_spacer: MAX_SPACER,
    symmetry: Symmetry::Mirror,
    composition: ArmComposition::Any,
};

fn arm_motifs(seq: &Sequence, params: &ArmParams, class: MotifClass, subtype: &str) -> Vec<Motif> {
    find_arm_pairs(seq.as_bytes(), params)
        .into_iter()
        .map(|m| {
            Motif::new(
                class,
                subtype,
                seq,
                m.start,
                m.end,
                Score::Value(m.arm as f64),
                ScoreMethod::ArmLength,
            )
        })
        .collect()
}

/// Inverted repeats able to extrude as a four-way junction
pub fn find_cruciforms(seq: &Sequence) -> Vec<Motif> {
    arm_motifs(seq, &CRUCIFORM, MotifClass::Cruciform, "Cruciform")
}

pub fn find_mirror_repeats(seq: &Sequence) -> Vec<Motif> {
    arm_motifs(seq, &MIRROR, MotifClass::Repeat, "Mirror_Repeat")
}
