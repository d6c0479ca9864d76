use super::sequence::Sequence;
use crate::utils::Interval;
use std::{cmp::Ordering, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MotifClass {
    Quadruplex,
    Triplex,
    ZDna,
    Cruciform,
    Repeat,
    Bend,
    Hybrid,
}

impl fmt::Display for MotifClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            MotifClass::Quadruplex => "Quadruplex",
            MotifClass::Triplex => "Triplex",
            MotifClass::ZDna => "Z-DNA",
            MotifClass::Cruciform => "Cruciform",
            MotifClass::Repeat => "Repeat",
            MotifClass::Bend => "Bend",
            MotifClass::Hybrid => "Hybrid",
        };
        write!(f, "{}", name)
    }
}

/// Motif quality. `NotApplicable` ranks below every numeric score.
#[derive(Debug, Clone, Copy)]
pub enum Score {
    Value(f64),
    NotApplicable,
}

impl Score {
    pub fn value(&self) -> Option<f64> {
        match self {
            Score::Value(v) => Some(*v),
            Score::NotApplicable => None,
        }
    }
}

impl Ord for Score {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Score::Value(a), Score::Value(b)) => a.total_cmp(b),
            (Score::Value(_), Score::NotApplicable) => Ordering::Greater,
            (Score::NotApplicable, Score::Value(_)) => Ordering::Less,
            (Score::NotApplicable, Score::NotApplicable) => Ordering::Equal,
        }
    }
}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Score {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Score {}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Score::Value(v) => write!(f, "{}", v),
            Score::NotApplicable => write!(f, "NA"),
        }
    }
}

/// Names the function or proxy behind a score so that run-weighted scores
/// are never confused with plain counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreMethod {
    G4Hunter,
    G4HunterScaled,
    ZSeeker,
    ArmLength,
    UnitLength,
    RepeatCount,
    TractCount,
    None,
}

impl fmt::Display for ScoreMethod {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ScoreMethod::G4Hunter => "G4Hunter",
            ScoreMethod::G4HunterScaled => "G4Hunter_scaled",
            ScoreMethod::ZSeeker => "Z-Seeker",
            ScoreMethod::ArmLength => "Arm_length",
            ScoreMethod::UnitLength => "Unit_length",
            ScoreMethod::RepeatCount => "Repeat_count",
            ScoreMethod::TractCount => "Tract_count",
            ScoreMethod::None => "none",
        };
        write!(f, "{}", name)
    }
}

/// A scored interval; `start` and `end` are 1-based and inclusive
#[derive(Debug, Clone, PartialEq)]
pub struct Motif {
    pub class: MotifClass,
    pub subtype: String,
    pub start: usize,
    pub end: usize,
    pub seq: String,
    pub score: Score,
    pub score_method: ScoreMethod,
}

#[allow(clippy::len_without_is_empty)]
impl Motif {
    /// Builds a motif from the 0-based half-open range `[start, end)` of `sequence`
    pub fn new(
        class: MotifClass,
        subtype: impl Into<String>,
        sequence: &Sequence,
        start: usize,
        end: usize,
        score: Score,
        score_method: ScoreMethod,
    ) -> Self {
        let interval = Interval::from_zero_based(start, end);
        Motif {
            class,
            subtype: subtype.into(),
            start: interval.start,
            end: interval.end,
            seq: sequence.slice(start, end).to_string(),
            score,
            score_method,
        }
    }

    pub fn interval(&self) -> Interval {
        Interval {
            start: self.start,
            end: self.end,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    pub fn overlaps(&self, other: &Motif) -> bool {
        self.interval().intersects(&other.interval())
    }

    /// Percentage of G and C bases
    pub fn gc_content(&self) -> f64 {
        let gc = self
            .seq
            .bytes()
            .filter(|b| matches!(b, b'G' | b'C'))
            .count();
        100.0 * gc as f64 / self.seq.len().max(1) as f64
    }
}

/// Orders candidates by ascending start, longer spans first
pub fn sort_by_position(motifs: &mut [Motif]) {
    motifs.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| b.end.cmp(&a.end)));
}
