pub mod arms;
pub mod bend;
pub mod direct_repeat;
pub mod hybrid;
pub mod palindrome;
pub mod pattern;
pub mod quadruplex;
pub mod tandem;
pub mod triplex;
pub mod zdna;

use crate::nbscan::motif::{sort_by_position, Motif};
use crate::nbscan::sequence::Sequence;
use itertools::Itertools;
use std::{fmt, str::FromStr};

/// One independent matcher over the sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Family {
    Quadruplex,
    IMotif,
    ZDna,
    Cruciform,
    Mirror,
    Triplex,
    Direct,
    Str,
    Bend,
    Hybrid,
}

impl Family {
    pub const ALL: [Family; 10] = [
        Family::Quadruplex,
        Family::IMotif,
        Family::ZDna,
        Family::Cruciform,
        Family::Mirror,
        Family::Triplex,
        Family::Direct,
        Family::Str,
        Family::Bend,
        Family::Hybrid,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Family::Quadruplex => "quadruplex",
            Family::IMotif => "imotif",
            Family::ZDna => "zdna",
            Family::Cruciform => "cruciform",
            Family::Mirror => "mirror",
            Family::Triplex => "triplex",
            Family::Direct => "direct",
            Family::Str => "str",
            Family::Bend => "bend",
            Family::Hybrid => "hybrid",
        }
    }

    /// Arm scans grow with arm length times spacer range
    pub fn is_expensive(&self) -> bool {
        matches!(self, Family::Cruciform | Family::Mirror)
    }

    /// Families whose raw candidates this family is derived from
    pub fn dependencies(&self) -> Vec<Family> {
        match self {
            Family::Hybrid => hybrid::RULES
                .iter()
                .flat_map(|rule| [rule.left, rule.right])
                .sorted()
                .dedup()
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Overlapping candidate set of a sequence-level matcher. Hybrids are
    /// derived from other families and come back empty here.
    pub fn scan(&self, seq: &Sequence) -> Vec<Motif> {
        match self {
            Family::Quadruplex => quadruplex::find_quadruplexes(seq),
            Family::IMotif => quadruplex::find_imotifs(seq),
            Family::ZDna => zdna::find_zdna(seq),
            Family::Cruciform => palindrome::find_cruciforms(seq),
            Family::Mirror => palindrome::find_mirror_repeats(seq),
            Family::Triplex => triplex::find_triplexes(seq),
            Family::Direct => direct_repeat::find_direct_repeats(seq),
            Family::Str => tandem::find_tandem_repeats(seq),
            Family::Bend => bend::find_bends(seq),
            Family::Hybrid => Vec::new(),
        }
    }
}

impl FromStr for Family {
    type Err = String;
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Family::ALL
            .iter()
            .find(|f| f.name() == name)
            .copied()
            .ok_or_else(|| format!("Invalid motif family: {}", name))
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    Overlapping,
    NonOverlapping,
}

impl FromStr for ScanMode {
    type Err = &'static str;
    fn from_str(mode: &str) -> Result<Self, Self::Err> {
        match mode {
            "overlapping" => Ok(ScanMode::Overlapping),
            "non-overlapping" => Ok(ScanMode::NonOverlapping),
            _ => Err("Invalid scan mode"),
        }
    }
}

impl ScanMode {
    pub fn apply(&self, motifs: Vec<Motif>) -> Vec<Motif> {
        match self {
            ScanMode::Overlapping => motifs,
            ScanMode::NonOverlapping => select_non_overlapping(motifs),
        }
    }
}

/// Left-to-right pass that resumes after each accepted candidate, preferring
/// the longer span among candidates sharing a start
pub fn select_non_overlapping(mut motifs: Vec<Motif>) -> Vec<Motif> {
    sort_by_position(&mut motifs);
    let mut last_end = 0;
    motifs.retain(|motif| {
        if motif.start > last_end {
            last_end = motif.end;
            true
        } else {
            false
        }
    });
    motifs
}

/// `runs[i]` is the length of the longest prefix of `seq[i..]` equal to the
/// prefix of `seq[i + shift..]`
pub(crate) fn shift_match_runs(seq: &[u8], shift: usize) -> Vec<usize> {
    let n = seq.len();
    let mut runs = vec![0; n + 1];
    for i in (0..n.saturating_sub(shift)).rev() {
        if seq[i] == seq[i + shift] {
            runs[i] = runs[i + 1] + 1;
        }
    }
    runs.truncate(n);
    runs
}
