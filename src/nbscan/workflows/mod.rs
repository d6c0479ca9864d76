mod analyze;

pub use analyze::{analyze as analyze_sequence, HotspotSource, Params};

use crate::nbscan::{hotspots::Hotspot, motif::Motif};

/// Everything one analysis run produces for a single sequence
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisResult {
    /// Candidates of every reported family after the scan mode is applied
    pub candidates: Vec<Motif>,
    /// Candidates that survived overlap resolution
    pub motifs: Vec<Motif>,
    pub hotspots: Vec<Hotspot>,
}
