use super::AnalysisResult;
use crate::nbscan::{
    families::{hybrid, Family, ScanMode},
    hotspots::{find_hotspots, HotspotParams},
    motif::{sort_by_position, Motif},
    resolve::{resolve, Resolution},
    sequence::Sequence,
};
use crate::utils::ScanError;
use itertools::Itertools;
use rayon::prelude::*;
use std::{
    collections::BTreeSet,
    str::FromStr,
    sync::atomic::{AtomicBool, Ordering},
    time::Instant,
};

/// Motif set the hotspot sweep counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotspotSource {
    Resolved,
    Candidates,
}

impl FromStr for HotspotSource {
    type Err = &'static str;
    fn from_str(source: &str) -> Result<Self, Self::Err> {
        match source {
            "resolved" => Ok(HotspotSource::Resolved),
            "candidates" => Ok(HotspotSource::Candidates),
            _ => Err("Invalid hotspot source"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Params {
    pub families: Vec<Family>,
    pub scan_mode: ScanMode,
    pub resolution: Resolution,
    pub hybrid_max_distance: usize,
    pub hotspots: Option<HotspotParams>,
    pub hotspot_source: HotspotSource,
    /// Sequences longer than this skip the arm-scanning families
    pub max_palindrome_len: Option<usize>,
}

impl Default for Params {
    fn default() -> Self {
        Params {
            families: Family::ALL.to_vec(),
            scan_mode: ScanMode::Overlapping,
            resolution: Resolution::All,
            hybrid_max_distance: hybrid::DEFAULT_MAX_DISTANCE,
            hotspots: Some(HotspotParams::default()),
            hotspot_source: HotspotSource::Resolved,
            max_palindrome_len: None,
        }
    }
}

impl Params {
    fn validate(&self, seq_len: usize) -> Result<(), ScanError> {
        if self.families.is_empty() {
            return Err(ScanError::InvalidConfiguration(
                "no motif family is enabled".to_string(),
            ));
        }
        if let Some(hotspots) = &self.hotspots {
            hotspots.validate(seq_len)?;
        }
        Ok(())
    }

    /// Families to report for a sequence of `seq_len` bases
    fn reported_families(&self, seq_len: usize) -> BTreeSet<Family> {
        let mut reported: BTreeSet<Family> = self.families.iter().copied().collect();
        if let Some(max_len) = self.max_palindrome_len {
            if seq_len > max_len {
                let skipped: Vec<Family> = reported
                    .iter()
                    .copied()
                    .filter(Family::is_expensive)
                    .collect();
                if !skipped.is_empty() {
                    log::warn!(
                        "Skipping {} on a {} bp sequence (limit {} bp)",
                        skipped.iter().map(Family::name).join(","),
                        seq_len,
                        max_len
                    );
                }
                reported.retain(|f| !f.is_expensive());
            }
        }
        reported
    }
}

fn check_cancelled(cancel: &AtomicBool) -> Result<(), ScanError> {
    if cancel.load(Ordering::Relaxed) {
        Err(ScanError::Cancelled)
    } else {
        Ok(())
    }
}

/// Runs every enabled family over `seq`, resolves overlaps and counts
/// hotspots.
///
/// An empty sequence yields an empty result before the configuration is
/// checked. `cancel` is polled before each family and before hybrid
/// detection; a raised flag discards all partial results.
pub fn analyze(
    seq: &Sequence,
    params: &Params,
    cancel: &AtomicBool,
) -> Result<AnalysisResult, ScanError> {
    if seq.is_empty() {
        return Ok(AnalysisResult::default());
    }
    params.validate(seq.len())?;

    let reported = params.reported_families(seq.len());
    let mut scanned: BTreeSet<Family> = reported.clone();
    if reported.contains(&Family::Hybrid) {
        scanned.extend(Family::Hybrid.dependencies());
    }
    scanned.remove(&Family::Hybrid);
    if params.max_palindrome_len.is_some_and(|max_len| seq.len() > max_len) {
        scanned.retain(|f| !f.is_expensive());
    }

    let scanned: Vec<Family> = scanned.into_iter().collect();
    let mut raw: Vec<(Family, Vec<Motif>)> = scanned
        .par_iter()
        .map(|family| {
            check_cancelled(cancel)?;
            let timer = Instant::now();
            let motifs = family.scan(seq);
            log::debug!(
                "{}: {} raw candidates in {:.2?}",
                family,
                motifs.len(),
                timer.elapsed()
            );
            Ok((*family, motifs))
        })
        .collect::<Result<_, ScanError>>()?;

    if reported.contains(&Family::Hybrid) {
        check_cancelled(cancel)?;
        let hybrids = hybrid::find_hybrids(seq, &raw, params.hybrid_max_distance);
        raw.push((Family::Hybrid, hybrids));
    }

    let mut candidates: Vec<Motif> = raw
        .into_iter()
        .filter(|(family, _)| reported.contains(family))
        .flat_map(|(_, motifs)| params.scan_mode.apply(motifs))
        .collect();
    sort_by_position(&mut candidates);

    let motifs = resolve(&candidates, params.resolution);
    log::debug!(
        "{} candidates, {} motifs after resolution",
        candidates.len(),
        motifs.len()
    );

    let hotspots = match &params.hotspots {
        Some(hotspot_params) => {
            let source = match params.hotspot_source {
                HotspotSource::Resolved => &motifs,
                HotspotSource::Candidates => &candidates,
            };
            find_hotspots(seq.len(), source, hotspot_params)
        }
        None => Vec::new(),
    };

    Ok(AnalysisResult {
        candidates,
        motifs,
        hotspots,
    })
}
