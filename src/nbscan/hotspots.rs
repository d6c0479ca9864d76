use super::motif::Motif;
use crate::utils::ScanError;

pub const DEFAULT_WINDOW: usize = 100;
pub const DEFAULT_MIN_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HotspotParams {
    pub window: usize,
    pub min_count: usize,
}

impl Default for HotspotParams {
    fn default() -> Self {
        HotspotParams {
            window: DEFAULT_WINDOW,
            min_count: DEFAULT_MIN_COUNT,
        }
    }
}

impl HotspotParams {
    pub fn validate(&self, seq_len: usize) -> Result<(), ScanError> {
        if self.window == 0 {
            return Err(ScanError::InvalidConfiguration(
                "hotspot window must be positive".to_string(),
            ));
        }
        if self.window > seq_len {
            return Err(ScanError::InvalidConfiguration(format!(
                "hotspot window {} exceeds sequence length {}",
                self.window, seq_len
            )));
        }
        if self.min_count == 0 {
            return Err(ScanError::InvalidConfiguration(
                "hotspot minimum count must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Window `[start, end]` (1-based, inclusive) intersecting `motif_count` motifs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hotspot {
    pub start: usize,
    pub end: usize,
    pub motif_count: usize,
}

/// Reports every window of `params.window` bases that intersects at least
/// `params.min_count` motifs, in order of window start.
///
/// A motif `[s, e]` intersects the windows starting in
/// `[max(1, s - W + 1), min(e, N - W + 1)]`, so per-window counts come from a
/// single difference-array sweep instead of testing every window against
/// every motif.
pub fn find_hotspots(seq_len: usize, motifs: &[Motif], params: &HotspotParams) -> Vec<Hotspot> {
    let window = params.window;
    if window == 0 || window > seq_len {
        return Vec::new();
    }
    let last_start = seq_len - window + 1;

    let mut delta = vec![0i64; last_start + 2];
    for motif in motifs {
        let first = (motif.start + 1).saturating_sub(window).max(1);
        let last = motif.end.min(last_start);
        if first <= last {
            delta[first] += 1;
            delta[last + 1] -= 1;
        }
    }

    let mut hotspots = Vec::new();
    let mut count = 0i64;
    for start in 1..=last_start {
        count += delta[start];
        if count >= params.min_count as i64 {
            hotspots.push(Hotspot {
                start,
                end: start + window - 1,
                motif_count: count as usize,
            });
        }
    }
    hotspots
}
