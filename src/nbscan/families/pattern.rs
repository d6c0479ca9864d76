use crate::nbscan::scoring::is_alternating_pair;
use regex::bytes::Regex;

/// Rule telling whether a match beginning one unit further left would cover
/// the same tract. Only starts where it does not are searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TractStart {
    /// First base of a homopolymer run
    Run,
    /// First copy of a unit of the given length
    Period(usize),
    /// First base of a stretch of alternating purine/pyrimidine pairs
    Alternating,
}

impl TractStart {
    fn extends_left(self, seq: &[u8], start: usize) -> bool {
        match self {
            TractStart::Run => start > 0 && seq[start - 1] == seq[start],
            TractStart::Period(period) => {
                start >= period
                    && start + period <= seq.len()
                    && seq[start - period..start] == seq[start..start + period]
            }
            TractStart::Alternating => start > 0 && is_alternating_pair(&seq[start - 1..=start]),
        }
    }
}

/// A compiled motif pattern evaluated anchored at the left end of each tract.
///
/// The `regex` engines run in time linear in the haystack, so nested
/// quantifiers cannot trigger catastrophic backtracking.
pub struct MotifPattern {
    regex: Regex,
    leading: &'static [u8],
    tract_start: TractStart,
    open_ended: bool,
}

impl MotifPattern {
    /// `leading` lists every base a match can begin with
    pub fn new(pattern: &str, leading: &'static [u8], tract_start: TractStart) -> Self {
        let anchored = format!("^(?:{})", pattern);
        let regex = Regex::new(&anchored)
            .unwrap_or_else(|e| panic!("Invalid motif pattern {}: {}", pattern, e));
        MotifPattern {
            regex,
            leading,
            tract_start,
            open_ended: false,
        }
    }

    /// Marks a pattern whose unit repeats without an upper bound. A start
    /// inside an earlier match would only find a suffix of it and is skipped.
    pub fn open_ended(mut self) -> Self {
        self.open_ended = true;
        self
    }

    /// End offset (exclusive) of the preferred match beginning at `start`
    pub fn match_at(&self, seq: &[u8], start: usize) -> Option<usize> {
        if !self.leading.contains(seq.get(start)?) {
            return None;
        }
        self.regex
            .find(&seq[start..])
            .filter(|m| !m.is_empty())
            .map(|m| start + m.end())
    }

    /// Matches anchored at left-maximal starts as 0-based half-open
    /// `(start, end)` ranges, sorted by start
    pub fn find_all(&self, seq: &[u8]) -> Vec<(usize, usize)> {
        let mut matches = Vec::new();
        let mut reach = 0;
        for start in 0..seq.len() {
            if self.tract_start.extends_left(seq, start) || (self.open_ended && start < reach) {
                continue;
            }
            if let Some(end) = self.match_at(seq, start) {
                reach = reach.max(end);
                matches.push((start, end));
            }
        }
        matches
    }
}
