use crate::utils::Result;

/// Closed interval `[start, end]` in 1-based sequence coordinates.
///
/// Scanners work on 0-based half-open offsets; `from_zero_based` and
/// `to_zero_based` are the only crossings between the two systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Interval {
    pub start: usize,
    pub end: usize,
}

#[allow(clippy::len_without_is_empty)]
impl Interval {
    pub fn new(start: usize, end: usize) -> Result<Self> {
        if start == 0 {
            return Err("Invalid interval: positions are 1-based".to_string());
        }
        if start > end {
            return Err(format!("Invalid interval: start {} > end {}", start, end));
        }

        Ok(Self { start, end })
    }

    /// Converts the 0-based half-open range `[start, end)`
    pub fn from_zero_based(start: usize, end: usize) -> Self {
        debug_assert!(start < end, "empty range {}..{}", start, end);
        Self {
            start: start + 1,
            end,
        }
    }

    /// Returns the 0-based half-open range covering the same bases
    pub fn to_zero_based(&self) -> (usize, usize) {
        (self.start - 1, self.end)
    }

    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    pub fn intersect_position(&self, position: usize) -> bool {
        position >= self.start && position <= self.end
    }

    pub fn intersects(&self, other: &Interval) -> bool {
        self.start <= other.end && self.end >= other.start
    }

    /// Number of bases strictly between two intervals; 0 when they touch or overlap
    pub fn gap(&self, other: &Interval) -> usize {
        if self.intersects(other) {
            0
        } else if self.end < other.start {
            other.start - self.end - 1
        } else {
            self.start - other.end - 1
        }
    }

    /// Smallest interval covering both
    pub fn hull(&self, other: &Interval) -> Interval {
        Interval {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}
