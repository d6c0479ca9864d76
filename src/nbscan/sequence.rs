use crate::utils::ScanError;

/// Validated nucleotide sequence shared read-only by every matcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    bases: String,
}

impl Sequence {
    pub fn new(bases: impl Into<String>) -> Result<Self, ScanError> {
        let bases = bases.into();
        if let Some((index, symbol)) = bases
            .chars()
            .enumerate()
            .find(|(_, c)| !matches!(c, 'A' | 'C' | 'G' | 'T'))
        {
            return Err(ScanError::InvalidAlphabet {
                position: index + 1,
                symbol,
            });
        }
        Ok(Self { bases })
    }

    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.bases.as_bytes()
    }

    pub fn as_str(&self) -> &str {
        &self.bases
    }

    /// Bases in the 0-based half-open range `[start, end)`
    pub fn slice(&self, start: usize, end: usize) -> &str {
        &self.bases[start..end]
    }
}

pub fn complement(base: u8) -> u8 {
    match base {
        b'A' => b'T',
        b'T' => b'A',
        b'C' => b'G',
        b'G' => b'C',
        other => other,
    }
}

pub fn reverse(seq: &[u8]) -> Vec<u8> {
    seq.iter().rev().copied().collect()
}

pub fn reverse_complement(seq: &[u8]) -> Vec<u8> {
    seq.iter().rev().map(|b| complement(*b)).collect()
}
