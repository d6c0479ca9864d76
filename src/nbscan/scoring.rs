//! Scores computed over a motif's sequence slice.

use crate::utils::round_to;

const GC_SWAP: [u8; 256] = gc_swap_table();

const fn gc_swap_table() -> [u8; 256] {
    let mut table = [0_u8; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = i as u8;
        i += 1;
    }
    table[b'G' as usize] = b'C';
    table[b'C' as usize] = b'G';
    table
}

/// Run-weighted composition score (G4Hunter).
///
/// Every base of a maximal G run contributes `min(run, 4)`, every base of a
/// maximal C run `-min(run, 4)`, anything else 0; the mean is rounded to two
/// decimals.
pub fn g4hunter(seq: &[u8]) -> f64 {
    if seq.is_empty() {
        return 0.0;
    }
    let total: i64 = seq
        .chunk_by(|a, b| a == b)
        .map(|run| {
            let len = run.len() as i64;
            let weight = len.min(4);
            match run[0] {
                b'G' => weight * len,
                b'C' => -weight * len,
                _ => 0,
            }
        })
        .sum();
    round_to(total as f64 / seq.len() as f64, 2)
}

/// G4Hunter for C-rich motifs: G and C are exchanged on a copy in one pass
/// through a lookup table, then the score is negated
pub fn imotif_score(seq: &[u8]) -> f64 {
    let swapped = swap_gc(seq);
    round_to(-g4hunter(&swapped), 2)
}

pub fn swap_gc(seq: &[u8]) -> Vec<u8> {
    seq.iter().map(|b| GC_SWAP[*b as usize]).collect()
}

/// Three-tract G-rich motifs are down-weighted relative to full quadruplexes
pub fn g4hunter_scaled(seq: &[u8]) -> f64 {
    round_to(g4hunter(seq) * 0.75, 2)
}

pub fn is_alternating_pair(pair: &[u8]) -> bool {
    matches!(
        pair,
        b"GC" | b"CG" | b"GT" | b"TG" | b"AC" | b"CA"
    )
}

/// Alternation density (Z-Seeker): number of overlapping dinucleotide
/// windows drawn from the six purine/pyrimidine alternations
pub fn zseeker(seq: &[u8]) -> f64 {
    seq.windows(2).filter(|w| is_alternating_pair(w)).count() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pure_g_run_scores_capped_run_length() {
        for len in 1..=12 {
            let run = vec![b'G'; len];
            assert_eq!(g4hunter(&run), len.min(4) as f64, "run length {}", len);
        }
    }

    #[test]
    fn pure_c_run_imotif_score_is_negative_capped_length() {
        for len in 1..=12 {
            let run = vec![b'C'; len];
            assert_eq!(imotif_score(&run), -(len.min(4) as f64), "run length {}", len);
        }
    }

    #[test]
    fn g4hunter_canonical_quadruplex() {
        // 12 G bases weighted 3, 9 loop bases weighted 0
        assert_eq!(g4hunter(b"GGGTTAGGGTTAGGGTTAGGG"), 1.71);
    }

    #[test]
    fn g4hunter_mixed_runs() {
        // GG -> 2,2 ; CCC -> -3,-3,-3 ; A -> 0
        assert_eq!(g4hunter(b"GGCCCA"), round_to((4.0 - 9.0) / 6.0, 2));
        assert_eq!(g4hunter(b""), 0.0);
    }

    #[test]
    fn gc_swap_is_a_bijection() {
        assert_eq!(swap_gc(b"GCGATC"), b"CGCATG".to_vec());
        assert_eq!(swap_gc(&swap_gc(b"ACGTGGCC")), b"ACGTGGCC".to_vec());
    }

    #[test]
    fn imotif_score_with_mixed_content() {
        // Swapped: GGGAGGG -> 3*6 / 7, negated
        assert_eq!(imotif_score(b"CCCTCCC"), -2.57);
    }

    #[test]
    fn scaled_score() {
        assert_eq!(g4hunter_scaled(b"GGGG"), 3.0);
        assert_eq!(g4hunter_scaled(b"GGGAGGGAGGG"), round_to(round_to(27.0 / 11.0, 2) * 0.75, 2));
    }

    #[test]
    fn zseeker_counts_overlapping_windows() {
        assert_eq!(zseeker(b"CGCGCG"), 5.0);
        assert_eq!(zseeker(b"CACACA"), 5.0);
        assert_eq!(zseeker(b"AATT"), 0.0);
        assert_eq!(zseeker(b"GCAT"), 2.0);
    }
}
