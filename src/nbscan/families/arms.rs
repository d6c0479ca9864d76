use crate::nbscan::sequence::{reverse, reverse_complement};

/// How the right arm relates to the left arm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symmetry {
    /// Right arm is the left arm read backwards
    Mirror,
    /// Right arm is the reverse complement of the left arm
    Inverted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArmComposition {
    Any,
    /// Arms drawn entirely from {A,G} or entirely from {C,T}
    HomoPurinePyrimidine,
}

#[derive(Debug, Clone, Copy)]
pub struct ArmParams {
    pub min_arm: usize,
    pub max_arm: usize,
    pub max_spacer: usize,
    pub symmetry: Symmetry,
    pub composition: ArmComposition,
}

/// Arm pair in 0-based half-open coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArmMatch {
    pub start: usize,
    pub end: usize,
    pub arm: usize,
    pub spacer: usize,
}

fn is_purine(base: u8) -> bool {
    matches!(base, b'A' | b'G')
}

/// Finds arm pairs framing a spacer of `0..=max_spacer` bases.
///
/// For every spacer length and every inner left-arm base the arms are grown
/// outwards by comparing the right-arm slice against the mirror image of the
/// sequence (reversed or reverse-complemented once up front), so each pair is
/// checked as a slice comparison. Pairs whose arms could also grow inwards
/// are left to the shorter spacer, which leaves one report per structure,
/// except when capping the shorter spacer's arms at `max_arm` gives it a
/// different span.
pub fn find_arm_pairs(seq: &[u8], params: &ArmParams) -> Vec<ArmMatch> {
    let n = seq.len();
    let image = match params.symmetry {
        Symmetry::Mirror => reverse(seq),
        Symmetry::Inverted => reverse_complement(seq),
    };
    // image[n - 1 - i] is the partner a base at offset i must meet
    let partner = |i: usize| image[n - 1 - i];
    let same_composition = |a: u8, b: u8| match params.composition {
        ArmComposition::Any => true,
        ArmComposition::HomoPurinePyrimidine => is_purine(a) == is_purine(b),
    };

    let mut matches = Vec::new();
    for spacer in 0..=params.max_spacer {
        for inner in 0..n {
            let right = inner + spacer + 1;
            if right >= n {
                break;
            }
            let anchor = seq[right];
            if anchor != partner(inner) {
                continue;
            }
            let arm = seq[right..]
                .iter()
                .zip(&image[n - 1 - inner..])
                .take(params.max_arm)
                .take_while(|(observed, expected)| {
                    observed == expected && same_composition(anchor, **observed)
                })
                .count();
            if arm < params.min_arm {
                continue;
            }
            // The inward arrangement holds this one plus a base per arm,
            // unless its arms were cut at `max_arm`
            if spacer >= 2 && arm < params.max_arm {
                let (next_left, next_right) = (inner + 1, right - 1);
                if seq[next_right] == partner(next_left)
                    && same_composition(anchor, seq[next_right])
                {
                    continue;
                }
            }
            let start = inner + 1 - arm;
            let end = right + arm;
            debug_assert_eq!(&seq[right..end], &image[n - 1 - inner..n - 1 - inner + arm]);
            matches.push(ArmMatch {
                start,
                end,
                arm,
                spacer,
            });
        }
    }

    // Distinct centres can frame the same span; keep the longest arms
    matches.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then_with(|| b.end.cmp(&a.end))
            .then_with(|| b.arm.cmp(&a.arm))
    });
    matches.dedup_by(|next, kept| next.start == kept.start && next.end == kept.end);
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(symmetry: Symmetry, min_arm: usize, max_spacer: usize) -> ArmParams {
        ArmParams {
            min_arm,
            max_arm: 100,
            max_spacer,
            symmetry,
            composition: ArmComposition::Any,
        }
    }

    #[test]
    fn inverted_repeat_with_loop() {
        // ACGTCA | TTTT | TGACGT
        let seq = b"GGACGTCATTTTTGACGTGG";
        let found = find_arm_pairs(seq, &params(Symmetry::Inverted, 6, 10));
        assert!(found.contains(&ArmMatch {
            start: 2,
            end: 18,
            arm: 6,
            spacer: 4
        }));
        for m in &found {
            let left = &seq[m.start..m.start + m.arm];
            let right = &seq[m.end - m.arm..m.end];
            assert_eq!(reverse_complement(left), right.to_vec());
        }
    }

    #[test]
    fn mirror_repeat_without_spacer() {
        let seq = b"TTACGGTCAACTGGCATT";
        let found = find_arm_pairs(seq, &params(Symmetry::Mirror, 7, 0));
        assert_eq!(
            found,
            vec![ArmMatch {
                start: 0,
                end: 18,
                arm: 9,
                spacer: 0
            }]
        );
    }

    #[test]
    fn inward_extension_reported_once() {
        // With spacer 2 the arms could extend inward, so only spacer 0 remains
        let seq = b"ACGTTGCA";
        let found = find_arm_pairs(seq, &params(Symmetry::Mirror, 4, 4));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].spacer, 0);
        assert_eq!((found[0].start, found[0].end), (0, 8));
    }

    #[test]
    fn capped_inward_arms_keep_the_wider_spacer() {
        let seq = [b'A'; 12];
        let mut p = params(Symmetry::Mirror, 3, 2);
        assert!(find_arm_pairs(&seq, &p).iter().all(|m| m.spacer < 2));

        p.max_arm = 3;
        let found = find_arm_pairs(&seq, &p);
        let wide: Vec<_> = found
            .iter()
            .filter(|m| m.spacer == 2)
            .map(|m| (m.start, m.end, m.arm))
            .collect();
        assert_eq!(wide, vec![(0, 8, 3), (1, 9, 3), (2, 10, 3), (3, 11, 3), (4, 12, 3)]);
    }

    #[test]
    fn homopurine_arms_stop_at_composition_change() {
        // The flanking C bases mirror each other but are pyrimidines
        let seq = b"CAGGAGAAGGATTCAGGAAGAGGAC";
        let mut p = params(Symmetry::Mirror, 10, 8);
        assert_eq!(find_arm_pairs(seq, &p)[0].arm, 11);

        p.composition = ArmComposition::HomoPurinePyrimidine;
        let found = find_arm_pairs(seq, &p);
        assert_eq!(
            found,
            vec![ArmMatch {
                start: 1,
                end: 24,
                arm: 10,
                spacer: 3
            }]
        );
    }

    #[test]
    fn arms_shorter_than_minimum_are_dropped() {
        assert!(find_arm_pairs(b"ACGTACGT", &params(Symmetry::Inverted, 6, 4)).is_empty());
        assert!(find_arm_pairs(b"", &params(Symmetry::Inverted, 1, 4)).is_empty());
    }
}
