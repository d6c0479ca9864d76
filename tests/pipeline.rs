use nbscan::nbscan::{
    families::{Family, ScanMode},
    hotspots::HotspotParams,
    motif::{Motif, MotifClass, Score, ScoreMethod},
    resolve::{resolve, resolve_overlaps, Resolution},
    sequence::Sequence,
    workflows::{analyze_sequence, HotspotSource, Params},
};
use nbscan::utils::ScanError;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::sync::atomic::AtomicBool;

const BLOCKS: [&str; 8] = [
    "GGGTTAGGGTTAGGGTTAGGG",
    "CCCTAACCCTAACCCTAACCC",
    "CGCGCGCGCGCGCG",
    "AAAAAAA",
    "GAAGAAGAAGAAGAAGAA",
    "CACACACACA",
    "GGACGTCATTTTTGACGTCC",
    "AGGAGAAGGATTCAGGAAGAGGA",
];

/// Random sequence salted with motif-forming blocks
fn random_sequence(rng: &mut StdRng, len: usize) -> Sequence {
    let mut bases = String::with_capacity(len + 32);
    while bases.len() < len {
        if rng.random_bool(0.15) {
            bases.push_str(BLOCKS[rng.random_range(0..BLOCKS.len())]);
        } else {
            bases.push(b"ACGT"[rng.random_range(0..4)] as char);
        }
    }
    Sequence::new(bases).unwrap()
}

fn no_cancel() -> AtomicBool {
    AtomicBool::new(false)
}

#[test]
fn telomeric_repeat_is_a_canonical_quadruplex() {
    let seq = Sequence::new("GGGTTAGGGTTAGGGTTAGGG").unwrap();
    let canonical: Vec<Motif> = Family::Quadruplex
        .scan(&seq)
        .into_iter()
        .filter(|m| m.subtype == "G-Quadruplex")
        .collect();
    assert_eq!(canonical.len(), 1);
    assert_eq!((canonical[0].start, canonical[0].end), (1, 21));
    assert_eq!(canonical[0].score, Score::Value(1.71));
    assert_eq!(canonical[0].score_method, ScoreMethod::G4Hunter);
}

#[test]
fn adjacent_runs_give_two_bend_tracts() {
    let seq = Sequence::new("AAAAAATTTTTTT").unwrap();
    let bends = Family::Bend.scan(&seq);
    let spans: Vec<_> = bends.iter().map(|m| (m.start, m.end, m.len())).collect();
    assert_eq!(spans, vec![(1, 6, 6), (7, 13, 7)]);
    assert!(bends.iter().all(|m| m.class == MotifClass::Bend));
}

#[test]
fn resolver_prefers_earlier_start() {
    let seq = Sequence::new("A".repeat(30)).unwrap();
    let motif = |start: usize, end: usize, score: f64| {
        Motif::new(
            MotifClass::Repeat,
            "test",
            &seq,
            start - 1,
            end,
            Score::Value(score),
            ScoreMethod::RepeatCount,
        )
    };
    let candidates = vec![motif(1, 10, 2.0), motif(20, 30, 2.0), motif(5, 25, 10.0)];
    let resolved = resolve_overlaps(&candidates);
    let spans: Vec<_> = resolved.iter().map(|m| (m.start, m.end)).collect();
    assert_eq!(spans, vec![(1, 10), (20, 30)]);
}

#[test]
fn invalid_symbol_is_reported_with_position() {
    assert_eq!(
        Sequence::new("ACGTNACGT"),
        Err(ScanError::InvalidAlphabet {
            position: 5,
            symbol: 'N'
        })
    );
}

#[test]
fn random_sequences_hold_pipeline_properties() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..20 {
        let len = rng.random_range(120..600);
        let seq = random_sequence(&mut rng, len);
        let params = Params {
            hotspots: Some(HotspotParams {
                window: 50,
                min_count: 2,
            }),
            ..Params::default()
        };
        let result = analyze_sequence(&seq, &params, &no_cancel()).unwrap();

        for motif in result.candidates.iter().chain(result.motifs.iter()) {
            assert!(1 <= motif.start && motif.start <= motif.end && motif.end <= seq.len());
            assert_eq!(motif.seq, seq.slice(motif.start - 1, motif.end));
        }
        for pair in result.motifs.windows(2) {
            assert!(pair[0].end < pair[1].start, "{:?}", pair);
        }
        assert_eq!(resolve_overlaps(&result.motifs), result.motifs);
        assert!(result
            .hotspots
            .iter()
            .all(|h| h.end - h.start + 1 == 50 && h.motif_count >= 2));

        let again = analyze_sequence(&seq, &params, &no_cancel()).unwrap();
        assert_eq!(result, again);
    }
}

#[test]
fn within_class_resolution_is_overlap_free_per_class() {
    let mut rng = StdRng::seed_from_u64(99);
    let seq = random_sequence(&mut rng, 800);
    let params = Params {
        resolution: Resolution::WithinClass,
        hotspots: None,
        ..Params::default()
    };
    let result = analyze_sequence(&seq, &params, &no_cancel()).unwrap();
    for class in [
        MotifClass::Quadruplex,
        MotifClass::Repeat,
        MotifClass::Bend,
        MotifClass::ZDna,
    ] {
        let of_class: Vec<&Motif> = result.motifs.iter().filter(|m| m.class == class).collect();
        for pair in of_class.windows(2) {
            assert!(pair[0].end < pair[1].start);
        }
    }
    assert_eq!(resolve(&result.motifs, Resolution::WithinClass), result.motifs);
}

#[test]
fn non_overlapping_scan_within_a_family() {
    let mut rng = StdRng::seed_from_u64(5);
    let seq = random_sequence(&mut rng, 1000);
    let params = Params {
        families: vec![Family::Str],
        scan_mode: ScanMode::NonOverlapping,
        resolution: Resolution::None,
        hotspots: None,
        ..Params::default()
    };
    let result = analyze_sequence(&seq, &params, &no_cancel()).unwrap();
    assert_eq!(result.candidates, result.motifs);
    for pair in result.candidates.windows(2) {
        assert!(pair[0].end < pair[1].start);
    }
}

#[test]
fn candidate_hotspots_count_at_least_resolved() {
    let mut rng = StdRng::seed_from_u64(17);
    let seq = random_sequence(&mut rng, 500);
    let hotspots = Some(HotspotParams {
        window: 60,
        min_count: 1,
    });
    let resolved = analyze_sequence(
        &seq,
        &Params {
            hotspots,
            ..Params::default()
        },
        &no_cancel(),
    )
    .unwrap();
    let raw = analyze_sequence(
        &seq,
        &Params {
            hotspots,
            hotspot_source: HotspotSource::Candidates,
            ..Params::default()
        },
        &no_cancel(),
    )
    .unwrap();
    assert!(raw.hotspots.len() >= resolved.hotspots.len());
    for spot in &resolved.hotspots {
        let wider = raw.hotspots.iter().find(|h| h.start == spot.start).unwrap();
        assert!(wider.motif_count >= spot.motif_count);
    }
}
