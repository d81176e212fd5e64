use rand::{rngs::StdRng, Rng, SeedableRng};

use typemaster::generator::SentenceGenerator;
use typemaster::{compute_diff, count_errors, score, words_per_minute, DiffSegment, Difficulty};

fn random_text(rng: &mut StdRng, len: usize) -> String {
    const ALPHABET: &[char] = &['a', 'b', 'c', ' ', '.', 'é'];
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())])
        .collect()
}

#[test]
fn error_count_matches_positional_formula() {
    let mut rng = StdRng::seed_from_u64(123);
    for _ in 0..500 {
        let a_len = rng.gen_range(0..12);
        let b_len = rng.gen_range(0..12);
        let a = random_text(&mut rng, a_len);
        let b = random_text(&mut rng, b_len);

        let a_chars: Vec<char> = a.chars().collect();
        let b_chars: Vec<char> = b.chars().collect();
        let shared = a_chars.len().min(b_chars.len());
        let mismatches = (0..shared).filter(|&k| a_chars[k] != b_chars[k]).count();
        let expected = mismatches + a_chars.len().abs_diff(b_chars.len());

        assert_eq!(count_errors(&a, &b), expected, "{a:?} vs {b:?}");
        assert_eq!(count_errors(&a, &a), 0);
    }
}

#[test]
fn diff_always_covers_both_inputs() {
    let mut rng = StdRng::seed_from_u64(321);
    for _ in 0..500 {
        let a_len = rng.gen_range(0..15);
        let b_len = rng.gen_range(0..15);
        let a = random_text(&mut rng, a_len);
        let b = random_text(&mut rng, b_len);

        let segments = compute_diff(&a, &b);
        let longest = a.chars().count().max(b.chars().count());
        assert!(segments.len() >= longest, "{a:?} vs {b:?}");

        // every typed char shows up, in order
        let typed_back: String = segments
            .iter()
            .filter_map(|s| match s {
                DiffSegment::Matched(c) | DiffSegment::Mismatched(c) => Some(*c),
                DiffSegment::Missing => None,
            })
            .collect();
        assert_eq!(typed_back, b);

        if a == b {
            assert!(segments.iter().all(|s| !s.is_error()));
        }
    }
}

#[test]
fn flagged_segments_agree_with_error_count() {
    let mut rng = StdRng::seed_from_u64(77);
    for _ in 0..500 {
        let a_len = rng.gen_range(0..12);
        let b_len = rng.gen_range(0..12);
        let a = random_text(&mut rng, a_len);
        let b = random_text(&mut rng, b_len);

        let flagged = compute_diff(&a, &b).iter().filter(|s| s.is_error()).count();
        assert_eq!(flagged, count_errors(&a, &b), "{a:?} vs {b:?}");
    }
}

#[test]
fn timers_never_divide_by_zero() {
    assert_eq!(words_per_minute("some words here", 0.0), 0.0);
    assert_eq!(words_per_minute("some words here", -3.0), 0.0);
    for difficulty in Difficulty::ALL {
        assert_eq!(score(difficulty, 0, 0.0), difficulty.base_score());
        assert_eq!(score(difficulty, 1, -1.0), difficulty.base_score() - 5);
    }
    assert_eq!(score(Difficulty::Easy, 0, 50.0), 110);
}

#[test]
fn generated_sentences_hold_their_shape() {
    let generator = SentenceGenerator::default();
    let mut rng = StdRng::seed_from_u64(1000);
    for _ in 0..1000 {
        let sentence = generator.generate(&mut rng);
        assert!(sentence.ends_with('.'));
        assert!(sentence.split_whitespace().filter(|t| !t.is_empty()).count() >= 3);
    }
}
