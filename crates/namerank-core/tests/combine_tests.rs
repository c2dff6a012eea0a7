use namerank_core::scorer::combine::combine_scores;
use namerank_core::ScoringWeights;

mod common;
use common::fixture_scorer;

fn w() -> ScoringWeights {
    ScoringWeights::default()
}

#[test]
fn two_common_scores_damp_quadratically() {
    // 30 * 30 / 20 = 45, not the ~30 a blend would give.
    assert_eq!(combine_scores(30.0, 30.0, &w()), 45.0);
}

#[test]
fn damping_branch_requires_both_below_threshold() {
    // First side exactly at the threshold takes the linear blend.
    assert_eq!(combine_scores(40.0, 30.0, &w()), 36.0);
    // Just under it, the product path applies (39.9 * 30 / 20 = 59.85).
    let damped = combine_scores(39.9, 30.0, &w());
    assert!(damped > 59.7 && damped < 60.0);
}

#[test]
fn linear_blend_favors_the_first_name() {
    // 80*0.6 + 20*0.4 = 56, then the >50 multiplier lifts it.
    assert_eq!(combine_scores(80.0, 20.0, &w()), 76.3);
    // Mirrored inputs weight the rare side less.
    assert!(combine_scores(20.0, 80.0, &w()) < combine_scores(80.0, 20.0, &w()));
}

#[test]
fn rare_pair_bonus_is_strictly_above_threshold() {
    let at_threshold = combine_scores(70.0, 71.0, &w());
    let above_threshold = combine_scores(70.1, 71.0, &w());

    assert_eq!(at_threshold, 96.9);
    assert!(above_threshold > at_threshold);
    assert!(above_threshold <= 100.0);
}

#[test]
fn multiplier_never_lowers_the_combined_score() {
    // Pre-rescale value is 40; exp multiplier can only push it up.
    assert_eq!(combine_scores(60.0, 10.0, &w()), 45.3);
}

#[test]
fn ceiling_is_never_exceeded() {
    assert_eq!(combine_scores(100.0, 100.0, &w()), 100.0);
    assert_eq!(combine_scores(90.0, 90.0, &w()), 100.0);
}

#[test]
fn very_common_pair_scores_below_either_component() {
    let scorer = fixture_scorer();
    let first = scorer.score_first_name("John");
    let last = scorer.score_last_name("Smith");
    let full = scorer.score_full_name("John", "Smith");

    // 8.1 x 8.2 / 20 lands near 3 — the pair is *less* unique than
    // either name alone.
    assert_eq!(full, 3.3);
    assert!(full < first);
    assert!(full < last);
    assert!(full < 10.0);
}

#[test]
fn one_sided_input_bypasses_the_combiner() {
    let scorer = fixture_scorer();
    assert_eq!(
        scorer.score_full_name("John", ""),
        scorer.score_first_name("John")
    );
    assert_eq!(
        scorer.score_full_name("", "Smith"),
        scorer.score_last_name("Smith")
    );
    assert_eq!(scorer.score_full_name("", ""), 0.0);
}
