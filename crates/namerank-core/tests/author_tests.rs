use namerank_core::authors::{is_plausible_name, simplify, SimplifiedName};
use rstest::rstest;

mod common;
use common::fixture_scorer;

#[rstest]
#[case("John Smith", true)]
#[case("Mary Ann Jones", true)]
#[case("john smith", true)]
#[case("john123", false)]
#[case("user42 smith", false)]
#[case("john_smith", false)]
#[case("john@example", false)]
#[case("Dr John Smith", false)]
#[case("John Smith TV", false)]
#[case("John", false)]
#[case("J Smith", false)]
#[case("John S", false)]
fn plausibility_filter(#[case] name: &str, #[case] expected: bool) {
    assert_eq!(is_plausible_name(name), expected, "{:?}", name);
}

#[test]
fn simplifies_a_clean_two_part_name() {
    let scorer = fixture_scorer();
    assert_eq!(
        simplify("john smith", &scorer),
        Some(SimplifiedName {
            first: "John".to_string(),
            last: "Smith".to_string(),
        })
    );
}

#[test]
fn takes_first_and_last_of_longer_names() {
    let scorer = fixture_scorer();
    assert_eq!(
        simplify("JOHN MICHAEL SMITH", &scorer),
        Some(SimplifiedName {
            first: "John".to_string(),
            last: "Smith".to_string(),
        })
    );
}

#[test]
fn salvages_names_with_decorations() {
    let scorer = fixture_scorer();
    assert_eq!(
        simplify("John*Smith!!", &scorer),
        Some(SimplifiedName {
            first: "John".to_string(),
            last: "Smith".to_string(),
        })
    );
}

#[test]
fn rejects_names_unknown_to_both_tables() {
    let scorer = fixture_scorer();
    assert_eq!(simplify("Qwerty Uiop", &scorer), None);
}

#[test]
fn one_known_side_is_enough_to_pass_the_gate() {
    let scorer = fixture_scorer();
    assert_eq!(
        simplify("John Qzxv", &scorer),
        Some(SimplifiedName {
            first: "John".to_string(),
            last: "Qzxv".to_string(),
        })
    );
}

#[test]
fn trailing_initial_falls_back_to_the_previous_token() {
    let scorer = fixture_scorer();
    assert_eq!(
        simplify("John Smith B.", &scorer),
        Some(SimplifiedName {
            first: "John".to_string(),
            last: "Smith".to_string(),
        })
    );
}

#[test]
fn hopeless_strings_are_rejected_outright() {
    let scorer = fixture_scorer();
    assert_eq!(simplify("12345", &scorer), None);
    assert_eq!(simplify("", &scorer), None);
    assert_eq!(simplify("@@@", &scorer), None);
}
