use std::str::FromStr;

use lingodesk::domain::Language;

#[test]
fn given_fixed_sets_when_listed_then_counts_match() {
    assert_eq!(Language::source_languages().len(), 12);
    assert_eq!(Language::target_languages().len(), 14);
}

#[test]
fn given_target_set_when_compared_then_it_is_a_superset_of_source_set() {
    for source in Language::source_languages() {
        assert!(Language::target_languages().contains(source));
    }
}

#[test]
fn given_target_only_languages_when_checked_then_they_are_not_valid_sources() {
    assert!(!Language::Arabic.is_valid_source());
    assert!(!Language::Turkish.is_valid_source());
    assert!(Language::English.is_valid_source());
    assert!(Language::Korean.is_valid_source());
}

#[test]
fn given_display_names_when_parsing_then_they_round_trip() {
    for language in Language::target_languages() {
        assert_eq!(
            Language::from_str(language.as_str()).unwrap(),
            *language
        );
    }
}

#[test]
fn given_unknown_language_when_parsing_then_it_fails() {
    assert!(Language::from_str("Klingon").is_err());
    assert!(Language::from_str("english").is_err());
    assert!(Language::from_str("").is_err());
}
