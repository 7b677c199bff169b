use manga_manager_catalog::search::{is_acceptable_filter, parse_search};
use manga_manager_catalog::SortField;

#[test]
fn single_pair() {
    let terms = parse_search("title:Al");
    assert_eq!(terms.len(), 1);
    assert_eq!(terms.get(SortField::Title), Some("Al"));
}

#[test]
fn multiple_pairs_keep_order() {
    let terms = parse_search("author: bob; title: one");
    let pairs: Vec<_> = terms.iter().collect();
    assert_eq!(
        pairs,
        vec![(SortField::Author, "bob"), (SortField::Title, "one")]
    );
}

#[test]
fn keys_are_case_insensitive_values_are_not() {
    let terms = parse_search("TITLE: Naruto");
    assert_eq!(terms.get(SortField::Title), Some("Naruto"));
}

#[test]
fn value_keeps_inner_spaces() {
    let terms = parse_search("title: One Piece");
    assert_eq!(terms.get(SortField::Title), Some("One Piece"));
}

#[test]
fn unknown_keys_are_dropped() {
    let terms = parse_search("publisher: shueisha; author: Oda");
    assert_eq!(terms.len(), 1);
    assert_eq!(terms.get(SortField::Author), Some("Oda"));
}

#[test]
fn empty_values_are_dropped() {
    let terms = parse_search("title: ; tome: 3");
    assert_eq!(terms.len(), 1);
    assert_eq!(terms.get(SortField::Tome), Some("3"));
}

#[test]
fn blank_segments_are_ignored() {
    let terms = parse_search(";; type: shonen ;");
    assert_eq!(terms.get(SortField::Type), Some("shonen"));
}

#[test]
fn repeated_key_takes_last_value_first_position() {
    let terms = parse_search("title: a; author: b; title: c");
    let pairs: Vec<_> = terms.iter().collect();
    assert_eq!(
        pairs,
        vec![(SortField::Title, "c"), (SortField::Author, "b")]
    );
}

#[test]
fn segment_without_colon_is_unparseable() {
    assert!(parse_search("naruto").is_empty());
    assert!(parse_search("title: a; oops").is_empty());
}

#[test]
fn empty_input() {
    assert!(parse_search("").is_empty());
}

#[test]
fn acceptable_filter_characters() {
    assert!(is_acceptable_filter("title: one; author: bob"));
    assert!(is_acceptable_filter("tome:12"));
    assert!(is_acceptable_filter("title:Éclair_2"));
}

#[test]
fn rejected_filter_characters() {
    assert!(!is_acceptable_filter(""));
    assert!(!is_acceptable_filter("title: o'neil"));
    assert!(!is_acceptable_filter("title: a%"));
    assert!(!is_acceptable_filter("title: a-b"));
}

#[test]
fn unicode_word_characters() {
    assert!(is_acceptable_filter("title: Émile"));
    assert!(is_acceptable_filter("author: 尾田"));
    assert!(is_acceptable_filter("tome: ²"));

    // Decomposed accent, no-break space, tab.
    assert!(!is_acceptable_filter("title: e\u{301}mile"));
    assert!(!is_acceptable_filter("title:\u{a0}one"));
    assert!(!is_acceptable_filter("title:\tone"));
}
