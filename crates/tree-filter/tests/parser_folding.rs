//! Selector text always parses; these cases pin down how odd input folds.

use rstest::rstest;
use tree_filter::{Selector, TreeFilter, map};

fn leaf(attrs: &[&str]) -> Selector {
    attrs.iter().fold(Selector::new(), |s, attr| s.with(*attr, None))
}

#[rstest]
#[case("name,environments", leaf(&["name", "environments"]))]
#[case("environments[id,last_deploy]", Selector::new().with("environments", Some(leaf(&["id", "last_deploy"]))))]
#[case("environments[*]", Selector::new().with("environments", Some(leaf(&["*"]))))]
#[case("a[b[c],e]", Selector::new().with("a", Some(Selector::new().with("b", Some(leaf(&["c"]))).with("e", None))))]
fn parses_documented_examples(#[case] text: &str, #[case] expected: Selector) {
    assert_eq!(Selector::parse(text), expected);
}

#[rstest]
#[case(",a", leaf(&["a"]))]
#[case("a,,b", leaf(&["a", "b"]))]
#[case("a,", leaf(&["a"]))]
#[case(",,,", Selector::new())]
#[case("", Selector::new())]
fn empty_labels_before_commas_are_dropped(#[case] text: &str, #[case] expected: Selector) {
    assert_eq!(Selector::parse(text), expected);
}

#[rstest]
fn empty_group_has_no_keys() {
    assert_eq!(Selector::parse("a[]"), Selector::new().with("a", Some(Selector::new())));
}

#[rstest]
#[case("a[b", Selector::new().with("a", Some(leaf(&["b"]))))]
#[case("a[b[c,d", Selector::new().with("a", Some(Selector::new().with("b", Some(leaf(&["c", "d"]))))))]
#[case("a[", Selector::new().with("a", Some(Selector::new())))]
fn unmatched_open_bracket_runs_to_end(#[case] text: &str, #[case] expected: Selector) {
    assert_eq!(Selector::parse(text), expected);
}

#[rstest]
#[case("a]b,c", leaf(&["a"]))]
#[case("]a", Selector::new())]
#[case("a[b]],c", Selector::new().with("a", Some(leaf(&["b"]))))]
fn stray_close_bracket_ends_outermost_group(#[case] text: &str, #[case] expected: Selector) {
    assert_eq!(Selector::parse(text), expected);
}

#[rstest]
fn whitespace_is_part_of_labels() {
    let selector = Selector::parse(" a , b[ c ]");
    assert_eq!(selector.keys().collect::<Vec<_>>(), [" a ", " b"]);
    assert_eq!(selector.get(" b"), Some(Some(&leaf(&[" c "]))));
}

#[rstest]
fn empty_label_before_bracket_is_kept() {
    let selector = Selector::parse("[x],y");
    assert_eq!(selector, Selector::new().with("", Some(leaf(&["x"]))).with("y", None));
}

#[rstest]
fn label_after_group_is_a_new_key() {
    // `a[b]c` commits `a` at `[` and `c` at end of input.
    assert_eq!(Selector::parse("a[b]c"), Selector::new().with("a", Some(leaf(&["b"]))).with("c", None));
}

#[rstest]
fn trailing_text_after_stray_bracket_does_not_filter() {
    let data = map([("a", 1.into()), ("b", 2.into())]);
    let filtered = TreeFilter::new("a]b").filter(&data).unwrap();
    assert_eq!(filtered, map([("a", 1.into())]));
}
