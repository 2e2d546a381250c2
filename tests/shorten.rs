//! Tests for the two string-budgeting primitives.

use patternlog::fmt::{shorten, shorten_class_name};

const NAME: &str = "com.example.android.MainActivity";

#[test]
fn shorten_zero_widths_are_identity() {
    assert_eq!(shorten("text", 0, 0), "text");
    assert_eq!(shorten("", 0, 0), "");
}

#[test]
fn shorten_positive_count_right_justifies() {
    assert_eq!(shorten("text", 6, 0), "  text");
}

#[test]
fn shorten_negative_count_left_justifies() {
    assert_eq!(shorten("text", -6, 0), "text  ");
}

#[test]
fn shorten_count_smaller_than_input_is_identity() {
    assert_eq!(shorten("text", 3, 0), "text");
    assert_eq!(shorten("text", -3, 0), "text");
    assert_eq!(shorten("text", 4, 0), "text");
}

#[test]
fn shorten_positive_length_keeps_head() {
    assert_eq!(shorten("text", 0, 2), "te");
}

#[test]
fn shorten_negative_length_keeps_tail() {
    assert_eq!(shorten("text", 0, -2), "xt");
}

#[test]
fn shorten_length_larger_than_input_is_identity() {
    assert_eq!(shorten("text", 0, 10), "text");
    assert_eq!(shorten("text", 0, -10), "text");
    assert_eq!(shorten("text", 0, 4), "text");
}

#[test]
fn shorten_truncates_before_padding() {
    assert_eq!(shorten("hello", 7, 3), "    hel");
    assert_eq!(shorten("hello", -7, -3), "llo    ");
}

#[test]
fn shorten_counts_chars_not_bytes() {
    assert_eq!(shorten("héllo", 0, 2), "hé");
    assert_eq!(shorten("héllo", 0, -2), "lo");
    assert_eq!(shorten("hé", 4, 0), "  hé");
}

#[test]
fn shorten_extreme_length_is_identity() {
    assert_eq!(shorten("text", 0, i32::MIN), "text");
    assert_eq!(shorten("text", 0, i32::MAX), "text");
}

#[test]
fn class_name_zero_args_is_identity() {
    assert_eq!(shorten_class_name(NAME, 0, 0), NAME);
}

#[test]
fn class_name_positive_count_keeps_leading_segments() {
    assert_eq!(shorten_class_name(NAME, 3, 0), "com.example.android");
    assert_eq!(shorten_class_name(NAME, 1, 0), "com");
}

#[test]
fn class_name_count_beyond_segments_is_identity() {
    assert_eq!(shorten_class_name(NAME, 4, 0), NAME);
    assert_eq!(shorten_class_name(NAME, 100, 0), NAME);
}

#[test]
fn class_name_negative_count_drops_leading_segments() {
    assert_eq!(shorten_class_name(NAME, -1, 0), "example.android.MainActivity");
    assert_eq!(shorten_class_name(NAME, -3, 0), "MainActivity");
}

#[test]
fn class_name_overly_negative_count_keeps_final_segment() {
    assert_eq!(shorten_class_name(NAME, -4, 0), "MainActivity");
    assert_eq!(shorten_class_name(NAME, -100, 0), "MainActivity");
    assert_eq!(shorten_class_name(NAME, i32::MIN, 0), "MainActivity");
}

#[test]
fn class_name_positive_budget_stars_the_tail() {
    assert_eq!(shorten_class_name(NAME, 0, 30), "com.example.android.*");
    assert_eq!(shorten_class_name(NAME, 0, 15), "com.example.*");
    assert_eq!(shorten_class_name(NAME, 0, 1), "com.*");
}

#[test]
fn class_name_negative_budget_stars_the_head() {
    assert_eq!(shorten_class_name(NAME, 0, -25), "*.android.MainActivity");
    assert_eq!(shorten_class_name(NAME, 0, -1), "*.MainActivity");
}

#[test]
fn class_name_budget_covering_whole_name_is_identity() {
    assert_eq!(shorten_class_name(NAME, 0, 33), NAME);
    assert_eq!(shorten_class_name(NAME, 0, -33), NAME);
    assert_eq!(shorten_class_name(NAME, 0, i32::MAX), NAME);
    assert_eq!(shorten_class_name(NAME, 0, i32::MIN), NAME);
}

#[test]
fn class_name_collapse_then_budget() {
    assert_eq!(shorten_class_name(NAME, 3, -18), "*.example.android");
}

#[test]
fn class_name_star_replaces_whole_segments_only() {
    // the surviving segment is never split, even when it alone overflows
    assert_eq!(
        shorten_class_name("com.example.android.MainActivity$SubClass", -3, -10),
        "MainActivity$SubClass"
    );
}

#[test]
fn class_name_dotless_input_ignores_budget() {
    assert_eq!(shorten_class_name("MainActivity", 0, 5), "MainActivity");
    assert_eq!(shorten_class_name("MainActivity", 0, -5), "MainActivity");
    assert_eq!(shorten_class_name("MainActivity", 2, 0), "MainActivity");
}

#[test]
fn class_name_consecutive_dots() {
    assert_eq!(shorten_class_name("com...Logger", 0, -9), "*..Logger");
}

#[test]
fn class_name_two_segments_negative_budget() {
    assert_eq!(shorten_class_name("ab.cd", 0, -4), "*.cd");
}

#[test]
fn class_name_empty_input() {
    assert_eq!(shorten_class_name("", 0, 0), "");
    assert_eq!(shorten_class_name("", 3, 10), "");
}
